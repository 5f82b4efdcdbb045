//! Role catalog: one generation persona per pipeline stage.
//!
//! A role bundles an instruction template, the model tier it runs on, the
//! check list its output must satisfy, and its round budget. Roles are
//! configuration values; the pipeline decides when each one runs.

use crate::validation::CheckList;

/// Model tier a role runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelTier {
    /// Cheaper model for research and curation
    Worker,
    /// Stronger model for planning and revision
    Critic,
}

impl ModelTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelTier::Worker => "worker",
            ModelTier::Critic => "critic",
        }
    }
}

/// The five generation personas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    DomainResearcher,
    RoadmapPlanner,
    ResourceCurator,
    PracticeAdvisor,
    RoadmapEditor,
}

const DOMAIN_RESEARCHER_INSTRUCTION: &str = "\
You are a job market analyst specializing in technology and professional roles.

Research the target job domain and identify:
1. Core Technical Skills: the technologies, languages, frameworks, and tools
   recent job postings ask for
2. Essential Concepts: fundamental knowledge areas candidates must understand
3. Current Trends: emerging tools or practices gaining traction
4. Entry-Level Requirements: what entry positions typically expect
5. Interview Focus Areas: common interview question categories
6. Learning Priority: a ranked list of what to learn first

Target domain: {{domain}}
Candidate experience level: {{experience_level}}
Current date: {{current_date}}

Output a structured markdown analysis with a section for each of the six
areas above. Prioritize information from the last 6-12 months.";

const ROADMAP_PLANNER_INSTRUCTION: &str = "\
You are an expert instructional designer and career coach.

Create a comprehensive {{weeks}}-week study roadmap based on:
- Domain analysis:
{{domain_analysis}}
- Experience level: {{experience_level}}
- Daily time commitment: {{hours_per_day}} hours
- Learning style preference: {{learning_style}}

Requirements:
- Give each week a theme and a clear objective
- Break every week into daily entries (at least 4-5 days per week), each an
  achievable chunk for the stated time commitment
- Balance learning new material with practice and regular review
- Keep a logical progression; do not break topic dependencies

Current date: {{current_date}}

Output the complete {{weeks}}-week roadmap in detailed markdown.";

const RESOURCE_CURATOR_INSTRUCTION: &str = "\
You are a learning resource curator with expertise in educational content.

Find high-quality, current learning resources for each topic in the roadmap
below, matching the user's preferred style ({{learning_style}}): videos,
articles, courses, or a mix. Favor free, reputable sources.

Roadmap:
{{roadmap_outline}}

Current date: {{current_date}}

Output detailed markdown with clickable links, grouped by week. Include a
variety of resource types.";

const PRACTICE_ADVISOR_INSTRUCTION: &str = "\
You are a hands-on learning specialist and project mentor.

Recommend practical projects and exercises that reinforce each week of the
roadmap below: small daily exercises, one weekend project per week, and
relevant practice platforms for {{domain}}.

Roadmap:
{{roadmap_outline}}

Output detailed practice recommendations in markdown, grouped by week.";

const ROADMAP_EDITOR_INSTRUCTION: &str = "\
You are an experienced career coach and educational consultant.

Revise the study roadmap below according to the user's feedback. Common
adjustments: pacing (compress or stretch topics), focus (expand or drop
areas), difficulty (add prerequisites or advanced depth), resource style,
and time constraints.

Editing principles:
- Keep the overall week structure unless the feedback asks otherwise
- Keep a logical topic progression
- Keep each day achievable
- Summarize what changed and why at the top under '## Changes Made'

Current roadmap:
{{roadmap}}

User feedback:
{{feedback}}

Output the full revised roadmap in the same detailed markdown format.";

impl Role {
    /// All roles, in pipeline order (the editor runs on demand)
    pub fn all() -> [Role; 5] {
        [
            Role::DomainResearcher,
            Role::RoadmapPlanner,
            Role::ResourceCurator,
            Role::PracticeAdvisor,
            Role::RoadmapEditor,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Role::DomainResearcher => "domain_researcher",
            Role::RoadmapPlanner => "roadmap_planner",
            Role::ResourceCurator => "resource_curator",
            Role::PracticeAdvisor => "practice_advisor",
            Role::RoadmapEditor => "roadmap_editor",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Role::DomainResearcher => "researches job market requirements for the target domain",
            Role::RoadmapPlanner => "creates the weekly roadmap with daily objectives",
            Role::ResourceCurator => "finds learning resources matching the user's style",
            Role::PracticeAdvisor => "recommends projects and exercises per week",
            Role::RoadmapEditor => "revises the roadmap from user feedback",
        }
    }

    /// Which model tier this role runs on
    pub fn tier(&self) -> ModelTier {
        match self {
            Role::RoadmapPlanner | Role::RoadmapEditor => ModelTier::Critic,
            _ => ModelTier::Worker,
        }
    }

    /// Instruction template for this role (Handlebars)
    pub fn instruction(&self) -> &'static str {
        match self {
            Role::DomainResearcher => DOMAIN_RESEARCHER_INSTRUCTION,
            Role::RoadmapPlanner => ROADMAP_PLANNER_INSTRUCTION,
            Role::ResourceCurator => RESOURCE_CURATOR_INSTRUCTION,
            Role::PracticeAdvisor => PRACTICE_ADVISOR_INSTRUCTION,
            Role::RoadmapEditor => ROADMAP_EDITOR_INSTRUCTION,
        }
    }

    /// The checks this role's output must satisfy, if any
    pub fn checks(&self) -> Option<CheckList> {
        match self {
            Role::DomainResearcher => Some(CheckList::domain_analysis()),
            Role::RoadmapPlanner | Role::RoadmapEditor => Some(CheckList::roadmap_outline()),
            Role::ResourceCurator => Some(CheckList::learning_resources()),
            Role::PracticeAdvisor => None,
        }
    }

    /// Round budget for this role's loop
    pub fn max_rounds(&self) -> u32 {
        match self.checks() {
            Some(_) => 3,
            None => 1,
        }
    }

    /// One-line task given as the user message for this role
    pub fn task(&self) -> &'static str {
        match self {
            Role::DomainResearcher => "Analyze the current job market for the target domain.",
            Role::RoadmapPlanner => "Create the full study roadmap.",
            Role::ResourceCurator => "Curate learning resources for every roadmap topic.",
            Role::PracticeAdvisor => "Recommend practice projects and exercises for every week.",
            Role::RoadmapEditor => "Revise the roadmap according to the feedback.",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
