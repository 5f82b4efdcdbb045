//! Staged roadmap generation.
//!
//! Four stages run in sequence, each one retry loop with its role's checks:
//! domain analysis, roadmap outline, learning resources, practice
//! activities. A final assembly step folds the stage outputs into one
//! markdown document. Stage outputs live in explicit typed fields, not a
//! keyed state map. An exhausted stage keeps its best-effort output so the
//! pipeline degrades gracefully instead of producing nothing.

pub mod request;

pub use request::{ExperienceLevel, LearningStyle, RoadmapRequest};

use chrono::Utc;
use serde_json::{Value, json};

use crate::config::{LlmConfig, PlanningConfig};
use crate::error::Result;
use crate::prompt::{ModelTier, PromptRenderer, Role};
use crate::runner::{GenerationRequest, Generator, LoopOutcome, RetryController, RetryPolicy};

/// Stage outputs, filled as the pipeline advances
#[derive(Debug, Clone, Default)]
pub struct RoadmapState {
    pub domain_analysis: Option<String>,
    pub roadmap_outline: Option<String>,
    pub learning_resources: Option<String>,
    pub practice_activities: Option<String>,
    pub final_roadmap: Option<String>,
}

impl RoadmapState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Summary of one stage's loop for display and logging
#[derive(Debug, Clone)]
pub struct StageReport {
    pub role: Role,
    pub rounds_used: u32,
    pub exhausted: bool,
    /// Outstanding issues when the stage exhausted its budget
    pub issues: Vec<String>,
}

impl StageReport {
    fn from_outcome(role: Role, outcome: &LoopOutcome) -> Self {
        Self {
            role,
            rounds_used: outcome.rounds_used,
            exhausted: outcome.exhausted,
            issues: outcome.result.issues.clone(),
        }
    }
}

/// Runs the staged generation against any Generator
pub struct RoadmapPipeline<G> {
    generator: G,
    renderer: PromptRenderer,
    llm: LlmConfig,
    planning: PlanningConfig,
}

impl<G: Generator> RoadmapPipeline<G> {
    pub fn new(generator: G, llm: LlmConfig, planning: PlanningConfig) -> Self {
        Self {
            generator,
            renderer: PromptRenderer::new(),
            llm,
            planning,
        }
    }

    fn model_for(&self, tier: ModelTier) -> &str {
        match tier {
            ModelTier::Worker => &self.llm.worker_model,
            ModelTier::Critic => &self.llm.critic_model,
        }
    }

    fn policy_for(&self, role: Role) -> RetryPolicy {
        let max_rounds = if role.checks().is_some() {
            self.planning.max_rounds
        } else {
            role.max_rounds()
        };
        RetryPolicy::new(max_rounds)
            .with_feedback(self.planning.feed_issues_forward)
            .with_history(self.planning.keep_history)
    }

    /// Template context: the request fields plus whatever stages have run
    fn context(&self, request: &RoadmapRequest, state: &RoadmapState) -> Value {
        json!({
            "domain": request.domain,
            "experience_level": request.experience_level.as_str(),
            "learning_style": request.learning_style.as_str(),
            "hours_per_day": request.hours_per_day,
            "weeks": request.weeks,
            "current_date": Utc::now().format("%Y-%m-%d").to_string(),
            "domain_analysis": state.domain_analysis.as_deref().unwrap_or(""),
            "roadmap_outline": state.roadmap_outline.as_deref().unwrap_or(""),
            "learning_resources": state.learning_resources.as_deref().unwrap_or(""),
        })
    }

    /// Run one role through its retry loop
    async fn run_stage(&self, role: Role, request: &RoadmapRequest, state: &RoadmapState) -> Result<LoopOutcome> {
        let instruction = self.renderer.render_json(role.instruction(), &self.context(request, state))?;
        let generation = GenerationRequest::new(instruction, role.task())
            .with_model(self.model_for(role.tier()).to_string());

        log::info!("running stage '{}'", role.name());

        match role.checks() {
            Some(checks) => {
                let controller = RetryController::new(self.policy_for(role));
                controller.run(&self.generator, &checks, generation).await
            }
            None => {
                // No quality bar for this stage; one round, accepted as-is
                let artifact = self.generator.generate(&generation).await?;
                Ok(LoopOutcome {
                    artifact,
                    result: crate::validation::ValidationResult::pass(),
                    rounds_used: 1,
                    exhausted: false,
                    history: Vec::new(),
                })
            }
        }
    }

    /// Run the full pipeline: analysis, outline, resources, practice,
    /// then assembly. Returns the state and a per-stage report.
    pub async fn run(&self, request: &RoadmapRequest) -> Result<(RoadmapState, Vec<StageReport>)> {
        let mut state = RoadmapState::new();
        let mut reports = Vec::new();

        let analysis = self.run_stage(Role::DomainResearcher, request, &state).await?;
        reports.push(StageReport::from_outcome(Role::DomainResearcher, &analysis));
        state.domain_analysis = Some(analysis.artifact);

        let outline = self.run_stage(Role::RoadmapPlanner, request, &state).await?;
        reports.push(StageReport::from_outcome(Role::RoadmapPlanner, &outline));
        state.roadmap_outline = Some(outline.artifact);

        let resources = self.run_stage(Role::ResourceCurator, request, &state).await?;
        reports.push(StageReport::from_outcome(Role::ResourceCurator, &resources));
        state.learning_resources = Some(resources.artifact);

        let practice = self.run_stage(Role::PracticeAdvisor, request, &state).await?;
        reports.push(StageReport::from_outcome(Role::PracticeAdvisor, &practice));
        state.practice_activities = Some(practice.artifact);

        state.final_roadmap = Some(self.assemble(request, &state));

        Ok((state, reports))
    }

    /// Revise an existing roadmap from user feedback via the editor role
    pub async fn revise(&self, roadmap: &str, feedback: &str) -> Result<LoopOutcome> {
        let role = Role::RoadmapEditor;
        let context = json!({
            "roadmap": roadmap,
            "feedback": feedback,
            "current_date": Utc::now().format("%Y-%m-%d").to_string(),
        });
        let instruction = self.renderer.render_json(role.instruction(), &context)?;
        let generation = GenerationRequest::new(instruction, role.task())
            .with_model(self.model_for(role.tier()).to_string());

        let checks = role
            .checks()
            .unwrap_or_else(crate::validation::CheckList::roadmap_outline);
        let controller = RetryController::new(self.policy_for(role));
        controller.run(&self.generator, &checks, generation).await
    }

    /// Fold the stage outputs into one markdown document
    fn assemble(&self, request: &RoadmapRequest, state: &RoadmapState) -> String {
        let mut document = format!(
            "# {} Study Roadmap ({} weeks)\n\n_{} learner, {} style, {} hours/day._\n\n",
            request.domain,
            request.weeks,
            request.experience_level.as_str(),
            request.learning_style.as_str(),
            request.hours_per_day,
        );

        if let Some(outline) = &state.roadmap_outline {
            document.push_str(outline);
            document.push_str("\n\n");
        }
        if let Some(resources) = &state.learning_resources {
            document.push_str("## Learning Resources\n\n");
            document.push_str(resources);
            document.push_str("\n\n");
        }
        if let Some(practice) = &state.practice_activities {
            document.push_str("## Practice Activities\n\n");
            document.push_str(practice);
            document.push_str("\n\n");
        }
        if let Some(analysis) = &state.domain_analysis {
            document.push_str("## Appendix: Domain Analysis\n\n");
            document.push_str(analysis);
            document.push('\n');
        }

        document
    }
}
