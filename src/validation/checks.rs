//! Heuristic quality checks for generated documents.
//!
//! A `CheckList` is one configurable validator: length thresholds, keyword
//! occurrence counts, required terms, one-of term groups, and literal
//! substrings. The checks are text heuristics (raw substring counting), not
//! a markdown parser. Running a check list is pure and deterministic: no IO,
//! no clock, no randomness.

use crate::error::{Result, RoadmaprError};
use crate::validation::result::ValidationResult;

/// A configurable set of heuristic checks against one artifact
#[derive(Debug, Clone, Default)]
pub struct CheckList {
    /// What this check list validates, for logs and CLI output
    description: String,
    /// Minimum artifact length in bytes (0 disables the check)
    min_length: usize,
    /// Case-insensitive keyword -> minimum occurrence count
    keyword_counts: Vec<(String, usize)>,
    /// Terms that must appear at least once, case-insensitive
    required_terms: Vec<String>,
    /// Groups where at least one term per group must appear, case-insensitive
    any_of_terms: Vec<Vec<String>>,
    /// Literal substrings that must appear, case-sensitive
    required_substrings: Vec<String>,
}

impl CheckList {
    /// Create an empty check list with a description
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Default::default()
        }
    }

    /// Require the artifact to be at least `min` bytes long
    pub fn with_min_length(mut self, min: usize) -> Self {
        self.min_length = min;
        self
    }

    /// Require `keyword` to occur at least `count` times, case-insensitive
    pub fn require_keyword(mut self, keyword: impl Into<String>, count: usize) -> Self {
        self.keyword_counts.push((keyword.into(), count));
        self
    }

    /// Require `term` to appear at least once, case-insensitive
    pub fn require_term(mut self, term: impl Into<String>) -> Self {
        self.required_terms.push(term.into());
        self
    }

    /// Require at least one of `terms` to appear, case-insensitive
    pub fn require_any_of(mut self, terms: &[&str]) -> Self {
        self.any_of_terms.push(terms.iter().map(|t| t.to_string()).collect());
        self
    }

    /// Require `substring` to appear literally, case-sensitive
    pub fn require_substring(mut self, substring: impl Into<String>) -> Self {
        self.required_substrings.push(substring.into());
        self
    }

    /// Checks for a multi-week roadmap outline: substantial length, a weekly
    /// and daily structure, and the core planning vocabulary.
    pub fn roadmap_outline() -> Self {
        Self::new("roadmap outline")
            .with_min_length(500)
            .require_keyword("week", 4)
            .require_keyword("day", 15)
            .require_term("objective")
            .require_term("learning")
            .require_term("practice")
    }

    /// Checks for curated learning resources: enough content, actual links,
    /// and some variety in resource types.
    pub fn learning_resources() -> Self {
        Self::new("learning resources")
            .with_min_length(300)
            .require_substring("http")
            .require_any_of(&["video", "article", "course"])
    }

    /// Checks for a domain analysis: coverage of the sections a job-market
    /// breakdown needs.
    pub fn domain_analysis() -> Self {
        Self::new("domain analysis")
            .with_min_length(400)
            .require_term("skills")
            .require_term("concepts")
            .require_term("interview")
            .require_term("requirements")
    }

    /// Description of what this check list validates
    pub fn description(&self) -> &str {
        &self.description
    }

    /// True if no checks are configured
    pub fn is_empty(&self) -> bool {
        self.min_length == 0
            && self.keyword_counts.is_empty()
            && self.required_terms.is_empty()
            && self.any_of_terms.is_empty()
            && self.required_substrings.is_empty()
    }

    /// Reject an unusable configuration before any round runs
    pub fn ensure_valid(&self) -> Result<()> {
        if self.is_empty() {
            return Err(RoadmaprError::Configuration(format!(
                "check list '{}' has no checks configured",
                self.description
            )));
        }
        Ok(())
    }

    /// Run every check against the artifact. All failing checks contribute
    /// to the issue list; nothing short-circuits, so callers see the full
    /// picture when deciding how to revise.
    pub fn run(&self, artifact: Option<&str>) -> ValidationResult {
        let content = match artifact {
            Some(c) if !c.is_empty() => c,
            _ => return ValidationResult::fail("missing artifact"),
        };

        let lowered = content.to_lowercase();
        let mut issues = Vec::new();

        if self.min_length > 0 && content.len() < self.min_length {
            issues.push(format!(
                "content too short: {} chars (minimum {})",
                content.len(),
                self.min_length
            ));
        }

        for (keyword, want) in &self.keyword_counts {
            let found = count_occurrences(&lowered, keyword);
            if found < *want {
                issues.push(format!(
                    "expected {} occurrences of '{}', found {}",
                    want, keyword, found
                ));
            }
        }

        let missing_terms: Vec<&str> = self
            .required_terms
            .iter()
            .filter(|term| !lowered.contains(&term.to_lowercase()))
            .map(|term| term.as_str())
            .collect();
        if !missing_terms.is_empty() {
            issues.push(format!("missing required terms: {}", missing_terms.join(", ")));
        }

        for group in &self.any_of_terms {
            let any_present = group.iter().any(|term| lowered.contains(&term.to_lowercase()));
            if !any_present {
                issues.push(format!("expected at least one of: {}", group.join(", ")));
            }
        }

        for substring in &self.required_substrings {
            if !content.contains(substring.as_str()) {
                issues.push(format!("no occurrences of '{}' found", substring));
            }
        }

        ValidationResult::from_issues(issues)
    }
}

/// Non-overlapping occurrence count of `needle` in already-lowercased text
fn count_occurrences(lowered: &str, needle: &str) -> usize {
    let needle = needle.to_lowercase();
    if needle.is_empty() {
        return 0;
    }
    lowered.matches(needle.as_str()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passing_roadmap() -> String {
        let mut content = String::from("# Study Roadmap\n\n");
        for week in 1..=4 {
            content.push_str(&format!("## Week {}\n\nObjective: learning by practice.\n", week));
            for day in 1..=4 {
                content.push_str(&format!("- Day {}: work through the material\n", day));
            }
        }
        // Pad past the length threshold
        while content.len() < 600 {
            content.push_str("Review the previous material and take notes on gaps.\n");
        }
        content
    }

    #[test]
    fn test_count_occurrences() {
        assert_eq!(count_occurrences("week week week", "week"), 3);
        assert_eq!(count_occurrences("weekday", "week"), 1);
        assert_eq!(count_occurrences("nothing here", "week"), 0);
        assert_eq!(count_occurrences("text", ""), 0);
    }

    #[test]
    fn test_missing_artifact() {
        let checks = CheckList::roadmap_outline();
        let result = checks.run(None);
        assert!(!result.passed);
        assert_eq!(result.issues, vec!["missing artifact".to_string()]);
    }

    #[test]
    fn test_empty_artifact_reports_missing() {
        let checks = CheckList::roadmap_outline();
        let result = checks.run(Some(""));
        assert!(!result.passed);
        assert_eq!(result.issues, vec!["missing artifact".to_string()]);
    }

    #[test]
    fn test_roadmap_outline_passes() {
        let checks = CheckList::roadmap_outline();
        let result = checks.run(Some(&passing_roadmap()));
        assert!(result.passed, "unexpected issues: {:?}", result.issues);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_keyword_count_issue_message() {
        let checks = CheckList::new("outline").require_keyword("week", 4);
        let result = checks.run(Some("week one, then week two, done"));
        assert!(!result.passed);
        assert_eq!(result.issues, vec!["expected 4 occurrences of 'week', found 2".to_string()]);
    }

    #[test]
    fn test_keyword_count_case_insensitive() {
        let checks = CheckList::new("outline").require_keyword("week", 3);
        let result = checks.run(Some("Week 1. WEEK 2. week 3."));
        assert!(result.passed);
    }

    #[test]
    fn test_keyword_counts_inside_words() {
        // Raw substring heuristic: "weekday" and "midweek" both count
        let checks = CheckList::new("outline").require_keyword("week", 2);
        let result = checks.run(Some("a weekday in midweek"));
        assert!(result.passed);
    }

    #[test]
    fn test_min_length_failure() {
        let checks = CheckList::new("outline").with_min_length(500);
        let result = checks.run(Some("short"));
        assert!(!result.passed);
        assert!(result.issues[0].contains("too short"));
        assert!(result.issues[0].contains("minimum 500"));
    }

    #[test]
    fn test_missing_terms_aggregated() {
        let checks = CheckList::new("outline")
            .require_term("objective")
            .require_term("practice");
        let result = checks.run(Some("nothing relevant in here at all"));
        assert!(!result.passed);
        assert_eq!(result.issues, vec!["missing required terms: objective, practice".to_string()]);
    }

    #[test]
    fn test_terms_case_insensitive() {
        let checks = CheckList::new("outline").require_term("objective");
        let result = checks.run(Some("OBJECTIVE: pass the interview"));
        assert!(result.passed);
    }

    #[test]
    fn test_any_of_group() {
        let checks = CheckList::new("resources").require_any_of(&["video", "article", "course"]);

        let with_video = checks.run(Some("watch this video series"));
        assert!(with_video.passed);

        let with_none = checks.run(Some("some links to things"));
        assert!(!with_none.passed);
        assert_eq!(
            with_none.issues,
            vec!["expected at least one of: video, article, course".to_string()]
        );
    }

    #[test]
    fn test_substring_case_sensitive() {
        let checks = CheckList::new("resources").require_substring("http");

        assert!(checks.run(Some("see https://example.com")).passed);
        assert!(!checks.run(Some("see HTTP://EXAMPLE.COM")).passed);
    }

    #[test]
    fn test_all_failures_reported() {
        let checks = CheckList::new("outline")
            .with_min_length(500)
            .require_keyword("week", 4)
            .require_term("objective")
            .require_substring("http");
        let result = checks.run(Some("just a stub"));
        assert!(!result.passed);
        // No short-circuit: every failing check shows up
        assert_eq!(result.issue_count(), 4);
    }

    #[test]
    fn test_run_is_deterministic() {
        let checks = CheckList::roadmap_outline();
        let artifact = "week week day objective";
        let first = checks.run(Some(artifact));
        let second = checks.run(Some(artifact));
        assert_eq!(first, second);
    }

    #[test]
    fn test_learning_resources_preset() {
        let checks = CheckList::learning_resources();
        let mut content = String::from("Curated links:\n- https://example.com/course intro course\n");
        while content.len() < 350 {
            content.push_str("- https://example.com/more material worth reading\n");
        }
        let result = checks.run(Some(&content));
        assert!(result.passed, "unexpected issues: {:?}", result.issues);

        let no_links = checks.run(Some(&"a long description without any links at all ".repeat(10)));
        assert!(!no_links.passed);
        assert!(no_links.issues.iter().any(|i| i.contains("'http'")));
    }

    #[test]
    fn test_domain_analysis_preset() {
        let checks = CheckList::domain_analysis();
        let mut content = String::from(
            "Core skills and concepts for the role, common interview topics, entry requirements.\n",
        );
        while content.len() < 450 {
            content.push_str("More detail on the skills employers currently want.\n");
        }
        let result = checks.run(Some(&content));
        assert!(result.passed, "unexpected issues: {:?}", result.issues);
    }

    #[test]
    fn test_domain_analysis_missing_sections() {
        let checks = CheckList::domain_analysis();
        let content = "skills and concepts only ".repeat(30);
        let result = checks.run(Some(&content));
        assert!(!result.passed);
        assert!(
            result
                .issues
                .iter()
                .any(|i| i.contains("interview") && i.contains("requirements"))
        );
    }

    #[test]
    fn test_is_empty_and_ensure_valid() {
        let empty = CheckList::new("empty");
        assert!(empty.is_empty());
        assert!(empty.ensure_valid().is_err());

        let configured = CheckList::new("ok").with_min_length(1);
        assert!(!configured.is_empty());
        assert!(configured.ensure_valid().is_ok());
    }

    #[test]
    fn test_description() {
        assert_eq!(CheckList::roadmap_outline().description(), "roadmap outline");
        assert_eq!(CheckList::learning_resources().description(), "learning resources");
        assert_eq!(CheckList::domain_analysis().description(), "domain analysis");
    }
}
