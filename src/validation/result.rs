//! Pass/fail verdict for a generated artifact.
//!
//! The constructors keep the core invariant intact: `issues` is empty
//! exactly when `passed` is true.

/// Result of running a check list against an artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether all checks passed
    pub passed: bool,
    /// Human-readable descriptions of every failing check
    pub issues: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result
    pub fn pass() -> Self {
        Self {
            passed: true,
            issues: Vec::new(),
        }
    }

    /// Create a failing result with a single issue
    pub fn fail(issue: impl Into<String>) -> Self {
        Self {
            passed: false,
            issues: vec![issue.into()],
        }
    }

    /// Build a result from collected issues: empty means pass
    pub fn from_issues(issues: Vec<String>) -> Self {
        Self {
            passed: issues.is_empty(),
            issues,
        }
    }

    /// Add an issue, flipping the result to failed
    pub fn add_issue(&mut self, issue: impl Into<String>) {
        self.issues.push(issue.into());
        self.passed = false;
    }

    /// Merge another result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        if !other.passed {
            self.passed = false;
        }
        self.issues.extend(other.issues);
    }

    /// Number of failing checks
    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    /// Issues joined into one line for display and logging
    pub fn summary(&self) -> String {
        self.issues.join(", ")
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::pass()
    }
}
