//! Bounded generate-and-validate retry loop.
//!
//! The controller runs up to `max_rounds` rounds of generate-then-check,
//! stopping on the first pass. Exhausting the budget is a normal outcome
//! carried in the returned value, not an error; only a failure of the
//! generation capability itself aborts the loop.

use chrono::{DateTime, Utc};

use crate::error::{Result, RoadmaprError};
use crate::runner::generator::{GenerationRequest, Generator};
use crate::validation::{CheckList, ValidationResult};

/// Policy knobs for one retry loop
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum generate-then-check rounds (must be >= 1)
    pub max_rounds: u32,

    /// Fold a failed round's issues into the next round's request
    pub feed_issues_forward: bool,

    /// Retain a RoundRecord per failed round in the outcome
    pub keep_history: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_rounds: 3,
            feed_issues_forward: true,
            keep_history: false,
        }
    }
}

impl RetryPolicy {
    /// Create a policy with the given round budget
    pub fn new(max_rounds: u32) -> Self {
        Self {
            max_rounds,
            ..Default::default()
        }
    }

    /// Toggle issue feedback into subsequent rounds
    pub fn with_feedback(mut self, enabled: bool) -> Self {
        self.feed_issues_forward = enabled;
        self
    }

    /// Toggle per-round history retention
    pub fn with_history(mut self, enabled: bool) -> Self {
        self.keep_history = enabled;
        self
    }
}

/// One failed round, retained for diagnostics when history is enabled
#[derive(Debug, Clone)]
pub struct RoundRecord {
    /// Round number, 1-indexed
    pub round: u32,
    /// The artifact that round produced
    pub artifact: String,
    /// Why it failed
    pub result: ValidationResult,
    /// When the round finished
    pub at: DateTime<Utc>,
}

/// Final state of a retry loop
#[derive(Debug, Clone)]
pub struct LoopOutcome {
    /// The last artifact produced (passing, or best-effort on exhaustion)
    pub artifact: String,
    /// The validation result for that artifact
    pub result: ValidationResult,
    /// Rounds actually consumed
    pub rounds_used: u32,
    /// True when the budget ran out without a pass
    pub exhausted: bool,
    /// Failed-round records, empty unless history was requested
    pub history: Vec<RoundRecord>,
}

impl LoopOutcome {
    /// Whether the final artifact passed validation
    pub fn passed(&self) -> bool {
        self.result.passed
    }
}

/// Receives (round, issues) pairs for observability. Implementations must
/// not affect control flow.
pub trait DiagnosticsSink: Send + Sync {
    fn round_failed(&self, round: u32, issues: &[String]);
}

/// Sink that discards everything
pub struct NoOpSink;

impl DiagnosticsSink for NoOpSink {
    fn round_failed(&self, _round: u32, _issues: &[String]) {}
}

/// Sink that reports failed rounds through the log crate
pub struct LogSink;

impl DiagnosticsSink for LogSink {
    fn round_failed(&self, round: u32, issues: &[String]) {
        log::warn!("round {} failed validation: {}", round, issues.join(", "));
    }
}

/// Drives generate-then-check rounds until a pass or exhaustion
pub struct RetryController {
    policy: RetryPolicy,
    sink: Box<dyn DiagnosticsSink>,
}

impl Default for RetryController {
    fn default() -> Self {
        Self::new(RetryPolicy::default())
    }
}

impl RetryController {
    /// Create a controller with the given policy, logging failed rounds
    pub fn new(policy: RetryPolicy) -> Self {
        Self {
            policy,
            sink: Box::new(LogSink),
        }
    }

    /// Replace the diagnostics sink
    pub fn with_sink(mut self, sink: Box<dyn DiagnosticsSink>) -> Self {
        self.sink = sink;
        self
    }

    /// The policy this controller runs with
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Run the loop: generate, check, retry until a pass or the round
    /// budget is gone. Generator failures propagate immediately and do not
    /// consume budget.
    pub async fn run<G: Generator + ?Sized>(
        &self,
        generator: &G,
        checks: &CheckList,
        request: GenerationRequest,
    ) -> Result<LoopOutcome> {
        if self.policy.max_rounds < 1 {
            return Err(RoadmaprError::Configuration(format!(
                "max_rounds must be >= 1, got {}",
                self.policy.max_rounds
            )));
        }
        checks.ensure_valid()?;

        let mut request = request;
        let mut history = Vec::new();
        let mut round = 0;

        loop {
            round += 1;
            request.round = round;

            let artifact = generator.generate(&request).await?;
            let result = checks.run(Some(&artifact));

            if result.passed {
                log::info!("'{}' passed validation on round {}", checks.description(), round);
                return Ok(LoopOutcome {
                    artifact,
                    result,
                    rounds_used: round,
                    exhausted: false,
                    history,
                });
            }

            self.sink.round_failed(round, &result.issues);

            if self.policy.keep_history {
                history.push(RoundRecord {
                    round,
                    artifact: artifact.clone(),
                    result: result.clone(),
                    at: Utc::now(),
                });
            }

            if round >= self.policy.max_rounds {
                log::warn!(
                    "'{}' exhausted {} rounds, returning last artifact",
                    checks.description(),
                    round
                );
                return Ok(LoopOutcome {
                    artifact,
                    result,
                    rounds_used: round,
                    exhausted: true,
                    history,
                });
            }

            if self.policy.feed_issues_forward {
                request.add_feedback(round, &result.issues);
            }
        }
    }
}
