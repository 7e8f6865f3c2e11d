// Report module - runner lifecycle contract and the Xray reporter

pub mod xray;

pub use xray::{ExecutionMeta, ScenarioResult, XrayReporter};

use crate::status::Status;

/// A feature as announced by the runner.
#[derive(Debug, Clone, Default)]
pub struct FeatureEvent {
    pub name: String,
    /// Description lines, possibly empty.
    pub description: Vec<String>,
    pub tags: Vec<String>,
}

/// A scenario snapshot.
///
/// The runner passes a fresh snapshot with every step result, so `status`
/// reflects the scenario's overall status at that point in the run.
#[derive(Debug, Clone, Default)]
pub struct ScenarioEvent {
    pub name: String,
    pub tags: Vec<String>,
    /// True for a data-driven outline (one start per example row).
    pub is_outline: bool,
    pub status: Status,
    /// Reason given when the scenario was skipped.
    pub skip_reason: String,
}

/// Outcome of one executed step.
#[derive(Debug, Clone, Default)]
pub struct StepEvent {
    pub name: String,
    pub status: Status,
    pub error_message: Option<String>,
}

/// The per-step verdict derived from a step result and its scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub status: Status,
    pub message: String,
}

/// Reporter trait: the callbacks a test runner drives, in lifecycle order.
pub trait Reporter {
    /// Called when a feature starts.
    fn on_feature_start(&mut self, feature: &FeatureEvent);

    /// Called when a scenario, or one example row of an outline, starts.
    fn on_scenario_start(&mut self, scenario: &ScenarioEvent);

    /// Called with each step result, together with a current snapshot of
    /// the enclosing scenario.
    fn on_step_result(&mut self, step: &StepEvent, scenario: &ScenarioEvent);

    /// Called once the run is finished.
    fn on_run_end(&mut self);
}
