// Xray reporter - collects runner events and publishes one test execution
// per run

use std::fs::File;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, error};

use crate::error::XrayError;
use crate::evidence::Evidence;
use crate::hooks::ResultHook;
use crate::model::{Deployment, TestCase, TestExecution, XrayStatus};
use crate::publisher::XrayPublisher;
use crate::report::{FeatureEvent, Reporter, ScenarioEvent, StepEvent, Verdict};
use crate::status::{Status, overall_status};
use crate::tag;

/// Accumulating result of one tagged scenario, keyed by its test case key.
#[derive(Debug, Clone, Default)]
pub struct ScenarioResult {
    /// One entry per verdict; outlines collect one entry per example row.
    pub statuses: Vec<Status>,
    pub comment: String,
    pub is_outline: bool,
    pub evidences: Vec<Evidence>,
}

/// Execution-level metadata the embedding runner may provide.
#[derive(Debug, Clone, Default)]
pub struct ExecutionMeta {
    pub summary: String,
    pub user: String,
    pub revision: String,
    pub version: String,
}

/// Listens to the runner lifecycle, aggregates statuses per test case key
/// and publishes one test execution per run.
pub struct XrayReporter {
    publisher: XrayPublisher,
    meta: ExecutionMeta,
    dry_run: bool,
    report_path: Option<PathBuf>,
    hooks: Vec<Box<dyn ResultHook>>,
    execution: TestExecution,
    current_test_key: Option<String>,
    // Accumulators in first-seen order, so the payload lists test cases in
    // the order the run reached them.
    testcases: Vec<(String, ScenarioResult)>,
    published: Vec<Value>,
}

impl XrayReporter {
    pub fn new(publisher: XrayPublisher) -> Self {
        Self {
            publisher,
            meta: ExecutionMeta::default(),
            dry_run: false,
            report_path: None,
            hooks: Vec::new(),
            execution: TestExecution::new(),
            current_test_key: None,
            testcases: Vec::new(),
            published: Vec::new(),
        }
    }

    /// Attach execution-level metadata (summary, user, revision, version).
    pub fn with_meta(mut self, meta: ExecutionMeta) -> Self {
        self.meta = meta;
        self.apply_meta();
        self
    }

    /// Collect results without ever talking to the server.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Additionally dump every published payload to `path` as a JSON array,
    /// so a failed upload can be retried later.
    pub fn with_report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_path = Some(path.into());
        self
    }

    /// Register a hook invoked after every step verdict.
    pub fn add_hook(&mut self, hook: Box<dyn ResultHook>) {
        self.hooks.push(hook);
    }

    /// Clear all per-run state. Construction-time metadata is kept.
    pub fn reset(&mut self) {
        self.current_test_key = None;
        self.testcases.clear();
        self.execution = TestExecution::new();
        self.apply_meta();
    }

    fn apply_meta(&mut self) {
        if !self.meta.summary.is_empty() {
            self.execution.summary = self.meta.summary.clone();
        }
        self.execution.user = self.meta.user.clone();
        self.execution.revision = self.meta.revision.clone();
        self.execution.version = self.meta.version.clone();
    }

    fn index_for(&mut self, key: &str) -> usize {
        match self.testcases.iter().position(|(k, _)| k == key) {
            Some(index) => index,
            None => {
                self.testcases.push((key.to_string(), ScenarioResult::default()));
                self.testcases.len() - 1
            }
        }
    }

    /// Derive the per-step verdict: the scenario-level status plus a message
    /// explaining anything that is not a pass.
    fn verdict(step: &StepEvent, scenario: &ScenarioEvent) -> Verdict {
        let message = match step.status {
            Status::Failed => step.error_message.clone().unwrap_or_default(),
            Status::Untested => "Untested".to_string(),
            Status::Skipped => scenario.skip_reason.clone(),
            _ => String::new(),
        };
        Verdict {
            status: scenario.status,
            message,
        }
    }

    /// Convert every accumulator into a finalized test case on the batch.
    fn collect_tests(&mut self) {
        let deployment = self.publisher.deployment();
        for (key, result) in &self.testcases {
            let mut test = TestCase::new(key.as_str(), deployment);
            if result.is_outline {
                let overall = overall_status(&result.statuses);
                test.set_status(XrayStatus::from(overall));
                for status in &result.statuses {
                    test.push_example(XrayStatus::from(*status));
                }
            } else {
                let status = result.statuses.first().copied().unwrap_or(Status::Untested);
                test.set_status(XrayStatus::from(status));
                test.comment = result.comment.clone();
            }
            test.evidences = result.evidences.clone();
            self.execution.append(test);
        }
        debug!("collected {} test case(s)", self.execution.tests().len());
    }

    fn write_report(&self, path: &Path) -> Result<(), XrayError> {
        let file = File::create(path).map_err(|source| XrayError::Report {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::to_writer_pretty(file, &self.published).map_err(|source| {
            XrayError::Report {
                path: path.to_path_buf(),
                source: source.into(),
            }
        })
    }
}

impl Reporter for XrayReporter {
    fn on_feature_start(&mut self, feature: &FeatureEvent) {
        // The description is a mandatory Xray field; fall back to the
        // feature name when the feature has none.
        self.execution.description = if feature.description.is_empty() {
            feature.name.clone()
        } else {
            feature.description.join("\n")
        };
        for tag in &feature.tags {
            if let Some(key) = tag::test_execution_key(tag) {
                self.execution.test_execution_key = key.to_string();
            }
            if let Some(key) = tag::test_plan_key(tag) {
                self.execution.test_plan_key = key.to_string();
            }
        }
    }

    fn on_scenario_start(&mut self, scenario: &ScenarioEvent) {
        self.current_test_key = None;
        for tag in &scenario.tags {
            if let Some(key) = tag::test_case_key(tag) {
                self.current_test_key = Some(key.to_string());
                let is_outline = scenario.is_outline;
                let index = self.index_for(key);
                self.testcases[index].1.is_outline = is_outline;
            }
        }
    }

    fn on_step_result(&mut self, step: &StepEvent, scenario: &ScenarioEvent) {
        // The runner reports a scenario as untested until its last step ran,
        // so intermediate step results carry no verdict yet.
        if scenario.status == Status::Untested {
            return;
        }
        let Some(key) = self.current_test_key.clone() else {
            return;
        };
        let verdict = Self::verdict(step, scenario);
        let index = self.index_for(&key);
        self.testcases[index].1.statuses.push(verdict.status);
        for hook in &mut self.hooks {
            hook.on_step_verdict(&verdict, scenario, &mut self.testcases[index].1);
        }
        if !scenario.is_outline {
            self.testcases[index].1.comment = verdict.message;
        }
    }

    fn on_run_end(&mut self) {
        if self.dry_run {
            return;
        }
        self.collect_tests();
        if !self.execution.is_empty() {
            let payload = self.execution.as_json();
            if let Err(err) = self.publisher.publish(&payload) {
                error!("could not publish results to Jira Xray: {err}");
            }
            self.published.push(payload);
            if let Some(path) = self.report_path.clone() {
                if let Err(err) = self.write_report(&path) {
                    error!("{err}");
                }
            }
        }
        self.reset();
    }
}
