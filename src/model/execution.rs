// The test execution batch and its wire serialization

use chrono::{DateTime, Utc};
use serde_json::{Value, json};

use crate::model::result::TestCase;

/// Wire timestamp format, e.g. `2021-04-23T16:30:02+0000`.
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Summary used when the embedding runner provides none.
pub const DEFAULT_SUMMARY: &str = "Execution of automated tests";

/// A full test execution: everything one run reports to Xray in a single
/// import request.
#[derive(Debug, Clone)]
pub struct TestExecution {
    pub test_execution_key: String,
    pub test_plan_key: String,
    pub user: String,
    pub revision: String,
    pub version: String,
    pub summary: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    tests: Vec<TestCase>,
}

impl Default for TestExecution {
    fn default() -> Self {
        Self::new()
    }
}

impl TestExecution {
    /// Create an empty execution. The start timestamp is captured here.
    pub fn new() -> Self {
        Self {
            test_execution_key: String::new(),
            test_plan_key: String::new(),
            user: String::new(),
            revision: String::new(),
            version: String::new(),
            summary: DEFAULT_SUMMARY.to_string(),
            description: String::new(),
            start_date: Utc::now(),
            tests: Vec::new(),
        }
    }

    /// Add a finalized test case to the batch.
    pub fn append(&mut self, test: TestCase) {
        self.tests.push(test);
    }

    /// Remove all test cases, keeping the execution metadata.
    pub fn flush(&mut self) {
        self.tests.clear();
    }

    pub fn tests(&self) -> &[TestCase] {
        &self.tests
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Serialize into the Xray import payload. The finish timestamp is the
    /// moment of serialization.
    pub fn as_json(&self) -> Value {
        self.as_json_at(Utc::now())
    }

    /// Serialize with an explicit finish timestamp.
    ///
    /// Mandatory `info` fields are always emitted; the identifying keys and
    /// the optional metadata are left out while empty.
    pub fn as_json_at(&self, finish_date: DateTime<Utc>) -> Value {
        let mut info = json!({
            "startDate": self.start_date.format(DATETIME_FORMAT).to_string(),
            "finishDate": finish_date.format(DATETIME_FORMAT).to_string(),
            "summary": self.summary,
            "description": self.description,
        });
        if !self.user.is_empty() {
            info["user"] = json!(self.user);
        }
        if !self.version.is_empty() {
            info["version"] = json!(self.version);
        }
        if !self.revision.is_empty() {
            info["revision"] = json!(self.revision);
        }
        if !self.test_plan_key.is_empty() {
            info["testPlanKey"] = json!(self.test_plan_key);
        }

        let mut payload = json!({
            "info": info,
            "tests": self.tests,
        });
        if !self.test_execution_key.is_empty() {
            payload["testExecutionKey"] = json!(self.test_execution_key);
        }
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::status::{Deployment, XrayStatus};
    use chrono::TimeZone;
    use serde_json::json;

    fn pinned() -> (DateTime<Utc>, DateTime<Utc>) {
        let start = Utc.with_ymd_and_hms(2021, 4, 23, 16, 30, 2).unwrap();
        let finish = Utc.with_ymd_and_hms(2021, 4, 23, 16, 31, 19).unwrap();
        (start, finish)
    }

    #[test]
    fn timestamps_use_the_xray_format() {
        let (start, _) = pinned();
        assert_eq!(
            start.format(DATETIME_FORMAT).to_string(),
            "2021-04-23T16:30:02+0000"
        );
    }

    #[test]
    fn minimal_execution_serializes_mandatory_fields_only() {
        let (start, finish) = pinned();
        let mut execution = TestExecution::new();
        execution.start_date = start;

        assert_eq!(
            execution.as_json_at(finish),
            json!({
                "info": {
                    "startDate": "2021-04-23T16:30:02+0000",
                    "finishDate": "2021-04-23T16:31:19+0000",
                    "summary": "Execution of automated tests",
                    "description": "",
                },
                "tests": [],
            })
        );
    }

    #[test]
    fn identifying_keys_are_emitted_when_set() {
        let (start, finish) = pinned();
        let mut execution = TestExecution::new();
        execution.start_date = start;
        execution.test_execution_key = "JIRA-20".to_string();
        execution.test_plan_key = "JIRA-10".to_string();

        let payload = execution.as_json_at(finish);
        assert_eq!(payload["testExecutionKey"], "JIRA-20");
        assert_eq!(payload["info"]["testPlanKey"], "JIRA-10");
    }

    #[test]
    fn metadata_is_emitted_when_set() {
        let (start, finish) = pinned();
        let mut execution = TestExecution::new();
        execution.start_date = start;
        execution.user = "admin".to_string();
        execution.version = "1.2.0".to_string();
        execution.revision = "abc123".to_string();
        execution.summary = "Nightly regression".to_string();
        execution.description = "Feature description".to_string();

        let info = &execution.as_json_at(finish)["info"];
        assert_eq!(info["user"], "admin");
        assert_eq!(info["version"], "1.2.0");
        assert_eq!(info["revision"], "abc123");
        assert_eq!(info["summary"], "Nightly regression");
        assert_eq!(info["description"], "Feature description");
    }

    #[test]
    fn tests_serialize_in_insertion_order() {
        let (start, finish) = pinned();
        let mut execution = TestExecution::new();
        execution.start_date = start;

        let mut first = TestCase::new("JIRA-31", Deployment::Server);
        first.set_status(XrayStatus::Pass);
        let mut second = TestCase::new("JIRA-32", Deployment::Server);
        second.set_status(XrayStatus::Fail);
        second.comment = "step failed".to_string();
        execution.append(first);
        execution.append(second);

        let payload = execution.as_json_at(finish);
        assert_eq!(
            payload["tests"],
            json!([
                {"testKey": "JIRA-31", "status": "PASS", "comment": "", "examples": []},
                {"testKey": "JIRA-32", "status": "FAIL", "comment": "step failed", "examples": []},
            ])
        );
    }

    #[test]
    fn flush_drops_tests_but_keeps_metadata() {
        let mut execution = TestExecution::new();
        execution.test_plan_key = "JIRA-10".to_string();
        execution.append(TestCase::new("JIRA-31", Deployment::Server));
        assert!(!execution.is_empty());

        execution.flush();
        assert!(execution.is_empty());
        assert_eq!(execution.test_plan_key, "JIRA-10");
    }
}
