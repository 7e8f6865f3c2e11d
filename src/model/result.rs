// A single test case entry of the import payload

use serde::Serialize;

use crate::error::XrayError;
use crate::evidence::Evidence;
use crate::model::status::{Deployment, XrayStatus};

/// One test case of a test execution.
///
/// `status` and `examples` only ever hold spellings valid for the deployment
/// the test case was created for: the typed setters cannot produce anything
/// else, and the string setter validates before assigning.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub test_key: String,
    status: String,
    pub comment: String,
    /// Per-example statuses of a scenario outline, in execution order.
    pub examples: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub evidences: Vec<Evidence>,
    #[serde(skip)]
    deployment: Deployment,
}

impl TestCase {
    /// Create a test case in the initial TODO state.
    pub fn new(test_key: impl Into<String>, deployment: Deployment) -> Self {
        Self {
            test_key: test_key.into(),
            status: deployment.status_name(XrayStatus::Todo).to_string(),
            comment: String::new(),
            examples: Vec::new(),
            evidences: Vec::new(),
            deployment,
        }
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Set the overall status.
    pub fn set_status(&mut self, status: XrayStatus) {
        self.status = self.deployment.status_name(status).to_string();
    }

    /// Set the overall status from its wire spelling, rejecting spellings
    /// the deployment does not recognize.
    pub fn set_status_str(&mut self, status: &str) -> Result<(), XrayError> {
        self.deployment.parse_status(status)?;
        self.status = status.to_string();
        Ok(())
    }

    /// Record the outcome of one outline example.
    pub fn push_example(&mut self, status: XrayStatus) {
        self.examples
            .push(self.deployment.status_name(status).to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_mandatory_fields() {
        let mut test = TestCase::new("JIRA-31", Deployment::Server);
        test.set_status(XrayStatus::Pass);
        let value = serde_json::to_value(&test).unwrap();
        assert_eq!(
            value,
            json!({
                "testKey": "JIRA-31",
                "status": "PASS",
                "comment": "",
                "examples": [],
            })
        );
    }

    #[test]
    fn new_test_case_starts_as_todo() {
        let test = TestCase::new("JIRA-31", Deployment::Cloud);
        assert_eq!(test.status(), "TODO");
        assert!(test.examples.is_empty());
    }

    #[test]
    fn examples_use_deployment_spelling() {
        let mut server = TestCase::new("JIRA-34", Deployment::Server);
        server.push_example(XrayStatus::Pass);
        server.push_example(XrayStatus::Fail);
        assert_eq!(server.examples, vec!["PASS", "FAIL"]);

        let mut cloud = TestCase::new("JIRA-34", Deployment::Cloud);
        cloud.push_example(XrayStatus::Pass);
        cloud.push_example(XrayStatus::Fail);
        assert_eq!(cloud.examples, vec!["PASSED", "FAILED"]);
    }

    #[test]
    fn string_setter_validates_spelling() {
        let mut test = TestCase::new("JIRA-31", Deployment::Server);
        test.set_status_str("ABORTED").unwrap();
        assert_eq!(test.status(), "ABORTED");

        let err = test.set_status_str("PASSED").unwrap_err();
        assert!(matches!(err, XrayError::InvalidStatus { .. }));
        // A rejected assignment leaves the previous status in place.
        assert_eq!(test.status(), "ABORTED");
    }

    #[test]
    fn evidences_appear_only_when_present() {
        let mut test = TestCase::new("JIRA-31", Deployment::Server);
        let value = serde_json::to_value(&test).unwrap();
        assert!(value.get("evidences").is_none());

        test.evidences.push(Evidence::text(b"log line", "run.log"));
        let value = serde_json::to_value(&test).unwrap();
        let evidences = value["evidences"].as_array().unwrap();
        assert_eq!(evidences.len(), 1);
        assert_eq!(evidences[0]["filename"], "run.log");
    }
}
