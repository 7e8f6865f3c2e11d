// Xray status vocabulary and the server/cloud deployment split

use crate::error::XrayError;
use crate::status::Status;

/// Status of a test case as understood by Xray.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XrayStatus {
    Todo,
    Executing,
    Pending,
    Pass,
    Fail,
    Aborted,
    Blocked,
}

impl From<Status> for XrayStatus {
    /// Map a runner status onto the Xray vocabulary. An undefined step is a
    /// defect in the test automation and counts as a failure.
    fn from(status: Status) -> Self {
        match status {
            Status::Untested => XrayStatus::Todo,
            Status::Executing => XrayStatus::Executing,
            Status::Skipped => XrayStatus::Aborted,
            Status::Passed => XrayStatus::Pass,
            Status::Failed | Status::Undefined => XrayStatus::Fail,
        }
    }
}

/// Xray deployment flavour.
///
/// Server/DC and cloud differ in endpoint paths, response shape and the
/// spelling of the two terminal statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Deployment {
    #[default]
    Server,
    Cloud,
}

impl Deployment {
    /// Wire spelling of `status` for this deployment.
    pub fn status_name(self, status: XrayStatus) -> &'static str {
        match (self, status) {
            (Deployment::Server, XrayStatus::Pass) => "PASS",
            (Deployment::Server, XrayStatus::Fail) => "FAIL",
            (Deployment::Cloud, XrayStatus::Pass) => "PASSED",
            (Deployment::Cloud, XrayStatus::Fail) => "FAILED",
            (_, XrayStatus::Todo) => "TODO",
            (_, XrayStatus::Executing) => "EXECUTING",
            (_, XrayStatus::Pending) => "PENDING",
            (_, XrayStatus::Aborted) => "ABORTED",
            (_, XrayStatus::Blocked) => "BLOCKED",
        }
    }

    /// All status spellings this deployment accepts.
    pub fn valid_statuses(self) -> &'static [&'static str] {
        match self {
            Deployment::Server => &[
                "TODO",
                "EXECUTING",
                "PENDING",
                "PASS",
                "FAIL",
                "ABORTED",
                "BLOCKED",
            ],
            Deployment::Cloud => &[
                "TODO",
                "EXECUTING",
                "PENDING",
                "PASSED",
                "FAILED",
                "ABORTED",
                "BLOCKED",
            ],
        }
    }

    /// Parse a wire status, rejecting spellings this deployment does not
    /// recognize.
    pub fn parse_status(self, status: &str) -> Result<XrayStatus, XrayError> {
        let parsed = match status {
            "TODO" => Some(XrayStatus::Todo),
            "EXECUTING" => Some(XrayStatus::Executing),
            "PENDING" => Some(XrayStatus::Pending),
            "ABORTED" => Some(XrayStatus::Aborted),
            "BLOCKED" => Some(XrayStatus::Blocked),
            "PASS" if self == Deployment::Server => Some(XrayStatus::Pass),
            "FAIL" if self == Deployment::Server => Some(XrayStatus::Fail),
            "PASSED" if self == Deployment::Cloud => Some(XrayStatus::Pass),
            "FAILED" if self == Deployment::Cloud => Some(XrayStatus::Fail),
            _ => None,
        };
        parsed.ok_or_else(|| XrayError::InvalidStatus {
            status: status.to_string(),
            allowed: self.valid_statuses().join(", "),
        })
    }
}
