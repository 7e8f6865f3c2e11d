// Result model - test cases and the execution batch sent to Xray

pub mod execution;
pub mod result;
pub mod status;

pub use execution::{DATETIME_FORMAT, DEFAULT_SUMMARY, TestExecution};
pub use result::TestCase;
pub use status::{Deployment, XrayStatus};
