pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod evidence;
pub mod hooks;
pub mod logging;
pub mod model;
pub mod publisher;
pub mod report;
pub mod status;
pub mod tag;

pub use error::XrayError;
pub use model::{Deployment, TestCase, TestExecution, XrayStatus};
pub use publisher::XrayPublisher;
pub use report::{
    ExecutionMeta, FeatureEvent, Reporter, ScenarioEvent, StepEvent, Verdict, XrayReporter,
};
pub use status::{Status, overall_status};
