mod config;
mod error;
mod pipeline;
mod plan;
mod step;

pub mod providers;
pub mod traits;

#[cfg(test)]
pub mod mocks;

pub use config::{ConfigError, PackageManager, ReleaseConfig};
pub use error::{PipelineError, Result};
pub use pipeline::{HookFailure, PublishFailure, ReleasePipeline, ReleaseReport};
pub use plan::ReleasePlan;
pub use step::{Step, StepPolicy};
