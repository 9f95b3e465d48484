pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::HttpFacade;
pub use app::{show_resources, OutputFormat};
pub use config::ClientSettings;
pub use core::client::SpecClient;
pub use domain::model::{EntityError, OriginKind, ResourceSpec, ResourceType, Revision, SpecsResult};
pub use domain::ports::FacadeCaller;
pub use utils::error::{ClientError, Result};
