pub mod client;
pub mod convert;
pub mod reconcile;

pub use crate::domain::model::{ResourceSpec, SpecsResult};
pub use crate::domain::ports::{ConfigProvider, FacadeCaller};
pub use crate::utils::error::Result;
