//! Wire-format types exchanged with the controller's `Resources` facade.

use serde::{Deserialize, Serialize};

pub const RESOURCES_FACADE: &str = "Resources";
pub const LIST_SPECS_METHOD: &str = "ListSpecifications";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub tag: String,
}

/// Bulk request: one entity per requested service, order significant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSpecsArgs {
    pub entities: Vec<Entity>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WireSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub path: String,
    pub comment: String,
    pub origin: String,
    pub revision: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireError {
    pub message: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireSpecsResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<WireError>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<WireSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSpecsResults {
    #[serde(default)]
    pub results: Vec<WireSpecsResult>,
}
