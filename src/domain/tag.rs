use crate::utils::error::{ClientError, Result};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

const SERVICE_TAG_KIND: &str = "service";

static VALID_SERVICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z][a-z0-9]*(-[a-z0-9]*[a-z][a-z0-9]*)*$").expect("service name pattern")
});

pub fn is_valid_service(name: &str) -> bool {
    VALID_SERVICE.is_match(name)
}

/// 已驗證的服務識別標籤，字串形式為 `service-<name>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceTag {
    name: String,
}

impl ServiceTag {
    pub fn new(name: &str) -> Result<Self> {
        if !is_valid_service(name) {
            return Err(ClientError::InvalidService {
                identifier: name.to_string(),
            });
        }
        Ok(Self {
            name: name.to_string(),
        })
    }

    /// Parses the string form produced by `Display`.
    pub fn parse(tag: &str) -> Result<Self> {
        let name = tag
            .strip_prefix(SERVICE_TAG_KIND)
            .and_then(|rest| rest.strip_prefix('-'))
            .ok_or_else(|| ClientError::InvalidService {
                identifier: tag.to_string(),
            })?;
        Self::new(name)
    }

    pub fn id(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ServiceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", SERVICE_TAG_KIND, self.name)
    }
}

/// Resolves every identifier or none of them.
pub fn resolve_services<S: AsRef<str>>(services: &[S]) -> Result<Vec<ServiceTag>> {
    services.iter().map(|s| ServiceTag::new(s.as_ref())).collect()
}
