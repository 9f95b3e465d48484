use std::fmt;
use std::str::FromStr;

/// Resource 的種類，目前控制器只定義檔案型資源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceType {
    File,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::File => "file",
        }
    }
}

impl FromStr for ResourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file" => Ok(ResourceType::File),
            other => Err(format!("unsupported resource type {:?}", other)),
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resource 的來源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginKind {
    Upload,
    Store,
}

impl OriginKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OriginKind::Upload => "upload",
            OriginKind::Store => "store",
        }
    }
}

impl FromStr for OriginKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upload" => Ok(OriginKind::Upload),
            "store" => Ok(OriginKind::Store),
            other => Err(format!("unknown origin {:?}", other)),
        }
    }
}

impl fmt::Display for OriginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resource revision. `NoRevision` is an explicit value, not the absence
/// of one: a spec whose revision was never set holds `None` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Revision {
    NoRevision,
    Number(u64),
}

impl Revision {
    /// Parses the wire form, where the empty string means "no revision".
    pub fn parse(raw: &str) -> Result<Self, String> {
        if raw.is_empty() {
            return Ok(Revision::NoRevision);
        }
        raw.parse::<u64>()
            .map(Revision::Number)
            .map_err(|_| format!("invalid revision {:?}", raw))
    }

    pub fn to_wire(&self) -> String {
        match self {
            Revision::NoRevision => String::new(),
            Revision::Number(n) => n.to_string(),
        }
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Revision::NoRevision => f.write_str("-"),
            Revision::Number(n) => write!(f, "{}", n),
        }
    }
}

/// 服務所需 resource 的規格
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceSpec {
    pub name: String,
    pub resource_type: Option<ResourceType>,
    pub path: String,
    pub comment: String,
    pub origin: Option<OriginKind>,
    pub revision: Option<Revision>,
}

impl ResourceSpec {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("resource missing name".to_string());
        }
        match self.resource_type {
            None => return Err(format!("resource {:?} missing type", self.name)),
            Some(ResourceType::File) if self.path.is_empty() => {
                return Err(format!("resource {:?} missing filename", self.name));
            }
            Some(ResourceType::File) => {}
        }
        if self.origin.is_none() {
            return Err(format!("resource {:?} missing origin", self.name));
        }
        if self.revision.is_none() {
            return Err(format!("resource {:?} missing revision", self.name));
        }
        Ok(())
    }
}

/// The outcome for one requested service. `specs` and `error` are not
/// exclusive: a conversion failure keeps whatever was converted.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecsResult {
    pub service: String,
    pub specs: Vec<ResourceSpec>,
    pub error: Option<EntityError>,
}

impl SpecsResult {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// 控制器回報的單一實體錯誤
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RemoteError {
    pub message: String,
    pub code: Option<String>,
}

pub const CODE_NOT_FOUND: &str = "not found";

impl RemoteError {
    pub fn is_not_found(&self) -> bool {
        self.code.as_deref() == Some(CODE_NOT_FOUND)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("got bad data from server: {reason}")]
pub struct ConversionError {
    pub reason: String,
}

/// Errors scoped to a single service in a batch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntityError {
    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

impl EntityError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, EntityError::Remote(e) if e.is_not_found())
    }
}
