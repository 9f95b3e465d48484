use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// One round trip against a controller facade. Implementations own
/// transport and envelope handling; any failure here is fatal for the call.
#[async_trait]
pub trait FacadeCaller: Send + Sync {
    async fn facade_call(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value>;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn facade(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn headers(&self) -> &HashMap<String, String>;
}
