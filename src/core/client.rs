use crate::core::reconcile::{assemble, reconcile};
use crate::domain::model::SpecsResult;
use crate::domain::ports::FacadeCaller;
use crate::domain::tag::{resolve_services, ServiceTag};
use crate::domain::wire::{Entity, ListSpecsArgs, ResourceSpecsResults, LIST_SPECS_METHOD};
use crate::utils::error::Result;

/// Client for the controller's resource-spec listing. The facade is
/// injected so callers and tests choose the transport.
pub struct SpecClient<F: FacadeCaller> {
    facade: F,
}

impl<F: FacadeCaller> SpecClient<F> {
    pub fn new(facade: F) -> Self {
        Self { facade }
    }

    /// 以單次批次呼叫取得每個服務的 resource 規格，結果順序與輸入相同。
    ///
    /// Invalid names, transport failures and a result count that does not
    /// match the request are fatal; per-service failures are reported in
    /// the matching `SpecsResult`.
    pub async fn list_specs<S: AsRef<str>>(&self, services: &[S]) -> Result<Vec<SpecsResult>> {
        let tags = resolve_services(services)?;
        let ids: Vec<String> = services.iter().map(|s| s.as_ref().to_string()).collect();

        let response = self.invoke(&tags).await?;
        let pairs = reconcile(&ids, response)?;
        let results = assemble(pairs);

        tracing::debug!(
            "Listed specs for {} services ({} with errors)",
            results.len(),
            results.iter().filter(|r| !r.is_ok()).count()
        );
        Ok(results)
    }

    async fn invoke(&self, tags: &[ServiceTag]) -> Result<ResourceSpecsResults> {
        let args = ListSpecsArgs {
            entities: tags
                .iter()
                .map(|tag| Entity {
                    tag: tag.to_string(),
                })
                .collect(),
        };

        tracing::debug!(
            "Calling {} with {} entities",
            LIST_SPECS_METHOD,
            args.entities.len()
        );
        let raw = self
            .facade
            .facade_call(LIST_SPECS_METHOD, serde_json::to_value(&args)?)
            .await?;

        Ok(serde_json::from_value(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ClientError;
    use async_trait::async_trait;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct RecordingFacade {
        calls: Arc<Mutex<Vec<(String, serde_json::Value)>>>,
        response: serde_json::Value,
    }

    #[async_trait]
    impl FacadeCaller for RecordingFacade {
        async fn facade_call(
            &self,
            method: &str,
            params: serde_json::Value,
        ) -> Result<serde_json::Value> {
            self.calls.lock().await.push((method.to_string(), params));
            Ok(self.response.clone())
        }
    }

    #[tokio::test]
    async fn test_invoke_builds_one_bulk_request() {
        let facade = RecordingFacade {
            response: serde_json::json!({"results": [{}, {}]}),
            ..Default::default()
        };
        let client = SpecClient::new(facade.clone());

        let results = client.list_specs(&["a-service", "other-service"]).await.unwrap();

        assert_eq!(results.len(), 2);
        let calls = facade.calls.lock().await;
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "ListSpecifications");
        assert_eq!(
            calls[0].1,
            serde_json::json!({"entities": [
                {"tag": "service-a-service"},
                {"tag": "service-other-service"}
            ]})
        );
    }

    #[tokio::test]
    async fn test_malformed_response_is_fatal() {
        let facade = RecordingFacade {
            response: serde_json::json!({"results": "nope"}),
            ..Default::default()
        };
        let client = SpecClient::new(facade);

        let err = client.list_specs(&["a-service"]).await.unwrap_err();

        assert!(matches!(err, ClientError::SerializationError(_)));
    }
}
