use crate::app::render::{render, OutputFormat};
use crate::core::client::SpecClient;
use crate::domain::ports::FacadeCaller;
use crate::utils::error::{ClientError, Result};

/// Lists the resource specs of one service and renders them. A per-service
/// error from the controller fails the command.
pub async fn show_resources<F: FacadeCaller>(
    client: &SpecClient<F>,
    service: &str,
    format: OutputFormat,
) -> Result<String> {
    let mut results = client.list_specs(&[service]).await?;

    let result = results.pop().ok_or_else(|| ClientError::Cardinality {
        expected: 1,
        actual: 0,
    })?;
    if let Some(err) = result.error {
        return Err(ClientError::EntityError {
            service: result.service,
            message: err.to_string(),
        });
    }

    tracing::debug!("Rendering {} specs as {}", result.specs.len(), format);
    render(&result.specs, format)
}
