use crate::core::convert::convert_specs;
use crate::domain::model::{EntityError, RemoteError, ResourceSpec, SpecsResult};
use crate::domain::wire::{ResourceSpecsResults, WireSpec, WireSpecsResult};
use crate::utils::error::{ClientError, Result};

/// One response slot: the controller either failed the entity or sent its
/// (possibly empty) specs.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseSlot {
    RemoteError(RemoteError),
    Items(Vec<WireSpec>),
}

impl From<WireSpecsResult> for ResponseSlot {
    fn from(result: WireSpecsResult) -> Self {
        match result.error {
            Some(err) => ResponseSlot::RemoteError(RemoteError {
                message: err.message,
                code: (!err.code.is_empty()).then_some(err.code),
            }),
            None => ResponseSlot::Items(result.items),
        }
    }
}

/// Pairs each response slot with the service at the same position. A
/// count mismatch is fatal and yields nothing.
pub fn reconcile(
    services: &[String],
    response: ResourceSpecsResults,
) -> Result<Vec<(String, ResponseSlot)>> {
    let actual = response.results.len();
    if actual != services.len() {
        return Err(ClientError::Cardinality {
            expected: services.len(),
            actual,
        });
    }

    Ok(services
        .iter()
        .cloned()
        .zip(response.results.into_iter().map(ResponseSlot::from))
        .collect())
}

pub fn convert_slot(slot: ResponseSlot) -> (Vec<ResourceSpec>, Option<EntityError>) {
    match slot {
        ResponseSlot::RemoteError(err) => (Vec::new(), Some(EntityError::Remote(err))),
        ResponseSlot::Items(items) => {
            let (specs, err) = convert_specs(&items);
            (specs, err.map(EntityError::Conversion))
        }
    }
}

pub fn assemble(pairs: Vec<(String, ResponseSlot)>) -> Vec<SpecsResult> {
    pairs
        .into_iter()
        .map(|(service, slot)| {
            let (specs, error) = convert_slot(slot);
            SpecsResult {
                service,
                specs,
                error,
            }
        })
        .collect()
}
