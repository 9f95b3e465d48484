use crate::domain::model::{ConversionError, ResourceSpec, Revision};
use crate::domain::wire::WireSpec;

/// Converts one wire spec. Every field is converted on its own: a field
/// that fails to parse stays unset while the others are kept, and the first
/// failure is returned alongside the partial spec.
pub fn api_to_spec(wire: &WireSpec) -> (ResourceSpec, Option<ConversionError>) {
    let mut first_failure = None;
    let resource_type = keep_field(wire.resource_type.parse(), &mut first_failure);
    let origin = keep_field(wire.origin.parse(), &mut first_failure);
    let revision = keep_field(Revision::parse(&wire.revision), &mut first_failure);
    let spec = ResourceSpec {
        name: wire.name.clone(),
        resource_type,
        path: wire.path.clone(),
        comment: wire.comment.clone(),
        origin,
        revision,
    };

    if let Some(reason) = first_failure {
        return (spec, Some(ConversionError { reason }));
    }
    match spec.validate() {
        Ok(()) => (spec, None),
        Err(reason) => (spec, Some(ConversionError { reason })),
    }
}

fn keep_field<T>(parsed: Result<T, String>, first_failure: &mut Option<String>) -> Option<T> {
    match parsed {
        Ok(value) => Some(value),
        Err(reason) => {
            first_failure.get_or_insert(reason);
            None
        }
    }
}

/// 將 domain 規格轉回 wire 格式；未設定的欄位輸出為空字串
pub fn spec_to_api(spec: &ResourceSpec) -> WireSpec {
    WireSpec {
        name: spec.name.clone(),
        resource_type: spec
            .resource_type
            .map(|t| t.as_str().to_string())
            .unwrap_or_default(),
        path: spec.path.clone(),
        comment: spec.comment.clone(),
        origin: spec.origin.map(|o| o.as_str().to_string()).unwrap_or_default(),
        revision: spec.revision.map(|r| r.to_wire()).unwrap_or_default(),
    }
}

/// Converts every item of a slot. Conversion continues past a bad item so
/// the caller sees all specs; only the first failure is reported.
pub fn convert_specs(items: &[WireSpec]) -> (Vec<ResourceSpec>, Option<ConversionError>) {
    let mut specs = Vec::with_capacity(items.len());
    let mut first_error = None;

    for wire in items {
        let (spec, err) = api_to_spec(wire);
        if let Some(err) = err {
            tracing::warn!("Conversion of resource {:?} failed: {}", wire.name, err);
            first_error.get_or_insert(err);
        }
        specs.push(spec);
    }

    (specs, first_error)
}
