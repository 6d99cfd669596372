use serde_json::{Map, Value};

use crate::error::{malformed_body_error, Error};

pub const PICKUP_LOCATION_FIELD: &str = "PickupLocation";

#[tracing::instrument(skip(body))]
pub fn parse_body(body: Option<&str>) -> Result<Map<String, Value>, Error> {
    let body = body.ok_or_else(|| malformed_body_error("missing body"))?;

    match serde_json::from_str::<Value>(body).map_err(malformed_body_error)? {
        Value::Object(fields) => Ok(fields),
        other => Err(malformed_body_error(format!("expected an object, got {}", other))),
    }
}

/// Passes the pickup location through untouched; absence becomes `null`.
pub fn pickup_location(body: &Map<String, Value>) -> Value {
    body.get(PICKUP_LOCATION_FIELD).cloned().unwrap_or(Value::Null)
}
