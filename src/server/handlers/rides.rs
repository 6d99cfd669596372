use axum::extract::{Extension, Json};

use crate::api::DynAPI;
use crate::entities::{ProxyRequest, ProxyResponse};
use crate::error::{malformed_event_error, Error};

/// Runs one invocation. The envelope is returned as-is; faults become a bare 500.
pub async fn invoke(
    Extension(api): Extension<DynAPI>,
    payload: String,
) -> Result<Json<ProxyResponse>, Error> {
    let event: ProxyRequest = serde_json::from_str(&payload).map_err(malformed_event_error)?;

    let response = api.request_ride(event).await?;

    Ok(response.into())
}
