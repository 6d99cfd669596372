use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::entities::Ride;

pub const CORS_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const INTERNAL_ERROR_MESSAGE: &str = "There seems to be an error on our end.";

/// Invocation event handed over by the request dispatcher.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequest {
    #[serde(default)]
    pub request_context: Option<RequestContext>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RequestContext {
    #[serde(default)]
    pub authorizer: Option<Authorizer>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Claims verified by the upstream gateway. Trusted as-is.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Authorizer {
    #[serde(default)]
    pub claims: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProxyRequest {
    pub fn authorizer(&self) -> Option<&Authorizer> {
        self.request_context
            .as_ref()
            .and_then(|context| context.authorizer.as_ref())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
}

impl ProxyResponse {
    pub fn created(ride: &Ride) -> Result<Self, serde_json::Error> {
        let headers = HashMap::from([(CORS_ALLOW_ORIGIN.to_string(), "*".to_string())]);

        Ok(Self {
            status_code: 201,
            body: serde_json::to_string(ride)?,
            headers: Some(headers),
        })
    }

    pub fn internal_error() -> Self {
        Self {
            status_code: 500,
            body: serde_json::json!({ "error": INTERNAL_ERROR_MESSAGE }).to_string(),
            headers: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_authorizer_from_request_context() {
        let request: ProxyRequest = serde_json::from_value(json!({
            "resource": "/ride",
            "requestContext": {
                "requestId": "abc",
                "authorizer": {"claims": {"cognito:username": "alice"}},
            },
            "body": "{}",
        }))
        .unwrap();

        let claims = request.authorizer().unwrap().claims.as_ref().unwrap();
        assert_eq!(claims["cognito:username"], json!("alice"));

        let request: ProxyRequest = serde_json::from_value(json!({
            "requestContext": {"authorizer": {"claims": "nope"}},
        }))
        .unwrap();
        assert_eq!(request.authorizer().unwrap().claims, Some(json!("nope")));
        assert_eq!(request.extra["resource"], json!("/ride"));
    }

    #[test]
    fn null_or_missing_authorizer_is_absent() {
        let request: ProxyRequest =
            serde_json::from_value(json!({"requestContext": {"authorizer": null}})).unwrap();
        assert!(request.authorizer().is_none());

        let request: ProxyRequest = serde_json::from_value(json!({"body": "{}"})).unwrap();
        assert!(request.authorizer().is_none());
    }

    #[test]
    fn internal_error_envelope() {
        let response = ProxyResponse::internal_error();

        assert_eq!(response.status_code, 500);
        assert_eq!(response.headers, None);
        assert_eq!(
            serde_json::from_str::<Value>(&response.body).unwrap(),
            json!({"error": INTERNAL_ERROR_MESSAGE})
        );
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"statusCode": 500, "body": response.body})
        );
    }
}
