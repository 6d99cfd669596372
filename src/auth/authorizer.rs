use serde_json::Value;

use crate::entities::Authorizer;
use crate::error::{malformed_claims_error, Error};

pub const USERNAME_CLAIM: &str = "cognito:username";

/// Reads the rider identity out of claims the gateway already verified.
#[tracing::instrument(skip(authorizer))]
pub fn rider_from_authorizer(authorizer: &Authorizer) -> Result<String, Error> {
    let claims = match &authorizer.claims {
        Some(Value::Object(claims)) => claims,
        other => {
            tracing::error!("unusable claims: {:?}", other);
            return Err(malformed_claims_error());
        }
    };

    match claims.get(USERNAME_CLAIM) {
        Some(Value::String(username)) => Ok(username.clone()),
        other => {
            tracing::error!("unusable {} claim: {:?}", USERNAME_CLAIM, other);
            Err(malformed_claims_error())
        }
    }
}

#[test]
fn username_claim_test() {
    let authorizer: Authorizer = serde_json::from_value(serde_json::json!({
        "claims": {"cognito:username": "alice", "email": "alice@example.com"}
    }))
    .unwrap();

    assert_eq!(rider_from_authorizer(&authorizer).unwrap(), "alice");
}

#[test]
fn missing_claims_test() {
    let authorizer = Authorizer::default();

    let err = rider_from_authorizer(&authorizer).unwrap_err();
    assert_eq!(err, malformed_claims_error());
}

#[test]
fn missing_username_test() {
    let authorizer: Authorizer = serde_json::from_value(serde_json::json!({
        "claims": {"email": "alice@example.com"}
    }))
    .unwrap();

    assert_eq!(rider_from_authorizer(&authorizer).unwrap_err().code, 7);
}

#[test]
fn non_string_username_test() {
    let authorizer: Authorizer = serde_json::from_value(serde_json::json!({
        "claims": {"cognito:username": 42}
    }))
    .unwrap();

    assert_eq!(rider_from_authorizer(&authorizer).unwrap_err().code, 7);
}

#[test]
fn non_object_claims_test() {
    for claims in [serde_json::json!("nope"), serde_json::json!(["alice"]), serde_json::json!(7)] {
        let authorizer: Authorizer =
            serde_json::from_value(serde_json::json!({ "claims": claims })).unwrap();

        assert_eq!(rider_from_authorizer(&authorizer).unwrap_err().code, 7);
    }
}
