use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{upstream_error, Error};

/// Source of a multiplicative discount for a rider and pickup location.
#[async_trait]
pub trait DiscountAPI {
    async fn fetch_discount(&self, rider: &str, pickup_location: &Value) -> Result<f64, Error>;
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct DiscountRequest<'a> {
    rider: &'a str,
    pickup_location: &'a Value,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DiscountResponse {
    discount: f64,
}

#[derive(Clone, Debug)]
pub struct DiscountClient {
    url: String,
    client: reqwest::Client,
}

impl DiscountClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl DiscountAPI for DiscountClient {
    #[tracing::instrument(skip(self))]
    async fn fetch_discount(&self, rider: &str, pickup_location: &Value) -> Result<f64, Error> {
        let res = self
            .client
            .post(&self.url)
            .json(&DiscountRequest {
                rider,
                pickup_location,
            })
            .send()
            .await?;

        let status_code = res.status().as_u16();

        if !(200..300).contains(&status_code) {
            tracing::error!("discount service answered {}", status_code);
            return Err(upstream_error());
        }

        let data: DiscountResponse = res.json().await?;

        if !data.discount.is_finite() {
            return Err(upstream_error());
        }

        Ok(data.discount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::json;
    use std::net::SocketAddr;

    async fn spawn(app: Router) -> SocketAddr {
        let server = axum::Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0)))
            .serve(app.into_make_service());
        let addr = server.local_addr();

        tokio::spawn(server);

        addr
    }

    #[tokio::test]
    async fn reads_discount() {
        let app = Router::new().route(
            "/discount",
            post(|Json(request): Json<Value>| async move {
                assert_eq!(request["Rider"], json!("alice"));
                assert_eq!(request["PickupLocation"], json!({"Latitude": 1.0}));

                Json(json!({"Discount": 0.75}))
            }),
        );
        let addr = spawn(app).await;

        let client = DiscountClient::new(format!("http://{}/discount", addr));
        let discount = client
            .fetch_discount("alice", &json!({"Latitude": 1.0}))
            .await
            .unwrap();

        assert_eq!(discount, 0.75);
    }

    #[tokio::test]
    async fn server_errors_are_upstream_errors() {
        let app = Router::new().route(
            "/discount",
            post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
        );
        let addr = spawn(app).await;

        let client = DiscountClient::new(format!("http://{}/discount", addr));
        let err = client
            .fetch_discount("alice", &Value::Null)
            .await
            .unwrap_err();

        assert_eq!(err, upstream_error());
    }

    #[tokio::test]
    async fn undecodable_payload_is_fatal() {
        let app = Router::new().route(
            "/discount",
            post(|| async { Json(json!({"Percent": 10})) }),
        );
        let addr = spawn(app).await;

        let client = DiscountClient::new(format!("http://{}/discount", addr));
        let err = client
            .fetch_discount("alice", &Value::Null)
            .await
            .unwrap_err();

        assert_eq!(err.code, 3);
    }
}
