use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{ProxyRequest, ProxyResponse};
use crate::error::Error;

#[async_trait]
pub trait RideAPI {
    /// Handles one ride request event.
    ///
    /// A request without an authorizer yields a structured 500 envelope. Every
    /// other failure is returned as `Err` and left to the host to report.
    async fn request_ride(&self, event: ProxyRequest) -> Result<ProxyResponse, Error>;
}

pub trait API: RideAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
