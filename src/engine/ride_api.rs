use super::{parse_body, pickup_location, Engine};

use async_trait::async_trait;
use tracing::Instrument;

use crate::{
    api::RideAPI,
    auth::rider_from_authorizer,
    entities::{ProxyRequest, ProxyResponse},
    error::{unexpected_error, Error},
};

#[async_trait]
impl RideAPI for Engine {
    async fn request_ride(&self, event: ProxyRequest) -> Result<ProxyResponse, Error> {
        let span = self.telemetry.invocation_span();

        self.handle_ride_request(event).instrument(span).await
    }
}

impl Engine {
    async fn handle_ride_request(&self, event: ProxyRequest) -> Result<ProxyResponse, Error> {
        let _profile = self.telemetry.profile();
        let _mark = self.telemetry.mark("request_ride");

        tracing::debug!("request: {:?}", event);

        self.telemetry.log_plugins();

        let authorizer = match event.authorizer() {
            Some(authorizer) => authorizer,
            None => {
                tracing::error!("authorization not configured");
                return Ok(ProxyResponse::internal_error());
            }
        };

        let rider = {
            let _mark = self.telemetry.mark("get_user_from_authorizer");
            rider_from_authorizer(authorizer)?
        };

        let body = parse_body(event.body.as_deref())?;

        let location = {
            let _mark = self.telemetry.mark("get_pickup_location");
            pickup_location(&body)
        };

        let mut ride = {
            let _mark = self.telemetry.mark("get_ride");
            self.assemble_ride(rider, &location)
        };

        if let Some(discounts) = &self.discounts {
            let _mark = self.telemetry.mark("get_discount");
            let discount = discounts
                .fetch_discount(&ride.rider, &location)
                .await?;

            ride.discount = Some(discount);
        }

        {
            let _mark = self.telemetry.mark("record_ride");
            self.store.put_ride(&ride).await?;
        }

        tracing::info!(ride_id = %ride.ride_id, unicorn = %ride.unicorn_name, "ride requested");

        ProxyResponse::created(&ride).map_err(unexpected_error)
    }
}
