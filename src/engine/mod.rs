mod fleet;
mod helpers;
mod random;
mod ride_api;

use std::sync::Arc;

use serde_json::Value;

use crate::{
    api::API,
    db::RideStore,
    entities::Ride,
    external::DiscountAPI,
    telemetry::Telemetry,
};

pub use fleet::{estimate_eta, generate_ride_id, Fleet, ETA_SECONDS, RIDE_ID_ALPHABET, RIDE_ID_LENGTH};
pub use helpers::{parse_body, pickup_location, PICKUP_LOCATION_FIELD};
pub use random::{Clock, FixedClock, RandomSource, SeededRandom, SystemClock, ThreadRandom};

pub type DynStore = Arc<dyn RideStore + Send + Sync>;
pub type DynDiscounts = Arc<dyn DiscountAPI + Send + Sync>;

const REQUEST_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Everything one invocation needs, built once at startup.
pub struct Engine {
    store: DynStore,
    fleet: Fleet,
    random: Arc<dyn RandomSource>,
    clock: Arc<dyn Clock>,
    discounts: Option<DynDiscounts>,
    telemetry: Telemetry,
}

impl Engine {
    pub fn new(store: DynStore) -> Self {
        Self {
            store,
            fleet: Fleet::default(),
            random: Arc::new(ThreadRandom),
            clock: Arc::new(SystemClock),
            discounts: None,
            telemetry: Telemetry::default(),
        }
    }

    pub fn with_random(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_discounts(mut self, discounts: DynDiscounts) -> Self {
        self.discounts = Some(discounts);
        self
    }

    pub fn with_telemetry(mut self, telemetry: Telemetry) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Builds a new ride for `rider`. Pure apart from drawing randomness and time.
    #[tracing::instrument(skip(self))]
    pub fn assemble_ride(&self, rider: String, pickup_location: &Value) -> Ride {
        let ride_id = generate_ride_id(self.random.as_ref());
        let unicorn = self.fleet.select(self.random.as_ref());
        let eta = estimate_eta(&unicorn, pickup_location);
        let request_time = self.clock.now().format(REQUEST_TIME_FORMAT).to_string();

        Ride::new(ride_id, rider, unicorn, eta, request_time)
    }
}

impl API for Engine {}
