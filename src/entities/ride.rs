use serde::{Deserialize, Serialize};

use crate::entities::Unicorn;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ride {
    pub ride_id: String,
    pub unicorn: Unicorn,
    pub unicorn_name: String,
    pub eta: String,
    pub rider: String,
    pub request_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
}

impl Ride {
    pub fn new(
        ride_id: String,
        rider: String,
        unicorn: Unicorn,
        eta_seconds: u64,
        request_time: String,
    ) -> Self {
        Self {
            ride_id,
            unicorn_name: unicorn.name.clone(),
            unicorn,
            eta: format!("{} Seconds", eta_seconds),
            rider,
            request_time,
            discount: None,
        }
    }
}
