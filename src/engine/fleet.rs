use serde_json::Value;

use super::random::RandomSource;
use crate::entities::Unicorn;

pub const RIDE_ID_LENGTH: usize = 16;
pub const RIDE_ID_ALPHABET: &[u8] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Fixed estimate. Reasonably accurate and far cheaper than computing one.
pub const ETA_SECONDS: u64 = 30;

/// Read-only roster of unicorns available for assignment.
#[derive(Clone, Debug, PartialEq)]
pub struct Fleet {
    unicorns: Vec<Unicorn>,
}

impl Default for Fleet {
    fn default() -> Self {
        Self {
            unicorns: vec![
                Unicorn::new("Bucephalus", "Golden", "Male"),
                Unicorn::new("Shadowfax", "White", "Male"),
                Unicorn::new("Rocinante", "Yellow", "Female"),
            ],
        }
    }
}

impl Fleet {
    pub fn unicorns(&self) -> &[Unicorn] {
        &self.unicorns
    }

    #[tracing::instrument(skip_all)]
    pub fn select(&self, random: &dyn RandomSource) -> Unicorn {
        self.unicorns[random.index(self.unicorns.len())].clone()
    }
}

pub fn estimate_eta(_unicorn: &Unicorn, _pickup_location: &Value) -> u64 {
    ETA_SECONDS
}

pub fn generate_ride_id(random: &dyn RandomSource) -> String {
    (0..RIDE_ID_LENGTH)
        .map(|_| RIDE_ID_ALPHABET[random.index(RIDE_ID_ALPHABET.len())] as char)
        .collect()
}
