mod authorizer;

pub use authorizer::{rider_from_authorizer, USERNAME_CLAIM};
