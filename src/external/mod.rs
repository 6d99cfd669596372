pub mod discounts;

pub use discounts::{DiscountAPI, DiscountClient};
