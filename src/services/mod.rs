pub mod account_service;
pub mod activity_service;
pub mod auth_service;
pub mod booking_service;
pub mod comment_service;
pub mod market_service;

#[cfg(test)]
pub(crate) mod test_support;
