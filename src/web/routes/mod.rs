pub mod activities;
pub mod auth;
pub mod banned_words;
pub mod bookings;
pub mod comments;
pub mod market;
pub mod users;
