pub mod accounts;
pub mod activities;
pub mod banned_words;
pub mod bookings;
pub mod comments;
pub mod market_items;

pub use accounts::{AccountRow, AuthAccountRow, CredentialsRow, Role};
pub use activities::ActivityRow;
pub use banned_words::BannedWordRow;
pub use bookings::BookingWithActivityRow;
pub use comments::{CommentContent, CommentRow, CommentWithAuthorRow};
pub use market_items::{MarketItemRow, MarketItemWithSellerRow};
