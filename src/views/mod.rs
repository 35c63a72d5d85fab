pub mod approval_card;
pub mod error_banner;
pub mod header;
