pub mod card;
pub mod filter;
pub mod list;
