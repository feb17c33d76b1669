pub mod common;
pub mod markdown;
pub mod recipe;
pub mod saved_item;
