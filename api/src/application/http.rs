pub mod health;
pub mod markdown;
pub mod recipe;
pub mod saved_item;
pub mod server;
