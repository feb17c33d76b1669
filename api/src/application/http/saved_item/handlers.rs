pub mod delete_saved_item;
pub mod get_saved_item;
pub mod get_saved_items;
pub mod save_item;
