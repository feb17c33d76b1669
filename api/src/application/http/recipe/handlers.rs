pub mod generate_content;
pub mod generate_content_from_photo;
