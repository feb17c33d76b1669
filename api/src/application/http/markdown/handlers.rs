pub mod render_markdown;
