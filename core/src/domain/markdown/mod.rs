pub mod entities;
pub mod renderer;

pub use entities::*;
pub use renderer::render;
