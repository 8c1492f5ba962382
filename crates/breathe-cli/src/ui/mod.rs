pub mod chime;
pub mod farewell;
pub mod input;
pub mod render;
pub mod screen;
