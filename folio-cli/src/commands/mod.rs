pub mod prepare;
pub mod render;
pub mod styles;
