pub mod face;
pub mod primitive;
pub mod skeleton;
pub mod window;

pub use primitive::{Color, DrawPrimitive, Scene};
pub use window::MinifbRenderer;
