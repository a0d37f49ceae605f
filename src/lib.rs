pub mod body;
pub mod config;
pub mod face;
pub mod projection;
pub mod render;
pub mod rotation;
pub mod sensor;
pub mod viewer;
