//! Document input
//! Handles format detection, text extraction, and input management

pub mod file_detector;
pub mod manager;
pub mod text_extractor;

pub use manager::InputManager;
