//! Text-generation collaborator for prose insights

pub mod generator;
pub mod insights;
pub mod prompts;
