//! Prompt construction: Handlebars rendering and the role catalog.

pub mod render;
pub mod roles;

pub use render::PromptRenderer;
pub use roles::{ModelTier, Role};
