// Adapters layer: concrete implementations of the domain ports (file input, rendered output).

pub mod loader;
pub mod render;

pub use loader::{FileRosterLoader, InMemoryRoster};
pub use render::{renderer_for, JsonRenderer, TextRenderer};
