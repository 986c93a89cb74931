//! CLI command handlers. Each command is in its own file.

mod deck;
mod fetch;
mod generate;
mod render;

pub use fetch::run_fetch;
pub use generate::run_generate;
pub use render::run_render;
