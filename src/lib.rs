pub mod image_pipeline;
pub mod logger;
mod cli;

pub use cli::{Arguments, CLIParser};
