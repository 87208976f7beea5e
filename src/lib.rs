pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::gemini::GeminiClient;
pub use crate::config::{cli::LocalStorage, credentials::load_api_key, CliConfig};
pub use crate::core::{etl::EtlEngine, formatter::clean_response, pipeline::NewsPipeline};
pub use crate::utils::error::{EtlError, Result};
