pub mod etl;
pub mod formatter;
pub mod pipeline;
pub mod prompt;

pub use crate::domain::model::{LoadReport, RawCompletion, TextDocument};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage, TextGenerator};
pub use crate::utils::error::Result;
