pub mod config;
pub mod convert;
pub mod error;
pub mod logger;
pub mod record;

pub use config::{Config, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
pub use convert::{Summary, convert, try_convert};
pub use error::{ConvertError, Result};
pub use record::{FIELDS, Product};
