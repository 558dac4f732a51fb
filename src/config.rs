use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_INPUT_PATH: &str = "data/products.json";
pub const DEFAULT_OUTPUT_PATH: &str = "data/products.csv";

/// Convert a JSON array of products to a CSV file.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about = "Convert products JSON to CSV", long_about = None)]
pub struct Config {
    /// JSON file holding an array of product objects
    #[arg(default_value = DEFAULT_INPUT_PATH)]
    pub input_path: PathBuf,

    /// Destination CSV file, overwritten if it exists
    #[arg(default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: PathBuf,
}

impl Config {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH)
    }
}
