use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use csv::{Terminator, WriterBuilder};
use tracing::debug;

use crate::config::Config;
use crate::error::{ConvertError, Result};
use crate::record::{FIELDS, Product};

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub records: usize,
}

/// Runs a conversion and reports the outcome on the console.
///
/// Returns `true` when the CSV was written. Every failure is printed as a
/// single line and turned into `false`.
pub fn convert(config: &Config) -> bool {
    match try_convert(config) {
        Ok(summary) => {
            println!("{summary}");
            true
        }
        Err(e) => {
            debug!("conversion failed: {e:?}");
            eprintln!("{}", failure_message(&e));
            false
        }
    }
}

/// The single line printed when a conversion fails.
pub fn failure_message(err: &ConvertError) -> String {
    format!("Error: {err}")
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Successfully converted {} to {}",
            self.input.display(),
            self.output.display()
        )?;
        write!(f, "Total products: {}", self.records)
    }
}

pub fn try_convert(config: &Config) -> Result<Summary> {
    let products = load_products(&config.input_path)?;
    if products.is_empty() {
        return Err(ConvertError::EmptyInput {
            path: config.input_path.clone(),
        });
    }

    let csv = render_csv(&products)?;
    write_output(&config.output_path, &csv)?;

    Ok(Summary {
        input: config.input_path.clone(),
        output: config.output_path.clone(),
        records: products.len(),
    })
}

/// Reads the input file and decodes it as an array of products.
pub fn load_products(path: &Path) -> Result<Vec<Product>> {
    let bytes = fs::read(path).map_err(|e| ConvertError::from_io(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "read input");

    // Invalid UTF-8 surfaces here as a parse error
    let products: Vec<Product> =
        serde_json::from_slice(&bytes).map_err(|source| ConvertError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(records = products.len(), "decoded products");
    Ok(products)
}

/// Encodes the header and one row per product into an in-memory CSV document.
pub fn render_csv(products: &[Product]) -> Result<Vec<u8>> {
    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(FIELDS)?;
    for product in products {
        wtr.write_record(product.to_row())?;
    }

    wtr.into_inner()
        .map_err(|e| ConvertError::Csv(csv::Error::from(e.into_error())))
}

fn write_output(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ConvertError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    fs::write(path, data).map_err(|e| ConvertError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(path = %path.display(), bytes = data.len(), "wrote output");
    Ok(())
}
