//! Lossless export of the rendered raster and the frequency table

use std::io::Cursor;

use image::{ImageFormat, RgbImage};

use crate::io::error::{CloudError, Result};
use crate::text::ranking::WordEntry;

/// Encode a rendered canvas as PNG bytes
///
/// # Errors
///
/// Returns an error if PNG encoding fails.
pub fn encode_png(canvas: &RgbImage) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    canvas
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|source| CloudError::ImageExport { path: None, source })?;
    Ok(buffer.into_inner())
}

/// Encode a ranked word list as a CSV table with columns `word,frequency`
///
/// UTF-8 throughout; parsing the bytes back with a CSV reader yields the
/// same word and weight sequence.
///
/// # Errors
///
/// Returns an error if CSV serialization fails.
pub fn encode_table(entries: &[WordEntry]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(["word", "frequency"])
        .map_err(table_error)?;
    for entry in entries {
        writer
            .write_record([entry.word.as_str(), &entry.weight.to_string()])
            .map_err(table_error)?;
    }

    writer
        .into_inner()
        .map_err(|e| CloudError::TableExport {
            reason: e.to_string(),
        })
}

fn table_error(err: csv::Error) -> CloudError {
    CloudError::TableExport {
        reason: err.to_string(),
    }
}
