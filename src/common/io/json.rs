use std::{fs::File, io::{BufReader, BufWriter, Write}, path::Path};

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};

use crate::common::create_file;

/// Writes a serializable value as pretty-printed JSON to `path`.
pub(crate) fn write_to_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut writer = BufWriter::new(create_file(path)?);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("Failed to write JSON file: {}", path.display()))?;
    writer.flush()?;
    Ok(())
}

/// Reads a deserializable value from the JSON file at `path`.
pub(crate) fn read_from_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)
        .with_context(|| format!("Failed to read JSON file: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse JSON file: {}", path.display()))
}
