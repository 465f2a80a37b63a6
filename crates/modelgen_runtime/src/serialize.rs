//! Model-set loading and saving.
//!
//! Model sets are read from JSON or `MessagePack` files, chosen by extension,
//! and saved as `MessagePack`. A JSON document may be either a bare array of
//! models or an object with a `models` array; `MessagePack` files hold a bare
//! array as written by [`save_models`].

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use modelgen_foundation::{Error, ErrorKind, Model, Result};
use serde::Deserialize;

/// On-disk encoding of a model set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputFormat {
    /// `.json`
    Json,
    /// `.msgpack` / `.mp`
    MessagePack,
}

impl InputFormat {
    /// Detects the encoding from a file extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is missing or unknown.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("msgpack" | "mp") => Ok(Self::MessagePack),
            _ => Err(Error::new(ErrorKind::Io(format!(
                "cannot determine model format of '{}': expected .json, .msgpack, or .mp",
                path.display()
            )))),
        }
    }
}

/// Accepted shapes of a JSON model-set document.
#[derive(Deserialize)]
#[serde(untagged)]
enum ModelSetDocument {
    Bare(Vec<Model>),
    Wrapped { models: Vec<Model> },
}

impl ModelSetDocument {
    fn into_models(self) -> Vec<Model> {
        match self {
            Self::Bare(models) | Self::Wrapped { models } => models,
        }
    }
}

/// Serializes a model set to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(models: &[Model]) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(models).map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
}

/// Deserializes a model set from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails.
pub fn from_bytes(bytes: &[u8]) -> Result<Vec<Model>> {
    rmp_serde::from_slice(bytes)
        .map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
}

/// Deserializes a model set from JSON text.
///
/// # Errors
///
/// Returns an error if the text is not a valid model-set document.
pub fn from_json(text: &str) -> Result<Vec<Model>> {
    serde_json::from_str::<ModelSetDocument>(text)
        .map(ModelSetDocument::into_models)
        .map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
}

/// Saves a model set to a file using `MessagePack` format.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to,
/// or if serialization fails.
pub fn save_models<P: AsRef<Path>>(path: P, models: &[Model]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| io_error("create", path, &e))?;

    let mut writer = BufWriter::new(file);
    let bytes = to_bytes(models)?;

    writer
        .write_all(&bytes)
        .map_err(|e| io_error("write to", path, &e))?;
    writer.flush().map_err(|e| io_error("flush", path, &e))?;

    Ok(())
}

/// Loads a model set, decoding it according to the file extension.
///
/// Slugs and plural slugs are checked for uniqueness after decoding.
///
/// # Errors
///
/// Returns an error if the file cannot be read, cannot be decoded, or
/// contains duplicate slugs.
pub fn load_models<P: AsRef<Path>>(path: P) -> Result<Vec<Model>> {
    let path = path.as_ref();
    let format = InputFormat::from_path(path)?;

    let file = File::open(path).map_err(|e| io_error("open", path, &e))?;
    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| io_error("read", path, &e))?;

    let models = match format {
        InputFormat::Json => {
            let text = std::str::from_utf8(&bytes).map_err(|e| {
                Error::new(ErrorKind::Serialization(format!(
                    "'{}' is not valid UTF-8: {e}",
                    path.display()
                )))
            })?;
            from_json(text)?
        }
        InputFormat::MessagePack => from_bytes(&bytes)?,
    };

    Model::validate_set(&models)?;
    Ok(models)
}

fn io_error(action: &str, path: &Path, e: &std::io::Error) -> Error {
    Error::new(ErrorKind::Io(format!(
        "failed to {action} file '{}': {e}",
        path.display()
    )))
}
