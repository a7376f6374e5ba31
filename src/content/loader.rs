//! Content Loader
//!
//! Reads content documents from disk or from the bundled sample.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use super::ContentDocument;
use crate::assets::{Assets, SAMPLE_CONTENT_PATH};
use crate::error::{Error, Result};

/// Serialization format of a content file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    Toml,
    Json,
}

impl ContentFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(ContentFormat::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(ContentFormat::Json),
            _ => Err(Error::UnsupportedContent {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Where the rendered content came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// The sample bundled into the binary
    BuiltIn,
    /// A content file on disk
    File(PathBuf),
}

/// Parse a content document
pub fn parse_content(text: &str, format: ContentFormat) -> Result<ContentDocument> {
    let document = match format {
        ContentFormat::Toml => toml::from_str(text)?,
        ContentFormat::Json => serde_json::from_str(text)?,
    };
    Ok(document)
}

/// Load a content document from a file
pub fn load_content(path: &Path) -> Result<ContentDocument> {
    let format = ContentFormat::from_path(path)?;
    info!(path = ?path, format = ?format, "Loading content file");
    let text = fs::read_to_string(path)?;
    parse_content(&text, format)
}

/// The sample document bundled with the gallery
pub fn builtin_content() -> Result<ContentDocument> {
    let Some(file) = Assets::get(SAMPLE_CONTENT_PATH) else {
        return Err(Error::Invalid {
            message: format!("missing bundled asset {SAMPLE_CONTENT_PATH}"),
        });
    };
    let text = std::str::from_utf8(&file.data).map_err(|e| Error::Invalid {
        message: format!("bundled sample is not UTF-8: {e}"),
    })?;
    parse_content(text, ContentFormat::Toml)
}

/// Load `path` if given, falling back to the bundled sample.
///
/// A file that fails to load is reported through the returned error message
/// while the sample is shown in its place.
pub fn resolve_content(path: Option<&Path>) -> (ContentDocument, ContentSource, Option<String>) {
    let mut load_error = None;

    if let Some(path) = path {
        match load_content(path) {
            Ok(document) => return (document, ContentSource::File(path.to_path_buf()), None),
            Err(e) => {
                error!(error = %e, path = ?path, "Failed to load content file");
                load_error = Some(e.to_string());
            }
        }
    }

    let document = builtin_content().unwrap_or_else(|e| {
        error!(error = %e, "Failed to load bundled sample content");
        ContentDocument::default()
    });

    (document, ContentSource::BuiltIn, load_error)
}
