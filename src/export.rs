// ABOUTME: Export dispatch: pairs generated payloads with their suggested filenames
// ABOUTME: Writes the raw JSON configuration or the HTML bundle to disk

use crate::bundle::{generate_bundle, BundleOptions};
use crate::errors::{Result, SliderError};
use crate::model::SliderData;
use crate::utils;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

pub const JSON_FILENAME: &str = "slider-config.json";
pub const HTML_FILENAME: &str = "slider-export.html";

/// A finished payload and the filename it should be saved under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub filename: String,
    pub contents: String,
}

/// Pretty-printed JSON of the whole deck
pub fn export_json(data: &SliderData) -> Result<ExportArtifact> {
    Ok(ExportArtifact {
        filename: JSON_FILENAME.to_string(),
        contents: data.to_json_pretty()?,
    })
}

/// The standalone HTML bundle
pub fn export_bundle(data: &SliderData, options: &BundleOptions) -> ExportArtifact {
    ExportArtifact {
        filename: HTML_FILENAME.to_string(),
        contents: generate_bundle(data, options),
    }
}

/// Write an artifact to an explicit path, creating parent directories
pub fn write_to_path(artifact: &ExportArtifact, output_path: &Path) -> Result<()> {
    info!("Writing {} to file: {:?}", artifact.filename, output_path);

    utils::ensure_parent_directory_exists(output_path)?;
    fs::write(output_path, &artifact.contents).map_err(SliderError::FileReadError)?;

    Ok(())
}

/// Write an artifact into `dir` under its suggested filename
pub fn write_artifact(artifact: &ExportArtifact, dir: &Path) -> Result<PathBuf> {
    utils::ensure_directory_exists(dir)?;
    let path = dir.join(&artifact.filename);
    write_to_path(artifact, &path)?;
    Ok(path)
}
