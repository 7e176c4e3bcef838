use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::surface::RasterSurface;
use thiserror::Error;

const PICTURES_SUBDIR: &str = "Pictures";
const PNG_EXTENSION: &str = "png";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("missing HOME environment variable")]
    MissingHomeDirectory,
    #[error("export file name is empty")]
    EmptyFileName,
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("png encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Destination for saved drawings.
pub trait DrawingStorage {
    fn save_drawing(&self, surface: &RasterSurface, file_name: &str) -> StorageResult<PathBuf>;
}

#[derive(Debug, Clone)]
pub struct StorageService {
    export_dir: PathBuf,
}

impl StorageService {
    pub const fn with_export_dir(export_dir: PathBuf) -> Self {
        Self { export_dir }
    }

    pub fn with_default_paths() -> StorageResult<Self> {
        let home = std::env::var("HOME").map_err(|_| StorageError::MissingHomeDirectory)?;
        let mut export_dir = PathBuf::from(home);
        export_dir.push(PICTURES_SUBDIR);
        Ok(Self::with_export_dir(export_dir))
    }

    /// Uses `export_dir` from the config, or `$HOME/Pictures` when unset.
    pub fn from_config(config: &AppConfig) -> StorageResult<Self> {
        match &config.export_dir {
            Some(dir) => Ok(Self::with_export_dir(dir.clone())),
            None => Self::with_default_paths(),
        }
    }

    /// Resolves the target file under the export directory, appending `.png`
    /// to the last path component when it lacks the extension.
    pub fn allocate_target_path(&self, file_name: &str) -> StorageResult<PathBuf> {
        let file_name = file_name.trim();
        if file_name.is_empty() {
            return Err(StorageError::EmptyFileName);
        }

        let mut path = self.export_dir.clone();
        path.push(file_name);
        let has_png_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(PNG_EXTENSION));
        if !has_png_extension {
            let mut name = path.file_name().map(OsString::from).unwrap_or_default();
            name.push(".");
            name.push(PNG_EXTENSION);
            path.set_file_name(name);
        }
        Ok(path)
    }

    pub fn save_drawing(&self, surface: &RasterSurface, file_name: &str) -> StorageResult<PathBuf> {
        let target = self.allocate_target_path(file_name)?;
        export_png(surface, &target)?;
        tracing::info!(path = %target.display(), "saved drawing");
        Ok(target)
    }
}

impl DrawingStorage for StorageService {
    fn save_drawing(&self, surface: &RasterSurface, file_name: &str) -> StorageResult<PathBuf> {
        self.save_drawing(surface, file_name)
    }
}

/// Writes `surface` as PNG, replacing any existing file at `destination`.
pub fn export_png<P: AsRef<Path>>(surface: &RasterSurface, destination: P) -> StorageResult<()> {
    let destination = destination.as_ref();

    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let _ = fs::remove_file(destination);
    surface
        .as_image()
        .save_with_format(destination, image::ImageFormat::Png)?;
    Ok(())
}
