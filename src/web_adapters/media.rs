use std::{fs, io, path::PathBuf};

use common::settings::types::Settings;
use tracing::{event, Level};
use use_cases::notes::image::{ImageStore, ImageUpload};
use uuid::Uuid;

/// Copies uploaded images below the media root as `images/<uuid>.<ext>`.
pub struct MediaStore {
    root: PathBuf,
}

impl MediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.application.media_root)
    }
}

impl ImageStore for MediaStore {
    fn store(&self, upload: &ImageUpload) -> io::Result<String> {
        let extension = upload.extension().unwrap_or_else(|| "img".to_string());
        let relative = format!("images/{}.{}", Uuid::now_v7(), extension);
        let target = self.root.join(&relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&upload.path, &target)?;
        event!(target: "backend", Level::INFO, "Stored image at {}", relative);
        Ok(relative)
    }

    fn discard(&self, stored_path: &str) {
        if let Err(e) = fs::remove_file(self.root.join(stored_path)) {
            event!(target: "backend", Level::WARN, "Error removing image {}: {:?}", stored_path, e);
        }
    }
}
