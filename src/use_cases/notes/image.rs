use std::{fs, io, path::PathBuf};

pub(crate) const INVALID_IMAGE: &str =
    "Upload a valid image. The file you uploaded was either not an image or a corrupted image.";

const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// An uploaded file already received to a temporary location.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: Option<String>,
    pub size: usize,
    pub path: PathBuf,
}

impl ImageUpload {
    pub fn extension(&self) -> Option<String> {
        self.file_name
            .as_deref()
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_lowercase())
    }

    /// The extension must be a known image one and the contents must decode.
    pub(crate) fn is_acceptable(&self) -> bool {
        let has_image_extension = self
            .extension()
            .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()));
        if self.size == 0 || !has_image_extension {
            return false;
        }
        match fs::read(&self.path) {
            Ok(bytes) => image::load_from_memory(&bytes).is_ok(),
            Err(e) => {
                tracing::event!(
                    target: "backend",
                    tracing::Level::WARN,
                    "Could not read uploaded file {:?}: {}",
                    self.path,
                    e
                );
                false
            }
        }
    }
}

/// Where note images end up. Returns the stored path relative to the media root.
pub trait ImageStore {
    fn store(&self, upload: &ImageUpload) -> io::Result<String>;
    fn discard(&self, stored_path: &str);
}
