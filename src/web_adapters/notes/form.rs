use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use use_cases::notes::{image::ImageUpload, types::NoteForm};

#[derive(MultipartForm)]
pub struct NoteMultipart {
    title: Option<Text<String>>,
    description: Option<Text<String>>,
    date: Option<Text<String>>,
    color: Option<Text<String>>,
    pinned: Option<Text<String>>,
    image_clear: Option<Text<String>>,
    tags: Vec<Text<String>>,
    #[multipart(limit = "10MB")]
    image: Option<TempFile>,
}

impl NoteMultipart {
    /// Splits the payload into form values and the uploaded file. An empty file
    /// input counts as no upload. The temp file is removed once dropped.
    pub fn into_parts(self) -> (NoteForm, Option<TempFile>) {
        let text = |value: Option<Text<String>>| value.map(Text::into_inner);
        let form = NoteForm {
            title: text(self.title),
            description: text(self.description),
            date: text(self.date),
            color: text(self.color),
            pinned: text(self.pinned),
            tags: self.tags.into_iter().map(Text::into_inner).collect(),
            image_clear: text(self.image_clear),
        };
        (form, self.image.filter(|file| file.size > 0))
    }
}

pub fn image_upload(file: &TempFile) -> ImageUpload {
    ImageUpload {
        file_name: file.file_name.clone(),
        size: file.size,
        path: file.file.path().to_path_buf(),
    }
}
