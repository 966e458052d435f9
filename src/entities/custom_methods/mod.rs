mod note_color;

pub use note_color::NoteColorTrait;
