use sea_orm::{ActiveEnum, Iterable};

use crate::sea_orm_active_enums::NoteColor;

pub trait NoteColorTrait: Sized {
    fn symbol(&self) -> String;
    fn label(&self) -> &'static str;
    fn from_symbol(symbol: &str) -> Option<Self>;
}

impl NoteColorTrait for NoteColor {
    fn symbol(&self) -> String {
        self.to_value()
    }

    fn label(&self) -> &'static str {
        match self {
            NoteColor::Yellow => "yellow",
            NoteColor::White => "white",
            NoteColor::Green => "green",
            NoteColor::Red => "red",
            NoteColor::Blue => "blue",
        }
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        NoteColor::iter().find(|color| color.to_value() == symbol)
    }
}
