use crate::traits::DocumentSurface;
use crate::types::FontFace;
use std::ops::{Deref, DerefMut};

/// Holds a surface with a temporarily selected font.
///
/// The font that was active when the scope was opened is selected again on
/// drop, including when the scope is left through `?`.
pub struct FontScope<'a, S: DocumentSurface + ?Sized> {
    surface: &'a mut S,
    restore: FontFace,
}

impl<'a, S: DocumentSurface + ?Sized> FontScope<'a, S> {
    pub fn new(surface: &'a mut S, font: FontFace) -> Self {
        let restore = surface.font();
        surface.set_font(font);
        Self { surface, restore }
    }
}

impl<S: DocumentSurface + ?Sized> Deref for FontScope<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: DocumentSurface + ?Sized> DerefMut for FontScope<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: DocumentSurface + ?Sized> Drop for FontScope<'_, S> {
    fn drop(&mut self) {
        self.surface.set_font(self.restore);
    }
}
