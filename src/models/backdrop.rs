//! Full-screen background media and its text overlay.

use crate::config::backdrop;

/// Kind of media element placed behind the panels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MediaKind {
    #[default]
    Image,
    /// Autoplaying, looping, muted video.
    Video,
}

/// Background content; replaced wholesale on every change.
#[derive(Clone, Debug, PartialEq)]
pub struct Backdrop {
    pub source: String,
    pub kind: MediaKind,
    pub title: String,
    pub tags: String,
}

impl Backdrop {
    /// Still image without overlay text.
    pub fn image(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            kind: MediaKind::Image,
            title: String::new(),
            tags: String::new(),
        }
    }

    pub fn video(source: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Video,
            ..Self::image(source)
        }
    }

    pub fn with_text(mut self, title: impl Into<String>, tags: impl Into<String>) -> Self {
        self.title = title.into();
        self.tags = tags.into();
        self
    }

    /// Backdrop shown while no item is hovered.
    pub fn idle() -> Self {
        Self::video(backdrop::IDLE_VIDEO).with_text(backdrop::IDLE_TITLE, backdrop::IDLE_TAGS)
    }

    /// Backdrop for the hovered item at `index`.
    pub fn for_item(index: usize) -> Self {
        Self::image(backdrop::item_image(index))
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}
