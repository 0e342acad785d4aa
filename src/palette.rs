//! Emoji palette - the drag source for new emojis.

use crate::settings::Settings;
use crate::types::DropPayload;

#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    emojis: Vec<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl Palette {
    pub fn new(emojis: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            emojis: emojis
                .into_iter()
                .map(Into::into)
                .filter(|e: &String| !e.trim().is_empty())
                .collect(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.palette.iter().cloned())
    }

    pub fn emojis(&self) -> &[String] {
        &self.emojis
    }

    pub fn len(&self) -> usize {
        self.emojis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emojis.is_empty()
    }

    /// What dragging the emoji at `index` out of the palette carries.
    pub fn drag_payload(&self, index: usize) -> Option<DropPayload> {
        self.emojis.get(index).map(|e| DropPayload::Text(e.clone()))
    }
}
