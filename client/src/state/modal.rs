//! Edit-modal state machine.
//!
//! `Closed → Loading → Open → Closed`. Opening fetches the block's current
//! data; the form is built from the kind's schema and saved by merging the
//! collected values over that fetched record.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use canvas::doc::{BlockId, BlockKind, merge_data};
use canvas::form::{FormError, FormSchema, FormValues, SliderDraft, schema};
use serde_json::{Value, json};

/// An open edit form.
#[derive(Clone, Debug, PartialEq)]
pub struct EditSession {
    pub id: BlockId,
    pub kind: BlockKind,
    /// Block data as fetched when the modal opened.
    pub fetched: Value,
    /// Current raw input values.
    pub values: FormValues,
    /// Working image list for sliders.
    pub slides: SliderDraft,
    /// Message from the last failed save attempt.
    pub error: Option<String>,
    /// A save or upload is in flight.
    pub busy: bool,
}

impl EditSession {
    #[must_use]
    pub fn new(id: BlockId, kind: BlockKind, fetched: Value) -> Self {
        let values = schema(kind).initial_values(&fetched);
        let slides = SliderDraft::from_data(&fetched);
        Self { id, kind, fetched, values, slides, error: None, busy: false }
    }

    #[must_use]
    pub fn schema(&self) -> &'static FormSchema {
        schema(self.kind)
    }

    pub fn set_value(&mut self, name: &str, value: String) {
        self.values.insert(name.to_owned(), value);
    }

    #[must_use]
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map_or("", String::as_str)
    }

    /// The full record to save: collected form values (plus an uploaded
    /// image URL or the slider list) merged over the fetched data.
    ///
    /// # Errors
    ///
    /// Returns the first field that fails validation.
    pub fn build_data(&self, uploaded_url: Option<&str>) -> Result<Value, FormError> {
        let mut patch = self.schema().collect(&self.values)?;
        if let Some(url) = uploaded_url {
            patch.insert("url".to_owned(), json!(url));
        }
        if self.kind == BlockKind::Slider {
            patch.insert("images".to_owned(), self.slides.to_value());
        }
        Ok(merge_data(&self.fetched, &patch))
    }
}

/// Fill an image block's `url` from its uploaded file when the data has none.
#[must_use]
pub fn seed_image_url(mut data: Value, image_url: Option<String>) -> Value {
    let Some(url) = image_url else {
        return data;
    };
    if let Value::Object(map) = &mut data {
        let missing = map.get("url").and_then(Value::as_str).is_none_or(str::is_empty);
        if missing {
            map.insert("url".to_owned(), Value::String(url));
        }
    }
    data
}

/// Where the modal is in its lifecycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    /// Waiting for the block fetch.
    Loading { id: BlockId, kind: BlockKind },
    Open(EditSession),
}

impl ModalState {
    /// Begin opening the editor for a block. Ignored while another block's
    /// modal is loading or open.
    pub fn request(&mut self, id: BlockId, kind: BlockKind) -> bool {
        if !matches!(self, Self::Closed) {
            return false;
        }
        *self = Self::Loading { id, kind };
        true
    }

    /// Fetched data arrived. Ignored unless still loading that block.
    pub fn loaded(&mut self, id: BlockId, data: Value) -> bool {
        match *self {
            Self::Loading { id: loading, kind } if loading == id => {
                *self = Self::Open(EditSession::new(id, kind, data));
                true
            }
            _ => false,
        }
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }

    #[must_use]
    pub fn session(&self) -> Option<&EditSession> {
        match self {
            Self::Open(session) => Some(session),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut EditSession> {
        match self {
            Self::Open(session) => Some(session),
            _ => None,
        }
    }
}
