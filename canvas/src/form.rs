//! Declarative edit-form schema for each block kind.
//!
//! Each kind has a table of fields (name, label, input kind, default,
//! validation). The edit modal renders the table and [`FormSchema::collect`]
//! turns the raw string values back into a typed JSON patch. The defaults in
//! this table are also what the renderer shows for unset fields.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::consts::MIN_SLIDE_INTERVAL_MS;
use crate::doc::{BlockKind, parse_number};

/// Raw form values keyed by field name, as read from the inputs.
pub type FormValues = BTreeMap<String, String>;

/// One `<option>` of a select input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

const fn choice(value: &'static str, label: &'static str) -> Choice {
    Choice { value, label }
}

pub const ALIGN_CHOICES: &[Choice] = &[choice("left", "Left"), choice("center", "Center"), choice("right", "Right")];

pub const LEVEL_CHOICES: &[Choice] = &[
    choice("h1", "H1"),
    choice("h2", "H2"),
    choice("h3", "H3"),
    choice("h4", "H4"),
    choice("h5", "H5"),
    choice("h6", "H6"),
];

pub const FIT_CHOICES: &[Choice] = &[
    choice("contain", "contain"),
    choice("cover", "cover"),
    choice("fill", "fill"),
    choice("none", "none"),
    choice("scale-down", "scale-down"),
];

pub const BUTTON_STYLE_CHOICES: &[Choice] = &[
    choice("primary", "Primary"),
    choice("secondary", "Secondary"),
    choice("success", "Success"),
    choice("danger", "Danger"),
];

pub const BUTTON_SIZE_CHOICES: &[Choice] = &[choice("small", "Small"), choice("medium", "Medium"), choice("large", "Large")];

/// How a field is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    TextArea { rows: u32 },
    Select(&'static [Choice]),
    Number { min: i64, step: i64 },
    Checkbox,
}

/// Extra constraint checked on save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    None,
    /// A non-negative CSS length (`16px`, `1.5rem`, `50%`, `0`).
    CssLength,
    /// A whole number no smaller than the bound.
    IntAtLeast(i64),
    /// A CSS color, or empty.
    CssColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub input: InputKind,
    /// Used when the value is left empty.
    pub default: &'static str,
    pub validation: Validation,
}

const fn field(name: &'static str, label: &'static str, input: InputKind, default: &'static str) -> FieldSpec {
    FieldSpec { name, label, input, default, validation: Validation::None }
}

const fn validated(name: &'static str, label: &'static str, input: InputKind, default: &'static str, validation: Validation) -> FieldSpec {
    FieldSpec { name, label, input, default, validation }
}

/// File upload offered by the modal, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upload {
    None,
    /// One file whose URL replaces the `url` field.
    Single,
    /// Files appended to the slider's image list.
    Gallery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSchema {
    pub kind: BlockKind,
    pub title: &'static str,
    pub upload: Upload,
    pub fields: &'static [FieldSpec],
}

/// Validation failure for a single field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{label}: \"{value}\" is not a valid CSS length")]
    InvalidLength { label: &'static str, value: String },
    #[error("{label}: \"{value}\" is not a valid CSS color")]
    InvalidColor { label: &'static str, value: String },
    #[error("{label}: expected a whole number of at least {min}, got \"{value}\"")]
    InvalidNumber { label: &'static str, min: i64, value: String },
    #[error("{label}: \"{value}\" is not one of the allowed options")]
    NotAnOption { label: &'static str, value: String },
}

static SCHEMAS: [FormSchema; 6] = [
    FormSchema {
        kind: BlockKind::Text,
        title: "Edit text",
        upload: Upload::None,
        fields: &[
            field("content", "Text", InputKind::TextArea { rows: 4 }, "Text"),
            validated("size", "Font size", InputKind::Text, "16px", Validation::CssLength),
            field("align", "Alignment", InputKind::Select(ALIGN_CHOICES), "left"),
        ],
    },
    FormSchema {
        kind: BlockKind::Heading,
        title: "Edit heading",
        upload: Upload::None,
        fields: &[
            field("content", "Text", InputKind::Text, "Heading"),
            field("level", "Level", InputKind::Select(LEVEL_CHOICES), "h1"),
            field("align", "Alignment", InputKind::Select(ALIGN_CHOICES), "left"),
        ],
    },
    FormSchema {
        kind: BlockKind::Image,
        title: "Edit image",
        upload: Upload::Single,
        fields: &[
            field("url", "Image URL", InputKind::Text, ""),
            field("alt", "Alternative text", InputKind::Text, "Image"),
            field("fit", "Fit mode (object-fit)", InputKind::Select(FIT_CHOICES), "contain"),
        ],
    },
    FormSchema {
        kind: BlockKind::Button,
        title: "Edit button",
        upload: Upload::None,
        fields: &[
            field("text", "Text", InputKind::Text, "Button"),
            field("link", "Link", InputKind::Text, "#"),
            field("style", "Style", InputKind::Select(BUTTON_STYLE_CHOICES), "primary"),
            field("size", "Size", InputKind::Select(BUTTON_SIZE_CHOICES), "medium"),
            field("align", "Alignment", InputKind::Select(ALIGN_CHOICES), "left"),
            validated("border_radius", "Corner radius", InputKind::Text, "8px", Validation::CssLength),
            validated("bg_color", "Custom background (empty for preset)", InputKind::Text, "", Validation::CssColor),
            validated("text_color", "Custom text color", InputKind::Text, "", Validation::CssColor),
        ],
    },
    FormSchema {
        kind: BlockKind::Video,
        title: "Edit video",
        upload: Upload::None,
        fields: &[
            field("url", "Video URL", InputKind::Text, ""),
            field("fit", "Fit mode (object-fit)", InputKind::Select(FIT_CHOICES), "contain"),
            field("autoplay", "Autoplay", InputKind::Checkbox, "false"),
        ],
    },
    FormSchema {
        kind: BlockKind::Slider,
        title: "Edit slider",
        upload: Upload::Gallery,
        fields: &[
            field("autoplay", "Autoplay", InputKind::Checkbox, "true"),
            validated(
                "interval",
                "Interval (ms)",
                InputKind::Number { min: MIN_SLIDE_INTERVAL_MS, step: 500 },
                "3000",
                Validation::IntAtLeast(MIN_SLIDE_INTERVAL_MS),
            ),
        ],
    },
];

/// The form schema for `kind`.
#[must_use]
pub fn schema(kind: BlockKind) -> &'static FormSchema {
    match kind {
        BlockKind::Text => &SCHEMAS[0],
        BlockKind::Heading => &SCHEMAS[1],
        BlockKind::Image => &SCHEMAS[2],
        BlockKind::Button => &SCHEMAS[3],
        BlockKind::Video => &SCHEMAS[4],
        BlockKind::Slider => &SCHEMAS[5],
    }
}

/// Default for field `name` of `kind`, if the field exists.
#[must_use]
pub fn default_value(kind: BlockKind, name: &str) -> Option<&'static str> {
    schema(kind).field(name).map(|f| f.default)
}

impl FormSchema {
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Form values pre-filled from a block's data record. Select fields take
    /// the matching option ignoring case, or the default when none matches.
    #[must_use]
    pub fn initial_values(&self, data: &Value) -> FormValues {
        self.fields
            .iter()
            .map(|f| {
                let value = match data.get(f.name) {
                    Some(Value::String(s)) => s.clone(),
                    Some(Value::Bool(b)) => b.to_string(),
                    Some(Value::Number(n)) => n.to_string(),
                    _ => f.default.to_owned(),
                };
                let value = match f.input {
                    InputKind::Select(choices) => choice_for(choices, &value).unwrap_or(f.default).to_owned(),
                    _ => value,
                };
                (f.name.to_owned(), value)
            })
            .collect()
    }

    /// Validate `values` and convert them into a data patch. Empty or missing
    /// values take the field default.
    ///
    /// # Errors
    ///
    /// Returns the first field that fails validation.
    pub fn collect(&self, values: &FormValues) -> Result<Map<String, Value>, FormError> {
        let mut patch = Map::new();
        for f in self.fields {
            let raw = values.get(f.name).map_or("", |v| v.trim());
            let raw = if raw.is_empty() { f.default } else { raw };
            patch.insert(f.name.to_owned(), convert(f, raw)?);
        }
        Ok(patch)
    }
}

fn choice_for(choices: &[Choice], raw: &str) -> Option<&'static str> {
    let raw = raw.trim();
    choices.iter().find(|c| c.value.eq_ignore_ascii_case(raw)).map(|c| c.value)
}

fn convert(f: &FieldSpec, raw: &str) -> Result<Value, FormError> {
    if let InputKind::Select(choices) = f.input {
        if !choices.iter().any(|c| c.value == raw) {
            return Err(FormError::NotAnOption { label: f.label, value: raw.to_owned() });
        }
    }
    match f.validation {
        Validation::CssLength if !is_css_length(raw) => {
            return Err(FormError::InvalidLength { label: f.label, value: raw.to_owned() });
        }
        Validation::CssColor if !raw.is_empty() && !is_css_color(raw) => {
            return Err(FormError::InvalidColor { label: f.label, value: raw.to_owned() });
        }
        Validation::IntAtLeast(min) => {
            return match raw.parse::<i64>() {
                Ok(n) if n >= min => Ok(Value::from(n)),
                _ => Err(FormError::InvalidNumber { label: f.label, min, value: raw.to_owned() }),
            };
        }
        _ => {}
    }
    Ok(match f.input {
        InputKind::Checkbox => Value::Bool(raw == "true"),
        _ => Value::from(raw),
    })
}

const CSS_UNITS: [&str; 8] = ["px", "rem", "em", "%", "vh", "vw", "pt", "ch"];

/// Non-negative number with an optional CSS unit. Unitless is only allowed for zero.
#[must_use]
pub fn is_css_length(raw: &str) -> bool {
    let raw = raw.trim();
    let (num, unit) = CSS_UNITS
        .iter()
        .find_map(|u| raw.strip_suffix(u).map(|n| (n, *u)))
        .unwrap_or((raw, ""));
    match parse_number(num) {
        Some(v) if v >= 0.0 && !num.trim().is_empty() => !unit.is_empty() || v == 0.0,
        _ => false,
    }
}

/// A hex color (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`), a named color, or
/// an `rgb()`/`rgba()`/`hsl()`/`hsla()` call. Nothing that could close the
/// declaration it is placed in.
#[must_use]
pub fn is_css_color(raw: &str) -> bool {
    let raw = raw.trim();
    if let Some(hex) = raw.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    if let Some((name, rest)) = raw.split_once('(') {
        let Some(args) = rest.strip_suffix(')') else {
            return false;
        };
        return matches!(name.to_ascii_lowercase().as_str(), "rgb" | "rgba" | "hsl" | "hsla")
            && args
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | ',' | ' ' | '%' | '/' | '-'));
    }
    !raw.is_empty() && raw.chars().all(|c| c.is_ascii_alphabetic())
}

/// Transient image list edited in the slider modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SliderDraft {
    images: Vec<String>,
}

impl SliderDraft {
    /// Start from the slider's stored image list.
    #[must_use]
    pub fn from_data(data: &Value) -> Self {
        let images = crate::doc::BlockProps::new(BlockKind::Slider, data)
            .images()
            .into_iter()
            .map(str::to_owned)
            .collect();
        Self { images }
    }

    #[must_use]
    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Append a URL. Blank input is ignored.
    pub fn push(&mut self, url: &str) -> bool {
        let url = url.trim();
        if url.is_empty() {
            return false;
        }
        self.images.push(url.to_owned());
        true
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.images.len()).then(|| self.images.remove(index))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// The `images` value written on save.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::from(self.images.clone())
    }
}
