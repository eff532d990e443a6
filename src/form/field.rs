//! Input field and form models.
//!
//! There is no host document here: the set of fields the binder works
//! over is modeled explicitly. An `InputField` owns its value and is
//! mutated only through its own event methods, mirroring how a browser
//! input element behaves (keydown filter, input handler, paste, and
//! programmatic assignment each have their own path).

use crate::form::events::{Key, KeyOutcome};
use crate::mask;
use serde::{Deserialize, Serialize};

/// The `type` attribute of an input element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// Free-text input (the default).
    #[default]
    Text,

    /// Telephone input.
    Tel,

    /// Email input.
    Email,

    /// Numeric input.
    Number,
}

/// The `inputmode` hint of an input element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Plain text keyboard.
    Text,

    /// Numeric keyboard.
    Numeric,
}

/// One input element of a form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputField {
    /// The input's `type` attribute.
    pub input_type: InputType,

    /// The input's `id` attribute, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The input's `name` attribute, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Current displayed value.
    pub value: String,

    /// Placeholder text shown when the value is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Maximum number of characters accepted by typing or paste.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Keyboard hint for the field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_mode: Option<InputMode>,

    /// Whether the phone mask behavior is attached to this field.
    pub masked: bool,
}

impl InputField {
    /// Create an empty field of the given type.
    pub fn new(input_type: InputType) -> Self {
        InputField {
            input_type,
            ..Default::default()
        }
    }

    /// Create an empty `type="text"` field.
    pub fn text() -> Self {
        Self::new(InputType::Text)
    }

    /// Create an empty `type="tel"` field.
    pub fn tel() -> Self {
        Self::new(InputType::Tel)
    }

    /// Set the `id` attribute.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the `name` attribute.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the initial value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Deliver one keystroke to the field.
    ///
    /// For a masked field the keydown filter runs first: anything that is
    /// not a digit or an allow-listed editing/navigation key is rejected
    /// and the value is untouched. Accepted keys apply their edit, then
    /// the input handler re-formats the value through the mask.
    ///
    /// Unmasked fields accept every key and never re-format.
    pub fn press_key(&mut self, key: Key) -> KeyOutcome {
        if self.masked && !key.is_allowed_control() && key.digit_char().is_none() {
            return KeyOutcome::Rejected;
        }

        self.apply_key_edit(key);

        if self.masked {
            self.value = mask::format(&self.value);
        }

        KeyOutcome::Accepted
    }

    /// Deliver pasted text to the field.
    ///
    /// Paste bypasses the keydown filter, so arbitrary characters get in;
    /// the input handler then re-formats a masked field. The inserted
    /// text is truncated to `max_length`, as a browser would, but the
    /// formatted result is assigned without re-checking the limit.
    pub fn insert_text(&mut self, text: &str) {
        for c in text.chars() {
            if !self.has_room() {
                break;
            }
            self.value.push(c);
        }

        if self.masked {
            self.value = mask::format(&self.value);
        }
    }

    /// Assign the value programmatically.
    ///
    /// No events fire: neither the keydown filter nor the input handler
    /// runs, so the value lands exactly as given.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// The digits currently held by the field, formatting stripped.
    pub fn digits(&self) -> crate::domain::PhoneDigits {
        crate::domain::PhoneDigits::from_raw(&self.value)
    }

    /// True when `id` matches the given string.
    pub fn has_id(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }

    /// True when `name` matches the given string.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }

    /// Apply the edit a single accepted key performs.
    ///
    /// The model is caret-less: edits happen at the end of the value, so
    /// Backspace removes the last character and forward Delete has
    /// nothing ahead of it to remove.
    fn apply_key_edit(&mut self, key: Key) {
        match key {
            // Out-of-range Digit values carry no character and edit
            // nothing.
            Key::Digit(_) => {
                if let Some(c) = key.digit_char() {
                    self.push_char(c);
                }
            }
            Key::Char(c) => self.push_char(c),
            Key::Backspace => {
                self.value.pop();
            }
            Key::Delete | Key::ArrowLeft | Key::ArrowRight | Key::Tab | Key::Enter => {}
        }
    }

    fn push_char(&mut self, c: char) {
        if self.has_room() {
            self.value.push(c);
        }
    }

    /// True while the value is below `max_length` (or no limit is set).
    fn has_room(&self) -> bool {
        match self.max_length {
            Some(limit) => self.value.chars().count() < limit,
            None => true,
        }
    }
}

/// An ordered collection of input fields, the binder's unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Form {
    fields: Vec<InputField>,
}

impl Form {
    /// Create an empty form.
    pub fn new() -> Self {
        Form::default()
    }

    /// Append a field to the form.
    pub fn push(&mut self, field: InputField) {
        self.fields.push(field);
    }

    /// Number of fields in the form.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the form has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over the fields in document order.
    pub fn fields(&self) -> impl Iterator<Item = &InputField> {
        self.fields.iter()
    }

    /// Iterate mutably over the fields in document order.
    pub fn fields_mut(&mut self) -> impl Iterator<Item = &mut InputField> {
        self.fields.iter_mut()
    }

    /// Look up a field by its `id` attribute.
    pub fn field_by_id(&self, id: &str) -> Option<&InputField> {
        self.fields.iter().find(|f| f.has_id(id))
    }

    /// Look up a field mutably by its `id` attribute.
    pub fn field_by_id_mut(&mut self, id: &str) -> Option<&mut InputField> {
        self.fields.iter_mut().find(|f| f.has_id(id))
    }
}

impl FromIterator<InputField> for Form {
    fn from_iter<I: IntoIterator<Item = InputField>>(iter: I) -> Self {
        Form {
            fields: iter.into_iter().collect(),
        }
    }
}
