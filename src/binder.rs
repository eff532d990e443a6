//! Field binder.
//!
//! Attaches the phone mask behavior to every phone field of a form.
//! Binding is an explicit initialization call made once by the host
//! application's startup sequence; there is no ambient ready-event and
//! no state kept between calls.

use crate::config::MaskConfig;
use crate::domain::PhoneDigits;
use crate::form::field::{Form, InputField, InputMode};
use crate::form::selector;

/// Binds the phone mask to matching fields of a form.
///
/// The binder is stateless beyond its configuration and idempotent:
/// re-binding an already-bound form changes nothing.
///
/// # Example
///
/// ```
/// use phone_mask::{FieldBinder, Form, InputField};
///
/// let mut form = Form::new();
/// form.push(InputField::tel().with_id("phone").with_value("11987654321"));
///
/// let bound = FieldBinder::new().bind(&mut form);
/// assert_eq!(bound, 1);
/// assert_eq!(form.field_by_id("phone").unwrap().value, "(11) 98765-4321");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FieldBinder {
    config: MaskConfig,
}

impl FieldBinder {
    /// Create a binder with the default configuration.
    pub fn new() -> Self {
        FieldBinder::default()
    }

    /// Create a binder with the given configuration.
    pub fn with_config(config: MaskConfig) -> Self {
        FieldBinder { config }
    }

    /// Create a binder configured from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when an override variable holds an invalid
    /// value. See [`MaskConfig::from_env`].
    pub fn from_env() -> crate::error::ConfigResult<Self> {
        Ok(FieldBinder {
            config: MaskConfig::from_env()?,
        })
    }

    /// The configuration this binder applies.
    pub fn config(&self) -> &MaskConfig {
        &self.config
    }

    /// Attach the mask behavior to every phone field of `form`.
    ///
    /// For each field matching the selector rules this marks the field
    /// masked, formats any pre-filled value, limits the displayed length,
    /// hints a numeric keyboard, and assigns the placeholder when the
    /// field has none. Other fields are untouched.
    ///
    /// Returns the number of fields bound. Nothing fails: a form with no
    /// phone fields simply binds zero.
    pub fn bind(&self, form: &mut Form) -> usize {
        let mut bound = 0;

        for field in form.fields_mut() {
            if !selector::is_phone_field(field) {
                continue;
            }

            self.bind_field(field);
            bound += 1;
        }

        tracing::info!("Bound phone mask to {} field(s)", bound);
        bound
    }

    /// Apply the mask behavior to one field.
    fn bind_field(&self, field: &mut InputField) {
        field.masked = true;

        if !field.value.is_empty() {
            field.value = PhoneDigits::from_raw(&field.value).masked();
        }

        field.max_length = Some(self.config.max_length);
        field.input_mode = Some(InputMode::Numeric);

        if field.placeholder.is_none() {
            field.placeholder = Some(self.config.placeholder.clone());
        }

        tracing::debug!(
            "Masked field id={:?} name={:?} value={:?}",
            field.id,
            field.name,
            field.value
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::field::InputType;
    use crate::mask;

    fn sample_form() -> Form {
        let mut form = Form::new();
        form.push(InputField::text().with_id("nome"));
        form.push(InputField::tel().with_id("phone").with_value("11987654321"));
        form.push(InputField::text().with_name("telefone"));
        form
    }

    #[test]
    fn test_bind_counts_phone_fields() {
        let mut form = sample_form();
        let bound = FieldBinder::new().bind(&mut form);
        assert_eq!(bound, 2);
    }

    #[test]
    fn test_bind_formats_initial_value() {
        let mut form = sample_form();
        FieldBinder::new().bind(&mut form);

        let phone = form.field_by_id("phone").unwrap();
        assert_eq!(phone.value, "(11) 98765-4321");
    }

    #[test]
    fn test_bind_leaves_empty_values_empty() {
        let mut form = Form::new();
        form.push(InputField::tel().with_id("phone"));
        FieldBinder::new().bind(&mut form);

        assert_eq!(form.field_by_id("phone").unwrap().value, "");
    }

    #[test]
    fn test_bind_sets_field_attributes() {
        let mut form = sample_form();
        FieldBinder::new().bind(&mut form);

        let phone = form.field_by_id("phone").unwrap();
        assert!(phone.masked);
        assert_eq!(phone.max_length, Some(mask::FORMATTED_MAX_LEN));
        assert_eq!(phone.input_mode, Some(InputMode::Numeric));
        assert_eq!(phone.placeholder.as_deref(), Some(mask::PLACEHOLDER));
    }

    #[test]
    fn test_bind_preserves_existing_placeholder() {
        let mut form = Form::new();
        form.push(
            InputField::tel()
                .with_id("phone")
                .with_placeholder("Celular"),
        );
        FieldBinder::new().bind(&mut form);

        let phone = form.field_by_id("phone").unwrap();
        assert_eq!(phone.placeholder.as_deref(), Some("Celular"));
    }

    #[test]
    fn test_bind_skips_other_fields() {
        let mut form = sample_form();
        FieldBinder::new().bind(&mut form);

        let nome = form.field_by_id("nome").unwrap();
        assert!(!nome.masked);
        assert_eq!(nome.max_length, None);
        assert_eq!(nome.input_type, InputType::Text);
    }

    #[test]
    fn test_bind_is_idempotent() {
        let mut form = sample_form();
        let binder = FieldBinder::new();
        binder.bind(&mut form);
        let after_first = form.clone();

        binder.bind(&mut form);
        assert_eq!(form, after_first);
    }

    #[test]
    fn test_bind_empty_form() {
        let mut form = Form::new();
        assert_eq!(FieldBinder::new().bind(&mut form), 0);
    }

    #[test]
    fn test_bind_with_custom_config() {
        let config = MaskConfig {
            placeholder: "(xx) xxxxx-xxxx".to_string(),
            max_length: 20,
        };
        let mut form = Form::new();
        form.push(InputField::tel());

        FieldBinder::with_config(config).bind(&mut form);
        let field = form.fields().next().unwrap();
        assert_eq!(field.max_length, Some(20));
        assert_eq!(field.placeholder.as_deref(), Some("(xx) xxxxx-xxxx"));
    }
}
