//! Phone Mask - input masking for Brazilian phone number form fields.
//!
//! This library reflows digits typed into phone fields onto the fixed
//! national pattern `(00) 00000-0000`, rejects non-digit keystrokes, and
//! reformats pre-filled values when a form is bound.
//!
//! # Architecture
//!
//! - **mask**: the pure formatting function and pattern constants
//! - **domain**: the `PhoneDigits` value object (digits-only newtype)
//! - **form**: explicit field/form model with keystroke events
//! - **binder**: attaches the mask behavior to a form's phone fields
//! - **config**: binder settings from environment variables
//! - **error**: configuration error types
//!
//! # Example
//!
//! ```
//! use phone_mask::{FieldBinder, Form, InputField, Key};
//!
//! let mut form = Form::new();
//! form.push(InputField::tel().with_id("phone"));
//! FieldBinder::new().bind(&mut form);
//!
//! let field = form.field_by_id_mut("phone").unwrap();
//! field.press_key(Key::from_char('1'));
//! field.press_key(Key::from_char('1'));
//! field.press_key(Key::from_char('9'));
//! assert_eq!(field.value, "(11) 9");
//! ```

// Re-export commonly used types
pub mod binder;
pub mod config;
pub mod domain;
pub mod error;
pub mod form;
pub mod mask;

pub use binder::FieldBinder;
pub use config::MaskConfig;
pub use domain::PhoneDigits;
pub use error::{ConfigError, ConfigResult};
pub use form::{Form, InputField, InputMode, InputType, Key, KeyOutcome};
