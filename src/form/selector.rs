//! Phone field selection rules.

use crate::form::field::{InputField, InputType};

/// Attribute names that mark a field as a phone field.
const PHONE_NAME: &str = "telefone";
const PHONE_IDS: [&str; 2] = ["telefone", "phone"];

/// Decide whether a field is a phone field the binder should mask.
///
/// Matches any of: `type="tel"`, `name="telefone"`, `id="telefone"`,
/// `id="phone"`.
pub fn is_phone_field(field: &InputField) -> bool {
    if field.input_type == InputType::Tel {
        return true;
    }

    if field.has_name(PHONE_NAME) {
        return true;
    }

    PHONE_IDS.iter().any(|id| field.has_id(id))
}
