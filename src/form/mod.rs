//! Form field model and keystroke events.
//!
//! The binder works over an explicit `Form` of `InputField`s rather than
//! an ambient document. Each field owns its value and exposes the event
//! paths a browser input has: keydown (filtered), input (re-format),
//! paste, and programmatic assignment.

pub mod events;
pub mod field;
pub mod selector;

pub use events::{Key, KeyOutcome};
pub use field::{Form, InputField, InputMode, InputType};
pub use selector::is_phone_field;
