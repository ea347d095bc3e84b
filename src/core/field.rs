//! # Form Field Descriptors
//!
//! A `FormField` describes one configurable input on the public form:
//! what it's called, how it renders, and whether it must be filled in.
//! The Builder screen edits these; `DynamicForm` renders them.

use serde::{Deserialize, Serialize};

/// Closed set of input control types.
///
/// Rendering matches exhaustively on this enum, so adding a variant is a
/// compiler-enforced change everywhere a field is drawn or collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Phone,
    Textarea,
    Select,
    Checkbox,
    Radio,
}

impl FieldType {
    /// All variants, in the order the field editor cycles through them.
    pub const ALL: [FieldType; 7] = [
        FieldType::Text,
        FieldType::Email,
        FieldType::Phone,
        FieldType::Textarea,
        FieldType::Select,
        FieldType::Checkbox,
        FieldType::Radio,
    ];

    /// Display label for the Builder screen and field editor.
    pub fn label(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Phone => "phone",
            FieldType::Textarea => "textarea",
            FieldType::Select => "select",
            FieldType::Checkbox => "checkbox",
            FieldType::Radio => "radio",
        }
    }

    /// Whether this type is backed by a list of choices.
    /// `options` is required (non-empty) exactly for these types.
    pub fn is_choice(&self) -> bool {
        matches!(self, FieldType::Select | FieldType::Radio)
    }

    /// The next variant in cycle order (wraps around).
    pub fn next(&self) -> FieldType {
        let idx = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The previous variant in cycle order (wraps around).
    pub fn prev(&self) -> FieldType {
        let idx = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// One configurable form field.
///
/// `order` values sorted ascending define render sequence. They are kept
/// dense (0..n-1) by `FieldConfigStore::delete_field`, but consumers must
/// not rely on density, only on total ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    pub id: String,
    /// Machine key, unique within the active field set. Payloads are keyed by this.
    pub name: String,
    /// Display text shown next to the control.
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Choice strings. Meaningful only for select/radio; the store clears
    /// it for every other type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub order: u32,
}

/// The built-in field set: the four inputs of the fixed public form.
///
/// Seeds the config store on first use and is restored wholesale by
/// reset-to-default. Ids are stable well-known strings, not UUIDs.
pub fn default_fields() -> Vec<FormField> {
    vec![
        FormField {
            id: "name".to_string(),
            name: "name".to_string(),
            label: "Name".to_string(),
            field_type: FieldType::Text,
            required: true,
            placeholder: Some("Enter your name".to_string()),
            options: None,
            order: 0,
        },
        FormField {
            id: "email".to_string(),
            name: "email".to_string(),
            label: "Email".to_string(),
            field_type: FieldType::Email,
            required: true,
            placeholder: Some("Enter your email".to_string()),
            options: None,
            order: 1,
        },
        FormField {
            id: "phone".to_string(),
            name: "phone".to_string(),
            label: "Phone".to_string(),
            field_type: FieldType::Phone,
            required: true,
            placeholder: Some("Enter your phone number".to_string()),
            options: None,
            order: 2,
        },
        FormField {
            id: "message".to_string(),
            name: "message".to_string(),
            label: "Message".to_string(),
            field_type: FieldType::Textarea,
            required: true,
            placeholder: Some("Enter your message".to_string()),
            options: None,
            order: 3,
        },
    ]
}
