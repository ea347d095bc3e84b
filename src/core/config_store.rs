//! # Field-Configuration Store
//!
//! The ordered list of form-field descriptors that drives the public form.
//! Mirrors the submission store's CRUD shape, plus reorder and
//! reset-to-default. Seeded with the four built-in fields on first use.

use log::{debug, warn};

use crate::core::field::{FieldType, FormField, default_fields};
use crate::core::persist::Snapshot;

/// A new field as entered in the editor, before an id and order exist.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub field_type: FieldType,
    pub required: bool,
    pub placeholder: Option<String>,
    pub options: Option<Vec<String>>,
}

/// A partial field edit. `None` fields are left untouched; `order` changes
/// only when explicitly included.
#[derive(Debug, Clone, Default)]
pub struct FieldPatch {
    pub name: Option<String>,
    pub label: Option<String>,
    pub field_type: Option<FieldType>,
    pub required: Option<bool>,
    pub placeholder: Option<Option<String>>,
    pub options: Option<Option<Vec<String>>>,
    pub order: Option<u32>,
}

pub struct FieldConfigStore {
    fields: Vec<FormField>,
    snapshot: Box<dyn Snapshot>,
}

impl FieldConfigStore {
    /// Rehydrate from the snapshot; an absent or unreadable snapshot seeds
    /// the default field set.
    pub fn new(snapshot: Box<dyn Snapshot>) -> Self {
        let fields = match snapshot.load() {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(list) => list,
                Err(e) => {
                    warn!("Discarding unreadable field snapshot: {}", e);
                    default_fields()
                }
            },
            Ok(None) => default_fields(),
            Err(e) => {
                warn!("Failed to load field snapshot: {}", e);
                default_fields()
            }
        };
        debug!("Field config store loaded with {} fields", fields.len());
        Self { fields, snapshot }
    }

    /// Assign an id and an order equal to the current field count
    /// (i.e. appended at the end), then persist.
    pub fn add_field(&mut self, spec: FieldSpec) -> &FormField {
        let field = FormField {
            id: uuid::Uuid::new_v4().to_string(),
            name: spec.name,
            label: spec.label,
            field_type: spec.field_type,
            required: spec.required,
            placeholder: spec.placeholder,
            options: normalize_options(spec.field_type, spec.options),
            order: self.fields.len() as u32,
        };
        let index = self.fields.len();
        self.fields.push(field);
        self.persist();
        &self.fields[index]
    }

    /// Merge changes into the matching field. No-op if absent.
    pub fn update_field(&mut self, id: &str, patch: FieldPatch) {
        let Some(field) = self.fields.iter_mut().find(|f| f.id == id) else {
            return;
        };
        if let Some(name) = patch.name {
            field.name = name;
        }
        if let Some(label) = patch.label {
            field.label = label;
        }
        if let Some(field_type) = patch.field_type {
            field.field_type = field_type;
        }
        if let Some(required) = patch.required {
            field.required = required;
        }
        if let Some(placeholder) = patch.placeholder {
            field.placeholder = placeholder;
        }
        if let Some(options) = patch.options {
            field.options = options;
        }
        if let Some(order) = patch.order {
            field.order = order;
        }
        // Options only mean something for choice types
        field.options = normalize_options(field.field_type, field.options.take());
        self.persist();
    }

    /// Remove the field, then renumber the remaining fields' order densely
    /// from 0 in their current sequence. No-op if absent.
    pub fn delete_field(&mut self, id: &str) {
        let before = self.fields.len();
        self.fields.retain(|f| f.id != id);
        if self.fields.len() == before {
            return;
        }
        for (index, field) in self.fields.iter_mut().enumerate() {
            field.order = index as u32;
        }
        self.persist();
    }

    /// Replace the entire collection wholesale. The caller assigns order
    /// values consistent with the sequence it wants.
    pub fn reorder(&mut self, fields: Vec<FormField>) {
        self.fields = fields;
        self.persist();
    }

    /// Replace the collection with the four built-in defaults, discarding
    /// all customizations.
    pub fn reset_to_default(&mut self) {
        self.fields = default_fields();
        self.persist();
    }

    pub fn get(&self, id: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Fields sorted ascending by order: the render sequence.
    pub fn sorted_fields(&self) -> Vec<FormField> {
        let mut fields = self.fields.clone();
        fields.sort_by_key(|f| f.order);
        fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn persist(&self) {
        let json = match serde_json::to_string_pretty(&self.fields) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize form fields: {}", e);
                return;
            }
        };
        if let Err(e) = self.snapshot.save(&json) {
            warn!("Failed to persist form fields: {}", e);
        }
    }
}

/// Drop options for non-choice types; keep them (possibly empty) otherwise.
fn normalize_options(
    field_type: FieldType,
    options: Option<Vec<String>>,
) -> Option<Vec<String>> {
    if field_type.is_choice() { options } else { None }
}
