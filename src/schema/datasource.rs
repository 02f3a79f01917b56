use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Underlying type of a data-source field, as far as the conversion
/// cares about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Number,
    String,
    Date,
    Boolean,
    Ip,
}

/// Metadata of one resolvable field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMeta {
    pub name: String,
    pub field_type: FieldType,
}

/// Read-only field-metadata lookup the conversion resolves source
/// fields against. Backed by an already-fetched snapshot; no I/O.
pub trait FieldResolver {
    fn field_by_name(&self, name: &str) -> Option<&FieldMeta>;
}

/// In-memory field set, the only resolver this crate ships.
#[derive(Debug, Clone, Default)]
pub struct StaticFields {
    fields: HashMap<String, FieldMeta>,
}

impl StaticFields {
    pub fn new(fields: impl IntoIterator<Item = FieldMeta>) -> Self {
        Self {
            fields: fields
                .into_iter()
                .map(|f| (f.name.clone(), f))
                .collect(),
        }
    }
}

impl FieldResolver for StaticFields {
    fn field_by_name(&self, name: &str) -> Option<&FieldMeta> {
        self.fields.get(name)
    }
}
