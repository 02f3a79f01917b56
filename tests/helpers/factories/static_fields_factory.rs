use crate::schema::datasource::{FieldMeta, FieldType, StaticFields};

pub struct StaticFieldsFactory {
    fields: Vec<FieldMeta>,
}

impl StaticFieldsFactory {
    /// A small field set covering the common test cases: numeric,
    /// string, and date fields.
    pub fn new() -> Self {
        Self {
            fields: vec![
                FieldMeta {
                    name: "bytes".into(),
                    field_type: FieldType::Number,
                },
                FieldMeta {
                    name: "latency".into(),
                    field_type: FieldType::Number,
                },
                FieldMeta {
                    name: "host".into(),
                    field_type: FieldType::String,
                },
                FieldMeta {
                    name: "timestamp".into(),
                    field_type: FieldType::Date,
                },
            ],
        }
    }

    pub fn empty() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn with_field(mut self, name: &str, field_type: FieldType) -> Self {
        self.fields.push(FieldMeta {
            name: name.into(),
            field_type,
        });
        self
    }

    pub fn create(self) -> StaticFields {
        StaticFields::new(self.fields)
    }
}

impl Default for StaticFieldsFactory {
    fn default() -> Self {
        Self::new()
    }
}
