//! record/types.rs
//! Fixed-layout record definitions.
//!
//! A layout is an ordered list of named fields, each with a size known at
//! definition time. Fields are laid out sequentially with no padding, so a
//! layout has a fixed `byte_size()` and every field a fixed offset.
//! Layouts are validated once by `RecordLayoutBuilder::build` and shared
//! read-only behind an `Arc`.

use std::collections::HashSet;
use std::sync::Arc;

use crate::dispatch::{LogicalType, Value};
use crate::types::{CodecError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    pub name: String,
    pub ty: LogicalType,
    /// Element count for arrays, byte length for strings.
    pub count: Option<usize>,
    pub offset: usize,
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordLayout {
    name: String,
    fields: Vec<FieldDef>,
    byte_size: usize,
}

impl RecordLayout {
    pub fn builder(name: impl Into<String>) -> RecordLayoutBuilder {
        RecordLayoutBuilder { name: name.into(), fields: Vec::new() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Total encoded size in bytes.
    pub fn byte_size(&self) -> usize {
        self.byte_size
    }

    pub fn field_offset(&self, name: &str) -> Option<usize> {
        self.field(name).map(|f| f.offset)
    }

    /// A value that encodes to `byte_size()` zero bytes.
    pub fn zeroed(&self) -> RecordValue {
        let mut value = RecordValue::new();
        for f in &self.fields {
            let v = match (&f.ty, f.count) {
                (LogicalType::Array(elem), Some(n)) => Value::Array(vec![Value::zero_of(elem); n]),
                (LogicalType::String, Some(n)) => Value::String("\0".repeat(n)),
                (ty, _) => Value::zero_of(ty),
            };
            value.set(f.name.clone(), v);
        }
        value
    }
}

/// Pending field, before offsets are assigned.
#[derive(Debug, Clone)]
struct PendingField {
    name: String,
    ty: LogicalType,
    count: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct RecordLayoutBuilder {
    name: String,
    fields: Vec<PendingField>,
}

impl RecordLayoutBuilder {
    /// Scalar, enum, or nested record field.
    pub fn field(mut self, name: impl Into<String>, ty: LogicalType) -> Self {
        self.fields.push(PendingField { name: name.into(), ty, count: None });
        self
    }

    /// Fixed-size embedded array of `count` elements.
    pub fn array(mut self, name: impl Into<String>, elem: LogicalType, count: usize) -> Self {
        self.fields.push(PendingField {
            name: name.into(),
            ty: LogicalType::array(elem),
            count: Some(count),
        });
        self
    }

    /// Fixed-width text field of `byte_len` encoded bytes.
    pub fn string(mut self, name: impl Into<String>, byte_len: usize) -> Self {
        self.fields.push(PendingField {
            name: name.into(),
            ty: LogicalType::String,
            count: Some(byte_len),
        });
        self
    }

    pub fn record(self, name: impl Into<String>, layout: Arc<RecordLayout>) -> Self {
        self.field(name, LogicalType::Record(layout))
    }

    pub fn build(self) -> Result<Arc<RecordLayout>> {
        let record = self.name;
        if record.is_empty() {
            return Err(CodecError::InvalidLayout("record name is empty".into()));
        }

        let mut seen = HashSet::new();
        let mut fields = Vec::with_capacity(self.fields.len());
        let mut offset = 0usize;

        for p in self.fields {
            if p.name.is_empty() {
                return Err(CodecError::InvalidLayout(format!("{}: unnamed field", record)));
            }
            if !seen.insert(p.name.clone()) {
                return Err(CodecError::InvalidLayout(format!(
                    "{}: duplicate field `{}`",
                    record, p.name
                )));
            }

            let size = field_size(&p.ty, p.count).map_err(|reason| {
                CodecError::InvalidLayout(format!("{}.{}: {}", record, p.name, reason))
            })?;

            let end = offset.checked_add(size).ok_or_else(|| {
                CodecError::InvalidLayout(format!("{}.{}: record size overflows", record, p.name))
            })?;
            fields.push(FieldDef { name: p.name, ty: p.ty, count: p.count, offset, size });
            offset = end;
        }

        Ok(Arc::new(RecordLayout { name: record, fields, byte_size: offset }))
    }
}

/// Encoded size of one field, or why it has none.
fn field_size(ty: &LogicalType, count: Option<usize>) -> std::result::Result<usize, String> {
    match (ty, count) {
        (LogicalType::String, Some(n)) => Ok(n),
        (LogicalType::String, None) => Err("string field needs a fixed byte length".into()),
        (LogicalType::Array(elem), Some(n)) => {
            if elem.needs_length() {
                return Err(format!("array element {} has no fixed size", elem));
            }
            let width = element_size(elem)?;
            width
                .checked_mul(n)
                .ok_or_else(|| format!("array of {} x {} overflows", n, elem))
        }
        (LogicalType::Array(elem), None) => {
            Err(format!("variable-size array of {} needs a fixed count", elem))
        }
        (other, None) => element_size(other),
        (other, Some(_)) => Err(format!("{} does not take a count", other)),
    }
}

fn element_size(ty: &LogicalType) -> std::result::Result<usize, String> {
    if let LogicalType::Enum { name, underlying } = ty {
        if !underlying.is_integer() {
            return Err(format!("enum {} has non-integer underlying type {}", name, underlying));
        }
    }
    ty.fixed_size().ok_or_else(|| format!("{} has no fixed size", ty))
}

/// Field values of one record, kept in insertion order. Equality compares
/// by field name and ignores that order.
#[derive(Debug, Clone, Default)]
pub struct RecordValue {
    fields: Vec<(String, Value)>,
}

impl PartialEq for RecordValue {
    fn eq(&self, other: &Self) -> bool {
        // Names are unique, so equal length plus a match per name suffices
        self.fields.len() == other.fields.len()
            && self.fields.iter().all(|(n, v)| other.get(n) == Some(v))
    }
}

impl RecordValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style `set`.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Insert or replace a field value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn into_fields(self) -> Vec<(String, Value)> {
        self.fields
    }
}
