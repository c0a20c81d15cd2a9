// crates/demanda-core/src/model.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field holding the demand number.
pub const FIELD_ID: &str = "#";
/// Field holding the responsible supervisor.
pub const FIELD_SUPERVISOR: &str = "supervisor";
/// Field holding the demand classification.
pub const FIELD_CLASSIFICATION: &str = "Classificação";
/// Field holding the city the demand was raised in.
pub const FIELD_CITY: &str = "Cidade";

/// One demand, as it appears in the source file.
///
/// Records are schema-less: every field the source carries is kept, in the
/// order it was read. The accessors return `None` for a field that is
/// missing or `null`, so callers can skip what a dataset does not provide.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DemandRecord {
    fields: Map<String, Value>,
}

impl DemandRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Raw value of `name`; `None` when absent or `null`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).filter(|v| !v.is_null())
    }

    /// String form of `name`.
    ///
    /// Strings come back verbatim, numbers and booleans in their JSON
    /// notation (`42`, `4.5`, `true`). Arrays and objects have no sensible
    /// single-cell form and are treated as absent.
    pub fn text(&self, name: &str) -> Option<String> {
        match self.get(name)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Borrowed string value of `name`; `None` unless it is a JSON string.
    pub fn str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn demand_number(&self) -> Option<String> {
        self.text(FIELD_ID)
    }

    pub fn supervisor(&self) -> Option<String> {
        self.text(FIELD_SUPERVISOR)
    }

    pub fn classification(&self) -> Option<String> {
        self.text(FIELD_CLASSIFICATION)
    }

    pub fn city(&self) -> Option<String> {
        self.text(FIELD_CITY)
    }

    /// Field names in source order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl From<Map<String, Value>> for DemandRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

/// An ordered, immutable collection of [`DemandRecord`]s.
///
/// Filtering never touches a table in place; it builds a new one.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DemandTable {
    records: Vec<DemandRecord>,
}

impl DemandTable {
    pub fn new(records: Vec<DemandRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[DemandRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DemandRecord> {
        self.records.iter()
    }

    /// Ordered union of the field names of all records.
    pub fn columns(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for name in self.records.iter().flat_map(DemandRecord::field_names) {
            if !out.contains(&name) {
                out.push(name);
            }
        }
        out
    }

    /// `true` if at least one record carries `name`, even as `null`.
    pub fn has_column(&self, name: &str) -> bool {
        self.records.iter().any(|r| r.fields.contains_key(name))
    }

    /// Distinct supervisor values in first-encounter order.
    ///
    /// This is the option list offered for the supervisor selection.
    pub fn supervisors(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for name in self.records.iter().filter_map(DemandRecord::supervisor) {
            if !out.contains(&name) {
                out.push(name);
            }
        }
        out
    }
}

impl FromIterator<DemandRecord> for DemandTable {
    fn from_iter<I: IntoIterator<Item = DemandRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a DemandTable {
    type Item = &'a DemandRecord;
    type IntoIter = std::slice::Iter<'a, DemandRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
