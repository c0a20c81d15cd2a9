// crates/demanda-core/src/query.rs

//! Row filtering.
//!
//! A [`DemandQuery`] holds the two user criteria. Each one is optional and an
//! unset criterion lets every row through; set criteria combine with AND.

use crate::model::{DemandRecord, DemandTable, FIELD_ID, FIELD_SUPERVISOR};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandQuery {
    /// Exact demand number, compared against the string form of `#`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demand_number: Option<String>,
    /// Selected supervisors, matched case-insensitively.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supervisors: Vec<String>,
}

impl DemandQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to one demand number. An empty string clears the criterion.
    pub fn with_demand_number(mut self, number: impl Into<String>) -> Self {
        let number = number.into();
        self.demand_number = (!number.is_empty()).then_some(number);
        self
    }

    pub fn with_supervisors<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supervisors = names.into_iter().map(Into::into).collect();
        self
    }

    /// `true` when neither criterion is set.
    pub fn is_unrestricted(&self) -> bool {
        self.demand_number().is_none() && self.supervisors.is_empty()
    }

    fn demand_number(&self) -> Option<&str> {
        self.demand_number.as_deref().filter(|n| !n.is_empty())
    }

    /// The query as it applies to `table`: a criterion whose column does
    /// not exist anywhere in the table is dropped with a warning rather than
    /// excluding every row.
    pub fn effective_for(&self, table: &DemandTable) -> DemandQuery {
        let mut effective = self.clone();
        if self.demand_number().is_some() && !table.has_column(FIELD_ID) {
            if !table.is_empty() {
                warn!(column = FIELD_ID, "column missing, demand number filter disabled");
            }
            effective.demand_number = None;
        }
        if !self.supervisors.is_empty() && !table.has_column(FIELD_SUPERVISOR) {
            if !table.is_empty() {
                warn!(column = FIELD_SUPERVISOR, "column missing, supervisor filter disabled");
            }
            effective.supervisors.clear();
        }
        effective
    }

    /// Builds the filtered table. The input is left untouched.
    ///
    /// Each row is tested with [`DemandQuery::matches`] of the query
    /// returned by [`DemandQuery::effective_for`].
    pub fn apply(&self, table: &DemandTable) -> DemandTable {
        let effective = self.effective_for(table);
        let selected = effective.lowered_supervisors();

        let out: DemandTable = table
            .iter()
            .filter(|r| effective.passes(r, &selected))
            .cloned()
            .collect();

        debug!(rows = table.len(), kept = out.len(), "filter applied");
        out
    }

    /// Whether a single record passes both criteria as written.
    ///
    /// This does not know about the rest of the table; call it on
    /// [`DemandQuery::effective_for`] to get the same answer as `apply`.
    pub fn matches(&self, record: &DemandRecord) -> bool {
        self.passes(record, &self.lowered_supervisors())
    }

    fn lowered_supervisors(&self) -> Vec<String> {
        self.supervisors.iter().map(|s| s.to_lowercase()).collect()
    }

    fn passes(&self, record: &DemandRecord, selected: &[String]) -> bool {
        let number_ok = self
            .demand_number()
            .map_or(true, |n| matches_number(record, n));
        number_ok && (selected.is_empty() || matches_supervisor(record, selected))
    }
}

fn matches_number(record: &DemandRecord, number: &str) -> bool {
    record.demand_number().is_some_and(|n| n == number)
}

// `selected` is already lower-cased.
fn matches_supervisor(record: &DemandRecord, selected: &[String]) -> bool {
    record
        .supervisor()
        .is_some_and(|s| selected.contains(&s.to_lowercase()))
}
