//! Adverse event (`drug/event.json`) count responses.
//!
//! A `count=` query turns the event endpoint into a frequency table: each result is a
//! `{"term": ..., "count": ...}` pair, most frequent first.

use crate::envelope::decode_results;
use crate::OpenFdaResult;
use serde::Deserialize;

const ENDPOINT: &str = "drug/event";

/// One row of a reaction frequency table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReactionCount {
    /// MedDRA preferred term for the reaction (e.g. `NAUSEA`).
    pub term: String,
    /// Number of reports mentioning the term.
    pub count: u64,
}

/// Adverse event operations.
pub struct DrugEvent;

impl DrugEvent {
    /// Parse a reaction count response, preserving the service's ordering.
    ///
    /// A response without `results` yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`crate::OpenFdaError::Decode`] if an entry has no `term`.
    pub fn parse_reaction_counts(body: &str) -> OpenFdaResult<Vec<ReactionCount>> {
        let rows = decode_results::<ReactionCountWire>(ENDPOINT, body)?.unwrap_or_default();

        Ok(rows
            .into_iter()
            .map(|row| ReactionCount {
                term: row.term,
                count: row.count,
            })
            .collect())
    }
}

#[derive(Clone, Debug, Deserialize)]
struct ReactionCountWire {
    term: String,
    #[serde(default)]
    count: u64,
}
