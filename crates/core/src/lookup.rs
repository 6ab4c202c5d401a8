//! Medication lookup orchestration.
//!
//! A lookup runs three stages strictly in sequence:
//! 1. one label search per selected condition, collecting the first brand name per record
//! 2. one interaction search across the `+`-joined union of every collected name
//! 3. one reaction count across the same union
//!
//! The medication list keeps encounter order and is never deduplicated; the union used by
//! stages 2 and 3 is built from exactly that list. Any stage failing fails the whole lookup.

use crate::constants::{LABEL_LIMIT, REACTION_LIMIT};
use crate::LookupResult;
use openfda::OpenFdaClient;
use serde::Serialize;
use std::future::Future;

/// Source of drug label and adverse event data.
///
/// The production implementation is [`OpenFdaClient`]; tests substitute in-memory fakes.
pub trait DrugDataSource: Send + Sync {
    /// Brand names for labels whose indications mention `condition`.
    fn brand_names_for_condition(
        &self,
        condition: &str,
    ) -> impl Future<Output = LookupResult<Vec<String>>> + Send;

    /// Interaction descriptions for the medication union.
    fn interactions_for(
        &self,
        medications: &[String],
    ) -> impl Future<Output = LookupResult<Vec<String>>> + Send;

    /// Reaction terms reported for the medication union.
    fn side_effects_for(
        &self,
        medications: &[String],
    ) -> impl Future<Output = LookupResult<Vec<String>>> + Send;
}

impl DrugDataSource for OpenFdaClient {
    async fn brand_names_for_condition(&self, condition: &str) -> LookupResult<Vec<String>> {
        Ok(self.search_brand_names(condition, LABEL_LIMIT).await?)
    }

    async fn interactions_for(&self, medications: &[String]) -> LookupResult<Vec<String>> {
        Ok(self.search_interactions(medications).await?)
    }

    async fn side_effects_for(&self, medications: &[String]) -> LookupResult<Vec<String>> {
        let rows = self.count_reactions(medications, REACTION_LIMIT).await?;
        Ok(rows.into_iter().map(|row| row.term).collect())
    }
}

/// Everything gathered for one lookup request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ResultPayload {
    /// Conditions as submitted, in submission order.
    pub conditions: Vec<String>,
    /// Brand names in encounter order, duplicates kept.
    pub medications: Vec<String>,
    pub interactions: Vec<String>,
    pub side_effects: Vec<String>,
}

impl ResultPayload {
    /// The `+`-joined union term the interaction and side-effect queries were built from.
    pub fn union_term(&self) -> String {
        openfda::union_term(&self.medications)
    }
}

/// Orchestrates the three-stage medication lookup against a [`DrugDataSource`].
#[derive(Clone, Debug)]
pub struct MedicationLookupService<S> {
    source: S,
}

impl<S: DrugDataSource> MedicationLookupService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Run a full lookup for the selected conditions.
    ///
    /// Conditions are not validated against the offered list and duplicates are searched
    /// again. An empty selection still issues the interaction and side-effect queries, with
    /// an empty union.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the data source; nothing partial is returned.
    pub async fn lookup(&self, conditions: &[String]) -> LookupResult<ResultPayload> {
        let medications = self.resolve_medications(conditions).await?;
        let interactions = self.source.interactions_for(&medications).await?;
        let side_effects = self.source.side_effects_for(&medications).await?;

        tracing::info!(
            conditions = conditions.len(),
            medications = medications.len(),
            interactions = interactions.len(),
            side_effects = side_effects.len(),
            "medication lookup complete"
        );

        Ok(ResultPayload {
            conditions: conditions.to_vec(),
            medications,
            interactions,
            side_effects,
        })
    }

    /// Resolve brand names for each condition, in submission order.
    pub async fn resolve_medications(&self, conditions: &[String]) -> LookupResult<Vec<String>> {
        let mut medications = Vec::new();
        for condition in conditions {
            let names = self.source.brand_names_for_condition(condition).await?;
            tracing::debug!(condition = %condition, found = names.len(), "resolved condition");
            medications.extend(names);
        }
        Ok(medications)
    }
}
