//! Drug label (`drug/label.json`) wire models and translation helpers.
//!
//! Responsibilities:
//! - Define a wire model covering the two label fields drugcheck reads
//! - Extract the first brand name of each label record
//! - Flatten drug-interaction descriptions across label records
//!
//! Notes:
//! - Label records carry hundreds of other fields; unknown keys are ignored here
//! - Optional containers (`openfda`, `brand_name`, `patient`) are skipped when absent, but a
//!   `patient` block that is present must carry `drug.druginteractions`

use crate::envelope::decode_results;
use crate::OpenFdaResult;
use serde::Deserialize;

const ENDPOINT: &str = "drug/label";

// ============================================================================
// Public DrugLabel operations
// ============================================================================

/// Drug label operations.
///
/// This is a zero-sized type used for namespacing label-related parsing.
pub struct DrugLabel;

impl DrugLabel {
    /// Extract one brand name per label record from a label search response.
    ///
    /// Only the first entry of `openfda.brand_name` is taken. Records without an `openfda`
    /// block, without `brand_name`, or with an empty `brand_name` list contribute nothing.
    /// A response without `results` yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`crate::OpenFdaError::Decode`] if the body does not match the wire schema.
    pub fn parse_brand_names(body: &str) -> OpenFdaResult<Vec<String>> {
        let records = decode_results::<LabelRecordWire>(ENDPOINT, body)?.unwrap_or_default();

        Ok(records
            .into_iter()
            .filter_map(|record| record.openfda)
            .filter_map(|block| block.brand_name)
            .filter_map(|names| names.into_iter().next())
            .collect())
    }

    /// Flatten every drug-interaction description in a label response.
    ///
    /// Records without a `patient` block are skipped. A record may contribute more than one
    /// description. A response without `results` yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`crate::OpenFdaError::Decode`] if the body does not match the wire schema,
    /// including a `patient` block that lacks `drug.druginteractions`.
    pub fn parse_interactions(body: &str) -> OpenFdaResult<Vec<String>> {
        let records = decode_results::<LabelRecordWire>(ENDPOINT, body)?.unwrap_or_default();

        Ok(records
            .into_iter()
            .filter_map(|record| record.patient)
            .flat_map(|patient| patient.drug.druginteractions)
            .map(|interaction| interaction.description)
            .collect())
    }
}

// ============================================================================
// Wire types (internal)
// ============================================================================

/// Wire representation of a single label record.
#[derive(Clone, Debug, Deserialize)]
struct LabelRecordWire {
    #[serde(default)]
    openfda: Option<OpenFdaBlockWire>,
    #[serde(default)]
    patient: Option<PatientWire>,
}

/// Harmonised `openfda` block attached to a label.
#[derive(Clone, Debug, Deserialize)]
struct OpenFdaBlockWire {
    #[serde(default)]
    brand_name: Option<Vec<String>>,
}

#[derive(Clone, Debug, Deserialize)]
struct PatientWire {
    drug: PatientDrugWire,
}

#[derive(Clone, Debug, Deserialize)]
struct PatientDrugWire {
    druginteractions: Vec<InteractionWire>,
}

#[derive(Clone, Debug, Deserialize)]
struct InteractionWire {
    description: String,
}
