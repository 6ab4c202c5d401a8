//! JSON request and response bodies.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// The conditions offered for selection, in display order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ConditionsRes {
    pub conditions: Vec<String>,
}

/// Request a medication lookup for a set of conditions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LookupReq {
    /// Condition names; not restricted to the offered list.
    #[serde(default)]
    pub conditions: Vec<String>,
}

/// Result of a medication lookup.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LookupRes {
    pub conditions: Vec<String>,
    /// Brand names in encounter order; duplicates are kept.
    pub medications: Vec<String>,
    pub interactions: Vec<String>,
    pub side_effects: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_req_conditions_default_to_empty() {
        let req: LookupReq = serde_json::from_str("{}").unwrap();
        assert!(req.conditions.is_empty());
    }

    #[test]
    fn lookup_res_uses_snake_case_keys() {
        let res = LookupRes {
            side_effects: vec!["cough".into()],
            ..LookupRes::default()
        };
        let json = serde_json::to_string(&res).unwrap();
        assert_eq!(
            json,
            r#"{"conditions":[],"medications":[],"interactions":[],"side_effects":["cough"]}"#
        );
    }
}
