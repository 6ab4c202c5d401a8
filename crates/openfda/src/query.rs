//! Request URL construction.
//!
//! openFDA search syntax uses a literal `+` as the term separator, so the query string is
//! assembled by hand rather than through a form encoder (which would turn `+` into `%2B`).
//! Each free-text component is percent-encoded on its own before it is spliced in.

/// Join medication names into the `+`-separated union term, unencoded.
///
/// Order and duplicates are preserved.
pub fn union_term(medications: &[String]) -> String {
    medications.join("+")
}

fn encoded_union_term(medications: &[String]) -> String {
    medications
        .iter()
        .map(|name| urlencoding::encode(name).into_owned())
        .collect::<Vec<_>>()
        .join("+")
}

/// Label search matching `indications_and_usage` against an exact phrase.
pub fn label_search_url(base_url: &str, condition: &str, limit: usize) -> String {
    format!(
        "{base_url}/drug/label.json?search=indications_and_usage:%22{}%22&limit={limit}",
        urlencoding::encode(condition)
    )
}

/// Label search for drug-interaction annotations across the medication union.
pub fn interaction_search_url(base_url: &str, medications: &[String]) -> String {
    format!(
        "{base_url}/drug/label.json?search=({})+AND+patient.drug.druginteractions",
        encoded_union_term(medications)
    )
}

/// Event search counting reaction terms reported for the medication union.
pub fn reaction_count_url(base_url: &str, medications: &[String], limit: usize) -> String {
    format!(
        "{base_url}/drug/event.json?search=patient.drug.openfda.brand_name:({})\
         &count=patient.reaction.reactionmeddrapt.exact&limit={limit}",
        encoded_union_term(medications)
    )
}
