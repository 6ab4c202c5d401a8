//! The fixed list of medical conditions offered to the user.

/// Conditions offered on the selection form, in display order.
///
/// These strings are used verbatim as openFDA search phrases, so the historical spelling
/// `Migranes` is kept as-is.
pub const CONDITIONS: [&str; 16] = [
    "Arthritis",
    "Asthma",
    "Diabetes",
    "High Blood Pressure",
    "Migranes",
    "Acid reflux",
    "Anxiety",
    "Depression",
    "Insomnia",
    "Allergies",
    "Osteoporosis",
    "Hypothyroidism",
    "Hyperthyroidism",
    "Chronic pain",
    "Fibromyalgia",
    "High Cholesterol",
];

/// Returns `true` if `name` is one of the offered conditions.
///
/// Lookups do not require this; submitted names are searched as given.
pub fn is_known_condition(name: &str) -> bool {
    CONDITIONS.contains(&name)
}
