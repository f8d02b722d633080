use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Industry {
    Finance,
    Hospitality,
    Food,
    Retail,
    Healthcare,
    Tech,
    General,
}

// Order matters: the first group with a hit wins.
const KEYWORD_GROUPS: [(Industry, &[&str]); 6] = [
    (
        Industry::Finance,
        &["bank", "finance", "capital", "credit", "invest"],
    ),
    (
        Industry::Hospitality,
        &["hotel", "resort", "travel", "stay", "vacation"],
    ),
    (
        Industry::Food,
        &["food", "pizza", "burger", "cafe", "restaurant"],
    ),
    (
        Industry::Retail,
        &["shop", "store", "retail", "fashion", "wear", "shoe"],
    ),
    (
        Industry::Healthcare,
        &["health", "doctor", "clinic", "care", "medical"],
    ),
    (
        Industry::Tech,
        &["tech", "software", "app", "data", "cloud", "cyber"],
    ),
];

/// Maps a brand name (plus any extra text, usually the fetched description)
/// to an industry tag. No match is a valid outcome, not an error.
pub fn classify(name: &str, extra_text: &str) -> Industry {
    let haystack = format!("{} {}", name, extra_text).to_lowercase();

    KEYWORD_GROUPS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| haystack.contains(kw)))
        .map(|(industry, _)| *industry)
        .unwrap_or(Industry::General)
}
