/// Closed label vocabulary. Keeping it fixed is what makes the chart readable.
pub const NATIONALITY_CATEGORIES: [&str; 19] = [
    "Arabic",
    "Chinese",
    "Czech",
    "Dutch",
    "English",
    "French",
    "German",
    "Greek",
    "Indian",
    "Irish",
    "Italian",
    "Japanese",
    "Korean",
    "Polish",
    "Portuguese",
    "Russian",
    "Scottish",
    "Spanish",
    "Vietnamese",
];

/// Label for output that matched no category.
pub const UNKNOWN: &str = "Unknown";

/// Label for a name whose classification call failed.
pub const ERROR: &str = "Error";

/// Maps free-form model output onto the category list.
///
/// Exact match first, then the first category (in list order) contained in
/// the output case-insensitively, then [`UNKNOWN`].
pub fn parse_label(raw: &str) -> String {
    let trimmed = raw.trim();

    if let Some(cat) = NATIONALITY_CATEGORIES.iter().find(|c| **c == trimmed) {
        return cat.to_string();
    }

    let lowered = trimmed.to_lowercase();
    NATIONALITY_CATEGORIES
        .iter()
        .find(|c| lowered.contains(&c.to_lowercase()))
        .map(|c| c.to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match() {
        assert_eq!(parse_label("Spanish"), "Spanish");
        assert_eq!(parse_label("  Korean\n"), "Korean");
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        assert_eq!(parse_label("The origin is ENGLISH."), "English");
        assert_eq!(parse_label("likely italian"), "Italian");
    }

    #[test]
    fn first_category_in_list_order_wins() {
        // Both "Chinese" and "Japanese" appear; Chinese comes first in the list.
        assert_eq!(parse_label("japanese or chinese"), "Chinese");
    }

    #[test]
    fn anything_else_is_unknown() {
        assert_eq!(parse_label("Martian"), UNKNOWN);
        assert_eq!(parse_label(""), UNKNOWN);
    }
}
