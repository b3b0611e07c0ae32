//! Row matching for table search boxes.
//!
//! A row stays visible when its full text contains the search string, both
//! compared lower-cased. Plain substring test: no tokenization, no fuzzy
//! matching. An empty search shows every row.

/// A lower-cased search string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn matches(&self, row_text: &str) -> bool {
        self.is_empty() || row_text.to_lowercase().contains(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible_rows(rows: [&str; 4], term: &str) -> Vec<bool> {
        let term = SearchTerm::new(term);
        rows.iter().map(|row| term.matches(row)).collect()
    }

    const ROWS: [&str; 4] = [
        "Water Access Kenya 2023 Active",
        "Health Clinics Uganda 2022 Closed",
        "Water Points Tanzania 2024 Active",
        "School Meals Kenya 2021 Closed",
    ];

    #[test]
    fn empty_term_shows_everything() {
        assert_eq!(visible_rows(ROWS, ""), vec![true; 4]);
    }

    #[test]
    fn match_is_case_insensitive_substring() {
        assert_eq!(visible_rows(ROWS, "WATER"), vec![true, false, true, false]);
        assert_eq!(visible_rows(ROWS, "kenya"), vec![true, false, false, true]);
        assert_eq!(visible_rows(ROWS, "ya 20"), vec![true, false, false, true]);
    }

    #[test]
    fn no_tokenization() {
        // Both words appear in the row, but not as one substring.
        assert_eq!(visible_rows(ROWS, "kenya water"), vec![false; 4]);
    }

    #[test]
    fn widening_the_term_never_reveals_a_hidden_row() {
        let terms = ["w", "wa", "wat", "wate", "water", "water ", "water p"];
        let mut previous = vec![true; ROWS.len()];
        for term in terms {
            let current = visible_rows(ROWS, term);
            for (before, now) in previous.iter().zip(&current) {
                assert!(*before || !*now, "term {term:?} revealed a hidden row");
            }
            previous = current;
        }
        assert_eq!(previous, vec![false, false, true, false]);
    }

    #[test]
    fn non_ascii_text() {
        let term = SearchTerm::new("ÉCOLE");
        assert!(term.matches("Programme école primaire"));
    }
}
