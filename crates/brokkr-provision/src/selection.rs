//! Menu selection parsing
//!
//! Menus accept a single line of space-separated 1-based indices. Bad
//! tokens (out of range, not a number) are reported individually and
//! dropped; they never abort the batch. Duplicates are kept, in order,
//! because each invocation of a selected entry is independent.

/// Result of parsing one selection line against a menu of `menu_len` items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Zero-based indices of valid picks, in the order entered
    pub chosen: Vec<usize>,
    /// Tokens that were out of range or not numbers
    pub invalid: Vec<String>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty() && self.invalid.is_empty()
    }
}

/// Parse a space-separated list of 1-based menu indices
pub fn parse_selection(input: &str, menu_len: usize) -> Selection {
    let mut chosen = Vec::new();
    let mut invalid = Vec::new();

    for token in input.split_whitespace() {
        match token.parse::<usize>() {
            Ok(index) if (1..=menu_len).contains(&index) => chosen.push(index - 1),
            _ => invalid.push(token.to_string()),
        }
    }

    Selection { chosen, invalid }
}
