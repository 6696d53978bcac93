//! Picker session input handling.
//!
//! The picker lists the media library with 1-based indices and reads one
//! line of selection input: whitespace-separated indices in the order
//! the user wants them, or a cancel word. Parsing is pure so the rules
//! are testable without a terminal.

use parley_domain::DomainError;

/// Parsed form of one line of picker input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionInput {
    /// 0-based indices into the listing, in selection order.
    Indices(Vec<usize>),
    /// The user aborted the session.
    Canceled,
}

/// Parse a selection line against a listing of `available` images with
/// at most `limit` picks.
///
/// Accepted cancel forms: empty line, `q`, `quit`, `cancel`.
/// Rejected: non-numeric tokens, indices outside `1..=available`,
/// duplicates, and more than `limit` picks.
pub fn parse_selection(
    input: &str,
    available: usize,
    limit: usize,
) -> Result<SelectionInput, DomainError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || matches!(trimmed, "q" | "quit" | "cancel") {
        return Ok(SelectionInput::Canceled);
    }

    let mut indices = Vec::new();
    for token in trimmed.split_whitespace() {
        let number: usize = token.parse().map_err(|_| {
            DomainError::InvalidSelection(format!("'{}' is not a number", token))
        })?;
        if number == 0 || number > available {
            return Err(DomainError::InvalidSelection(format!(
                "{} is out of range (1-{})",
                number, available
            )));
        }
        let index = number - 1;
        if indices.contains(&index) {
            return Err(DomainError::InvalidSelection(format!(
                "{} appears more than once",
                number
            )));
        }
        indices.push(index);
    }

    if indices.len() > limit {
        return Err(DomainError::InvalidSelection(format!(
            "at most {} image(s) may be selected",
            limit
        )));
    }

    Ok(SelectionInput::Indices(indices))
}
