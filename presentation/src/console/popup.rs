//! Modal popup rendering.
//!
//! Popups are drawn as rounded boxes in the transcript stream; the modal
//! behavior comes from the surface blocking on input until the popup is
//! confirmed or dismissed.

/// Render a titled popup box around `body`.
///
/// Lines longer than `width` are wrapped at character boundaries. The
/// box grows to fit the longest line up to `width`.
pub fn render_popup(title: &str, body: &str, width: usize) -> String {
    let inner = wrap_lines(body, width.max(title.chars().count() + 2));
    let content_width = inner
        .iter()
        .map(|l| l.chars().count())
        .chain(std::iter::once(title.chars().count() + 2))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let dashes = content_width.saturating_sub(title.chars().count());
    out.push_str(&format!(
        "╭─{}{}─╮\n",
        title,
        "─".repeat(dashes)
    ));
    for line in &inner {
        let pad = content_width - line.chars().count();
        out.push_str(&format!("│ {}{} │\n", line, " ".repeat(pad)));
    }
    out.push_str(&format!("╰{}╯", "─".repeat(content_width + 2)));
    out
}

/// Wrap each line of `text` to at most `width` characters.
fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for line in text.lines() {
        let chars: Vec<char> = line.chars().collect();
        if chars.is_empty() {
            out.push(String::new());
            continue;
        }
        for chunk in chars.chunks(width.max(1)) {
            out.push(chunk.iter().collect());
        }
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}
