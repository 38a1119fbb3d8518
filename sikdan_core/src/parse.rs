//! Extraction of one day's meal text from the page markup.

use crate::date::MealDate;
use crate::markup;

/// Extract the meal text for `date`, or `None` when the page carries no
/// meal information for that day.
///
/// The day's container is the `<td>` whose id is the date's digit key; its
/// `<p>` blocks become the text. Each block keeps its interior line
/// structure (including blank lines), loses only leading and trailing
/// newlines, and is dropped entirely if nothing but whitespace remains.
/// Surviving blocks join with exactly one newline regardless of the
/// markup's spacing between them.
pub fn extract(page: &str, date: &MealDate) -> Option<String> {
    let container = markup::element_inner_by_id(page, "td", &date.key())?;

    let mut blocks: Vec<String> = Vec::new();
    for raw in markup::block_contents(container, "p") {
        let text = markup::text_with_breaks(raw);
        let trimmed = text.trim_matches(|c| c == '\n' || c == '\r');
        if trimmed.trim().is_empty() {
            continue;
        }
        blocks.push(trimmed.to_string());
    }

    if blocks.is_empty() {
        tracing::debug!("No meal blocks for {}", date);
        return None;
    }
    Some(blocks.join("\n"))
}
