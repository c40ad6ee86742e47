//! Plain-text rendering of SearXNG answers

use crate::provider::SearchResponse;
use std::fmt::Write;

/// Render infoboxes, a separator, then at most `limit` results
pub fn format_results(response: &SearchResponse, limit: usize) -> String {
    let mut text = String::new();

    for infobox in &response.infoboxes {
        let _ = write!(
            text,
            "Infobox: {}\nID: {}\nContent: <content>\n{}\n</content>\n\n\n",
            infobox.infobox, infobox.id, infobox.content
        );
    }

    text.push_str("\n---\n\n");

    if response.results.is_empty() {
        text.push_str("No results found\n");
    }

    for result in response.results.iter().take(limit) {
        let _ = write!(
            text,
            "Title: {}\nURL: {}\nContent: <content>\n{}\n</content>\n\n\n",
            result.title, result.url, result.content
        );
    }

    text
}
