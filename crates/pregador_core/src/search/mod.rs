//! External web-search collaborator boundary.
//!
//! # Responsibility
//! - Define the keyword-query seam to the out-of-core search provider.
//! - Shape results into typed hits and a plain-text digest.
//!
//! # Invariants
//! - A failing provider is represented by an empty hit list, never an error.

/// One ranked search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub title: String,
    pub snippet: String,
    pub url: String,
}

/// Web-search collaborator.
///
/// Implementations live outside the core; a provider that fails returns an
/// empty list.
pub trait WebSearch {
    fn search(&self, query: &str) -> Vec<SearchHit>;
}

/// Renders hits as the bullet digest shown next to the editor.
pub fn render_digest(hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return "Nada.".to_string();
    }

    hits.iter()
        .map(|hit| {
            let title = if hit.title.is_empty() {
                "(sem título)"
            } else {
                hit.title.as_str()
            };
            format!("• {title}: {}", hit.snippet)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
