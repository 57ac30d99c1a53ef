use crate::document::{Document, ElementId};

/// Spinner markup shown while data loads.
pub const LOADING_MARKUP: &str = r#"<i class="fas fa-spinner fa-spin"></i> Loading..."#;

/// Replace the element's content with the loading spinner.
///
/// A missing element is not an error; nothing happens and false is returned.
pub fn show_loading(doc: &mut dyn Document, el: Option<ElementId>) -> bool {
    match el {
        Some(el) => {
            doc.set_inner_html(el, LOADING_MARKUP);
            true
        }
        None => {
            tracing::trace!("No element for loading indicator");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MemoryDocument;

    #[test]
    fn test_replaces_content() {
        let mut doc = MemoryDocument::new();
        let panel = doc.append(".weather-panel");
        doc.set_inner_html(panel, "<p>old</p>");

        assert!(show_loading(&mut doc, Some(panel)));
        assert_eq!(doc.inner_html(panel), Some(LOADING_MARKUP));
    }

    #[test]
    fn test_missing_element_is_noop() {
        let mut doc = MemoryDocument::new();
        assert!(!show_loading(&mut doc, None));

        let lookup = doc.query_selector(".not-there");
        assert!(!show_loading(&mut doc, lookup));
    }

    #[test]
    fn test_markup_contains_spinner() {
        assert!(LOADING_MARKUP.contains("fa-spinner fa-spin"));
        assert!(LOADING_MARKUP.ends_with("Loading..."));
    }
}
