use crate::error::ScheduleError;
use crate::extraction::{PageFragments, TextExtractor};

/// Extraction backend that reads already-positioned text from JSON.
///
/// The input is the serialized form of `Vec<PageFragments>`; the bytes passed
/// to `extract_pages` are the JSON document, not a PDF. Useful for captured
/// fixtures and for feeding output of other extraction tools.
#[derive(Debug, Default)]
pub struct FixtureExtractor;

impl FixtureExtractor {
    pub fn new() -> Self {
        FixtureExtractor
    }
}

impl TextExtractor for FixtureExtractor {
    fn extract_pages(&self, json_bytes: &[u8]) -> Result<Vec<PageFragments>, ScheduleError> {
        let mut pages: Vec<PageFragments> = serde_json::from_slice(json_bytes)?;
        // Fixtures written by hand often leave page numbers out.
        for (i, page) in pages.iter_mut().enumerate() {
            if page.page_number == 0 {
                page.page_number = i + 1;
            }
        }
        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "fixture"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_pages_and_fills_page_numbers() {
        let json = br#"[
            {"fragments": [{"text": "Week 1 (2025-03-18) Okayama", "baseline_y": 700}]},
            {"page_number": 7, "fragments": []}
        ]"#;
        let pages = FixtureExtractor::new().extract_pages(json).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].page_number, 1);
        assert_eq!(pages[0].fragments[0].x, 0.0);
        assert_eq!(pages[1].page_number, 7);
        assert!(pages[1].is_empty());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = FixtureExtractor::new().extract_pages(b"not json").unwrap_err();
        assert!(matches!(err, ScheduleError::Json(_)));
    }
}
