pub mod error;
pub mod export;
pub mod extraction;
pub mod minimize;
pub mod model;
pub mod options;
pub mod parsing;
pub mod season_series;

use error::ScheduleError;
use extraction::{PageFragments, TextExtractor};
use model::ParsedSchedule;
use options::ParseOptions;

pub use parsing::{parse_pages, ScheduleParser};

/// Main API entry point: extract positioned text from a schedule PDF and
/// parse it into series records.
///
/// Fails only when extraction fails or yields no text at all. A document
/// with text but no recognizable series parses to an empty result; callers
/// decide whether that is an error.
pub fn parse_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn TextExtractor,
    options: &ParseOptions,
) -> Result<ParsedSchedule, ScheduleError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    ensure_text(&pages, extractor.backend_name())?;
    Ok(parse_pages(&pages, options))
}

fn ensure_text(pages: &[PageFragments], backend: &str) -> Result<(), ScheduleError> {
    let empty_pages: Vec<usize> = pages
        .iter()
        .filter(|p| p.is_empty())
        .map(|p| p.page_number)
        .collect();

    if empty_pages.len() == pages.len() {
        return Err(ScheduleError::NoText);
    }
    if !empty_pages.is_empty() {
        tracing::warn!(backend, ?empty_pages, "pages without any text");
    }
    Ok(())
}
