pub mod fixture;
pub mod pdftotext;

use crate::error::ScheduleError;
use crate::model::TextFragment;
use serde::{Deserialize, Serialize};

/// Positioned text extracted from a single page of a PDF.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageFragments {
    #[serde(default)]
    pub page_number: usize,
    #[serde(default)]
    pub fragments: Vec<TextFragment>,
}

impl PageFragments {
    pub fn is_empty(&self) -> bool {
        self.fragments.iter().all(|f| f.text.trim().is_empty())
    }
}

/// Trait for PDF text extraction backends.
pub trait TextExtractor: Send + Sync {
    /// Extract positioned text from PDF bytes, returning one entry per page in page order.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageFragments>, ScheduleError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
