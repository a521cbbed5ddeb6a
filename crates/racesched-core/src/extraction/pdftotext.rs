use crate::error::ScheduleError;
use crate::extraction::{PageFragments, TextExtractor};
use crate::model::TextFragment;
use std::io::Write;
use std::process::Command;

/// Horizontal gap (in points) above which two words are treated as separate columns.
const WIDE_GAP: f32 = 8.0;
const COLUMN_SEPARATOR: &str = "   ";

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Uses `pdftotext -bbox-layout` and emits one fragment per word, with the
/// baseline flipped into PDF page space so that larger `y` is higher up.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Whether a `pdftotext` binary can be spawned from `PATH`. Its exit
    /// status is not consulted; `-v` exits non-zero on some poppler builds.
    pub fn is_available() -> bool {
        match Command::new("pdftotext").arg("-v").output() {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(error = %e, "pdftotext could not be spawned");
                false
            }
        }
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageFragments>, ScheduleError> {
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| ScheduleError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| ScheduleError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-bbox-layout")
            .arg(tmpfile.path())
            .arg("-")
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ScheduleError::PdftotextNotFound
                } else {
                    ScheduleError::Extraction(format!("pdftotext -bbox-layout failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(ScheduleError::PdftotextFailed { code, stderr });
        }

        let xml = String::from_utf8_lossy(&output.stdout);
        let pages = parse_bbox_xml(&xml);
        tracing::debug!(pages = pages.len(), "pdftotext extraction finished");
        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

#[derive(Debug, Clone)]
struct Word {
    text: String,
    x_min: f32,
    x_max: f32,
    y_max: f32,
}

fn parse_bbox_xml(xml: &str) -> Vec<PageFragments> {
    let mut pages = Vec::new();
    let mut current: Option<PageFragments> = None;
    let mut page_height = 0.0_f32;
    let mut line_words: Vec<Word> = Vec::new();

    for raw in xml.lines() {
        let line = raw.trim();

        if line.starts_with("<page ") {
            if let Some(page) = current.take() {
                pages.push(page);
            }
            page_height = parse_attr_f32(line, "height").unwrap_or(0.0);
            current = Some(PageFragments {
                page_number: pages.len() + 1,
                fragments: Vec::new(),
            });
            continue;
        }

        if line.starts_with("<line ") {
            line_words.clear();
            continue;
        }

        if line.starts_with("<word ") {
            if let Some(word) = parse_word(line) {
                line_words.push(word);
            }
            continue;
        }

        if line.starts_with("</line>") {
            if let Some(page) = current.as_mut() {
                page.fragments
                    .extend(words_to_fragments(&line_words, page_height));
            }
            line_words.clear();
        }
    }

    if let Some(page) = current.take() {
        pages.push(page);
    }

    pages
}

/// Convert the words of one pdftotext line into fragments, carrying the
/// inter-word spacing on each fragment so that wide column gaps survive
/// concatenation.
fn words_to_fragments(words: &[Word], page_height: f32) -> Vec<TextFragment> {
    words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let separator = match words.get(i + 1) {
                Some(next) if next.x_min - word.x_max <= WIDE_GAP => " ",
                _ => COLUMN_SEPARATOR,
            };
            TextFragment {
                text: format!("{}{}", word.text, separator),
                x: word.x_min,
                baseline_y: page_height - word.y_max,
            }
        })
        .collect()
}

fn parse_word(tag: &str) -> Option<Word> {
    let start = tag.find('>')? + 1;
    let end = tag.rfind("</word>")?;
    let text = decode_xml_entities(&tag[start..end]).trim().to_string();
    if text.is_empty() {
        return None;
    }
    Some(Word {
        text,
        x_min: parse_attr_f32(tag, "xMin")?,
        x_max: parse_attr_f32(tag, "xMax")?,
        y_max: parse_attr_f32(tag, "yMax")?,
    })
}

fn parse_attr_f32(tag: &str, name: &str) -> Option<f32> {
    parse_attr(tag, name)?.parse().ok()
}

fn parse_attr<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!(" {}=\"", name);
    let start = tag.find(&needle)? + needle.len();
    let rest = &tag[start..];
    let end = rest.find('"')?;
    Some(&rest[..end])
}

fn decode_xml_entities(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    const XML: &str = r#"
<doc>
  <page width="612.000000" height="792.000000">
    <flow>
      <block xMin="36.0" yMin="40.0" xMax="400.0" yMax="52.0">
        <line xMin="36.0" yMin="40.0" xMax="400.0" yMax="52.0">
          <word xMin="36.0" yMin="40.0" xMax="60.0" yMax="52.0">Mazda</word>
          <word xMin="63.0" yMin="40.0" xMax="90.0" yMax="52.0">MX-5</word>
          <word xMin="93.0" yMin="40.0" xMax="110.0" yMax="52.0">Cup</word>
          <word xMin="200.0" yMin="40.0" xMax="260.0" yMax="52.0">Qualifying</word>
        </line>
      </block>
    </flow>
  </page>
  <page width="612.000000" height="792.000000">
    <flow>
      <block xMin="36.0" yMin="40.0" xMax="400.0" yMax="52.0">
        <line xMin="36.0" yMin="40.0" xMax="400.0" yMax="52.0">
          <word xMin="36.0" yMin="40.0" xMax="60.0" yMax="52.0">Ford &amp; Co</word>
        </line>
      </block>
    </flow>
  </page>
</doc>
"#;

    #[test]
    fn test_parse_bbox_xml_pages_and_baselines() {
        let pages = parse_bbox_xml(XML);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].page_number, 1);
        assert_eq!(pages[1].page_number, 2);
        assert_eq!(pages[0].fragments.len(), 4);
        assert_eq!(pages[0].fragments[0].baseline_y, 740.0);
        assert_eq!(pages[0].fragments[0].x, 36.0);
        assert_eq!(pages[1].fragments[0].text.trim(), "Ford & Co");
    }

    #[test]
    fn test_availability_agrees_with_extraction() {
        let result = PdftotextExtractor::new().extract_pages(b"not a pdf");
        let not_found = matches!(result, Err(ScheduleError::PdftotextNotFound));
        assert_eq!(not_found, !PdftotextExtractor::is_available());
    }

    #[test]
    fn test_wide_gap_becomes_column_separator() {
        let pages = parse_bbox_xml(XML);
        let text: String = pages[0].fragments.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(text.trim_end(), "Mazda MX-5 Cup   Qualifying");
    }
}
