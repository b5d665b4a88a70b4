use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use zip::result::ZipError;
use zip::ZipArchive;

use crate::modules::blog::application::ports::outgoing::{DocumentExtractor, ExtractionError};

const MAIN_DOCUMENT_PART: &str = "word/document.xml";

/// Cap on the decompressed size of `word/document.xml`.
pub const DEFAULT_MAX_DOCUMENT_BYTES: u64 = 32 * 1024 * 1024;

/// Reads the main part of an OOXML word-processing archive.
///
/// Text runs (`w:t`) are concatenated; every paragraph ends with a newline,
/// `w:tab` becomes a tab and `w:br` / `w:cr` become line breaks. Tab stop
/// definitions inside `w:tabs` are ignored.
///
/// Parsing is synchronous; async callers should run it on the blocking pool.
#[derive(Debug, Clone)]
pub struct DocxTextExtractor {
    max_document_bytes: u64,
}

impl Default for DocxTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocxTextExtractor {
    pub fn new() -> Self {
        Self::with_max_document_bytes(DEFAULT_MAX_DOCUMENT_BYTES)
    }

    pub fn with_max_document_bytes(max_document_bytes: u64) -> Self {
        Self { max_document_bytes }
    }

    fn read_main_part(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| ExtractionError::NotADocx(e.to_string()))?;

        let mut part = archive.by_name(MAIN_DOCUMENT_PART).map_err(|e| match e {
            ZipError::FileNotFound => ExtractionError::MissingMainDocument,
            other => ExtractionError::NotADocx(other.to_string()),
        })?;

        let limit = self.max_document_bytes;
        if part.size() > limit {
            return Err(ExtractionError::TooLarge { limit });
        }

        // The declared size can lie, so the read itself is bounded too.
        let mut xml = Vec::new();
        (&mut part)
            .take(limit + 1)
            .read_to_end(&mut xml)
            .map_err(|e| ExtractionError::NotADocx(e.to_string()))?;
        if xml.len() as u64 > limit {
            return Err(ExtractionError::TooLarge { limit });
        }

        String::from_utf8(xml).map_err(|e| ExtractionError::MalformedXml(e.to_string()))
    }

    fn xml_to_text(xml: &str) -> Result<String, ExtractionError> {
        let mut reader = Reader::from_str(xml);
        let mut out = String::new();
        let mut in_text = false;
        let mut in_tab_stops = false;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => match e.local_name().as_ref() {
                    b"t" => in_text = true,
                    b"tabs" => in_tab_stops = true,
                    _ => {}
                },
                Ok(Event::End(e)) => match e.local_name().as_ref() {
                    b"t" => in_text = false,
                    b"tabs" => in_tab_stops = false,
                    b"p" => out.push('\n'),
                    _ => {}
                },
                Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                    b"tab" if !in_tab_stops => out.push('\t'),
                    b"br" | b"cr" | b"p" => out.push('\n'),
                    _ => {}
                },
                Ok(Event::Text(t)) if in_text => {
                    let text = t
                        .unescape()
                        .map_err(|e| ExtractionError::MalformedXml(e.to_string()))?;
                    out.push_str(&text);
                }
                Ok(Event::CData(c)) if in_text => {
                    out.push_str(&String::from_utf8_lossy(&c.into_inner()));
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(ExtractionError::MalformedXml(format!(
                        "at byte {}: {}",
                        reader.error_position(),
                        e
                    )))
                }
                _ => {}
            }
        }

        Ok(out.trim_end().to_string())
    }
}

impl DocumentExtractor for DocxTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        let xml = self.read_main_part(bytes)?;
        Self::xml_to_text(&xml)
    }
}
