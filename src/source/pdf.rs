//! PDF document source using lopdf.
//!
//! Walks each page's content stream, tracking the text matrix and the
//! selected font, and emits one span per shown string. Bold and italic are
//! inferred from the font's base name.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use lopdf::{Document as LopdfDocument, Object, ObjectId};

use super::DocumentSource;
use crate::detect::detect_format_from_path;
use crate::error::{Error, Result};
use crate::model::TextSpan;

/// A PDF file opened for span extraction.
pub struct PdfSource {
    doc: LopdfDocument,
    name: String,
}

impl PdfSource {
    /// Open a PDF file. The source is named after the file name.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        detect_format_from_path(path)?;
        let doc = LopdfDocument::load(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        log::debug!("Opened {} ({} pages)", name, doc.get_pages().len());
        Ok(Self { doc, name })
    }

    /// Load a PDF from bytes under the given name.
    pub fn from_bytes(name: impl Into<String>, data: &[u8]) -> Result<Self> {
        let doc = LopdfDocument::load_mem(data)?;
        Ok(Self {
            doc,
            name: name.into(),
        })
    }

    fn page_id(&self, page: u32) -> Result<ObjectId> {
        let pages = self.doc.get_pages();
        pages
            .get(&page)
            .copied()
            .ok_or(Error::PageOutOfRange(page, pages.len() as u32))
    }

    fn page_content(&self, page_id: ObjectId) -> Result<Vec<u8>> {
        let page_dict = self.doc.get_dictionary(page_id)?;
        let contents = page_dict.get(b"Contents")?;

        match contents {
            Object::Reference(r) => match self.doc.get_object(*r) {
                // Unfiltered streams have nothing to decompress
                Ok(Object::Stream(s)) => {
                    Ok(s.decompressed_content().unwrap_or_else(|_| s.content.clone()))
                }
                _ => Err(Error::PdfParse("Invalid content stream".to_string())),
            },
            Object::Array(arr) => {
                let mut content = Vec::new();
                for obj in arr {
                    if let Object::Reference(r) = obj {
                        if let Ok(Object::Stream(s)) = self.doc.get_object(*r) {
                            let data = s.decompressed_content().unwrap_or_else(|_| s.content.clone());
                            content.extend_from_slice(&data);
                            content.push(b' ');
                        }
                    }
                }
                Ok(content)
            }
            _ => Err(Error::PdfParse("Invalid content stream".to_string())),
        }
    }

    fn walk_content(
        &self,
        content: &[u8],
        fonts: &BTreeMap<Vec<u8>, &lopdf::Dictionary>,
        page: u32,
    ) -> Result<Vec<TextSpan>> {
        let content = lopdf::content::Content::decode(content)?;

        let base_fonts: HashMap<&[u8], String> = fonts
            .iter()
            .map(|(key, font)| {
                let base = font
                    .get(b"BaseFont")
                    .ok()
                    .and_then(|o| o.as_name().ok())
                    .map(|n| String::from_utf8_lossy(n).to_string())
                    .unwrap_or_else(|| "Unknown".to_string());
                (key.as_slice(), base)
            })
            .collect();

        let mut spans = Vec::new();
        let mut font_key: Vec<u8> = Vec::new();
        let mut font_size: f32 = 12.0;
        let mut matrix = TextMatrix::default();
        let mut in_text = false;

        for op in content.operations {
            match op.operator.as_str() {
                "BT" => {
                    in_text = true;
                    matrix = TextMatrix::default();
                }
                "ET" => in_text = false,
                "Tf" => {
                    if let (Some(Object::Name(name)), Some(size)) =
                        (op.operands.first(), op.operands.get(1))
                    {
                        font_key = name.clone();
                        font_size = get_number(size).unwrap_or(12.0);
                    }
                }
                "Td" | "TD" => {
                    if op.operands.len() >= 2 {
                        let tx = get_number(&op.operands[0]).unwrap_or(0.0);
                        let ty = get_number(&op.operands[1]).unwrap_or(0.0);
                        matrix.translate(tx, ty);
                    }
                }
                "Tm" => {
                    if op.operands.len() >= 6 {
                        let n: Vec<f32> = op
                            .operands
                            .iter()
                            .take(6)
                            .map(|o| get_number(o).unwrap_or(0.0))
                            .collect();
                        matrix.set(n[0], n[1], n[2], n[3], n[4], n[5]);
                    }
                }
                "T*" => matrix.next_line(),
                "Tj" | "TJ" | "'" | "\"" => {
                    if op.operator == "'" || op.operator == "\"" {
                        matrix.next_line();
                    }
                    if !in_text {
                        continue;
                    }

                    let encoding = fonts
                        .get(&font_key)
                        .and_then(|f| f.get_font_encoding(&self.doc).ok());
                    let decode = |bytes: &[u8]| match &encoding {
                        Some(enc) => LopdfDocument::decode_text(enc, bytes).unwrap_or_default(),
                        None => decode_text_simple(bytes),
                    };

                    let text = match op.operator.as_str() {
                        "TJ" => match op.operands.first() {
                            Some(Object::Array(items)) => decode_tj_array(items, decode),
                            _ => String::new(),
                        },
                        "\"" => match op.operands.get(2) {
                            Some(Object::String(bytes, _)) => decode(bytes),
                            _ => String::new(),
                        },
                        _ => match op.operands.first() {
                            Some(Object::String(bytes, _)) => decode(bytes),
                            _ => String::new(),
                        },
                    };

                    if text.trim().is_empty() {
                        continue;
                    }

                    let font_name = base_fonts
                        .get(font_key.as_slice())
                        .cloned()
                        .unwrap_or_else(|| String::from_utf8_lossy(&font_key).to_string());
                    let (x, y) = matrix.position();
                    spans.push(styled_span(
                        text,
                        x,
                        y,
                        font_size * matrix.scale(),
                        &font_name,
                        page,
                    ));
                }
                _ => {}
            }
        }

        Ok(spans)
    }
}

impl DocumentSource for PdfSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn metadata_title(&self) -> Option<String> {
        let info_ref = self.doc.trailer.get(b"Info").ok()?.as_reference().ok()?;
        let info = self.doc.get_dictionary(info_ref).ok()?;
        get_string_from_dict(info, b"Title")
    }

    fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    fn page_spans(&self, page: u32) -> Result<Vec<TextSpan>> {
        let page_id = self.page_id(page)?;
        let fonts = self
            .doc
            .get_page_fonts(page_id)
            .map_err(|e| Error::TextExtract(format!("Page {}: {}", page, e)))?;
        let content = self.page_content(page_id)?;

        let mut spans = self.walk_content(&content, &fonts, page)?;

        // PDF y grows upward: top of page first, then left to right.
        spans.sort_by(|a, b| match b.baseline.partial_cmp(&a.baseline) {
            Some(Ordering::Equal) | None => a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal),
            Some(ord) => ord,
        });

        Ok(spans)
    }
}

/// A span styled from its font's base name.
fn styled_span(text: String, x: f32, y: f32, font_size: f32, font_name: &str, page: u32) -> TextSpan {
    let lower = font_name.to_lowercase();
    let mut span = TextSpan::new(text, font_size, page).at(y).at_x(x);
    span.bold = lower.contains("bold") || lower.contains("black") || lower.contains("heavy");
    span.italic = lower.contains("italic") || lower.contains("oblique");
    span
}

/// Decode a TJ array, turning large negative kerning into word spaces.
fn decode_tj_array(items: &[Object], decode: impl Fn(&[u8]) -> String) -> String {
    // 1/1000 text-space units; around 0.2 em reads as a word gap
    const SPACE_THRESHOLD: f32 = 200.0;

    let mut combined = String::new();
    for item in items {
        let adjustment = match item {
            Object::String(bytes, _) => {
                combined.push_str(&decode(bytes));
                continue;
            }
            Object::Integer(n) => -(*n as f32),
            Object::Real(n) => -*n,
            _ => continue,
        };

        if adjustment > SPACE_THRESHOLD
            && !combined.ends_with(' ')
            && !combined.ends_with('\u{00A0}')
            && combined
                .chars()
                .last()
                .map(|c| !is_spaceless_script_char(c))
                .unwrap_or(false)
        {
            combined.push(' ');
        }
    }
    combined
}

/// Text matrix for tracking position in a content stream.
#[derive(Debug, Clone)]
struct TextMatrix {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32,
    f: f32,
}

impl Default for TextMatrix {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }
}

impl TextMatrix {
    fn set(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) {
        *self = Self { a, b, c, d, e, f };
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        self.e += tx * self.a + ty * self.c;
        self.f += tx * self.b + ty * self.d;
    }

    fn next_line(&mut self) {
        // Default leading; TL is not tracked
        self.f -= 12.0 * self.d;
    }

    fn position(&self) -> (f32, f32) {
        (self.e, self.f)
    }

    fn scale(&self) -> f32 {
        (self.a * self.a + self.c * self.c).sqrt()
    }
}

fn get_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

/// Scripts written without spaces between words (Chinese, Japanese kana).
/// Hangul is excluded: Korean uses word spaces.
fn is_spaceless_script_char(c: char) -> bool {
    matches!(c as u32,
        0x4E00..=0x9FFF
        | 0x3400..=0x4DBF
        | 0x20000..=0x2EBEF
        | 0x3040..=0x30FF
        | 0x3000..=0x303F)
}

/// Decode a string operand without a font encoding: UTF-16BE with BOM,
/// then UTF-8, then Latin-1.
fn decode_text_simple(bytes: &[u8]) -> String {
    if let Some(utf16) = decode_utf16_be(bytes) {
        return utf16;
    }

    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

fn decode_utf16_be(bytes: &[u8]) -> Option<String> {
    let body = bytes.strip_prefix(&[0xFE, 0xFF])?;
    let units: Vec<u16> = body
        .chunks_exact(2)
        .map(|c| u16::from_be_bytes([c[0], c[1]]))
        .collect();
    String::from_utf16(&units).ok()
}

fn get_string_from_dict(dict: &lopdf::Dictionary, key: &[u8]) -> Option<String> {
    match dict.get(key).ok()? {
        Object::String(bytes, _) => Some(decode_text_simple(bytes)),
        Object::Name(bytes) => String::from_utf8(bytes.clone()).ok(),
        _ => None,
    }
}
