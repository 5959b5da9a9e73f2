//! CSV and XLSX extraction, re-serialized to canonical comma-separated
//! text so downstream context treats tabular data uniformly.

use calamine::{open_workbook, Reader, Xlsx};
use std::fs;
use std::path::Path;
use tracing::debug;

use super::ExtractError;
use crate::domain::DocumentFormat;

/// Encodings attempted for CSV input, in order. The first one that both
/// decodes cleanly and parses as CSV wins.
const ENCODINGS: [TextEncoding; 6] = [
    TextEncoding::Utf8,
    TextEncoding::Iso8859_1,
    TextEncoding::Latin1,
    TextEncoding::Cp1252,
    TextEncoding::Utf16,
    TextEncoding::Utf32,
];

#[derive(Debug, Clone, Copy)]
enum TextEncoding {
    Utf8,
    Iso8859_1,
    Latin1,
    Cp1252,
    Utf16,
    Utf32,
}

impl TextEncoding {
    fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            Self::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
            // ISO-8859-1 maps every byte directly to the code point of
            // the same value, so it never fails.
            Self::Iso8859_1 | Self::Latin1 => {
                Some(bytes.iter().map(|&b| b as char).collect())
            }
            Self::Cp1252 => encoding_rs::WINDOWS_1252
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(|cow| cow.into_owned()),
            Self::Utf16 => {
                let (text, _, had_errors) = encoding_rs::UTF_16LE.decode(bytes);
                if had_errors {
                    None
                } else {
                    Some(text.into_owned())
                }
            }
            Self::Utf32 => decode_utf32(bytes),
        }
    }
}

/// encoding_rs deliberately excludes UTF-32, so decode it by hand.
/// Endianness comes from the BOM, little-endian when absent.
fn decode_utf32(bytes: &[u8]) -> Option<String> {
    let (bytes, big_endian) = match bytes {
        [0x00, 0x00, 0xFE, 0xFF, rest @ ..] => (rest, true),
        [0xFF, 0xFE, 0x00, 0x00, rest @ ..] => (rest, false),
        _ => (bytes, false),
    };

    if bytes.len() % 4 != 0 {
        return None;
    }

    bytes
        .chunks_exact(4)
        .map(|chunk| {
            let unit = if big_endian {
                u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]])
            } else {
                u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]])
            };
            char::from_u32(unit)
        })
        .collect()
}

/// Extracts tabular data as canonical CSV text.
pub fn extract(path: &Path, format: DocumentFormat) -> Result<String, ExtractError> {
    match format {
        DocumentFormat::Csv => extract_csv(path),
        DocumentFormat::Xlsx => extract_xlsx(path),
        _ => Err(ExtractError::Spreadsheet(format!(
            "not a tabular format: {format:?}"
        ))),
    }
}

/// Walks the encoding fallback list; fails only when every encoding
/// fails to decode or the decoded text fails to parse as CSV.
fn extract_csv(path: &Path) -> Result<String, ExtractError> {
    let bytes = fs::read(path)?;

    for encoding in ENCODINGS {
        let Some(text) = encoding.decode(&bytes) else {
            debug!(file = %path.display(), ?encoding, "failed to decode, trying next encoding");
            continue;
        };
        match reserialize_csv(&text) {
            Ok(out) => return Ok(out),
            Err(e) => {
                debug!(file = %path.display(), ?encoding, error = %e, "failed to parse, trying next encoding");
            }
        }
    }

    Err(ExtractError::EncodingExhausted)
}

/// Parses and re-emits CSV so quoting and separators come out canonical.
fn reserialize_csv(text: &str) -> Result<String, ExtractError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(text.as_bytes());
    let mut writer = csv::Writer::from_writer(Vec::new());

    for record in reader.records() {
        let record = record.map_err(|e| ExtractError::Spreadsheet(e.to_string()))?;
        writer
            .write_record(&record)
            .map_err(|e| ExtractError::Spreadsheet(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExtractError::Spreadsheet(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExtractError::Spreadsheet(e.to_string()))
}

/// XLSX is a ZIP container with its own internal encoding, so the
/// fallback list does not apply. All sheets are flattened to CSV lines
/// in workbook order.
fn extract_xlsx(path: &Path) -> Result<String, ExtractError> {
    let mut workbook =
        open_workbook::<Xlsx<_>, _>(path).map_err(|e| ExtractError::Spreadsheet(e.to_string()))?;

    let mut writer = csv::Writer::from_writer(Vec::new());
    for (_name, range) in workbook.worksheets() {
        for row in range.rows() {
            let record: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
            writer
                .write_record(&record)
                .map_err(|e| ExtractError::Spreadsheet(e.to_string()))?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExtractError::Spreadsheet(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExtractError::Spreadsheet(e.to_string()))
}
