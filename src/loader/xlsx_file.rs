//! Minimal XLSX reader: an .xlsx file is a zip archive of XML parts. Only the
//! first worksheet is read, cell values come back as text.

use crate::errors::{AppError, AppResult};
use crate::models::DataTable;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use zip::ZipArchive;
use zip::result::ZipError;

const WORKBOOK: &str = "xl/workbook.xml";
const WORKBOOK_RELS: &str = "xl/_rels/workbook.xml.rels";
const SHARED_STRINGS: &str = "xl/sharedStrings.xml";
const DEFAULT_SHEET: &str = "xl/worksheets/sheet1.xml";

pub(super) fn read_xlsx(path: &Path) -> AppResult<DataTable> {
    let file = File::open(path)?;
    let mut archive =
        ZipArchive::new(BufReader::new(file)).map_err(|e| xlsx_err("invalid archive", e))?;

    let shared = match read_entry(&mut archive, SHARED_STRINGS)? {
        Some(xml) => parse_shared_strings(&xml)?,
        None => Vec::new(),
    };

    let sheet_path = first_sheet_path(&mut archive)?;
    tracing::debug!(sheet = %sheet_path, shared = shared.len(), "reading worksheet");

    let xml = read_entry(&mut archive, &sheet_path)?
        .ok_or_else(|| AppError::Xlsx(format!("worksheet '{sheet_path}' not found")))?;

    let mut grid = parse_sheet(&xml, &shared)?
        .into_iter()
        .filter(|row| row.iter().any(|c| !c.trim().is_empty()));

    let Some(headers) = grid.next() else {
        return Ok(DataTable::empty());
    };

    Ok(DataTable::new(headers, grid.collect()))
}

fn xlsx_err<E: std::fmt::Display>(what: &str, e: E) -> AppError {
    AppError::Xlsx(format!("{what}: {e}"))
}

/// Read a whole archive member as text; `None` when the member does not exist
fn read_entry<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> AppResult<Option<String>> {
    match archive.by_name(name) {
        Ok(mut entry) => {
            let mut content = String::new();
            entry.read_to_string(&mut content)?;
            Ok(Some(content))
        }
        Err(ZipError::FileNotFound) => Ok(None),
        Err(e) => Err(xlsx_err(name, e)),
    }
}

fn attr_value(e: &BytesStart<'_>, local: &[u8]) -> AppResult<Option<String>> {
    for attr in e.attributes() {
        let attr = attr.map_err(|err| xlsx_err("bad attribute", err))?;
        if attr.key.local_name().as_ref() == local {
            let value = attr
                .unescape_value()
                .map_err(|err| xlsx_err("bad attribute value", err))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

/// Archive path of the first worksheet listed in the workbook
fn first_sheet_path<R: Read + Seek>(archive: &mut ZipArchive<R>) -> AppResult<String> {
    let (Some(workbook), Some(rels)) = (
        read_entry(archive, WORKBOOK)?,
        read_entry(archive, WORKBOOK_RELS)?,
    ) else {
        return Ok(DEFAULT_SHEET.to_string());
    };

    let Some(rel_id) = first_sheet_rel_id(&workbook)? else {
        return Ok(DEFAULT_SHEET.to_string());
    };

    let targets = relationship_targets(&rels)?;
    Ok(match targets.get(&rel_id) {
        Some(target) if target.starts_with('/') => target.trim_start_matches('/').to_string(),
        Some(target) => format!("xl/{target}"),
        None => DEFAULT_SHEET.to_string(),
    })
}

fn first_sheet_rel_id(workbook_xml: &str) -> AppResult<Option<String>> {
    let mut reader = Reader::from_str(workbook_xml);

    loop {
        match reader
            .read_event()
            .map_err(|e| xlsx_err("workbook.xml", e))?
        {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"sheet" => {
                return attr_value(&e, b"id");
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

fn relationship_targets(rels_xml: &str) -> AppResult<HashMap<String, String>> {
    let mut reader = Reader::from_str(rels_xml);
    let mut targets = HashMap::new();

    loop {
        match reader
            .read_event()
            .map_err(|e| xlsx_err("workbook.xml.rels", e))?
        {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"Relationship" => {
                if let (Some(id), Some(target)) = (attr_value(&e, b"Id")?, attr_value(&e, b"Target")?)
                {
                    targets.insert(id, target);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(targets)
}

/// Shared string table. Rich-text runs are concatenated, phonetic hints skipped.
fn parse_shared_strings(xml: &str) -> AppResult<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut strings = Vec::new();

    let mut current = String::new();
    let mut in_text = false;
    let mut in_phonetic = false;

    loop {
        match reader
            .read_event()
            .map_err(|e| xlsx_err("sharedStrings.xml", e))?
        {
            Event::Start(e) => match e.local_name().as_ref() {
                b"si" => current.clear(),
                b"rPh" => in_phonetic = true,
                b"t" if !in_phonetic => in_text = true,
                _ => {}
            },
            Event::Empty(e) if e.local_name().as_ref() == b"si" => strings.push(String::new()),
            Event::Text(t) if in_text => {
                let text = t.unescape().map_err(|e| xlsx_err("sharedStrings.xml", e))?;
                current.push_str(&text);
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"si" => strings.push(std::mem::take(&mut current)),
                b"rPh" => in_phonetic = false,
                b"t" => in_text = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(strings)
}

/// Highest column index Excel allows (`XFD`)
const MAX_COLUMN: usize = 16_383;

/// Zero-based column of a cell reference such as `AB12`.
/// `None` when the reference has no column letters.
fn column_index(cell_ref: &str) -> AppResult<Option<usize>> {
    let letters = cell_ref.bytes().take_while(|b| b.is_ascii_alphabetic());

    let mut n = 0usize;
    for b in letters {
        n = n
            .checked_mul(26)
            .and_then(|v| v.checked_add((b.to_ascii_uppercase() - b'A' + 1) as usize))
            .filter(|&v| v <= MAX_COLUMN + 1)
            .ok_or_else(|| AppError::Xlsx(format!("cell reference out of range: {cell_ref}")))?;
    }

    Ok(n.checked_sub(1))
}

#[derive(Default)]
struct PendingCell {
    col: usize,
    kind: Option<String>,
    value: String,
}

/// Worksheet cells as rows of text, in sheet order
fn parse_sheet(xml: &str, shared: &[String]) -> AppResult<Vec<Vec<String>>> {
    let mut reader = Reader::from_str(xml);
    let mut rows: Vec<Vec<String>> = Vec::new();

    let mut row: Option<Vec<String>> = None;
    let mut cell: Option<PendingCell> = None;
    let mut capture = false;

    loop {
        match reader
            .read_event()
            .map_err(|e| xlsx_err("worksheet", e))?
        {
            Event::Start(e) => match e.local_name().as_ref() {
                b"row" => row = Some(Vec::new()),
                b"c" => {
                    let next_col = row.as_ref().map_or(0, |r| r.len());
                    let col = match attr_value(&e, b"r")? {
                        Some(r) => column_index(&r)?.unwrap_or(next_col),
                        None => next_col,
                    };
                    if col > MAX_COLUMN {
                        return Err(AppError::Xlsx("too many cells in row".into()));
                    }
                    cell = Some(PendingCell {
                        col,
                        kind: attr_value(&e, b"t")?,
                        value: String::new(),
                    });
                }
                b"v" | b"t" => capture = cell.is_some(),
                _ => {}
            },
            Event::Empty(e) if e.local_name().as_ref() == b"row" => rows.push(Vec::new()),
            Event::Text(t) if capture => {
                if let Some(c) = cell.as_mut() {
                    let text = t.unescape().map_err(|e| xlsx_err("worksheet", e))?;
                    c.value.push_str(&text);
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"v" | b"t" => capture = false,
                b"c" => {
                    if let (Some(c), Some(r)) = (cell.take(), row.as_mut()) {
                        let text = resolve_cell(&c, shared)?;
                        if r.len() <= c.col {
                            r.resize(c.col + 1, String::new());
                        }
                        r[c.col] = text;
                    }
                }
                b"row" => {
                    if let Some(r) = row.take() {
                        rows.push(r);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(rows)
}

fn resolve_cell(cell: &PendingCell, shared: &[String]) -> AppResult<String> {
    let value = cell.value.as_str();

    Ok(match cell.kind.as_deref() {
        Some("s") => {
            let idx: usize = value
                .trim()
                .parse()
                .map_err(|e| xlsx_err("shared string index", e))?;
            shared
                .get(idx)
                .cloned()
                .ok_or_else(|| AppError::Xlsx(format!("shared string {idx} out of range")))?
        }
        Some("b") => {
            if value.trim() == "1" {
                "TRUE".to_string()
            } else {
                "FALSE".to_string()
            }
        }
        _ => value.to_string(),
    })
}
