//! CSV output stage.
//!
//! One full write at the end of the run. UTF-8 with a BOM so spreadsheet
//! tools pick the right encoding for CJK text; standard quoting for fields
//! containing separators, quotes or line breaks.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::domain::EnrichedItem;

/// Fixed output column order.
pub const COLUMNS: [&str; 8] = [
    "name",
    "name_cn",
    "info",
    "score",
    "score_count",
    "rank",
    "type",
    "tags",
];

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

fn write_row<W: Write>(w: &mut W, row: &[&str]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first {
            write!(w, ",")?;
        }
        first = false;
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)
}

fn record_row(record: &EnrichedItem) -> [&str; 8] {
    let item = &record.item;
    [
        &item.name,
        &item.name_cn,
        &item.info,
        &item.score,
        &item.score_count,
        &item.rank,
        item.category.map_or("", |c| c.as_str()),
        &record.tags,
    ]
}

/// Write the full record set to `path`, header first.
pub fn write_csv(path: &Path, records: &[EnrichedItem]) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all("\u{feff}".as_bytes())?; // BOM
    write_row(&mut w, &COLUMNS)?;
    for record in records {
        write_row(&mut w, &record_row(record))?;
    }
    w.flush()
}
