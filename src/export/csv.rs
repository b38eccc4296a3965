use chrono::FixedOffset;

use crate::extraction::types::ExtractionRecord;
use crate::util::time::display_date;

const HEADER: [&str; 6] = ["URL", "Título", "Palabras", "Caracteres", "Párrafos", "Fecha"];

pub fn render(records: &[ExtractionRecord], offset: FixedOffset) -> String {
    let mut rows: Vec<String> = Vec::with_capacity(records.len() + 1);
    rows.push(quote_row(HEADER.iter().map(|h| h.to_string())));
    for r in records {
        rows.push(quote_row([
            r.url.clone(),
            r.title.clone(),
            r.word_count.to_string(),
            r.char_count.to_string(),
            r.paragraph_count.to_string(),
            display_date(r.extracted_at, offset),
        ]));
    }
    rows.join("\n")
}

fn quote_row<I: IntoIterator<Item = String>>(cells: I) -> String {
    cells.into_iter().map(|c| quote(&c)).collect::<Vec<_>>().join(",")
}

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}
