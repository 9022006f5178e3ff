//! Splitting of comma-separated records.
//!
//! Records are one per line. A double-quoted field may contain commas, and
//! two consecutive quotes decode to one literal quote. Line breaks inside
//! quotes are not supported.

/// Rows with fewer fields than this are treated as blank or malformed.
pub const MIN_FIELDS: usize = 5;

const DELIMITER: char = ',';
const QUOTE: char = '"';

/// Splits one record into its fields.
///
/// An unescaped quote toggles quoted mode anywhere in the field, so
/// `ab"c,d"e` decodes to the single field `abc,de`.
#[must_use]
pub fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            QUOTE if chars.peek() == Some(&QUOTE) => {
                current.push(QUOTE);
                chars.next();
            }
            QUOTE => in_quotes = !in_quotes,
            DELIMITER if !in_quotes => fields.push(std::mem::take(&mut current)),
            other => current.push(other),
        }
    }
    fields.push(current);
    fields
}

/// Yields `(row_index, fields)` for every data row of a table, skipping the
/// header (row 0) and rows with fewer than [`MIN_FIELDS`] fields.
///
/// Row indices count from the header, so the first data row is row 1.
pub fn data_rows(text: &str) -> impl Iterator<Item = (usize, Vec<String>)> + '_ {
    text.trim()
        .split('\n')
        .enumerate()
        .skip(1)
        .filter_map(|(row, line)| {
            let fields = split_record(line.strip_suffix('\r').unwrap_or(line));
            if fields.len() < MIN_FIELDS {
                tracing::debug!(row, fields = fields.len(), "skipping short row");
                return None;
            }
            Some((row, fields))
        })
}

/// Field at `index`, or `""` when the row is shorter.
pub(crate) fn field(row: &[String], index: usize) -> &str {
    row.get(index).map_or("", String::as_str)
}
