use serde::{Serialize, Deserialize};

/// One word occurrence and the text on either side of it, borrowed from the
/// normalized line text. `left + word + right` always rebuilds the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextTriple<'a> {
    pub left: &'a str,
    pub word: &'a str,
    pub right: &'a str,
}

/// A single row of the KWIC table. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KwicRow {
    pub line_number: usize,
    pub reference: String,
    pub left_context: String,
    pub word: String,
    pub right_context: String,
    pub word_reference: String,
    pub word_lower: String,
}

/// Counters reported at the end of a KWIC run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KwicSummary {
    pub lines_processed: usize,
    pub empty_lines: usize,
    pub rows_written: usize,
}
