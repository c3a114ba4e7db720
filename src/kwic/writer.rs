// src/kwic/writer.rs

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use log::debug;
use crate::error::{Error, Result};
use crate::types::KwicRow;

pub const HEADER: [&str; 7] = [
    "line_number",
    "reference",
    "left_context",
    "word",
    "right_context",
    "word_reference",
    "word_lower",
];

/// CSV sink for KWIC rows. The header is written on creation; buffered rows
/// are flushed by [`KwicWriter::finish`], or on drop if a run bails out early.
pub struct KwicWriter<W: Write> {
    writer: csv::Writer<W>,
    rows_written: usize,
}

impl KwicWriter<BufWriter<File>> {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!("Creating KWIC output at {:?}", path.as_ref());
        let file = File::create(path)?;
        Self::new(BufWriter::new(file))
    }
}

impl<W: Write> KwicWriter<W> {
    pub fn new(inner: W) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(inner);
        writer.write_record(&HEADER)?;

        Ok(Self {
            writer,
            rows_written: 0,
        })
    }

    pub fn write_row(&mut self, row: &KwicRow) -> Result<()> {
        self.writer.serialize(row)?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush everything and hand back the underlying writer.
    pub fn finish(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| Error::Io(e.into_error()))
    }
}
