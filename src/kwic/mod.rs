pub mod format;
pub mod writer;

use std::io::Write;
use log::{debug, info, trace};

use crate::config::KwicConfig;
use crate::document::Document;
use crate::error::Result;
use crate::parser::{TextParser, TeiParser};
use crate::segment::{UnicodeWordSegmenter, WordSegmenter};
use crate::types::{KwicRow, KwicSummary};

pub use format::LinkFormatter;
pub use writer::KwicWriter;

/// Turns the lines of a document into KWIC rows.
pub struct KwicGenerator<P: TextParser, S: WordSegmenter> {
    parser: P,
    segmenter: S,
    links: LinkFormatter,
}

impl<P: TextParser, S: WordSegmenter> KwicGenerator<P, S> {
    pub fn new(parser: P, segmenter: S, links: LinkFormatter) -> Self {
        Self {
            parser,
            segmenter,
            links,
        }
    }

    /// Rows for one line of normalized text, in segment order.
    pub fn rows_for_line(&self, line_number: usize, text: &str) -> Vec<KwicRow> {
        let reference = self.links.line_reference(line_number);

        self.segmenter
            .contexts(text)
            .into_iter()
            .map(|triple| KwicRow {
                line_number,
                reference: reference.clone(),
                left_context: triple.left.to_string(),
                word: triple.word.to_string(),
                right_context: triple.right.to_string(),
                word_reference: self.links.word_reference(triple.word),
                word_lower: triple.word.to_lowercase(),
            })
            .collect()
    }

    /// Write the rows of every line of `document` to `writer`, lines in
    /// document order.
    pub fn generate<W: Write>(
        &self,
        document: &Document,
        writer: &mut KwicWriter<W>,
    ) -> Result<KwicSummary> {
        let mut summary = KwicSummary::default();

        for (line_number, line) in self.parser.lines(document).into_iter().enumerate() {
            let text = self.parser.line_text(line);
            summary.lines_processed += 1;

            if text.is_empty() {
                debug!("Line {} has no reading text", line_number);
                summary.empty_lines += 1;
                continue;
            }
            trace!("Line {}: {}", line_number, text);

            for row in self.rows_for_line(line_number, &text) {
                writer.write_row(&row)?;
                summary.rows_written += 1;
            }
        }

        Ok(summary)
    }
}

impl KwicGenerator<TeiParser, UnicodeWordSegmenter> {
    pub fn from_config(config: &KwicConfig) -> Self {
        Self::new(
            TeiParser::new(config.parser.clone()),
            UnicodeWordSegmenter::new(),
            LinkFormatter::new(&config.output),
        )
    }
}

/// Run the whole conversion described by `config`: load the input document,
/// then write the KWIC table to the configured output path.
///
/// The input is parsed before the output file is created, so a missing or
/// malformed document leaves no output behind.
pub fn extract_kwic(config: &KwicConfig) -> Result<KwicSummary> {
    let document = Document::from_path(&config.files.input_path)?;
    let generator = KwicGenerator::from_config(config);

    let mut writer = KwicWriter::create(&config.files.output_path)?;
    let summary = generator.generate(&document, &mut writer)?;
    writer.finish()?;

    info!(
        "Wrote {} rows for {} lines ({} without text) to {:?}",
        summary.rows_written, summary.lines_processed, summary.empty_lines, config.files.output_path
    );
    Ok(summary)
}
