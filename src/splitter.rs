//! Top-level split service: wire a file input to the engine and writer.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::criteria::MatchCriteria;
use crate::error::Result;
use crate::splitting::{ScanCursor, SplitEngine, SplitReport};
use crate::writer::FragmentWriter;

/// Split one aggregate XML file into record documents.
///
/// Opens `input`, scans it in a single forward pass and writes one file
/// per matched record into `output_dir` (the working directory when
/// `None`). No manifest is written; callers list the directory to
/// discover results.
///
/// # Errors
/// Configuration has already been resolved by this point, so failures
/// are structural (malformed or truncated input) or output I/O. The
/// first error aborts the run; documents written before it remain on
/// disk.
pub fn split_file(
    input: &Path,
    criteria: MatchCriteria,
    output_dir: Option<&Path>,
) -> Result<SplitReport> {
    let file = File::open(input)?;
    let mut cursor = ScanCursor::new(BufReader::new(file));
    let mut writer = FragmentWriter::new(output_dir.unwrap_or_else(|| Path::new("")));

    let report = SplitEngine::new(criteria).split(&mut cursor, &mut writer)?;

    if report.documents_written == 0 {
        tracing::warn!(input = %input.display(), "no records matched the criteria");
    } else {
        tracing::info!(
            input = %input.display(),
            documents = report.documents_written,
            "split complete"
        );
    }

    Ok(report)
}
