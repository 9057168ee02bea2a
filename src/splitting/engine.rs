//! Split engine: the outer scan loop and fragment extraction.

use std::io::BufRead;

use quick_xml::events::Event;

use crate::criteria::{MatchCriteria, QName};
use crate::error::{Result, SplitError};
use crate::splitting::cursor::ScanCursor;
use crate::splitting::types::{Fragment, ScanEvent, SplitReport};
use crate::writer::FragmentSink;

/// Engine that scans one event stream and extracts matched records.
///
/// The scan is a single forward pass: every event is consumed exactly
/// once, either by the outer loop (passed over) or by extraction (copied
/// into a fragment). Fragment content is never re-evaluated for further
/// matches, so a record nested inside an already-extracted record stays
/// inside its parent's output.
pub struct SplitEngine {
    criteria: MatchCriteria,
}

impl SplitEngine {
    /// Create a new split engine.
    #[must_use]
    pub fn new(criteria: MatchCriteria) -> Self {
        Self { criteria }
    }

    /// Scan the whole stream, writing one document per matched record.
    ///
    /// Consumes the root element first, then evaluates each element-open
    /// event against the criteria at the depth the element sits at. On a
    /// match, extraction drains the same cursor until the record's
    /// boundary, hands the fragment to the sink, and the scan resumes
    /// from the next event.
    ///
    /// # Errors
    /// Structural errors from the tokenizer, an unterminated record, or
    /// any sink failure abort the run. Documents already written stay on
    /// disk.
    pub fn split<R: BufRead, S: FragmentSink>(
        &self,
        cursor: &mut ScanCursor<R>,
        sink: &mut S,
    ) -> Result<SplitReport> {
        let root = cursor.consume_root()?;
        tracing::debug!(root = %root, "scanning aggregate document");

        let mut report = SplitReport::default();

        loop {
            // The element's own depth is the counter value before its
            // open event is applied.
            let start_depth = cursor.depth();
            let Some(event) = cursor.next_event()? else {
                break;
            };
            let ScanEvent::Open { name, event } = event else {
                continue;
            };

            if !self.criteria.matches(&name, start_depth) {
                continue;
            }

            let fragment = extract_fragment(cursor, name, event, start_depth)?;
            let path = sink.write(fragment)?;
            report.documents_written += 1;
            tracing::debug!(path = %path.display(), "wrote record document");
        }

        Ok(report)
    }
}

/// Drain events from the cursor until the matched record's boundary.
///
/// The boundary is the element-close event whose qualified name equals
/// the record's name while the depth has returned exactly to the record's
/// start depth. Name equality alone is not enough: the record's name may
/// recur on a descendant, and the depth gate is what keeps such a close
/// from terminating the fragment early. Everything before the boundary
/// is copied into the fragment verbatim.
fn extract_fragment<R: BufRead>(
    cursor: &mut ScanCursor<R>,
    name: QName,
    open: Event<'static>,
    start_depth: usize,
) -> Result<Fragment> {
    let mut fragment = Fragment::new(name);
    fragment.push(open);

    loop {
        let Some(event) = cursor.next_event()? else {
            return Err(SplitError::UnterminatedRecord {
                name: fragment.name().to_string(),
            });
        };
        match event {
            ScanEvent::Close { name, event } => {
                fragment.push(event);
                if name == *fragment.name() && cursor.depth() == start_depth {
                    tracing::debug!(
                        record = %fragment.name(),
                        depth = start_depth,
                        events = fragment.len(),
                        "extracted record"
                    );
                    return Ok(fragment);
                }
            }
            ScanEvent::Open { event, .. } | ScanEvent::Other(event) => fragment.push(event),
        }
    }
}
