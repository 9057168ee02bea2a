//! Scan cursor: the shared stream position and depth tracker.
//!
//! The cursor is the single point through which events are consumed. It
//! owns the tokenizer and the depth counter and updates the counter in
//! lock-step with every event it hands out, so depth bookkeeping stays
//! correct regardless of whether the caller is scanning past an element
//! or extracting it. Both the outer scan loop and fragment extraction
//! take the cursor by reference, which keeps the depth invariant visible
//! at every call site.

use std::io::BufRead;

use quick_xml::events::Event;
use quick_xml::name::{LocalName, ResolveResult};
use quick_xml::NsReader;

use crate::criteria::QName;
use crate::error::{Result, SplitError};
use crate::splitting::types::ScanEvent;

/// Forward-only cursor over the structural events of one document.
pub struct ScanCursor<R: BufRead> {
    reader: NsReader<R>,
    buf: Vec<u8>,
    depth: usize,
}

impl<R: BufRead> ScanCursor<R> {
    /// Create a cursor over raw XML input.
    ///
    /// Empty-element tags are expanded into open/close pairs so depth
    /// accounting is uniform across both element forms.
    pub fn new(input: R) -> Self {
        let mut reader = NsReader::from_reader(input);
        reader.config_mut().expand_empty_elements = true;
        Self {
            reader,
            buf: Vec::new(),
            depth: 0,
        }
    }

    /// Current nesting depth.
    ///
    /// The counter is 1 immediately after [`consume_root`] and reflects
    /// the last event handed out: an element at depth N reads as N+1
    /// once its open event has been consumed.
    ///
    /// [`consume_root`]: Self::consume_root
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Consume events up to and including the root element's open event.
    ///
    /// The root itself is never emitted into any fragment; it only
    /// initializes the depth counter to 1. Declarations, comments,
    /// doctype and whitespace before the root are skipped.
    ///
    /// # Errors
    /// [`SplitError::MissingRoot`] if the input ends without a root
    /// element.
    pub fn consume_root(&mut self) -> Result<QName> {
        loop {
            self.buf.clear();
            let (resolution, event) = self.reader.read_resolved_event_into(&mut self.buf)?;
            match event {
                Event::Start(start) => {
                    let name = resolved_name(resolution, start.local_name())?;
                    self.depth = 1;
                    return Ok(name);
                }
                Event::Eof => return Err(SplitError::MissingRoot),
                _ => {}
            }
        }
    }

    /// Read the next event, applying depth bookkeeping.
    ///
    /// Returns `None` at end of input. The depth counter is updated for
    /// every element open and close, including those the caller decides
    /// to pass over.
    pub fn next_event(&mut self) -> Result<Option<ScanEvent>> {
        self.buf.clear();
        let (resolution, event) = self.reader.read_resolved_event_into(&mut self.buf)?;
        match event {
            Event::Eof => Ok(None),
            Event::Start(start) => {
                let name = resolved_name(resolution, start.local_name())?;
                let event = Event::Start(start.into_owned());
                self.depth += 1;
                Ok(Some(ScanEvent::Open { name, event }))
            }
            Event::End(end) => {
                let name = resolved_name(resolution, end.local_name())?;
                let event = Event::End(end.into_owned());
                self.depth = self.depth.saturating_sub(1);
                Ok(Some(ScanEvent::Close { name, event }))
            }
            other => Ok(Some(ScanEvent::Other(other.into_owned()))),
        }
    }
}

/// Build a [`QName`] from the tokenizer's namespace resolution.
fn resolved_name(resolution: ResolveResult<'_>, local: LocalName<'_>) -> Result<QName> {
    let local = String::from_utf8_lossy(local.as_ref()).into_owned();
    match resolution {
        ResolveResult::Unbound => Ok(QName::unqualified(local)),
        ResolveResult::Bound(ns) => Ok(QName {
            namespace: Some(String::from_utf8_lossy(ns.as_ref()).into_owned()),
            local,
        }),
        ResolveResult::Unknown(prefix) => Err(SplitError::UnboundPrefix(
            String::from_utf8_lossy(&prefix).into_owned(),
        )),
    }
}
