//! Types for the record splitting system.

use quick_xml::events::Event;

use crate::criteria::QName;

/// One structural event as seen by the scan loop.
///
/// Element opens and closes carry their resolved qualified name so the
/// matcher and the boundary check never re-resolve prefixes; everything
/// else (text, CDATA, comments, processing instructions) passes through
/// as [`ScanEvent::Other`].
#[derive(Debug)]
pub enum ScanEvent {
    /// An element-open event.
    Open {
        name: QName,
        event: Event<'static>,
    },
    /// An element-close event.
    Close {
        name: QName,
        event: Event<'static>,
    },
    /// Any other event, copied verbatim into fragments.
    Other(Event<'static>),
}

/// The ordered event sequence of one matched record, from its open event
/// to its depth-gated close event inclusive.
#[derive(Debug)]
pub struct Fragment {
    name: QName,
    events: Vec<Event<'static>>,
}

impl Fragment {
    pub(crate) fn new(name: QName) -> Self {
        Self {
            name,
            events: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, event: Event<'static>) {
        self.events.push(event);
    }

    /// Qualified name of the record's root element.
    #[must_use]
    pub fn name(&self) -> &QName {
        &self.name
    }

    /// Number of events in the fragment.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Consume the fragment, yielding its events in document order.
    #[must_use]
    pub fn into_events(self) -> Vec<Event<'static>> {
        self.events
    }
}

/// Summary of one completed split run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SplitReport {
    /// Number of record documents written.
    pub documents_written: usize,
}
