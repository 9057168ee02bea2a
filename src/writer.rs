//! Fragment writers: serialize one record as a standalone document.

use std::fs::OpenOptions;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use quick_xml::events::{BytesDecl, Event};
use quick_xml::Writer;
use uuid::Uuid;

use crate::error::{Result, SplitError};
use crate::splitting::Fragment;

/// Extension for generated record documents.
const OUTPUT_FILE_EXTENSION: &str = "xml";

/// Destination for completed fragments.
///
/// The engine hands each extracted fragment to a sink; the production
/// sink writes files, tests substitute in-memory sinks.
pub trait FragmentSink {
    /// Persist one fragment, returning the location it was written to.
    fn write(&mut self, fragment: Fragment) -> Result<PathBuf>;
}

/// Writes each fragment to a freshly named file in one directory.
///
/// File names are random UUIDs, so collisions are not expected; an
/// existing file with a generated name is a hard failure, never an
/// overwrite. Intermediate directories are not created.
pub struct FragmentWriter {
    output_dir: PathBuf,
}

impl FragmentWriter {
    /// Create a writer targeting `output_dir`.
    ///
    /// An empty path writes relative to the working directory.
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Serialize a fragment as a standalone document at `path`.
    ///
    /// Writes an XML declaration followed by the fragment's events in
    /// order. The file handle is flushed on success and released on both
    /// success and failure paths.
    fn write_to(&self, fragment: Fragment, path: &Path) -> Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| {
                if e.kind() == ErrorKind::AlreadyExists {
                    SplitError::OutputCollision(path.to_path_buf())
                } else {
                    SplitError::Io(e)
                }
            })?;

        let mut writer = Writer::new(BufWriter::new(file));
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        for event in fragment.into_events() {
            writer.write_event(event)?;
        }
        writer.into_inner().flush()?;
        Ok(())
    }
}

impl FragmentSink for FragmentWriter {
    fn write(&mut self, fragment: Fragment) -> Result<PathBuf> {
        let file_name = format!("{}.{OUTPUT_FILE_EXTENSION}", Uuid::new_v4());
        let path = self.output_dir.join(file_name);
        self.write_to(fragment, &path)?;
        Ok(path)
    }
}
