//! xmlsplit - Split large aggregate XML documents into record documents.
//!
//! This crate splits one aggregate XML document (a root element holding
//! many repeated sub-records) into individual, independently well-formed
//! XML documents, one per matched record. The input is consumed as a
//! single forward pass over a streaming event sequence, so documents too
//! large to hold in memory split in constant space per record.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use xmlsplit::{split_file, MatchCriteria};
//!
//! # fn main() -> xmlsplit::Result<()> {
//! let criteria = MatchCriteria::resolve(Some("record"), None, None, None)?;
//! let report = split_file(Path::new("aggregate.xml"), criteria, Some(Path::new("out")))?;
//! println!("wrote {} documents", report.documents_written);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! The splitter is organized into several modules:
//!
//! - [`criteria`]: Resolved match criteria and the record matcher
//! - [`error`]: Error types and Result alias
//! - [`splitting`]: Scan cursor, depth tracking and fragment extraction
//! - [`writer`]: Fragment serialization to standalone documents
//! - [`splitter`]: File-to-directory split service
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod criteria;
pub mod error;
pub mod splitter;
pub mod splitting;
pub mod writer;

// Re-export main function
pub use splitter::split_file;

// Re-export commonly used items
pub use criteria::{MatchCriteria, QName};
pub use error::{Result, SplitError};
pub use splitting::{Fragment, ScanCursor, SplitEngine, SplitReport};
pub use writer::{FragmentSink, FragmentWriter};
