//! Error types for the splitter.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the splitter library.
#[derive(Debug, Error)]
pub enum SplitError {
    /// Namespace/element list has an unpaired entry.
    #[error("Unpaired entry in namespace/element list: '{0}'. Expected alternating namespace,local-name pairs")]
    UnpairedNamespaceElement(String),

    /// Aggregate depth must be at least 1.
    #[error("Invalid aggregate depth: {0}. Depth counts from 1 at the root's direct children")]
    InvalidDepth(usize),

    /// The underlying tokenizer reported malformed XML.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] quick_xml::Error),

    /// The input document contains no root element.
    #[error("No root element found in input document")]
    MissingRoot,

    /// The input ended before a matched record was closed.
    #[error("Input ended before record <{name}> was closed")]
    UnterminatedRecord { name: String },

    /// An element name uses a namespace prefix with no in-scope binding.
    #[error("Unbound namespace prefix: '{0}'")]
    UnboundPrefix(String),

    /// Generated output file name already exists.
    #[error("Output file already exists: {}", .0.display())]
    OutputCollision(PathBuf),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for splitter operations.
pub type Result<T> = std::result::Result<T, SplitError>;
