//! Record splitting: scan cursor, match evaluation, fragment extraction.

pub mod cursor;
pub mod engine;
pub mod types;

pub use cursor::ScanCursor;
pub use engine::SplitEngine;
pub use types::{Fragment, ScanEvent, SplitReport};
