// File I/O: result set loading and comparison report export

pub mod csv;
pub mod json;
pub mod sink;
pub mod source;
pub mod xlsx;

pub use sink::{ReportFormat, ReportSink, DEFAULT_OUTPUT, HEADERS};
pub use source::{FileSource, SourceProvider};
