//! I/O layer: the YAML master `reader` and the IPL/YAML `writers`
//! with their destination/template file placement.
pub mod reader;
pub use reader::{parse_document, read_document};

pub mod writers;
