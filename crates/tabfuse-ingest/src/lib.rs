//! Input decoding for the merge pipeline.
//!
//! CSV input is text with an unknown encoding: a fixed candidate list is
//! attempted in order and the first successful decode-and-parse wins. XLSX
//! input is a binary container read through calamine. Three extraction modes
//! share one contract: probe (first data row only), header (leading rows
//! before the skip boundary), and body (everything after it).

pub mod delimited;
pub mod encoding;
pub mod error;
pub mod reader;
pub mod sheet;

pub use encoding::TextEncoding;
pub use error::{IngestError, Result};
pub use reader::{read_body, read_header, read_probe, read_table};
