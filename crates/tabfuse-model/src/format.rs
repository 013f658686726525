use std::fmt;
use std::path::Path;

/// A recognized tabular file format, keyed by lowercase file extension.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum FileKind {
    Csv,
    Excel,
}

impl FileKind {
    /// All recognized formats, in display order.
    pub const ALL: [FileKind; 2] = [FileKind::Csv, FileKind::Excel];

    /// Determine the format from a file name's extension. Unrecognized
    /// extensions (including none at all) yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        let extension = Path::new(name).extension()?.to_str()?;
        match extension.to_ascii_lowercase().as_str() {
            "csv" => Some(FileKind::Csv),
            "xlsx" => Some(FileKind::Excel),
            _ => None,
        }
    }

    /// Output file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            FileKind::Csv => "csv",
            FileKind::Excel => "xlsx",
        }
    }

    /// Human-facing format name used in messages and output file names.
    pub fn display_name(self) -> &'static str {
        match self {
            FileKind::Csv => "CSV",
            FileKind::Excel => "Excel",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One uploaded input file: name plus raw content bytes. Immutable once
/// constructed.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub content: Vec<u8>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }

    pub fn kind(&self) -> Option<FileKind> {
        FileKind::from_name(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_extensions_case_insensitively() {
        assert_eq!(FileKind::from_name("a.csv"), Some(FileKind::Csv));
        assert_eq!(FileKind::from_name("REPORT.XLSX"), Some(FileKind::Excel));
        assert_eq!(FileKind::from_name("data.Csv"), Some(FileKind::Csv));
    }

    #[test]
    fn rejects_unknown_extensions() {
        assert_eq!(FileKind::from_name("notes.txt"), None);
        assert_eq!(FileKind::from_name("archive.xls"), None);
        assert_eq!(FileKind::from_name("noext"), None);
    }

    #[test]
    fn display_names_match_output_wording() {
        assert_eq!(FileKind::Csv.display_name(), "CSV");
        assert_eq!(FileKind::Excel.display_name(), "Excel");
        assert_eq!(FileKind::Excel.extension(), "xlsx");
    }
}
