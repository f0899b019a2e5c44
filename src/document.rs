//! Host documents that receive the pasted image reference.
//!
//! A paste only needs two things from its host: where the document lives
//! (or that it has never been saved) and a way to insert text at the cursor.

use std::fs;
use std::path::{Path, PathBuf};

/// Errors while inserting text into a document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Whether a document has a file behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Saved(PathBuf),
    Untitled,
}

/// Cursor position in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertionPoint {
    /// Zero-based line and column; the column counts characters.
    At { line: usize, column: usize },
    /// After the last character.
    #[default]
    End,
}

impl InsertionPoint {
    /// Byte offset of this point in `text`.
    ///
    /// Positions past the last line or past the end of a line are clamped,
    /// the way an editor clamps its cursor.
    pub fn byte_offset(&self, text: &str) -> usize {
        let (line, column) = match *self {
            InsertionPoint::End => return text.len(),
            InsertionPoint::At { line, column } => (line, column),
        };

        let mut line_start = 0;
        for (index, segment) in text.split_inclusive('\n').enumerate() {
            if index == line {
                let content = segment
                    .strip_suffix('\n')
                    .map(|s| s.strip_suffix('\r').unwrap_or(s))
                    .unwrap_or(segment);
                let within = content
                    .char_indices()
                    .nth(column)
                    .map(|(offset, _)| offset)
                    .unwrap_or(content.len());
                return line_start + within;
            }
            line_start += segment.len();
        }
        text.len()
    }
}

/// A document a paste can write into.
pub trait Document {
    fn source(&self) -> DocumentSource;

    /// Insert `text` at `at` without replacing anything.
    fn insert(&mut self, at: InsertionPoint, text: &str) -> Result<(), DocumentError>;
}

/// A markdown file on disk. Insertions are written back immediately.
#[derive(Debug)]
pub struct MarkdownFile {
    path: PathBuf,
}

impl MarkdownFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Document for MarkdownFile {
    fn source(&self) -> DocumentSource {
        DocumentSource::Saved(self.path.clone())
    }

    fn insert(&mut self, at: InsertionPoint, text: &str) -> Result<(), DocumentError> {
        let mut contents = fs::read_to_string(&self.path).map_err(|source| DocumentError::Read {
            path: self.path.clone(),
            source,
        })?;
        contents.insert_str(at.byte_offset(&contents), text);
        fs::write(&self.path, contents).map_err(|source| DocumentError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// In-memory text, optionally tied to a path.
#[derive(Debug, Clone, Default)]
pub struct Buffer {
    path: Option<PathBuf>,
    text: String,
}

impl Buffer {
    /// A buffer that was never saved.
    pub fn untitled(text: impl Into<String>) -> Self {
        Self {
            path: None,
            text: text.into(),
        }
    }

    /// A buffer backed by `path` on disk.
    pub fn named(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            text: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Document for Buffer {
    fn source(&self) -> DocumentSource {
        match &self.path {
            Some(path) => DocumentSource::Saved(path.clone()),
            None => DocumentSource::Untitled,
        }
    }

    fn insert(&mut self, at: InsertionPoint, text: &str) -> Result<(), DocumentError> {
        let offset = at.byte_offset(&self.text);
        self.text.insert_str(offset, text);
        Ok(())
    }
}
