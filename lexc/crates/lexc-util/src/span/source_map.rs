//! Source files loaded from disk or built in memory.
//!
//! A [`SourceFile`] keeps the text together with precomputed line start
//! offsets so diagnostics can quote the offending line.

use std::path::Path;

use crate::error::{SourceError, SourceResult};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use lexc_util::span::SourceFile;
///
/// let file = SourceFile::new("main.lx", "x = 1\ny = 2");
/// assert_eq!(file.name(), "main.lx");
/// assert_eq!(file.line_count(), 2);
/// assert_eq!(file.line_at(2), Some("y = 2"));
/// ```
#[derive(Clone, Debug)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: String,
    /// Precomputed line start offsets
    line_starts: Vec<usize>,
}

impl SourceFile {
    /// Create a new source file from in-memory text.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Read a source file from disk.
    ///
    /// The whole file is read up front; the scanner needs the complete input
    /// before it starts.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Io`] if the file cannot be read and
    /// [`SourceError::InvalidUtf8`] if its bytes are not UTF-8.
    pub fn load(path: &Path) -> SourceResult<Self> {
        let bytes = std::fs::read(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let content = String::from_utf8(bytes).map_err(|e| SourceError::InvalidUtf8 {
            path: path.to_path_buf(),
            offset: e.utf8_error().valid_up_to(),
        })?;

        Ok(Self::new(path.display().to_string(), content))
    }

    /// Compute line start offsets from content
    fn line_starts(content: &str) -> Vec<usize> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .char_indices()
                .filter(|&(_, ch)| ch == '\n')
                .map(|(i, _)| i + 1),
        );
        line_starts
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the text of a line (1-based), without its line terminator.
    ///
    /// Returns `None` if the line number is out of bounds.
    pub fn line_at(&self, line: usize) -> Option<&str> {
        let index = line.checked_sub(1)?;
        let start = *self.line_starts.get(index)?;
        let end = self
            .line_starts
            .get(index + 1)
            .copied()
            .unwrap_or(self.content.len());

        let text = &self.content[start..end];
        let text = text.strip_suffix('\n').unwrap_or(text);
        Some(text.strip_suffix('\r').unwrap_or(text))
    }
}
