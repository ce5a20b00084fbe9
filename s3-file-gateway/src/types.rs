/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;
use std::path::Path;

/// Outcome of an existence probe against the storage backend.
///
/// A failed probe is reported as an [`Error`](crate::error::Error) alongside this type,
/// so "absent" is never signalled through the error channel.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Existence {
    /// The bucket or object exists.
    Present,

    /// The backend answered that the bucket or object does not exist.
    Absent,
}

impl Existence {
    /// Returns true if the probed resource exists.
    pub fn is_present(&self) -> bool {
        matches!(self, Existence::Present)
    }
}

impl From<bool> for Existence {
    fn from(value: bool) -> Self {
        if value {
            Existence::Present
        } else {
            Existence::Absent
        }
    }
}

/// File extension of an uploaded file, including the leading `.` (e.g. `.pdf`).
///
/// The extension selects the stored content type and the suffix of the final object key.
/// Case is preserved as given.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct FileExtension(String);

impl FileExtension {
    /// Create a new extension. A missing leading `.` is added, an empty value means no extension.
    pub fn new(extension: impl Into<String>) -> Self {
        let extension = extension.into();
        if extension.is_empty() || extension.starts_with('.') {
            FileExtension(extension)
        } else {
            FileExtension(format!(".{extension}"))
        }
    }

    /// Derive the extension from a client-side file name, e.g. `report.PDF` yields `.PDF`.
    ///
    /// Names without an extension (`README`, `.profile`) yield an empty extension.
    pub fn from_file_name(file_name: impl AsRef<Path>) -> Self {
        file_name
            .as_ref()
            .extension()
            .map(|ext| FileExtension::new(ext.to_string_lossy()))
            .unwrap_or_default()
    }

    /// The extension including its leading `.`, or an empty string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when there is no extension.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if `name` already ends with this extension, ignoring case.
    pub(crate) fn is_suffix_of(&self, name: &str) -> bool {
        name.to_lowercase().ends_with(&self.0.to_lowercase())
    }
}

impl fmt::Display for FileExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FileExtension {
    fn from(value: &str) -> Self {
        FileExtension::new(value)
    }
}

impl From<String> for FileExtension {
    fn from(value: String) -> Self {
        FileExtension::new(value)
    }
}

impl AsRef<str> for FileExtension {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::{Existence, FileExtension};

    #[test]
    fn test_leading_dot_is_added() {
        assert_eq!(".pdf", FileExtension::new("pdf").as_str());
        assert_eq!(".pdf", FileExtension::new(".pdf").as_str());
        assert!(FileExtension::new("").is_empty());
    }

    #[test]
    fn test_from_file_name() {
        assert_eq!(".PDF", FileExtension::from_file_name("report.PDF").as_str());
        assert_eq!(".gz", FileExtension::from_file_name("dir/archive.tar.gz").as_str());
        assert!(FileExtension::from_file_name("README").is_empty());
        assert!(FileExtension::from_file_name(".profile").is_empty());
    }

    #[test]
    fn test_suffix_match_ignores_case() {
        let ext = FileExtension::new(".pdf");
        assert!(ext.is_suffix_of("report.pdf"));
        assert!(ext.is_suffix_of("REPORT.PDF"));
        assert!(!ext.is_suffix_of("report"));
        assert!(!ext.is_suffix_of("report.pdf.bak"));
        assert!(FileExtension::default().is_suffix_of("anything"));
    }

    #[test]
    fn test_existence_from_bool() {
        assert_eq!(Existence::Present, Existence::from(true));
        assert!(!Existence::from(false).is_present());
    }
}
