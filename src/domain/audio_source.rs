use std::fmt;
use std::path::Path;

/// Locator for the voice memo a scheduling request refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioSource(String);

impl AudioSource {
    pub fn from_path(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Final path component, used as the upload file name.
    pub fn file_name(&self) -> Option<&str> {
        Path::new(&self.0).file_name().and_then(|name| name.to_str())
    }
}

impl fmt::Display for AudioSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
