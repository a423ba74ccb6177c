//! Form state and the payloads collected from it
//!
//! A form is anything that can report the value of a named field and the
//! file selected in a file field. The CLI fills a [`FormValues`] from its
//! arguments; tests build one directly.

mod collect;
mod file;

pub use collect::*;
pub use file::*;

use std::collections::HashMap;
use std::path::PathBuf;

/// Field identifiers used by the registration and login pages
pub mod fields {
    pub const FULL_NAME: &str = "fullname";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const STUDIES: &str = "studies";
    pub const AGE: &str = "age";
    pub const RESUME: &str = "resume";
    pub const IMAGE: &str = "image";
}

pub trait FormState {
    /// Current value of a text field, `None` if the form has no such field
    fn value(&self, field: &str) -> Option<&str>;

    /// File chosen in a file field, if any
    fn selected_file(&self, field: &str) -> Option<&SelectedFile>;
}

/// In-memory form state
#[derive(Debug, Clone, Default)]
pub struct FormValues {
    values: HashMap<String, String>,
    files: HashMap<String, SelectedFile>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, field: &str, value: impl Into<String>) -> Self {
        self.set_value(field, value);
        self
    }

    pub fn with_file(mut self, field: &str, path: impl Into<PathBuf>) -> Self {
        self.set_file(field, path);
        self
    }

    pub fn set_value(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(field.to_string(), value.into());
    }

    pub fn set_file(&mut self, field: &str, path: impl Into<PathBuf>) {
        self.files.insert(field.to_string(), SelectedFile::new(path));
    }
}

impl FormState for FormValues {
    fn value(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    fn selected_file(&self, field: &str) -> Option<&SelectedFile> {
        self.files.get(field)
    }
}
