use bittutor_protocol::RegistrationPayload;
use std::path::{Path, PathBuf};

use crate::error::{Result, SubmitError};

/// A file chosen in a file field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    path: PathBuf,
}

impl SelectedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> String {
        match self.path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => self.path.to_string_lossy().into_owned(),
        }
    }

    /// Everything after the last `.` of the file name, or the whole name
    /// when it has no `.`
    pub fn extension(&self) -> String {
        let name = self.file_name();
        name.rsplit('.').next().unwrap_or_default().to_string()
    }

    /// Read the whole file
    pub async fn read(&self) -> Result<Vec<u8>> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|source| SubmitError::FileRead {
                path: self.path.clone(),
                source,
            })
    }
}

/// Finish a registration payload by reading the selected file into it.
///
/// With no file the payload is returned as is, with no image. The payload is
/// only handed back once the read has completed.
pub async fn attach_file_if_present(
    payload: RegistrationPayload,
    file: Option<&SelectedFile>,
) -> Result<RegistrationPayload> {
    let Some(file) = file else {
        return Ok(payload);
    };

    let bytes = file.read().await?;
    let ext = file.extension();
    tracing::debug!("Read {} bytes from {:?}", bytes.len(), file.path());

    Ok(payload.with_image(bytes, ext))
}
