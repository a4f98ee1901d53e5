use crate::diff::Side;
use crate::file::FileData;
use std::path::PathBuf;

/// Response messages from background operations
pub enum ResponseMessage {
    FileLoaded(Side, Result<FileData, String>),
    ReportSaved(Result<PathBuf, String>),
}
