use crate::error::ConvertError;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;

/// A successfully parsed input file. The value is shared so export jobs can
/// keep their own handle while the UI moves on to another file.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
    pub value: Arc<Value>,
}

#[derive(Debug)]
pub struct ExportedWorkbook {
    pub bytes: Vec<u8>,
    pub rows: usize,
}

/// Results sent from worker threads back to the UI thread.
#[derive(Debug)]
pub enum JobEvent {
    Loaded {
        seq: u64,
        result: Result<LoadedDocument, ConvertError>,
    },
    Exported {
        result: Result<ExportedWorkbook, ConvertError>,
    },
}
