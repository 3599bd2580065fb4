use crate::convert::LoadedDocument;
use crate::error::ConvertError;
use std::path::PathBuf;

pub const UPLOAD_NOTICE: &str = "File uploaded successfully";

/// Everything the window shows. Replaced as a whole by [`AppState::apply`];
/// dialogs, file IO and worker threads stay in the app shell and report back
/// as [`Message`]s.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub document: Option<LoadedDocument>,
    /// Name of the file being read, if a load is in flight.
    pub loading: Option<String>,
    /// Bumped on every selection; completions carrying an older value are stale.
    pub load_seq: u64,
    pub is_converting: bool,
    pub last_export: Option<SavedExport>,
    pub notice: Option<&'static str>,
    pub error_message: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SavedExport {
    pub path: PathBuf,
    pub rows: usize,
}

#[derive(Debug)]
pub enum Message {
    FileSelected {
        name: String,
    },
    LoadFinished {
        seq: u64,
        result: Result<LoadedDocument, ConvertError>,
    },
    NoticeDismissed,
    ConvertRequested,
    ExportSaved {
        path: PathBuf,
        rows: usize,
    },
    ExportCancelled,
    ExportFailed(ConvertError),
}

impl AppState {
    pub fn apply(self, message: Message) -> Self {
        match message {
            Message::FileSelected { name } => Self {
                loading: Some(name),
                load_seq: self.load_seq + 1,
                notice: Some(UPLOAD_NOTICE),
                error_message: None,
                ..self
            },
            Message::LoadFinished { seq, .. } if seq != self.load_seq => self,
            Message::LoadFinished {
                result: Ok(document),
                ..
            } => Self {
                document: Some(document),
                loading: None,
                error_message: None,
                ..self
            },
            Message::LoadFinished { result: Err(e), .. } => Self {
                loading: None,
                error_message: Some(e.user_message()),
                ..self
            },
            Message::NoticeDismissed => Self {
                notice: None,
                ..self
            },
            Message::ConvertRequested if !self.can_convert() => self,
            Message::ConvertRequested => Self {
                is_converting: true,
                error_message: None,
                ..self
            },
            Message::ExportSaved { path, rows } => Self {
                is_converting: false,
                last_export: Some(SavedExport { path, rows }),
                ..self
            },
            Message::ExportCancelled => Self {
                is_converting: false,
                ..self
            },
            Message::ExportFailed(e) => Self {
                is_converting: false,
                error_message: Some(e.user_message()),
                ..self
            },
        }
    }

    pub fn can_convert(&self) -> bool {
        self.document.is_some() && !self.is_converting
    }

    pub fn convert_label(&self) -> &'static str {
        if self.is_converting {
            "Converting..."
        } else {
            "Convert to Excel"
        }
    }

    pub fn status_text(&self) -> Option<String> {
        self.last_export.as_ref().map(|saved| {
            format!(
                "Saved {} phone numbers to {}",
                saved.rows,
                saved.path.display()
            )
        })
    }
}
