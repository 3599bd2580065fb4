mod state;
mod ui;

use crate::config::ExportConfig;
use crate::convert::{export_phone_numbers, load_document, save_workbook, ExportedWorkbook, JobEvent};
use crate::error::ConvertError;
use derivative::Derivative;
use eframe::{egui, App};
use log::{error, info, warn};
use rfd::FileDialog;
use std::path::PathBuf;
use std::sync::mpsc::{self as std_mpsc, Receiver, Sender};
use state::{AppState, Message};

#[derive(Derivative)]
#[derivative(Debug)]
pub struct PhoneExporter {
    config: ExportConfig,
    state: AppState,
    #[derivative(Debug = "ignore")]
    job_sender: Sender<JobEvent>,
    #[derivative(Debug = "ignore")]
    job_receiver: Receiver<JobEvent>,
}

impl PhoneExporter {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: ExportConfig) -> Self {
        info!("Initializing JSON to Excel converter");
        let (job_sender, job_receiver) = std_mpsc::channel();
        Self {
            config,
            state: AppState::default(),
            job_sender,
            job_receiver,
        }
    }

    fn dispatch(&mut self, message: Message) {
        self.state = std::mem::take(&mut self.state).apply(message);
    }

    pub fn select_file(&mut self, ctx: &egui::Context) {
        let picked = FileDialog::new()
            .add_filter("JSON", &["json"])
            .add_filter("All files", &["*"])
            .pick_file();

        if let Some(path) = picked {
            self.start_load(path, ctx);
        }
    }

    fn start_load(&mut self, path: PathBuf, ctx: &egui::Context) {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.dispatch(Message::FileSelected { name });

        let seq = self.state.load_seq;
        let sender = self.job_sender.clone();
        let ctx = ctx.clone();
        info!("Loading {} (selection #{})", path.display(), seq);

        std::thread::spawn(move || {
            let result = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt.block_on(load_document(&path)),
                Err(e) => Err(ConvertError::Worker(e.to_string())),
            };
            let _ = sender.send(JobEvent::Loaded { seq, result });
            ctx.request_repaint();
        });
    }

    pub fn start_convert(&mut self, ctx: &egui::Context) {
        if !self.state.can_convert() {
            return;
        }
        self.dispatch(Message::ConvertRequested);

        let Some(document) = self.state.document.as_ref() else {
            return;
        };
        info!("Converting {}", document.name);

        let value = document.value.clone();
        let config = self.config.clone();
        let sender = self.job_sender.clone();
        let ctx = ctx.clone();

        std::thread::spawn(move || {
            let result = export_phone_numbers(&value, &config);
            let _ = sender.send(JobEvent::Exported { result });
            ctx.request_repaint();
        });
    }

    fn finish_export(&mut self, workbook: ExportedWorkbook) {
        let target = FileDialog::new()
            .set_file_name(&self.config.file_name)
            .add_filter("Excel workbook", &["xlsx"])
            .save_file();

        let Some(path) = target else {
            info!("Save cancelled, discarding workbook");
            self.dispatch(Message::ExportCancelled);
            return;
        };

        match save_workbook(&workbook.bytes, &path) {
            Ok(()) => self.dispatch(Message::ExportSaved {
                path,
                rows: workbook.rows,
            }),
            Err(e) => {
                error!("Export failed: {}", e);
                self.dispatch(Message::ExportFailed(e));
            }
        }
    }

    pub fn open_saved(&self) {
        if let Some(saved) = &self.state.last_export {
            if let Err(e) = open::that(&saved.path) {
                warn!("Could not open {}: {}", saved.path.display(), e);
            }
        }
    }

    pub fn update_state(&mut self) {
        while let Ok(event) = self.job_receiver.try_recv() {
            match event {
                JobEvent::Loaded { seq, result } => {
                    match &result {
                        Ok(doc) => info!("Loaded {} ({} bytes)", doc.name, doc.size),
                        Err(e) => error!("Load failed: {}", e),
                    }
                    if seq != self.state.load_seq {
                        info!("Discarding result of superseded selection #{}", seq);
                    }
                    self.dispatch(Message::LoadFinished { seq, result });
                }
                JobEvent::Exported { result: Ok(workbook) } => self.finish_export(workbook),
                JobEvent::Exported { result: Err(e) } => {
                    error!("Export failed: {}", e);
                    self.dispatch(Message::ExportFailed(e));
                }
            }
        }
    }
}

impl App for PhoneExporter {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state();
        self.render(ctx);
    }
}
