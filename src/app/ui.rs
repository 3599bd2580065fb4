use super::{Message, PhoneExporter};
use crate::utils::file_size::human_size;
use eframe::egui::{self, Align2, Color32, RichText};

impl PhoneExporter {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(20.0);
            ui.vertical_centered(|ui| {
                ui.heading("JSON to Excel Converter");
                ui.add_space(5.0);
                ui.label(
                    RichText::new("Collect the unique phone numbers from a JSON file")
                        .color(ui.visuals().text_color().gamma_multiply(0.7)),
                );
            });

            ui.add_space(20.0);

            ui.group(|ui| {
                ui.horizontal(|ui| {
                    if ui.button("📂 Choose JSON File").clicked() {
                        self.select_file(ctx);
                    }
                    if let Some(name) = &self.state.loading {
                        ui.spinner();
                        ui.label(format!("Reading {}", name));
                    } else if let Some(document) = &self.state.document {
                        ui.label(format!(
                            "Loaded: {} ({})",
                            document.name,
                            human_size(document.size)
                        ))
                        .on_hover_text(document.path.display().to_string());
                    } else {
                        ui.label("No file selected");
                    }
                });
            });

            if let Some(error) = self.state.error_message {
                ui.add_space(10.0);
                ui.vertical_centered(|ui| {
                    ui.colored_label(Color32::from_rgb(220, 50, 50), error);
                });
            }

            ui.add_space(20.0);

            ui.vertical_centered(|ui| {
                let can_convert = self.state.can_convert();
                ui.add_enabled_ui(can_convert, |ui| {
                    let button = egui::Button::new(self.state.convert_label())
                        .min_size(egui::vec2(200.0, 40.0));
                    if ui.add(button).clicked() {
                        self.start_convert(ctx);
                    }
                });
            });

            if let Some(status) = self.state.status_text() {
                ui.add_space(20.0);
                ui.group(|ui| {
                    ui.label(status);
                    if ui.button("Open file").clicked() {
                        self.open_saved();
                    }
                });
            }
        });

        self.render_notice(ctx);
    }

    fn render_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.state.notice else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Upload")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(notice);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.dispatch(Message::NoticeDismissed);
        }
    }
}
