use crate::diff::{Side, line_count};
use egui::{FontId, RichText, Ui};
use std::path::PathBuf;

pub enum InputAction {
    OpenDialog(Side),
    OpenRecent(Side, PathBuf),
}

/// One of the two code inputs with its header
pub struct InputPanel<'a> {
    pub side: Side,
    pub title: &'a str,
    pub placeholder: &'a str,
    pub file_name: Option<&'a str>,
    pub recent_files: &'a [PathBuf],
    pub font_size: f32,
}

impl InputPanel<'_> {
    pub fn show(self, ui: &mut Ui, content: &mut String) -> Option<InputAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            ui.label(RichText::new(self.title).strong());
            if let Some(name) = self.file_name {
                ui.label(RichText::new(name).small().weak());
            }

            ui.menu_button("📂", |ui| {
                for path in self.recent_files {
                    let file_name = path
                        .file_name()
                        .and_then(|n| n.to_str())
                        .unwrap_or("Unknown");
                    let path_str = path.to_string_lossy();
                    if ui
                        .button(file_name)
                        .on_hover_text(path_str.as_ref())
                        .clicked()
                    {
                        action = Some(InputAction::OpenRecent(self.side, path.clone()));
                        ui.close();
                    }
                }
                if !self.recent_files.is_empty() {
                    ui.separator();
                }
                if ui.button("Open File...").clicked() {
                    action = Some(InputAction::OpenDialog(self.side));
                    ui.close();
                }
            })
            .response
            .on_hover_text("Open");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let lines = line_count(content.as_str());
                ui.label(RichText::new(format!("Lines: {}", lines)).small());
            });
        });

        ui.add(
            egui::TextEdit::multiline(content)
                .code_editor()
                .font(FontId::monospace(self.font_size))
                .hint_text(self.placeholder)
                .desired_width(f32::INFINITY)
                .desired_rows(14),
        );

        action
    }
}
