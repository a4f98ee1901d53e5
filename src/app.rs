use crate::config::Config;
use crate::constant::{MODIFIED_PLACEHOLDER, ORIGINAL_PLACEHOLDER};
use crate::diff::inline::{self, CharChange, SimilarCharDiffer};
use crate::diff::{self, CompareError, CompareResult, Side};
use crate::export;
use crate::messages::ResponseMessage;
use crate::style::{Theme, configure_style};
use crate::ui::diff_view;
use crate::ui::input_panel::{InputAction, InputPanel};
use crate::ui::toolbar::{Toolbar, ToolbarAction, ToolbarState};
use crate::worker;
use egui::{Color32, RichText};
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender, channel};

/// Status line shown above the results
struct Status {
    text: String,
    is_error: bool,
}

/// One of the two inputs
#[derive(Default)]
struct Input {
    content: String,
    file_name: Option<String>,
}

pub struct CodeCompareApp {
    config: Config,
    original: Input,
    modified: Input,
    result: Option<CompareResult>,
    inline_changes: Vec<Option<Vec<CharChange>>>,
    status: Option<Status>,
    applied_theme: Theme,
    differ: SimilarCharDiffer,
    response_sender: Sender<ResponseMessage>,
    response_receiver: Receiver<ResponseMessage>,
}

impl CodeCompareApp {
    pub fn new(cc: &eframe::CreationContext<'_>, initial_files: [Option<PathBuf>; 2]) -> Self {
        let config = Config::default();
        let theme = config.settings.theme;
        configure_style(&cc.egui_ctx, theme);

        let (response_sender, response_receiver) = channel();

        let [original_path, modified_path] = initial_files;
        for (side, path) in [(Side::Original, original_path), (Side::Modified, modified_path)] {
            if let Some(path) = path {
                worker::load_file(side, path, response_sender.clone());
            }
        }

        Self {
            config,
            original: Input::default(),
            modified: Input::default(),
            result: None,
            inline_changes: Vec::new(),
            status: None,
            applied_theme: theme,
            differ: SimilarCharDiffer::default(),
            response_sender,
            response_receiver,
        }
    }

    fn input_mut(&mut self, side: Side) -> &mut Input {
        match side {
            Side::Original => &mut self.original,
            Side::Modified => &mut self.modified,
        }
    }

    fn set_status(&mut self, text: impl Into<String>, is_error: bool) {
        self.status = Some(Status {
            text: text.into(),
            is_error,
        });
    }

    /// Replace the shown result, diffing its modified rows once
    fn set_result(&mut self, result: Option<CompareResult>) {
        self.inline_changes = result
            .as_ref()
            .map(|r| inline::modified_row_changes(r, &self.differ))
            .unwrap_or_default();
        self.result = result;
    }

    fn compare(&mut self) {
        let options = self.config.settings.compare;
        match diff::compare_with(&self.original.content, &self.modified.content, &options) {
            Ok(result) => {
                tracing::info!("Compared inputs: {}", export::summary(&result.stats));
                self.set_result(Some(result));
                self.status = None;
            }
            Err(CompareError::InvalidInput) => {
                self.set_result(None);
                self.set_status(CompareError::InvalidInput.to_string(), false);
            }
            Err(e) => {
                tracing::error!("Comparison failed: {}", e);
                self.set_result(None);
                self.set_status(format!("An error occurred while comparing: {}", e), true);
            }
        }
    }

    fn swap(&mut self) {
        std::mem::swap(&mut self.original, &mut self.modified);
        self.set_result(None);
        self.status = None;
    }

    fn clear(&mut self) {
        self.original = Input::default();
        self.modified = Input::default();
        self.set_result(None);
        self.status = None;
    }

    fn handle_responses(&mut self) {
        while let Ok(response) = self.response_receiver.try_recv() {
            match response {
                ResponseMessage::FileLoaded(side, Ok(data)) => {
                    let file_name = data.display_name();
                    self.config.add_recent_file(data.path);
                    let input = self.input_mut(side);
                    input.content = data.content;
                    input.file_name = Some(file_name);
                    self.set_result(None);
                }
                ResponseMessage::FileLoaded(_, Err(e)) => self.set_status(e, true),
                ResponseMessage::ReportSaved(Ok(path)) => {
                    self.set_status(format!("Report saved to {}", path.display()), false)
                }
                ResponseMessage::ReportSaved(Err(e)) => {
                    tracing::error!("Failed to save report: {}", e);
                    self.set_status(format!("Failed to save report: {}", e), true)
                }
            }
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let compare = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Enter);
        let clear = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Delete);

        if ctx.input_mut(|i| i.consume_shortcut(&compare)) {
            self.compare();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&clear)) {
            self.clear();
        }
    }

    fn handle_toolbar(&mut self, ctx: &egui::Context, action: ToolbarAction) {
        let settings = &mut self.config.settings;
        match action {
            ToolbarAction::Compare => self.compare(),
            ToolbarAction::Swap => self.swap(),
            ToolbarAction::Clear => self.clear(),
            ToolbarAction::CopyResult => {
                if let Some(result) = &self.result {
                    ctx.copy_text(export::to_plain_text(result));
                    self.set_status("Copied to clipboard", false);
                }
            }
            ToolbarAction::SaveReport => {
                if let Some(result) = &self.result {
                    let start_dir = self
                        .config
                        .report_dir()
                        .inspect_err(|e| tracing::warn!("No report directory: {}", e))
                        .ok();
                    worker::save_report(
                        result.clone(),
                        self.config.settings.compare,
                        start_dir,
                        self.response_sender.clone(),
                    );
                }
            }
            ToolbarAction::ToggleTheme => settings.theme = settings.theme.toggled(),
            ToolbarAction::ToggleInlineHighlight => {
                settings.inline_highlight = !settings.inline_highlight
            }
            ToolbarAction::ToggleLineNumbers => {
                settings.show_line_numbers = !settings.show_line_numbers
            }
            ToolbarAction::ToggleLineEndings => {
                settings.compare.ignore_line_endings = !settings.compare.ignore_line_endings;
                self.recompare();
            }
            ToolbarAction::SetStrategy(strategy) => {
                settings.compare.strategy = strategy;
                self.recompare();
            }
            ToolbarAction::SetThreshold(threshold) => {
                settings.compare.similarity_threshold = threshold;
                self.recompare();
            }
        }
    }

    /// Refresh a shown result after its options changed
    fn recompare(&mut self) {
        if self.result.is_some() {
            self.compare();
        }
    }

    fn handle_input_action(&mut self, action: InputAction) {
        match action {
            InputAction::OpenDialog(side) => {
                let start_dir = self
                    .config
                    .settings
                    .recent_files
                    .first()
                    .and_then(|p| p.parent())
                    .map(|p| p.to_path_buf());
                worker::pick_and_load(side, start_dir, self.response_sender.clone());
            }
            InputAction::OpenRecent(side, path) => {
                worker::load_file(side, path, self.response_sender.clone());
            }
        }
    }

    fn show_inputs(&mut self, ui: &mut egui::Ui) {
        let font_size = self.config.settings.font_size;
        let recent_files = self.config.settings.recent_files.clone();
        let mut actions = Vec::new();

        ui.columns(2, |columns| {
            let panels = [
                (Side::Original, "Original", ORIGINAL_PLACEHOLDER, &mut self.original),
                (Side::Modified, "Modified", MODIFIED_PLACEHOLDER, &mut self.modified),
            ];
            for ((side, title, placeholder, input), ui) in panels.into_iter().zip(columns) {
                let panel = InputPanel {
                    side,
                    title,
                    placeholder,
                    file_name: input.file_name.as_deref(),
                    recent_files: &recent_files,
                    font_size,
                };
                if let Some(action) = panel.show(ui, &mut input.content) {
                    actions.push(action);
                }
            }
        });

        for action in actions {
            self.handle_input_action(action);
        }
    }

    fn show_results(&mut self, ui: &mut egui::Ui) {
        let render_config = self.config.settings.render_config();

        if let Some(status) = &self.status {
            let color = if status.is_error {
                Color32::from_rgb(200, 40, 40)
            } else {
                ui.visuals().weak_text_color()
            };
            ui.label(RichText::new(&status.text).color(color));
        }

        let Some(result) = &self.result else {
            if self.status.is_none() {
                ui.vertical_centered(|ui| {
                    ui.add_space(20.0);
                    ui.label(RichText::new("Paste code on both sides and press Compare").weak());
                });
            }
            return;
        };

        ui.horizontal(|ui| {
            diff_view::render_stats(ui, &result.stats, render_config.theme);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                diff_view::render_legend(ui, render_config.theme);
            });
        });
        ui.separator();

        egui::ScrollArea::both()
            .id_salt("diff_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                diff_view::render_diff_view(ui, result, &self.inline_changes, &render_config);
            });
    }
}

impl eframe::App for CodeCompareApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_responses();
        self.handle_shortcuts(ctx);

        if self.applied_theme != self.config.settings.theme {
            self.applied_theme = self.config.settings.theme;
            configure_style(ctx, self.applied_theme);
        }

        egui::TopBottomPanel::top("toolbar_panel").show(ctx, |ui| {
            let settings = &self.config.settings;
            let state = ToolbarState {
                has_result: self.result.is_some(),
                theme: settings.theme,
                strategy: settings.compare.strategy,
                threshold: settings.compare.similarity_threshold,
                inline_highlight: settings.inline_highlight,
                show_line_numbers: settings.show_line_numbers,
                ignore_line_endings: settings.compare.ignore_line_endings,
            };
            if let Some(action) = Toolbar::show(ui, state) {
                self.handle_toolbar(ctx, action);
            }
        });

        egui::TopBottomPanel::top("input_panel")
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("input_scroll")
                    .show(ui, |ui| self.show_inputs(ui));
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_results(ui);
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.config.save() {
            tracing::error!("Failed to save settings on exit: {}", e);
        }
    }
}
