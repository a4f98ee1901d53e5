use crate::diff::PairingStrategy;
use crate::style::Theme;
use egui::{Align, Layout, Ui};

pub enum ToolbarAction {
    Compare,
    Swap,
    Clear,
    CopyResult,
    SaveReport,
    ToggleTheme,
    ToggleInlineHighlight,
    ToggleLineNumbers,
    ToggleLineEndings,
    SetStrategy(PairingStrategy),
    SetThreshold(f64),
}

pub struct Toolbar;

pub struct ToolbarState {
    pub has_result: bool,
    pub theme: Theme,
    pub strategy: PairingStrategy,
    pub threshold: f64,
    pub inline_highlight: bool,
    pub show_line_numbers: bool,
    pub ignore_line_endings: bool,
}

impl Toolbar {
    pub fn show(ui: &mut Ui, state: ToolbarState) -> Option<ToolbarAction> {
        let ToolbarState {
            has_result,
            theme,
            mut strategy,
            mut threshold,
            mut inline_highlight,
            mut show_line_numbers,
            mut ignore_line_endings,
        } = state;

        let mut action = None;

        ui.horizontal(|ui| {
            ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                if ui
                    .button("▶ Compare")
                    .on_hover_text("Compare (Ctrl+Enter)")
                    .clicked()
                {
                    action = Some(ToolbarAction::Compare);
                }
                if ui.button("⇄ Swap").on_hover_text("Swap inputs").clicked() {
                    action = Some(ToolbarAction::Swap);
                }
                if ui
                    .button("🗑 Clear")
                    .on_hover_text("Clear all (Ctrl+Delete)")
                    .clicked()
                {
                    action = Some(ToolbarAction::Clear);
                }

                ui.separator();

                if ui
                    .add_enabled(has_result, egui::Button::new("📋"))
                    .on_hover_text("Copy result as text")
                    .on_disabled_hover_text("Nothing compared yet")
                    .clicked()
                {
                    action = Some(ToolbarAction::CopyResult);
                }
                if ui
                    .add_enabled(has_result, egui::Button::new("💾"))
                    .on_hover_text("Save report")
                    .on_disabled_hover_text("Nothing compared yet")
                    .clicked()
                {
                    action = Some(ToolbarAction::SaveReport);
                }

                ui.separator();

                egui::ComboBox::from_id_salt("pairing_strategy")
                    .selected_text(strategy.label())
                    .show_ui(ui, |ui| {
                        for option in [PairingStrategy::Adjacent, PairingStrategy::Grouped] {
                            if ui
                                .selectable_value(&mut strategy, option, option.label())
                                .clicked()
                            {
                                action = Some(ToolbarAction::SetStrategy(option));
                            }
                        }
                    });

                // Grouped pairing ignores similarity
                let slider = egui::Slider::new(&mut threshold, 0.0..=1.0)
                    .text("similarity")
                    .fixed_decimals(2);
                if ui
                    .add_enabled(strategy == PairingStrategy::Adjacent, slider)
                    .on_hover_text("Minimum similarity for a changed line to count as modified")
                    .changed()
                {
                    action = Some(ToolbarAction::SetThreshold(threshold));
                }

                if ui
                    .checkbox(&mut ignore_line_endings, "Ignore CRLF")
                    .on_hover_text("Treat CRLF and LF line endings as equal")
                    .changed()
                {
                    action = Some(ToolbarAction::ToggleLineEndings);
                }
            });

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let theme_icon = match theme {
                    Theme::Light => "🌙",
                    Theme::Dark => "☀",
                };
                if ui.button(theme_icon).on_hover_text("Toggle theme").clicked() {
                    action = Some(ToolbarAction::ToggleTheme);
                }
                if ui.checkbox(&mut show_line_numbers, "Line numbers").changed() {
                    action = Some(ToolbarAction::ToggleLineNumbers);
                }
                if ui.checkbox(&mut inline_highlight, "Inline").changed() {
                    action = Some(ToolbarAction::ToggleInlineHighlight);
                }
            });
        });

        action
    }
}
