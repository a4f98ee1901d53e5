use crate::diff::inline::{CharChange, side_fragments};
use crate::diff::{CompareResult, DiffStats, RenderRow, Side, StyleClass};
use crate::style::{RenderConfig, Theme, row_palette};
use egui::{Color32, FontId, RichText, TextFormat, Ui, Vec2, text::LayoutJob};

const CELL_MARGIN: f32 = 4.0;

/// Added / removed / modified counters
pub fn render_stats(ui: &mut Ui, stats: &DiffStats, theme: Theme) {
    ui.horizontal(|ui| {
        for (style, text) in [
            (StyleClass::Added, format!("+{} added", stats.added)),
            (StyleClass::Removed, format!("-{} removed", stats.removed)),
            (StyleClass::Modified, format!("~{} modified", stats.modified)),
        ] {
            let color = row_palette(style, theme)
                .map(|p| p.text)
                .unwrap_or_else(|| ui.visuals().text_color());
            ui.label(RichText::new(text).color(color).strong());
        }
        if stats.is_unchanged() {
            ui.label(RichText::new("No differences").weak());
        }
    });
}

/// Color legend for the row styles
pub fn render_legend(ui: &mut Ui, theme: Theme) {
    ui.horizontal(|ui| {
        for (style, label) in [
            (StyleClass::Added, "Added"),
            (StyleClass::Removed, "Removed"),
            (StyleClass::Modified, "Modified"),
        ] {
            if let Some(palette) = row_palette(style, theme) {
                egui::Frame::default()
                    .fill(palette.line_bg)
                    .inner_margin(CELL_MARGIN)
                    .show(ui, |ui| {
                        ui.label(RichText::new(label).small().color(palette.text));
                    });
            }
        }
    });
}

/// Two aligned columns, one grid row per row pair.
/// `inline_changes` holds the precomputed character diff of each modified row.
pub fn render_diff_view(
    ui: &mut Ui,
    result: &CompareResult,
    inline_changes: &[Option<Vec<CharChange>>],
    config: &RenderConfig,
) {
    ui.style_mut().spacing.item_spacing.y = 0.0;

    // Leave room for the scrollbar so the columns don't jitter
    let col_w = (ui.available_width() / 2.0 - 12.0).max(100.0);

    egui::Grid::new("diff_columns")
        .num_columns(2)
        .min_col_width(0.0)
        .spacing(Vec2::new(4.0, 0.0))
        .show(ui, |ui| {
            let rows = result.left_rows.iter().zip(&result.right_rows);
            for (index, (left, right)) in rows.enumerate() {
                let changes = config
                    .inline_highlight
                    .then(|| inline_changes.get(index))
                    .flatten()
                    .and_then(|c| c.as_deref());

                let left_fragments = changes.map(|c| side_fragments(c, Side::Original));
                let right_fragments = changes.map(|c| side_fragments(c, Side::Modified));

                render_cell(ui, left, left_fragments.as_deref(), config, col_w);
                render_cell(ui, right, right_fragments.as_deref(), config, col_w);
                ui.end_row();
            }
        });
}

/// One cell: optional gutter, then the line, with edited fragments highlighted
fn render_cell(
    ui: &mut Ui,
    row: &RenderRow,
    fragments: Option<&[(&str, bool)]>,
    config: &RenderConfig,
    width: f32,
) {
    let font_id = FontId::monospace(config.font_size);
    let line_height = Some(config.font_size * 1.6);
    let palette = row_palette(row.style, config.theme);
    let base_text_color = ui.visuals().text_color();

    egui::Frame::default()
        .fill(palette.map_or(Color32::TRANSPARENT, |p| p.line_bg))
        .inner_margin(CELL_MARGIN)
        .show(ui, |ui| {
            ui.set_min_width(width - 2.0 * CELL_MARGIN);

            let plain = TextFormat {
                font_id: font_id.clone(),
                color: match row.style {
                    StyleClass::Equal => base_text_color,
                    _ => palette.map_or(base_text_color, |p| p.text),
                },
                line_height,
                ..Default::default()
            };

            let mut job = LayoutJob::default();

            if config.show_line_numbers {
                let gutter = match row.line_number {
                    Some(n) => format!("{:>4}  ", n),
                    None => " ".repeat(6),
                };
                job.append(
                    &gutter,
                    0.0,
                    TextFormat {
                        color: base_text_color.gamma_multiply(0.4),
                        ..plain.clone()
                    },
                );
            }

            match fragments {
                Some(fragments) => {
                    for &(text, edited) in fragments {
                        let format = match (edited, palette) {
                            (true, Some(p)) => TextFormat {
                                background: p.word_bg,
                                ..plain.clone()
                            },
                            _ => plain.clone(),
                        };
                        job.append(text, 0.0, format);
                    }
                }
                None => job.append(&row.content, 0.0, plain.clone()),
            }

            // Keep blank lines and placeholders one line tall
            if row.content.is_empty() {
                job.append(" ", 0.0, plain);
            }

            job.wrap.max_width = width - 2.0 * CELL_MARGIN;
            ui.add(egui::Label::new(job).wrap());
        });
}
