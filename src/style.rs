use crate::diff::StyleClass;
use egui::{Color32, Context, Stroke, Style, Visuals};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Immutable drawing options handed to the result view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub theme: Theme,
    pub font_size: f32,
    pub inline_highlight: bool,
    pub show_line_numbers: bool,
}

/// Colors for one kind of row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowPalette {
    pub line_bg: Color32,
    pub word_bg: Color32,
    pub text: Color32,
}

pub fn configure_style(ctx: &Context, theme: Theme) {
    let mut style = Style::default();

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.window_margin = egui::Margin::same(12);

    ctx.set_style(style);

    let mut visuals = match theme {
        Theme::Light => Visuals::light(),
        Theme::Dark => Visuals::dark(),
    };
    visuals.window_shadow = egui::epaint::Shadow::NONE;
    visuals.popup_shadow = egui::epaint::Shadow::NONE;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(0.0, Color32::TRANSPARENT);

    if theme == Theme::Light {
        visuals.widgets.hovered.bg_fill = Color32::from_gray(240);
        visuals.widgets.active.bg_fill = Color32::from_gray(230);
        visuals.selection.bg_fill = Color32::from_rgb(200, 220, 255);
        visuals.selection.stroke = Stroke::new(1.0, Color32::from_rgb(100, 100, 100));
    }

    ctx.set_visuals(visuals);
}

/// Background and text colors for a row style, `None` for plain rows
pub fn row_palette(style: StyleClass, theme: Theme) -> Option<RowPalette> {
    let palette = match (style, theme) {
        (StyleClass::Equal, _) => return None,
        (StyleClass::Removed, Theme::Light) => RowPalette {
            line_bg: Color32::from_rgb(255, 230, 230),
            word_bg: Color32::from_rgb(255, 170, 170),
            text: Color32::from_rgb(150, 0, 0),
        },
        (StyleClass::Removed, Theme::Dark) => RowPalette {
            line_bg: Color32::from_rgb(70, 30, 30),
            word_bg: Color32::from_rgb(130, 45, 45),
            text: Color32::from_rgb(255, 170, 170),
        },
        (StyleClass::Added, Theme::Light) => RowPalette {
            line_bg: Color32::from_rgb(230, 255, 230),
            word_bg: Color32::from_rgb(170, 255, 170),
            text: Color32::from_rgb(0, 100, 0),
        },
        (StyleClass::Added, Theme::Dark) => RowPalette {
            line_bg: Color32::from_rgb(25, 60, 30),
            word_bg: Color32::from_rgb(40, 110, 50),
            text: Color32::from_rgb(170, 255, 170),
        },
        (StyleClass::Modified, Theme::Light) => RowPalette {
            line_bg: Color32::from_rgb(255, 248, 215),
            word_bg: Color32::from_rgb(255, 220, 130),
            text: Color32::from_rgb(120, 80, 0),
        },
        (StyleClass::Modified, Theme::Dark) => RowPalette {
            line_bg: Color32::from_rgb(65, 55, 20),
            word_bg: Color32::from_rgb(120, 95, 30),
            text: Color32::from_rgb(255, 220, 130),
        },
        (StyleClass::AddedPlaceholder | StyleClass::RemovedPlaceholder, Theme::Light) => {
            RowPalette {
                line_bg: Color32::from_gray(245),
                word_bg: Color32::TRANSPARENT,
                text: Color32::from_gray(160),
            }
        }
        (StyleClass::AddedPlaceholder | StyleClass::RemovedPlaceholder, Theme::Dark) => {
            RowPalette {
                line_bg: Color32::from_gray(35),
                word_bg: Color32::TRANSPARENT,
                text: Color32::from_gray(90),
            }
        }
    };
    Some(palette)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_rows_are_unstyled() {
        assert!(row_palette(StyleClass::Equal, Theme::Light).is_none());
        assert!(row_palette(StyleClass::Equal, Theme::Dark).is_none());
    }

    #[test]
    fn change_styles_are_distinct() {
        for theme in [Theme::Light, Theme::Dark] {
            let removed = row_palette(StyleClass::Removed, theme).unwrap();
            let added = row_palette(StyleClass::Added, theme).unwrap();
            let modified = row_palette(StyleClass::Modified, theme).unwrap();
            assert_ne!(removed.line_bg, added.line_bg);
            assert_ne!(added.line_bg, modified.line_bg);
            assert_ne!(removed.line_bg, modified.line_bg);
        }
    }

    #[test]
    fn theme_toggles_back_and_forth() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }
}
