use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod catppuccin;
pub mod nord;
pub mod palette;

pub use palette::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    #[default]
    Nord,
    Catppuccin,
}

impl PaletteType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteType::Nord => "Nord",
            PaletteType::Catppuccin => "Catppuccin (Mocha)",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header_logo: Style,
    pub header: Style,

    pub status_ready: Style,
    pub status_info: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer: Style,

    pub timestamp: Style,
    pub field_name: Style,
    pub field_value: Style,
    pub list_item: Style,
    pub dimmed: Style,
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::Nord => Self::from_palette(&nord::NORD),
            PaletteType::Catppuccin => Self::from_palette(&catppuccin::CATPPUCCIN_MOCHA),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.blue),

            header_logo: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header: Style::default().bg(p.base).fg(p.text),

            status_ready: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_info: Style::default()
                .bg(p.yellow)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            footer_segment_key: Style::default()
                .bg(p.surface0)
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.base).fg(p.text),
            footer: Style::default().bg(p.crust).fg(p.subtext0),

            timestamp: Style::default().fg(p.subtext0).add_modifier(Modifier::DIM),
            field_name: Style::default().fg(p.red),
            field_value: Style::default().fg(p.green),
            list_item: Style::default().fg(p.text),
            dimmed: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ() {
        assert_eq!(Theme::default(), Theme::from_palette_type(PaletteType::Nord));
        assert_ne!(
            Theme::from_palette_type(PaletteType::Nord),
            Theme::from_palette_type(PaletteType::Catppuccin)
        );
        assert_eq!(PaletteType::Catppuccin.label(), "Catppuccin (Mocha)");
    }
}
