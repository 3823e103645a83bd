use ratatui::style::Color;

pub struct Palette {
    pub base: Color,
    pub crust: Color,
    pub text: Color,
    pub subtext0: Color,
    pub surface0: Color,
    pub surface2: Color,
    pub overlay0: Color,
    pub blue: Color,
    pub green: Color,
    pub yellow: Color,
    pub red: Color,
}
