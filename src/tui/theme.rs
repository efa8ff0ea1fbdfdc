use ratatui::style::{Color, Modifier, Style};

use crate::light::bands::DisplayColor;

pub struct Theme;

impl Theme {
    pub fn status_bar() -> Style {
        Style::default()
            .fg(Color::Reset)
            .bg(Color::DarkGray)
    }

    pub fn label() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn value() -> Style {
        Style::default()
    }

    pub fn error() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn sidebar_title() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn sidebar_item() -> Style {
        Style::default()
    }

    pub fn selected() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn hint() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    /// Swatch in the band's own color.
    pub fn band(color: DisplayColor) -> Style {
        Style::default()
            .fg(Color::Rgb(color.r, color.g, color.b))
            .add_modifier(Modifier::BOLD)
    }
}
