use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::light::normalize::Scale;
use crate::tui::theme::Theme;

pub fn render_status_bar(frame: &mut Frame, area: Rect, section: &str, scale: Scale) {
    let version = env!("CARGO_PKG_VERSION");
    let left_text = format!(" Luz v{} | {}", version, section);
    let right_text = format!("escala {} ", scale.label());

    let left = Span::styled(left_text.clone(), Theme::status_bar());
    let right = Span::styled(right_text.clone(), Theme::status_bar());

    let width = area.width as usize;
    let padding = width.saturating_sub(left_text.chars().count() + right_text.chars().count());

    let line = Line::from(vec![
        left,
        Span::styled(" ".repeat(padding), Theme::status_bar()),
        right,
    ]);

    frame.render_widget(line, area);
}
