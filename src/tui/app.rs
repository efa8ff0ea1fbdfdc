use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, List, ListItem, Paragraph};
use ratatui::Frame;
use ratatui_image::picker::Picker;
use ratatui_image::protocol::StatefulProtocol;
use ratatui_image::StatefulImage;

use crate::config::Config;
use crate::light::bands::{DisplayColor, VISIBLE_MAX_NM, VISIBLE_MIN_NM};
use crate::light::normalize::{representative_wavelength, Scale};
use crate::light::summary::sci;
use crate::scene::{Engine, Scene};
use crate::tui::event::is_quit;
use crate::tui::status::render_status_bar;
use crate::tui::theme::Theme;

/// Which screen is active. Each feeds a different engine entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Pick one of the named colors; uses its representative wavelength.
    Colors,
    /// Free wavelength slider over the visible range.
    Slider,
    /// Sea wave vs light wave at the slider wavelength.
    Waves,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Colors, Section::Slider, Section::Waves];

    pub fn title(self) -> &'static str {
        match self {
            Section::Colors => "Colores",
            Section::Slider => "Longitud de onda",
            Section::Waves => "Ondas",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Section::Colors => Section::Slider,
            Section::Slider => Section::Waves,
            Section::Waves => Section::Colors,
        }
    }
}

pub struct App {
    pub section: Section,
    pub selected_band: usize,
    pub slider_nm: u32,
    pub scale: Scale,
    pub should_quit: bool,
    pub picker: Option<Picker>,
    pub config: Config,
    engine: Engine,
    scene: Option<Scene>,
    scene_error: Option<String>,
    /// Image protocol for the current scene's PNG; dropped on every refresh.
    image_state: Option<StatefulProtocol>,
}

impl App {
    pub fn new(picker: Option<Picker>, config: Config) -> Self {
        let engine = Engine::from_config(&config);
        let selected_band = engine.band_index(&config.default_band).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "default band not found, using the first band");
            0
        });
        let slider_nm = engine
            .table()
            .get(selected_band)
            .map(representative_wavelength)
            .unwrap_or(VISIBLE_MIN_NM);
        let scale = if config.log_scale { Scale::Logarithmic } else { Scale::Linear };
        let mut app = Self {
            section: Section::Colors,
            selected_band,
            slider_nm,
            scale,
            should_quit: false,
            picker,
            config,
            engine,
            scene: None,
            scene_error: None,
            image_state: None,
        };
        app.refresh();
        app
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn scene_error(&self) -> Option<&str> {
        self.scene_error.as_deref()
    }

    /// Wavelength fed to the engine by the active section.
    pub fn current_wavelength(&self) -> u32 {
        match self.section {
            Section::Colors => self
                .engine
                .table()
                .get(self.selected_band)
                .map(representative_wavelength)
                .unwrap_or(self.slider_nm),
            Section::Slider | Section::Waves => self.slider_nm,
        }
    }

    /// Recompute the scene for the current selection.
    pub fn refresh(&mut self) {
        let wavelength = self.current_wavelength() as f64;
        let result = match self.section {
            Section::Colors | Section::Slider => {
                self.engine.properties_scene(wavelength, self.scale)
            }
            Section::Waves => self.engine.wave_scene(wavelength, self.scale),
        };
        self.image_state = None;
        match result {
            Ok(scene) => {
                self.scene = Some(scene);
                self.scene_error = None;
            }
            Err(e) => {
                tracing::warn!(wavelength, error = %e, "scene failed");
                self.scene = None;
                self.scene_error = Some(e.to_string());
            }
        }
    }

    /// Open the slider at `wavelength_nm`, clamped to the visible range.
    pub fn jump_to_wavelength(&mut self, wavelength_nm: f64) {
        let nm = wavelength_nm.round().clamp(VISIBLE_MIN_NM as f64, VISIBLE_MAX_NM as f64);
        // NaN survives clamp
        self.slider_nm = if nm.is_nan() { VISIBLE_MIN_NM } else { nm as u32 };
        self.section = Section::Slider;
        self.refresh();
    }

    /// Handle a key event. Returns true if the screen should be redrawn.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if is_quit(&key) {
            self.should_quit = true;
            return true;
        }

        let changed = match key.code {
            KeyCode::Tab => self.set_section(self.section.next()),
            KeyCode::Char('1') => self.set_section(Section::Colors),
            KeyCode::Char('2') => self.set_section(Section::Slider),
            KeyCode::Char('3') => self.set_section(Section::Waves),
            KeyCode::Char('l') | KeyCode::Char('L') => {
                self.scale = self.scale.toggled();
                tracing::info!(scale = ?self.scale, "scale toggled");
                true
            }
            KeyCode::Up if self.section == Section::Colors => self.select_band(-1),
            KeyCode::Down if self.section == Section::Colors => self.select_band(1),
            KeyCode::Left | KeyCode::Right if self.section != Section::Colors => {
                let mut step = self.config.slider_step as i64;
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    step *= 10;
                }
                if key.code == KeyCode::Left {
                    step = -step;
                }
                self.move_slider(step)
            }
            _ => false,
        };

        if changed {
            self.refresh();
        }
        changed
    }

    fn set_section(&mut self, section: Section) -> bool {
        if self.section == section {
            return false;
        }
        tracing::info!(section = section.title(), "section changed");
        self.section = section;
        true
    }

    fn select_band(&mut self, delta: i64) -> bool {
        let len = self.engine.table().len() as i64;
        if len == 0 {
            return false;
        }
        let next = (self.selected_band as i64 + delta).clamp(0, len - 1) as usize;
        let changed = next != self.selected_band;
        self.selected_band = next;
        changed
    }

    fn move_slider(&mut self, delta: i64) -> bool {
        let next = (self.slider_nm as i64 + delta)
            .clamp(VISIBLE_MIN_NM as i64, VISIBLE_MAX_NM as i64) as u32;
        let changed = next != self.slider_nm;
        self.slider_nm = next;
        changed
    }

    /// Render the full UI.
    pub fn render(&mut self, frame: &mut Frame) {
        let outer = Layout::vertical([
            Constraint::Length(1), // Status bar
            Constraint::Min(5),    // Main area
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

        render_status_bar(frame, outer[0], self.section.title(), self.scale);

        let main = Layout::horizontal([
            Constraint::Percentage(30),
            Constraint::Percentage(70),
        ])
        .split(outer[1]);

        self.render_sidebar(frame, main[0]);
        self.render_content(frame, main[1]);

        frame.render_widget(
            Paragraph::new(Span::styled(
                " Tab/1-3 sección  ↑↓ color  ←→ longitud (Shift ×10)  l escala  q salir",
                Theme::hint(),
            )),
            outer[2],
        );
    }

    fn render_sidebar(&self, frame: &mut Frame, area: Rect) {
        let sidebar = Layout::vertical([
            Constraint::Length(Section::ALL.len() as u16 + 2),
            Constraint::Min(4),
            Constraint::Length(self.engine.constants().entries().len() as u16 + 2),
        ])
        .split(area);

        let sections: Vec<ListItem> = Section::ALL
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let style =
                    if *s == self.section { Theme::selected() } else { Theme::sidebar_item() };
                ListItem::new(Span::styled(format!(" {} {}", i + 1, s.title()), style))
            })
            .collect();
        frame.render_widget(
            List::new(sections).block(Self::block(" Secciones ", false)),
            sidebar[0],
        );

        match self.section {
            Section::Colors => self.render_band_list(frame, sidebar[1]),
            Section::Slider | Section::Waves => self.render_slider(frame, sidebar[1]),
        }

        let constants: Vec<ListItem> = self
            .engine
            .constants()
            .entries()
            .iter()
            .map(|c| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!(" {:<3}", c.name), Theme::label()),
                    Span::styled(
                        format!("{} {}", sci(c.value), c.unit_display),
                        Theme::value(),
                    ),
                ]))
            })
            .collect();
        frame.render_widget(
            List::new(constants).block(Self::block(" Constantes ", false)),
            sidebar[2],
        );
    }

    fn render_band_list(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .engine
            .table()
            .bands()
            .iter()
            .enumerate()
            .map(|(i, band)| {
                let marker = if i == self.selected_band { "▶" } else { " " };
                let selected = i == self.selected_band;
                let name_style = if selected { Theme::selected() } else { Theme::sidebar_item() };
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{} ", marker)),
                    Span::styled("■ ", Theme::band(band.display_color)),
                    Span::styled(format!("{:<9}", band.name), name_style),
                    Span::styled(format!(" {}-{} nm", band.min_nm, band.max_nm), Theme::hint()),
                ]))
            })
            .collect();
        frame.render_widget(List::new(items).block(Self::block(" Color ", true)), area);
    }

    fn render_slider(&self, frame: &mut Frame, area: Rect) {
        let block = Self::block(" Longitud de onda ", true);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let span = (VISIBLE_MAX_NM - VISIBLE_MIN_NM) as f64;
        let ratio = (self.slider_nm.saturating_sub(VISIBLE_MIN_NM) as f64 / span).clamp(0.0, 1.0);
        let color = self.scene.as_ref().map(|s| s.band_color).unwrap_or(DisplayColor::GRAY);
        let gauge = Gauge::default()
            .gauge_style(Theme::band(color))
            .ratio(ratio)
            .label(format!("{} nm", self.slider_nm));
        let rows =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
                .split(inner);
        frame.render_widget(gauge, rows[0]);
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("{} nm … {} nm", VISIBLE_MIN_NM, VISIBLE_MAX_NM),
                Theme::hint(),
            )),
            rows[1],
        );
    }

    fn render_content(&mut self, frame: &mut Frame, area: Rect) {
        let title = match &self.scene {
            Some(scene) => format!(" {} ", scene.title),
            None => " Luz ".to_string(),
        };
        let block = Self::block(&title, true);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let plot_h = self.config.plot_height.min(inner.height.saturating_sub(6));
        let rows = Layout::vertical([Constraint::Length(plot_h), Constraint::Min(1)]).split(inner);

        if let Some(err) = &self.scene_error {
            frame.render_widget(Paragraph::new(Span::styled(err.clone(), Theme::error())), rows[1]);
            return;
        }

        self.render_plot_image(frame, rows[0]);
        self.render_summary(frame, rows[1]);
    }

    /// Render the scene's PNG into the given area using ratatui-image.
    fn render_plot_image(&mut self, frame: &mut Frame, area: Rect) {
        let Some(scene) = &self.scene else { return };

        if self.image_state.is_none() {
            let Some(picker) = &self.picker else {
                // No picker: list the bar values instead.
                let lines: Vec<Line> = scene
                    .series
                    .iter()
                    .map(|(label, value)| {
                        Line::from(vec![
                            Span::styled(format!(" {:<22}", label), Theme::label()),
                            Span::styled(
                                format_bar_value(value, scene.series.scale),
                                Theme::value(),
                            ),
                        ])
                    })
                    .chain(std::iter::once(Line::from(Span::styled(
                        " [la gráfica requiere Kitty/iTerm2/Sixel]",
                        Theme::hint(),
                    ))))
                    .collect();
                frame.render_widget(Paragraph::new(lines), area);
                return;
            };
            match image::load_from_memory(&scene.plot.png_bytes) {
                Ok(dyn_image) => self.image_state = Some(picker.new_resize_protocol(dyn_image)),
                Err(e) => {
                    let msg = format!("[plot decode error: {}]", e);
                    frame.render_widget(Paragraph::new(Span::styled(msg, Theme::error())), area);
                    return;
                }
            }
        }

        if let Some(protocol) = self.image_state.as_mut() {
            frame.render_stateful_widget(StatefulImage::default(), area, protocol);
        }
    }

    fn render_summary(&self, frame: &mut Frame, area: Rect) {
        let Some(scene) = &self.scene else { return };
        let mut lines: Vec<Line> = scene
            .summary
            .rows()
            .iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!(" {:<18}", format!("{}:", label)), Theme::label()),
                    Span::styled(value.to_string(), Theme::value()),
                ])
            })
            .collect();
        lines.push(Line::from(vec![
            Span::styled(format!(" {:<18}", "Muestra:"), Theme::label()),
            Span::styled("████", Theme::band(scene.band_color)),
            Span::styled(format!(" {}", scene.summary.display_color), Theme::hint()),
        ]));
        if let Some(k) = scene.light_oscillation {
            lines.push(Line::from(vec![
                Span::styled(format!(" {:<18}", "Oscilación:"), Theme::label()),
                Span::styled(
                    format!("{:.2} (f / 1e14), amplitud de la luz solo visual", k),
                    Theme::hint(),
                ),
            ]));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn block(title: &str, focused: bool) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(if focused { Theme::border_focused() } else { Theme::border() })
            .title(Span::styled(title.to_string(), Theme::sidebar_title()))
    }
}

fn format_bar_value(value: f64, scale: Scale) -> String {
    match scale {
        Scale::Linear => format!("{:.2}", value),
        Scale::Logarithmic => sci(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(None, Config::default())
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_starts_on_default_band() {
        let app = app();
        assert_eq!(app.section, Section::Colors);
        assert_eq!(app.selected_band, 1);
        assert_eq!(app.current_wavelength(), 472);
        assert_eq!(app.scene().unwrap().summary.band, "Azul");
    }

    #[test]
    fn test_unknown_default_band_falls_back_to_first() {
        let config = Config { default_band: "Magenta".to_string(), ..Config::default() };
        let app = App::new(None, config);
        assert_eq!(app.selected_band, 0);
        assert_eq!(app.current_wavelength(), 415);
    }

    #[test]
    fn test_codata_sidebar_constants() {
        let config = Config { codata_constants: true, ..Config::default() };
        let app = App::new(None, config);
        assert_eq!(app.engine.constants().entries()[1].value, 299_792_458.0);
    }

    #[test]
    fn test_band_selection_clamps() {
        let mut app = app();
        assert!(press(&mut app, KeyCode::Up));
        assert!(!press(&mut app, KeyCode::Up));
        for _ in 0..10 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.selected_band, 5);
        assert_eq!(app.scene().unwrap().summary.band, "Rojo");
    }

    #[test]
    fn test_slider_moves_and_clamps() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.section, Section::Slider);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.slider_nm, 473);
        app.handle_key(KeyEvent::new(KeyCode::Left, KeyModifiers::SHIFT));
        assert_eq!(app.slider_nm, 463);
        for _ in 0..100 {
            app.handle_key(KeyEvent::new(KeyCode::Right, KeyModifiers::SHIFT));
        }
        assert_eq!(app.slider_nm, VISIBLE_MAX_NM);
        assert_eq!(app.scene().unwrap().summary.band, "Rojo");
    }

    #[test]
    fn test_arrows_ignored_in_wrong_section() {
        let mut app = app();
        assert!(!press(&mut app, KeyCode::Right));
        press(&mut app, KeyCode::Char('2'));
        assert!(!press(&mut app, KeyCode::Up));
    }

    #[test]
    fn test_scale_toggle_refreshes_series() {
        let mut app = app();
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.scale, Scale::Logarithmic);
        assert_eq!(app.scene().unwrap().series.scale, Scale::Logarithmic);
    }

    #[test]
    fn test_tab_cycles_sections() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.section, Section::Waves);
        assert!(app.scene().unwrap().light_oscillation.is_some());
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.section, Section::Colors);
    }

    #[test]
    fn test_jump_to_wavelength() {
        let mut app = app();
        app.jump_to_wavelength(530.4);
        assert_eq!(app.section, Section::Slider);
        assert_eq!(app.slider_nm, 530);
        assert_eq!(app.scene().unwrap().summary.band, "Verde");
        app.jump_to_wavelength(1200.0);
        assert_eq!(app.slider_nm, VISIBLE_MAX_NM);
        app.jump_to_wavelength(f64::NAN);
        assert_eq!(app.slider_nm, VISIBLE_MIN_NM);
        assert!(app.scene_error().is_none());
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_format_bar_value() {
        assert_eq!(format_bar_value(4.7, Scale::Linear), "4.70");
        assert_eq!(format_bar_value(6.38e14, Scale::Logarithmic), "6.38e+14");
    }
}
