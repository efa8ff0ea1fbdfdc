use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use ratatui_image::picker::Picker;

use luz::config::{load_config, Config};
use luz::light::normalize::Scale;
use luz::scene::Engine;
use luz::tui::app::App;
use luz::tui::event::{poll_event, AppEvent};

#[derive(Parser, Debug)]
#[command(name = "luz", version, about = "Propiedades físicas de la luz visible")]
struct Args {
    /// Color band to show (Violeta, Azul, Verde, Amarillo, Naranja, Rojo)
    #[arg(long, conflicts_with = "wavelength")]
    band: Option<String>,

    /// Wavelength in nanometers
    #[arg(long)]
    wavelength: Option<f64>,

    /// Use the logarithmic scale for the bar chart
    #[arg(long)]
    log_scale: bool,

    /// Print the summary and exit instead of starting the TUI
    #[arg(long)]
    headless: bool,

    /// Print the headless summary as JSON
    #[arg(long, requires = "headless")]
    json: bool,

    /// Write the bar chart to this PNG file (headless mode)
    #[arg(long, requires = "headless")]
    png: Option<PathBuf>,

    /// Use CODATA values for h and c
    #[arg(long)]
    codata: bool,

    /// Config file (defaults to ~/.config/luz/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        luz::logging::init_file_logging(path)?;
    }

    let mut config = load_config(args.config.as_deref());
    if args.log_scale {
        config.log_scale = true;
    }
    if args.codata {
        config.codata_constants = true;
    }
    if let Some(band) = &args.band {
        config.default_band = band.clone();
    }

    if args.headless {
        return run_headless(&args, &config);
    }

    // Query terminal for image protocol support BEFORE entering alternate screen
    let picker = Picker::from_query_stdio().ok();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, picker, config, args.wavelength);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_headless(args: &Args, config: &Config) -> anyhow::Result<()> {
    let engine = Engine::from_config(config);
    let wavelength = engine.resolve_wavelength(args.wavelength, &config.default_band)?;
    let scale = if config.log_scale { Scale::Logarithmic } else { Scale::Linear };
    let scene = engine.properties_scene(wavelength, scale)?;

    if let Some(path) = &args.png {
        std::fs::write(path, &scene.plot.png_bytes)
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote bar chart");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&scene.to_json())?);
    } else {
        println!("{}", scene.title);
        print!("{}", scene.summary);
    }
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    picker: Option<Picker>,
    config: Config,
    wavelength: Option<f64>,
) -> anyhow::Result<()> {
    let mut app = App::new(picker, config);
    if let Some(w) = wavelength {
        app.jump_to_wavelength(w);
    }
    tracing::info!("explorer started");

    loop {
        terminal.draw(|frame| app.render(frame))?;

        if let Some(event) = poll_event(Duration::from_millis(50)) {
            match event {
                AppEvent::Key(key) => {
                    app.handle_key(key);
                }
                AppEvent::Resize(_, _) => {
                    // Terminal will auto-redraw
                }
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
