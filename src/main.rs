//! # Future Foundry CLI Entry Point
//!
//! Starts the Future Foundry terminal UI.
//!
//! ## Usage
//!
//! ```bash
//! # Start on the home page with the slideshow running
//! foundry
//!
//! # Open the career predictor directly
//! foundry --page career-predictor
//!
//! # Slower slideshow, or none at all
//! foundry --interval-ms 6000
//! foundry --no-auto-advance
//!
//! # Print the slide ring and page list and exit
//! foundry --debug
//! ```
//!
//! ## Startup
//!
//! 1. **Logging**: records go to `~/.local/share/foundry/foundry.log`
//! 2. **Config**: `~/.config/foundry/config.json`, overridden by CLI flags
//! 3. **Carousel**: built from the configured slides, auto-advance started
//! 4. **UI**: event loop until the user quits
//!
//! Key bindings are documented in [`foundry::ui::input`].

use foundry::carousel::CarouselController;
use foundry::config::{Config, APP_NAME};
use foundry::content::{Page, Slide};
use foundry::logging;
use foundry::predictor::{MockCareerModel, Predictor};
use foundry::ui::{self, input, theme::Theme, App};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// How long to wait for input before redrawing.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(event::read().context("Failed to read terminal event")?))
        } else {
            Ok(None)
        }
    }
}

/// Future Foundry - career guidance in your terminal
#[derive(Parser, Debug)]
#[command(name = APP_NAME)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Career guidance hub with a self-advancing showcase", long_about = None)]
struct Args {
    /// Page to open on startup
    #[arg(short, long, value_enum)]
    page: Option<Page>,

    /// Milliseconds between automatic slide rotations
    #[arg(short, long, value_name = "MS")]
    interval_ms: Option<u64>,

    /// Start with the slideshow under manual control
    #[arg(long)]
    no_auto_advance: bool,

    /// Color theme name (e.g. "Nord", "Dracula")
    #[arg(short, long, value_name = "NAME")]
    theme: Option<String>,

    /// Directory career reports are saved into
    #[arg(short, long, value_name = "DIR")]
    report_dir: Option<PathBuf>,

    /// Print the slide ring and page list and exit
    #[arg(long)]
    debug: bool,
}

/// The config file as stored on disk, without command-line overrides.
///
/// Only settings changed from inside the UI are written back, so one-off
/// flags never end up in the file.
struct SavedConfig {
    config: Config,
    path: Option<PathBuf>,
}

impl SavedConfig {
    fn load() -> Self {
        let path = match Config::config_path() {
            Ok(path) => Some(path),
            Err(e) => {
                log::warn!("Settings will not be saved: {:#}", e);
                None
            }
        };
        Self {
            config: Config::load(),
            path,
        }
    }

    fn save_theme(&mut self, name: &str) -> Result<()> {
        let path = self
            .path
            .as_deref()
            .context("Could not determine config directory")?;
        self.config.theme = name.to_string();
        self.config.save_to(path)
    }

    fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Args {
    /// Apply command-line overrides on top of the loaded config.
    fn apply(&self, config: &mut Config) {
        if let Some(page) = self.page {
            config.start_page = page;
        }
        if let Some(interval_ms) = self.interval_ms {
            config.carousel.interval_ms = interval_ms;
        }
        if self.no_auto_advance {
            config.carousel.auto_advance = false;
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        if let Some(dir) = &self.report_dir {
            config.predictor.report_dir = Some(dir.clone());
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_application(args).await;

    let _ = panic::take_hook();

    result
}

async fn run_application(args: Args) -> Result<()> {
    logging::init();

    let mut saved = SavedConfig::load();
    let mut config = saved.config.clone();
    args.apply(&mut config);

    if args.debug {
        print_debug_info(&config, saved.path());
        return Ok(());
    }

    let theme = resolve_theme(&config.theme)?;
    let mut app = build_app(&config, theme)?;
    log::info!(
        "Starting on {} ({} slides, auto-advance: {})",
        app.page.label(),
        app.carousel.ring().len(),
        app.carousel.is_auto_advancing()
    );

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, &mut event_reader, &mut saved);

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    run_result?;
    cleanup_result?;

    log::info!("Exiting");
    Ok(())
}

fn resolve_theme(name: &str) -> Result<Theme> {
    match Theme::by_name(name) {
        Some(theme) => Ok(theme.clone()),
        None => {
            let known: Vec<&str> = Theme::all().iter().map(|t| t.name).collect();
            bail!("Unknown theme '{}'. Available: {}", name, known.join(", "))
        }
    }
}

/// Assemble the application state. Needs a running tokio runtime when
/// auto-advance is enabled.
fn build_app(config: &Config, theme: Theme) -> Result<App> {
    let slides = config.carousel.slides();
    let carousel = if config.carousel.auto_advance {
        CarouselController::with_auto_advance(slides, config.carousel.interval())
            .context("Failed to start carousel")?
    } else {
        CarouselController::new(slides)
    };

    let predictor = Predictor::new(Arc::new(MockCareerModel), config.predictor.delay());

    let mut app = App::new(carousel, predictor, theme);
    app.set_page(config.start_page);
    app.report_dir = config.predictor.report_dir();
    Ok(app)
}

fn print_debug_info(config: &Config, config_path: Option<&Path>) {
    let carousel: CarouselController<Slide> = CarouselController::new(config.carousel.slides());
    let ring = carousel.ring();

    println!("=== Carousel ===");
    println!(
        "Slides: {}  start_item: {}  interval: {} ms  auto-advance: {}",
        ring.len(),
        ring.start_item(),
        config.carousel.interval_ms,
        config.carousel.auto_advance
    );
    for (i, item) in ring.iter().enumerate() {
        println!("  [{}] {:<6} {}", i, format!("{:?}", item.role), item.slide.title);
    }

    println!("\n=== Pages ===");
    for (i, page) in Page::ALL.iter().enumerate() {
        let marker = if *page == config.start_page { "*" } else { " " };
        println!(" {}{} {} {}", marker, i + 1, page.icon(), page.label());
    }

    println!("\nTheme: {}", config.theme);
    println!("Report dir: {}", config.predictor.report_dir().display());
    match config_path {
        Some(path) => println!("Config: {}", path.display()),
        None => println!("Config: unavailable"),
    }
    match logging::log_path() {
        Ok(path) => println!("Log: {}", path.display()),
        Err(e) => println!("Log: unavailable ({:#})", e),
    }
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

fn run_app<B>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
    saved: &mut SavedConfig,
) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    loop {
        app.tick();

        terminal
            .draw(|f| ui::render(f, app))
            .context("Failed to draw terminal UI")?;

        if let Some(event) = event_reader.read_event(POLL_TIMEOUT)? {
            input::handle_event(app, &event);
        }

        if app.take_theme_change() {
            if let Err(e) = saved.save_theme(app.theme.name) {
                app.error(format!("Could not save theme: {:#}", e));
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
