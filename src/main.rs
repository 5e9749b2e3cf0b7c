//! casenav: browse a case study's sections and subsections in the terminal.
#![allow(clippy::multiple_crate_versions)]

use casenav::app_state::{AppState, View};
use casenav::config::Config;
use casenav::modal::Presentation;
use casenav::{outline, ui};
use clap::Parser;
use ratatui::crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Redraw interval while the opening animation is running.
const FRAME: Duration = Duration::from_millis(16);
/// Longest wait for input when nothing is animating.
const IDLE: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(name = "casenav")]
#[command(about = "Section and subsection navigation for case studies", long_about = None)]
struct Args {
    /// Markdown outline whose ## and ### headings define sections and subsections
    #[arg(long, value_name = "PATH")]
    outline: Option<PathBuf>,

    /// Configuration file (defaults to ./casenav.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Full-page carousel over sections only
    #[arg(long)]
    carousel: bool,

    /// Menu entries visible at once
    #[arg(long, value_name = "N")]
    visible: Option<usize>,

    /// Print the navigation index as JSON and exit
    #[arg(long)]
    dump_index: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let mut cfg = args
        .config
        .as_deref()
        .map_or_else(Config::load, Config::load_from);
    init_tracing(cfg.log_file.as_deref());

    // Override config with command line args
    if let Some(visible) = args.visible {
        cfg.visible_menu_items = visible;
    }

    let mut index = cfg.index();
    if let Some(path) = &args.outline {
        let parsed = outline::load_outline(path).map_err(io::Error::other)?;
        if let Some(title) = parsed.title {
            cfg.title = title;
        }
        index = parsed.index;
    }

    if args.dump_index {
        let json = serde_json::to_string_pretty(&index).map_err(io::Error::other)?;
        println!("{json}");
        return Ok(());
    }

    if cfg.projects.is_empty() {
        eprintln!("No projects configured");
        return Ok(());
    }

    let presentation = if args.carousel {
        Presentation::Carousel
    } else {
        Presentation::Modal
    };
    let options = cfg.modal_options(presentation);
    let state = AppState::new(cfg.projects.clone(), cfg.title.clone(), index, options);

    run_tui(state)
}

fn init_tracing(log_file: Option<&str>) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let path = log_file.map_or_else(|| std::env::temp_dir().join("casenav.log"), PathBuf::from);

    // The terminal belongs to the TUI; without a log file, logging stays off.
    if let Some(file) = open_log_file(&path) {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();
        tracing::info!(path = %path.display(), "logging initialized");
    }
}

fn open_log_file(path: &Path) -> Option<std::fs::File> {
    OpenOptions::new().create(true).append(true).open(path).ok()
}

fn run_tui(mut app: AppState) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> io::Result<()> {
    let mut last = Instant::now();
    loop {
        let now = Instant::now();
        app.tick(now - last);
        last = now;

        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = if app.modal.anchor().is_expanding() {
            FRAME
        } else {
            app.modal.next_due().map_or(IDLE, |due| due.min(IDLE))
        };
        if !event::poll(timeout)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match app.view() {
                View::Landing => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Up | KeyCode::Char('k') => app.select_prev_project(),
                    KeyCode::Down | KeyCode::Char('j') => app.select_next_project(),
                    KeyCode::Enter => app.open_selected(),
                    _ => {}
                },
                View::CaseStudy => app.handle_modal_key(key),
            },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => app.scroll_page(-1),
                MouseEventKind::ScrollDown => app.scroll_page(1),
                _ => {}
            },
            _ => {}
        }
    }
}
