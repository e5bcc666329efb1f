use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, read},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, info};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use noteworthy::app::App;
use noteworthy::cli::{self, CliArgs};
use noteworthy::command::Command;
use noteworthy::config::NoteworthyConfig;
use noteworthy::paths;
use noteworthy::storage::BoardStore;
use noteworthy::ui::renderer::TuiRenderer;
use noteworthy::viewport::Viewport;

/// Application entry point: parse command-line arguments, resolve config and
/// data directory, then run the board UI until the user quits.
///
/// `--list` prints saved boards and exits before the terminal is touched.
/// The open board, if any, is saved on the way out.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments first (before terminal setup)
    let cli_args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error parsing arguments: {}", e);
            std::process::exit(1);
        }
    };

    let config = load_config(&cli_args);
    let data_dir = cli_args
        .data_dir
        .clone()
        .or_else(|| config.data_dir.clone())
        .unwrap_or_else(paths::default_data_dir);

    init_logging(&data_dir);
    info!("data directory {}", data_dir.display());

    let store = BoardStore::new(&data_dir);

    // Handle --list flag
    if cli_args.list {
        for board in store.load_all().await? {
            println!("{}", board.name());
        }
        return Ok(());
    }

    let (cols, rows) = crossterm::terminal::size()?;
    let mut app = App::new(store, config.note_layout(), Viewport::new(cols, rows)).await;
    if let Some(name) = cli_args.board_name() {
        app.open_board(name);
    }

    // Enable raw mode and enter alternate screen
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let result = run(&mut app).await;

    // Restore the terminal before reporting anything
    crossterm::execute!(stdout, DisableMouseCapture, LeaveAlternateScreen)?;
    disable_raw_mode()?;

    if let Err(e) = app.shutdown().await {
        eprintln!("Error saving board: {}", e);
    }
    result
}

async fn run(app: &mut App) -> Result<(), Box<dyn std::error::Error>> {
    let mut renderer = TuiRenderer::new()?;

    // Frame rate limiting constants
    const TARGET_FPS: u64 = 60;
    const FRAME_DURATION: Duration = Duration::from_micros(1_000_000 / TARGET_FPS);

    let mut last_frame_time = Instant::now();
    let mut needs_redraw = true;

    loop {
        if needs_redraw && last_frame_time.elapsed() >= FRAME_DURATION {
            renderer.draw(app)?;
            last_frame_time = Instant::now();
            needs_redraw = false;
        }

        // Poll with a timeout while a frame is pending so it still gets drawn
        let event = if needs_redraw {
            let timeout = FRAME_DURATION.saturating_sub(last_frame_time.elapsed());
            if crossterm::event::poll(timeout)? {
                Some(read()?)
            } else {
                None
            }
        } else {
            Some(read()?)
        };

        let command = match event {
            Some(Event::Key(key_event)) => Command::from_key(key_event, app.input_context()),
            Some(Event::Mouse(mouse_event)) => Command::from_mouse(mouse_event),
            Some(Event::Resize(cols, rows)) => {
                app.handle_resize(cols, rows);
                needs_redraw = true;
                None
            }
            Some(other) => {
                debug!("unhandled event {:?}", other);
                None
            }
            None => None,
        };

        if let Some(cmd) = command {
            if app.execute_command(cmd).await {
                return Ok(());
            }
            needs_redraw = true;
        }
    }
}

fn load_config(cli_args: &CliArgs) -> NoteworthyConfig {
    let path = cli_args.config.clone().or_else(paths::find_config_file);
    let Some(path) = path else {
        return NoteworthyConfig::default();
    };
    match NoteworthyConfig::from_file(&path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Ignoring config {}: {}", path.display(), e);
            NoteworthyConfig::default()
        }
    }
}

/// Logs go to a file in the data directory since the terminal belongs to the
/// UI. Set RUST_LOG to control verbosity.
fn init_logging(data_dir: &Path) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log::LevelFilter::Info).parse_default_env();

    match open_log_file(data_dir) {
        Ok((file, path)) => {
            builder.target(env_logger::Target::Pipe(Box::new(file))).init();
            debug!("logging to {}", path.display());
        }
        Err(e) => eprintln!("Logging disabled: {}", e),
    }
}

fn open_log_file(data_dir: &Path) -> std::io::Result<(std::fs::File, PathBuf)> {
    std::fs::create_dir_all(data_dir)?;
    let path = paths::log_file(data_dir);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}
