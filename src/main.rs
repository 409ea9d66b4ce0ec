// sortty: terminal sorting-algorithm visualizer

mod engine;
mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use ui::app::{DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};
use ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional single argument: initial array size
    let args: Vec<String> = std::env::args().collect();
    let size = match args.get(1) {
        None => DEFAULT_SIZE,
        Some(raw) => match raw.parse::<usize>() {
            Ok(n) => n.clamp(MIN_SIZE, MAX_SIZE),
            Err(_) => {
                let program_name = args.first().map(|s| s.as_str()).unwrap_or("sortty");
                eprintln!("Error: invalid array size '{}'", raw);
                eprintln!();
                eprintln!("Usage: {} [size]", program_name);
                eprintln!();
                eprintln!(
                    "  size: number of bars, {} to {} (default {})",
                    MIN_SIZE, MAX_SIZE, DEFAULT_SIZE
                );
                std::process::exit(1);
            }
        },
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(size);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
