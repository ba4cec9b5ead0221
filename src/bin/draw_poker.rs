use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use draw_poker::game::GameConfig;
use draw_poker::tui::{app::AppState, controller};
use ratatui::prelude::*;
use std::error::Error;
use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // stderr shares the terminal with the UI; raise RUST_LOG and redirect 2> to see more
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error"))
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if !io::stdout().is_terminal() {
        println!(
            "draw-poker requires a real terminal (TTY).\nRun it in a terminal and press q in the menu to quit. Version: {}",
            draw_poker::VERSION
        );
        return Ok(());
    }
    let config = GameConfig::default();
    let mut app = AppState::new(config)?;
    log::info!("starting draw-poker {}", draw_poker::VERSION);

    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res?;
    Ok(())
}
