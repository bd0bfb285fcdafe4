use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use lights_out::display::WIN_MESSAGE;
use lights_out::{GameConfig, GameSession, SessionState};
use log::{error, info};
use rand::rngs::StdRng;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use std::{io, time::Duration};

const TICK_RATE: Duration = Duration::from_millis(100);
const MAX_CELL_WIDTH: u16 = 6;
const MAX_CELL_HEIGHT: u16 = 3;

struct AppState {
    config: GameConfig,
    rng: StdRng,
    session: GameSession,
    games_played: u32,
    cursor: (usize, usize),
    should_quit: bool,
    show_help: bool,
}

impl AppState {
    fn new(config: GameConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let mut rng = config.rng();
        let grid = config.create_grid(&mut rng)?;
        Ok(Self {
            config,
            rng,
            session: GameSession::new(grid),
            games_played: 1,
            cursor: (0, 0),
            should_quit: false,
            show_help: false,
        })
    }

    fn new_game(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let grid = self.config.create_grid(&mut self.rng)?;
        self.session.restart(grid);
        self.games_played += 1;
        self.cursor = (0, 0);
        Ok(())
    }

    fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let grid = self.session.grid();
        let (row, col) = self.cursor;
        let row = (row as isize + d_row).clamp(0, grid.rows() as isize - 1);
        let col = (col as isize + d_col).clamp(0, grid.cols() as isize - 1);
        self.cursor = (row as usize, col as usize);
    }

    fn toggle_at_cursor(&mut self) {
        let (row, col) = self.cursor;
        if self.session.toggle(row as isize, col as isize) == SessionState::Won {
            info!(
                "game {} won in {} moves",
                self.games_played,
                self.session.moves()
            );
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Keep log output quiet so it does not tear the alternate screen
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load_from_file(&path)?,
        None => GameConfig::from_env(),
    };
    config.validate()?;
    let mut app = AppState::new(config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!("lights out terminated: {}", e);
    }
    result
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| {
            if app.show_help {
                render_help(f);
            } else {
                render_main_ui(f, app);
            }
        })?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                        KeyCode::Char('h') => app.show_help = !app.show_help,
                        KeyCode::Char('n') => app.new_game()?,
                        KeyCode::Up => app.move_cursor(-1, 0),
                        KeyCode::Down => app.move_cursor(1, 0),
                        KeyCode::Left => app.move_cursor(0, -1),
                        KeyCode::Right => app.move_cursor(0, 1),
                        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_at_cursor(),
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn render_main_ui(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Board
            Constraint::Length(3), // Key hints
        ])
        .split(f.area());

    render_header(f, chunks[0], app);
    if app.session.is_won() {
        render_win(f, chunks[1], app);
    } else {
        render_board(f, chunks[1], app);
    }

    let hints = Paragraph::new("←↑↓→ move   space toggle   n new game   h help   q quit")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(hints, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect, app: &AppState) {
    let game = &app.session;
    let grid = game.grid();
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "💡 Lights Out ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("{}x{}  ", grid.rows(), grid.cols())),
        Span::styled("Lit: ", Style::default().fg(Color::White)),
        Span::styled(grid.lit_count().to_string(), Style::default().fg(Color::Yellow)),
        Span::styled("  Moves: ", Style::default().fg(Color::White)),
        Span::styled(game.moves().to_string(), Style::default().fg(Color::Green)),
        Span::styled("  Game: ", Style::default().fg(Color::White)),
        Span::styled(
            app.games_played.to_string(),
            Style::default().fg(Color::Magenta),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, area: Rect, app: &AppState) {
    let grid = app.session.grid();
    let block = Block::default().borders(Borders::ALL).title("Board");
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Boards wider or taller than u16 can never fit a terminal
    let dims = u16::try_from(grid.rows())
        .ok()
        .zip(u16::try_from(grid.cols()).ok());
    let (rows, cols) = match dims {
        Some((rows, cols)) if inner.height >= rows && inner.width >= cols.saturating_mul(2) => {
            (rows, cols)
        }
        _ => {
            let msg = Paragraph::new("Area too small for board display")
                .style(Style::default().fg(Color::Yellow));
            f.render_widget(msg, inner);
            return;
        }
    };

    let cell_width = (inner.width / cols).min(MAX_CELL_WIDTH);
    let cell_height = (inner.height / rows).min(MAX_CELL_HEIGHT);

    for (row, cells) in grid.as_rows().iter().enumerate() {
        for (col, &lit) in cells.iter().enumerate() {
            let cell_area = Rect {
                x: inner.x + col as u16 * cell_width,
                y: inner.y + row as u16 * cell_height,
                width: cell_width.max(1),
                height: cell_height.max(1),
            };

            let mut style = if lit {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            if app.cursor == (row, col) {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }

            let symbol = if lit { "●" } else { "·" };
            let cell_widget = Paragraph::new(symbol)
                .alignment(Alignment::Center)
                .style(style);
            f.render_widget(cell_widget, cell_area);
        }
    }
}

fn render_win(f: &mut Frame, area: Rect, app: &AppState) {
    let text = vec![
        Line::from(Span::styled(
            WIN_MESSAGE,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Solved in {} moves.", app.session.moves())),
        Line::from("Press 'n' for a new game or 'q' to quit."),
    ];
    let win = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Board"));
    f.render_widget(win, area);
}

fn render_help(f: &mut Frame) {
    let area = f.area();
    f.render_widget(Clear, area);

    let help_text = vec![
        Line::from("💡 Lights Out - Help"),
        Line::from(""),
        Line::from("Toggling a cell also toggles the cells above, below, left and right."),
        Line::from("Turn every light off to win."),
        Line::from(""),
        Line::from("Keyboard Commands:"),
        Line::from("  ←/↑/↓/→      - Move the cursor"),
        Line::from("  space/enter  - Toggle around the cursor"),
        Line::from("  n            - Start a new game"),
        Line::from("  h            - Toggle this help screen"),
        Line::from("  q/esc        - Quit"),
        Line::from(""),
        Line::from(vec![
            Span::styled(" ● ", Style::default().fg(Color::Black).bg(Color::Yellow)),
            Span::raw(" Lit cell   "),
            Span::styled(" · ", Style::default().fg(Color::DarkGray)),
            Span::raw(" Unlit cell"),
        ]),
    ];

    let help = Paragraph::new(help_text)
        .block(Block::default().borders(Borders::ALL).title("Help"))
        .style(Style::default().fg(Color::White));
    f.render_widget(help, area);
}
