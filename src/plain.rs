use lights_out::display::print_session;
use lights_out::{GameConfig, GameSession};
use log::{info, warn};
use std::io::{self, BufRead, Write};

/// Parse a "row col" line into a signed coordinate pair
fn parse_coordinate(line: &str) -> Option<(isize, isize)> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load_from_file(&path)?,
        None => GameConfig::from_env(),
    };
    config.validate()?;

    let mut rng = config.rng();
    let mut session = GameSession::new(config.create_grid(&mut rng)?);

    println!("Lights Out");
    println!("==========");
    println!("Enter \"row col\" to toggle, \"n\" for a new game, \"q\" to quit.");
    print_session(&session);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let line = line.trim();

        match line {
            "q" | "quit" => break,
            "n" | "new" => {
                session.restart(config.create_grid(&mut rng)?);
                print_session(&session);
            }
            "" => {}
            _ => match parse_coordinate(line) {
                Some((row, col)) => {
                    if !session.grid().contains(row, col) {
                        warn!("({}, {}) is off the board", row, col);
                    }
                    session.toggle(row, col);
                    print_session(&session);
                    if session.is_won() {
                        info!("solved in {} moves", session.moves());
                        println!("Press \"n\" for a new game or \"q\" to quit.");
                    }
                }
                None => println!("Could not read {:?}, expected \"row col\"", line),
            },
        }
    }

    Ok(())
}
