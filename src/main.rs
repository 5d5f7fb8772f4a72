//! Delve - Entry Point
//!
//! Reads the config, sets up logging, and runs the text loop: show the room,
//! offer a numbered menu, carry out the choice.

use std::fs::OpenOptions;
use std::io::{self, BufRead, Write};

use anyhow::Result;
use crossterm::style::{style, Stylize};

use delve::combat::CombatEvent;
use delve::{Action, ActionOutcome, Config, Game, GameRng, Room};

fn main() -> Result<()> {
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    init_logging(&config);
    if let Some(e) = config_error {
        log::warn!("Falling back to default config: {}", e);
    }

    let rng = config.seed.map(GameRng::new).unwrap_or_else(GameRng::from_entropy);
    log::info!("Starting Delve v{} (seed {})", env!("CARGO_PKG_VERSION"), rng.seed());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    write!(out, "Enter your name, adventurer: ")?;
    out.flush()?;
    let name = match read_line(&mut input)? {
        Some(name) if !name.is_empty() => name,
        _ => "Adventurer".to_string(),
    };

    let mut game = Game::new(name, rng);
    writeln!(out, "Welcome, {}!", style(game.player().name()).bold())?;

    let result = run(&mut game, &mut input, &mut out);

    writeln!(out)?;
    writeln!(out, "{}", game.summary())?;
    writeln!(out, "(seed {})", game.rng().seed())?;

    if let Err(ref e) = result {
        log::error!("Game exited with error: {}", e);
    }
    log::info!("Run ended: {:?}", game.state());
    result
}

/// Send log output to the configured file so it doesn't interleave with the game
fn init_logging(config: &Config) {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_filter.as_str()),
    );

    match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&config.log_file)
    {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(e) => eprintln!("Warning: cannot open log file {:?}: {}", config.log_file, e),
    }

    builder.init();
}

/// Main game loop
fn run(game: &mut Game, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    while !game.is_over() {
        writeln!(out)?;
        writeln!(out, "{}", game.current_room())?;

        if let Some(trap) = game.enter_room() {
            writeln!(out, "{}", style(trap).red())?;
            if game.is_over() {
                writeln!(out, "{}", style("You have been defeated.").red().bold())?;
                break;
            }
        }

        let actions = game.legal_actions();
        writeln!(out, "\nWhat do you want to do?")?;
        let room = game.current_room();
        for (i, action) in actions.iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, menu_label(*action, room))?;
        }

        let Some(action) = choose_action(input, out, &actions)? else {
            // End of input counts as walking away
            log::info!("Input closed, quitting");
            game.perform(Action::Quit)?;
            break;
        };

        match game.perform(action) {
            Ok(outcome) => narrate(out, &outcome)?,
            Err(e) => {
                log::warn!("Refused action: {}", e);
                writeln!(out, "{}", e)?;
            }
        }
    }

    Ok(())
}

fn menu_label(action: Action, room: &Room) -> String {
    match action {
        Action::Move(direction) => format!("Go {}", direction),
        Action::Attack => match &room.monster {
            Some(monster) => format!("Attack the {}", monster.name()),
            None => "Attack".to_string(),
        },
        Action::Pickup(item) => format!("Get {}", item),
        Action::Drink => "Drink from the fountain".to_string(),
        Action::ViewInventory => "View Inventory".to_string(),
        Action::Quit => "Quit".to_string(),
    }
}

/// Prompt until a valid menu number is entered. `None` on end of input.
fn choose_action(
    input: &mut impl BufRead,
    out: &mut impl Write,
    actions: &[Action],
) -> io::Result<Option<Action>> {
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };

        let choice = line
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| actions.get(i));

        match choice {
            Some(action) => return Ok(Some(*action)),
            None => writeln!(out, "Invalid choice. Please try again.")?,
        }
    }
}

fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn narrate(out: &mut impl Write, outcome: &ActionOutcome) -> io::Result<()> {
    match outcome {
        ActionOutcome::Moved { .. } => Ok(()),
        ActionOutcome::Fought { events, .. } => {
            for event in events {
                match event {
                    CombatEvent::Victory { .. } => writeln!(out, "{}", style(event).green().bold())?,
                    CombatEvent::Defeat => writeln!(out, "{}", style(event).red().bold())?,
                    _ => writeln!(out, "{}", event)?,
                }
            }
            Ok(())
        }
        ActionOutcome::PickedUp(item) => writeln!(out, "You pick up {}.", item),
        ActionOutcome::Drank { healing, hp } => writeln!(
            out,
            "{}",
            style(format!(
                "You drink from the fountain and restore {} HP. You now have {} HP.",
                healing, hp
            ))
            .cyan()
        ),
        ActionOutcome::Inventory(inventory) => writeln!(out, "{}", inventory),
        ActionOutcome::Quit => writeln!(out, "You have fled the dungeon."),
    }
}
