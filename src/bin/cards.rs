//! The card deck exercise: seed a deck, rotate it both ways, print it
//! in both directions, then drain it.

use std::io::{self, BufRead, Write};

use clap::Parser;
use linked_deck::{parse_count, Command, Direction, Engine};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cards")]
#[command(about = "Exercise a linked card deck: add, rotate, print and remove cards")]
struct Cli {
    /// Number of test cards; prompted for on stdin when omitted
    #[arg(short, long)]
    count: Option<String>,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "constructor")?;
    let mut engine = Engine::default();

    let count = match cli.count {
        Some(raw) => parse_count(&raw)?,
        None => {
            write!(out, "Enter amount of test cards: ")?;
            out.flush()?;
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            parse_count(&line)?
        }
    };
    info!(count, "card count accepted");

    writeln!(out)?;
    writeln!(out, "print_from_top_to_bottom (deck is empty)")?;
    engine.deck.print_top_to_bottom(&mut out)?;

    writeln!(out)?;
    writeln!(out, "adding cards")?;
    engine.seed(count);

    writeln!(out)?;
    writeln!(out, "print_from_top_to_bottom")?;
    engine.deck.print_top_to_bottom(&mut out)?;

    writeln!(out)?;
    writeln!(out, "bottom_to_top * 2")?;
    engine.process_command(Command::Rotate(Direction::BottomToTop));
    engine.process_command(Command::Rotate(Direction::BottomToTop));

    writeln!(out)?;
    writeln!(out, "print_from_top_to_bottom")?;
    engine.deck.print_top_to_bottom(&mut out)?;

    writeln!(out)?;
    writeln!(out, "top_to_bottom * 1")?;
    engine.process_command(Command::Rotate(Direction::TopToBottom));

    writeln!(out)?;
    writeln!(out, "print_from_top_to_bottom")?;
    engine.deck.print_top_to_bottom(&mut out)?;

    writeln!(out)?;
    writeln!(out, "print_from_bottom_to_top")?;
    engine.deck.print_bottom_to_top(&mut out)?;

    writeln!(out)?;
    while let Some(id) = engine.deck.remove() {
        writeln!(out, "remove {}", id)?;
    }

    writeln!(out)?;
    writeln!(out, "destructor")?;
    Ok(())
}
