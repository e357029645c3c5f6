use clap::Parser;
use hdrhistogram::Histogram;
use linked_deck::{Command, Direction, Engine, MAX_RESERVE};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "latency-report")]
#[command(about = "Measure per-operation latency on a seeded card deck")]
struct Cli {
    /// Cards in the deck while measuring
    #[arg(
        long,
        default_value_t = 1_000,
        value_parser = clap::value_parser!(u32).range(..=MAX_RESERVE as i64)
    )]
    cards: u32,

    /// Measured operations per workload
    #[arg(long, default_value_t = 100_000)]
    iterations: u64,
}

fn report(name: &str, histogram: &Histogram<u64>, iterations: u64, total: std::time::Duration) {
    println!("\n=== {} (ns) ===", name);
    println!("Total Ops:  {}", iterations);
    println!("Throughput: {:.2} ops/sec", iterations as f64 / total.as_secs_f64());
    println!("---------------------------");
    println!("Min:    {:8} ns", histogram.min());
    println!("P50:    {:8} ns", histogram.value_at_quantile(0.50));
    println!("P90:    {:8} ns", histogram.value_at_quantile(0.90));
    println!("P99:    {:8} ns", histogram.value_at_quantile(0.99));
    println!("P99.9:  {:8} ns", histogram.value_at_quantile(0.999));
    println!("Max:    {:8} ns", histogram.max());
}

/// Time `iterations` runs of `op` against a deck seeded with `cards` cards.
fn measure<F>(
    cards: u32,
    iterations: u64,
    mut op: F,
) -> Result<(Histogram<u64>, std::time::Duration), Box<dyn std::error::Error>>
where
    F: FnMut(&mut Engine),
{
    let mut engine = Engine::new(cards.saturating_add(1));
    engine.seed(cards);

    let mut histogram = Histogram::<u64>::new_with_bounds(1, 60_000_000_000, 3)?;
    let mut total = std::time::Duration::new(0, 0);

    for _ in 0..iterations {
        let start = Instant::now();
        op(&mut engine);
        let elapsed = start.elapsed();

        // Clamp outliers instead of failing the whole run
        histogram.saturating_record(elapsed.as_nanos() as u64);
        total += elapsed;
    }
    Ok((histogram, total))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    println!(
        "Preparing latency report: {} cards, {} iterations per workload...",
        cli.cards, cli.iterations
    );

    let (h, t) = measure(cli.cards, cli.iterations, |engine| {
        engine.process_command(Command::Add(-1));
        std::hint::black_box(engine.process_command(Command::Remove));
    })?;
    report("add + remove", &h, cli.iterations, t);

    let (h, t) = measure(cli.cards, cli.iterations, |engine| {
        std::hint::black_box(engine.process_command(Command::Rotate(Direction::BottomToTop)));
    })?;
    report("bottom_to_top", &h, cli.iterations, t);

    let (h, t) = measure(cli.cards, cli.iterations, |engine| {
        std::hint::black_box(engine.process_command(Command::Rotate(Direction::TopToBottom)));
    })?;
    report("top_to_bottom", &h, cli.iterations, t);

    let (h, t) = measure(cli.cards, cli.iterations, |engine| {
        std::hint::black_box(engine.deck.iter_rev().map(|(_, id)| id as i64).sum::<i64>());
    })?;
    report("bottom-to-top traversal", &h, cli.iterations, t);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_flag_bounds() {
        let cli = Cli::try_parse_from(["latency-report", "--cards", "10"]).unwrap();
        assert_eq!(cli.cards, 10);

        assert!(Cli::try_parse_from(["latency-report", "--cards", "4294967295"]).is_err());
    }

    #[test]
    fn test_measure_runs_each_iteration() {
        let mut calls = 0;
        let (histogram, _) = measure(3, 5, |_| calls += 1).unwrap();
        assert_eq!(calls, 5);
        assert_eq!(histogram.len(), 5);
    }
}
