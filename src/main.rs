use clap::Parser;
use drop_out_stack::history;
use std::error;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "drop-out-stack")]
#[command(about = "Replay an event log through a bounded undo history")]
#[command(version)]
struct Cli {
    /// CSV event log with an `id,action` header
    #[arg(value_name = "FILE")]
    events: PathBuf,

    /// Number of events the history retains
    #[arg(short, long, default_value_t = 16)]
    capacity: usize,

    /// Reject new events once full instead of dropping the oldest
    #[arg(long)]
    strict: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<(), Box<dyn error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    let events = history::load_events(&cli.events)?;
    let (mut history, summary) = history::replay(events, cli.capacity, cli.strict)?;

    println!(
        "recorded: {} retained: {} rejected: {}",
        summary.recorded, summary.retained, summary.rejected
    );
    if let Some(last) = history.last() {
        println!("last: {}", last);
    }

    println!("undo order:");
    for event in history.unwind() {
        println!("  {}", event);
    }

    Ok(())
}
