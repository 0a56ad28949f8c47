use crate::flight::{Flight, FlightDraft, FlightKind, Priority};
use crate::simulation::{ClockState, Simulation, TickOutcome};
use clap::Parser;
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod board;
mod error;
mod flight;
mod generator;
mod simulation;
mod status;
mod time;

const PAGER_THRESHOLD: usize = 20;

/// Name, arguments and description of every REPL command.
const COMMANDS: &[(&str, &str, &str)] = &[
    ("add", "<no> <org> <dst> <kind> <HH:MM> <min> <prio>", "Queue a flight, e.g. add AB1234 MAD BCN DEPARTURE 09:30 5 COMMERCIAL"),
    ("random", "[n]", "Queue n random flights (default --batch)"),
    ("ls", "", "List queued flights with their status"),
    ("runway", "", "Show the runway and the last completed flight"),
    ("step", "[n]", "Advance the simulation n ticks (default 1)"),
    ("run", "", "Run the simulation until the queue drains or 23:59"),
    ("reset", "", "Stop the simulation and reset the clock to 00:00"),
    ("help", "", "Show this help menu (also ?)"),
    ("exit", "", "Exit the simulator (also quit)"),
];

#[derive(Parser)]
#[command(version, about = "Runway flight board simulator")]
struct Args {
    /// Path to a JSON scenario file with flights to queue at start-up
    #[arg(short, long, value_name = "FILE")]
    scenario: Option<PathBuf>,

    /// Wall-clock milliseconds between simulation ticks during `run`
    #[arg(short, long, value_name = "MS", default_value_t = 500)]
    tick_ms: u64,

    /// Seed for randomly generated flights
    #[arg(long)]
    seed: Option<u64>,

    /// Number of flights added by `random` when no count is given
    #[arg(short, long, default_value_t = 10)]
    batch: usize,
}

/// Completes command names, and the kind and priority arguments of `add`.
#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct BoardHelper;

/// Candidates for the word following the complete `words` already typed.
fn completions(words: &[&str]) -> Vec<String> {
    match words {
        [] => COMMANDS.iter().map(|(name, ..)| name.to_string()).collect(),
        ["add", rest @ ..] if rest.len() == 3 => FlightKind::ALL.iter().map(ToString::to_string).collect(),
        ["add", rest @ ..] if rest.len() == 6 => Priority::ALL.iter().map(ToString::to_string).collect(),
        _ => vec![],
    }
}

impl Completer for BoardHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let head = &line[..pos];
        let start = head.rfind(' ').map_or(0, |i| i + 1);
        let (before, partial) = head.split_at(start);
        let words: Vec<&str> = before.split_whitespace().collect();
        let upper = partial.to_ascii_uppercase();

        let candidates = completions(&words)
            .into_iter()
            .filter(|c| c.starts_with(partial) || c.starts_with(&upper))
            .map(|c| Pair {
                replacement: format!("{} ", c),
                display: c,
            })
            .collect();

        Ok((start, candidates))
    }
}

/// `$PAGER` when set, otherwise `less -R -F`, otherwise `more`.
fn spawn_pager() -> io::Result<Child> {
    let spawn = |program: &str, args: &[&str]| Command::new(program).args(args).stdin(Stdio::piped()).spawn();
    match std::env::var("PAGER") {
        Ok(pager) if !pager.trim().is_empty() => {
            let mut parts = pager.split_whitespace();
            let program = parts.next().unwrap_or("less");
            let args: Vec<&str> = parts.collect();
            spawn(program, &args)
        }
        _ => spawn("less", &["-R", "-F"]).or_else(|_| spawn("more", &[])),
    }
}

fn page(content: &str) -> io::Result<()> {
    let mut pager = spawn_pager()?;
    // dropping stdin at the end of the closure signals EOF to the pager
    let written = pager
        .stdin
        .take()
        .map_or(Ok(()), |mut stdin| stdin.write_all(content.as_bytes()));
    match written {
        // quitting the pager early closes the pipe
        Err(e) if e.kind() != io::ErrorKind::BrokenPipe => Err(e),
        _ => pager.wait().map(|_| ()),
    }
}

fn show(content: String, rows: usize) {
    if rows <= PAGER_THRESHOLD {
        println!("{}", content);
    } else if let Err(e) = page(&content) {
        tracing::warn!("pager unavailable: {}", e);
        println!("{}", content);
    }
}

/// Optional count argument: `default` when absent, `None` when not a number.
fn count_arg(arg: Option<&&str>, default: usize) -> Option<usize> {
    match arg {
        None => Some(default),
        Some(s) => s.parse().ok(),
    }
}

fn help() {
    println!("\nAvailable Commands:");
    for (name, synopsis, description) in COMMANDS {
        let usage = format!("{} {}", name, synopsis);
        println!("  {:<54} - {}", usage.trim_end(), description);
    }
    println!();
}

fn report(outcome: &TickOutcome) {
    if let Some(f) = &outcome.retired {
        println!("{} {} cleared the runway", outcome.now, f.number.bold());
    }
    if let Some(f) = &outcome.promoted {
        println!("{} {} {} on the runway", outcome.now, f.number.bold(), f.kind);
    }
}

fn stop(sim: &mut Simulation) {
    if let Some(f) = sim.stop().retired {
        println!("{} was still on the runway and is marked completed.", f.number.bold());
    }
    println!("Simulation stopped, clock reset to {}.", sim.now());
}

fn frame(sim: &Simulation) {
    // clear screen, cursor home
    print!("\x1B[2J\x1B[1;1H");
    println!("{}", board::banner(sim));
    println!("{}", board::runway_panel(sim));
    let queued = sim.queue_snapshot();
    if !queued.is_empty() {
        println!("{}", board::table(&queued));
    }
    let _ = io::stdout().flush();
}

fn run(sim: &mut Simulation, cadence: Duration) {
    sim.start();
    loop {
        frame(sim);
        if matches!(sim.state(), ClockState::Paused | ClockState::Halted) {
            break;
        }
        thread::sleep(cadence);
        sim.tick();
    }
    match sim.state() {
        ClockState::Halted => println!("Clock reached 23:59."),
        _ => println!("All flights completed."),
    }
    stop(sim);
}

fn add(sim: &mut Simulation, fields: &[&str]) {
    let [number, origin, destination, kind, scheduled, duration, priority] = fields else {
        println!("Usage: add <number> <origin> <destination> <ARRIVAL|DEPARTURE> <HH:MM> <minutes> <priority>");
        return;
    };
    let draft = FlightDraft {
        number: number.to_string(),
        origin: origin.to_string(),
        destination: destination.to_string(),
        kind: kind.to_string(),
        scheduled: scheduled.to_string(),
        duration: duration.to_string(),
        priority: priority.to_string(),
    };
    match Flight::try_from(draft) {
        Ok(flight) => {
            println!("Queued {} at {}.", flight.number, flight.scheduled);
            if let Some(f) = sim.insert_flight(flight) {
                println!("{} {} {} on the runway", sim.now(), f.number.bold(), f.kind);
            }
        }
        Err(e) => println!("{}", e.to_string().red()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("flightboard=warn")))
        .init();

    let mut sim = match &args.scenario {
        Some(path) => {
            let sim = Simulation::load_from_file(path)?;
            println!("Tower online. Loaded {} flights from {}", sim.queue_len(), path.display());
            sim
        }
        None => {
            println!("Tower online. No flights queued yet, try `random` or `add`.");
            Simulation::default()
        }
    };
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let cadence = Duration::from_millis(args.tick_ms);

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(BoardHelper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                let parts: Vec<&str> = trimmed.split_whitespace().collect();
                match parts[0] {
                    "add" => add(&mut sim, &parts[1..]),
                    "random" => {
                        let Some(count) = count_arg(parts.get(1), args.batch) else {
                            println!("Usage: random [count]");
                            continue;
                        };
                        sim.insert_random(&mut rng, count);
                        println!("Queued {} random flights.", count);
                    },
                    "ls" => {
                        let queued = sim.queue_snapshot();
                        if queued.is_empty() {
                            println!("No flights queued.")
                        } else {
                            show(board::table(&queued), queued.len());
                        }
                    },
                    "runway" => println!("{}", board::runway_panel(&sim)),
                    "step" => {
                        let Some(steps) = count_arg(parts.get(1), 1) else {
                            println!("Usage: step [ticks]");
                            continue;
                        };
                        sim.start();
                        for _ in 0..steps {
                            let outcome = sim.tick();
                            if outcome.is_noop() {
                                println!("{} nothing to do ({:?}).", sim.now(), sim.state());
                                break;
                            }
                            report(&outcome);
                        }
                        println!("Clock at {}.", sim.now().to_string().cyan());
                    },
                    "run" => run(&mut sim, cadence),
                    "reset" => stop(&mut sim),
                    "help" | "?" => help(),
                    "exit" | "quit" => break,
                    _ => println!("Unknown command: {}", parts[0]),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}
