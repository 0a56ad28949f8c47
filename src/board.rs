use crate::flight::{FlightKind, Priority};
use crate::simulation::{BoardEntry, Simulation};
use crate::status::FlightStatus;
use crate::time::Time;
use colored::Colorize;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
pub struct BoardRow {
    #[tabled(rename = "Flight")]
    number: String,
    #[tabled(rename = "Origin")]
    origin: String,
    #[tabled(rename = "Destination")]
    destination: String,
    #[tabled(rename = "Type")]
    kind: FlightKind,
    #[tabled(rename = "Time")]
    scheduled: Time,
    #[tabled(rename = "Duration (min)")]
    duration: u64,
    #[tabled(rename = "Priority")]
    priority: Priority,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&BoardEntry> for BoardRow {
    fn from(entry: &BoardEntry) -> Self {
        let f = &entry.flight;
        BoardRow {
            number: f.number.clone(),
            origin: f.origin.clone(),
            destination: f.destination.clone(),
            kind: f.kind,
            scheduled: f.scheduled,
            duration: f.duration,
            priority: f.priority,
            status: paint(entry.status),
        }
    }
}

fn paint(status: FlightStatus) -> String {
    let label = status.to_string();
    match status {
        FlightStatus::OnTime => label.green().to_string(),
        FlightStatus::Delayed => label.red().bold().to_string(),
        FlightStatus::Landing | FlightStatus::TakingOff => label.yellow().bold().to_string(),
    }
}

pub fn table(entries: &[BoardEntry]) -> String {
    let rows: Vec<BoardRow> = entries.iter().map(BoardRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.with(Alignment::left());
    table.to_string()
}

pub fn banner(sim: &Simulation) -> String {
    let today = chrono::Local::now().format("%a %-d %b %Y");
    format!(
        "{} {}  {}",
        format!("Welcome to the airport, today we have {} flights", sim.queue_len()).bold(),
        today,
        sim.now().to_string().cyan().bold()
    )
}

pub fn runway_panel(sim: &Simulation) -> String {
    let mut out = String::new();
    match (sim.runway(), sim.runway_occupant()) {
        (Some(occupant), Some(entry)) => {
            out.push_str(&format!(
                "{} (scheduled {}, on runway since {})\n",
                "Runway".bold(),
                occupant.originally_scheduled,
                occupant.since()
            ));
            out.push_str(&table(&[entry]));
        }
        _ => out.push_str(&format!("{} clear", "Runway".bold())),
    }
    if let Some(last) = sim.last_completed() {
        out.push_str(&format!(
            "\nLast completed: {} {} -> {} ({})",
            last.number, last.origin, last.destination, last.kind
        ));
    }
    out
}
