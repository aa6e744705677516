//! Interactive session
//!
//! A line-oriented form: set the date and weight fields, add, and look at the
//! panel. The prompt carries the status message, so "Entry added!" disappears
//! from it once the clear delay has passed.

use crate::storage::KeyValueStore;
use crate::tracker::{AddOutcome, ChartRenderer, Panel, Tracker, TrackerError};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

const HELP: &str = "\
Commands:
  date [YYYY-MM-DD]       show or set the date field
  weight <value>          set the weight field
  add [weight] [date]     add an entry from the fields (or the given values)
  show                    statistics and chart
  list                    all entries
  help                    this help
  quit                    leave
";

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Tracker(#[from] TrackerError),
}

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Date(Option<String>),
    Weight(String),
    Add {
        weight: Option<String>,
        date: Option<String>,
    },
    Show,
    List,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl ShellCommand {
    pub fn parse(line: &str) -> Self {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return ShellCommand::Empty;
        };
        let first = words.next().map(str::to_string);
        let second = words.next().map(str::to_string);

        match command.to_lowercase().as_str() {
            "date" | "d" => ShellCommand::Date(first),
            "weight" | "w" => match first {
                Some(value) => ShellCommand::Weight(value),
                None => ShellCommand::Weight(String::new()),
            },
            "add" | "a" => ShellCommand::Add {
                weight: first,
                date: second,
            },
            "show" | "s" => ShellCommand::Show,
            "list" | "ls" => ShellCommand::List,
            "help" | "h" | "?" => ShellCommand::Help,
            "quit" | "exit" | "q" => ShellCommand::Quit,
            other => ShellCommand::Unknown(other.to_string()),
        }
    }
}

/// Run the session until `quit` or end of input
pub async fn run<S, R, I, O>(
    tracker: &mut Tracker<S>,
    panel: &Panel<'_, R>,
    input: I,
    mut output: O,
) -> Result<(), ShellError>
where
    S: KeyValueStore,
    R: ChartRenderer,
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    output.write_all(panel.render(&tracker.view()).as_bytes()).await?;
    output.write_all(b"Type 'help' for commands.\n").await?;

    loop {
        output.write_all(prompt(tracker).as_bytes()).await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            output.write_all(b"\n").await?;
            break;
        };

        let reply = match ShellCommand::parse(&line) {
            ShellCommand::Empty => continue,
            ShellCommand::Quit => break,
            ShellCommand::Help => HELP.to_string(),
            ShellCommand::Date(None) => format!("date: {}\n", tracker.draft().date),
            ShellCommand::Date(Some(date)) => {
                tracker.set_date(date);
                format!("date: {}\n", tracker.draft().date)
            }
            ShellCommand::Weight(weight) => {
                tracker.set_weight(weight);
                format!("weight: {}\n", tracker.draft().weight)
            }
            ShellCommand::Add { weight, date } => {
                if let Some(weight) = weight {
                    tracker.set_weight(weight);
                }
                if let Some(date) = date {
                    tracker.set_date(date);
                }
                match tracker.add_entry()? {
                    AddOutcome::Added(entry) => format!(
                        "{} ({} {} {})\n",
                        tracker.status(),
                        entry.iso_date(),
                        entry.weight,
                        panel.unit
                    ),
                    AddOutcome::Rejected(_) => format!("{}\n", tracker.status()),
                }
            }
            ShellCommand::Show => {
                let mut view = tracker.view();
                // The prompt already carries the status
                view.status.clear();
                panel.render(&view)
            }
            ShellCommand::List => list_entries(tracker, panel.unit),
            ShellCommand::Unknown(command) => {
                format!("Unknown command: {}. Type 'help' for commands.\n", command)
            }
        };

        output.write_all(reply.as_bytes()).await?;
    }

    output.flush().await?;
    Ok(())
}

fn prompt<S: KeyValueStore>(tracker: &Tracker<S>) -> String {
    let status = tracker.status();
    if status.is_empty() {
        "> ".to_string()
    } else {
        format!("[{}] > ", status)
    }
}

/// Table of all entries, oldest first
pub fn list_entries<S: KeyValueStore>(tracker: &Tracker<S>, unit: &str) -> String {
    if tracker.entries().is_empty() {
        return "No entries yet.\n".to_string();
    }

    let mut out = format!("{:<12} {:>10}\n", "Date", "Weight");
    out.push_str(&format!("{}\n", "-".repeat(23)));
    for entry in tracker.entries() {
        out.push_str(&format!(
            "{:<12} {:>10}\n",
            entry.iso_date(),
            format!("{} {}", entry.weight, unit)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{EntryStore, MemoryStore};
    use crate::tracker::{TextChart, TrackerOptions};
    use tokio::io::BufReader;

    #[test]
    fn test_parse_commands() {
        assert_eq!(ShellCommand::parse(""), ShellCommand::Empty);
        assert_eq!(ShellCommand::parse("   "), ShellCommand::Empty);
        assert_eq!(
            ShellCommand::parse("date 2024-01-01"),
            ShellCommand::Date(Some("2024-01-01".into()))
        );
        assert_eq!(ShellCommand::parse("date"), ShellCommand::Date(None));
        assert_eq!(ShellCommand::parse("w 72.4"), ShellCommand::Weight("72.4".into()));
        assert_eq!(ShellCommand::parse("weight"), ShellCommand::Weight(String::new()));
        assert_eq!(
            ShellCommand::parse("add 80 2024-01-01"),
            ShellCommand::Add {
                weight: Some("80".into()),
                date: Some("2024-01-01".into())
            }
        );
        assert_eq!(
            ShellCommand::parse("ADD"),
            ShellCommand::Add {
                weight: None,
                date: None
            }
        );
        assert_eq!(ShellCommand::parse("exit"), ShellCommand::Quit);
        assert_eq!(ShellCommand::parse("frobnicate"), ShellCommand::Unknown("frobnicate".into()));
    }

    async fn session(script: &str) -> (String, Tracker<MemoryStore>) {
        let mut tracker =
            Tracker::open(EntryStore::new(MemoryStore::new()), TrackerOptions::default()).unwrap();
        let chart = TextChart::default();
        let panel = Panel::new(&chart, "kg");
        let mut out = Vec::new();

        run(&mut tracker, &panel, BufReader::new(script.as_bytes()), &mut out)
            .await
            .unwrap();

        (String::from_utf8(out).unwrap(), tracker)
    }

    #[tokio::test]
    async fn test_session_adds_entries() {
        let (out, tracker) = session(
            "date 2024-01-01\nweight 80\nadd\nadd 78.5 2024-01-08\nshow\nquit\n",
        )
        .await;

        assert_eq!(tracker.entries().len(), 2);
        assert!(out.contains("Entry added! (2024-01-01 80 kg)"));
        assert!(out.contains("[Entry added!] > "));
        assert!(out.contains("-1.5 kg"));
        assert!(out.contains("Weight Chart"));
    }

    #[tokio::test]
    async fn test_session_validation_message() {
        let (out, tracker) = session("weight\nadd\nlist\n").await;

        assert!(tracker.entries().is_empty());
        assert!(out.contains("Please enter both weight and date."));
        assert!(out.contains("No entries yet."));
    }

    #[tokio::test]
    async fn test_session_unknown_command() {
        let (out, _tracker) = session("jump\n").await;
        assert!(out.contains("Unknown command: jump"));
    }

    #[tokio::test]
    async fn test_list_table() {
        let (out, _tracker) = session("add 80 2024-01-01\nadd 81.2 2023-12-25\nlist\n").await;

        let table = out.split("Date").nth(1).unwrap();
        let first = table.find("2023-12-25").unwrap();
        let second = table.find("2024-01-01").unwrap();
        assert!(first < second);
        assert!(table.contains("81.2 kg"));
    }
}
