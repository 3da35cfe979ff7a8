mod commands;
mod session;

use std::fs::{self, File};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use picklist_lib::{OptionEntry, Record, SelectConfig};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::commands::Command;
use crate::session::Session;

/// Drive a searchable select from the command line.
///
/// Commands are read from stdin, one per line. Every notification the
/// select fires is written to stdout as a JSON line.
#[derive(Debug, Parser)]
#[command(name = "picklist", version, about)]
struct Args {
    /// JSON file with the options, groups allowed
    #[arg(long, value_name = "FILE")]
    options: PathBuf,

    /// JSON file with the select configuration
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Allow several selected options
    #[arg(long)]
    multi: bool,

    /// Allow creating options from the typed text
    #[arg(long)]
    creatable: bool,

    /// Write debug logs to this file
    #[arg(long, value_name = "FILE")]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log {
        let log_file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;
    }

    let mut config = match &args.config {
        Some(path) => SelectConfig::from_path(path)?,
        None => SelectConfig::default(),
    };
    if args.multi {
        config.is_multi = true;
    }

    let raw = fs::read_to_string(&args.options)
        .with_context(|| format!("failed to read options from {}", args.options.display()))?;
    let entries: Vec<OptionEntry<Record>> = serde_json::from_str(&raw)
        .with_context(|| format!("invalid options in {}", args.options.display()))?;
    log::debug!("Loaded {} option entries", entries.len());

    let mut session = Session::new(config, entries, args.creatable);
    run(&mut session, io::stdin().lock(), io::stdout().lock())?;
    log::debug!("Input closed with {} option(s) selected", session.state().value.len());
    Ok(())
}

fn run(session: &mut Session, input: impl BufRead, mut output: impl Write) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let result = Command::parse(&line).and_then(|command| session.execute(command));
        match result {
            Ok(lines) => {
                for value in lines {
                    writeln!(output, "{value}")?;
                }
                output.flush()?;
            }
            Err(e) => {
                log::debug!("Command {:?} failed: {:#}", line, e);
                eprintln!("error: {e:#}");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use picklist_lib::record;

    use super::*;

    #[test]
    fn test_run_script() {
        let entries = vec![
            OptionEntry::Option(record("Red", "red")),
            OptionEntry::Option(record("Green", "green")),
        ];
        let mut session = Session::new(SelectConfig::multi(), entries, false);
        let script = "select red\n\nexplode\nselect green\npop\n";
        let mut out = Vec::new();
        run(&mut session, script.as_bytes(), &mut out).unwrap();

        let lines: Vec<serde_json::Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        let changes: Vec<_> = lines
            .iter()
            .filter(|line| line["event"] == "change")
            .map(|line| line["meta"]["action"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(changes, vec!["select-option", "select-option", "pop-value"]);
        assert_eq!(session.state().value.len(), 1);
    }
}
