use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::LevelFilter;

use wakemup::config::{Config, DEFAULT_CONFIG_PATH};
use wakemup::{dispatch, PacketSender, WOL_PORT};

/// Send a Wake-on-LAN magic packet.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// MAC address of the machine to wake, e.g. e0:73:e7:bc:9c:82
    mac: String,

    /// Destination IPv4 address, usually the subnet broadcast address
    target: Option<String>,

    /// YAML config file [default: ~/.config/wakemup.yml, if present]
    #[arg(short, long)]
    config: Option<String>,

    /// More log output; repeat for debug and trace
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let opts = Cli::parse();

    simple_logger::SimpleLogger::new()
        .with_level(log_level(opts.verbose))
        .with_colors(true)
        .init()
        .context("failed to initialise logger")?;

    let cfg = match &opts.config {
        Some(path) => Config::load(path, true)?,
        None => Config::load(DEFAULT_CONFIG_PATH, false)?,
    };
    log::debug!("{:?}", cfg);

    let target = opts.target.clone().unwrap_or_else(|| cfg.target().to_owned());
    let sender = PacketSender::new(cfg.sender());

    let outcome = dispatch(sender, opts.mac, target, WOL_PORT)
        .await
        .context("wake task ended without reporting")?;

    println!("{outcome}");
    Ok(if outcome.is_sent() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn every_argument_has_help() {
        let cmd = Cli::command();
        for arg in cmd.get_arguments() {
            if arg.get_id() == "help" || arg.get_id() == "version" { continue; }
            assert!(arg.get_help().is_some(), "no help for {}", arg.get_id());
        }
    }

    #[test]
    fn verbosity_counts_up_to_trace() {
        let opts = Cli::try_parse_from(["wakemup", "-vvv", "e0:73:e7:bc:9c:82"]).unwrap();
        assert_eq!(log_level(opts.verbose), LevelFilter::Trace);
        assert_eq!(log_level(0), LevelFilter::Warn);
    }
}
