//! coalview: coalescence event analysis and plotting CLI.

use clap::{ColorChoice, CommandFactory, Parser};
use std::io::{self, IsTerminal};
use tracing::Level;

use coal_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use coal_cli::commands::{run_event, run_phi, run_scaled, run_scan, run_stats};
use coal_cli::logging::{LogConfig, LogFormat, init_logging};
use coal_cli::summary::{print_event_summary, print_stats_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Event(args) => match run_event(&args) {
            Ok(report) => {
                print_event_summary(&report);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Stats(args) => match run_stats(&args) {
            Ok(report) => {
                print_stats_summary(&report);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Phi(args) => {
            if args.single.is_none() && args.mix.is_none() {
                print_subcommand_help("phi");
                0
            } else {
                match run_phi(&args) {
                    Ok(figures) => {
                        for path in figures {
                            println!("{}", path.display());
                        }
                        0
                    }
                    Err(error) => {
                        eprintln!("error: {error:#}");
                        1
                    }
                }
            }
        }
        Command::Scaled(args) => match run_scaled(&args) {
            Ok(path) => {
                println!("{}", path.display());
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Scan(args) => {
            if !args.process && !args.analyze {
                print_subcommand_help("scan");
                0
            } else {
                match run_scan(&args) {
                    Ok(figure) => {
                        if let Some(path) = figure {
                            println!("{}", path.display());
                        }
                        0
                    }
                    Err(error) => {
                        eprintln!("error: {error:#}");
                        1
                    }
                }
            }
        }
    };
    std::process::exit(exit_code);
}

fn print_subcommand_help(name: &str) {
    let mut command = Cli::command();
    if let Some(subcommand) = command.find_subcommand_mut(name) {
        let _ = subcommand.print_help();
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level: cli.verbosity.tracing_level().unwrap_or(Level::ERROR),
        ..LogConfig::default()
    };
    if let Some(level) = cli.log_level {
        config.level = match level {
            LogLevelArg::Error => Level::ERROR,
            LogLevelArg::Warn => Level::WARN,
            LogLevelArg::Info => Level::INFO,
            LogLevelArg::Debug => Level::DEBUG,
            LogLevelArg::Trace => Level::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
