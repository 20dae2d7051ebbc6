use clap::{Arg, ArgAction, Command as ClapCommand};
use log::error;
use std::process;

use satmeta::commands::{CommandFactory, SatmetaCommandFactory};
use satmeta::utils::logger::Logger;

const HINT: &str = "Hint: check that the input is a readable TIFF/GeoTIFF file, \
                    that it is not truncated, and that its compression scheme is a registered one.";

fn main() {
    let matches = ClapCommand::new("satmeta")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract geospatial metadata from GeoTIFF satellite images")
        .arg(
            Arg::new("input")
                .help("Input TIFF file(s): local paths or http(s) URLs")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Echo debug logging to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("batch")
                .short('b')
                .long("batch")
                .help("Extract all inputs in parallel and print one summary line per file")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("filename")
                .short('f')
                .long("filename")
                .help("Original filename used for satellite identification (single input)")
                .value_name("NAME")
                .required(false),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .help("Timeout in seconds for fetching remote inputs")
                .value_name("SECONDS")
                .default_value("30")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Log file path")
                .value_name("FILE")
                .default_value("satmeta.log")
                .required(false),
        )
        .get_matches();

    let log_file = matches
        .get_one::<String>("log-file")
        .map(String::as_str)
        .unwrap_or("satmeta.log");

    if let Err(e) = Logger::init_global_logger(log_file, matches.get_flag("verbose")) {
        eprintln!("Error setting up logger: {}", e);
        process::exit(1);
    }

    let factory = SatmetaCommandFactory::new();

    match factory.create_command(&matches) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                eprintln!("{}", HINT);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
