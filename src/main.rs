//! Command-line interpreter: compiles and runs a single source file.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use log::{debug, info, warn};
use simple_logger::SimpleLogger;
use std::io::{self, Write};
use std::process;

use hybrid::trace::Tracer;
use hybrid::{Config, LangError};

fn main() {
    let config = Config::from_env();
    if let Err(e) = SimpleLogger::new().with_level(config.log_level).init() {
        eprintln!("Unable to initialize logger: {}", e);
    }
    info!("Starting hybrid v{} ...", env!("CARGO_PKG_VERSION"));
    debug!("{:?}", config);

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        println!("Wrong number of command line arguments");
        println!(
            "Format: {} <infile>",
            args.first().map(String::as_str).unwrap_or("hybrid"),
        );
        process::exit(1);
    }

    let source_code = match read_source(&args[1]) {
        Ok(s) => s,
        Err(e) => {
            debug!("{:#}", e);
            println!("{}", e);
            process::exit(1);
        }
    };

    let result = {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if config.trace {
            if let Err(e) = Tracer::new(&mut out).banner(&args[0], &args[1]) {
                warn!("Unable to write trace banner: {}", e);
            }
        }
        hybrid::run_with_config(&config, &source_code, &mut out)
    };
    if let Err(e) = result {
        report(&e);
        process::exit(e.exit_code());
    }
}

fn read_source(path: &str) -> Result<String> {
    debug!("Reading {}", path);
    std::fs::read_to_string(path).with_context(|| format!("Cannot read input file {}", path))
}

fn report(e: &LangError) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = if e.token.is_some() {
        writeln!(out, "\n{}", e)
    } else {
        writeln!(out, "{}", e)
    };
    if let Err(io_err) = written.and_then(|_| out.flush()) {
        warn!("Unable to report error: {}", io_err);
    }
}
