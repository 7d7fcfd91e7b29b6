//! # Hola Mundo
//!
//! Asks for your name (Enter alone means 'Mundo'), greets you and tells you
//! how long your name is and how it reads backwards.
//!
//! No arguments. Log verbosity follows `RUST_LOG` and goes to stderr.

use std::io;
use std::process;

use anyhow::{Context, Result};
use env_logger::{Builder, Env};
use log::error;

fn run() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    hola_mundo::driver::run(&mut stdin.lock(), &mut stdout.lock())
        .context("Greeting session failed!")?;
    Ok(())
}

fn logger_init() {
    let env = Env::default().filter_or("RUST_LOG", "warn");
    Builder::from_env(env).init();
}

fn main() {
    logger_init();
    if let Err(err_msg) = run() {
        error!("{:#}", err_msg);
        process::exit(1);
    }
}
