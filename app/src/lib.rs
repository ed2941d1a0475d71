use std::io::Write;

use log::{debug, info};
use somefunc::{Client, ExampleCaller};
use thiserror::Error;

pub mod settings;

pub use settings::{Settings, SETTINGS};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Values computed by one [`run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub sum: i64,
    pub client: i64,
    pub process: i64,
}

/// Prints the sum of the configured operands, then the configured value run
/// through a client backed by [`ExampleCaller`], one integer per line.
///
/// The value is also run through [`someprocess::run`]; that result is only
/// logged and returned.
pub fn run<W: Write>(out: &mut W, settings: &Settings) -> Result<Summary, AppError> {
    info!("starting demo");

    let sum = calc::add(settings.add_lhs, settings.add_rhs);
    debug!("add({}, {}) = {sum}", settings.add_lhs, settings.add_rhs);
    writeln!(out, "{sum}")?;

    let client = Client::new(&ExampleCaller);
    let result = client.run(settings.run_value);
    debug!("client.run({}) = {result}", settings.run_value);
    writeln!(out, "{result}")?;

    let process = someprocess::run(settings.run_value);
    debug!("someprocess::run({}) = {process}", settings.run_value);

    out.flush()?;
    Ok(Summary {
        sum,
        client: result,
        process,
    })
}
