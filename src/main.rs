use crate::cli::run;

pub mod catalog;
pub mod cli;
mod config;
pub mod domain;
pub mod http;
mod public_endpoint;
pub mod store;

fn main() -> anyhow::Result<()> {
    run()
}
