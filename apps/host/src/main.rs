use anyhow::Context;
use clap::Parser;
use xrv_domain::config::HostConfig;
use xrv_host::{Cli, RunSummary, Simulator};
use xrv_kernel::config::load_config;
use xrv_logger::{Logger, parse_level};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cfg: HostConfig =
        load_config(cli.config.as_ref()).context("Critical: Configuration is malformed")?;
    cli.apply(&mut cfg);

    let builder = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .level(parse_level(&cfg.logging.level)?)
        .json(cfg.logging.json);
    let _log = match cfg.logging.directory.clone() {
        Some(directory) => builder.path(directory).init()?,
        None => builder.init()?,
    };

    let summary = Simulator::builder().config(cfg).assignments(&cli.set).build()?.run()?;
    emit(&summary, cli.json)
}

#[allow(clippy::print_stdout)]
fn emit(summary: &RunSummary, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        print!("{summary}");
    }
    Ok(())
}
