//! 排队网络仿真
//!
//! 运行预置网络或 JSON 配置文件描述的网络，打印文本报告。

use clap::Parser;
use qnsim_rs::report::render_text;
use qnsim_rs::sim::{NetworkConfig, Simulation};
use qnsim_rs::topo::{Preset, PresetOpts};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "qnsim",
    about = "Discrete-event simulator for networks of finite G/G/c/K queues"
)]
struct Args {
    /// Built-in network (ignored when --config is given)
    #[arg(long, value_enum, default_value_t = Preset::Multi, conflicts_with = "config")]
    preset: Preset,

    /// Path to a network config JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the random seed
    #[arg(long, conflicts_with = "no_seed")]
    seed: Option<u64>,

    /// Use a nondeterministic random stream
    #[arg(long)]
    no_seed: bool,

    /// Override the maximum number of random draws
    #[arg(long)]
    max_random: Option<u64>,

    /// Write the outcome as JSON to this file
    #[arg(long)]
    json_out: Option<PathBuf>,

    /// Disable logging
    #[arg(long)]
    quiet: bool,
}

fn load_config(args: &Args) -> qnsim_rs::Result<NetworkConfig> {
    let mut config = match &args.config {
        Some(path) => NetworkConfig::from_path(path)?,
        None => args.preset.build(&PresetOpts::default()),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if args.no_seed {
        config.seed = None;
    }
    if let Some(max_random) = args.max_random {
        config.max_random = max_random;
    }
    Ok(config)
}

fn run(args: &Args) -> qnsim_rs::Result<()> {
    let config = load_config(args)?;
    let mut sim = Simulation::new(&config)?;
    let outcome = sim.run();

    if let Some(path) = &args.json_out {
        fs::write(path, serde_json::to_string_pretty(&outcome)?)?;
    }
    print!("{}", render_text(&config.queues, &outcome));
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(if args.quiet {
            tracing_subscriber::EnvFilter::new("off")
        } else {
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
        })
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
