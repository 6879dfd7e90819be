use clap::Parser;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use studytrack::cli::commands::{Cli, Commands};
use studytrack::cli::{self, Ctx};

const LOG_ENV: &str = "STUDYTRACK_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn main() {
    init_tracing();

    let cli_args = Cli::parse();
    let ctx = Ctx {
        json: cli_args.json,
        plan: cli_args.plan.clone(),
        data_dir: cli_args.data_dir.clone(),
    };

    let exit_code = match cli_args.command {
        Commands::Init { demo } => cli::init::run(demo, &ctx),
        Commands::Plan(cmd) => cli::plan::run(cmd, &ctx),
        Commands::Study(cmd) => cli::study::run(cmd, &ctx),
        Commands::Concept(cmd) => cli::concept::run(cmd, &ctx),
        Commands::Quiz(cmd) => cli::quiz::run(cmd, &ctx),
        Commands::Report(cmd) => cli::report::run(cmd, &ctx),
        Commands::Open { fragment } => cli::open::run(&fragment, &ctx),
        Commands::Status => cli::status::run(&ctx),
    };

    process::exit(exit_code);
}
