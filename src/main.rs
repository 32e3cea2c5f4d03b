use clap::Parser;
use logshed_core::Config;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "logshed",
    about = "Split network flow logs into per-destination JSON feeds"
)]
struct Cli {
    /// Input file of raw flow-log lines (`-` reads stdin).
    #[arg(long, short = 'i')]
    input: Option<String>,

    /// Directory receiving one `<destination>.txt` artifact each.
    #[arg(long, short = 'o')]
    output_dir: Option<PathBuf>,

    /// TOML config file layered over the built-in defaults.
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Destination name for rejected lines; enables reject auditing.
    #[arg(long)]
    rejects: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(input) = cli.input {
        config.input.path = input;
    }
    if let Some(dir) = cli.output_dir {
        config.output.dir = dir;
    }
    if let Some(rejects) = cli.rejects {
        config.output.rejects = rejects;
    }

    logshed::pipeline::run(&config).await?;
    Ok(())
}
