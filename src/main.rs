use anyhow::{bail, Context, Result};
use base64::{engine::general_purpose, Engine};
use bravia_remote::comms::local_api;
use bravia_remote::tv::{CommandTable, Config, IrccClient};
use bravia_remote::utils;
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(name = "bravia-remote", version, about = "Web remote for Sony Bravia TVs (IRCC)")]
struct AppCli {
    /// Config file path
    #[arg(short, long, default_value = "remote.json", global = true)]
    config: String,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server (remote page + API)
    Serve {
        #[arg(long, default_value_t = 8080)]
        port: u16,
        /// Render the remote page and serve static assets
        #[arg(long, default_value_t = false)]
        with_ui: bool,
    },
    /// Send one command to the TV
    Send {
        /// Command name, e.g. VolumeUp
        #[arg(required_unless_present = "code", conflicts_with = "code")]
        name: Option<String>,
        /// Raw base64 IRCC code instead of a name
        #[arg(long)]
        code: Option<String>,
    },
    /// List known command names and codes
    List,
}

async fn send(config: Config, name: Option<String>, code: Option<String>) -> Result<()> {
    let code = match (name, code) {
        (Some(name), _) => match CommandTable::global().lookup(&name) {
            Some(code) => code.to_string(),
            None => bail!("unknown command: {name} (see `bravia-remote list`)"),
        },
        (None, Some(code)) => {
            general_purpose::STANDARD
                .decode(&code)
                .with_context(|| format!("{code} is not a base64 IRCC code"))?;
            code
        }
        (None, None) => bail!("either a command name or --code is required"),
    };

    let client = IrccClient::new(config.device);
    client.dispatch(&code).await.context("sending command")?;
    info!(code = %code, "command sent");
    Ok(())
}

fn list() {
    for (name, code) in CommandTable::global().iter() {
        println!("{name:<32} {code}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = AppCli::parse();
    utils::logging::init(args.verbose);

    match args.command {
        Commands::Serve { port, with_ui } => {
            let config = Config::load(&args.config)?;
            local_api::serve(config, port, with_ui).await?;
        }
        Commands::Send { name, code } => {
            let config = Config::load(&args.config)?;
            send(config, name, code).await?;
        }
        Commands::List => list(),
    }

    Ok(())
}
