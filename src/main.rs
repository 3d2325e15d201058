use std::path::PathBuf;

use clap::{Parser, Subcommand};
use vault_version::config::{ClientConfig, log_path};
use vault_version::kv::HttpKeyValueClient;
use vault_version::{commands, logging};

#[derive(Parser)]
#[command(name = "vault-version")]
#[command(version, about = "Parse and compare versions, and work with key/value secrets")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write log lines as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the canonical form and components of a version
    Parse { version: String },
    /// Compare two versions
    Compare { a: String, b: String },
    /// Sort versions in ascending order
    Sort {
        #[arg(required = true)]
        versions: Vec<String>,
    },
    /// Key/value secret operations
    Kv {
        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[command(subcommand)]
        action: KvAction,
    },
}

#[derive(Subcommand)]
enum KvAction {
    /// List keys below a path
    List {
        #[arg(default_value = "")]
        path: String,
    },
    /// Read a secret
    Get { path: String },
    /// Delete one or more secrets
    Delete {
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(&log_path(), cli.verbose, cli.log_json)?;

    let output = match cli.command {
        Command::Parse { version } => commands::parse(&version)?,
        Command::Compare { a, b } => commands::compare(&a, &b)?,
        Command::Sort { versions } => commands::sort(&versions)?,
        Command::Kv { config, action } => tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(run_kv(config, action))?,
    };

    println!("{}", output);
    Ok(())
}

async fn run_kv(config: Option<PathBuf>, action: KvAction) -> anyhow::Result<String> {
    let config = ClientConfig::load(config.as_deref())?;
    let client = HttpKeyValueClient::new(&config)?;

    match action {
        KvAction::List { path } => commands::list(&client, &path).await,
        KvAction::Get { path } => commands::get(&client, &path).await,
        KvAction::Delete { paths } => commands::delete(&client, &paths).await,
    }
}
