//! `vdisk-shell`: log in, then drive the storage CLI through a restricted
//! command shell.

mod credentials;
mod logging;
mod login;
mod repl;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use vdisk_config::ConfigLoader;
use vdisk_config::ConfigOverrides;
use vdisk_config::ShellConfig;
use vdisk_exec::ArgvBuilder;
use vdisk_exec::ProcessInvoker;
use vdisk_session::AuthGate;
use vdisk_session::CommandShell;

#[derive(Parser, Debug)]
#[command(name = "vdisk-shell", version)]
#[command(about = "Restricted shell for the virtual disk storage CLI")]
struct Cli {
    /// Config file (default: ~/.vdisk-shell/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the storage CLI binary
    #[arg(long)]
    cli_bin: Option<PathBuf>,

    /// Meta-file of the virtual disk to operate on
    #[arg(long)]
    meta_file: Option<String>,

    /// Seconds before a CLI run is killed (0 uses the default)
    #[arg(long)]
    timeout: Option<u64>,

    /// Debug logging for the shell's own crates
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            cli_bin: self.cli_bin.clone(),
            meta_file: self.meta_file.clone(),
            timeout_secs: self.timeout,
            verbose: self.verbose,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loader = match &cli.config {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            ConfigLoader::from_file(path)
        }
        None => ConfigLoader::from_home(),
    };
    let file_config = loader
        .load()
        .with_context(|| format!("Failed to load {}", loader.config_file().display()))?;
    let config = ShellConfig::resolve(file_config, cli.overrides());

    let _logging = logging::init_file_logging(&config.logging);
    info!(
        cli_bin = %config.cli_bin.display(),
        meta_file = %config.meta_file,
        timeout_secs = config.timeout.as_secs(),
        "Starting vdisk-shell"
    );

    if !config.cli_bin.exists() {
        println!(
            "[WARN] CLI binary not found at {}. The shell will open, but commands will fail.",
            config.cli_bin.display()
        );
    }

    let store = credentials::build_store(&config.users)?;
    let gate = AuthGate::new(Arc::new(store));
    let session = tokio::task::spawn_blocking(move || login::login(&gate))
        .await
        .context("Login prompt stopped unexpectedly")??;

    let shell = CommandShell::new(
        session,
        ArgvBuilder::new(&config.cli_bin, &config.meta_file),
        ProcessInvoker::new(config.timeout),
    );
    repl::run(shell).await
}

#[cfg(test)]
#[path = "main.test.rs"]
mod tests;
