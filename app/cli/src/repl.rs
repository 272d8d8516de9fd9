//! Line-oriented front-end for a [`CommandShell`].

use std::io::Write;

use tokio::io::AsyncBufReadExt;
use tokio::io::BufReader;
use tracing::info;
use tracing::warn;
use vdisk_error::ErrorExt;
use vdisk_session::CommandShell;
use vdisk_session::Submitted;
use vdisk_session::render_items;
use vdisk_session::shell::HELP_LINE;

/// Runs the shell until stdin closes or Ctrl+C is pressed while idle.
///
/// Ctrl+C while a command runs cancels that command instead.
pub async fn run(mut shell: CommandShell) -> anyhow::Result<()> {
    println!("{}", shell.title());
    println!("🖥️ Storage Shell (Restricted Access)");
    println!("{HELP_LINE}");
    print!("{}", render_items(shell.transcript().items()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut interrupts = true;
    loop {
        prompt()?;
        let line = tokio::select! {
            line = lines.next_line() => line?,
            signal = tokio::signal::ctrl_c(), if interrupts => match signal {
                Ok(()) => {
                    println!();
                    None
                }
                Err(e) => {
                    warn!(error = %e, "Could not listen for Ctrl+C");
                    interrupts = false;
                    continue;
                }
            },
        };
        let Some(raw) = line else {
            break;
        };

        println!("$ {raw}");
        let mark = shell.transcript().len();
        match shell.submit(&raw) {
            Ok(Submitted::Dispatched) => wait_for_completion(&mut shell, interrupts).await,
            Ok(Submitted::Blank | Submitted::Rejected | Submitted::Failed) => {}
            Err(err) => {
                println!("❌ {}", err.output_msg());
                continue;
            }
        }
        print!("{}", render_items(shell.transcript().items_since(mark)));
    }

    info!(username = shell.session().username(), "Leaving shell");
    Ok(())
}

async fn wait_for_completion(shell: &mut CommandShell, mut interrupts: bool) {
    let token = shell.cancellation_token();
    loop {
        tokio::select! {
            _ = shell.wait_for_completion() => return,
            signal = tokio::signal::ctrl_c(), if interrupts => match signal {
                Ok(()) => {
                    info!("Ctrl+C, cancelling running command");
                    if let Some(token) = &token {
                        token.cancel();
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Could not listen for Ctrl+C");
                    interrupts = false;
                }
            },
        }
    }
}

fn prompt() -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()
}
