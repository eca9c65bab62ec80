//! Terminal front end for the showcase
//!
//! Line-oriented: each input line is one command against the controller.
//! Mint and analyze return immediately and land in the background; `wait`
//! (or quitting) blocks until they have.

pub mod colors;
mod commands;
mod render;

pub use commands::Command;

use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, warn};

use crate::controller::Controller;
use crate::error::Result;
use crate::selection::Toggled;
use crate::state::{MINT_EXHAUSTED_NOTICE, MintOutcome};

/// What the loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Repl {
    controller: Arc<Controller>,
    /// Print a JSON snapshot after every state-changing command
    json: bool,
}

impl Repl {
    pub fn new(controller: Arc<Controller>) -> Self {
        Self {
            controller,
            json: false,
        }
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Read commands from stdin until `quit` or EOF
    pub async fn run(&self) -> anyhow::Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();
        self.run_with(stdin, &mut stdout).await
    }

    pub async fn run_with<R, W>(&self, input: R, output: &mut W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        output.write_all(b"zen> ").await?;
        output.flush().await?;

        while let Some(line) = lines.next_line().await? {
            let (text, flow) = match Command::parse(&line) {
                Ok(Some(cmd)) => {
                    debug!("[REPL] {:?}", cmd);
                    match self.execute(&cmd).await {
                        Ok(result) => result,
                        Err(e) => (colors::error(&e.to_string()), Flow::Continue),
                    }
                }
                Ok(None) => (String::new(), Flow::Continue),
                Err(e) => (colors::error(&e.to_string()), Flow::Continue),
            };
            if !text.is_empty() {
                output.write_all(text.as_bytes()).await?;
                if !text.ends_with('\n') {
                    output.write_all(b"\n").await?;
                }
            }
            if flow == Flow::Exit {
                break;
            }
            output.write_all(b"zen> ").await?;
            output.flush().await?;
        }

        self.controller.wait_idle().await;
        output.flush().await?;
        Ok(())
    }

    /// Run one command and return its rendered output
    pub async fn execute(&self, cmd: &Command) -> Result<(String, Flow)> {
        let controller = &self.controller;
        let mut mutated = true;

        let mut text = match cmd {
            Command::Catalog => {
                mutated = false;
                render::catalog_panel(&*controller.state().await)
            }
            Command::Toggle(id) => match controller.toggle(id).await? {
                Toggled::Added => colors::success(&format!("+ {}", id)),
                Toggled::Removed => colors::status(&format!("- {}", id)),
            },
            Command::Wallet => {
                controller.state().await.open_wallet_prompt();
                render::wallet_prompt()
            }
            Command::Connect(provider) => {
                let wallet = controller.connect(*provider).await;
                format!("Connected {}: {}", provider.display_name(), render::wallet_line(&wallet))
            }
            Command::Mint => match controller.simulate_mint().await {
                MintOutcome::WalletRequired => {
                    format!("{}\n{}", colors::warning("Connect a wallet first."), render::wallet_prompt())
                }
                MintOutcome::Busy => colors::status("Minting..."),
                MintOutcome::Exhausted => colors::warning(MINT_EXHAUSTED_NOTICE),
                MintOutcome::Started(id) => colors::status(&format!("Minting {}...", id)),
            },
            Command::Analyze => {
                controller.analyze().await;
                colors::status("READING ON-CHAIN METADATA...")
            }
            Command::Insight => {
                mutated = false;
                match controller.insight().await {
                    Some(insight) => render::insight_panel(&insight),
                    None => colors::status("No analysis yet. Run `analyze`."),
                }
            }
            Command::Spin(frames) => {
                let frames = frames.unwrap_or(controller.config().default_spin_frames);
                match controller.spin(frames).await {
                    Some(sample) => format!(
                        "rot {:.2}° vel {:.3} tilt {:.2}°",
                        sample.stage.rotate_y, sample.velocity, sample.stage.rotate_z
                    ),
                    None => String::new(),
                }
            }
            Command::Drag { delta_x, speed } => {
                controller.drag(*delta_x, *speed).await;
                render::status_panel(&*controller.state().await)
            }
            Command::Fling(speed) => {
                controller.fling(*speed).await;
                render::status_panel(&*controller.state().await)
            }
            Command::Ring => {
                mutated = false;
                render::ring_panel(&*controller.state().await)
            }
            Command::Status => {
                mutated = false;
                render::status_panel(&*controller.state().await)
            }
            Command::Timeline => {
                mutated = false;
                render::timeline_panel(&*controller.state().await)
            }
            Command::Wait => {
                controller.wait_idle().await;
                render::status_panel(&*controller.state().await)
            }
            Command::Help => {
                mutated = false;
                Command::help().to_string()
            }
            Command::Quit => return Ok((colors::status("Goodbye."), Flow::Exit)),
        };

        if self.json && mutated {
            match serde_json::to_string(&controller.snapshot().await) {
                Ok(json) => {
                    text.push('\n');
                    text.push_str(&json);
                }
                Err(e) => warn!("[REPL] snapshot serialization failed: {}", e),
            }
        }
        Ok((text, Flow::Continue))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CredzConfig;

    fn repl() -> Repl {
        let config = CredzConfig {
            mint_delay_ms: 5,
            analyze_delay_ms: 5,
            ..CredzConfig::default()
        };
        Repl::new(Arc::new(Controller::with_seed(config, 3)))
    }

    #[tokio::test]
    async fn test_scripted_session() {
        let script = "connect phantom\nmint\nwait\ntoggle web3-1\nanalyze\nwait\ninsight\nquit\nstatus\n";
        let mut out = Vec::new();
        let repl = repl();
        repl.run_with(script.as_bytes(), &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("8xP..."));
        assert!(text.contains("Minting pioneer-1"));
        assert!(text.contains("Portfolio Narrative"));
        assert!(text.contains("Goodbye."));

        let snapshot = repl.controller.snapshot().await;
        assert_eq!(snapshot.active, vec!["pioneer-1", "web3-1"]);
    }

    #[tokio::test]
    async fn test_errors_do_not_stop_loop() {
        let mut out = Vec::new();
        repl()
            .run_with("toggle nope\nbogus\nhelp\n".as_bytes(), &mut out)
            .await
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("unknown credential id: nope"));
        assert!(text.contains("unknown command"));
        assert!(text.contains("Commands:"));
    }

    #[tokio::test]
    async fn test_json_snapshot_only_on_mutation() {
        let repl = repl().with_json(true);
        let (text, _) = repl.execute(&Command::Toggle("spec-1".into())).await.unwrap();
        assert!(text.contains("\"active\":[\"spec-1\"]"));

        let (text, _) = repl.execute(&Command::Help).await.unwrap();
        assert!(!text.contains("\"active\""));
    }

    #[tokio::test]
    async fn test_mint_without_wallet_opens_prompt() {
        let repl = repl();
        let (text, flow) = repl.execute(&Command::Mint).await.unwrap();
        assert_eq!(flow, Flow::Continue);
        assert!(text.contains("Connect Wallet"));
        assert!(repl.controller.snapshot().await.wallet_prompt_open);
    }
}
