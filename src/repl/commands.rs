//! Command parsing for the terminal front end

use crate::error::{CredzError, Result};
use crate::wallet::Provider;

/// One line of user input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Catalog,
    Toggle(String),
    Connect(Provider),
    Wallet,
    Mint,
    Analyze,
    Insight,
    Spin(Option<u32>),
    Drag { delta_x: f64, speed: f64 },
    Fling(f64),
    Ring,
    Status,
    Timeline,
    Wait,
    Help,
    Quit,
}

fn number<T: std::str::FromStr>(arg: Option<&str>, usage: &str) -> Result<T> {
    arg.and_then(|a| a.parse().ok())
        .ok_or_else(|| CredzError::InvalidCommand(format!("usage: {}", usage)))
}

impl Command {
    /// Parse a line; `Ok(None)` for blank lines
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut parts = line.split_whitespace();
        let Some(head) = parts.next() else {
            return Ok(None);
        };
        let head = head.trim_start_matches('/').to_lowercase();
        let rest: Vec<&str> = parts.collect();
        let arg = rest.first().copied();

        let cmd = match head.as_str() {
            "catalog" | "list" | "ls" => Self::Catalog,
            "toggle" | "t" => match arg {
                Some(id) => Self::Toggle(id.to_string()),
                None => return Err(CredzError::InvalidCommand("usage: toggle <id>".into())),
            },
            "connect" => {
                if rest.is_empty() {
                    return Err(CredzError::InvalidCommand("usage: connect <provider>".into()));
                }
                Self::Connect(rest.join(" ").parse()?)
            }
            "wallet" => Self::Wallet,
            "mint" => Self::Mint,
            "analyze" | "analyse" => Self::Analyze,
            "insight" | "coach" => Self::Insight,
            "spin" => match arg {
                Some(_) => Self::Spin(Some(number(arg, "spin [frames]")?)),
                None => Self::Spin(None),
            },
            "drag" => Self::Drag {
                delta_x: number(arg, "drag <dx> <speed>")?,
                speed: number(rest.get(1).copied(), "drag <dx> <speed>")?,
            },
            "fling" => Self::Fling(number(arg, "fling <speed>")?),
            "ring" => Self::Ring,
            "status" => Self::Status,
            "timeline" => Self::Timeline,
            "wait" => Self::Wait,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(CredzError::InvalidCommand(format!("unknown command '{}'", other))),
        };
        Ok(Some(cmd))
    }

    pub fn help() -> &'static str {
        "Commands:
  catalog              - List credentials by category (* = active)
  toggle <id>          - Activate / deactivate a credential
  wallet               - Show wallet providers
  connect <provider>   - Connect a simulated wallet
  mint                 - Simulate minting the next credential
  analyze              - Ask the coach for an analysis
  insight              - Show the latest analysis
  spin [frames]        - Advance the carousel
  drag <dx> <speed>    - Drag the carousel by dx px at speed px/s
  fling <speed>        - Release a drag at speed px/s
  ring                 - Show card placement on the ring
  status               - Show wallet, score and carousel state
  timeline             - Show active credentials by date
  wait                 - Wait for pending mint / analysis
  quit                 - Exit"
    }
}
