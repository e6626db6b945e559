use anyhow::Context;
use std::convert::TryFrom;
use std::fmt;
use std::fmt::Display;

use crate::types::status::ElevatorStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Pickup { pickup: u8, dest: u8 },
    Step(u32),
    Status,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Distance(u32),
    Stepped(u32),
    Status(Vec<ElevatorStatus>),
}

impl Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Pickup { pickup, dest } => write!(f, "pickup {pickup} {dest}"),
            Command::Step(n) => write!(f, "step {n}"),
            Command::Status => write!(f, "status"),
        }
    }
}

impl Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Distance(d) => write!(f, "assigned, estimated distance {d}"),
            Reply::Stepped(n) => write!(f, "stepped {n}"),
            Reply::Status(lst) => {
                for (i, status) in lst.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{status}")?;
                }
                Ok(())
            }
        }
    }
}

fn parse_floor(arg: Option<&str>, what: &str) -> anyhow::Result<u8> {
    let raw = arg.with_context(|| format!("missing {what} floor"))?;
    raw.parse::<u8>()
        .with_context(|| format!("failed to parse '{raw}' as {what} floor"))
}

impl TryFrom<&str> for Command {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> anyhow::Result<Self> {
        let mut parts = value.split_whitespace();
        let Some(cmd) = parts.next() else {
            anyhow::bail!("empty command");
        };

        let command = match cmd.to_ascii_lowercase().as_str() {
            "p" | "pickup" => {
                let pickup = parse_floor(parts.next(), "pickup")?;
                let dest = parse_floor(parts.next(), "destination")?;
                Command::Pickup { pickup, dest }
            }
            "s" | "step" => match parts.next() {
                Some(n) => Command::Step(
                    n.parse::<u32>()
                        .with_context(|| format!("failed to parse '{n}' as step count"))?,
                ),
                None => Command::Step(1),
            },
            "status" => Command::Status,
            other => anyhow::bail!("unknown command: {other}"),
        };

        if let Some(extra) = parts.next() {
            anyhow::bail!("unexpected trailing argument '{extra}' in '{value}'");
        }
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_forms() {
        assert_eq!(
            Command::try_from("p 3 5").unwrap(),
            Command::Pickup { pickup: 3, dest: 5 }
        );
        assert_eq!(
            Command::try_from("PICKUP 1 6").unwrap(),
            Command::Pickup { pickup: 1, dest: 6 }
        );
        assert_eq!(Command::try_from("s").unwrap(), Command::Step(1));
        assert_eq!(Command::try_from("step 4").unwrap(), Command::Step(4));
        assert_eq!(Command::try_from("  status ").unwrap(), Command::Status);
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(Command::try_from("").is_err());
        assert!(Command::try_from("pickup 3").is_err());
        assert!(Command::try_from("pickup x 3").is_err());
        assert!(Command::try_from("step 1 2").is_err());
        assert!(Command::try_from("open").is_err());
    }

    #[test]
    fn display_parses_back() {
        let cmd = Command::Pickup { pickup: 2, dest: 9 };
        assert_eq!(Command::try_from(cmd.to_string().as_str()).unwrap(), cmd);
    }
}
