//! CLI argument definitions for the Aura application.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use aura_core::{Channel, Language};

/// Aura - omnichannel sales agent for Bengali and English conversations.
#[derive(Parser, Debug)]
#[command(name = "aura", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Start the HTTP server (default).
    Serve {
        /// API server port.
        #[arg(short = 'p', long = "port")]
        port: Option<u16>,
    },
    /// Run the engine once and print the response JSON.
    Reply {
        /// Channel the message arrived on.
        #[arg(long, value_parser = parse_channel)]
        channel: Channel,

        /// Customer message text.
        #[arg(short = 'm', long)]
        message: String,

        /// Customer display name.
        #[arg(long)]
        customer: Option<String>,

        /// Force the reply language (en or bn).
        #[arg(long = "lang", value_parser = parse_language)]
        language: Option<Language>,

        /// JSON file holding the prior message history.
        #[arg(long)]
        history: Option<PathBuf>,
    },
}

impl CliArgs {
    /// The subcommand to run; no subcommand means `serve`.
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Serve { port: None })
    }

    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > AURA_CONFIG env var > ~/.aura/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("AURA_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }
}

/// Resolve the API server port.
///
/// Priority: --port flag > AURA_PORT env var > config file value.
pub fn resolve_port(flag: Option<u16>, config_port: u16) -> u16 {
    if let Some(p) = flag {
        return p;
    }
    if let Ok(val) = std::env::var("AURA_PORT") {
        if let Ok(p) = val.parse::<u16>() {
            return p;
        }
    }
    config_port
}

fn parse_channel(s: &str) -> Result<Channel, String> {
    s.to_lowercase().parse()
}

fn parse_language(s: &str) -> Result<Language, String> {
    s.to_lowercase().parse()
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".aura").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".aura").join("config.toml");
    }
    PathBuf::from("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_no_subcommand_means_serve() {
        let args = parse(&["aura"]);
        assert_eq!(args.command(), Command::Serve { port: None });
    }

    #[test]
    fn test_serve_port_flag() {
        let args = parse(&["aura", "serve", "--port", "8080"]);
        assert_eq!(args.command(), Command::Serve { port: Some(8080) });
        assert_eq!(resolve_port(Some(8080), 3040), 8080);
    }

    #[test]
    fn test_reply_arguments() {
        let args = parse(&[
            "aura",
            "reply",
            "--channel",
            "WhatsApp",
            "-m",
            "দাম কত?",
            "--lang",
            "bn",
            "--customer",
            "Sadia",
        ]);
        match args.command() {
            Command::Reply {
                channel,
                message,
                customer,
                language,
                history,
            } => {
                assert_eq!(channel, Channel::Whatsapp);
                assert_eq!(message, "দাম কত?");
                assert_eq!(customer.as_deref(), Some("Sadia"));
                assert_eq!(language, Some(Language::Bn));
                assert!(history.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_reply_rejects_unknown_channel() {
        let result = CliArgs::try_parse_from(["aura", "reply", "--channel", "telegram", "-m", "hi"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_flag_wins() {
        let args = parse(&["aura", "--config", "/tmp/aura.toml"]);
        assert_eq!(args.resolve_config_path(), PathBuf::from("/tmp/aura.toml"));
    }

    #[test]
    fn test_log_level_flag_overrides_config() {
        let args = parse(&["aura", "-l", "debug"]);
        assert_eq!(args.resolve_log_level("info"), "debug");
        let args = parse(&["aura"]);
        assert_eq!(args.resolve_log_level("warn"), "warn");
    }
}
