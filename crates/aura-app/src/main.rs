//! Aura application binary - composition root.
//!
//! 1. Parse CLI arguments and load configuration from TOML
//! 2. Initialise tracing
//! 3. Either serve the HTTP API or answer a single message from the shell

mod cli;

use std::path::Path;

use clap::Parser;

use aura_agent::request::validate_history;
use aura_agent::{AgentEngine, AgentRequest, RequestDefaults};
use aura_api::state::AppState;
use aura_core::{AuraConfig, AuraError, Channel, ContextOverrides, Language, Message};

use cli::{CliArgs, Command};

/// Read a JSON array of prior messages.
fn load_history(path: &Path) -> Result<Vec<Message>, AuraError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Answer one message and print the response JSON to stdout.
///
/// Unlike the HTTP boundary this accepts an empty message, which exercises
/// the engine's general-intent fallback.
fn run_reply(
    config: &AuraConfig,
    channel: Channel,
    message: String,
    customer: Option<String>,
    language: Option<Language>,
    history: Vec<Message>,
) -> Result<String, Box<dyn std::error::Error>> {
    validate_history(channel, &history)?;

    let defaults = RequestDefaults::from_config(config);
    let context = defaults.merge(customer, ContextOverrides::default());
    let mut request = AgentRequest::new(channel, message, context).with_history(history);
    request.preferred_language = language;

    let engine = AgentEngine::from_config(config);
    let reply = engine.respond(&request);
    Ok(serde_json::to_string_pretty(&reply)?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config.
    let config_file = args.resolve_config_path();
    let mut config = AuraConfig::load_or_default(&config_file);

    // Tracing. RUST_LOG overrides the configured level.
    let level = args.resolve_log_level(&config.general.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(path = %config_file.display(), "Configuration loaded");

    match args.command() {
        Command::Serve { port } => {
            config.server.port = cli::resolve_port(port, config.server.port);
            tracing::info!("Starting Aura v{}", env!("CARGO_PKG_VERSION"));
            aura_api::start_server(AppState::new(config)).await?;
        }
        Command::Reply {
            channel,
            message,
            customer,
            language,
            history,
        } => {
            let history = match history {
                Some(path) => load_history(&path)?,
                None => Vec::new(),
            };
            let output = run_reply(&config, channel, message, customer, language, history)?;
            println!("{}", output);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_run_reply_prints_response_and_history() {
        let out = run_reply(
            &AuraConfig::default(),
            Channel::Whatsapp,
            "হ্যালো, এই পণ্যের দাম কত?".to_string(),
            Some("Sadia".to_string()),
            None,
            Vec::new(),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["sentiment"], "neutral");
        assert_eq!(value["history"].as_array().unwrap().len(), 2);
        assert!(value["strategyNotes"].is_string());
    }

    #[test]
    fn test_run_reply_accepts_empty_message() {
        let out = run_reply(
            &AuraConfig::default(),
            Channel::Facebook,
            String::new(),
            None,
            None,
            Vec::new(),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["cta"]["label"], "Learn More");
    }

    #[test]
    fn test_history_file_round_trip() {
        let first = run_reply(
            &AuraConfig::default(),
            Channel::Instagram,
            "hello".to_string(),
            None,
            None,
            Vec::new(),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&first).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", value["history"]).unwrap();

        let history = load_history(file.path()).unwrap();
        assert_eq!(history.len(), 2);

        let second = run_reply(
            &AuraConfig::default(),
            Channel::Instagram,
            "how much?".to_string(),
            None,
            Some(Language::En),
            history,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&second).unwrap();
        assert_eq!(value["history"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_history_on_wrong_channel_fails() {
        let first = run_reply(
            &AuraConfig::default(),
            Channel::Instagram,
            "hello".to_string(),
            None,
            None,
            Vec::new(),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&first).unwrap();
        let history: Vec<Message> = serde_json::from_value(value["history"].clone()).unwrap();

        let result = run_reply(
            &AuraConfig::default(),
            Channel::Whatsapp,
            "hi".to_string(),
            None,
            None,
            history,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_history_rejects_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = load_history(file.path()).unwrap_err();
        assert!(matches!(err, AuraError::Serialization(_)));
    }
}
