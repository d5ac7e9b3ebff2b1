//! Agent response engine for Aura.
//!
//! Turns one customer message plus its conversational context into a
//! structured [`AgentReply`](aura_core::AgentReply): reply text, a
//! call-to-action, sentiment, confidence and strategy notes, with the
//! exchange appended to the channel history.
//!
//! The pipeline runs left to right through five pure stages:
//! language resolution, intent classification, sentiment analysis,
//! CTA strategy and reply composition.

pub mod compose;
pub mod cta;
pub mod engine;
pub mod error;
pub mod intent;
pub mod language;
pub mod request;
pub mod sentiment;
pub mod templates;
pub mod types;

pub use engine::AgentEngine;
pub use error::AgentError;
pub use intent::IntentClassifier;
pub use request::{AgentRequest, RequestDefaults};
pub use sentiment::SentimentAnalyzer;
pub use types::{Classification, CtaKind, Intent, MatchStrength};
