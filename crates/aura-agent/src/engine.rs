//! Pipeline orchestrator: wires the five stages together.

use chrono::{DateTime, Utc};
use tracing::debug;

use aura_core::{AgentReply, AgentResponse, AuraConfig};

use crate::compose::{confidence, ReplyComposer};
use crate::cta::{select_product, CtaStrategist};
use crate::intent::IntentClassifier;
use crate::language::{normalize, resolve_language};
use crate::request::AgentRequest;
use crate::sentiment::SentimentAnalyzer;

/// Stateless response engine. Compiled rule tables are built once in
/// [`AgentEngine::new`] and shared by every call.
pub struct AgentEngine {
    classifier: IntentClassifier,
    sentiment: SentimentAnalyzer,
    strategist: CtaStrategist,
    composer: ReplyComposer,
}

impl AgentEngine {
    pub fn new(strategist: CtaStrategist, composer: ReplyComposer) -> Self {
        Self {
            classifier: IntentClassifier::new(),
            sentiment: SentimentAnalyzer::new(),
            strategist,
            composer,
        }
    }

    pub fn from_config(config: &AuraConfig) -> Self {
        Self::new(
            CtaStrategist::new(config.links.clone()),
            ReplyComposer::new(config.agent.agent_name.clone()),
        )
    }

    /// Run the pipeline with the wall clock.
    pub fn respond(&self, request: &AgentRequest) -> AgentReply {
        self.respond_at(request, Utc::now())
    }

    /// Run the pipeline with a fixed clock. Never fails: empty or
    /// unmatched input falls back to the general intent, neutral
    /// sentiment and a generic CTA.
    pub fn respond_at(&self, request: &AgentRequest, now: DateTime<Utc>) -> AgentReply {
        let context = &request.context;

        let language = resolve_language(&request.message, request.preferred_language);
        let normalized = normalize(&request.message, language);
        let classification = self.classifier.classify(&normalized);
        let sentiment = self.sentiment.analyze(&normalized);

        let product = select_product(classification.intent, &context.product_catalog);
        let plan = self
            .strategist
            .plan(classification, sentiment, context, product);

        let reply = self
            .composer
            .compose_reply(language, classification, sentiment, context, product);
        let strategy_notes =
            self.composer
                .strategy_notes(classification, sentiment, &plan, context, product);
        let confidence = confidence(classification.match_strength, sentiment);

        debug!(
            channel = %request.channel,
            language = %language,
            intent = %classification.intent,
            strength = %classification.match_strength,
            sentiment = %sentiment,
            urgency = %plan.cta.urgency,
            confidence,
            "Composed agent response"
        );

        let history = self.composer.extend_history(
            &request.history,
            request.channel,
            &context.customer_name,
            request.message.trim(),
            &reply,
            &plan.cta,
            now,
        );

        AgentReply {
            response: AgentResponse {
                reply,
                cta: plan.cta,
                strategy_notes,
                sentiment,
                confidence,
            },
            history,
        }
    }
}

impl Default for AgentEngine {
    fn default() -> Self {
        Self::from_config(&AuraConfig::default())
    }
}
