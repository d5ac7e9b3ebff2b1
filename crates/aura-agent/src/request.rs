//! Boundary validation: turns a raw [`IncomingMessagePayload`] into an
//! [`AgentRequest`] the engine can run on.

use chrono::Duration;

use aura_core::{
    AuraConfig, Channel, ContextOverrides, ConversationContext, IncomingMessagePayload, Language,
    Message,
};

use crate::error::AgentError;

/// A validated engine input.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentRequest {
    pub channel: Channel,
    pub message: String,
    pub preferred_language: Option<Language>,
    pub context: ConversationContext,
    pub history: Vec<Message>,
}

impl AgentRequest {
    /// A request on `channel` with the given context and no history.
    pub fn new(channel: Channel, message: impl Into<String>, context: ConversationContext) -> Self {
        Self {
            channel,
            message: message.into(),
            preferred_language: None,
            context,
            history: Vec::new(),
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.preferred_language = Some(language);
        self
    }

    pub fn with_history(mut self, history: Vec<Message>) -> Self {
        self.history = history;
        self
    }

    /// Validate a payload and merge its partial context over `defaults`.
    pub fn from_payload(
        payload: IncomingMessagePayload,
        defaults: &RequestDefaults,
    ) -> Result<Self, AgentError> {
        let channel = payload.channel.ok_or(AgentError::MissingChannel)?;

        let message = payload.message.unwrap_or_default();
        if message.trim().is_empty() {
            return Err(AgentError::EmptyMessage);
        }
        if message.chars().count() > defaults.max_message_chars {
            return Err(AgentError::MessageTooLong(defaults.max_message_chars));
        }

        validate_history(channel, &payload.history)?;

        let context = defaults.merge(payload.customer_name, payload.context.unwrap_or_default());

        Ok(Self {
            channel,
            message,
            preferred_language: payload.preferred_language,
            context,
            history: payload.history,
        })
    }
}

/// Enforce the history invariants: one channel, a CTA on every agent turn,
/// and room after every timestamp for the two appended turns.
pub fn validate_history(channel: Channel, history: &[Message]) -> Result<(), AgentError> {
    let headroom = Duration::milliseconds(2);
    for message in history {
        if message.timestamp.checked_add_signed(headroom).is_none() {
            return Err(AgentError::TimestampOutOfRange(message.id.clone()));
        }
        if message.channel != channel {
            return Err(AgentError::ChannelMismatch {
                message_id: message.id.clone(),
                expected: channel,
                found: message.channel,
            });
        }
        if message.is_agent() && message.cta.is_none() {
            return Err(AgentError::MissingCta(message.id.clone()));
        }
    }
    Ok(())
}

/// Server-side fallbacks for anything a payload leaves out.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDefaults {
    pub context: ConversationContext,
    pub max_message_chars: usize,
}

impl RequestDefaults {
    pub fn from_config(config: &AuraConfig) -> Self {
        Self {
            context: ConversationContext {
                customer_name: config.agent.default_customer_name.clone(),
                business_name: config.business.business_name.clone(),
                product_catalog: config.business.catalog.clone(),
                brand_tone: config.business.brand_tone,
                campaign_focus: config.business.campaign_focus.clone(),
            },
            max_message_chars: config.agent.max_message_chars,
        }
    }

    /// Overlay client-supplied fields. The top-level customer name beats
    /// the one inside `context`; blank names count as absent.
    pub fn merge(
        &self,
        customer_name: Option<String>,
        overrides: ContextOverrides,
    ) -> ConversationContext {
        let base = &self.context;
        let customer_name = non_blank(customer_name)
            .or_else(|| non_blank(overrides.customer_name))
            .unwrap_or_else(|| base.customer_name.clone());
        let business_name =
            non_blank(overrides.business_name).unwrap_or_else(|| base.business_name.clone());

        ConversationContext {
            customer_name,
            business_name,
            product_catalog: overrides
                .product_catalog
                .unwrap_or_else(|| base.product_catalog.clone()),
            brand_tone: overrides.brand_tone.unwrap_or(base.brand_tone),
            campaign_focus: overrides.campaign_focus.or_else(|| base.campaign_focus.clone()),
        }
    }
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self::from_config(&AuraConfig::default())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
