use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Enums
// =============================================================================

/// Messaging channel a conversation is scoped to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Whatsapp,
    Facebook,
    Instagram,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Whatsapp => write!(f, "whatsapp"),
            Channel::Facebook => write!(f, "facebook"),
            Channel::Instagram => write!(f, "instagram"),
        }
    }
}

impl std::str::FromStr for Channel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "whatsapp" => Ok(Channel::Whatsapp),
            "facebook" => Ok(Channel::Facebook),
            "instagram" => Ok(Channel::Instagram),
            _ => Err(format!("Unknown channel: {}", s)),
        }
    }
}

/// Who authored a message. Also used as the message `type`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Agent,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Customer => write!(f, "customer"),
            Role::Agent => write!(f, "agent"),
        }
    }
}

/// How pressing a call-to-action is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Urgency::Low => write!(f, "low"),
            Urgency::Medium => write!(f, "medium"),
            Urgency::High => write!(f, "high"),
        }
    }
}

/// Polarity of a customer message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Neutral => write!(f, "neutral"),
            Sentiment::Negative => write!(f, "negative"),
        }
    }
}

/// Register the business wants its agent to speak in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrandTone {
    #[default]
    Friendly,
    Professional,
    Casual,
}

impl fmt::Display for BrandTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrandTone::Friendly => write!(f, "friendly"),
            BrandTone::Professional => write!(f, "professional"),
            BrandTone::Casual => write!(f, "casual"),
        }
    }
}

impl std::str::FromStr for BrandTone {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "friendly" => Ok(BrandTone::Friendly),
            "professional" => Ok(BrandTone::Professional),
            "casual" => Ok(BrandTone::Casual),
            _ => Err(format!("Unknown brand tone: {}", s)),
        }
    }
}

/// Natural language of a message and of the reply rendered for it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Bn,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => write!(f, "en"),
            Language::Bn => write!(f, "bn"),
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "bn" => Ok(Language::Bn),
            _ => Err(format!("Unknown language: {}", s)),
        }
    }
}

// =============================================================================
// Reference data
// =============================================================================

/// A catalog entry used to ground CTA summaries and replies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub currency: String,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Product {
    /// Price rendered with its currency, dropping a zero fractional part.
    pub fn display_price(&self) -> String {
        if self.price.fract() == 0.0 {
            format!("{:.0} {}", self.price, self.currency)
        } else {
            format!("{:.2} {}", self.price, self.currency)
        }
    }

    /// Case-insensitive tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// Per-request business and customer context.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationContext {
    pub customer_name: String,
    pub business_name: String,
    #[serde(default)]
    pub product_catalog: Vec<Product>,
    #[serde(default)]
    pub brand_tone: BrandTone,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_focus: Option<String>,
}

/// A partial [`ConversationContext`] as sent by clients.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextOverrides {
    pub customer_name: Option<String>,
    pub business_name: Option<String>,
    pub product_catalog: Option<Vec<Product>>,
    pub brand_tone: Option<BrandTone>,
    pub campaign_focus: Option<String>,
}

// =============================================================================
// Conversation
// =============================================================================

/// Author of a message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub role: Role,
}

/// A structured recommendation attached to every agent turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub label: String,
    pub url: String,
    pub urgency: Urgency,
    pub summary: String,
}

/// One turn of a channel-scoped conversation. Never mutated once created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub author: Participant,
    pub timestamp: DateTime<Utc>,
    pub text: String,
    pub channel: Channel,
    #[serde(rename = "type")]
    pub kind: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<CallToAction>,
}

impl Message {
    pub fn is_agent(&self) -> bool {
        self.kind == Role::Agent
    }
}

/// The structured reply produced for one customer message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentResponse {
    pub reply: String,
    pub cta: CallToAction,
    pub strategy_notes: String,
    pub sentiment: Sentiment,
    pub confidence: f64,
}

/// Engine output: the response plus the extended history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentReply {
    #[serde(flatten)]
    pub response: AgentResponse,
    pub history: Vec<Message>,
}

// =============================================================================
// Boundary payload
// =============================================================================

/// Raw request body accepted at the boundary.
///
/// Every field is optional so that missing `channel` / `message` are
/// reported by validation rather than by the deserializer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomingMessagePayload {
    pub channel: Option<Channel>,
    pub message: Option<String>,
    pub customer_name: Option<String>,
    pub context: Option<ContextOverrides>,
    #[serde(default)]
    pub history: Vec<Message>,
    pub preferred_language: Option<Language>,
}
