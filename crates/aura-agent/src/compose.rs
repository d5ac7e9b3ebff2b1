//! Reply composition: reply text, strategy notes, confidence and the
//! extended conversation history.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use aura_core::{
    CallToAction, Channel, ConversationContext, Language, Message, Participant, Product, Role,
    Sentiment,
};

use crate::cta::{campaign_focus, CtaPlan};
use crate::templates::{campaign_closer, render, reply_template, sentiment_opener};
use crate::types::{Classification, MatchStrength};

/// Author id of every agent turn.
pub const AGENT_PARTICIPANT_ID: &str = "aura-agent";

const MIN_CONFIDENCE: f64 = 0.05;
const MAX_CONFIDENCE: f64 = 0.99;

/// Confidence from match strength, lowered for neutral and negative
/// sentiment, clamped to `[0.05, 0.99]`.
pub fn confidence(strength: MatchStrength, sentiment: Sentiment) -> f64 {
    let adjustment = match sentiment {
        Sentiment::Positive => 0.0,
        Sentiment::Neutral => 0.1,
        Sentiment::Negative => 0.15,
    };
    let score = strength.base_confidence() - adjustment;
    // Round away float noise like 0.7999999999999999.
    let score = (score * 100.0).round() / 100.0;
    score.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}

/// Renders the customer-facing reply and the internal bookkeeping.
#[derive(Debug, Clone)]
pub struct ReplyComposer {
    agent_name: String,
}

impl ReplyComposer {
    pub fn new(agent_name: impl Into<String>) -> Self {
        Self {
            agent_name: agent_name.into(),
        }
    }

    pub fn agent_name(&self) -> &str {
        &self.agent_name
    }

    /// Render the reply in `language`: an optional sentiment opener, the
    /// intent template, and an optional campaign closer.
    pub fn compose_reply(
        &self,
        language: Language,
        classification: Classification,
        sentiment: Sentiment,
        context: &ConversationContext,
        product: Option<&Product>,
    ) -> String {
        let template = reply_template(classification.intent, language);
        let body = match product {
            Some(p) => {
                let price = p.display_price();
                let benefit = highlight(p);
                render(
                    template.with_product,
                    &[
                        ("customer", &context.customer_name),
                        ("business", &context.business_name),
                        ("product", &p.name),
                        ("price", &price),
                        ("benefit", &benefit),
                    ],
                )
            }
            None => render(
                template.without_product,
                &[
                    ("customer", &context.customer_name),
                    ("business", &context.business_name),
                ],
            ),
        };

        let mut parts: Vec<String> = Vec::with_capacity(3);
        if let Some(opener) = sentiment_opener(sentiment, language) {
            parts.push(opener.to_string());
        }
        parts.push(body);
        if let Some(focus) = campaign_focus(context) {
            parts.push(render(campaign_closer(language), &[("campaign", focus)]));
        }
        parts.join(" ")
    }

    /// Internal English rationale, e.g. "High-urgency discount request
    /// detected (strong match); sentiment negative; prioritizing retention CTA."
    pub fn strategy_notes(
        &self,
        classification: Classification,
        sentiment: Sentiment,
        plan: &CtaPlan,
        context: &ConversationContext,
        product: Option<&Product>,
    ) -> String {
        let mut notes = format!(
            "{}-urgency {} detected ({} match); sentiment {}; {}.",
            capitalize(&plan.cta.urgency.to_string()),
            classification.intent.describe(),
            classification.match_strength,
            sentiment,
            plan.kind.focus(),
        );
        if let Some(focus) = campaign_focus(context) {
            notes.push_str(&format!(" Campaign focus: {}.", focus));
        }
        if let Some(p) = product {
            notes.push_str(&format!(" Anchored on product {}.", p.name));
        }
        notes
    }

    /// Return a new history: `history` followed by the customer turn and
    /// the agent turn. The input slice is never modified.
    ///
    /// The customer turn is stamped at `now`, or 1 ms after the latest
    /// existing timestamp if that is later; the agent turn follows 1 ms on.
    /// Timestamps saturate at the end of the representable range.
    #[allow(clippy::too_many_arguments)]
    pub fn extend_history(
        &self,
        history: &[Message],
        channel: Channel,
        customer_name: &str,
        customer_text: &str,
        reply: &str,
        cta: &CallToAction,
        now: DateTime<Utc>,
    ) -> Vec<Message> {
        let customer_at = history
            .iter()
            .map(|m| next_tick(m.timestamp))
            .fold(now, |acc, t| acc.max(t));
        let agent_at = next_tick(customer_at);

        let customer_id = message_id(channel, history.len(), history.last(), Role::Customer);
        let customer = Message {
            id: customer_id,
            author: Participant {
                id: format!("customer-{}", channel),
                name: customer_name.to_string(),
                role: Role::Customer,
            },
            timestamp: customer_at,
            text: customer_text.to_string(),
            channel,
            kind: Role::Customer,
            cta: None,
        };

        let agent_id = message_id(channel, history.len() + 1, Some(&customer), Role::Agent);
        let agent = Message {
            id: agent_id,
            author: Participant {
                id: AGENT_PARTICIPANT_ID.to_string(),
                name: self.agent_name.clone(),
                role: Role::Agent,
            },
            timestamp: agent_at,
            text: reply.to_string(),
            channel,
            kind: Role::Agent,
            cta: Some(cta.clone()),
        };

        let mut extended = Vec::with_capacity(history.len() + 2);
        extended.extend_from_slice(history);
        extended.push(customer);
        extended.push(agent);
        extended
    }
}

/// One millisecond after `at`, saturating at the latest representable time.
fn next_tick(at: DateTime<Utc>) -> DateTime<Utc> {
    at.checked_add_signed(Duration::milliseconds(1))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Name-based id chained to the previous message, so identical inputs
/// always produce identical ids.
fn message_id(channel: Channel, position: usize, previous: Option<&Message>, role: Role) -> String {
    let previous = previous.map(|m| m.id.as_str()).unwrap_or("root");
    let key = format!("aura:{}:{}:{}:{}", channel, position, previous, role);
    Uuid::new_v5(&Uuid::NAMESPACE_OID, key.as_bytes()).to_string()
}

/// First benefit, else the description, else the product name.
fn highlight(product: &Product) -> String {
    let raw = product
        .benefits
        .iter()
        .map(|b| b.trim())
        .find(|b| !b.is_empty())
        .unwrap_or_else(|| product.description.trim());
    let raw = raw.trim_end_matches(['.', '।']);
    if raw.is_empty() {
        product.name.clone()
    } else {
        raw.to_string()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::contains_bengali;
    use crate::types::{CtaKind, Intent};
    use aura_core::{BrandTone, Urgency};
    use chrono::TimeZone;

    fn saree() -> Product {
        Product {
            id: "jamdani-saree".to_string(),
            name: "Handwoven Jamdani Saree".to_string(),
            description: "Soft cotton jamdani.".to_string(),
            price: 4500.0,
            currency: "BDT".to_string(),
            benefits: vec!["Handwoven by Narayanganj artisans.".to_string()],
            tags: vec!["price".to_string()],
        }
    }

    fn context() -> ConversationContext {
        ConversationContext {
            customer_name: "Sadia".to_string(),
            business_name: "Aura Lifestyle".to_string(),
            product_catalog: vec![saree()],
            brand_tone: BrandTone::Friendly,
            campaign_focus: None,
        }
    }

    fn cta() -> CallToAction {
        CallToAction {
            label: "Learn More".to_string(),
            url: "https://shop.aura.example/catalog".to_string(),
            urgency: Urgency::Low,
            summary: "Browse the collection.".to_string(),
        }
    }

    fn strong(intent: Intent) -> Classification {
        Classification {
            intent,
            match_strength: MatchStrength::Strong,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap()
    }

    fn composer() -> ReplyComposer {
        ReplyComposer::new("Aura Agent")
    }

    // ---- Confidence ----

    #[test]
    fn test_confidence_table() {
        assert_eq!(confidence(MatchStrength::Strong, Sentiment::Positive), 0.9);
        assert_eq!(confidence(MatchStrength::Strong, Sentiment::Neutral), 0.8);
        assert_eq!(confidence(MatchStrength::Weak, Sentiment::Neutral), 0.5);
        assert_eq!(confidence(MatchStrength::Absent, Sentiment::Neutral), 0.25);
        assert_eq!(confidence(MatchStrength::Absent, Sentiment::Negative), 0.2);
    }

    #[test]
    fn test_negative_below_neutral_at_equal_strength() {
        for strength in [MatchStrength::Strong, MatchStrength::Weak, MatchStrength::Absent] {
            assert!(confidence(strength, Sentiment::Negative) < confidence(strength, Sentiment::Neutral));
        }
    }

    #[test]
    fn test_confidence_bounds() {
        for strength in [MatchStrength::Strong, MatchStrength::Weak, MatchStrength::Absent] {
            for sentiment in [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative] {
                let c = confidence(strength, sentiment);
                assert!((MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&c));
            }
        }
    }

    // ---- Reply ----

    #[test]
    fn test_reply_interpolates_product() {
        let ctx = context();
        let reply = composer().compose_reply(
            Language::En,
            strong(Intent::PriceInquiry),
            Sentiment::Neutral,
            &ctx,
            Some(&ctx.product_catalog[0]),
        );
        assert!(reply.starts_with("Hi Sadia!"));
        assert!(reply.contains("Handwoven Jamdani Saree is priced at 4500 BDT"));
        assert!(reply.contains("Handwoven by Narayanganj artisans. Tap"));
        assert!(!reply.contains('{'));
    }

    #[test]
    fn test_placeholder_in_customer_name_stays_literal() {
        let mut ctx = context();
        ctx.customer_name = "{price}".to_string();
        let reply = composer().compose_reply(
            Language::En,
            strong(Intent::PriceInquiry),
            Sentiment::Neutral,
            &ctx,
            Some(&ctx.product_catalog[0]),
        );
        assert!(reply.starts_with("Hi {price}!"));
        assert!(reply.contains("is priced at 4500 BDT"));
    }

    #[test]
    fn test_bengali_reply_without_product() {
        let ctx = context();
        let reply = composer().compose_reply(
            Language::Bn,
            strong(Intent::DeliveryInquiry),
            Sentiment::Neutral,
            &ctx,
            None,
        );
        assert!(contains_bengali(&reply));
        assert!(reply.contains("Sadia"));
        assert!(reply.contains("Aura Lifestyle"));
        assert!(!reply.contains('{'));
    }

    #[test]
    fn test_negative_reply_opens_with_apology() {
        let reply = composer().compose_reply(
            Language::En,
            Classification::fallback(),
            Sentiment::Negative,
            &context(),
            None,
        );
        assert!(reply.starts_with("We're truly sorry"));
    }

    #[test]
    fn test_campaign_closer_in_reply() {
        let mut ctx = context();
        ctx.campaign_focus = Some("Eid Sale".to_string());
        let reply = composer().compose_reply(
            Language::En,
            Classification::fallback(),
            Sentiment::Neutral,
            &ctx,
            None,
        );
        assert!(reply.ends_with("Don't miss our Eid Sale campaign!"));
    }

    #[test]
    fn test_highlight_falls_back_to_description_then_name() {
        let mut p = saree();
        p.benefits.clear();
        assert_eq!(highlight(&p), "Soft cotton jamdani");
        p.description.clear();
        assert_eq!(highlight(&p), "Handwoven Jamdani Saree");
    }

    // ---- Strategy notes ----

    #[test]
    fn test_strategy_notes_format() {
        let plan = CtaPlan {
            kind: CtaKind::RetentionDiscount,
            cta: CallToAction {
                urgency: Urgency::High,
                ..cta()
            },
        };
        let notes = composer().strategy_notes(
            strong(Intent::DiscountInquiry),
            Sentiment::Negative,
            &plan,
            &context(),
            None,
        );
        assert_eq!(
            notes,
            "High-urgency discount request detected (strong match); sentiment negative; prioritizing retention CTA."
        );
    }

    #[test]
    fn test_strategy_notes_mention_campaign_and_product() {
        let mut ctx = context();
        ctx.campaign_focus = Some("Eid Sale".to_string());
        let plan = CtaPlan {
            kind: CtaKind::PriceDetails,
            cta: cta(),
        };
        let notes = composer().strategy_notes(
            strong(Intent::PriceInquiry),
            Sentiment::Neutral,
            &plan,
            &ctx,
            Some(&ctx.product_catalog[0]),
        );
        assert!(notes.starts_with("Low-urgency price inquiry"));
        assert!(notes.contains("Campaign focus: Eid Sale."));
        assert!(notes.ends_with("Anchored on product Handwoven Jamdani Saree."));
    }

    // ---- History ----

    #[test]
    fn test_history_from_empty() {
        let history = composer().extend_history(
            &[],
            Channel::Whatsapp,
            "Sadia",
            "দাম কত?",
            "reply",
            &cta(),
            now(),
        );
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].kind, Role::Customer);
        assert!(history[0].cta.is_none());
        assert_eq!(history[0].author.id, "customer-whatsapp");
        assert_eq!(history[0].timestamp, now());
        assert_eq!(history[1].kind, Role::Agent);
        assert_eq!(history[1].cta, Some(cta()));
        assert_eq!(history[1].author.name, "Aura Agent");
        assert!(history[1].timestamp > history[0].timestamp);
        assert_ne!(history[0].id, history[1].id);
    }

    #[test]
    fn test_history_keeps_prefix_and_stays_monotonic() {
        let first = composer().extend_history(
            &[],
            Channel::Instagram,
            "Sadia",
            "hi",
            "hello",
            &cta(),
            now(),
        );
        // Clock went backwards relative to the stored history.
        let earlier = now() - Duration::hours(1);
        let second = composer().extend_history(
            &first,
            Channel::Instagram,
            "Sadia",
            "price?",
            "it is 4500",
            &cta(),
            earlier,
        );
        assert_eq!(second.len(), 4);
        assert_eq!(&second[..2], &first[..]);
        for pair in second.windows(2) {
            assert!(pair[1].timestamp > pair[0].timestamp);
        }
    }

    #[test]
    fn test_history_at_end_of_time_saturates() {
        let composer = composer();
        let mut history = composer.extend_history(
            &[],
            Channel::Whatsapp,
            "Sadia",
            "hi",
            "hello",
            &cta(),
            now(),
        );
        history[1].timestamp = DateTime::<Utc>::MAX_UTC;

        let extended = composer.extend_history(
            &history,
            Channel::Whatsapp,
            "Sadia",
            "price?",
            "it is 4500",
            &cta(),
            now(),
        );
        assert_eq!(extended.len(), 4);
        assert_eq!(extended[2].timestamp, DateTime::<Utc>::MAX_UTC);
        assert_eq!(extended[3].timestamp, DateTime::<Utc>::MAX_UTC);
    }

    #[test]
    fn test_next_tick() {
        assert_eq!(next_tick(now()), now() + Duration::milliseconds(1));
        assert_eq!(next_tick(DateTime::<Utc>::MAX_UTC), DateTime::<Utc>::MAX_UTC);
    }

    #[test]
    fn test_message_ids_are_deterministic() {
        let run = || {
            composer().extend_history(
                &[],
                Channel::Facebook,
                "Sadia",
                "hi",
                "hello",
                &cta(),
                now(),
            )
        };
        let a = run();
        let b = run();
        assert_eq!(a[0].id, b[0].id);
        assert_eq!(a[1].id, b[1].id);
    }

    #[test]
    fn test_message_ids_differ_by_channel() {
        let a = message_id(Channel::Facebook, 0, None, Role::Customer);
        let b = message_id(Channel::Whatsapp, 0, None, Role::Customer);
        assert_ne!(a, b);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("medium"), "Medium");
        assert_eq!(capitalize(""), "");
    }
}
