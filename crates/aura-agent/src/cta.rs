//! Call-to-action strategy.
//!
//! Maps `(intent, sentiment, match strength)` to a CTA family and urgency,
//! grounds the summary on a matching catalog product and phrases it in the
//! brand's tone. Tone never changes urgency or destination.

use aura_core::config::LinkConfig;
use aura_core::{CallToAction, ConversationContext, Product, Sentiment, Urgency};

use crate::templates::{cta_summary_template, render};
use crate::types::{Classification, CtaKind, Intent, MatchStrength};

/// The strategist's decision: which CTA family, and the rendered CTA.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CtaPlan {
    pub kind: CtaKind,
    pub cta: CallToAction,
}

/// First catalog product sharing a tag with the intent's category.
pub fn select_product(intent: Intent, catalog: &[Product]) -> Option<&Product> {
    let tags = intent.category_tags();
    catalog
        .iter()
        .find(|product| tags.iter().any(|tag| product.has_tag(tag)))
}

/// Choose the CTA family and urgency.
pub fn choose_kind(
    intent: Intent,
    sentiment: Sentiment,
    strength: MatchStrength,
) -> (CtaKind, Urgency) {
    match intent {
        Intent::OrderConfirmation => (CtaKind::ConfirmOrder, Urgency::High),
        Intent::DiscountInquiry if sentiment == Sentiment::Negative => {
            (CtaKind::RetentionDiscount, Urgency::High)
        }
        Intent::DiscountInquiry => (CtaKind::DiscountOffer, Urgency::Medium),
        Intent::PriceInquiry => {
            let urgency = if strength == MatchStrength::Strong || sentiment == Sentiment::Positive
            {
                Urgency::Medium
            } else {
                Urgency::Low
            };
            (CtaKind::PriceDetails, urgency)
        }
        Intent::DeliveryInquiry => {
            let urgency = if sentiment == Sentiment::Negative {
                Urgency::Medium
            } else {
                Urgency::Low
            };
            (CtaKind::DeliveryInfo, urgency)
        }
        Intent::General => (CtaKind::LearnMore, Urgency::Low),
    }
}

/// Builds CTAs against the configured link destinations.
#[derive(Debug, Clone)]
pub struct CtaStrategist {
    links: LinkConfig,
}

impl CtaStrategist {
    pub fn new(links: LinkConfig) -> Self {
        Self { links }
    }

    /// Produce the CTA for a classified message. Always returns a CTA.
    pub fn plan(
        &self,
        classification: Classification,
        sentiment: Sentiment,
        context: &ConversationContext,
        product: Option<&Product>,
    ) -> CtaPlan {
        let (kind, urgency) = choose_kind(
            classification.intent,
            sentiment,
            classification.match_strength,
        );

        let subject = match product {
            Some(p) => format!("{} at {}", p.name, p.display_price()),
            None => format!("the {} collection", context.business_name),
        };
        let mut summary = render(
            cta_summary_template(kind, context.brand_tone),
            &[("subject", &subject)],
        );
        if let Some(focus) = campaign_focus(context) {
            summary.push_str(&format!(" Part of our {} campaign.", focus));
        }

        CtaPlan {
            kind,
            cta: CallToAction {
                label: kind.label().to_string(),
                url: self.destination(kind, product),
                urgency,
                summary,
            },
        }
    }

    fn destination(&self, kind: CtaKind, product: Option<&Product>) -> String {
        let base = match (kind, product) {
            (CtaKind::ConfirmOrder, _) => &self.links.checkout_url,
            (CtaKind::RetentionDiscount | CtaKind::DiscountOffer, _) => &self.links.offers_url,
            (CtaKind::PriceDetails | CtaKind::DeliveryInfo, Some(_)) => &self.links.product_url,
            (CtaKind::PriceDetails | CtaKind::DeliveryInfo, None) => &self.links.catalog_url,
            (CtaKind::LearnMore, _) => &self.links.catalog_url,
        };
        match product {
            Some(p) if kind != CtaKind::LearnMore => {
                format!("{}?product={}", base, encode_query_value(&p.id))
            }
            _ => base.clone(),
        }
    }
}

/// Non-blank campaign focus, trimmed.
pub(crate) fn campaign_focus(context: &ConversationContext) -> Option<&str> {
    context
        .campaign_focus
        .as_deref()
        .map(str::trim)
        .filter(|f| !f.is_empty())
}

/// Percent-encode everything outside the URL unreserved set.
fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            other => out.push_str(&format!("%{:02X}", other)),
        }
    }
    out
}
