//! Value types shared by the pipeline stages.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Intent
// =============================================================================

/// Commerce intents a customer message can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    OrderConfirmation,
    DiscountInquiry,
    PriceInquiry,
    DeliveryInquiry,
    General,
}

impl Intent {
    /// Human-readable phrase used in strategy notes.
    pub fn describe(&self) -> &'static str {
        match self {
            Intent::OrderConfirmation => "order confirmation",
            Intent::DiscountInquiry => "discount request",
            Intent::PriceInquiry => "price inquiry",
            Intent::DeliveryInquiry => "delivery inquiry",
            Intent::General => "general inquiry",
        }
    }

    /// Product tags that make a catalog entry relevant to this intent.
    pub fn category_tags(&self) -> &'static [&'static str] {
        match self {
            Intent::OrderConfirmation => &["order", "checkout", "bestseller"],
            Intent::DiscountInquiry => &["discount", "offer", "bundle", "sale"],
            Intent::PriceInquiry => &["price", "value", "bestseller"],
            Intent::DeliveryInquiry => &["delivery", "shipping", "express"],
            Intent::General => &["featured", "bestseller", "new"],
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::OrderConfirmation => write!(f, "order_confirmation"),
            Intent::DiscountInquiry => write!(f, "discount_inquiry"),
            Intent::PriceInquiry => write!(f, "price_inquiry"),
            Intent::DeliveryInquiry => write!(f, "delivery_inquiry"),
            Intent::General => write!(f, "general"),
        }
    }
}

// =============================================================================
// MatchStrength
// =============================================================================

/// How firmly the classifier matched the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrength {
    /// A full trigger phrase was present.
    Strong,
    /// Only a loose keyword was present.
    Weak,
    /// Nothing matched; the intent is the `General` fallback.
    #[serde(rename = "none")]
    Absent,
}

impl MatchStrength {
    /// Starting point for the response confidence score.
    pub fn base_confidence(&self) -> f64 {
        match self {
            MatchStrength::Strong => 0.9,
            MatchStrength::Weak => 0.6,
            MatchStrength::Absent => 0.35,
        }
    }
}

impl fmt::Display for MatchStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStrength::Strong => write!(f, "strong"),
            MatchStrength::Weak => write!(f, "weak"),
            MatchStrength::Absent => write!(f, "none"),
        }
    }
}

/// Output of the intent classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub intent: Intent,
    pub match_strength: MatchStrength,
}

impl Classification {
    pub fn fallback() -> Self {
        Self {
            intent: Intent::General,
            match_strength: MatchStrength::Absent,
        }
    }
}

// =============================================================================
// CtaKind
// =============================================================================

/// The family of call-to-action chosen by the strategist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CtaKind {
    ConfirmOrder,
    RetentionDiscount,
    DiscountOffer,
    PriceDetails,
    DeliveryInfo,
    LearnMore,
}

impl CtaKind {
    pub fn label(&self) -> &'static str {
        match self {
            CtaKind::ConfirmOrder => "Confirm Order",
            CtaKind::RetentionDiscount => "Claim Bundle Discount",
            CtaKind::DiscountOffer => "View Discount Offer",
            CtaKind::PriceDetails => "View Price Details",
            CtaKind::DeliveryInfo => "Check Delivery Options",
            CtaKind::LearnMore => "Learn More",
        }
    }

    /// Closing clause of the strategy notes.
    pub fn focus(&self) -> &'static str {
        match self {
            CtaKind::ConfirmOrder => "pushing checkout while intent is hot",
            CtaKind::RetentionDiscount => "prioritizing retention CTA",
            CtaKind::DiscountOffer => "surfacing the active offer",
            CtaKind::PriceDetails => "sharing pricing details to build value",
            CtaKind::DeliveryInfo => "clarifying delivery terms",
            CtaKind::LearnMore => "nurturing with catalog overview",
        }
    }
}
