//! Rule-table intent classification.
//!
//! Each rule ties an [`Intent`] to strong trigger phrases and weaker
//! keywords in English and Bengali. Rules are evaluated in table order,
//! first over strong phrases and then over weak keywords; the first hit
//! wins and anything unmatched falls back to [`Intent::General`].

use regex::Regex;

use crate::language::{fold_nukta, phrase_regex};
use crate::types::{Classification, Intent, MatchStrength};

/// Declarative rule: `(intent, strong phrases, weak keywords)`.
type RuleSpec = (Intent, &'static [&'static str], &'static [&'static str]);

/// Ordered rule table. Specific intents come before generic ones.
const RULE_TABLE: &[RuleSpec] = &[
    (
        Intent::OrderConfirmation,
        &[
            "confirm my order",
            "confirm the order",
            "confirm order",
            "place an order",
            "place my order",
            "place order",
            "i want to order",
            "i'd like to order",
            "i want to buy",
            "ready to buy",
            "i'll take it",
            "how do i order",
            "how can i order",
            "অর্ডার করতে চাই",
            "অর্ডার করব",
            "অর্ডার দিতে চাই",
            "অর্ডার কনফার্ম",
            "কনফার্ম করব",
            "কনফার্ম করতে চাই",
            "কিনতে চাই",
            "নিতে চাই",
        ],
        &[
            "order",
            "confirm",
            "buy",
            "checkout",
            "purchase",
            "অর্ডার",
            "কনফার্ম",
            "কিনব",
            "নেব",
        ],
    ),
    (
        Intent::DiscountInquiry,
        &[
            "discount",
            "coupon",
            "promo code",
            "voucher",
            "any offer",
            "special price",
            "lower the price",
            "ডিসকাউন্ট",
            "ছাড় পাব",
            "ছাড় আছে",
            "ছাড় দিবেন",
            "ছাড় দেবেন",
            "কুপন",
            "কম রাখা",
        ],
        &["offer", "deal", "cheaper", "sale", "bargain", "অফার", "ছাড়", "কম দামে"],
    ),
    (
        Intent::PriceInquiry,
        &[
            "how much",
            "what is the price",
            "what's the price",
            "price of",
            "price for",
            "cost of",
            "দাম কত",
            "মূল্য কত",
            "কত টাকা",
            "দাম জানতে",
        ],
        &["price", "cost", "rate", "taka", "tk", "দাম", "মূল্য", "টাকা"],
    ),
    (
        Intent::DeliveryInquiry,
        &[
            "delivery time",
            "delivery charge",
            "cash on delivery",
            "when will i get",
            "when will it arrive",
            "how long will",
            "shipping cost",
            "deliver to",
            "ক্যাশ অন ডেলিভারি",
            "ডেলিভারি চার্জ",
            "কতদিন লাগবে",
            "কবে পাব",
            "ডেলিভারি কবে",
            "ডেলিভারি করতে",
        ],
        &[
            "delivery",
            "deliver",
            "shipping",
            "ship",
            "courier",
            "cod",
            "arrive",
            "ডেলিভারি",
            "কুরিয়ার",
            "পৌঁছাবে",
        ],
    ),
];

/// A compiled rule.
pub struct IntentRule {
    pub intent: Intent,
    pub strong: Vec<Regex>,
    pub weak: Vec<Regex>,
}

/// Ordered, compiled intent rules. Build once and reuse.
pub struct IntentClassifier {
    rules: Vec<IntentRule>,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    /// Compile the built-in rule table.
    pub fn new() -> Self {
        let rules = RULE_TABLE
            .iter()
            .map(|(intent, strong, weak)| IntentRule {
                intent: *intent,
                strong: strong.iter().map(|p| phrase_regex(p)).collect(),
                weak: weak.iter().map(|p| phrase_regex(p)).collect(),
            })
            .collect();
        Self { rules }
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    /// Classify normalized message text. Total: never fails.
    pub fn classify(&self, text: &str) -> Classification {
        let text = fold_nukta(text);
        if text.trim().is_empty() {
            return Classification::fallback();
        }

        for rule in &self.rules {
            if rule.strong.iter().any(|re| re.is_match(&text)) {
                return Classification {
                    intent: rule.intent,
                    match_strength: MatchStrength::Strong,
                };
            }
        }

        for rule in &self.rules {
            if rule.weak.iter().any(|re| re.is_match(&text)) {
                return Classification {
                    intent: rule.intent,
                    match_strength: MatchStrength::Weak,
                };
            }
        }

        Classification::fallback()
    }
}
