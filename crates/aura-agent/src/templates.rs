//! Reply and CTA summary template tables.
//!
//! Templates carry `{name}` interpolation points filled by [`render`].
//! Reply templates are keyed by `(intent, language)`, CTA summaries by
//! `(cta kind, brand tone)`.

use aura_core::{BrandTone, Language, Sentiment};

use crate::types::{CtaKind, Intent};

/// A reply template pair: one grounded on a product, one generic.
pub struct ReplyTemplate {
    pub intent: Intent,
    pub language: Language,
    pub with_product: &'static str,
    pub without_product: &'static str,
}

pub const REPLY_TEMPLATES: &[ReplyTemplate] = &[
    // ---- English ----
    ReplyTemplate {
        intent: Intent::PriceInquiry,
        language: Language::En,
        with_product: "Hi {customer}! {product} is priced at {price}. Highlights: {benefit}. Tap the link below for full details.",
        without_product: "Hi {customer}! Thanks for asking about prices at {business}. Tap the link below to see the latest price list.",
    },
    ReplyTemplate {
        intent: Intent::DiscountInquiry,
        language: Language::En,
        with_product: "Hi {customer}! Good news: {product} ({price}) has a special offer right now, and ordering more than one saves you even more. Check the offer below.",
        without_product: "Hi {customer}! {business} has offers running right now. Check the offer below to see what applies to you.",
    },
    ReplyTemplate {
        intent: Intent::DeliveryInquiry,
        language: Language::En,
        with_product: "Hi {customer}! {product} ships fast: {benefit}. Delivery takes 1-2 days inside Dhaka and 3-5 days outside, and cash on delivery is available.",
        without_product: "Hi {customer}! {business} delivers nationwide: 1-2 days inside Dhaka, 3-5 days outside, with cash on delivery available.",
    },
    ReplyTemplate {
        intent: Intent::OrderConfirmation,
        language: Language::En,
        with_product: "Wonderful, {customer}! Let's confirm your order for {product} ({price}). Tap Confirm Order below and share your delivery address to finish.",
        without_product: "Wonderful, {customer}! Tap Confirm Order below and share your delivery address, and {business} will take it from there.",
    },
    ReplyTemplate {
        intent: Intent::General,
        language: Language::En,
        with_product: "Hi {customer}, thanks for reaching out to {business}! You might like {product}: {benefit}. How can I help you today?",
        without_product: "Hi {customer}, thanks for reaching out to {business}! How can I help you today?",
    },
    // ---- Bengali ----
    ReplyTemplate {
        intent: Intent::PriceInquiry,
        language: Language::Bn,
        with_product: "হ্যালো {customer}! {product}-এর দাম {price}। বিশেষত্ব: {benefit}। বিস্তারিত জানতে নিচের লিংকে ট্যাপ করুন।",
        without_product: "হ্যালো {customer}! {business}-এর দাম জানতে চাওয়ার জন্য ধন্যবাদ। সর্বশেষ দামের তালিকা দেখতে নিচের লিংকে ট্যাপ করুন।",
    },
    ReplyTemplate {
        intent: Intent::DiscountInquiry,
        language: Language::Bn,
        with_product: "হ্যালো {customer}! সুখবর: {product} ({price})-এ এখন বিশেষ অফার চলছে, আর একাধিক পিস নিলে আরও বেশি সাশ্রয় হবে। নিচে অফারটি দেখুন।",
        without_product: "হ্যালো {customer}! {business}-এ এখন বিভিন্ন অফার চলছে। আপনার জন্য কোনটি প্রযোজ্য তা নিচে দেখুন।",
    },
    ReplyTemplate {
        intent: Intent::DeliveryInquiry,
        language: Language::Bn,
        with_product: "হ্যালো {customer}! {product} দ্রুত পাঠানো হয়: {benefit}। ঢাকার ভেতরে ১-২ দিন, ঢাকার বাইরে ৩-৫ দিনে ডেলিভারি হয়, আর ক্যাশ অন ডেলিভারি সুবিধা আছে।",
        without_product: "হ্যালো {customer}! {business} সারা দেশে ডেলিভারি দেয়: ঢাকার ভেতরে ১-২ দিন, বাইরে ৩-৫ দিন, ক্যাশ অন ডেলিভারি সুবিধাসহ।",
    },
    ReplyTemplate {
        intent: Intent::OrderConfirmation,
        language: Language::Bn,
        with_product: "দারুণ, {customer}! চলুন {product} ({price})-এর অর্ডারটি কনফার্ম করি। নিচের Confirm Order বাটনে ট্যাপ করে আপনার ডেলিভারি ঠিকানা দিন।",
        without_product: "দারুণ, {customer}! নিচের Confirm Order বাটনে ট্যাপ করে আপনার ডেলিভারি ঠিকানা দিন, বাকিটা {business} দেখে নেবে।",
    },
    ReplyTemplate {
        intent: Intent::General,
        language: Language::Bn,
        with_product: "হ্যালো {customer}, {business}-এ যোগাযোগ করার জন্য ধন্যবাদ! আপনার {product} পছন্দ হতে পারে: {benefit}। আজ কীভাবে সাহায্য করতে পারি?",
        without_product: "হ্যালো {customer}, {business}-এ যোগাযোগ করার জন্য ধন্যবাদ! আজ কীভাবে সাহায্য করতে পারি?",
    },
];

/// Look up the reply template for an intent and language.
pub fn reply_template(intent: Intent, language: Language) -> &'static ReplyTemplate {
    REPLY_TEMPLATES
        .iter()
        .find(|t| t.intent == intent && t.language == language)
        // General / English
        .unwrap_or(&REPLY_TEMPLATES[4])
}

/// Opening sentence keyed by sentiment. Neutral messages get none.
pub fn sentiment_opener(sentiment: Sentiment, language: Language) -> Option<&'static str> {
    match (sentiment, language) {
        (Sentiment::Negative, Language::En) => {
            Some("We're truly sorry about your experience, and we want to make it right.")
        }
        (Sentiment::Negative, Language::Bn) => {
            Some("আপনার অসুবিধার জন্য আমরা আন্তরিকভাবে দুঃখিত, বিষয়টি আমরা ঠিক করে দিতে চাই।")
        }
        (Sentiment::Positive, Language::En) => Some("Thank you for the kind words!"),
        (Sentiment::Positive, Language::Bn) => Some("আপনার সুন্দর মন্তব্যের জন্য ধন্যবাদ!"),
        (Sentiment::Neutral, _) => None,
    }
}

/// Closing sentence promoting the active campaign.
pub fn campaign_closer(language: Language) -> &'static str {
    match language {
        Language::En => "Don't miss our {campaign} campaign!",
        Language::Bn => "আমাদের {campaign} ক্যাম্পেইন মিস করবেন না!",
    }
}

/// CTA summary by kind and tone. `{subject}` is either the product with its
/// price or the business collection.
pub fn cta_summary_template(kind: CtaKind, tone: BrandTone) -> &'static str {
    match (kind, tone) {
        (CtaKind::ConfirmOrder, BrandTone::Professional) => {
            "Confirm your order for {subject} and we will process it right away."
        }
        (CtaKind::ConfirmOrder, BrandTone::Friendly) => {
            "Lock in {subject} now and we'll get it packed for you!"
        }
        (CtaKind::ConfirmOrder, BrandTone::Casual) => "Tap to grab {subject} before it's gone!",

        (CtaKind::RetentionDiscount, BrandTone::Professional) => {
            "We would like to offer a bundled discount on {subject} to make this right."
        }
        (CtaKind::RetentionDiscount, BrandTone::Friendly) => {
            "Here's a special bundle discount on {subject}, just for you!"
        }
        (CtaKind::RetentionDiscount, BrandTone::Casual) => {
            "Bundle deal on {subject}, let us fix this for you!"
        }

        (CtaKind::DiscountOffer, BrandTone::Professional) => {
            "Review the current discount available on {subject}."
        }
        (CtaKind::DiscountOffer, BrandTone::Friendly) => {
            "See the latest offer on {subject}, you'll love the savings!"
        }
        (CtaKind::DiscountOffer, BrandTone::Casual) => "Check out the deal on {subject}!",

        (CtaKind::PriceDetails, BrandTone::Professional) => "Full pricing details for {subject}.",
        (CtaKind::PriceDetails, BrandTone::Friendly) => {
            "Here's everything about the price of {subject}!"
        }
        (CtaKind::PriceDetails, BrandTone::Casual) => "Quick price check on {subject}!",

        (CtaKind::DeliveryInfo, BrandTone::Professional) => {
            "Delivery timelines and charges for {subject}."
        }
        (CtaKind::DeliveryInfo, BrandTone::Friendly) => {
            "See how fast {subject} can reach your doorstep!"
        }
        (CtaKind::DeliveryInfo, BrandTone::Casual) => "Find out when {subject} lands at your door!",

        (CtaKind::LearnMore, BrandTone::Professional) => {
            "Explore {subject} to find the right fit."
        }
        (CtaKind::LearnMore, BrandTone::Friendly) => {
            "Take a look around {subject}, we think you'll find something you love!"
        }
        (CtaKind::LearnMore, BrandTone::Casual) => "Browse {subject} and see what catches your eye!",
    }
}

/// Replace every `{key}` in `template` with its value in a single pass.
/// Unknown keys and unmatched braces are left untouched; substituted values
/// are copied verbatim and never expanded again.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            rest = &rest[open..];
            break;
        };
        match vars.iter().find(|(key, _)| *key == &after[..close]) {
            Some((_, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
