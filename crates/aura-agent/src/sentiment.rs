//! Cue-table sentiment scoring.

use aura_core::Sentiment;
use regex::Regex;

use crate::language::{fold_nukta, phrase_regex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Polarity {
    Positive,
    Negative,
}

/// `(phrase, polarity, weight)`. Negated phrases carry extra weight so they
/// outvote the positive word they contain ("not good" vs "good").
const CUE_TABLE: &[(&str, Polarity, u32)] = &[
    // Enthusiasm / gratitude
    ("thanks", Polarity::Positive, 1),
    ("thank you", Polarity::Positive, 1),
    ("great", Polarity::Positive, 1),
    ("love", Polarity::Positive, 1),
    ("awesome", Polarity::Positive, 1),
    ("excellent", Polarity::Positive, 1),
    ("nice", Polarity::Positive, 1),
    ("good", Polarity::Positive, 1),
    ("perfect", Polarity::Positive, 1),
    ("amazing", Polarity::Positive, 1),
    ("happy", Polarity::Positive, 1),
    ("beautiful", Polarity::Positive, 1),
    ("ধন্যবাদ", Polarity::Positive, 1),
    ("ভালো", Polarity::Positive, 1),
    ("দারুণ", Polarity::Positive, 1),
    ("চমৎকার", Polarity::Positive, 1),
    ("সুন্দর", Polarity::Positive, 1),
    ("অসাধারণ", Polarity::Positive, 1),
    ("পছন্দ", Polarity::Positive, 1),
    ("খুশি", Polarity::Positive, 1),
    // Complaints
    ("bad", Polarity::Negative, 1),
    ("worst", Polarity::Negative, 1),
    ("terrible", Polarity::Negative, 1),
    ("awful", Polarity::Negative, 1),
    ("angry", Polarity::Negative, 1),
    ("disappointed", Polarity::Negative, 1),
    ("broken", Polarity::Negative, 1),
    ("damaged", Polarity::Negative, 1),
    ("refund", Polarity::Negative, 1),
    ("complaint", Polarity::Negative, 1),
    ("scam", Polarity::Negative, 1),
    ("fake", Polarity::Negative, 1),
    ("useless", Polarity::Negative, 1),
    ("expensive", Polarity::Negative, 1),
    ("not good", Polarity::Negative, 2),
    ("not happy", Polarity::Negative, 2),
    ("বাজে", Polarity::Negative, 1),
    ("খারাপ", Polarity::Negative, 1),
    ("ভুয়া", Polarity::Negative, 1),
    ("প্রতারণা", Polarity::Negative, 1),
    ("বিরক্ত", Polarity::Negative, 1),
    ("অভিযোগ", Polarity::Negative, 1),
    ("জঘন্য", Polarity::Negative, 1),
    ("নষ্ট", Polarity::Negative, 1),
    ("ফেরত", Polarity::Negative, 1),
    ("বেশি দাম", Polarity::Negative, 1),
    ("ভালো না", Polarity::Negative, 2),
    ("পছন্দ হয়নি", Polarity::Negative, 2),
    ("খুশি না", Polarity::Negative, 2),
    // Urgency / frustration
    ("late", Polarity::Negative, 1),
    ("delay", Polarity::Negative, 1),
    ("delayed", Polarity::Negative, 1),
    ("still waiting", Polarity::Negative, 1),
    ("urgent", Polarity::Negative, 1),
    ("asap", Polarity::Negative, 1),
    ("দেরি", Polarity::Negative, 1),
    ("এখনো পাইনি", Polarity::Negative, 1),
    ("জলদি", Polarity::Negative, 1),
];

struct Cue {
    regex: Regex,
    polarity: Polarity,
    weight: u32,
}

/// Weighted hit counts per polarity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentScore {
    pub positive: u32,
    pub negative: u32,
}

impl SentimentScore {
    /// More negative weight is negative, more positive weight is positive,
    /// a tie (including no hits at all) is neutral.
    pub fn sentiment(&self) -> Sentiment {
        match self.negative.cmp(&self.positive) {
            std::cmp::Ordering::Greater => Sentiment::Negative,
            std::cmp::Ordering::Less => Sentiment::Positive,
            std::cmp::Ordering::Equal => Sentiment::Neutral,
        }
    }
}

/// Compiled cue table.
pub struct SentimentAnalyzer {
    cues: Vec<Cue>,
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        let cues = CUE_TABLE
            .iter()
            .map(|(phrase, polarity, weight)| Cue {
                regex: phrase_regex(phrase),
                polarity: *polarity,
                weight: *weight,
            })
            .collect();
        Self { cues }
    }

    /// Sum cue weights per polarity. Each cue counts once per message.
    pub fn score(&self, text: &str) -> SentimentScore {
        let text = fold_nukta(text);
        let mut score = SentimentScore::default();
        for cue in self.cues.iter().filter(|c| c.regex.is_match(&text)) {
            match cue.polarity {
                Polarity::Positive => score.positive += cue.weight,
                Polarity::Negative => score.negative += cue.weight,
            }
        }
        score
    }

    pub fn analyze(&self, text: &str) -> Sentiment {
        self.score(text).sentiment()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(text: &str) -> Sentiment {
        SentimentAnalyzer::new().analyze(text)
    }

    #[test]
    fn test_bengali_complaint_is_negative() {
        assert_eq!(analyze("এটা খুব বাজে সার্ভিস!"), Sentiment::Negative);
    }

    #[test]
    fn test_bengali_gratitude_is_positive() {
        assert_eq!(analyze("অনেক ধন্যবাদ, শাড়িটা দারুণ!"), Sentiment::Positive);
    }

    #[test]
    fn test_english_positive() {
        assert_eq!(analyze("thanks, the dress looks amazing"), Sentiment::Positive);
    }

    #[test]
    fn test_english_negative_urgency() {
        assert_eq!(analyze("my parcel is late, this is urgent"), Sentiment::Negative);
    }

    #[test]
    fn test_no_cues_is_neutral() {
        assert_eq!(analyze("হ্যালো, এই পণ্যের দাম কত?"), Sentiment::Neutral);
        assert_eq!(
            analyze("can i get a discount if i order two pieces?"),
            Sentiment::Neutral
        );
    }

    #[test]
    fn test_empty_is_neutral() {
        assert_eq!(analyze(""), Sentiment::Neutral);
    }

    #[test]
    fn test_tie_is_neutral() {
        let score = SentimentAnalyzer::new().score("great fabric but expensive");
        assert_eq!(score, SentimentScore { positive: 1, negative: 1 });
        assert_eq!(score.sentiment(), Sentiment::Neutral);
    }

    #[test]
    fn test_negation_outweighs_contained_positive() {
        assert_eq!(analyze("the quality is not good"), Sentiment::Negative);
        assert_eq!(analyze("কাপড়টা ভালো না"), Sentiment::Negative);
    }

    #[test]
    fn test_word_boundaries_for_english_cues() {
        // "badge" and "chocolate" hold "bad" and "late" only as fragments.
        assert_eq!(analyze("a chocolate badge"), Sentiment::Neutral);
    }
}
