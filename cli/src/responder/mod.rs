//! # DAVID AI Responder
//!
//! File: cli/src/responder/mod.rs
//!
//! ## Overview
//!
//! Maps free text to one of a handful of canned COVID-19 answers. The
//! message is lowercased and tested against an ordered list of topic
//! buckets; the first bucket with a keyword occurring as a substring wins.
//! When nothing matches, the general welcome/help text is returned.
//!
//! Buckets overlap on purpose ("demam" and "fever" appear in both symptoms and
//! temperature), so declaration order in [`BUCKETS`] is the precedence order.
//! Keywords are plain substrings: "tes" also matches "tested", "how" matches
//! "show". There is no tokenization, stemming or punctuation handling.
//!
//! ## Examples
//!
//! ```rust
//! assert_eq!(responder::match_topic("saya demam dan batuk"), Topic::Symptoms);
//! assert_eq!(responder::match_topic("kapan booster?"), Topic::Vaccination);
//! assert_eq!(responder::classify(""), knowledge::GENERAL);
//! ```
//!
use std::fmt;

pub mod knowledge;

/// The subject a message was classified under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Symptoms,
    Temperature,
    Vaccination,
    Prevention,
    Testing,
    Quarantine,
    MentalHealth,
    /// Fallback when no bucket matched.
    General,
}

impl Topic {
    pub fn as_str(self) -> &'static str {
        match self {
            Topic::Symptoms => "symptoms",
            Topic::Temperature => "temperature",
            Topic::Vaccination => "vaccination",
            Topic::Prevention => "prevention",
            Topic::Testing => "testing",
            Topic::Quarantine => "quarantine",
            Topic::MentalHealth => "mental_health",
            Topic::General => "general",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named group of keywords sharing one canned response.
#[derive(Debug)]
pub struct Bucket {
    pub topic: Topic,
    /// Lowercase substrings; any one of them selects the bucket.
    pub keywords: &'static [&'static str],
    pub response: &'static str,
}

impl Bucket {
    /// True when any keyword occurs in `lowered`, which must already be lowercase.
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// Topic buckets in precedence order.
pub static BUCKETS: [Bucket; 7] = [
    Bucket {
        topic: Topic::Symptoms,
        keywords: &[
            "gejala", "symptom", "sakit", "demam", "batuk", "sesak", "fever", "cough", "shortness",
        ],
        response: knowledge::SYMPTOMS,
    },
    Bucket {
        topic: Topic::Temperature,
        keywords: &["suhu", "temperature", "demam", "fever", "thermometer", "derajat"],
        response: knowledge::TEMPERATURE,
    },
    Bucket {
        topic: Topic::Vaccination,
        keywords: &["vaksin", "vaccine", "vaksinasi", "vaccination", "booster", "dosis"],
        response: knowledge::VACCINATION,
    },
    Bucket {
        topic: Topic::Prevention,
        keywords: &[
            "pencegahan", "prevention", "cara", "how", "hindari", "avoid", "protokol", "protocol",
        ],
        response: knowledge::PREVENTION,
    },
    Bucket {
        topic: Topic::Testing,
        keywords: &["tes", "test", "rapid", "pcr", "antigen", "swab", "diagnosis"],
        response: knowledge::TESTING,
    },
    Bucket {
        topic: Topic::Quarantine,
        keywords: &["karantina", "quarantine", "isolasi", "isolation", "lockdown"],
        response: knowledge::QUARANTINE,
    },
    Bucket {
        topic: Topic::MentalHealth,
        keywords: &[
            "mental",
            "stress",
            "anxiety",
            "depresi",
            "depression",
            "kesehatan jiwa",
            "psychological",
        ],
        response: knowledge::MENTAL_HEALTH,
    },
];

/// Classification result: which topic won and the text to send back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reply {
    pub topic: Topic,
    pub text: &'static str,
}

/// Classifies `message` and returns the winning topic with its canned text.
pub fn respond(message: &str) -> Reply {
    let lowered = message.to_lowercase();
    BUCKETS
        .iter()
        .find(|bucket| bucket.matches(&lowered))
        .map(|bucket| Reply {
            topic: bucket.topic,
            text: bucket.response,
        })
        .unwrap_or(Reply {
            topic: Topic::General,
            text: knowledge::GENERAL,
        })
}

/// Returns the canned response for `message`.
pub fn classify(message: &str) -> &'static str {
    respond(message).text
}

/// Returns only the topic `message` falls under.
pub fn match_topic(message: &str) -> Topic {
    respond(message).topic
}
