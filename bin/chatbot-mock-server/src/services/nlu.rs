//! Keyword-based intent stub.
//!
//! No tokenization and no model: the lowercased input is searched for a
//! fixed set of substrings. Greeting keywords win over balance keywords.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::fixtures::BotReplies;

const GREETING_KEYWORDS: &[&str] = &["привет", "здравствуй"];
const BALANCE_KEYWORDS: &[&str] = &["баланс"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    CheckBalance,
    Unknown,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::CheckBalance => "check_balance",
            Intent::Unknown => "unknown",
        }
    }

    /// Scenario the platform would start for this intent.
    pub fn suggested_scenario(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting-001",
            _ => "help-001",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub intent: Intent,
    pub confidence: f64,
}

pub fn classify(text: &str) -> Classification {
    let lower = text.to_lowercase();

    if contains_any(&lower, GREETING_KEYWORDS) {
        Classification { intent: Intent::Greeting, confidence: 0.95 }
    } else if contains_any(&lower, BALANCE_KEYWORDS) {
        Classification { intent: Intent::CheckBalance, confidence: 0.89 }
    } else {
        Classification { intent: Intent::Unknown, confidence: 0.5 }
    }
}

fn contains_any(haystack: &str, words: &[&str]) -> bool {
    words.iter().any(|w| haystack.contains(w))
}

/// Canned orchestrator reply for `message`.
pub fn bot_reply<'a>(message: &str, replies: &'a BotReplies) -> &'a str {
    match classify(message).intent {
        Intent::Greeting => &replies.greeting,
        Intent::CheckBalance => &replies.check_balance,
        Intent::Unknown => &replies.fallback,
    }
}
