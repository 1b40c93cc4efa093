//! # Pattern Table
//!
//! File: cli/src/bot/patterns.rs
//!
//! ## Overview
//!
//! The pattern table is the bot's entire knowledge: an ordered list of
//! lowercase keys, each with a non-empty list of reply templates, plus a
//! fallback list used when no key matches.
//!
//! ## Matching
//!
//! `lookup` walks the patterns in definition order and returns the first one
//! whose key appears anywhere in the normalized input. There is no scoring and
//! no word-boundary check, so an earlier key shadows any later key that
//! contains it, and short keys match inside longer words:
//!
//! - `"goodbye"` matches `bye`, which is defined before `goodbye`
//! - `"this"` matches `hi`
//!
//! Existing conversations depend on that order, so it is kept as is.
//!
use crate::bot::template;
use crate::core::error::ChatError;
use rand::Rng;

/// Built-in patterns, in matching order.
const BUILTIN_PATTERNS: &[(&str, &[&str])] = &[
    // Greetings
    (
        "hello",
        &[
            "Hi! How can I help you today?",
            "Hello! Nice to meet you!",
            "Hey there! What's on your mind?",
            "Hi! Great to see you!",
        ],
    ),
    (
        "hi",
        &[
            "Hello! How are you doing?",
            "Hi there! How can I assist you?",
            "Hey! What brings you here today?",
        ],
    ),
    (
        "hey",
        &[
            "Hey! What's up?",
            "Hello! How can I help?",
            "Hi there! How are you?",
        ],
    ),
    // How are you
    (
        "how are you",
        &[
            "I'm doing great, thank you for asking! How about you?",
            "I'm fine, thanks! How are you today?",
            "I'm excellent! Hope you're doing well too!",
            "I'm just a bot, but I'm functioning perfectly! How are you?",
        ],
    ),
    (
        "how do you do",
        &[
            "I'm doing well! How about yourself?",
            "Great! How are things with you?",
        ],
    ),
    // Name questions
    (
        "what is your name",
        &[
            "My name is {name}. What's yours?",
            "I'm {name}, your friendly chatbot!",
            "You can call me {name}!",
        ],
    ),
    (
        "your name",
        &["I'm {name}!", "My name is {name}. Nice to meet you!"],
    ),
    // Help
    (
        "help",
        &[
            "I'm here to chat with you! Try saying hello, asking how I am, or just have a conversation!",
            "I can respond to greetings, questions about myself, and general conversation. Just type anything!",
            "Need help? Just chat naturally with me! I understand basic questions and greetings.",
        ],
    ),
    // Thanks
    (
        "thank you",
        &[
            "You're welcome!",
            "Happy to help!",
            "Anytime!",
            "No problem at all!",
        ],
    ),
    (
        "thanks",
        &["You're welcome!", "Glad I could help!", "No worries!"],
    ),
    // Goodbye
    (
        "bye",
        &[
            "Goodbye! Have a great day!",
            "See you later!",
            "Bye! Take care!",
            "Goodbye! Come back soon!",
        ],
    ),
    (
        "goodbye",
        &[
            "Goodbye! It was nice chatting with you!",
            "See you next time!",
            "Take care! Goodbye!",
        ],
    ),
    (
        "see you",
        &["See you later!", "Bye! See you soon!", "Take care!"],
    ),
    // Small talk
    (
        "good",
        &[
            "That's great to hear!",
            "Wonderful!",
            "I'm glad things are good!",
            "That's fantastic!",
        ],
    ),
    (
        "bad",
        &[
            "I'm sorry to hear that. I hope things get better!",
            "That's unfortunate. Is there anything I can help with?",
            "I hope your day improves!",
        ],
    ),
    // About the bot
    (
        "what can you do",
        &[
            "I'm a simple chatbot! I can have basic conversations, answer questions about myself, and keep you company!",
            "I can chat with you, respond to your questions, and try to be helpful!",
            "I'm here to have a friendly conversation with you!",
        ],
    ),
    (
        "who created you",
        &[
            "I was put together as a small Rust project to practise rule-based chat!",
            "A curious developer built me, one pattern at a time!",
            "I'm a weekend project that grew a personality!",
        ],
    ),
    // Clock
    (
        "time",
        &[
            "The current time is {now:%H:%M:%S}",
            "It's {now:%I:%M %p} right now!",
        ],
    ),
    (
        "date",
        &["Today is {now:%B %d, %Y}", "The date is {now:%d/%m/%Y}"],
    ),
];

/// Built-in replies used when nothing matches.
const BUILTIN_FALLBACK: &[&str] = &[
    "I'm not sure I understand. Can you rephrase that?",
    "Interesting! Tell me more.",
    "I'm still learning. Could you say that differently?",
    "Hmm, I'm not quite sure how to respond to that.",
    "That's an interesting point! What else would you like to talk about?",
    "I'm a simple bot, so I might not understand everything. Try asking me something else!",
];

/// Lowercases and trims `input`, the form every key is compared against.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// A non-empty, ordered list of reply templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replies(Vec<String>);

impl Replies {
    /// Returns `None` when `replies` is empty.
    pub fn new(replies: Vec<String>) -> Option<Self> {
        if replies.is_empty() {
            None
        } else {
            Some(Self(replies))
        }
    }

    /// Picks one template uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.0[rng.gen_range(0..self.0.len())]
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// A lowercase key and the replies it triggers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    key: String,
    replies: Replies,
}

impl Pattern {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn replies(&self) -> &Replies {
        &self.replies
    }
}

/// Ordered patterns plus the fallback replies. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternTable {
    patterns: Vec<Pattern>,
    fallback: Replies,
}

impl PatternTable {
    /// Builds a table from `(key, replies)` pairs, keeping their order.
    ///
    /// Keys are normalized. Fails on an empty key, an empty reply list, an
    /// empty fallback list, or a reply template with an invalid time format.
    pub fn new(
        patterns: Vec<(String, Vec<String>)>,
        fallback: Vec<String>,
    ) -> Result<Self, ChatError> {
        let mut built = Vec::with_capacity(patterns.len());
        for (key, replies) in patterns {
            let key = normalize(&key);
            if key.is_empty() {
                return Err(ChatError::EmptyPatternKey);
            }
            for reply in &replies {
                template::validate(reply)?;
            }
            let replies = Replies::new(replies).ok_or_else(|| ChatError::EmptyReplies {
                key: key.clone(),
            })?;
            built.push(Pattern { key, replies });
        }

        for reply in &fallback {
            template::validate(reply)?;
        }
        let fallback = Replies::new(fallback).ok_or(ChatError::EmptyFallback)?;

        Ok(Self {
            patterns: built,
            fallback,
        })
    }

    /// The table shipped with the binary.
    pub fn builtin() -> Self {
        Self {
            patterns: BUILTIN_PATTERNS
                .iter()
                .map(|(key, replies)| Pattern {
                    key: (*key).to_string(),
                    replies: Replies(replies.iter().map(|r| (*r).to_string()).collect()),
                })
                .collect(),
            fallback: Replies(BUILTIN_FALLBACK.iter().map(|r| (*r).to_string()).collect()),
        }
    }

    /// Returns the first pattern, in definition order, whose key occurs in
    /// `normalized_input`. The input must already be [`normalize`]d.
    pub fn lookup(&self, normalized_input: &str) -> Option<&Pattern> {
        self.patterns
            .iter()
            .find(|pattern| normalized_input.contains(pattern.key.as_str()))
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn fallback(&self) -> &Replies {
        &self.fallback
    }
}
