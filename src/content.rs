//! Static page copy and the quiz bank.
//!
//! Both are embedded JSON documents parsed once on first use. A malformed
//! document is logged and replaced by empty content so the rest of the page
//! still renders.

use std::sync::OnceLock;

use log::error;
use serde::Deserialize;
use thiserror::Error;

const SITE_JSON: &str = include_str!("../content/site.json");
const QUIZ_JSON: &str = include_str!("../content/quiz.json");

pub const QUIZ_LENGTH: usize = 10;
pub const OPTIONS_PER_QUESTION: usize = 4;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("malformed content document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("quiz bank has {0} questions, expected 10")]
    QuizLength(usize),
    #[error("question {index} has {found} options, expected 4")]
    OptionCount { index: usize, found: usize },
    #[error("question {index} marks option {correct} as correct but has only 4")]
    CorrectOutOfRange { index: usize, correct: usize },
    #[error("state list is empty")]
    NoStates,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub correct: usize,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Chip {
    pub icon: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Feature {
    pub icon: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Card {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: u8,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub icon: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub states: Vec<String>,
    pub hero_highlights: Vec<Chip>,
    pub program_features: Vec<Feature>,
    pub highlights: Vec<Card>,
    pub eligibility: Vec<String>,
    pub fee_includes: Vec<String>,
    pub testimonials: Vec<Testimonial>,
    pub early_bird_benefits: Vec<Card>,
    pub motivational_quotes: Vec<String>,
    pub contact: Contact,
    pub social_links: Vec<SocialLink>,
}

pub fn parse_site(raw: &str) -> Result<SiteContent, ContentError> {
    let site: SiteContent = serde_json::from_str(raw)?;
    if site.states.is_empty() {
        return Err(ContentError::NoStates);
    }
    Ok(site)
}

pub fn parse_quiz(raw: &str) -> Result<Vec<Question>, ContentError> {
    let questions: Vec<Question> = serde_json::from_str(raw)?;
    if questions.len() != QUIZ_LENGTH {
        return Err(ContentError::QuizLength(questions.len()));
    }
    for (index, q) in questions.iter().enumerate() {
        if q.options.len() != OPTIONS_PER_QUESTION {
            return Err(ContentError::OptionCount { index, found: q.options.len() });
        }
        if q.correct >= OPTIONS_PER_QUESTION {
            return Err(ContentError::CorrectOutOfRange { index, correct: q.correct });
        }
    }
    Ok(questions)
}

pub fn site() -> &'static SiteContent {
    static SITE: OnceLock<SiteContent> = OnceLock::new();
    SITE.get_or_init(|| {
        parse_site(SITE_JSON).unwrap_or_else(|e| {
            error!("Failed to load site content: {}", e);
            SiteContent::default()
        })
    })
}

pub fn quiz_bank() -> &'static [Question] {
    static QUIZ: OnceLock<Vec<Question>> = OnceLock::new();
    QUIZ.get_or_init(|| {
        parse_quiz(QUIZ_JSON).unwrap_or_else(|e| {
            error!("Failed to load quiz bank: {}", e);
            Vec::new()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_quiz_bank_matches_the_published_answer_key() {
        let key: Vec<usize> = parse_quiz(QUIZ_JSON)
            .expect("embedded quiz parses")
            .iter()
            .map(|q| q.correct)
            .collect();
        assert_eq!(key, vec![1, 1, 2, 2, 1, 2, 2, 2, 1, 1]);
    }

    #[test]
    fn embedded_site_content_is_complete() {
        let site = parse_site(SITE_JSON).expect("embedded site content parses");
        assert_eq!(site.states.len(), 28);
        assert_eq!(site.hero_highlights.len(), 3);
        assert_eq!(site.highlights.len(), 5);
        assert_eq!(site.testimonials.len(), 3);
        assert_eq!(site.motivational_quotes.len(), 5);
        assert!(site.testimonials.iter().all(|t| t.rating == 5));
    }

    #[test]
    fn short_quiz_is_rejected() {
        let raw = r#"[{"question":"q","options":["a","b","c","d"],"correct":0,"explanation":"e"}]"#;
        assert!(matches!(parse_quiz(raw), Err(ContentError::QuizLength(1))));
    }

    #[test]
    fn correct_index_outside_options_is_rejected() {
        let one = r#"{"question":"q","options":["a","b","c","d"],"correct":0,"explanation":"e"}"#;
        let bad = r#"{"question":"q","options":["a","b","c","d"],"correct":4,"explanation":"e"}"#;
        let mut items = vec![one; QUIZ_LENGTH - 1];
        items.push(bad);
        let raw = format!("[{}]", items.join(","));
        assert!(matches!(
            parse_quiz(&raw),
            Err(ContentError::CorrectOutOfRange { index: 9, correct: 4 })
        ));
    }

    #[test]
    fn site_without_states_is_rejected() {
        assert!(matches!(parse_site("{}"), Err(ContentError::NoStates)));
        assert!(matches!(parse_site("not json"), Err(ContentError::Parse(_))));
    }
}
