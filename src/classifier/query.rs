use super::intent::{classify, SearchIntent};
use super::keywords::{keywords, news_keywords};
use super::location::extract_locations;
use super::vocabulary::PRIORITY_TERMS;

pub const WEATHER_QUERY_PREFIX: &str = "previsão tempo clima";

/// Keywords kept from a weather message that names no place.
const WEATHER_CONTEXT_WORDS: usize = 3;
/// Leading keywords appended after the priority terms of a news query.
const NEWS_LEADING_WORDS: usize = 4;
const NEWS_MAX_WORDS: usize = 6;

/// Outcome of inspecting one user message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlan {
    pub intent: SearchIntent,
    pub query: Option<String>,
}

pub fn plan_query(message: &str) -> QueryPlan {
    let lowered = message.to_lowercase();
    let intent = classify(&lowered);
    let query = match intent {
        SearchIntent::Weather => Some(weather_query(&lowered)),
        SearchIntent::News => news_query(&lowered),
        SearchIntent::None => None,
    };
    QueryPlan { intent, query }
}

/// Search string for a message, or `None` when no search is warranted.
pub fn synthesize_query(message: &str) -> Option<String> {
    plan_query(message).query
}

fn weather_query(lowered: &str) -> String {
    if let Some(city) = extract_locations(lowered).into_iter().next() {
        return format!("{} {} hoje", WEATHER_QUERY_PREFIX, city);
    }

    let context: Vec<String> = keywords(lowered).take(WEATHER_CONTEXT_WORDS).collect();
    if context.is_empty() {
        WEATHER_QUERY_PREFIX.to_string()
    } else {
        format!("{} {}", WEATHER_QUERY_PREFIX, context.join(" "))
    }
}

fn news_query(lowered: &str) -> Option<String> {
    let priority = news_keywords(lowered).filter(|word| PRIORITY_TERMS.contains(&word.as_str()));
    let leading = news_keywords(lowered).take(NEWS_LEADING_WORDS);

    let mut words: Vec<String> = Vec::with_capacity(NEWS_MAX_WORDS);
    for word in priority.chain(leading) {
        if words.len() == NEWS_MAX_WORDS {
            break;
        }
        if !words.contains(&word) {
            words.push(word);
        }
    }

    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}
