use super::vocabulary::{NEWS_TERMS, WEATHER_TERMS};

/// What a message is asking about, as far as web search is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchIntent {
    Weather,
    News,
    None,
}

impl SearchIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchIntent::Weather => "weather",
            SearchIntent::News => "news",
            SearchIntent::None => "none",
        }
    }
}

pub fn is_weather_query(lowered: &str) -> bool {
    WEATHER_TERMS.iter().any(|&term| lowered.contains(term))
}

pub fn is_news_query(lowered: &str) -> bool {
    NEWS_TERMS.iter().any(|&term| lowered.contains(term))
}

/// Weather wins over news; the news test only runs when weather fails.
pub fn classify(lowered: &str) -> SearchIntent {
    if is_weather_query(lowered) {
        SearchIntent::Weather
    } else if is_news_query(lowered) {
        SearchIntent::News
    } else {
        SearchIntent::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_terms() {
        assert!(is_weather_query("vai fazer frio amanhã?"));
        assert!(is_weather_query("what's the weather like"));
        assert!(!is_weather_query("me conte uma piada"));
    }

    #[test]
    fn test_news_terms() {
        assert!(is_news_query("últimas notícias de brasília"));
        assert!(is_news_query("jogo ao vivo"));
        assert!(!is_news_query("me conte uma piada"));
    }

    #[test]
    fn test_weather_takes_precedence() {
        assert_eq!(classify("alerta de chuva forte"), SearchIntent::Weather);
        assert_eq!(classify("alerta de enchente"), SearchIntent::News);
        assert_eq!(classify("bom dia"), SearchIntent::None);
    }
}
