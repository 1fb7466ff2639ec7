//! Rule-based decision of whether a chat message needs a web search, and
//! with which search string.

mod intent;
mod keywords;
mod location;
mod query;
pub mod vocabulary;

pub use intent::{classify, is_news_query, is_weather_query, SearchIntent};
pub use keywords::{keywords, news_keywords, Keywords};
pub use location::extract_locations;
pub use query::{plan_query, synthesize_query, QueryPlan, WEATHER_QUERY_PREFIX};
