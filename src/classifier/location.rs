use super::vocabulary::{
    GAZETTEER, LOCATION_NOISE_TERMS, LOCATION_PREPOSITIONS, LOCATION_SUFFIX_TERMS,
};
use regex::Regex;
use std::sync::LazyLock;

const LETTERS: &str = r"a-záàâãäéêëíîïóôõöúûüç";

// "em X", "de X", ... up to the first whitespace or punctuation.
static PREPOSITION_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"(?:{})\s+([{}\s]+?)(?:\s|$|,|\?|\.|!)",
        LOCATION_PREPOSITIONS.join("|"),
        LETTERS
    );
    Regex::new(&pattern).expect("Invalid regex: preposition phrase")
});

// "porto alegre clima", "curitiba previsão"
static WEATHER_SUFFIXED: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"([{}\s]{{2,}}?)(?:\s+(?:{}))",
        LETTERS,
        LOCATION_SUFFIX_TERMS.join("|")
    );
    Regex::new(&pattern).expect("Invalid regex: weather suffixed phrase")
});

static KNOWN_CITY: LazyLock<Regex> = LazyLock::new(|| {
    let names: Vec<String> = GAZETTEER.iter().map(|city| regex::escape(city)).collect();
    Regex::new(&format!("({})", names.join("|"))).expect("Invalid regex: gazetteer")
});

static NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b(?:{})\b", LOCATION_NOISE_TERMS.join("|")))
        .expect("Invalid regex: location noise")
});

/// Candidate place names in an already lowercased message.
///
/// The three pattern families run independently and their matches are
/// concatenated in fixed order: preposition phrases, phrases followed by a
/// weather word, then gazetteer hits. Callers only rely on the first entry.
pub fn extract_locations(lowered: &str) -> Vec<String> {
    let patterns: [&Regex; 3] = [&*PREPOSITION_PHRASE, &*WEATHER_SUFFIXED, &*KNOWN_CITY];

    let mut locations: Vec<String> = Vec::new();
    for pattern in patterns {
        for caps in pattern.captures_iter(lowered) {
            let Some(raw) = caps.get(1).map(|m| m.as_str().trim()) else {
                continue;
            };
            if raw.chars().count() <= 2 {
                continue;
            }
            let Some(city) = clean_location(raw) else {
                continue;
            };
            if !locations.contains(&city) {
                locations.push(city);
            }
        }
    }
    locations
}

/// Strip weather words and prepositions caught alongside a place name.
fn clean_location(raw: &str) -> Option<String> {
    let stripped = NOISE.replace_all(raw, "");
    let city = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    (city.chars().count() > 2).then_some(city)
}
