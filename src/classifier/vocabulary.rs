//! Fixed Portuguese vocabularies driving the classifier.
//!
//! Every list here is closed: nothing is read from configuration, and the
//! order of [`GAZETTEER`] is the order in which city names are tried.

/// Terms whose presence marks a message as a weather question.
pub const WEATHER_TERMS: &[&str] = &[
    "clima",
    "tempo",
    "previsão",
    "chuva",
    "sol",
    "temperatura",
    "graus",
    "quente",
    "frio",
    "vento",
    "umidade",
    "meteorologia",
    "weather",
];

/// Urgency and current-events vocabulary.
pub const NEWS_TERMS: &[&str] = &[
    "notícias",
    "últimas notícias",
    "acontecendo",
    "atual",
    "recente",
    "hoje",
    "agora",
    "situação",
    "estado",
    "informações sobre",
    "últimas",
    "urgente",
    "emergência",
    "atualização",
    "ao vivo",
    "tempestade",
    "inundação",
    "enchente",
    "alerta",
];

/// Stopwords for the weather fallback query.
pub const STOPWORDS: &[&str] = &[
    "para", "com", "sem", "sobre", "que", "qual", "como", "onde", "quando",
];

/// Stopwords for news queries: articles, prepositions, pronouns and copulas
/// on top of [`STOPWORDS`].
pub const EXTENDED_STOPWORDS: &[&str] = &[
    "o", "a", "os", "as", "de", "da", "do", "das", "dos", "em", "na", "no", "nas", "nos", "para",
    "por", "com", "sem", "sobre", "que", "qual", "como", "onde", "quando", "me", "te", "se", "é",
    "são", "está", "estão", "foi", "foram", "será", "serão", "um", "uma", "uns", "umas", "pelo",
    "pela", "pelos", "pelas",
];

/// High-salience terms promoted to the front of a news query.
pub const PRIORITY_TERMS: &[&str] = &[
    "rs",
    "rio",
    "grande",
    "sul",
    "porto",
    "alegre",
    "brasil",
    "são",
    "paulo",
    "clima",
    "tempo",
    "chuva",
    "enchente",
    "alerta",
    "emergência",
    "defesa",
    "civil",
    "notícias",
    "hoje",
    "atual",
];

/// Major Brazilian cities matched verbatim, multi-word names as a unit.
pub const GAZETTEER: &[&str] = &[
    "são paulo",
    "rio de janeiro",
    "belo horizonte",
    "salvador",
    "fortaleza",
    "brasília",
    "curitiba",
    "recife",
    "porto alegre",
    "manaus",
    "belém",
    "goiânia",
    "guarulhos",
    "campinas",
    "nova iguaçu",
    "são luís",
    "maceió",
    "joão pessoa",
    "teresina",
    "natal",
    "campo grande",
    "cuiabá",
    "aracaju",
    "florianópolis",
    "vitória",
];

/// Weather words that trail a place name in "porto alegre clima".
pub const LOCATION_SUFFIX_TERMS: &[&str] = &["clima", "tempo", "previsão", "chuva", "temperatura"];

/// Words that may leak into a captured place name and are stripped from it.
pub const LOCATION_NOISE_TERMS: &[&str] = &[
    "clima",
    "tempo",
    "previsão",
    "chuva",
    "temperatura",
    "em",
    "de",
    "para",
    "do",
    "da",
];

/// Prepositions that introduce a place name.
pub const LOCATION_PREPOSITIONS: &[&str] = &["em", "de", "para", "do", "da"];
