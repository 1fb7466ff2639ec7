use chatbusca::api::{ChatCompletion, RequestBody};
use chatbusca::error::{ChatBuscaError, Result};
use chatbusca::models::{ConversationRequest, ConversationTurn, SearchResult};
use chatbusca::orchestrator::{ChatDefaults, Orchestrator};
use chatbusca::search::WebSearch;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;

enum SearchOutcome {
    Results(Vec<SearchResult>),
    Failure,
    Hang,
}

struct FakeSearch {
    outcome: SearchOutcome,
    queries: Arc<Mutex<Vec<String>>>,
}

impl FakeSearch {
    fn new(outcome: SearchOutcome) -> (Self, Arc<Mutex<Vec<String>>>) {
        let queries = Arc::new(Mutex::new(Vec::new()));
        let search = Self {
            outcome,
            queries: queries.clone(),
        };
        (search, queries)
    }
}

impl WebSearch for FakeSearch {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        self.queries.lock().unwrap().push(query.to_string());
        match &self.outcome {
            SearchOutcome::Results(results) => Ok(results.clone()),
            SearchOutcome::Failure => Err(ChatBuscaError::SearchError(
                "connection refused".to_string(),
            )),
            SearchOutcome::Hang => {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok(Vec::new())
            }
        }
    }
}

#[derive(Default)]
struct FakeChat {
    fail_with: Option<(u16, String)>,
    seen: Arc<Mutex<Vec<RequestBody>>>,
}

impl ChatCompletion for FakeChat {
    async fn complete(&self, request: &RequestBody) -> Result<Value> {
        self.seen.lock().unwrap().push(request.clone());
        if let Some((status, message)) = &self.fail_with {
            return Err(ChatBuscaError::ApiError {
                status: *status,
                message: message.clone(),
            });
        }
        Ok(json!({
            "id": "chatcmpl-1",
            "choices": [{"message": {"role": "assistant", "content": "ok"}}]
        }))
    }
}

fn defaults() -> ChatDefaults {
    ChatDefaults {
        model: "gpt-4.1-nano-2025-04-14".to_string(),
        temperature: 0.7,
    }
}

fn fortaleza_result() -> SearchResult {
    SearchResult {
        title: "Previsão Fortaleza".to_string(),
        snippet: "31°C, sol entre nuvens".to_string(),
        link: "https://tempo.example.com/fortaleza".to_string(),
    }
}

fn weather_request() -> ConversationRequest {
    ConversationRequest::new(vec![ConversationTurn::user(
        "qual é o clima em Fortaleza hoje?",
    )])
    .with_web_search(true)
}

#[tokio::test]
async fn test_weather_question_is_augmented() {
    let (search, queries) = FakeSearch::new(SearchOutcome::Results(vec![fortaleza_result()]));
    let chat = FakeChat::default();
    let seen = chat.seen.clone();
    let orchestrator = Orchestrator::new(Some(search), chat, defaults());

    let response = orchestrator.run(&weather_request()).await.unwrap();

    assert_eq!(response["id"], "chatcmpl-1");
    assert_eq!(
        queries.lock().unwrap().as_slice(),
        ["previsão tempo clima fortaleza hoje".to_string()]
    );
    let seen = seen.lock().unwrap();
    let body = &seen[0];
    assert_eq!(body.model, "gpt-4.1-nano-2025-04-14");
    assert_eq!(body.temperature, 0.7);
    let content = &body.messages.last().unwrap().content;
    assert!(content.contains("Título: Previsão Fortaleza"));
    assert!(content.ends_with("Pergunta original: qual é o clima em Fortaleza hoje?"));
}

#[tokio::test]
async fn test_no_intent_skips_search() {
    let (search, queries) = FakeSearch::new(SearchOutcome::Results(vec![fortaleza_result()]));
    let orchestrator = Orchestrator::new(Some(search), FakeChat::default(), defaults());
    let request =
        ConversationRequest::new(vec![ConversationTurn::user("me conte uma piada")])
            .with_web_search(true);

    let augmented = orchestrator.augment(&request).await;

    assert!(queries.lock().unwrap().is_empty());
    assert!(Arc::ptr_eq(&request.turns[0], &augmented.turns[0]));
}

#[tokio::test]
async fn test_empty_results_forward_original() {
    let (search, queries) = FakeSearch::new(SearchOutcome::Results(Vec::new()));
    let orchestrator = Orchestrator::new(Some(search), FakeChat::default(), defaults());
    let request = weather_request();

    let augmented = orchestrator.augment(&request).await;

    assert_eq!(queries.lock().unwrap().len(), 1);
    assert!(Arc::ptr_eq(&request.turns[0], &augmented.turns[0]));
}

#[tokio::test]
async fn test_search_failure_is_same_as_no_results() {
    let (search, queries) = FakeSearch::new(SearchOutcome::Failure);
    let chat = FakeChat::default();
    let seen = chat.seen.clone();
    let orchestrator = Orchestrator::new(Some(search), chat, defaults());
    let request = weather_request();

    let response = orchestrator.run(&request).await;

    assert!(response.is_ok());
    assert_eq!(queries.lock().unwrap().len(), 1);
    let seen = seen.lock().unwrap();
    assert!(Arc::ptr_eq(&seen[0].messages[0], &request.turns[0]));
}

#[tokio::test]
async fn test_search_timeout_is_absorbed() {
    let (search, _) = FakeSearch::new(SearchOutcome::Hang);
    let orchestrator = Orchestrator::new(Some(search), FakeChat::default(), defaults())
        .with_search_timeout(Duration::from_millis(50));
    let request = weather_request();

    let augmented = orchestrator.augment(&request).await;

    assert!(Arc::ptr_eq(&request.turns[0], &augmented.turns[0]));
}

#[tokio::test]
async fn test_web_search_flag_off_means_no_search() {
    let (search, queries) = FakeSearch::new(SearchOutcome::Results(vec![fortaleza_result()]));
    let orchestrator = Orchestrator::new(Some(search), FakeChat::default(), defaults());
    let request = weather_request().with_web_search(false);

    let augmented = orchestrator.augment(&request).await;

    assert!(queries.lock().unwrap().is_empty());
    assert!(Arc::ptr_eq(&request.turns[0], &augmented.turns[0]));
}

#[tokio::test]
async fn test_missing_search_credentials_skip_search() {
    let orchestrator: Orchestrator<FakeSearch, FakeChat> =
        Orchestrator::new(None, FakeChat::default(), defaults());
    let request = weather_request();

    let augmented = orchestrator.augment(&request).await;

    assert!(Arc::ptr_eq(&request.turns[0], &augmented.turns[0]));
}

#[tokio::test]
async fn test_last_turn_from_assistant_is_not_classified() {
    let (search, queries) = FakeSearch::new(SearchOutcome::Results(vec![fortaleza_result()]));
    let orchestrator = Orchestrator::new(Some(search), FakeChat::default(), defaults());
    let request = ConversationRequest::new(vec![
        ConversationTurn::user("qual é o clima em Fortaleza hoje?"),
        ConversationTurn::assistant("Vou verificar a previsão do tempo."),
    ])
    .with_web_search(true);

    orchestrator.augment(&request).await;

    assert!(queries.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_request_model_and_temperature_win_over_defaults() {
    let chat = FakeChat::default();
    let seen = chat.seen.clone();
    let orchestrator: Orchestrator<FakeSearch, FakeChat> =
        Orchestrator::new(None, chat, defaults());
    let request = ConversationRequest::new(vec![ConversationTurn::user("olá")])
        .with_model("gpt-4o-mini")
        .with_temperature(0.0);

    orchestrator.run(&request).await.unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen[0].model, "gpt-4o-mini");
    assert_eq!(seen[0].temperature, 0.0);
}

#[tokio::test]
async fn test_chat_failure_is_surfaced() {
    let (search, _) = FakeSearch::new(SearchOutcome::Results(vec![fortaleza_result()]));
    let chat = FakeChat {
        fail_with: Some((401, "Incorrect API key provided".to_string())),
        ..Default::default()
    };
    let orchestrator = Orchestrator::new(Some(search), chat, defaults());

    let err = orchestrator.run(&weather_request()).await.unwrap_err();

    match err {
        ChatBuscaError::ApiError { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Incorrect API key provided");
        }
        other => panic!("unexpected error: {}", other),
    }
}
