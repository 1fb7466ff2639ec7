use crate::api::{ChatCompletion, RequestBody};
use crate::classifier::plan_query;
use crate::context::inject_search_context;
use crate::error::Result;
use crate::models::ConversationRequest;
use crate::search::WebSearch;
use colored::*;
use serde_json::Value;
use tokio::time::{timeout, Duration};

/// Model and temperature applied when the caller leaves them out.
#[derive(Debug, Clone)]
pub struct ChatDefaults {
    pub model: String,
    pub temperature: f32,
}

/// Runs one chat request: decide on a search, graft its results onto the
/// conversation, then hand the conversation to the chat backend.
///
/// Everything up to the chat call is best effort. Only the chat call can
/// fail the request.
pub struct Orchestrator<S, C> {
    search: Option<S>,
    chat: C,
    defaults: ChatDefaults,
    search_timeout: Duration,
    verbose: bool,
}

impl<S: WebSearch, C: ChatCompletion> Orchestrator<S, C> {
    /// `search` is `None` when no search credentials are configured.
    pub fn new(search: Option<S>, chat: C, defaults: ChatDefaults) -> Self {
        Self {
            search,
            chat,
            defaults,
            search_timeout: Duration::from_secs(10),
            verbose: false,
        }
    }

    pub fn with_search_timeout(mut self, search_timeout: Duration) -> Self {
        self.search_timeout = search_timeout;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub async fn run(&self, request: &ConversationRequest) -> Result<Value> {
        let conversation = self.augment(request).await;

        let body = RequestBody {
            model: conversation
                .model
                .clone()
                .unwrap_or_else(|| self.defaults.model.clone()),
            messages: conversation.turns,
            temperature: conversation
                .temperature
                .unwrap_or(self.defaults.temperature),
        };

        self.trace("AI", format!("Using model: {}", body.model));
        self.chat.complete(&body).await
    }

    /// The conversation to send upstream: augmented with search results
    /// when a search ran and found something, otherwise the input as is.
    pub async fn augment(&self, request: &ConversationRequest) -> ConversationRequest {
        if !request.use_web_search {
            return request.clone();
        }
        let Some(search) = &self.search else {
            self.trace("search", "Web search requested but SEARCH_API/SEARCH_ID are not set");
            return request.clone();
        };
        let Some(last) = request.last_user_turn() else {
            return request.clone();
        };

        let plan = plan_query(&last.content);
        let Some(query) = plan.query else {
            self.trace(
                "search",
                format!("No search terms found in: {}", last.content),
            );
            return request.clone();
        };
        self.trace(
            "search",
            format!("Intent: {}, query: {}", plan.intent.as_str(), query),
        );

        let results = match timeout(self.search_timeout, search.search(&query)).await {
            Ok(Ok(results)) => results,
            Ok(Err(e)) => {
                self.warn(format!("Web search failed: {}", e));
                return request.clone();
            }
            Err(_) => {
                self.warn(format!(
                    "Web search timed out after {} seconds",
                    self.search_timeout.as_secs()
                ));
                return request.clone();
            }
        };

        if results.is_empty() {
            self.trace("search", "No results found");
            return request.clone();
        }

        self.trace("search", format!("{} results added as context", results.len()));
        inject_search_context(request, &query, &results)
    }

    fn trace(&self, tag: &str, message: impl AsRef<str>) {
        if self.verbose {
            eprintln!("{}", format!("[{}] {}", tag, message.as_ref()).dimmed());
        }
    }

    fn warn(&self, message: String) {
        if self.verbose {
            eprintln!("{}", format!("[search] {}", message).yellow());
        }
    }
}
