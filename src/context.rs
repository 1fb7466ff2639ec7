use crate::models::{ConversationRequest, ConversationTurn, SearchResult};
use std::sync::Arc;

const BLOCK_HEADER: &str = "[🌐 INFORMAÇÕES ATUALIZADAS DA WEB]";
const BLOCK_END: &str = "[📋 FIM DAS INFORMAÇÕES WEB]";
const RELEVANCE_NOTE: &str = "IMPORTANTE: Use as informações acima para complementar sua resposta. Se as informações web não forem relevantes para a pergunta, diga isso claramente.";
const ORIGINAL_QUESTION_LABEL: &str = "Pergunta original: ";

/// Render search results as the text block prepended to the user's message.
pub fn build_context_block(query: &str, results: &[SearchResult]) -> String {
    let entries: Vec<String> = results
        .iter()
        .enumerate()
        .map(|(index, result)| {
            format!(
                "📍 Resultado {}:\nTítulo: {}\nInformação: {}\nFonte: {}\n",
                index + 1,
                result.title,
                result.snippet,
                result.link
            )
        })
        .collect();

    format!(
        "{}\nBusca realizada para: \"{}\"\n\n{}\n{}\n\n{}\n\n{}",
        BLOCK_HEADER,
        query,
        entries.join("\n"),
        BLOCK_END,
        RELEVANCE_NOTE,
        ORIGINAL_QUESTION_LABEL
    )
}

/// Splice search results into the last user turn.
///
/// With no results, or no trailing user turn, the request comes back as is.
/// Otherwise only the last turn is replaced; earlier turns stay shared with
/// the input.
pub fn inject_search_context(
    request: &ConversationRequest,
    query: &str,
    results: &[SearchResult],
) -> ConversationRequest {
    let mut augmented = request.clone();
    if results.is_empty() {
        return augmented;
    }
    let Some(last) = request.last_user_turn() else {
        return augmented;
    };

    let content = format!("{}{}", build_context_block(query, results), last.content);
    if let Some(slot) = augmented.turns.last_mut() {
        *slot = Arc::new(ConversationTurn::new(last.role, content));
    }
    augmented
}
