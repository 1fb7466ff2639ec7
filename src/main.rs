use chatbusca::api::response::extract_content;
use chatbusca::api::OpenAiChatClient;
use chatbusca::classifier::plan_query;
use chatbusca::cli::Args;
use chatbusca::config::Config;
use chatbusca::error::{ChatBuscaError, Result};
use chatbusca::models::{ConversationRequest, ConversationTurn};
use chatbusca::orchestrator::{ChatDefaults, Orchestrator};
use chatbusca::search::GoogleSearchClient;
use chatbusca::ui::{display_content, display_error, display_query_plan, display_warning};
use clap::Parser;
use std::fs;
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args).await {
        display_error(&e);
        process::exit(1);
    }
}

async fn run(args: &Args) -> Result<()> {
    let request = build_request(args)?;

    if args.dry_run {
        match request.last_user_turn() {
            Some(turn) => display_query_plan(&plan_query(&turn.content)),
            None => display_warning("The last message is not from the user; nothing to search for."),
        }
        return Ok(());
    }

    let config = Config::from_env_and_args(args)?;

    let search = config
        .search
        .as_ref()
        .map(GoogleSearchClient::new)
        .transpose()?;
    let search_timeout = config
        .search
        .as_ref()
        .map(|settings| settings.timeout)
        .unwrap_or(10);
    let chat = OpenAiChatClient::new(&config.api_key, &config.api_endpoint, config.request_timeout)?;

    let orchestrator = Orchestrator::new(
        search,
        chat,
        ChatDefaults {
            model: config.model.clone(),
            temperature: config.temperature,
        },
    )
    .with_search_timeout(Duration::from_secs(search_timeout))
    .with_verbose(config.verbose);

    let response = orchestrator.run(&request).await?;

    if args.raw {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        match extract_content(&response)? {
            Some(content) => display_content(&content),
            None => display_warning("The model returned no content."),
        }
    }

    Ok(())
}

/// A request file is taken as is; positional words become a single user
/// turn that may trigger a search. CLI flags override both.
fn build_request(args: &Args) -> Result<ConversationRequest> {
    let mut request = match &args.request_file {
        Some(path) => {
            let contents = fs::read_to_string(path)?;
            serde_json::from_str::<ConversationRequest>(&contents)?
        }
        None => {
            if args.message.is_empty() {
                return Err(ChatBuscaError::Other(
                    "No message given. Usage: chatbusca [OPTIONS] <message>".to_string(),
                ));
            }
            ConversationRequest::new(vec![ConversationTurn::user(args.message.join(" "))])
                .with_web_search(true)
        }
    };

    if args.force_search {
        request.use_web_search = true;
    }
    if args.no_search {
        request.use_web_search = false;
    }
    if let Some(model) = &args.model {
        request.model = Some(model.clone());
    }
    if let Some(temperature) = args.temperature {
        request.temperature = Some(temperature);
    }

    Ok(request)
}
