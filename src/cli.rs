use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "chatbusca")]
#[command(
    about = "Chat completions with automatic web search for weather and news questions",
    long_about = None
)]
pub struct Args {
    #[arg(
        long = "request",
        value_name = "FILE",
        help = "Read a JSON chat request ({messages, model, temperature, useWebSearch})"
    )]
    pub request_file: Option<PathBuf>,

    #[arg(short = 's', long = "search", help = "Allow a web search for this message")]
    pub force_search: bool,

    #[arg(
        long = "no-search",
        conflicts_with = "force_search",
        help = "Never search the web, even if the request asks for it"
    )]
    pub no_search: bool,

    #[arg(short = 'm', long = "model", help = "Chat model identifier")]
    pub model: Option<String>,

    #[arg(short = 't', long = "temperature", help = "Sampling temperature")]
    pub temperature: Option<f32>,

    #[arg(
        long = "api-endpoint",
        help = "Custom chat API base URL (e.g., http://localhost:11434/v1)"
    )]
    pub api_endpoint: Option<String>,

    #[arg(
        long = "dry-run",
        help = "Only print the search query the message would trigger"
    )]
    pub dry_run: bool,

    #[arg(long = "raw", help = "Print the chat completion JSON as received")]
    pub raw: bool,

    #[arg(short = 'v', long = "verbose", help = "Trace search decisions on stderr")]
    pub verbose: bool,

    #[arg(help = "Message to send")]
    pub message: Vec<String>,
}
