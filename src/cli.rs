use clap::Parser;
use crate::config::{API_URL_ENV, DEFAULT_API_URL};
use crate::i18n::Language;

#[derive(Parser)]
#[command(name = "trader-console")]
#[command(about = "Terminal form for adding a trader to the trading bot")]
pub struct Cli {
    /// Base URL of the trading bot API (e.g., "http://localhost:8080")
    #[arg(short, long, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Display language
    #[arg(short, long, value_enum, default_value_t = Language::En)]
    pub lang: Language,
}
