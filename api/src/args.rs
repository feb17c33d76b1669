use clap::{Args as ClapArgs, Parser};
use leftover_chef_core::domain::common::{
    DEFAULT_SAVED_ITEMS_KEY, LLMConfig, LeftoverChefConfig, StorageConfig,
};
use leftover_chef_core::infrastructure::llm::gemini_client::DEFAULT_GEMINI_BASE_URL;

#[derive(Debug, Clone, Parser)]
#[command(name = "leftover-chef", version, about = "Leftover Chef API server")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    /// Save every generated preservation plan without waiting for the user.
    #[arg(
        long = "auto-save-preservation",
        env = "AUTO_SAVE_PRESERVATION",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub auto_save_preservation: bool,

    #[arg(
        long = "metrics-enabled",
        env = "METRICS_ENABLED",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub metrics_enabled: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(
        long = "gemini-api-key",
        env = "GEMINI_API_KEY",
        default_value = "",
        hide_env_values = true
    )]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-2.0-flash")]
    pub gemini_model: String,

    #[arg(long = "gemini-base-url", env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct StorageArgs {
    #[arg(long = "data-dir", env = "DATA_DIR", default_value = "./data")]
    pub data_dir: String,

    #[arg(long = "saved-items-key", env = "SAVED_ITEMS_KEY", default_value = DEFAULT_SAVED_ITEMS_KEY)]
    pub saved_items_key: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false, action = clap::ArgAction::Set)]
    pub json: bool,
}

impl From<Args> for LeftoverChefConfig {
    fn from(value: Args) -> Self {
        LeftoverChefConfig {
            storage: StorageConfig {
                data_dir: value.storage.data_dir,
                saved_items_key: value.storage.saved_items_key,
            },
            llm: LLMConfig {
                gemini_api_key: value.llm.gemini_api_key,
                gemini_model: value.llm.gemini_model,
                gemini_base_url: value.llm.gemini_base_url,
            },
        }
    }
}
