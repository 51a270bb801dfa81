use crate::attom::{AddressStyle, DEFAULT_BASE_URL, AttomSettings, DetailEndpoint};
use crate::classifier::huggingface::{DEFAULT_BASE_URL as HF_DEFAULT_BASE_URL, DEFAULT_GENERATIVE_MODEL};
use crate::classifier::{ModelSettings, Strategy};
use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::time::Duration;

/// Property records lookup and ZIP code owner-name analysis.
#[derive(Debug, Parser)]
#[command(name = "property_explorer", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub api: ApiArgs,

    #[command(flatten)]
    pub model: ModelArgs,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the web UI (default).
    Serve,

    /// Look up one address and print its summary.
    Lookup {
        #[arg(long)]
        street: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        state: String,
        #[arg(long)]
        zip: Option<String>,
        /// Print the raw JSON response instead of the summary.
        #[arg(long)]
        json: bool,
    },

    /// Sample a ZIP code and print the label distribution.
    Analyze { zip: String },

    /// Classify names with every strategy and print them side by side.
    Compare {
        #[arg(required = true)]
        names: Vec<String>,
    },
}

#[derive(Debug, Clone, Args)]
pub struct ServerArgs {
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    #[arg(long, env = "MAX_WORKERS", default_value_t = 8)]
    pub max_workers: usize,
}

#[derive(Debug, Clone, Args)]
pub struct ApiArgs {
    #[arg(long, env = "ATTOM_API_KEY", hide_env_values = true)]
    pub attom_api_key: Option<String>,

    #[arg(long, env = "ATTOM_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub attom_base_url: String,

    #[arg(long, env = "ATTOM_DETAIL_ENDPOINT", value_enum, default_value = "basicprofile")]
    pub detail_endpoint: DetailEndpoint,

    #[arg(long, env = "ATTOM_ADDRESS_STYLE", value_enum, default_value = "split")]
    pub address_style: AddressStyle,

    #[arg(long, env = "ATTOM_PAGE_SIZE", default_value_t = 100)]
    pub page_size: u32,

    #[arg(long, env = "ATTOM_TIMEOUT_SECS", default_value_t = 15)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Args)]
pub struct ModelArgs {
    #[arg(long, env = "NAME_CLASSIFIER", value_enum, default_value = "generative")]
    pub classifier: Strategy,

    #[arg(long, env = "HF_API_TOKEN", hide_env_values = true)]
    pub hf_api_token: Option<String>,

    #[arg(long, env = "HF_BASE_URL", default_value = HF_DEFAULT_BASE_URL)]
    pub hf_base_url: String,

    #[arg(long, env = "HF_GENERATIVE_MODEL", default_value = DEFAULT_GENERATIVE_MODEL)]
    pub generative_model: String,

    #[arg(long, env = "HF_CLASSIFIER_MODEL")]
    pub classifier_model: Option<String>,

    #[arg(long, env = "HF_TIMEOUT_SECS", default_value_t = 30)]
    pub model_timeout_secs: u64,
}

impl ApiArgs {
    pub fn settings(&self) -> AttomSettings {
        AttomSettings {
            api_key: self.attom_api_key.clone(),
            base_url: self.attom_base_url.clone(),
            detail_endpoint: self.detail_endpoint,
            address_style: self.address_style,
            // The listing endpoint caps a page at 100 entries.
            page_size: self.page_size.clamp(1, 100),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

impl ModelArgs {
    pub fn settings(&self) -> ModelSettings {
        ModelSettings {
            base_url: self.hf_base_url.clone(),
            token: self.hf_api_token.clone(),
            generative_model: self.generative_model.clone(),
            classifier_model: self.classifier_model.clone().filter(|m| !m.trim().is_empty()),
            timeout: Duration::from_secs(self.model_timeout_secs),
        }
    }
}

impl Cli {
    /// Subcommand to run; `serve` when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }
}
