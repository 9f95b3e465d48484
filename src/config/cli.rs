use super::toml_config::{ClientFileConfig, DEFAULT_TIMEOUT_SECONDS};
use super::ClientSettings;
use crate::app::render::OutputFormat;
use crate::domain::wire::RESOURCES_FACADE;
use crate::utils::error::{ClientError, Result};
use crate::utils::validation::Validate;
use clap::Parser;
use std::collections::HashMap;

#[derive(Debug, Clone, Parser)]
#[command(name = "show-resources")]
#[command(about = "Display the charm-defined resources for a service")]
pub struct CliConfig {
    /// Service whose resources are listed
    pub service: String,

    /// Output format: tabular, yaml or json
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Controller RPC endpoint (overrides the config file)
    #[arg(long, env = "RESOURCE_SPECS_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Request timeout for the controller call
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// 讀取設定檔（若有）並套用命令列覆蓋
    pub fn resolve_settings(&self) -> Result<ClientSettings> {
        let mut settings = match &self.config {
            Some(path) => {
                let file = ClientFileConfig::from_file(path)?;
                file.validate()?;
                ClientSettings::from_file_config(&file)?
            }
            None => ClientSettings {
                endpoint: String::new(),
                facade: RESOURCES_FACADE.to_string(),
                timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
                headers: HashMap::new(),
                format: OutputFormat::default(),
            },
        };

        if let Some(endpoint) = &self.endpoint {
            settings.endpoint = endpoint.clone();
        }
        if settings.endpoint.is_empty() {
            return Err(ClientError::MissingConfigError {
                field: "endpoint".to_string(),
            });
        }
        if let Some(timeout) = self.timeout_seconds {
            settings.timeout_seconds = timeout;
        }
        if let Some(format) = self.format {
            settings.format = format;
        }

        settings.validate()?;
        Ok(settings)
    }
}
