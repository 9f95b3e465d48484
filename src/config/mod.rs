#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::app::render::OutputFormat;
use crate::core::ConfigProvider;
use crate::domain::wire::RESOURCES_FACADE;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use std::collections::HashMap;
use toml_config::{ClientFileConfig, MAX_TIMEOUT_SECONDS};

/// 合併後的最終設定：檔案設定加上命令列覆蓋
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSettings {
    pub endpoint: String,
    pub facade: String,
    pub timeout_seconds: u64,
    pub headers: HashMap<String, String>,
    pub format: OutputFormat,
}

impl ClientSettings {
    pub fn from_file_config(file: &ClientFileConfig) -> Result<Self> {
        let format = match file.output_format() {
            Some(format) => format.parse()?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            endpoint: file.controller.endpoint.clone(),
            facade: file
                .controller
                .facade
                .clone()
                .unwrap_or_else(|| RESOURCES_FACADE.to_string()),
            timeout_seconds: file.timeout_seconds(),
            headers: file.controller.headers.clone().unwrap_or_default(),
            format,
        })
    }
}

impl ConfigProvider for ClientSettings {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn facade(&self) -> &str {
        &self.facade
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

impl Validate for ClientSettings {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_non_empty_string("facade", &self.facade)?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, MAX_TIMEOUT_SECONDS)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_from_file_defaults() {
        let file = ClientFileConfig::from_toml_str(
            r#"
[controller]
endpoint = "https://controller.example.com/rpc"
"#,
        )
        .unwrap();

        let settings = ClientSettings::from_file_config(&file).unwrap();

        assert_eq!(settings.facade, "Resources");
        assert_eq!(settings.format, OutputFormat::Tabular);
        assert!(settings.headers.is_empty());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_settings_rejects_unknown_format() {
        let file = ClientFileConfig::from_toml_str(
            r#"
[controller]
endpoint = "https://controller.example.com/rpc"

[output]
format = "xml"
"#,
        )
        .unwrap();

        assert!(ClientSettings::from_file_config(&file).is_err());
    }
}
