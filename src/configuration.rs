use std::time::Duration;

use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub fetcher: FetcherSettings,
    pub output: OutputSettings,
    pub business_summary: BusinessSummaryTemplate,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

impl Default for ApplicationSettings {
    fn default() -> Self {
        ApplicationSettings {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct FetcherSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub seed_timeout_secs: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub probe_timeout_secs: u64,
    /// Falls back to a random real browser identity when unset.
    pub user_agent: Option<String>,
}

impl FetcherSettings {
    pub fn seed_timeout(&self) -> Duration {
        Duration::from_secs(self.seed_timeout_secs)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }
}

impl Default for FetcherSettings {
    fn default() -> Self {
        FetcherSettings {
            seed_timeout_secs: 10,
            probe_timeout_secs: 5,
            user_agent: None,
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct OutputSettings {
    pub directory: String,
    pub file_name: String,
    pub persist: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        OutputSettings {
            directory: "output".to_string(),
            file_name: "company.json".to_string(),
            persist: true,
        }
    }
}

/// Fixed business summary copied into every profile.
///
/// This is a placeholder until a real summarisation step exists; nothing in it
/// is read from the scraped site.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct BusinessSummaryTemplate {
    pub what_they_do: String,
    pub primary_offerings: Vec<String>,
    pub target_segments: Vec<String>,
}

impl Default for BusinessSummaryTemplate {
    fn default() -> Self {
        BusinessSummaryTemplate {
            what_they_do: "The company provides technology-driven products and services \
                focused on data analytics, market insights, and decision support \
                for enterprise clients across multiple industries."
                .to_string(),
            primary_offerings: vec![
                "Market analytics platforms".to_string(),
                "Consumer insights reports".to_string(),
                "Data integration solutions".to_string(),
            ],
            target_segments: vec![
                "Retail".to_string(),
                "Consumer goods".to_string(),
                "Enterprise businesses".to_string(),
            ],
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Message(e.to_string()))?;
    let configuration_directory = base_path.join("configuration");

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{BusinessSummaryTemplate, Settings};

    #[test]
    fn defaults_match_reference_timeouts() {
        let settings = Settings::default();

        assert_eq!(settings.fetcher.seed_timeout(), Duration::from_secs(10));
        assert_eq!(settings.fetcher.probe_timeout(), Duration::from_secs(5));
        assert_eq!(settings.output.file_name, "company.json");
    }

    #[test]
    fn partial_sources_keep_defaults() {
        let settings: Settings = config::Config::builder()
            .set_override("fetcher.probe_timeout_secs", "2")
            .unwrap()
            .set_override("application.port", "9000")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.fetcher.probe_timeout_secs, 2);
        assert_eq!(settings.fetcher.seed_timeout_secs, 10);
        assert_eq!(settings.application.port, 9000);
        assert_eq!(settings.business_summary, BusinessSummaryTemplate::default());
    }
}
