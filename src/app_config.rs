use crate::distance::DistanceFormula;
use crate::tracker::DEFAULT_THRESHOLD_KM;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    simulation: Simulation,
    data: Data,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(
            Config::builder()
                .add_source(config::File::with_name("config").required(true))
                .add_source(config::File::with_name("config_local").required(false))
                .add_source(config::Environment::with_prefix("APPROACH").separator("__")),
        )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn data(&self) -> &Data {
        &self.data
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Simulation {
    #[serde(default = "default_threshold_km")]
    threshold_km: f64,
    #[serde(default)]
    formula: DistanceFormula,
    #[serde(default, with = "humantime_serde")]
    step_delay: Option<Duration>,
}

fn default_threshold_km() -> f64 {
    DEFAULT_THRESHOLD_KM
}

impl Simulation {
    pub fn threshold_km(&self) -> f64 {
        self.threshold_km
    }

    pub fn formula(&self) -> DistanceFormula {
        self.formula
    }

    /// The pause between two samples, `None` or zero runs the simulation without pausing.
    pub fn step_delay(&self) -> Option<Duration> {
        self.step_delay.filter(|delay| !delay.is_zero())
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Simulation {
            threshold_km: DEFAULT_THRESHOLD_KM,
            formula: DistanceFormula::default(),
            step_delay: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Data {
    cities_file: PathBuf,
    track_file: PathBuf,
}

impl Data {
    pub fn cities_file(&self) -> &Path {
        &self.cities_file
    }

    pub fn track_file(&self) -> &Path {
        &self.track_file
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                simulation: Simulation::default(),
                data: Data {
                    cities_file: PathBuf::from("tests/resources/cities.json"),
                    track_file: PathBuf::from("tests/resources/tracks/d1.json"),
                },
            },
        }
    }

    pub fn threshold_km(mut self, threshold_km: f64) -> Self {
        self.config.simulation.threshold_km = threshold_km;
        self
    }

    pub fn formula(mut self, formula: DistanceFormula) -> Self {
        self.config.simulation.formula = formula;
        self
    }

    pub fn step_delay(mut self, step_delay: Duration) -> Self {
        self.config.simulation.step_delay = Some(step_delay);
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn from_toml(toml: &str) -> Result<AppConfig, ConfigError> {
        AppConfig::from_builder(Config::builder().add_source(config::File::from_str(toml, FileFormat::Toml)))
    }

    #[test]
    fn reads_all_settings() -> Result<(), ConfigError> {
        let config = from_toml(
            r#"
            [simulation]
            threshold_km = 2.5
            formula = "vincenty_spherical"
            step_delay = "250ms"

            [data]
            cities_file = "cities.json"
            track_file = "track.json"
            "#,
        )?;

        assert_eq!(config.simulation().threshold_km(), 2.5);
        assert_eq!(config.simulation().formula(), DistanceFormula::VincentySpherical);
        assert_eq!(config.simulation().step_delay(), Some(Duration::from_millis(250)));
        assert_eq!(config.data().cities_file(), Path::new("cities.json"));
        assert_eq!(config.data().track_file(), Path::new("track.json"));
        Ok(())
    }

    #[test]
    fn simulation_settings_have_defaults() -> Result<(), ConfigError> {
        let config = from_toml(
            r#"
            [simulation]

            [data]
            cities_file = "cities.json"
            track_file = "track.json"
            "#,
        )?;

        assert_eq!(config.simulation().threshold_km(), 5.0);
        assert_eq!(config.simulation().formula(), DistanceFormula::Haversine);
        assert_eq!(config.simulation().step_delay(), None);
        Ok(())
    }

    #[rstest]
    #[case("0ms", None)]
    #[case("1s", Some(Duration::from_secs(1)))]
    #[case("1m 30s", Some(Duration::from_secs(90)))]
    fn step_delay_of_zero_means_no_delay(#[case] delay: &str, #[case] expected: Option<Duration>) -> Result<(), ConfigError> {
        let config = from_toml(&format!(
            "[simulation]\nstep_delay = \"{}\"\n[data]\ncities_file = \"c.json\"\ntrack_file = \"t.json\"\n",
            delay
        ))?;

        assert_eq!(config.simulation().step_delay(), expected);
        Ok(())
    }

    #[test]
    fn unknown_formula_is_rejected() {
        let result = from_toml("[simulation]\nformula = \"flat_earth\"\n[data]\ncities_file = \"c.json\"\ntrack_file = \"t.json\"\n");

        assert!(result.is_err());
    }

    #[test]
    fn missing_data_section_is_rejected() {
        let result = from_toml("[simulation]\nthreshold_km = 1.0\n");

        assert!(result.is_err());
    }
}
