use std::{fs, path::Path};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::AnalyticsError;

/// Ceilings separating the Low, Medium and High salary bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryBands {
    /// Salaries strictly below this are Low.
    pub low_ceiling: f64,
    /// Salaries strictly below this (and not Low) are Medium; the rest are High.
    pub medium_ceiling: f64,
}

impl Default for SalaryBands {
    fn default() -> Self {
        Self {
            low_ceiling: 60_000.0,
            medium_ceiling: 80_000.0,
        }
    }
}

/// Tunables for the queries shown in the report.
///
/// Every field is optional in JSON; missing ones keep their default.
///
/// ```
/// use employee_analytics::config::AnalyticsConfig;
///
/// let config = AnalyticsConfig::from_json_str(r#"{ "young_age_limit": 35 }"#).unwrap();
///
/// assert_eq!(config.young_age_limit, 35);
/// assert_eq!(config.focus_department, "Engineering");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Department used by the filtering section.
    pub focus_department: String,
    /// Salaries strictly above this are "high earners".
    pub high_earner_threshold: f64,
    /// Employees strictly younger than this land in the "young" partition.
    pub young_age_limit: u32,
    pub salary_bands: SalaryBands,
    /// How many names the name-descending listing keeps.
    pub top_names: usize,
    pub name_separator: String,
    /// Upper bound (inclusive) of the sum-of-squares range.
    pub sum_of_squares_upper: u64,
    pub parallel_workers: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            focus_department: "Engineering".to_string(),
            high_earner_threshold: 60_000.0,
            young_age_limit: 30,
            salary_bands: SalaryBands::default(),
            top_names: 3,
            name_separator: ", ".to_string(),
            sum_of_squares_upper: 1_000_000,
            parallel_workers: 4,
        }
    }
}

impl AnalyticsConfig {
    pub fn from_json_str(json: &str) -> Result<Self, AnalyticsError> {
        let config: AnalyticsConfig =
            serde_json::from_str(json).map_err(|e| AnalyticsError::Config(e.to_string()))?;
        config.validate()?;
        config.trace_loaded();
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, AnalyticsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| AnalyticsError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    /// Rejects values that would make the report meaningless.
    pub fn validate(&self) -> Result<(), AnalyticsError> {
        if self.salary_bands.low_ceiling > self.salary_bands.medium_ceiling {
            return Err(AnalyticsError::Config(format!(
                "low salary ceiling {} is above medium ceiling {}",
                self.salary_bands.low_ceiling, self.salary_bands.medium_ceiling
            )));
        }
        if self.parallel_workers == 0 {
            return Err(AnalyticsError::Config(
                "parallel_workers must be at least 1".to_string(),
            ));
        }
        // the total grows as n^3 / 3
        if self.sum_of_squares_upper > 2_000_000 {
            return Err(AnalyticsError::Config(format!(
                "sum_of_squares_upper {} would overflow a u64 total",
                self.sum_of_squares_upper
            )));
        }
        Ok(())
    }

    fn trace_loaded(&self) {
        info!(
            "Loaded config: focus_department={}, young_age_limit={}, parallel_workers={}",
            self.focus_department, self.young_age_limit, self.parallel_workers
        );
        debug!("Config loaded (full debug): {:?}", self);
    }
}
