use crate::core::report::DEFAULT_DATE_FORMAT;
use crate::errors::{AppError, AppResult};
use crate::models::report::DateOrdering;
use crate::utils::date::try_format_date;
use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default)]
    pub report_order: DateOrdering,
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
    #[serde(default = "default_seed_demo_users")]
    pub seed_demo_users: bool,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}
fn default_min_password_length() -> usize {
    6
}
fn default_seed_demo_users() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            date_format: default_date_format(),
            report_order: DateOrdering::default(),
            min_password_length: default_min_password_length(),
            seed_demo_users: default_seed_demo_users(),
        }
    }

    /// Return the standard configuration directory (`~/.rtimeclock`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rtimeclock")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimeclock.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rtimeclock.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values that would break report rendering later on.
    pub fn validate(&self) -> AppResult<()> {
        // Date-only rendering must succeed: time fields like %H have nothing
        // to format on a calendar date.
        let sample = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap_or_default();
        if self.date_format.trim().is_empty()
            || StrftimeItems::new(&self.date_format).any(|i| matches!(i, Item::Error))
            || try_format_date(sample, &self.date_format).is_none()
        {
            return Err(AppError::Config(format!(
                "invalid date_format '{}'",
                self.date_format
            )));
        }

        if self.min_password_length == 0 {
            return Err(AppError::Config(
                "min_password_length must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Initialize configuration directory and file.
    ///
    /// Returns the configuration that `init` should use. In test mode the
    /// file on disk is left untouched.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => {
                let p = PathBuf::from(name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        let config = Self::with_database(db_path);

        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }
}
