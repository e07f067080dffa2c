use crate::models::catalog::{Student, Subject};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub portal: PortalConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default = "default_subjects")]
    pub subjects: Vec<Subject>,
    #[serde(default = "default_students")]
    pub students: Vec<Student>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PortalConfig {
    /// Identity assigned to whoever signs in
    #[serde(default = "default_faculty_id")]
    pub faculty_id: String,
    /// Populate leave history with the demonstration entries at startup
    #[serde(default = "default_seed_demo_leaves")]
    pub seed_demo_leaves: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_console")]
    pub console: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    /// How long a toast stays visible; passed to sinks, not enforced here
    #[serde(default = "default_display_ms")]
    pub display_ms: u64,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            faculty_id: default_faculty_id(),
            seed_demo_leaves: default_seed_demo_leaves(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            console: default_console(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            display_ms: default_display_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            portal: PortalConfig::default(),
            logging: LoggingConfig::default(),
            notifications: NotificationConfig::default(),
            subjects: default_subjects(),
            students: default_students(),
        }
    }
}

// Default value functions
fn default_faculty_id() -> String {
    "FAC-2024-001".to_string()
}

fn default_seed_demo_leaves() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_console() -> bool {
    false
}

fn default_display_ms() -> u64 {
    3000
}

fn default_subjects() -> Vec<Subject> {
    vec![
        Subject::new("CS201", "Data Structures"),
        Subject::new("CS305", "Database Systems"),
        Subject::new("MA101", "Engineering Mathematics"),
    ]
}

fn default_students() -> Vec<Student> {
    vec![
        Student::new("21CS001", "Aarav Mehta"),
        Student::new("21CS002", "Diya Nair"),
        Student::new("21CS003", "Kabir Singh"),
        Student::new("21CS004", "Meera Iyer"),
        Student::new("21CS005", "Rohan Das"),
    ]
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` when given, otherwise use the built-in defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
        }
    }

    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|subject| subject.id == id)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.portal.faculty_id.trim().is_empty() {
            bail!("faculty_id must not be empty");
        }

        if self.subjects.is_empty() {
            bail!("At least one subject must be configured");
        }

        let mut subject_ids = HashSet::new();
        for subject in &self.subjects {
            if subject.id.trim().is_empty() || subject.name.trim().is_empty() {
                bail!("Subjects must have a non-empty id and name");
            }
            if !subject_ids.insert(subject.id.as_str()) {
                bail!("Duplicate subject id '{}'", subject.id);
            }
        }

        let mut roll_numbers = HashSet::new();
        for student in &self.students {
            if student.roll_number.trim().is_empty() {
                bail!("Students must have a non-empty roll_number");
            }
            if !roll_numbers.insert(student.roll_number.as_str()) {
                bail!("Duplicate roll_number '{}'", student.roll_number);
            }
        }

        // Validate logging config
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.logging.level
            );
        }

        let valid_formats = ["json", "console"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            bail!(
                "Invalid log format '{}'. Must be one of: json, console",
                self.logging.format
            );
        }

        if self.notifications.display_ms == 0 {
            bail!("display_ms must be greater than 0");
        }

        Ok(())
    }
}
