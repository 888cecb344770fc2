pub mod rule_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "translation-patcher")]
#[command(about = "Patch localized strings in a generated translation table")]
pub struct CliConfig {
    /// Translation source file to patch in place
    #[arg(env = "TRANSLATION_FILE", required_unless_present = "list_rules")]
    pub file: Option<String>,

    /// TOML rule file replacing the built-in rule table
    #[arg(long, env = "TRANSLATION_RULES")]
    pub rules: Option<String>,

    /// Apply the rules in memory and report, without writing the file
    #[arg(long)]
    pub dry_run: bool,

    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub report: ReportFormat,

    /// Print the active rule table and exit
    #[arg(long)]
    pub list_rules: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn target_file(&self) -> Result<&str> {
        validation::validate_required_field("file", &self.file).map(String::as_str)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if !self.list_rules {
            validation::validate_path("file", self.target_file()?)?;
        }
        if let Some(rules) = &self.rules {
            validation::validate_path("rules", rules)?;
        }
        Ok(())
    }
}
