use crate::config::rule_config::RuleSetConfig;
use crate::domain::model::Rule;
use crate::utils::error::Result;
use std::path::Path;

pub const BUILTIN_RULES_TOML: &str = include_str!("../../rules/builtin.toml");

/// 內建的五條規則，依套用順序排列
pub fn builtin_rules() -> Result<Vec<Rule>> {
    RuleSetConfig::from_toml_str(BUILTIN_RULES_TOML)?.into_rules()
}

/// 有指定規則檔時使用規則檔，否則使用內建規則
pub fn load_rules<P: AsRef<Path>>(rules_file: Option<P>) -> Result<Vec<Rule>> {
    match rules_file {
        Some(path) => {
            tracing::info!("📁 Loading rules from: {}", path.as_ref().display());
            RuleSetConfig::from_file(path)?.into_rules()
        }
        None => {
            tracing::debug!("Using built-in rule table");
            builtin_rules()
        }
    }
}
