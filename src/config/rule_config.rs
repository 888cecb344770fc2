use crate::domain::model::{MatchMode, Rule, RuleAction};
use crate::utils::error::{PatchError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSetConfig {
    pub rule_set: Option<RuleSetMeta>,
    #[serde(rename = "rule", default)]
    pub rules: Vec<RuleConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSetMeta {
    pub name: String,
    pub description: Option<String>,
}

/// 單一規則。錨點形式 (`before`/`after`/`insert`) 與
/// 正規表達式形式 (`pattern`/`replacement`) 二擇一
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    pub name: String,
    pub language: String,
    pub description: Option<String>,
    pub mode: Option<MatchMode>,
    pub before: Option<String>,
    pub remove: Option<String>,
    pub after: Option<String>,
    pub insert: Option<String>,
    pub pattern: Option<String>,
    pub replacement: Option<String>,
}

impl RuleSetConfig {
    /// 從 TOML 檔案載入規則集
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let content = std::fs::read_to_string(path_ref)
            .map_err(|e| PatchError::io(path_ref.display().to_string(), e))?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析規則集
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PatchError::RuleSetParse {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SITE_NAME})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").map_err(|e| {
            PatchError::ConfigError {
                message: format!("env substitution pattern: {}", e),
            }
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// 驗證規則集的合理性
    pub fn validate_config(&self) -> Result<()> {
        if self.rules.is_empty() {
            return Err(PatchError::ConfigError {
                message: "Rule set contains no [[rule]] entries".to_string(),
            });
        }

        for rule in &self.rules {
            validation::validate_non_empty_string("rule.name", &rule.name)?;
            validation::validate_non_empty_string(
                &format!("rule.{}.language", rule.name),
                &rule.language,
            )?;
            rule.action()?;
        }

        validation::validate_unique_names("rule.name", self.rules.iter().map(|r| r.name.as_str()))
    }

    /// 轉成依序套用的規則清單
    pub fn into_rules(self) -> Result<Vec<Rule>> {
        self.validate_config()?;
        self.rules.into_iter().map(RuleConfig::into_rule).collect()
    }

    pub fn name(&self) -> Option<&str> {
        self.rule_set.as_ref().map(|meta| meta.name.as_str())
    }
}

impl RuleConfig {
    fn action(&self) -> Result<RuleAction> {
        let anchored = self.before.is_some()
            || self.after.is_some()
            || self.insert.is_some()
            || self.remove.is_some();
        let substitution = self.pattern.is_some() || self.replacement.is_some();

        match (anchored, substitution) {
            (true, false) => {
                let field = |name: &str| format!("rule.{}.{}", self.name, name);
                let before = validation::validate_required_field(&field("before"), &self.before)?;
                let after = validation::validate_required_field(&field("after"), &self.after)?;
                let insert = validation::validate_required_field(&field("insert"), &self.insert)?;
                Ok(RuleAction::Insert {
                    before: before.clone(),
                    remove: self.remove.clone(),
                    after: after.clone(),
                    insert: insert.clone(),
                })
            }
            (false, true) => {
                let field = |name: &str| format!("rule.{}.{}", self.name, name);
                let pattern =
                    validation::validate_required_field(&field("pattern"), &self.pattern)?;
                let replacement =
                    validation::validate_required_field(&field("replacement"), &self.replacement)?;
                Ok(RuleAction::Substitute {
                    pattern: pattern.clone(),
                    replacement: replacement.clone(),
                })
            }
            (true, true) => Err(PatchError::ConfigError {
                message: format!(
                    "Rule '{}' mixes anchor fields with pattern/replacement",
                    self.name
                ),
            }),
            (false, false) => Err(PatchError::ConfigError {
                message: format!(
                    "Rule '{}' needs either before/after/insert or pattern/replacement",
                    self.name
                ),
            }),
        }
    }

    fn into_rule(self) -> Result<Rule> {
        let action = self.action()?;
        Ok(Rule {
            name: self.name,
            language: self.language,
            description: self.description,
            mode: self.mode.unwrap_or_default(),
            action,
        })
    }
}

impl Validate for RuleSetConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
