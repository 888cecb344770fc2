use crate::domain::model::{Document, LineEnding, MatchMode, Rule, RuleAction, RuleOutcome};
use crate::utils::error::{PatchError, Result};
use regex::{Captures, Regex};

const BEFORE_GROUP: &str = "anchor_before";
const AFTER_GROUP: &str = "anchor_after";

#[derive(Debug, Clone)]
pub struct CompiledRule {
    rule: Rule,
    regex: Regex,
}

impl CompiledRule {
    pub fn compile(rule: Rule) -> Result<Self> {
        let pattern = match &rule.action {
            RuleAction::Insert {
                before,
                remove,
                after,
                ..
            } => {
                let removed = remove
                    .as_deref()
                    .filter(|r| !r.is_empty())
                    .map(|r| format!("(?:{})", r))
                    .unwrap_or_default();
                format!(
                    "(?s)(?P<{}>{}){}(?P<{}>{})",
                    BEFORE_GROUP, before, removed, AFTER_GROUP, after
                )
            }
            RuleAction::Substitute { pattern, .. } => pattern.clone(),
        };

        let regex = Regex::new(&pattern).map_err(|source| PatchError::RulePattern {
            rule: rule.name.clone(),
            source,
        })?;

        Ok(Self { rule, regex })
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// 對文字套用單一規則；沒有匹配時原樣返回
    pub fn apply(&self, text: &str, line_ending: LineEnding) -> (String, RuleOutcome) {
        let matches_found = self.regex.find_iter(text).count();
        let limit = match self.rule.mode {
            MatchMode::First => 1,
            MatchMode::All => 0,
        };

        let patched = if matches_found == 0 {
            text.to_string()
        } else {
            match &self.rule.action {
                RuleAction::Insert { insert, .. } => self
                    .regex
                    .replacen(text, limit, |caps: &Captures| {
                        // 插入內容跟隨被修補區段的換行風格，而不是整份檔案的
                        let region = LineEnding::of_region(&caps[0], line_ending);
                        format!(
                            "{}{}{}",
                            &caps[BEFORE_GROUP],
                            region.render(insert),
                            &caps[AFTER_GROUP]
                        )
                    })
                    .into_owned(),
                RuleAction::Substitute { replacement, .. } => self
                    .regex
                    .replacen(text, limit, replacement.as_str())
                    .into_owned(),
            }
        };

        let replacements = match self.rule.mode {
            MatchMode::First => matches_found.min(1),
            MatchMode::All => matches_found,
        };

        let outcome = RuleOutcome {
            name: self.rule.name.clone(),
            language: self.rule.language.clone(),
            matches_found,
            replacements,
        };

        (patched, outcome)
    }
}

pub fn compile_rules(rules: Vec<Rule>) -> Result<Vec<CompiledRule>> {
    rules.into_iter().map(CompiledRule::compile).collect()
}

/// 依序套用所有規則，每條規則作用在前一條的輸出上
pub fn apply_rules(document: &Document, rules: &[CompiledRule]) -> (String, Vec<RuleOutcome>) {
    let mut text = document.text.clone();
    let mut outcomes = Vec::with_capacity(rules.len());

    for rule in rules {
        let (patched, outcome) = rule.apply(&text, document.line_ending);

        if outcome.matches_found == 0 {
            tracing::warn!(
                "⚠️ Rule '{}' ({}) matched nothing, text left unchanged",
                outcome.name,
                outcome.language
            );
        } else if rule.rule().mode == MatchMode::First && outcome.matches_found > 1 {
            tracing::warn!(
                "⚠️ Rule '{}' matched {} times, only the first occurrence was patched",
                outcome.name,
                outcome.matches_found
            );
        } else {
            tracing::debug!(
                "Rule '{}' ({}) replaced {} occurrence(s)",
                outcome.name,
                outcome.language,
                outcome.replacements
            );
        }

        text = patched;
        outcomes.push(outcome);
    }

    (text, outcomes)
}

/// 已編譯、固定順序的規則集
#[derive(Debug, Clone)]
pub struct Patcher {
    rules: Vec<CompiledRule>,
}

impl Patcher {
    pub fn new(rules: Vec<Rule>) -> Result<Self> {
        Ok(Self {
            rules: compile_rules(rules)?,
        })
    }

    pub fn builtin() -> Result<Self> {
        Self::new(crate::core::rules::builtin_rules()?)
    }

    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    pub fn patch(&self, document: &Document) -> (String, Vec<RuleOutcome>) {
        apply_rules(document, &self.rules)
    }

    pub fn patch_str(&self, text: &str) -> String {
        self.patch(&Document::new(text.to_string())).0
    }
}
