use crate::core::patcher::CompiledRule;
use crate::domain::model::PatchReport;
use crate::utils::error::Result;
use std::fmt::Write;

/// 每條規則一行的文字報告
pub fn render_text(report: &PatchReport) -> String {
    let name_width = report
        .rules
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut out = String::new();
    let _ = writeln!(out, "📄 {}", report.path);
    for outcome in &report.rules {
        let marker = if outcome.applied() { "✅" } else { "➖" };
        let _ = writeln!(
            out,
            "  {} {:<width$}  [{}]  found {}, replaced {}",
            marker,
            outcome.name,
            outcome.language,
            outcome.matches_found,
            outcome.replacements,
            width = name_width
        );
    }
    out.push_str(&summary_line(report));
    out.push('\n');
    out
}

pub fn render_json(report: &PatchReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn summary_line(report: &PatchReport) -> String {
    let applied = report.applied_count();
    let total = report.rules.len();

    if applied == 0 {
        return format!("No translation rule matched ({} checked); file unchanged", total);
    }

    let verb = if report.dry_run { "would be applied" } else { "applied" };
    format!(
        "Translation fixes {}: {} of {} rules ({} -> {} bytes)",
        verb, applied, total, report.bytes_before, report.bytes_after
    )
}

/// `with_patterns` 為真時，每條規則下方附上編譯後的正規表達式
pub fn render_rule_table(rules: &[CompiledRule], with_patterns: bool) -> String {
    let mut out = String::new();
    for (index, compiled) in rules.iter().enumerate() {
        let rule = compiled.rule();
        let _ = writeln!(
            out,
            "{}. {} [{}] {:?}{}",
            index + 1,
            rule.name,
            rule.language,
            rule.mode,
            rule.description
                .as_deref()
                .map(|d| format!(" - {}", d))
                .unwrap_or_default()
        );
        if with_patterns {
            let _ = writeln!(out, "   pattern: {}", compiled.pattern());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{LineEnding, RuleOutcome};

    fn report(replacements: &[usize], dry_run: bool) -> PatchReport {
        PatchReport {
            path: "useLanguage.ts".to_string(),
            line_ending: LineEnding::Crlf,
            rules: replacements
                .iter()
                .enumerate()
                .map(|(i, n)| RuleOutcome {
                    name: format!("rule-{}", i),
                    language: "en".to_string(),
                    matches_found: *n,
                    replacements: *n,
                })
                .collect(),
            changed: replacements.iter().any(|n| *n > 0),
            dry_run,
            bytes_before: 10,
            bytes_after: 20,
        }
    }

    #[test]
    fn test_summary_distinguishes_no_match() {
        assert_eq!(
            summary_line(&report(&[0, 0], false)),
            "No translation rule matched (2 checked); file unchanged"
        );
        assert_eq!(
            summary_line(&report(&[1, 0], false)),
            "Translation fixes applied: 1 of 2 rules (10 -> 20 bytes)"
        );
        assert!(summary_line(&report(&[1], true)).contains("would be applied"));
    }

    #[test]
    fn test_text_report_lists_every_rule() {
        let text = render_text(&report(&[1, 0], false));
        assert!(text.contains("rule-0"));
        assert!(text.contains("rule-1"));
        assert!(text.contains("found 0, replaced 0"));
    }

    #[test]
    fn test_json_report_fields() {
        let json = render_json(&report(&[1], false)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["line_ending"], "crlf");
        assert_eq!(value["rules"][0]["replacements"], 1);
        assert_eq!(value["changed"], true);
    }

    #[test]
    fn test_rule_table_for_builtin_rules() {
        let patcher = crate::core::patcher::Patcher::builtin().unwrap();
        let table = render_rule_table(patcher.rules(), false);
        assert!(table.starts_with("1. ko-footer-links [ko]"));
        assert_eq!(table.lines().count(), 5);
    }

    #[test]
    fn test_rule_table_with_patterns() {
        let patcher = crate::core::patcher::Patcher::builtin().unwrap();
        let table = render_rule_table(patcher.rules(), true);
        assert_eq!(table.lines().count(), 10);
        let second = table.lines().nth(1).unwrap();
        assert!(second.starts_with("   pattern: (?s)(?P<anchor_before>    // Footer Legal Links"));
    }
}
