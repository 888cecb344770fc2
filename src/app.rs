use crate::config::{CliConfig, ReportFormat};
use crate::core::rules;
use crate::report;
use crate::utils::error::{PatchError, Result};
use crate::utils::validation::Validate;
use crate::{FsStore, PatchEngine, Patcher};
use std::io::Write;

/// 執行一次 CLI 呼叫，報告寫到 `out`
pub fn run<W: Write>(config: &CliConfig, out: &mut W) -> Result<()> {
    config.validate()?;

    let patcher = Patcher::new(rules::load_rules(config.rules.as_deref())?)?;

    if config.list_rules {
        let table = report::render_rule_table(patcher.rules(), config.verbose);
        return out.write_all(table.as_bytes()).map_err(PatchError::OutputError);
    }

    let path = config.target_file()?;
    let engine = PatchEngine::new(FsStore::new(), patcher).with_dry_run(config.dry_run);
    let patch_report = engine.run(path)?;

    let rendered = match config.report {
        ReportFormat::Text => report::render_text(&patch_report),
        ReportFormat::Json => format!("{}\n", report::render_json(&patch_report)?),
    };
    out.write_all(rendered.as_bytes()).map_err(PatchError::OutputError)?;

    tracing::info!("✅ {}", report::summary_line(&patch_report));
    Ok(())
}
