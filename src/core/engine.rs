use crate::core::patcher::Patcher;
use crate::domain::model::{Document, PatchReport};
use crate::domain::ports::DocumentStore;
use crate::utils::error::Result;

pub struct PatchEngine<S: DocumentStore> {
    store: S,
    patcher: Patcher,
    dry_run: bool,
}

impl<S: DocumentStore> PatchEngine<S> {
    pub fn new(store: S, patcher: Patcher) -> Self {
        Self {
            store,
            patcher,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// 讀取、套用全部規則，最後一次寫回。規則全部在記憶體內完成，
    /// 所以檔案不是完整更新就是完全沒動
    pub fn run(&self, path: &str) -> Result<PatchReport> {
        tracing::info!("📖 Reading {}", path);
        let document = Document::new(self.store.read_text(path)?);
        tracing::debug!(
            "Loaded {} bytes, line ending {:?}",
            document.text.len(),
            document.line_ending
        );

        tracing::info!("🔧 Applying {} rule(s)", self.patcher.rules().len());
        let (patched, outcomes) = self.patcher.patch(&document);
        let changed = patched != document.text;

        if self.dry_run {
            tracing::info!("🔍 DRY RUN MODE - {} not written", path);
        } else if changed {
            tracing::info!("💾 Writing {}", path);
            self.store.write_text(path, &patched)?;
        } else {
            tracing::info!("No rule changed the text, {} left untouched", path);
        }

        Ok(PatchReport {
            path: path.to_string(),
            line_ending: document.line_ending,
            rules: outcomes,
            changed,
            dry_run: self.dry_run,
            bytes_before: document.text.len(),
            bytes_after: patched.len(),
        })
    }
}
