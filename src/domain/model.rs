use serde::{Deserialize, Serialize};

/// 文件的換行風格，以第一個換行符判定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn detect(text: &str) -> Self {
        match text.find('\n') {
            Some(idx) if idx > 0 && text.as_bytes()[idx - 1] == b'\r' => LineEnding::Crlf,
            _ => LineEnding::Lf,
        }
    }

    /// 取被比對區段自己的換行風格；區段內沒有換行時退回 `fallback`
    pub fn of_region(region: &str, fallback: LineEnding) -> Self {
        if region.contains("\r\n") {
            LineEnding::Crlf
        } else if region.contains('\n') {
            LineEnding::Lf
        } else {
            fallback
        }
    }

    /// 將以 `\n` 撰寫的內容轉成此換行風格
    pub fn render(&self, content: &str) -> String {
        let normalized = content.replace("\r\n", "\n");
        match self {
            LineEnding::Lf => normalized,
            LineEnding::Crlf => normalized.replace('\n', "\r\n"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub text: String,
    pub line_ending: LineEnding,
}

impl Document {
    pub fn new(text: String) -> Self {
        let line_ending = LineEnding::detect(&text);
        Self { text, line_ending }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// 最多替換一次
    #[default]
    First,
    All,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleAction {
    /// Keeps both anchors, drops whatever `remove` matched between them and
    /// places `insert` there verbatim.
    Insert {
        before: String,
        remove: Option<String>,
        after: String,
        insert: String,
    },
    /// Plain regex substitution; `replacement` may use `$1` / `${name}`.
    Substitute {
        pattern: String,
        replacement: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub name: String,
    pub language: String,
    pub description: Option<String>,
    pub mode: MatchMode,
    pub action: RuleAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleOutcome {
    pub name: String,
    pub language: String,
    pub matches_found: usize,
    pub replacements: usize,
}

impl RuleOutcome {
    pub fn applied(&self) -> bool {
        self.replacements > 0
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PatchReport {
    pub path: String,
    pub line_ending: LineEnding,
    pub rules: Vec<RuleOutcome>,
    pub changed: bool,
    pub dry_run: bool,
    pub bytes_before: usize,
    pub bytes_after: usize,
}

impl PatchReport {
    pub fn applied_count(&self) -> usize {
        self.rules.iter().filter(|r| r.applied()).count()
    }

    pub fn unmatched(&self) -> impl Iterator<Item = &RuleOutcome> {
        self.rules.iter().filter(|r| r.matches_found == 0)
    }
}
