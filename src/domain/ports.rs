use crate::utils::error::Result;

/// 目標檔案的讀寫介面，讓轉換邏輯可以脫離磁碟測試
pub trait DocumentStore {
    fn read_text(&self, path: &str) -> Result<String>;
    fn write_text(&self, path: &str, text: &str) -> Result<()>;
}
