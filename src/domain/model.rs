use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw text returned by the generative model, before formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCompletion {
    pub text: String,
    pub model: String,
}

/// An ordered sequence of lines, produced once and written once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDocument {
    pub lines: Vec<String>,
}

impl TextDocument {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// 以 `\n` 串接所有行，結尾不加換行
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    /// 寫入檔案的內容：render() 加上一個結尾換行
    pub fn to_file_contents(&self) -> String {
        let mut contents = self.render();
        contents.push('\n');
        contents
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadReport {
    pub output_path: String,
    pub line_count: usize,
    pub bytes_written: usize,
    pub completed_at: DateTime<Utc>,
}
