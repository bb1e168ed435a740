use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuailError>;

/// 檢視器命令的錯誤類型，訊息即為顯示給使用者的內容
#[derive(Error, Debug)]
pub enum QuailError {
    #[error("No active WCE file selected.")]
    NoActiveFile,

    #[error("Selected file is not a .wce file.")]
    NotWceFile(PathBuf),

    #[error("No workspace folder found.")]
    NoWorkspace,

    /// 轉換程式無法啟動（找不到執行檔、無法 spawn）
    #[error("Failed to convert WCE file: cannot run '{program}': {source}")]
    ConverterLaunch {
        program: String,
        #[source]
        source: io::Error,
    },

    /// 僅在嚴格模式下回報：轉換程式已執行但以失敗狀態結束
    #[error("Failed to convert WCE file: converter exited with {}{}", format_exit_code(.exit_code), format_stderr(.stderr))]
    ConversionFailed {
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl QuailError {
    /// 是否為前置條件錯誤（尚未產生任何副作用）
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            QuailError::NoActiveFile | QuailError::NotWceFile(_) | QuailError::NoWorkspace
        )
    }
}

fn format_exit_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

fn format_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {}", trimmed)
    }
}

impl From<QuailError> for io::Error {
    fn from(err: QuailError) -> Self {
        let kind = match &err {
            QuailError::NoActiveFile | QuailError::NoWorkspace => io::ErrorKind::NotFound,
            QuailError::NotWceFile(_) => io::ErrorKind::InvalidInput,
            QuailError::ConverterLaunch { source, .. } => source.kind(),
            QuailError::ConversionFailed { .. } => io::ErrorKind::Other,
            QuailError::Io(e) => e.kind(),
        };
        match err {
            QuailError::Io(e) => e,
            other => io::Error::new(kind, other.to_string()),
        }
    }
}
