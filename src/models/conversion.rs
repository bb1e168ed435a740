use std::path::PathBuf;
use crate::models::viewer::Panel;

#[derive(Clone, Debug)]
pub struct ConversionRequest {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

/// 已啟動的轉換程式執行結果
#[derive(Clone, Debug, PartialEq)]
pub struct ConversionReport {
    pub exit_code: Option<i32>,
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl ConversionReport {
    pub fn succeeded() -> Self {
        ConversionReport {
            exit_code: Some(0),
            success: true,
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    pub fn failed(exit_code: Option<i32>, stderr: impl Into<String>) -> Self {
        ConversionReport {
            exit_code,
            success: false,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

#[derive(Debug)]
pub struct ViewerOutput {
    pub model_path: PathBuf,
    pub panel: Panel,
    pub report: ConversionReport,
}
