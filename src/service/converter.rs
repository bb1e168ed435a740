use std::process::{Command, Stdio};
use log::{debug, info, warn};
use crate::error::{QuailError, Result};
use crate::models::conversion::{ConversionReport, ConversionRequest};
use crate::service::traits::i_service::ConverterServiceTrait;
use crate::utils::utils::ProgressManager;

/// 以 `<程式> <輸入> <輸出>` 呼叫外部轉換程式，不設逾時、不重試
pub struct ProcessConverter {
    program: String,
    no_progress: bool,
}

impl ProcessConverter {
    pub fn new(program: impl Into<String>, no_progress: bool) -> Self {
        ProcessConverter {
            program: program.into(),
            no_progress,
        }
    }
}

impl ConverterServiceTrait for ProcessConverter {
    fn convert(&self, request: &ConversionRequest) -> Result<ConversionReport> {
        info!(
            "執行轉換程式：{} {} {}",
            self.program,
            request.input_path.display(),
            request.output_path.display()
        );
        let pm = ProgressManager::spinner("轉換中", self.no_progress);

        let output = Command::new(&self.program)
            .arg(&request.input_path)
            .arg(&request.output_path)
            .stdin(Stdio::null())
            .output();

        let output = match output {
            Ok(output) => output,
            Err(e) => {
                pm.abandon("轉換程式無法啟動");
                return Err(QuailError::ConverterLaunch {
                    program: self.program.clone(),
                    source: e,
                });
            }
        };

        let report = ConversionReport {
            exit_code: output.status.code(),
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };
        if !report.stdout.is_empty() {
            debug!("轉換程式輸出：{}", report.stdout.trim_end());
        }
        if report.success {
            pm.finish("轉換完成");
        } else {
            if !report.stderr.is_empty() {
                debug!("轉換程式錯誤輸出：{}", report.stderr.trim_end());
            }
            warn!("轉換程式以失敗狀態結束：{:?}", report.exit_code);
            pm.abandon("轉換程式回報失敗");
        }
        Ok(report)
    }
}
