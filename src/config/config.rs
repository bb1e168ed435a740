use clap::Parser;
use std::io;
use std::path::Path;

/// 使用者觸發的命令識別碼
pub const COMMAND_ID: &str = "quailViewer.open";
/// 顯示面板的類型識別碼
pub const VIEW_TYPE: &str = "quailViewer";
pub const WCE_EXTENSION: &str = ".wce";
pub const GLTF_EXTENSION: &str = ".gltf";
pub const CACHE_DIR_NAME: &str = ".quail_cache";
pub const DEFAULT_CONVERTER: &str = "./wasm_runner";
pub const DEFAULT_ENGINE_URL: &str = "https://cdn.babylonjs.com/babylon.js";
pub const DEFAULT_LOADER_URL: &str = "https://cdn.babylonjs.com/loaders/babylonjs.loaders.min.js";

#[derive(Parser, Clone, Debug)]
#[command(
    name = "quail_viewer",
    about = "將 WCE 模型轉換為 glTF 並產生 3D 檢視頁面",
    long_about = "透過外部轉換程式將 .wce 模型轉換為 glTF，快取至工作區的 .quail_cache 目錄，並產生內嵌 Babylon.js 的 HTML 檢視頁面。\n不帶任何參數執行時進入互動模式。\n使用 `--help` 查看詳細用法。"
)]
pub struct Cli {
    /// 目前開啟的 .wce 檔案
    pub input: Option<String>,
    /// 工作區根目錄，預設為目前目錄
    #[arg(short, long)]
    pub workspace: Option<String>,
    /// 不使用任何工作區（模擬未開啟資料夾的編輯器）
    #[arg(long, default_value_t = false, conflicts_with = "workspace")]
    pub no_workspace: bool,
    #[arg(long, env = "QUAIL_CONVERTER", default_value = DEFAULT_CONVERTER)]
    pub converter: String,
    /// 轉換程式以失敗狀態結束時中止，而不是照常開啟檢視器
    #[arg(long, default_value_t = false)]
    pub strict: bool,
    /// 將轉換結果（glTF 文字）以 data URI 內嵌於頁面
    #[arg(long, default_value_t = false)]
    pub inline: bool,
    #[arg(long, default_value = DEFAULT_ENGINE_URL)]
    pub engine_url: String,
    #[arg(long, default_value = DEFAULT_LOADER_URL)]
    pub loader_url: String,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    #[arg(long, default_value = "info", value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: String,
    #[arg(long, default_value_t = false)]
    pub show_config: bool,
}

/// 轉換程式以非零狀態結束時的處理方式
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ExitPolicy {
    /// 記錄警告後照常開啟檢視器
    #[default]
    Lenient,
    /// 視為錯誤並中止
    Strict,
}

impl ExitPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            ExitPolicy::Strict
        } else {
            ExitPolicy::Lenient
        }
    }
}

pub fn validate_workspace_path(workspace: &str) -> io::Result<&Path> {
    let path = Path::new(workspace);
    if !path.is_dir() {
        log::debug!("工作區目錄不存在：{}", workspace);
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("工作區目錄 '{}' 不存在", workspace)
        ));
    }
    Ok(path)
}

pub fn is_valid_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

pub fn validate_script_urls(engine_url: &str, loader_url: &str) -> io::Result<()> {
    for url in [engine_url, loader_url] {
        if !is_valid_url(url) {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, format!("無效的腳本位址: {}", url)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["quail_viewer", "model.wce"]).unwrap();
        assert_eq!(cli.input.as_deref(), Some("model.wce"));
        assert_eq!(cli.engine_url, DEFAULT_ENGINE_URL);
        assert_eq!(cli.loader_url, DEFAULT_LOADER_URL);
        assert!(!cli.strict);
        assert!(!cli.inline);
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_no_workspace_conflicts_with_workspace() {
        let result = Cli::try_parse_from(["quail_viewer", "a.wce", "--workspace", ".", "--no-workspace"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_exit_policy_from_strict() {
        assert_eq!(ExitPolicy::from_strict(true), ExitPolicy::Strict);
        assert_eq!(ExitPolicy::from_strict(false), ExitPolicy::Lenient);
        assert_eq!(ExitPolicy::default(), ExitPolicy::Lenient);
    }

    #[test]
    fn test_validate_script_urls() {
        assert!(validate_script_urls(DEFAULT_ENGINE_URL, DEFAULT_LOADER_URL).is_ok());
        assert!(validate_script_urls("ftp://x/babylon.js", DEFAULT_LOADER_URL).is_err());
    }
}
