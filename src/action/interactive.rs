use dialoguer::{Confirm, Input, Select};
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::action::cli::run_viewer;
use crate::config::config::{ExitPolicy, CACHE_DIR_NAME, DEFAULT_CONVERTER, WCE_EXTENSION};
use crate::config::ports::{AppConfig, ConfigPort, EditorContext};
use crate::service::cache::has_wce_extension;
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::utils::utils::{display_relative, setup_logging};

pub fn process_interactive_mode() -> io::Result<String> {
    setup_logging("info")?;
    println!("=== Quail Viewer 互動模式 ===");
    let workspace = get_workspace_path()?;
    let input = get_model_path(&workspace)?;
    let use_default_config = get_default_config_option()?;

    let config_port: Box<dyn ConfigPort> = if use_default_config {
        Box::new(DefaultConfigAdapter::new(input, workspace))
    } else {
        Box::new(InteractiveConfigAdapter::new(input, workspace))
    };

    let config = ConfigService::new(config_port).get_config()?;
    run_viewer(&config)
}

pub fn get_default_config_option() -> io::Result<bool> {
    Confirm::new()
        .with_prompt("是否使用預設配置？（外部轉換程式 ./wasm_runner、轉換失敗仍開啟檢視器）")
        .default(true)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("預設配置選擇失敗: {}", e)))
}

pub fn get_workspace_path() -> io::Result<PathBuf> {
    Input::<String>::new()
        .with_prompt("請輸入工作區目錄（預設為目前目錄）")
        .default(".".to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            if Path::new(input).is_dir() { Ok(()) } else { Err(format!("目錄 '{}' 不存在", input)) }
        })
        .interact_text()
        .map(PathBuf::from)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

/// 列出工作區內的 .wce 檔案（略過快取目錄）
pub fn find_wce_files(workspace: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(workspace)
        .into_iter()
        .filter_entry(|entry| entry.file_name() != CACHE_DIR_NAME)
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("無法讀取目錄項目：{}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && has_wce_extension(entry.path()))
        .map(|entry| entry.into_path())
        .collect();
    files.sort();
    files
}

pub fn get_model_path(workspace: &Path) -> io::Result<PathBuf> {
    let candidates = find_wce_files(workspace);
    if candidates.is_empty() {
        println!("工作區內找不到 {} 檔案", WCE_EXTENSION);
        return Input::<String>::new()
            .with_prompt("請輸入模型檔案路徑（例如：./models/ship.wce）")
            .interact_text()
            .map(PathBuf::from)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()));
    }

    let items: Vec<String> = candidates.iter().map(|path| display_relative(path, workspace)).collect();
    let selection = Select::new()
        .with_prompt("選擇要檢視的模型（使用方向鍵選擇，按 Enter 確認）")
        .items(&items)
        .default(0)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("模型選擇失敗: {}", e)))?;
    Ok(candidates[selection].clone())
}

pub fn get_converter_path() -> io::Result<String> {
    Input::new()
        .with_prompt("輸入轉換程式路徑")
        .default(DEFAULT_CONVERTER.to_string())
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

pub fn get_exit_policy() -> io::Result<ExitPolicy> {
    let strict = Confirm::new()
        .with_prompt("轉換程式回報失敗時是否中止？（預設為否，仍開啟檢視器）")
        .default(false)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("結束狀態選項輸入失敗: {}", e)))?;
    Ok(ExitPolicy::from_strict(strict))
}

pub fn get_inline_option() -> io::Result<bool> {
    Confirm::new()
        .with_prompt("是否將轉換結果內嵌於頁面？（可直接以瀏覽器開啟）")
        .default(false)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("內嵌選項輸入失敗: {}", e)))
}

// 交互配置適配器
pub struct InteractiveConfigAdapter {
    input: PathBuf,
    workspace: PathBuf,
}

impl InteractiveConfigAdapter {
    pub fn new(input: PathBuf, workspace: PathBuf) -> Self {
        InteractiveConfigAdapter { input, workspace }
    }
}

impl ConfigPort for InteractiveConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        let converter = get_converter_path()?;
        let exit_policy = get_exit_policy()?;
        let inline = get_inline_option()?;

        let context = EditorContext::new(Some(self.input.clone()), Some(self.workspace.clone()));
        Ok(AppConfig {
            converter,
            exit_policy,
            inline,
            no_progress: false,
            ..AppConfig::with_context(context)
        })
    }
}
