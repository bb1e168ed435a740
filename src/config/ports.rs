use std::io;
use std::path::PathBuf;
use crate::config::config::{ExitPolicy, DEFAULT_CONVERTER, DEFAULT_ENGINE_URL, DEFAULT_LOADER_URL};

// 觸發命令時由宿主解析一次的編輯器狀態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorContext {
    pub active_file: Option<PathBuf>,
    pub workspace_root: Option<PathBuf>,
}

impl EditorContext {
    pub fn new(active_file: Option<PathBuf>, workspace_root: Option<PathBuf>) -> Self {
        EditorContext { active_file, workspace_root }
    }
}

// 應用配置結構體，封裝所有參數
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub context: EditorContext,
    pub converter: String,
    pub exit_policy: ExitPolicy,
    pub inline: bool,
    pub engine_url: String,
    pub loader_url: String,
    pub no_progress: bool,
}

impl AppConfig {
    pub fn with_context(context: EditorContext) -> Self {
        AppConfig {
            context,
            converter: DEFAULT_CONVERTER.to_string(),
            exit_policy: ExitPolicy::Lenient,
            inline: false,
            engine_url: DEFAULT_ENGINE_URL.to_string(),
            loader_url: DEFAULT_LOADER_URL.to_string(),
            no_progress: true,
        }
    }
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<AppConfig>;
}
