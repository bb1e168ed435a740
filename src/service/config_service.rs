use std::io;
use std::path::PathBuf;
use crate::config::ports::{AppConfig, ConfigPort, EditorContext};

// 配置服務，負責選擇適當的配置適配器
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> io::Result<AppConfig> {
        self.config_port.get_config()
    }
}

// 預設配置適配器：寬鬆結束狀態、遠端腳本、顯示進度
pub struct DefaultConfigAdapter {
    input: PathBuf,
    workspace: PathBuf,
}

impl DefaultConfigAdapter {
    pub fn new(input: PathBuf, workspace: PathBuf) -> Self {
        DefaultConfigAdapter { input, workspace }
    }
}

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        let context = EditorContext::new(Some(self.input.clone()), Some(self.workspace.clone()));
        Ok(AppConfig {
            no_progress: false,
            ..AppConfig::with_context(context)
        })
    }
}
