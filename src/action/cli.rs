use std::io;
use std::path::PathBuf;
use clap::Parser;
use crate::action::interactive::process_interactive_mode;
use crate::config::config::{validate_script_urls, validate_workspace_path, Cli, ExitPolicy};
use crate::config::ports::{AppConfig, ConfigPort, EditorContext};
use crate::error::QuailError;
use crate::facade::traits::i_viewer::ViewerFacadeTrait;
use crate::facade::viewer_facade::ViewerFacade;
use crate::service::config_service::ConfigService;
use crate::utils::utils::setup_logging;

pub fn process_args(args: Vec<String>) -> io::Result<String> {
    if args.len() == 1 {
        process_interactive_mode()
    } else {
        process_cli_mode()
    }
}

pub fn process_cli_mode() -> io::Result<String> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level)?;

    let config_service = ConfigService::new(Box::new(CliConfigAdapter::new(cli.clone())));
    let config = config_service.get_config()?;

    let output = run_viewer(&config)?;

    if cli.show_config {
        println!("實際使用的配置：{:#?}", config);
    }

    Ok(output)
}

/// 執行命令並回報使用者可見的錯誤，成功時返回面板文件路徑
pub fn run_viewer(config: &AppConfig) -> io::Result<String> {
    let facade: Box<dyn ViewerFacadeTrait> = Box::new(ViewerFacade::from_config(config));
    match facade.open_viewer(config) {
        Ok(output) => {
            log::info!("{}：{}", output.panel.title, output.panel.document_path.display());
            Ok(output.panel.document_path.display().to_string())
        }
        Err(err) => {
            report_error(&err);
            Err(err.into())
        }
    }
}

/// 使用者可見的訊息由 main 輸出一次，這裡只留除錯紀錄
fn report_error(err: &QuailError) {
    if err.is_precondition() {
        log::debug!("前置條件不符：{:?}", err);
    } else {
        log::debug!("命令失敗：{:?}", err);
    }
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        validate_script_urls(&self.cli.engine_url, &self.cli.loader_url)?;

        let workspace_root = if self.cli.no_workspace {
            None
        } else {
            let workspace = self.cli.workspace.as_deref().unwrap_or(".");
            Some(validate_workspace_path(workspace)?.to_path_buf())
        };

        let context = EditorContext::new(self.cli.input.as_ref().map(PathBuf::from), workspace_root);

        Ok(AppConfig {
            context,
            converter: self.cli.converter.clone(),
            exit_policy: ExitPolicy::from_strict(self.cli.strict),
            inline: self.cli.inline,
            engine_url: self.cli.engine_url.clone(),
            loader_url: self.cli.loader_url.clone(),
            no_progress: self.cli.no_progress,
        })
    }
}
