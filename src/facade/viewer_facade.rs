use std::fs;
use std::path::Path;
use log::{info, warn};
use crate::config::config::{ExitPolicy, COMMAND_ID, VIEW_TYPE};
use crate::config::ports::AppConfig;
use crate::error::{QuailError, Result};
use crate::facade::traits::i_viewer::ViewerFacadeTrait;
use crate::models::conversion::{ConversionRequest, ViewerOutput};
use crate::models::viewer::{PanelRequest, ViewerRenderInput};
use crate::service::cache::{has_wce_extension, model_base_name, CacheService};
use crate::service::converter::ProcessConverter;
use crate::service::surface::FileDisplaySurface;
use crate::service::traits::i_service::{
    CacheServiceTrait, ConverterServiceTrait, DisplaySurfaceTrait, ViewerServiceTrait,
};
use crate::service::viewer::ViewerService;
use crate::utils::html::gltf_data_uri;
use crate::utils::utils::{absolute_path, display_relative, file_uri, format_file_size};

const DOCUMENT_TITLE: &str = "Quail Viewer";

pub struct ViewerFacade {
    cache_service: Box<dyn CacheServiceTrait>,
    converter_service: Box<dyn ConverterServiceTrait>,
    viewer_service: Box<dyn ViewerServiceTrait>,
    display_surface: Box<dyn DisplaySurfaceTrait>,
}

impl ViewerFacade {
    pub fn new(
        cache_service: Box<dyn CacheServiceTrait>,
        converter_service: Box<dyn ConverterServiceTrait>,
        viewer_service: Box<dyn ViewerServiceTrait>,
        display_surface: Box<dyn DisplaySurfaceTrait>,
    ) -> Self {
        ViewerFacade {
            cache_service,
            converter_service,
            viewer_service,
            display_surface,
        }
    }

    /// 以外部程式轉換並寫出 HTML 面板的預設組合
    pub fn from_config(config: &AppConfig) -> Self {
        ViewerFacade::new(
            Box::new(CacheService::new()),
            Box::new(ProcessConverter::new(config.converter.clone(), config.no_progress)),
            Box::new(ViewerService::new()),
            Box::new(FileDisplaySurface::new()),
        )
    }
}

impl ViewerFacadeTrait for ViewerFacade {
    fn open_viewer(&self, config: &AppConfig) -> Result<ViewerOutput> {
        let context = &config.context;
        let active_file = context.active_file.as_deref().ok_or(QuailError::NoActiveFile)?;
        if !has_wce_extension(active_file) {
            return Err(QuailError::NotWceFile(active_file.to_path_buf()));
        }
        let workspace = context.workspace_root.as_deref().ok_or(QuailError::NoWorkspace)?;
        info!("執行命令 {}，檔案：{}", COMMAND_ID, active_file.display());

        let cache_dir = self.cache_service.ensure_cache_dir(workspace)?;
        let model_path = self.cache_service.derive_output_path(&cache_dir, active_file);

        let report = self.converter_service.convert(&ConversionRequest {
            input_path: active_file.to_path_buf(),
            output_path: model_path.clone(),
        })?;
        if !report.success {
            match config.exit_policy {
                ExitPolicy::Strict => {
                    return Err(QuailError::ConversionFailed {
                        exit_code: report.exit_code,
                        stderr: report.stderr.clone(),
                    });
                }
                ExitPolicy::Lenient => {
                    warn!("轉換失敗（結束狀態 {:?}），仍開啟檢視器，可能顯示舊的或空的模型", report.exit_code);
                }
            }
        }
        info!("轉換結果：{}", display_relative(&model_path, workspace));

        let model_file_name = model_path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        let model_uri = model_reference(&cache_dir, &model_file_name, config.inline)?;

        let document = self.viewer_service.render(ViewerRenderInput {
            model_uri,
            title: DOCUMENT_TITLE.to_string(),
            engine_url: config.engine_url.clone(),
            loader_url: config.loader_url.clone(),
        })?;

        let panel = self.display_surface.open_panel(PanelRequest {
            view_type: VIEW_TYPE.to_string(),
            title: format!("Preview: {}", model_file_name),
            document_path: cache_dir.join(format!("{}.viewer.html", model_base_name(active_file))),
            document,
        })?;

        Ok(ViewerOutput {
            model_path,
            panel,
            report,
        })
    }
}

/// 取得頁面引用的模型位址：預設為 file:// URI，內嵌模式下為 data URI
fn model_reference(cache_dir: &Path, model_file_name: &str, inline: bool) -> Result<String> {
    let model_path = absolute_path(cache_dir)?.join(model_file_name);
    if inline {
        match fs::read_to_string(&model_path) {
            Ok(gltf_json) => {
                info!("內嵌轉換結果，大小：{}", format_file_size(gltf_json.len()));
                return Ok(gltf_data_uri(&gltf_json, model_file_name));
            }
            Err(e) => {
                warn!("無法讀取轉換結果 {}，改用檔案位址：{}", model_path.display(), e);
            }
        }
    }
    Ok(file_uri(&model_path))
}
