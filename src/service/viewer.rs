use std::io;
use log::info;
use crate::models::viewer::{ViewerDocument, ViewerRenderInput};
use crate::service::traits::i_service::ViewerServiceTrait;
use crate::utils::html::{split_model_uri, ViewerTemplate};

/// 檢視器服務，產生載入 Babylon.js 並指向轉換結果的 HTML 文件
pub struct ViewerService;

impl ViewerService {
    pub fn new() -> Self {
        ViewerService
    }
}

impl Default for ViewerService {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewerServiceTrait for ViewerService {
    /// 根據模型 URI 產生完整的檢視頁面
    /// # 參數
    /// - input: 模型 URI、頁面標題與遠端腳本位址
    /// # 回傳
    /// - 成功時返回頁面內容與其引用的模型 URI
    fn render(&self, input: ViewerRenderInput) -> io::Result<ViewerDocument> {
        let (model_root, model_file) = split_model_uri(&input.model_uri);
        let html = ViewerTemplate {
            title: &input.title,
            engine_url: &input.engine_url,
            loader_url: &input.loader_url,
            model_root,
            model_file,
        }
        .render();
        info!("產生檢視頁面，大小：{} 位元組", html.len());

        Ok(ViewerDocument {
            html,
            model_uri: input.model_uri,
        })
    }
}
