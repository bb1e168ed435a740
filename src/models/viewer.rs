use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct ViewerRenderInput {
    /// 轉換結果的 URI（file:// 或 data:）
    pub model_uri: String,
    pub title: String,
    pub engine_url: String,
    pub loader_url: String,
}

#[derive(Clone, Debug)]
pub struct ViewerDocument {
    pub html: String,
    pub model_uri: String,
}

#[derive(Clone, Debug)]
pub struct PanelRequest {
    pub view_type: String,
    pub title: String,
    /// 面板文件的寫入位置
    pub document_path: PathBuf,
    pub document: ViewerDocument,
}

/// 每次觸發命令都會建立新的顯示面板
#[derive(Clone, Debug)]
pub struct Panel {
    pub view_type: String,
    pub title: String,
    pub document_path: PathBuf,
}
