use std::io;
use std::path::{Path, PathBuf};
use crate::error::Result;
use crate::models::conversion::{ConversionReport, ConversionRequest};
use crate::models::viewer::{Panel, PanelRequest, ViewerDocument, ViewerRenderInput};

// 快取服務接口，負責快取目錄與輸出路徑
pub trait CacheServiceTrait: Send + Sync {
    /// 確保工作區快取目錄存在（含所有上層目錄），回傳其路徑
    fn ensure_cache_dir(&self, workspace_root: &Path) -> io::Result<PathBuf>;

    /// 由快取目錄與輸入檔推導輸出 .gltf 路徑
    fn derive_output_path(&self, cache_dir: &Path, input_file: &Path) -> PathBuf;
}

// 轉換服務接口，負責呼叫外部轉換程式
pub trait ConverterServiceTrait: Send + Sync {
    /// 執行外部轉換並等待結束
    /// # 回傳
    /// - 程式啟動成功時返回執行結果（不論結束狀態），無法啟動時返回錯誤
    fn convert(&self, request: &ConversionRequest) -> Result<ConversionReport>;
}

// 檢視器服務接口，負責產生檢視頁面
pub trait ViewerServiceTrait: Send + Sync {
    fn render(&self, input: ViewerRenderInput) -> io::Result<ViewerDocument>;
}

// 顯示面板接口
pub trait DisplaySurfaceTrait: Send + Sync {
    /// 建立並顯示新面板
    fn open_panel(&self, request: PanelRequest) -> io::Result<Panel>;
}
