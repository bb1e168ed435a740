use crate::config::ports::AppConfig;
use crate::error::Result;
use crate::models::conversion::ViewerOutput;

// Facade 接口，負責協調「開啟檢視器」命令的流程
pub trait ViewerFacadeTrait: Send + Sync {
    /// 驗證目前檔案、轉換並開啟檢視面板
    /// # 參數
    /// - config: 含宿主注入之編輯器狀態的配置
    /// # 回傳
    /// - 成功時返回輸出路徑與新面板，前置條件或啟動失敗時返回錯誤
    fn open_viewer(&self, config: &AppConfig) -> Result<ViewerOutput>;
}
