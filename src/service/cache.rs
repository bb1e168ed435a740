use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use log::{debug, info};
use crate::config::config::{CACHE_DIR_NAME, GLTF_EXTENSION, WCE_EXTENSION};
use crate::service::traits::i_service::CacheServiceTrait;

/// 工作區快取服務，快取目錄不會被清理
pub struct CacheService;

impl CacheService {
    pub fn new() -> Self {
        CacheService
    }
}

impl Default for CacheService {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheServiceTrait for CacheService {
    fn ensure_cache_dir(&self, workspace_root: &Path) -> io::Result<PathBuf> {
        let cache_dir = workspace_root.join(CACHE_DIR_NAME);
        if cache_dir.is_dir() {
            debug!("快取目錄已存在：{}", cache_dir.display());
        } else {
            fs::create_dir_all(&cache_dir)?;
            info!("建立快取目錄：{}", cache_dir.display());
        }
        Ok(cache_dir)
    }

    fn derive_output_path(&self, cache_dir: &Path, input_file: &Path) -> PathBuf {
        cache_dir.join(format!("{}{}", model_base_name(input_file), GLTF_EXTENSION))
    }
}

/// 去掉結尾 .wce 的檔名；檔名正好是 ".wce" 時保留原樣
pub fn model_base_name(input_file: &Path) -> String {
    let file_name = input_file
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();
    match file_name.strip_suffix(WCE_EXTENSION) {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => file_name,
    }
}

/// 檢查路徑字串是否以 .wce 結尾（區分大小寫）
pub fn has_wce_extension(path: &Path) -> bool {
    path.to_string_lossy().ends_with(WCE_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_derive_output_path() {
        let cache = CacheService::new();
        let output = cache.derive_output_path(Path::new("/ws/.quail_cache"), Path::new("/ws/models/ship.wce"));
        assert_eq!(output, PathBuf::from("/ws/.quail_cache/ship.gltf"));
    }

    #[test]
    fn test_derive_output_path_is_deterministic() {
        let cache = CacheService::new();
        let dir = Path::new("/ws/.quail_cache");
        let input = Path::new("/ws/a b/tree.v2.wce");
        let first = cache.derive_output_path(dir, input);
        let second = cache.derive_output_path(dir, input);
        assert_eq!(first, second);
        assert_eq!(first, PathBuf::from("/ws/.quail_cache/tree.v2.gltf"));
    }

    #[test]
    fn test_model_base_name_edge_cases() {
        assert_eq!(model_base_name(Path::new("/ws/.wce")), ".wce");
        assert_eq!(model_base_name(Path::new("/ws/model.wce.wce")), "model.wce");
        assert_eq!(model_base_name(Path::new("/ws/model.WCE")), "model.WCE");
    }

    #[test]
    fn test_has_wce_extension() {
        assert!(has_wce_extension(Path::new("/ws/model.wce")));
        assert!(!has_wce_extension(Path::new("/ws/model.WCE")));
        assert!(!has_wce_extension(Path::new("/ws/model.gltf")));
        assert!(!has_wce_extension(Path::new("/ws/model.wce.bak")));
    }

    #[test]
    fn test_ensure_cache_dir_is_idempotent() {
        let workspace = tempdir().unwrap();
        let cache = CacheService::new();

        let first = cache.ensure_cache_dir(workspace.path()).unwrap();
        fs::write(first.join("old.gltf"), "{}").unwrap();
        let second = cache.ensure_cache_dir(workspace.path()).unwrap();

        assert_eq!(first, second);
        assert_eq!(first, workspace.path().join(".quail_cache"));
        assert!(second.join("old.gltf").is_file());
        assert_eq!(fs::read_dir(&second).unwrap().count(), 1);
    }

    #[test]
    fn test_ensure_cache_dir_creates_parents() {
        let root = tempdir().unwrap();
        let workspace = root.path().join("nested").join("workspace");
        let cache_dir = CacheService::new().ensure_cache_dir(&workspace).unwrap();
        assert!(cache_dir.is_dir());
    }
}
