use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use log::info;
use crate::models::viewer::{Panel, PanelRequest};
use crate::service::traits::i_service::DisplaySurfaceTrait;

/// 將面板文件寫入磁碟的顯示面板，每次呼叫都建立新面板
pub struct FileDisplaySurface;

impl FileDisplaySurface {
    pub fn new() -> Self {
        FileDisplaySurface
    }
}

impl Default for FileDisplaySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurfaceTrait for FileDisplaySurface {
    fn open_panel(&self, request: PanelRequest) -> io::Result<Panel> {
        if let Some(parent) = request.document_path.parent() {
            fs::create_dir_all(parent)?;
        }
        write_html_file(&request.document.html, &request.document_path)?;
        info!("開啟面板「{}」：{}", request.title, request.document_path.display());

        Ok(Panel {
            view_type: request.view_type,
            title: request.title,
            document_path: request.document_path,
        })
    }
}

/// 將 HTML 內容寫入檔案
pub fn write_html_file(html_content: &str, output_path: &Path) -> io::Result<()> {
    let file = fs::File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(html_content.as_bytes())?;
    writer.flush()?;
    Ok(())
}
