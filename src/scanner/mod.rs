//! PDF文件扫描

use crate::error::{MatchPdfError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct PdfFile {
    pub path: PathBuf,
    pub file_name: String,
}

const PDF_EXTENSIONS: &[&str] = &["pdf", "PDF"];

/// 扫描文件夹直下的PDF文件，按文件名排序
pub fn scan_pdfs(folder: &Path) -> Result<Vec<PdfFile>> {
    if !folder.exists() {
        return Err(MatchPdfError::FolderNotFound(folder.display().to_string()));
    }
    if !folder.is_dir() {
        return Err(MatchPdfError::NotADirectory(folder.display().to_string()));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1)  // 仅直下一层，不递归
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if let Some(ext) = path.extension() {
            let ext_str = ext.to_string_lossy();
            if PDF_EXTENSIONS.iter().any(|&e| e == ext_str) {
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();

                files.push(PdfFile {
                    path: path.to_path_buf(),
                    file_name,
                });
            }
        }
    }

    // 按文件名排序，保证处理顺序确定
    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(files)
}
