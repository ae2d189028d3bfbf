use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchPdfError {
    #[error("文件夹不存在: {0}")]
    FolderNotFound(String),

    #[error("路径不是文件夹: {0}")]
    NotADirectory(String),

    #[error("Excel文件不存在: {0}")]
    ExcelNotFound(String),

    #[error("无法读取Excel文件: {0}")]
    ExcelRead(String),

    #[error("在Excel文件中找不到'{column}'列。可用列: {available:?}")]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },

    #[error("Excel写入错误: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("备份原Excel文件失败: {0}")]
    Backup(String),

    #[error("无法创建输出文件夹: {0}")]
    OutputDir(String),

    #[error("JSON序列化错误: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MatchPdfError>;
