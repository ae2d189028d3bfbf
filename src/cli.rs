use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// 重命名流程默认的Excel文件名（位于目标文件夹内）
pub const DEFAULT_EXCEL_NAME: &str = "协商解除函签署名单-608人.xls";

/// 复制/移动流程默认的结果文件夹名
pub const DEFAULT_OUTPUT_DIR: &str = "匹配结果";

#[derive(Parser)]
#[command(name = "pdf-match")]
#[command(about = "PDF文件与Excel名单匹配工具（重命名·复制·移动）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 输出每个文件的处理详情
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 按合同编号匹配并重命名PDF文件（合同编号 -> 姓名+身份证号）
    Rename {
        /// 目标文件夹路径（包含PDF文件和Excel文件）
        #[arg(required = true)]
        folder: PathBuf,

        /// Excel文件名（位于目标文件夹内）
        #[arg(long, default_value = DEFAULT_EXCEL_NAME)]
        excel: String,

        /// 运行报告JSON输出路径
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// 按身份证号匹配PDF文件，并将匹配的文件复制到结果文件夹
    MatchCopy {
        /// PDF文件所在文件夹路径
        #[arg(required = true)]
        pdf_dir: PathBuf,

        /// Excel文件路径（包含身份证号列）
        #[arg(required = true)]
        excel_path: PathBuf,

        /// 结果文件夹名称（创建于PDF文件夹下）
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: String,

        /// 运行报告JSON输出路径
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// 按姓名匹配PDF文件，并将匹配的文件移动到结果文件夹
    MatchMove {
        /// PDF文件所在文件夹路径
        #[arg(required = true)]
        pdf_dir: PathBuf,

        /// Excel文件路径（包含姓名列）
        #[arg(required = true)]
        excel_path: PathBuf,

        /// 结果文件夹名称（创建于PDF文件夹下）
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: String,

        /// 运行报告JSON输出路径
        #[arg(long)]
        report: Option<PathBuf>,
    },
}
