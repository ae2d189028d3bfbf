use clap::Parser;
use pdf_match_rust::{cli, error, pipeline};

use cli::{Cli, Commands};
use error::Result;
use pipeline::transfer::{MatchKey, TransferMode};
use pipeline::RunStats;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rename {
            folder,
            excel,
            report,
        } => {
            println!("📄 pdf-match - 合同编号重命名\n");
            let stats = pipeline::rename::run(&folder, &excel, report.as_deref(), cli.verbose)?;
            print_summary(&stats);
        }

        Commands::MatchCopy {
            pdf_dir,
            excel_path,
            output_dir,
            report,
        } => {
            println!("📄 pdf-match - 身份证号匹配复制\n");
            let stats = pipeline::transfer::run(
                MatchKey::IdNumber,
                TransferMode::Copy,
                &pdf_dir,
                &excel_path,
                &output_dir,
                report.as_deref(),
                cli.verbose,
            )?;
            print_summary(&stats);
        }

        Commands::MatchMove {
            pdf_dir,
            excel_path,
            output_dir,
            report,
        } => {
            println!("📄 pdf-match - 姓名匹配移动\n");
            let stats = pipeline::transfer::run(
                MatchKey::Name,
                TransferMode::Move,
                &pdf_dir,
                &excel_path,
                &output_dir,
                report.as_deref(),
                cli.verbose,
            )?;
            print_summary(&stats);
        }
    }

    Ok(())
}

fn print_summary(stats: &RunStats) {
    println!("\n{}", "=".repeat(80));
    println!("处理完成！");
    println!("总共扫描: {} 个文件", stats.total);
    println!("匹配成功: {} 个", stats.matched);
    println!("未匹配: {} 个", stats.unmatched);
    println!("格式不匹配: {} 个", stats.extract_failed);
    if stats.errors > 0 {
        println!("处理错误: {} 个", stats.errors);
    }
    println!("\n✅ 完成");
}
