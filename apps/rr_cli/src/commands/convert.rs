// apps/rr_cli/src/commands/convert.rs

//! 转换命令
//!
//! 执行完整的矢量到栅格转换流程。

use anyhow::{Context, Result};
use clap::Args;
use rr_io::pipeline::{convert, ConvertConfig};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// 转换参数
#[derive(Args)]
pub struct ConvertArgs {
    /// 输入 Shapefile 路径
    pub input: PathBuf,

    /// 输出 GeoTIFF 路径（缺省为输入路径改扩展名为 .tif）
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// 执行转换命令
pub fn execute(args: ConvertArgs) -> Result<()> {
    info!("=== RoadRaster 转换启动 ===");

    let config = ConvertConfig {
        input: args.input.clone(),
        output: args.output,
    };

    let start = Instant::now();
    let report = convert(&config)
        .with_context(|| format!("转换失败: {}", args.input.display()))?;
    let elapsed = start.elapsed();

    println!("=== 转换完成 ===");
    println!("输出文件: {}", report.output.display());
    println!("栅格尺寸: {} × {} 像素", report.width, report.height);
    println!("要素数量: {}", report.features);
    println!("耗时: {:.2} 秒", elapsed.as_secs_f64());

    Ok(())
}
