// apps/rr_cli/src/commands/info.rs

//! 信息显示命令
//!
//! 巡检数据源并显示摘要，不产生输出文件。

use anyhow::{Context, Result};
use clap::Args;
use rr_io::pipeline::inspect;
use std::path::PathBuf;
use tracing::info;

/// 信息显示参数
#[derive(Args)]
pub struct InfoArgs {
    /// 输入 Shapefile 路径
    pub input: PathBuf,
}

/// 执行信息命令
pub fn execute(args: InfoArgs) -> Result<()> {
    info!("=== RoadRaster 数据源信息 ===");

    let summary = inspect(&args.input)
        .with_context(|| format!("数据源读取失败: {}", args.input.display()))?;

    println!("=== 数据源 ===");
    println!("路径: {}", summary.path.display());
    println!(
        "地理范围: ({}, {}) - ({}, {})",
        summary.extent.lon_min, summary.extent.lat_min, summary.extent.lon_max, summary.extent.lat_max
    );
    match summary.epsg {
        Some(code) => println!("EPSG 代码: {code}"),
        None => println!("EPSG 代码: 未知（仅 WKT）"),
    }
    println!("坐标单位: {}", summary.unit);
    println!("要素数量: {}", summary.features);

    println!("\n=== 推导的输出 ===");
    println!(
        "栅格尺寸: {} × {} 像素",
        summary.size.width, summary.size.height
    );

    Ok(())
}
