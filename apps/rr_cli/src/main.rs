// apps/rr_cli/src/main.rs

//! RoadRaster 命令行界面
//!
//! 将道路矢量数据（Shapefile）转换为地理参考的灰度栅格（GeoTIFF）。

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// RoadRaster 道路栅格化命令行工具
#[derive(Parser)]
#[command(name = "rr_cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Road network to georeferenced raster converter", long_about = None)]
struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 执行转换
    Convert(commands::convert::ConvertArgs),
    /// 显示数据源信息
    Info(commands::info::InfoArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // 执行命令
    match cli.command {
        Commands::Convert(args) => commands::convert::execute(args),
        Commands::Info(args) => commands::info::execute(args),
    }
}
