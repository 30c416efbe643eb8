// crates/rr_io/src/pipeline.rs
//! 转换流水线
//!
//! 串起完整流程：打开数据源、推导分辨率、栅格化全部要素、
//! 反色、写出 GeoTIFF。单线程顺序执行，任何阶段失败即中止，
//! 不产生部分输出文件。

use crate::error::IoResult;
use crate::geotiff::GeoTiffWriter;
use crate::vector::RoadSource;
use rr_geo::crs::SpatialRef;
use rr_geo::extent::GeoExtent;
use rr_geo::mapping::{PixelMapping, RasterSize};
use rr_raster::canvas::GrayCanvas;
use rr_raster::rasterize::rasterize;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// 转换配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// 输入 Shapefile 路径
    pub input: PathBuf,
    /// 输出 GeoTIFF 路径；缺省时取输入路径改扩展名为 `.tif`
    pub output: Option<PathBuf>,
}

impl ConvertConfig {
    /// 创建配置（输出路径取默认值）
    #[must_use]
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
        }
    }

    /// 实际输出路径
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => self.input.with_extension("tif"),
        }
    }
}

/// 转换结果报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertReport {
    /// 输出文件路径
    pub output: PathBuf,
    /// 输出栅格宽度（像素）
    pub width: u32,
    /// 输出栅格高度（像素）
    pub height: u32,
    /// 栅格化的要素数量
    pub features: usize,
}

/// 数据源摘要（只读巡检，不产生输出）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// 数据源路径
    pub path: PathBuf,
    /// 地理范围
    pub extent: GeoExtent,
    /// EPSG 代码（如果可解析）
    pub epsg: Option<u32>,
    /// 坐标单位名称
    pub unit: String,
    /// 推导的输出尺寸
    pub size: RasterSize,
    /// 要素数量
    pub features: usize,
}

/// 执行完整转换
///
/// # Errors
/// 任何阶段失败时返回 [`crate::error::IoError`]，此时不写输出文件。
pub fn convert(config: &ConvertConfig) -> IoResult<ConvertReport> {
    let mut source = RoadSource::open(&config.input)?;
    let extent = *source.extent();
    let spatial_ref = source.spatial_ref().clone();

    let size = RasterSize::from_extent(&extent, spatial_ref.kind());
    let mapping = PixelMapping::new(extent, size);
    info!(
        width = size.width,
        height = size.height,
        unit = spatial_ref.kind().unit_name(),
        "分辨率已推导"
    );

    // 先读完全部几何再绘制：几何阶段的失败不应留下输出文件
    let features = source.geometries()?;
    let mut canvas = GrayCanvas::for_size(size);
    rasterize(&mut canvas, &mapping, features.iter().cloned());
    canvas.invert();
    info!(features = features.len(), "栅格化完成");

    let output = config.output_path();
    GeoTiffWriter::new(&canvas, &mapping, &spatial_ref).write(&output)?;
    info!(output = %output.display(), "转换完成");

    Ok(ConvertReport {
        output,
        width: canvas.width(),
        height: canvas.height(),
        features: features.len(),
    })
}

/// 巡检数据源，返回摘要信息
///
/// # Errors
/// 数据源打开或读取失败时返回 [`crate::error::IoError`]。
pub fn inspect(path: impl AsRef<Path>) -> IoResult<DatasetSummary> {
    let mut source = RoadSource::open(path.as_ref())?;
    let extent = *source.extent();
    let spatial_ref: SpatialRef = source.spatial_ref().clone();
    let size = RasterSize::from_extent(&extent, spatial_ref.kind());
    let features = source.geometries()?.len();

    Ok(DatasetSummary {
        path: source.path().to_path_buf(),
        extent,
        epsg: spatial_ref.epsg(),
        unit: spatial_ref.kind().unit_name().to_string(),
        size,
        features,
    })
}
