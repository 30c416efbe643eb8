// crates/rr_geo/src/mapping.rs
//! 像素映射：地理范围 -> 输出分辨率 -> 像素坐标
//!
//! 提供三样东西：
//!
//! - [`RasterSize`]: 从地理范围和坐标系类别推导的输出栅格尺寸
//! - [`PixelMapping`]: (lon, lat) -> (x, y) 像素坐标的纯映射函数
//! - [`GroundControlPoint`]: 地理坐标与像素坐标的对应点（GCP）
//!
//! # 分辨率启发式
//!
//! 地理坐标系按固定因子 111 000（米/度近似值）放大，投影坐标系
//! 直接使用线性单位。该启发式不做纬度修正，在高纬度或大范围下
//! 会产生水平拉伸——这是与既有数据兼容的约定行为，不作"修正"。

use crate::crs::CrsKind;
use crate::extent::GeoExtent;
use serde::{Deserialize, Serialize};

/// 每度近似米数（固定因子，无纬度修正）
pub const METERS_PER_DEGREE: f64 = 111_000.0;

// ============================================================================
// 输出栅格尺寸
// ============================================================================

/// 输出栅格尺寸（像素）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RasterSize {
    /// 宽度（像素）
    pub width: u32,
    /// 高度（像素）
    pub height: u32,
}

impl RasterSize {
    /// 从地理范围和坐标系类别计算输出尺寸
    ///
    /// 地理坐标系: `round(跨度 × 111000)`；投影坐标系: `round(跨度)`。
    #[must_use]
    pub fn from_extent(extent: &GeoExtent, kind: CrsKind) -> Self {
        let (span_x, span_y) = match kind {
            CrsKind::Geographic => (
                extent.lon_span() * METERS_PER_DEGREE,
                extent.lat_span() * METERS_PER_DEGREE,
            ),
            CrsKind::Projected => (extent.lon_span(), extent.lat_span()),
        };
        Self {
            width: span_x.round() as u32,
            height: span_y.round() as u32,
        }
    }
}

// ============================================================================
// 像素映射函数
// ============================================================================

/// 像素映射函数
///
/// 将地理坐标映射为整数像素坐标。构造一次，多次调用，从不变更。
///
/// 不变式（方向正确性）：经度增大则 x 增大；纬度增大则 y 减小
/// （图像坐标约定，y 向下增长）。对范围内的任意坐标，
/// 结果落在 `0..=width` × `0..=height` 内。
///
/// # 示例
///
/// ```
/// use rr_geo::crs::CrsKind;
/// use rr_geo::extent::GeoExtent;
/// use rr_geo::mapping::{PixelMapping, RasterSize};
///
/// let extent = GeoExtent::new(0.0, 0.0, 0.001, 0.001).unwrap();
/// let size = RasterSize::from_extent(&extent, CrsKind::Geographic);
/// let mapping = PixelMapping::new(extent, size);
///
/// assert_eq!(mapping.to_pixel(0.0, 0.001), (0, 0));     // 左上角
/// assert_eq!(mapping.to_pixel(0.001, 0.0), (111, 111)); // 右下角
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelMapping {
    extent: GeoExtent,
    size: RasterSize,
}

impl PixelMapping {
    /// 创建像素映射
    ///
    /// `extent` 的跨度已由 [`GeoExtent::new`] 保证为正，
    /// 映射内部的除法不会除以零。
    #[must_use]
    pub fn new(extent: GeoExtent, size: RasterSize) -> Self {
        Self { extent, size }
    }

    /// 地理坐标 -> 像素坐标
    ///
    /// `x = floor((lon − lon_min) × width / lon_span)`
    /// `y = floor((lat_max − lat) × height / lat_span)`
    #[inline]
    #[must_use]
    pub fn to_pixel(&self, lon: f64, lat: f64) -> (i64, i64) {
        let x = (lon - self.extent.lon_min) * f64::from(self.size.width) / self.extent.lon_span();
        let y = (self.extent.lat_max - lat) * f64::from(self.size.height) / self.extent.lat_span();
        (x.floor() as i64, y.floor() as i64)
    }

    /// 地理范围
    #[must_use]
    pub fn extent(&self) -> &GeoExtent {
        &self.extent
    }

    /// 输出尺寸
    #[must_use]
    pub fn size(&self) -> RasterSize {
        self.size
    }

    /// 四个角点的地面控制点
    ///
    /// 顺序：左下、右下、左上、右上。像素坐标通过与绘制相同的
    /// 映射函数计算，因此 `py(lat_min) = height`、`py(lat_max) = 0`。
    #[must_use]
    pub fn corner_gcps(&self) -> [GroundControlPoint; 4] {
        let (px_min, py_min) = self.to_pixel(self.extent.lon_min, self.extent.lat_min);
        let (px_max, py_max) = self.to_pixel(self.extent.lon_max, self.extent.lat_max);

        [
            GroundControlPoint::new(self.extent.lon_min, self.extent.lat_min, px_min, py_min),
            GroundControlPoint::new(self.extent.lon_max, self.extent.lat_min, px_max, py_min),
            GroundControlPoint::new(self.extent.lon_min, self.extent.lat_max, px_min, py_max),
            GroundControlPoint::new(self.extent.lon_max, self.extent.lat_max, px_max, py_max),
        ]
    }
}

// ============================================================================
// 地面控制点
// ============================================================================

/// 地面控制点 (GCP)
///
/// 地理坐标与像素坐标的已知对应关系，高程固定为零。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundControlPoint {
    /// 经度
    pub lon: f64,
    /// 纬度
    pub lat: f64,
    /// 高程（固定为 0）
    pub z: f64,
    /// 像素列
    pub px: i64,
    /// 像素行
    pub py: i64,
}

impl GroundControlPoint {
    /// 创建地面控制点（高程为零）
    #[inline]
    #[must_use]
    pub fn new(lon: f64, lat: f64, px: i64, py: i64) -> Self {
        Self {
            lon,
            lat,
            z: 0.0,
            px,
            py,
        }
    }
}
