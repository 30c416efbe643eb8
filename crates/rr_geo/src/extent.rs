// crates/rr_geo/src/extent.rs
//! 地理范围（边界框）
//!
//! 数据集在其原生坐标系下的边界框。从矢量数据源读取一次，
//! 之后不可变，是像素映射函数的唯一参数来源。

use crate::error::{GeoError, GeoResult};
use serde::{Deserialize, Serialize};

/// 地理范围 (lon_min, lat_min, lon_max, lat_max)
///
/// 不变式: `lon_min < lon_max` 且 `lat_min < lat_max`，
/// 由构造函数保证，违反时返回 [`GeoError::DegenerateExtent`]。
///
/// # 示例
///
/// ```
/// use rr_geo::extent::GeoExtent;
///
/// let extent = GeoExtent::new(0.0, 0.0, 0.001, 0.001).unwrap();
/// assert!((extent.lon_span() - 0.001).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoExtent {
    /// 最小经度（或投影坐标 X 最小值）
    pub lon_min: f64,
    /// 最小纬度（或投影坐标 Y 最小值）
    pub lat_min: f64,
    /// 最大经度
    pub lon_max: f64,
    /// 最大纬度
    pub lat_max: f64,
}

impl GeoExtent {
    /// 创建地理范围
    ///
    /// # Errors
    /// 当经度或纬度跨度不为正时返回 [`GeoError::DegenerateExtent`]。
    pub fn new(lon_min: f64, lat_min: f64, lon_max: f64, lat_max: f64) -> GeoResult<Self> {
        let lon_span = lon_max - lon_min;
        let lat_span = lat_max - lat_min;
        // 正向判断：NaN 跨度不满足 > 0，同样被拒绝
        if !(lon_span > 0.0 && lat_span > 0.0) {
            return Err(GeoError::degenerate_extent(lon_span, lat_span));
        }
        Ok(Self {
            lon_min,
            lat_min,
            lon_max,
            lat_max,
        })
    }

    /// 经度跨度
    #[inline]
    #[must_use]
    pub fn lon_span(&self) -> f64 {
        self.lon_max - self.lon_min
    }

    /// 纬度跨度
    #[inline]
    #[must_use]
    pub fn lat_span(&self) -> f64 {
        self.lat_max - self.lat_min
    }

    /// 左下角 (lon_min, lat_min)
    #[inline]
    #[must_use]
    pub fn lower_left(&self) -> (f64, f64) {
        (self.lon_min, self.lat_min)
    }

    /// 右下角 (lon_max, lat_min)
    #[inline]
    #[must_use]
    pub fn lower_right(&self) -> (f64, f64) {
        (self.lon_max, self.lat_min)
    }

    /// 左上角 (lon_min, lat_max)
    #[inline]
    #[must_use]
    pub fn upper_left(&self) -> (f64, f64) {
        (self.lon_min, self.lat_max)
    }

    /// 右上角 (lon_max, lat_max)
    #[inline]
    #[must_use]
    pub fn upper_right(&self) -> (f64, f64) {
        (self.lon_max, self.lat_max)
    }

    /// 判断坐标是否落在范围内（含边界）
    #[inline]
    #[must_use]
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        (self.lon_min..=self.lon_max).contains(&lon) && (self.lat_min..=self.lat_max).contains(&lat)
    }
}

// ============================================================================
// 测试
// ============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_valid() {
        let extent = GeoExtent::new(-122.5, 37.0, -122.0, 37.5).expect("valid extent");
        assert!((extent.lon_span() - 0.5).abs() < 1e-12);
        assert!((extent.lat_span() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_extent_zero_width_rejected() {
        let result = GeoExtent::new(10.0, 0.0, 10.0, 1.0);
        match result {
            Err(GeoError::DegenerateExtent { lon_span, .. }) => {
                assert_eq!(lon_span, 0.0);
            }
            _ => panic!("应返回 DegenerateExtent"),
        }
    }

    #[test]
    fn test_extent_zero_height_rejected() {
        assert!(GeoExtent::new(0.0, 5.0, 1.0, 5.0).is_err());
    }

    #[test]
    fn test_extent_nan_rejected() {
        // 损坏的文件头可能产生 NaN 边界，必须在构造时拒绝
        assert!(GeoExtent::new(f64::NAN, 0.0, 1.0, 1.0).is_err());
        assert!(GeoExtent::new(0.0, f64::NAN, 1.0, 1.0).is_err());
        assert!(GeoExtent::new(0.0, 0.0, f64::NAN, 1.0).is_err());
        assert!(GeoExtent::new(0.0, 0.0, 1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_extent_inverted_rejected() {
        // 最小值大于最大值
        assert!(GeoExtent::new(1.0, 0.0, 0.0, 1.0).is_err());
        assert!(GeoExtent::new(0.0, 1.0, 1.0, 0.0).is_err());
    }

    #[test]
    fn test_extent_corners() {
        let extent = GeoExtent::new(0.0, 10.0, 1.0, 11.0).expect("valid extent");
        assert_eq!(extent.lower_left(), (0.0, 10.0));
        assert_eq!(extent.lower_right(), (1.0, 10.0));
        assert_eq!(extent.upper_left(), (0.0, 11.0));
        assert_eq!(extent.upper_right(), (1.0, 11.0));
    }

    #[test]
    fn test_extent_contains() {
        let extent = GeoExtent::new(0.0, 0.0, 1.0, 1.0).expect("valid extent");
        assert!(extent.contains(0.5, 0.5));
        assert!(extent.contains(0.0, 1.0)); // 边界含端点
        assert!(!extent.contains(1.5, 0.5));
        assert!(!extent.contains(0.5, -0.1));
    }
}
