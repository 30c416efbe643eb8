// crates/rr_geo/src/error.rs
//! 地理计算错误类型
//!
//! 包含地理范围、坐标参考系统解析相关的错误。
//!
//! # 错误分类
//!
//! - **验证错误**：退化的地理范围（零宽度或零高度）
//! - **解析错误**：CRS 定义（WKT）无法解析

use thiserror::Error;

/// Geo 模块结果类型
pub type GeoResult<T> = Result<T, GeoError>;

/// 地理计算错误
#[derive(Error, Debug)]
pub enum GeoError {
    /// 退化的地理范围（映射函数会除以零）
    #[error("退化的地理范围: 经度跨度 {lon_span:.6}, 纬度跨度 {lat_span:.6} (两者必须大于零)")]
    DegenerateExtent {
        /// 经度跨度 (lon_max - lon_min)
        lon_span: f64,
        /// 纬度跨度 (lat_max - lat_min)
        lat_span: f64,
    },

    /// CRS 定义解析失败
    #[error("CRS 定义解析失败: {definition}")]
    CrsParseFailed {
        /// 失败的定义字符串（截断显示）
        definition: String,
        /// 失败原因
        reason: String,
    },
}

// ============================================================================
// 便捷构造函数
// ============================================================================

impl GeoError {
    /// 创建退化范围错误
    #[inline]
    pub fn degenerate_extent(lon_span: f64, lat_span: f64) -> Self {
        Self::DegenerateExtent { lon_span, lat_span }
    }

    /// 创建 CRS 解析失败错误
    #[inline]
    pub fn crs_parse_failed(definition: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::CrsParseFailed {
            definition: definition.into(),
            reason: reason.into(),
        }
    }
}
