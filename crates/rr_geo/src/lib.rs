// crates/rr_geo/src/lib.rs
//! RoadRaster 地理空间计算模块
//!
//! 提供矢量转栅格流水线的纯计算部分：地理范围、坐标参考系统
//! 分类、输出分辨率推导与像素映射。无任何 IO 副作用。
//!
//! # 模块
//!
//! - `extent`: 地理范围（边界框）
//! - `crs`: 坐标参考系统分类与 WKT 解析
//! - `mapping`: 输出尺寸推导、像素映射函数、地面控制点
//!
//! # 示例
//!
//! ```
//! use rr_geo::prelude::*;
//!
//! let extent = GeoExtent::new(0.0, 0.0, 0.001, 0.001).unwrap();
//! let size = RasterSize::from_extent(&extent, CrsKind::Geographic);
//! let mapping = PixelMapping::new(extent, size);
//! assert_eq!(mapping.to_pixel(0.0, 0.001), (0, 0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod crs;
pub mod error;
pub mod extent;
pub mod mapping;

/// 预导入模块
pub mod prelude {
    pub use crate::crs::{CrsKind, SpatialRef};
    pub use crate::error::{GeoError, GeoResult};
    pub use crate::extent::GeoExtent;
    pub use crate::mapping::{GroundControlPoint, PixelMapping, RasterSize, METERS_PER_DEGREE};
}

// 重导出常用类型
pub use crs::{CrsKind, SpatialRef};
pub use error::{GeoError, GeoResult};
pub use extent::GeoExtent;
pub use mapping::{GroundControlPoint, PixelMapping, RasterSize, METERS_PER_DEGREE};
