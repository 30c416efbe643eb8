// crates/rr_raster/src/lib.rs
//! RoadRaster 栅格化模块
//!
//! 提供灰度画布与折线栅格化：将要素几何经像素映射绘制为位图。
//!
//! # 模块
//!
//! - `canvas`: 单通道灰度画布（Bresenham 线段绘制、整体反色）
//! - `rasterize`: 要素几何归一化与绘制循环
//!
//! # 示例
//!
//! ```
//! use geo_types::LineString;
//! use rr_geo::prelude::*;
//! use rr_raster::canvas::GrayCanvas;
//! use rr_raster::rasterize::{rasterize, RoadGeometry};
//!
//! let extent = GeoExtent::new(0.0, 0.0, 0.001, 0.001).unwrap();
//! let size = RasterSize::from_extent(&extent, CrsKind::Geographic);
//! let mapping = PixelMapping::new(extent, size);
//!
//! let mut canvas = GrayCanvas::for_size(size);
//! let diagonal = RoadGeometry::Line(LineString::from(vec![(0.0, 0.001), (0.001, 0.0)]));
//! rasterize(&mut canvas, &mapping, vec![diagonal]);
//! canvas.invert();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_sign_loss)]

pub mod canvas;
pub mod rasterize;

// 重导出常用类型
pub use canvas::{GrayCanvas, FOREGROUND};
pub use rasterize::{draw_geometry, rasterize, RoadGeometry};
