// crates/rr_io/src/lib.rs
//! RoadRaster IO 模块
//!
//! 负责与外部世界的全部交互：
//!
//! - `vector`: Shapefile 数据源读取（几何、边界框、`.prj` 投影）
//! - `geotiff`: 单波段 8 位 GeoTIFF 编码与写出
//! - `pipeline`: 打开 -> 推导 -> 栅格化 -> 反色 -> 写出的完整流程
//! - `error`: IO 层错误类型

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]

pub mod error;
pub mod geotiff;
pub mod pipeline;
pub mod vector;

// 重导出常用类型
pub use error::{IoError, IoResult};
pub use geotiff::{GeoTiffWriter, NODATA_VALUE};
pub use pipeline::{convert, inspect, ConvertConfig, ConvertReport, DatasetSummary};
pub use vector::RoadSource;
