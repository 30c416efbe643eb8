// crates/rr_io/src/error.rs
//! IO 层错误类型

use rr_geo::error::GeoError;
use std::path::PathBuf;
use thiserror::Error;

/// IO 层 Result 类型
pub type IoResult<T> = Result<T, IoError>;

/// IO 层错误
#[derive(Debug, Error)]
pub enum IoError {
    /// 数据源不存在或无法解析
    #[error("数据源不可读: {path}: {reason}")]
    UnreadableSource {
        /// 数据源路径
        path: PathBuf,
        /// 失败原因
        reason: String,
    },

    /// 数据源缺少投影定义
    #[error("数据源缺少投影定义: {path}")]
    MissingProjection {
        /// 数据源路径
        path: PathBuf,
    },

    /// 不支持的几何类型
    #[error("不支持的几何类型: {shape_type}，仅支持折线与多折线")]
    UnsupportedGeometry {
        /// 几何类型名称
        shape_type: String,
    },

    /// 输出写入失败
    #[error("输出写入失败: {path}: {reason}")]
    WriteFailure {
        /// 输出路径
        path: PathBuf,
        /// 失败原因
        reason: String,
    },

    /// 几何计算错误
    #[error("几何计算错误: {0}")]
    Geo(#[from] GeoError),
}

impl IoError {
    /// 创建数据源不可读错误
    pub fn unreadable_source(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::UnreadableSource {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// 创建缺少投影错误
    pub fn missing_projection(path: impl Into<PathBuf>) -> Self {
        Self::MissingProjection { path: path.into() }
    }

    /// 创建不支持几何错误
    pub fn unsupported_geometry(shape_type: impl Into<String>) -> Self {
        Self::UnsupportedGeometry {
            shape_type: shape_type.into(),
        }
    }

    /// 创建写入失败错误
    pub fn write_failure(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::WriteFailure {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
