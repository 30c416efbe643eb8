// crates/rr_io/src/vector.rs
//! 矢量数据源读取
//!
//! 从 Shapefile 读取道路要素：打开时解析文件头的边界框
//! 和同名 `.prj` 边车文件中的投影定义，之后按需读取几何。
//!
//! 仅接受折线类几何；其他形状在转换阶段被拒绝并中止整个转换。

use crate::error::{IoError, IoResult};
use geo_types::{LineString, MultiLineString};
use rr_geo::crs::SpatialRef;
use rr_geo::extent::GeoExtent;
use rr_raster::rasterize::RoadGeometry;
use shapefile::{Shape, ShapeReader};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 道路矢量数据源
///
/// 打开即校验：文件存在、文件头可解析、投影定义存在且非空、
/// 边界框跨度为正。全部通过后才能读取几何。
pub struct RoadSource {
    path: PathBuf,
    reader: ShapeReader<BufReader<File>>,
    extent: GeoExtent,
    spatial_ref: SpatialRef,
}

// 手写 Debug：内部的 ShapeReader 不提供 Debug，只打印元信息
impl std::fmt::Debug for RoadSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoadSource")
            .field("path", &self.path)
            .field("extent", &self.extent)
            .field("spatial_ref", &self.spatial_ref)
            .finish_non_exhaustive()
    }
}

impl RoadSource {
    /// 打开数据源
    ///
    /// # Errors
    /// - [`IoError::UnreadableSource`]: 文件不存在或文件头无法解析
    /// - [`IoError::MissingProjection`]: 缺少 `.prj` 边车文件
    /// - [`IoError::Geo`]: 边界框跨度非正（退化范围）
    pub fn open(path: impl AsRef<Path>) -> IoResult<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(IoError::unreadable_source(&path, "文件不存在"));
        }

        let reader = ShapeReader::from_path(&path)
            .map_err(|e| IoError::unreadable_source(&path, e.to_string()))?;

        let bbox = &reader.header().bbox;
        let extent = GeoExtent::new(bbox.min.x, bbox.min.y, bbox.max.x, bbox.max.y)?;

        let spatial_ref = read_projection(&path)?;
        debug!(
            path = %path.display(),
            epsg = ?spatial_ref.epsg(),
            kind = spatial_ref.kind().unit_name(),
            "数据源已打开"
        );

        Ok(Self {
            path,
            reader,
            extent,
            spatial_ref,
        })
    }

    /// 数据源路径
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 文件头中的地理范围
    #[must_use]
    pub fn extent(&self) -> &GeoExtent {
        &self.extent
    }

    /// 投影定义
    #[must_use]
    pub fn spatial_ref(&self) -> &SpatialRef {
        &self.spatial_ref
    }

    /// 读取全部道路几何（按文件顺序）
    ///
    /// # Errors
    /// - [`IoError::UnreadableSource`]: 记录解码失败
    /// - [`IoError::UnsupportedGeometry`]: 出现非折线几何
    pub fn geometries(&mut self) -> IoResult<Vec<RoadGeometry>> {
        let mut features = Vec::new();
        for shape in self.reader.iter_shapes() {
            let shape = shape.map_err(|e| IoError::unreadable_source(&self.path, e.to_string()))?;
            features.push(shape_to_geometry(shape)?);
        }
        Ok(features)
    }
}

/// 读取同名 `.prj` 边车文件中的投影定义
fn read_projection(shp_path: &Path) -> IoResult<SpatialRef> {
    let prj_path = shp_path.with_extension("prj");
    if !prj_path.exists() {
        return Err(IoError::missing_projection(shp_path));
    }
    let wkt = std::fs::read_to_string(&prj_path)
        .map_err(|e| IoError::unreadable_source(&prj_path, e.to_string()))?;
    SpatialRef::from_wkt(&wkt).map_err(|_| IoError::missing_projection(shp_path))
}

/// 将 Shapefile 记录转换为道路几何
///
/// 单部件折线转为单折线，多部件折线转为多折线。
/// 其他形状类型一律拒绝。
fn shape_to_geometry(shape: Shape) -> IoResult<RoadGeometry> {
    match shape {
        Shape::Polyline(polyline) => {
            let mut parts: Vec<LineString<f64>> = polyline
                .parts()
                .iter()
                .map(|part| {
                    LineString::from(part.iter().map(|p| (p.x, p.y)).collect::<Vec<(f64, f64)>>())
                })
                .collect();
            if parts.len() == 1 {
                Ok(RoadGeometry::Line(parts.swap_remove(0)))
            } else {
                Ok(RoadGeometry::MultiLine(MultiLineString(parts)))
            }
        }
        other => Err(IoError::unsupported_geometry(other.shapetype().to_string())),
    }
}
