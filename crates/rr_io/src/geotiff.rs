// crates/rr_io/src/geotiff.rs
//! GeoTIFF 输出
//!
//! 将反色后的灰度画布编码为单波段 8 位 GeoTIFF：
//!
//! - `ModelTiepoint` (33922): 四个角点 GCP，每个 6 个 double
//! - `GeoKeyDirectory` (34735): 坐标系类别与 EPSG 代码
//! - `GeoAsciiParams` (34737): 原始 WKT 投影描述
//! - `GDAL_NODATA` (42113): 无数据值 255（反色后的白色背景）

use crate::error::{IoError, IoResult};
use rr_geo::crs::{CrsKind, SpatialRef};
use rr_geo::mapping::PixelMapping;
use rr_raster::canvas::GrayCanvas;
use std::io::Cursor;
use std::path::Path;
use tiff::encoder::{colortype, TiffEncoder};
use tiff::tags::Tag;
use tracing::debug;

/// 无数据值（与反色后的白色背景一致）
pub const NODATA_VALUE: u8 = 255;

// GeoKey 代码
const GT_MODEL_TYPE: u16 = 1024;
const GT_RASTER_TYPE: u16 = 1025;
const GEOGRAPHIC_TYPE: u16 = 2048;
const PROJECTED_CS_TYPE: u16 = 3072;

// GeoKey 取值
const MODEL_TYPE_PROJECTED: u16 = 1;
const MODEL_TYPE_GEOGRAPHIC: u16 = 2;
const RASTER_PIXEL_IS_AREA: u16 = 1;

/// GeoTIFF 写出器
///
/// 持有画布、像素映射与投影的引用，编码为自包含的 TIFF 字节流
/// 或直接写入文件。画布应已完成反色。
pub struct GeoTiffWriter<'a> {
    canvas: &'a GrayCanvas,
    mapping: &'a PixelMapping,
    spatial_ref: &'a SpatialRef,
}

impl<'a> GeoTiffWriter<'a> {
    /// 创建写出器
    #[must_use]
    pub fn new(
        canvas: &'a GrayCanvas,
        mapping: &'a PixelMapping,
        spatial_ref: &'a SpatialRef,
    ) -> Self {
        Self {
            canvas,
            mapping,
            spatial_ref,
        }
    }

    /// 编码为内存中的 TIFF 字节流
    ///
    /// # Errors
    /// 编码失败时返回 [`IoError::WriteFailure`]。
    pub fn to_bytes(&self) -> IoResult<Vec<u8>> {
        self.encode()
            .map_err(|e| IoError::write_failure("<内存缓冲>", e.to_string()))
    }

    /// 写入文件
    ///
    /// # Errors
    /// 编码或文件写入失败时返回 [`IoError::WriteFailure`]。
    pub fn write(&self, path: impl AsRef<Path>) -> IoResult<()> {
        let path = path.as_ref();
        let bytes = self
            .encode()
            .map_err(|e| IoError::write_failure(path, e.to_string()))?;
        let byte_count = bytes.len();
        std::fs::write(path, bytes).map_err(|e| IoError::write_failure(path, e.to_string()))?;
        debug!(path = %path.display(), bytes = byte_count, "GeoTIFF 已写入");
        Ok(())
    }

    fn encode(&self) -> Result<Vec<u8>, tiff::TiffError> {
        let mut cursor = Cursor::new(Vec::new());
        let mut encoder = TiffEncoder::new(&mut cursor)?;
        let mut image =
            encoder.new_image::<colortype::Gray8>(self.canvas.width(), self.canvas.height())?;

        let tiepoints = self.tiepoints();
        let geo_keys = self.geo_key_directory();
        let ascii_params = format!("{}|", self.spatial_ref.wkt());

        image
            .encoder()
            .write_tag(Tag::ModelTiepointTag, &tiepoints[..])?;
        image
            .encoder()
            .write_tag(Tag::GeoKeyDirectoryTag, &geo_keys[..])?;
        image
            .encoder()
            .write_tag(Tag::GeoAsciiParamsTag, ascii_params.as_str())?;
        image.encoder().write_tag(Tag::GdalNodata, "255")?;

        image.write_data(self.canvas.pixels())?;
        Ok(cursor.into_inner())
    }

    /// 四个角点 GCP 展开为 ModelTiepoint 数组
    ///
    /// 每个控制点 6 个 double: (像素列, 像素行, 0, 经度, 纬度, 0)。
    fn tiepoints(&self) -> Vec<f64> {
        let mut values = Vec::with_capacity(24);
        for gcp in self.mapping.corner_gcps() {
            values.push(gcp.px as f64);
            values.push(gcp.py as f64);
            values.push(0.0);
            values.push(gcp.lon);
            values.push(gcp.lat);
            values.push(gcp.z);
        }
        values
    }

    /// 构造 GeoKeyDirectory
    ///
    /// 条目按键编号升序排列；EPSG 代码缺失时省略对应条目，
    /// 投影信息仍可从 GeoAsciiParams 中的 WKT 恢复。
    fn geo_key_directory(&self) -> Vec<u16> {
        let model_type = match self.spatial_ref.kind() {
            CrsKind::Geographic => MODEL_TYPE_GEOGRAPHIC,
            CrsKind::Projected => MODEL_TYPE_PROJECTED,
        };

        let mut entries: Vec<[u16; 4]> = vec![
            [GT_MODEL_TYPE, 0, 1, model_type],
            [GT_RASTER_TYPE, 0, 1, RASTER_PIXEL_IS_AREA],
        ];
        if let Some(epsg) = self.spatial_ref.epsg() {
            if let Ok(code) = u16::try_from(epsg) {
                let key = match self.spatial_ref.kind() {
                    CrsKind::Geographic => GEOGRAPHIC_TYPE,
                    CrsKind::Projected => PROJECTED_CS_TYPE,
                };
                entries.push([key, 0, 1, code]);
            }
        }

        let mut directory = vec![1, 1, 0, entries.len() as u16];
        for entry in entries {
            directory.extend_from_slice(&entry);
        }
        directory
    }
}
