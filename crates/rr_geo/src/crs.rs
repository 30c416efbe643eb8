// crates/rr_geo/src/crs.rs
//! 坐标参考系统分类与解析
//!
//! 从 `.prj` 文件中的 WKT 字符串解析出 EPSG 代码，
//! 并判定坐标系类别（地理坐标系/投影坐标系）。
//! 该类别决定输出分辨率计算采用哪个比例因子。
//!
//! # 示例
//!
//! ```
//! use rr_geo::crs::{CrsKind, SpatialRef};
//!
//! let wkt = r#"GEOGCS["WGS 84",AUTHORITY["EPSG","4326"]]"#;
//! let srs = SpatialRef::from_wkt(wkt).unwrap();
//! assert_eq!(srs.kind(), CrsKind::Geographic);
//! assert_eq!(srs.epsg(), Some(4326));
//! ```

use crate::error::{GeoError, GeoResult};
use serde::{Deserialize, Serialize};

// ============================================================================
// 坐标系类别
// ============================================================================

/// 坐标系类别
///
/// - `Geographic`: 角度单位（度），如 WGS84
/// - `Projected`: 线性单位（米），如 UTM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrsKind {
    /// 地理坐标系（度）
    Geographic,
    /// 投影坐标系（米）
    Projected,
}

impl CrsKind {
    /// 单位名称
    #[must_use]
    pub fn unit_name(&self) -> &'static str {
        match self {
            CrsKind::Geographic => "degree",
            CrsKind::Projected => "metre",
        }
    }
}

// ============================================================================
// 空间参考
// ============================================================================

/// 解析后的空间参考
///
/// 保留原始 WKT（写入输出栅格的投影描述）以及派生的
/// EPSG 代码和坐标系类别。派生一次，之后不可变。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpatialRef {
    /// 原始 WKT 定义字符串
    wkt: String,
    /// EPSG 代码（如果可解析）
    epsg: Option<u32>,
    /// 坐标系类别
    kind: CrsKind,
}

impl SpatialRef {
    /// 从 WKT 字符串解析
    ///
    /// # Errors
    /// 当定义字符串为空时返回 [`GeoError::CrsParseFailed`]。
    pub fn from_wkt(wkt: &str) -> GeoResult<Self> {
        let wkt = wkt.trim();
        if wkt.is_empty() {
            return Err(GeoError::crs_parse_failed("<空>", "WKT 定义为空"));
        }

        let epsg = Self::parse_epsg(wkt);
        let kind = if Self::detect_geographic(wkt, epsg) {
            CrsKind::Geographic
        } else {
            CrsKind::Projected
        };

        Ok(Self {
            wkt: wkt.to_string(),
            epsg,
            kind,
        })
    }

    /// WGS84 地理坐标系
    #[must_use]
    pub fn wgs84() -> Self {
        Self {
            wkt: r#"GEOGCS["WGS 84",DATUM["WGS_1984",SPHEROID["WGS 84",6378137,298.257223563]],AUTHORITY["EPSG","4326"]]"#.to_string(),
            epsg: Some(4326),
            kind: CrsKind::Geographic,
        }
    }

    /// WKT 定义字符串
    #[must_use]
    pub fn wkt(&self) -> &str {
        &self.wkt
    }

    /// EPSG 代码（如果可解析）
    #[must_use]
    pub fn epsg(&self) -> Option<u32> {
        self.epsg
    }

    /// 坐标系类别
    #[must_use]
    pub fn kind(&self) -> CrsKind {
        self.kind
    }

    /// 是否为地理坐标系
    #[must_use]
    pub fn is_geographic(&self) -> bool {
        self.kind == CrsKind::Geographic
    }

    /// 是否为投影坐标系
    #[must_use]
    pub fn is_projected(&self) -> bool {
        self.kind == CrsKind::Projected
    }

    /// 从字符串解析 EPSG 代码
    fn parse_epsg(s: &str) -> Option<u32> {
        // 尝试从 "EPSG:xxxx" 格式解析
        if let Some(suffix) = s.strip_prefix("EPSG:") {
            return suffix.trim().parse().ok();
        }
        // 尝试从 WKT 的 AUTHORITY["EPSG","xxxx"] 解析
        // 多个 AUTHORITY 时取最后一个（最外层对象的代码在末尾）
        if let Some(pos) = s.rfind("AUTHORITY[\"EPSG\",\"") {
            let start = pos + 18;
            if let Some(end) = s[start..].find("\"]") {
                return s[start..start + end].parse().ok();
            }
        }
        // 尝试从 ID["EPSG",xxxx] 解析（WKT2 格式）
        if let Some(pos) = s.rfind("ID[\"EPSG\",") {
            let start = pos + 10;
            if let Some(end) = s[start..].find(']') {
                return s[start..start + end].trim().parse().ok();
            }
        }
        None
    }

    /// 检测是否为地理坐标系
    fn detect_geographic(def: &str, epsg: Option<u32>) -> bool {
        // 常见地理 CRS EPSG 代码
        if let Some(code) = epsg {
            if code == 4326 || code == 4269 || code == 4267 || code == 4490 {
                return true;
            }
        }
        // 检查定义字符串：投影坐标系的 WKT 以 PROJCS 开头，
        // 但其内部也嵌套 GEOGCS，因此先排除 PROJCS
        let lower = def.to_lowercase();
        if lower.starts_with("projcs") || lower.starts_with("projcrs") {
            return false;
        }
        lower.contains("geogcs")
            || lower.contains("geogcrs")
            || lower.contains("longlat")
            || lower.contains("+proj=longlat")
    }
}
