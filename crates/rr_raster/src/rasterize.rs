// crates/rr_raster/src/rasterize.rs
//! 折线栅格化
//!
//! 将要素几何（单折线或多折线）经像素映射绘制到画布上。
//! 两种几何变体统一归一化为"一个或多个顶点序列"，
//! 绘制循环只写一份。

use crate::canvas::{GrayCanvas, FOREGROUND};
use geo_types::{LineString, MultiLineString};
use rr_geo::mapping::PixelMapping;

/// 道路要素几何
///
/// 只表达受支持的两种变体；点、多边形等其他形状在数据源
/// 转换阶段即被拒绝，无法构造出本类型。
#[derive(Debug, Clone, PartialEq)]
pub enum RoadGeometry {
    /// 单折线
    Line(LineString<f64>),
    /// 多折线（按源顺序的折线集合）
    MultiLine(MultiLineString<f64>),
}

impl RoadGeometry {
    /// 按源顺序迭代构成折线
    ///
    /// 单折线产出一个元素，多折线逐条产出，绘制端无需区分变体。
    pub fn parts(&self) -> std::slice::Iter<'_, LineString<f64>> {
        match self {
            RoadGeometry::Line(line) => std::slice::from_ref(line).iter(),
            RoadGeometry::MultiLine(multi) => multi.0.iter(),
        }
    }

    /// 构成折线条数
    #[must_use]
    pub fn part_count(&self) -> usize {
        match self {
            RoadGeometry::Line(_) => 1,
            RoadGeometry::MultiLine(multi) => multi.0.len(),
        }
    }
}

/// 将单个要素绘制到画布
///
/// 对每条构成折线：逐顶点经映射函数转为像素坐标，
/// 以前景强度绘制连接折线。
pub fn draw_geometry(canvas: &mut GrayCanvas, mapping: &PixelMapping, geometry: &RoadGeometry) {
    for part in geometry.parts() {
        let points: Vec<(i64, i64)> = part
            .coords()
            .map(|c| mapping.to_pixel(c.x, c.y))
            .collect();
        canvas.draw_polyline(&points, FOREGROUND);
    }
}

/// 按输入顺序将全部要素绘制到画布
///
/// 重叠笔画为覆盖写（后写者胜），与二值覆盖栅格一致。
/// 本函数不做反色；反色由调用方在全部绘制后执行一次。
pub fn rasterize<I>(canvas: &mut GrayCanvas, mapping: &PixelMapping, features: I)
where
    I: IntoIterator<Item = RoadGeometry>,
{
    for geometry in features {
        draw_geometry(canvas, mapping, &geometry);
    }
}

// ============================================================================
// 测试
// ============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use rr_geo::crs::CrsKind;
    use rr_geo::extent::GeoExtent;
    use rr_geo::mapping::RasterSize;

    fn scenario_mapping() -> PixelMapping {
        let extent = GeoExtent::new(0.0, 0.0, 0.001, 0.001).expect("valid extent");
        let size = RasterSize::from_extent(&extent, CrsKind::Geographic);
        PixelMapping::new(extent, size)
    }

    fn line(coords: Vec<(f64, f64)>) -> RoadGeometry {
        RoadGeometry::Line(LineString::from(coords))
    }

    #[test]
    fn test_parts_normalizes_variants() {
        let single = line(vec![(0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(single.part_count(), 1);
        assert_eq!(single.parts().count(), 1);

        let multi = RoadGeometry::MultiLine(MultiLineString(vec![
            LineString::from(vec![(0.0, 0.0), (1.0, 0.0)]),
            LineString::from(vec![(0.0, 1.0), (1.0, 1.0)]),
        ]));
        assert_eq!(multi.part_count(), 2);
        assert_eq!(multi.parts().count(), 2);
    }

    #[test]
    fn test_scenario_a_diagonal() {
        // 范围 (0,0)-(0.001,0.001)，单线 (0,0.001)->(0.001,0)
        // 映射为 (0,0)->(111,111) 的对角线
        let mapping = scenario_mapping();
        let mut canvas = GrayCanvas::for_size(mapping.size());

        rasterize(
            &mut canvas,
            &mapping,
            vec![line(vec![(0.0, 0.001), (0.001, 0.0)])],
        );

        for i in 0..=111 {
            assert_eq!(canvas.get(i, i), Some(FOREGROUND), "对角线像素 ({i},{i})");
        }
        assert_eq!(canvas.get(111, 0), Some(0));
    }

    #[test]
    fn test_multiline_equals_separate_lines() {
        // 多折线与按相同顺序提交的独立单折线产生相同像素
        let mapping = scenario_mapping();
        let part_a = vec![(0.0, 0.001), (0.001, 0.0)];
        let part_b = vec![(0.0, 0.0), (0.001, 0.001)];

        let mut as_multi = GrayCanvas::for_size(mapping.size());
        rasterize(
            &mut as_multi,
            &mapping,
            vec![RoadGeometry::MultiLine(MultiLineString(vec![
                LineString::from(part_a.clone()),
                LineString::from(part_b.clone()),
            ]))],
        );

        let mut as_singles = GrayCanvas::for_size(mapping.size());
        rasterize(
            &mut as_singles,
            &mapping,
            vec![line(part_a), line(part_b)],
        );

        assert_eq!(as_multi.pixels(), as_singles.pixels());
    }

    #[test]
    fn test_rasterize_deterministic() {
        // 同一输入两次栅格化产生逐像素一致的结果
        let mapping = scenario_mapping();
        let features = || {
            vec![
                line(vec![(0.0, 0.001), (0.001, 0.0)]),
                line(vec![(0.0, 0.0005), (0.001, 0.0005)]),
            ]
        };

        let mut first = GrayCanvas::for_size(mapping.size());
        rasterize(&mut first, &mapping, features());
        let mut second = GrayCanvas::for_size(mapping.size());
        rasterize(&mut second, &mapping, features());

        assert_eq!(first.pixels(), second.pixels());
    }

    #[test]
    fn test_overlap_last_write_wins() {
        // 两条重叠线依次绘制，交点为前景强度而不是混合值
        let mapping = scenario_mapping();
        let mut canvas = GrayCanvas::for_size(mapping.size());

        rasterize(
            &mut canvas,
            &mapping,
            vec![
                line(vec![(0.0, 0.0005), (0.001, 0.0005)]),
                line(vec![(0.0005, 0.0), (0.0005, 0.001)]),
            ],
        );

        assert_eq!(canvas.get(55, 55), Some(FOREGROUND));
    }

    #[test]
    fn test_inversion_background_and_lines() {
        // 反色后：未触及背景 = 255，线条像素 = 0
        let mapping = scenario_mapping();
        let mut canvas = GrayCanvas::for_size(mapping.size());
        rasterize(
            &mut canvas,
            &mapping,
            vec![line(vec![(0.0, 0.001), (0.001, 0.0)])],
        );
        canvas.invert();

        assert_eq!(canvas.get(0, 0), Some(0)); // 对角线起点
        assert_eq!(canvas.get(55, 55), Some(0));
        assert_eq!(canvas.get(111, 0), Some(255)); // 背景
        assert_eq!(canvas.get(0, 111), Some(255));
    }
}
