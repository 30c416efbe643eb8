// crates/rr_raster/src/canvas.rs
//! 灰度画布
//!
//! 单通道 u8 位图，初始全零（黑）。绘制阶段由栅格化器独占持有，
//! 绘制结束后整体反色一次再持久化。
//!
//! 线段绘制采用 Bresenham 算法，越界像素直接跳过（裁剪而非报错）。

use rr_geo::mapping::RasterSize;
use serde::{Deserialize, Serialize};

/// 前景绘制强度（反色前）
pub const FOREGROUND: u8 = 255;

/// 灰度画布
///
/// # 示例
///
/// ```
/// use rr_raster::canvas::{GrayCanvas, FOREGROUND};
///
/// let mut canvas = GrayCanvas::new(4, 4);
/// canvas.draw_line((0, 0), (3, 3), FOREGROUND);
/// assert_eq!(canvas.get(0, 0), Some(FOREGROUND));
/// assert_eq!(canvas.get(3, 0), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrayCanvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl GrayCanvas {
    /// 创建全零（黑）画布
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    /// 按输出尺寸创建画布
    ///
    /// 实际分配 `(width + 1) × (height + 1)` 个像素：映射函数的
    /// 值域是闭区间 `0..=width`，多出的一行一列使边界坐标可寻址。
    #[must_use]
    pub fn for_size(size: RasterSize) -> Self {
        Self::new(size.width + 1, size.height + 1)
    }

    /// 画布宽度（像素）
    #[inline]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// 画布高度（像素）
    #[inline]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// 像素数据（按行存储）
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// 读取像素值，越界返回 None
    #[inline]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// 写入像素值，越界坐标跳过（覆盖写，不混合）
    #[inline]
    fn set(&mut self, x: i64, y: i64, value: u8) {
        if x >= 0 && y >= 0 && x < i64::from(self.width) && y < i64::from(self.height) {
            self.pixels[y as usize * self.width as usize + x as usize] = value;
        }
    }

    /// Bresenham 线段绘制
    ///
    /// 端点均含；落在画布外的像素被裁剪掉。
    pub fn draw_line(&mut self, p0: (i64, i64), p1: (i64, i64), value: u8) {
        let (mut x, mut y) = p0;
        let (x1, y1) = p1;

        let dx = (x1 - x).abs();
        let dy = (y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx - dy;

        loop {
            self.set(x, y, value);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// 依次连接各顶点绘制折线
    ///
    /// 少于两个顶点时不绘制任何像素。
    pub fn draw_polyline(&mut self, points: &[(i64, i64)], value: u8) {
        for segment in points.windows(2) {
            self.draw_line(segment[0], segment[1], value);
        }
    }

    /// 整体反色 (v -> 255 - v)
    ///
    /// 背景变白、线条变黑，仅为方便人眼查看。必须在全部绘制
    /// 完成之后、持久化之前恰好调用一次。
    pub fn invert(&mut self) {
        for v in &mut self.pixels {
            *v = u8::MAX - *v;
        }
    }
}

// ============================================================================
// 测试
// ============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_black() {
        let canvas = GrayCanvas::new(8, 4);
        assert_eq!(canvas.width(), 8);
        assert_eq!(canvas.height(), 4);
        assert!(canvas.pixels().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_for_size_adds_one() {
        // 映射值域 0..=width，画布多一行一列
        let canvas = GrayCanvas::for_size(RasterSize {
            width: 111,
            height: 111,
        });
        assert_eq!(canvas.width(), 112);
        assert_eq!(canvas.height(), 112);
    }

    #[test]
    fn test_draw_diagonal() {
        let mut canvas = GrayCanvas::new(10, 10);
        canvas.draw_line((0, 0), (9, 9), FOREGROUND);

        for i in 0..10 {
            assert_eq!(canvas.get(i, i), Some(FOREGROUND));
        }
        // 对角线之外保持背景
        assert_eq!(canvas.get(9, 0), Some(0));
        assert_eq!(canvas.get(0, 9), Some(0));
    }

    #[test]
    fn test_draw_line_reverse_direction() {
        // 两个方向绘制同一线段覆盖相同像素
        let mut forward = GrayCanvas::new(10, 10);
        let mut backward = GrayCanvas::new(10, 10);
        forward.draw_line((1, 2), (8, 5), FOREGROUND);
        backward.draw_line((8, 5), (1, 2), FOREGROUND);

        let lit = |c: &GrayCanvas| {
            c.pixels()
                .iter()
                .enumerate()
                .filter(|(_, &v)| v != 0)
                .map(|(i, _)| i)
                .collect::<Vec<_>>()
        };
        assert_eq!(lit(&forward), lit(&backward));
    }

    #[test]
    fn test_draw_line_clips_out_of_bounds() {
        // 越界线段不会 panic，画布内部分仍被绘制
        let mut canvas = GrayCanvas::new(4, 4);
        canvas.draw_line((-3, 1), (6, 1), FOREGROUND);

        for x in 0..4 {
            assert_eq!(canvas.get(x, 1), Some(FOREGROUND));
        }
    }

    #[test]
    fn test_overlap_is_overwrite() {
        // 重叠像素保持前景强度，不混色
        let mut canvas = GrayCanvas::new(10, 10);
        canvas.draw_line((0, 5), (9, 5), FOREGROUND);
        canvas.draw_line((5, 0), (5, 9), FOREGROUND);

        assert_eq!(canvas.get(5, 5), Some(FOREGROUND));
    }

    #[test]
    fn test_polyline_connects_vertices() {
        let mut canvas = GrayCanvas::new(10, 10);
        canvas.draw_polyline(&[(0, 0), (4, 0), (4, 4)], FOREGROUND);

        assert_eq!(canvas.get(2, 0), Some(FOREGROUND));
        assert_eq!(canvas.get(4, 2), Some(FOREGROUND));
        assert_eq!(canvas.get(0, 4), Some(0));
    }

    #[test]
    fn test_polyline_single_point_draws_nothing() {
        let mut canvas = GrayCanvas::new(4, 4);
        canvas.draw_polyline(&[(2, 2)], FOREGROUND);
        assert!(canvas.pixels().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_invert() {
        let mut canvas = GrayCanvas::new(4, 1);
        canvas.draw_line((1, 0), (1, 0), FOREGROUND);
        canvas.invert();

        // 未触及的背景变为 255，线条像素变为 0
        assert_eq!(canvas.get(0, 0), Some(255));
        assert_eq!(canvas.get(1, 0), Some(0));
        assert_eq!(canvas.get(2, 0), Some(255));
    }
}
