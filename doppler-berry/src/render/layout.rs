//! 画布布局计算.
//!
//! 布局参数一律以画布宽高为单位、原点在左下角给出 (见 [`crate::consts::layout`]),
//! 这里统一换算成原点在左上角的像素矩形.

use crate::consts::layout::{COLORBAR_ASPECT, COLORBAR_FRACTION, COLORBAR_PAD};
use crate::Idx2d;

/// 像素矩形, 原点在画布左上角.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Rect {
    /// 左边界.
    pub x: u32,

    /// 上边界.
    pub y: u32,

    /// 宽.
    pub width: u32,

    /// 高.
    pub height: u32,
}

impl Rect {
    /// 直接初始化.
    #[inline]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// 将 `[left, bottom, width, height]` 相对坐标换算成画布 `(W, H)` 上的像素矩形.
    pub fn from_fraction([left, bottom, w, h]: [f32; 4], (fig_w, fig_h): (u32, u32)) -> Self {
        let px = |v: f32, full: u32| (v * full as f32).round().max(0.0) as u32;
        Self {
            x: px(left, fig_w),
            y: px(1.0 - bottom - h, fig_h),
            width: px(w, fig_w).max(1),
            height: px(h, fig_h).max(1),
        }
    }

    /// 右边界 (不含).
    #[inline]
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// 下边界 (不含).
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// 中心点.
    #[inline]
    pub fn center(&self) -> (u32, u32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// 点 `(x, y)` 是否落在矩形内?
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let (x, y) = (x as i64, y as i64);
        (self.x as i64..self.right() as i64).contains(&x)
            && (self.y as i64..self.bottom() as i64).contains(&y)
    }

    /// 把矩形切成 (图像区域, 颜色条区域).
    ///
    /// 图像区域收缩到原宽度的 `1 - fraction - pad`; 颜色条与原矩形等高,
    /// 宽度按高宽比 `COLORBAR_ASPECT` 计算, 但不超过 `fraction` 所给的宽度.
    pub fn split_colorbar(&self) -> (Rect, Rect) {
        let w = self.width as f32;
        let img_w = (w * (1.0 - COLORBAR_FRACTION - COLORBAR_PAD)).round().max(1.0) as u32;
        let bar_x = self.x + (w * (1.0 - COLORBAR_FRACTION)).round() as u32;
        let bar_w = (self.height as f32 / COLORBAR_ASPECT)
            .min(w * COLORBAR_FRACTION)
            .round()
            .max(1.0) as u32;
        (
            Rect::new(self.x, self.y, img_w, self.height),
            Rect::new(bar_x, self.y, bar_w, self.height),
        )
    }
}

/// 子图区域的四条边界与间距, 均为相对坐标.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SubplotParams {
    /// 左.
    pub left: f32,

    /// 右.
    pub right: f32,

    /// 下.
    pub bottom: f32,

    /// 上.
    pub top: f32,

    /// 列间距, 以格子平均宽度为单位.
    pub wspace: f32,

    /// 行间距, 以格子平均高度为单位.
    pub hspace: f32,
}

impl SubplotParams {
    /// 默认子图参数, 用于单张静态图像.
    pub const fn figure_default() -> Self {
        use crate::consts::grid::{BOTTOM, LEFT, RIGHT, TOP};
        Self {
            left: LEFT,
            right: RIGHT,
            bottom: BOTTOM,
            top: TOP,
            wspace: 0.0,
            hspace: 0.0,
        }
    }

    /// 交互切片视图的子图参数.
    pub const fn slice_viewer() -> Self {
        use crate::consts::layout::*;
        Self {
            left: SUBPLOT_LEFT,
            right: SUBPLOT_RIGHT,
            bottom: SUBPLOT_BOTTOM,
            top: SUBPLOT_TOP,
            wspace: SUBPLOT_WSPACE,
            hspace: 0.0,
        }
    }

    /// 特征网格视图的子图参数.
    pub const fn feature_grid() -> Self {
        use crate::consts::grid::*;
        Self {
            left: LEFT,
            right: RIGHT,
            bottom: BOTTOM,
            top: TOP,
            wspace: WSPACE,
            hspace: HSPACE,
        }
    }

    /// 计算 `(rows, cols)` 网格中所有格子的像素矩形, 按行优先顺序排列.
    pub fn cells(&self, (rows, cols): Idx2d, fig: (u32, u32)) -> Vec<Rect> {
        if rows == 0 || cols == 0 {
            return Vec::new();
        }
        let (r, c) = (rows as f32, cols as f32);
        let cell_w = (self.right - self.left) / (c + self.wspace * (c - 1.0));
        let cell_h = (self.top - self.bottom) / (r + self.hspace * (r - 1.0));

        let mut v = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            // 第 0 行在最上方.
            let top = self.top - i as f32 * cell_h * (1.0 + self.hspace);
            for j in 0..cols {
                let left = self.left + j as f32 * cell_w * (1.0 + self.wspace);
                v.push(Rect::from_fraction([left, top - cell_h, cell_w, cell_h], fig));
            }
        }
        v
    }
}

#[cfg(test)]
mod tests {
    use super::{Rect, SubplotParams};

    #[test]
    fn test_from_fraction_flips_y() {
        let r = Rect::from_fraction([0.25, 0.1, 0.5, 0.2], (400, 1000));
        assert_eq!(r, Rect::new(100, 700, 200, 200));
        assert!(r.contains(100, 700));
        assert!(r.contains(299, 899));
        assert!(!r.contains(300, 899));
        assert!(!r.contains(-1, 750));
    }

    #[test]
    fn test_cells_do_not_overlap() {
        let cells = SubplotParams::feature_grid().cells((4, 4), (1000, 1000));
        assert_eq!(cells.len(), 16);
        for i in 0..4 {
            for j in 0..3 {
                let (a, b) = (cells[i * 4 + j], cells[i * 4 + j + 1]);
                assert!(a.right() < b.x);
                assert_eq!(a.y, b.y);
            }
        }
        for i in 0..3 {
            assert!(cells[i * 4].bottom() < cells[(i + 1) * 4].y);
        }
    }

    #[test]
    fn test_single_cell_fills_region() {
        let cells = SubplotParams::slice_viewer().cells((1, 1), (1000, 1000));
        assert_eq!(cells, vec![Rect::new(250, 120, 650, 630)]);
    }

    #[test]
    fn test_split_colorbar() {
        let (img, bar) = Rect::new(0, 0, 400, 300).split_colorbar();
        assert_eq!(img.width, 320);
        assert_eq!(bar.x, 340);
        assert_eq!(bar.width, 15);
        assert_eq!(bar.height, 300);
        assert!(img.right() < bar.x);
    }
}
