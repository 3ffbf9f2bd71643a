//! 带物理坐标的拼接微多普勒视图.

use log::info;
use ndarray::ArrayView2;

use crate::config::ViewConfig;
use crate::consts::text::{DOPPLER_AXIS_LABEL, TIME_AXIS_LABEL};
use crate::data::ColorScale;
use crate::error::{ViewError, ViewResult};
use crate::render::{Anchor, Colormap, Frame, Origin, SubplotParams};
use crate::view::{Figure, ImagePanel, ScaleRule};

/// 图像四条边对应的数据坐标.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent {
    /// 左边界 (横轴最小值).
    pub left: f64,

    /// 右边界 (横轴最大值).
    pub right: f64,

    /// 下边界 (纵轴最小值).
    pub bottom: f64,

    /// 上边界 (纵轴最大值).
    pub top: f64,
}

impl Extent {
    /// 以 `n_cols` 列的拼接图计算时间 (秒) / 多普勒速度 (m/s) 坐标范围:
    /// `(0, chirp_period * n, -n * doppler_resolution / 2, n * doppler_resolution / 2)`.
    ///
    /// 纵轴范围同样按列数 `n` 计算.
    pub fn doppler_time(n_cols: usize, chirp_period: f64, doppler_resolution: f64) -> Self {
        let n = n_cols as f64;
        let half = n * doppler_resolution / 2.0;
        Self {
            left: 0.0,
            right: chirp_period * n,
            bottom: -half,
            top: half,
        }
    }
}

/// 拼接视图: 一张 `origin = lower` 的静态图像, 带坐标范围和坐标轴标签.
#[derive(Clone, Debug)]
pub struct StitchView {
    panel: ImagePanel,
    extent: Extent,
    size: (u32, u32),
    font_scale: f32,
}

impl StitchView {
    /// 构建拼接视图. `data` 的轴为 `(多普勒, 时间)`.
    ///
    /// `data` 为空时返回 `ViewError::EmptyAxis`.
    pub fn new(
        data: ArrayView2<f32>,
        chirp_period: f64,
        doppler_resolution: f64,
        title: impl Into<String>,
        cmap: Colormap,
        config: &ViewConfig,
    ) -> ViewResult<Self> {
        let (rows, cols) = data.dim();
        if rows == 0 {
            return Err(ViewError::EmptyAxis { axis: 0 });
        }
        if cols == 0 {
            return Err(ViewError::EmptyAxis { axis: 1 });
        }
        let extent = Extent::doppler_time(cols, chirp_period, doppler_resolution);
        let scale = ColorScale::autoscale(data).unwrap_or_default();
        let panel = ImagePanel::new(title, 0, data, ScaleRule::Fixed(scale), cmap)
            .with_origin(Origin::Lower);
        info!("stitch view: shape {:?}, extent {:?}", (rows, cols), extent);
        Ok(Self {
            panel,
            extent,
            size: config.figure_size,
            font_scale: config.font_scale,
        })
    }

    /// 坐标范围.
    #[inline]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// 图像.
    #[inline]
    pub fn data(&self) -> ArrayView2<f32> {
        self.panel.data()
    }

    /// 标题.
    #[inline]
    pub fn title(&self) -> &str {
        self.panel.title()
    }
}

impl Figure for StitchView {
    fn render(&self) -> Frame {
        let mut frame = Frame::new(self.size);
        let cells = SubplotParams::figure_default().cells((1, 1), self.size);
        let Some(&cell) = cells.first() else {
            return frame;
        };
        self.panel.draw(&mut frame, cell, self.font_scale);

        let small = self.font_scale * 0.8;
        let below = cell.bottom() + 16;
        let e = self.extent;
        // 横轴两端刻度与标签.
        frame.caption(format!("{:.2}", e.left), (cell.x, below), Anchor::Left, small);
        frame.caption(
            format!("{:.2}", e.right),
            (cell.right(), below),
            Anchor::Right,
            small,
        );
        frame.caption(
            TIME_AXIS_LABEL,
            (cell.center().0, below + 20),
            Anchor::Center,
            self.font_scale,
        );
        // 纵轴两端刻度与标签.
        let left = cell.x.saturating_sub(6);
        frame.caption(format!("{:.2}", e.top), (left, cell.y + 10), Anchor::Right, small);
        frame.caption(
            format!("{:.2}", e.bottom),
            (left, cell.bottom()),
            Anchor::Right,
            small,
        );
        frame.caption(
            DOPPLER_AXIS_LABEL,
            (left, cell.center().1),
            Anchor::Right,
            self.font_scale,
        );
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::{Extent, StitchView};
    use crate::config::ViewConfig;
    use crate::consts::text::STITCH_TITLE;
    use crate::render::Colormap;
    use crate::view::Figure;
    use ndarray::Array2;

    #[test]
    fn test_extent_uses_column_count() {
        let e = Extent::doppler_time(200, 0.01, 0.05);
        assert!((e.right - 2.0).abs() < 1e-12);
        assert!((e.top - 5.0).abs() < 1e-12);
        assert!((e.bottom + 5.0).abs() < 1e-12);
        assert_eq!(e.left, 0.0);
    }

    #[test]
    fn test_stitch_view() {
        let x = Array2::from_shape_fn((16, 40), |(i, j)| (i + j) as f32);
        let cfg = ViewConfig::default();
        let v = StitchView::new(x.view(), 0.5, 0.1, STITCH_TITLE, Colormap::Jet, &cfg).unwrap();
        assert_eq!(v.extent(), Extent::doppler_time(40, 0.5, 0.1));
        assert_eq!(v.title(), STITCH_TITLE);
        assert_eq!(v.data(), x.view());

        let frame = v.render();
        let texts: Vec<_> = frame.captions().iter().map(|c| c.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                STITCH_TITLE,
                "0.00",
                "20.00",
                "Time (s)",
                "2.00",
                "-2.00",
                "Doppler (m/s)"
            ]
        );
    }

    #[test]
    fn test_stitch_rejects_empty() {
        let x = Array2::<f32>::zeros((4, 0));
        let cfg = ViewConfig::default();
        assert!(StitchView::new(x.view(), 0.5, 0.1, "t", Colormap::Jet, &cfg).is_err());
    }
}
