//! PCA 特征网格视图.

use image::RgbImage;
use itertools::izip;
use log::info;
use ndarray::{Array2, ArrayView2, Axis};

use crate::config::ViewConfig;
use crate::consts::grid::{CAPACITY, COLS, ROWS, SUPTITLE_ANCHOR, SUPTITLE_SCALE};
use crate::data::{reshape_column_major, ColorScale};
use crate::error::{ViewError, ViewResult};
use crate::render::{rasterize, Anchor, Colormap, Frame, Origin, Rect, SubplotParams};
use crate::view::Figure;
use crate::Idx2d;

cfg_if::cfg_if! {
    if #[cfg(feature = "rayon")] {
        use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};
    }
}

/// 固定 4×4 的特征网格. 静态视图, 不响应任何输入.
#[derive(Clone, Debug)]
pub struct FeatureGrid {
    title: String,
    tiles: Vec<Array2<f32>>,
    cmap: Colormap,
    size: (u32, u32),
    font_scale: f32,
}

impl FeatureGrid {
    /// 取 `rows` 的前 `count` 行, 各自按列优先顺序还原成 `shape` 大小的图像.
    ///
    /// 以下情况返回 `Err`:
    ///
    /// 1. `count` 超过网格容量 16;
    /// 2. `rows` 不足 `count` 行;
    /// 3. `rows` 的列数不等于 `shape.0 * shape.1`.
    pub fn new(
        rows: ArrayView2<f32>,
        count: usize,
        shape: Idx2d,
        title: impl Into<String>,
        config: &ViewConfig,
    ) -> ViewResult<Self> {
        if count > CAPACITY {
            return Err(ViewError::TooManyFeatures {
                count,
                capacity: CAPACITY,
            });
        }
        let (n_rows, n_cols) = rows.dim();
        if count > n_rows || n_cols != shape.0 * shape.1 {
            return Err(ViewError::ShapeMismatch {
                expected: vec![count, shape.0 * shape.1],
                found: vec![n_rows, n_cols],
            });
        }
        let tiles = rows
            .axis_iter(Axis(0))
            .take(count)
            .map(|r| reshape_column_major(r, shape))
            .collect::<ViewResult<Vec<_>>>()?;

        let title = title.into();
        info!("feature grid `{title}`: {count} tiles of {shape:?}");
        Ok(Self {
            title,
            tiles,
            cmap: config.grid_cmap,
            size: config.grid_size,
            font_scale: config.font_scale,
        })
    }

    /// 总标题.
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// 已还原的特征图像.
    #[inline]
    pub fn tiles(&self) -> &[Array2<f32>] {
        &self.tiles
    }

    /// 第 `i` 个格子的标题, 从 1 开始编号.
    #[inline]
    pub fn tile_title(i: usize) -> String {
        format!("Feature {}", i + 1)
    }

    /// 栅格化一个格子. 每个格子各自按最小值/最大值着色.
    fn rasterize_tile(&self, tile: &Array2<f32>, cell: &Rect) -> RgbImage {
        let scale = ColorScale::autoscale(tile.view()).unwrap_or_default();
        rasterize(
            tile.view(),
            scale,
            self.cmap,
            Origin::Upper,
            (cell.width, cell.height),
        )
    }

    /// 借助 `rayon`, 并行栅格化所有格子.
    #[cfg(feature = "rayon")]
    fn rasterize_tiles(&self, cells: &[Rect]) -> Vec<RgbImage> {
        self.tiles
            .par_iter()
            .zip(cells.par_iter())
            .map(|(tile, cell)| self.rasterize_tile(tile, cell))
            .collect()
    }

    /// 依次栅格化所有格子.
    #[cfg(not(feature = "rayon"))]
    fn rasterize_tiles(&self, cells: &[Rect]) -> Vec<RgbImage> {
        self.tiles
            .iter()
            .zip(cells.iter())
            .map(|(tile, cell)| self.rasterize_tile(tile, cell))
            .collect()
    }
}

impl Figure for FeatureGrid {
    fn render(&self) -> Frame {
        let mut frame = Frame::new(self.size);
        let cells = SubplotParams::feature_grid().cells((ROWS, COLS), self.size);
        let images = self.rasterize_tiles(&cells);

        // 坐标轴隐藏: 不画边框和刻度.
        for (i, cell, img) in izip!(0.., cells.iter(), images.iter()) {
            frame.blit(*cell, img);
            frame.title_above(*cell, Self::tile_title(i), self.font_scale * 0.8);
        }

        let (ax, ay) = SUPTITLE_ANCHOR;
        let (w, h) = self.size;
        let at = (
            (ax * w as f32).round() as u32,
            ((1.0 - ay) * h as f32).round() as u32,
        );
        frame.caption(
            self.title.as_str(),
            at,
            Anchor::Center,
            self.font_scale * SUPTITLE_SCALE,
        );
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::FeatureGrid;
    use crate::config::ViewConfig;
    use crate::error::ViewError;
    use crate::view::Figure;
    use ndarray::Array2;

    fn features(n: usize, len: usize) -> Array2<f32> {
        Array2::from_shape_fn((n, len), |(i, j)| (i * len + j) as f32)
    }

    #[test]
    fn test_tiles_are_column_major() {
        let x = features(5, 6);
        let g = FeatureGrid::new(x.view(), 3, (2, 3), "PCA", &ViewConfig::default()).unwrap();
        assert_eq!(g.tiles().len(), 3);
        let t = &g.tiles()[1];
        assert_eq!(t.dim(), (2, 3));
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(t[(i, j)], x[(1, i + j * 2)]);
            }
        }
    }

    #[test]
    fn test_capacity_and_shape() {
        let x = features(20, 4);
        let cfg = ViewConfig::default();
        assert!(matches!(
            FeatureGrid::new(x.view(), 17, (2, 2), "PCA", &cfg),
            Err(ViewError::TooManyFeatures {
                count: 17,
                capacity: 16
            })
        ));
        assert!(FeatureGrid::new(x.view(), 16, (2, 2), "PCA", &cfg).is_ok());
        assert!(FeatureGrid::new(x.view(), 4, (3, 2), "PCA", &cfg).is_err());
        let few = features(2, 4);
        assert!(FeatureGrid::new(few.view(), 3, (2, 2), "PCA", &cfg).is_err());
    }

    #[test]
    fn test_render_titles() {
        let x = features(2, 4);
        let cfg = ViewConfig::default().with_grid_size((400, 400));
        let g = FeatureGrid::new(x.view(), 2, (2, 2), "PCA Features", &cfg).unwrap();
        let frame = g.render();
        let texts: Vec<_> = frame.captions().iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["Feature 1", "Feature 2", "PCA Features"]);
        assert_eq!(frame.captions()[2].at, (220, 20));
    }
}
