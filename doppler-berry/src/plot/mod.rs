//! 窗口展示入口, 主要用于交互式查看雷达数据.
//!
//! 每个 `show_*` 函数都独立打开一个窗口, 阻塞直到窗口被关闭 (或按下 Esc / `q`),
//! 然后销毁窗口.
//!
//! # 注意
//!
//! 需要 `plot` feature.

mod window;

pub use window::Window;

use ndarray::{ArrayView2, ArrayView3};

use crate::config::ViewConfig;
use crate::error::ViewResult;
use crate::render::Colormap;
use crate::view::{FeatureGrid, Figure, SliceViewer, StitchView};

/// 在新窗口中展示 `figure`, 直到窗口关闭.
pub fn show<F: Figure + ?Sized>(figure: &mut F, config: &ViewConfig) -> ViewResult<()> {
    let window = Window::open(&config.window_name, config.poll_ms)?;
    window.run(figure)
}

/// 交互式展示 `(F, R, T)` 微多普勒数组. 见 [`SliceViewer::microdoppler`].
pub fn show_microdoppler(data: ArrayView3<f32>, config: &ViewConfig) -> ViewResult<()> {
    show(&mut SliceViewer::microdoppler(data, config)?, config)
}

/// 交互式展示 `(T, H, W)` 距离-方位数组. 见 [`SliceViewer::range_azimuth`].
pub fn show_range_azimuth(data: ArrayView3<f32>, config: &ViewConfig) -> ViewResult<()> {
    show(&mut SliceViewer::range_azimuth(data, config)?, config)
}

/// 交互式展示 `(N, H, W)` 分类样本. 见 [`SliceViewer::classification`].
pub fn show_classification<S: AsRef<str>>(
    data: ArrayView3<f32>,
    labels: Option<&[S]>,
    config: &ViewConfig,
) -> ViewResult<()> {
    show(&mut SliceViewer::classification(data, labels, config)?, config)
}

/// 以 4×4 网格展示 `rows` 的前 `feature_count` 行, 每行按列优先还原成
/// `(row_dim, col_dim)` 图像. 见 [`FeatureGrid::new`].
pub fn show_grid(
    rows: ArrayView2<f32>,
    feature_count: usize,
    row_dim: usize,
    col_dim: usize,
    title: &str,
    config: &ViewConfig,
) -> ViewResult<()> {
    let mut grid = FeatureGrid::new(rows, feature_count, (row_dim, col_dim), title, config)?;
    show(&mut grid, config)
}

/// 展示带时间/多普勒坐标的拼接图. 见 [`StitchView::new`].
pub fn show_stitched(
    image: ArrayView2<f32>,
    chirp_period: f64,
    doppler_resolution: f64,
    title: &str,
    cmap: Colormap,
    config: &ViewConfig,
) -> ViewResult<()> {
    let mut view = StitchView::new(image, chirp_period, doppler_resolution, title, cmap, config)?;
    show(&mut view, config)
}
