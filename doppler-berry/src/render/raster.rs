//! 2D 切片到 RGB 位图的栅格化.

use image::{Rgb, RgbImage};
use ndarray::ArrayView2;

use crate::consts::rgb::BAD;
use crate::data::ColorScale;
use crate::render::Colormap;

/// 图像行的绘制方向.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Origin {
    /// 第 0 行在最上方.
    #[default]
    Upper,

    /// 第 0 行在最下方.
    Lower,
}

/// 将 `data` 拉伸 (不保持宽高比) 并以最近邻方式栅格化为 `width * height` 的位图.
///
/// 每个像素经 `scale` 归一化后查 `cmap` 取色; 非有限值绘制为 `BAD` 颜色.
/// `data` 为空或目标尺寸为 0 时返回对应尺寸的空白位图.
pub fn rasterize(
    data: ArrayView2<f32>,
    scale: ColorScale,
    cmap: Colormap,
    origin: Origin,
    (width, height): (u32, u32),
) -> RgbImage {
    let (rows, cols) = data.dim();
    if rows == 0 || cols == 0 {
        return RgbImage::from_pixel(width, height, Rgb(BAD));
    }
    RgbImage::from_fn(width, height, |px, py| {
        let r = (py as usize * rows) / height as usize;
        let c = (px as usize * cols) / width as usize;
        let r = match origin {
            Origin::Upper => r,
            Origin::Lower => rows - 1 - r,
        };
        match scale.eval_u8(data[(r, c)]) {
            Some(i) => cmap.at(i),
            None => Rgb(BAD),
        }
    })
}

/// 绘制竖直颜色条, 上方为最大值颜色.
pub fn colorbar(cmap: Colormap, (width, height): (u32, u32)) -> RgbImage {
    let denom = height.saturating_sub(1).max(1) as f32;
    RgbImage::from_fn(width, height, |_, py| cmap.eval(1.0 - py as f32 / denom))
}
