//! 颜色表.

use image::Rgb;
use once_cell::sync::Lazy;

/// 颜色表查找表长度.
const LUT_LEN: usize = 256;

type Lut = [Rgb<u8>; LUT_LEN];

/// 内置颜色表.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Colormap {
    /// 感知均匀的 viridis. 切片面板的默认颜色表.
    #[default]
    Viridis,

    /// 经典 jet (蓝 -> 青 -> 绿 -> 黄 -> 红). 特征网格和拼接视图使用.
    Jet,

    /// 单通道灰度.
    Gray,
}

/// viridis 锚点 `(t, r, g, b)`, 取自 matplotlib 原始颜色表.
const VIRIDIS_ANCHORS: [(f32, f32, f32, f32); 9] = [
    (0.000, 0.267, 0.005, 0.329),
    (0.125, 0.283, 0.141, 0.458),
    (0.250, 0.254, 0.265, 0.530),
    (0.375, 0.207, 0.372, 0.553),
    (0.500, 0.164, 0.471, 0.558),
    (0.625, 0.128, 0.567, 0.551),
    (0.750, 0.135, 0.659, 0.518),
    (0.875, 0.478, 0.821, 0.318),
    (1.000, 0.993, 0.906, 0.144),
];

static VIRIDIS: Lazy<Lut> = Lazy::new(|| build_lut(viridis));
static JET: Lazy<Lut> = Lazy::new(|| build_lut(jet));
static GRAY: Lazy<Lut> = Lazy::new(|| build_lut(|t| (t, t, t)));

impl Colormap {
    /// 颜色表的查找表.
    #[inline]
    fn lut(&self) -> &'static Lut {
        match self {
            Self::Viridis => &VIRIDIS,
            Self::Jet => &JET,
            Self::Gray => &GRAY,
        }
    }

    /// 查表. `index` 一般由 [`crate::ColorScale::eval_u8`] 给出.
    #[inline]
    pub fn at(&self, index: u8) -> Rgb<u8> {
        self.lut()[index as usize]
    }

    /// 求归一化位置 `t` 处的颜色. `t` 会被截断到 `[0, 1]`, NaN 视为 0.
    #[inline]
    pub fn eval(&self, t: f32) -> Rgb<u8> {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        self.at((t * 255.0) as u8)
    }
}

fn build_lut(f: impl Fn(f32) -> (f32, f32, f32)) -> Lut {
    let mut lut = [Rgb([0, 0, 0]); LUT_LEN];
    for (i, slot) in lut.iter_mut().enumerate() {
        let (r, g, b) = f(i as f32 / (LUT_LEN - 1) as f32);
        *slot = Rgb([to_u8(r), to_u8(g), to_u8(b)]);
    }
    lut
}

#[inline]
fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn jet(t: f32) -> (f32, f32, f32) {
    let four_t = 4.0 * t;
    let r = (four_t - 1.5).min(4.5 - four_t).clamp(0.0, 1.0);
    let g = (1.5 - (four_t - 2.0).abs()).clamp(0.0, 1.0);
    let b = (2.5 - four_t).min(four_t + 0.5).clamp(0.0, 1.0);
    (r, g, b)
}

fn viridis(t: f32) -> (f32, f32, f32) {
    let last = VIRIDIS_ANCHORS.len() - 1;
    let i = VIRIDIS_ANCHORS
        .iter()
        .rposition(|&(at, ..)| at <= t)
        .unwrap_or(0)
        .min(last - 1);
    let (t0, r0, g0, b0) = VIRIDIS_ANCHORS[i];
    let (t1, r1, g1, b1) = VIRIDIS_ANCHORS[i + 1];
    let frac = ((t - t0) / (t1 - t0)).clamp(0.0, 1.0);
    (
        r0 + frac * (r1 - r0),
        g0 + frac * (g1 - g0),
        b0 + frac * (b1 - b0),
    )
}
