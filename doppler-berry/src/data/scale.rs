//! 颜色范围.

use itertools::{Itertools, MinMaxResult};
use ndarray::ArrayView2;
use ordered_float::NotNan;

/// 颜色范围, 包含下限 `vmin` 与上限 `vmax`.
///
/// 该范围是只读的. 若要修改范围参数, 你应该创建新的实例.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorScale {
    vmin: f32,
    vmax: f32,
}

impl ColorScale {
    /// 构建颜色范围.
    ///
    /// `vmin` 和 `vmax` 必须是有限值且 `vmin <= vmax`, 否则返回 `None`.
    /// 允许 `vmin == vmax`, 此时所有值都映射到下限颜色.
    pub fn new(vmin: f32, vmax: f32) -> Option<ColorScale> {
        if vmin.is_finite() && vmax.is_finite() && vmin <= vmax {
            Some(Self { vmin, vmax })
        } else {
            None
        }
    }

    /// `[0.0, 1.0]` 固定范围, 用于预先归一化的数据.
    #[inline]
    pub const fn unit() -> ColorScale {
        Self {
            vmin: 0.0,
            vmax: 1.0,
        }
    }

    /// 以切片中所有有限值的最小值和最大值构建范围.
    ///
    /// 如果切片为空或不含有限值, 则返回 `None`.
    pub fn autoscale(data: ArrayView2<f32>) -> Option<ColorScale> {
        let finite = data
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .filter_map(|v| NotNan::new(v).ok());
        match finite.minmax() {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(v) => Self::new(*v, *v),
            MinMaxResult::MinMax(lo, hi) => Self::new(*lo, *hi),
        }
    }

    /// 范围下限.
    #[inline]
    pub fn vmin(&self) -> f32 {
        self.vmin
    }

    /// 范围上限.
    #[inline]
    pub fn vmax(&self) -> f32 {
        self.vmax
    }

    /// 范围宽度.
    #[inline]
    pub fn span(&self) -> f32 {
        self.vmax - self.vmin
    }

    /// 求 `v` 在当前范围下的归一化位置 (0.0 <= value <= 1.0).
    ///
    /// 越界值被截断到端点. 如果 `v` 无意义 (如 inf, NaN), 则返回 `None`.
    pub fn eval(&self, v: f32) -> Option<f32> {
        if !v.is_finite() {
            return None;
        }
        if v <= self.vmin || self.span() == 0.0 {
            Some(0.0)
        } else if v >= self.vmax {
            Some(1.0)
        } else {
            Some((v - self.vmin) / self.span())
        }
    }

    /// 求 `v` 在当前范围下对应的颜色表索引 (0 <= value <= 255).
    ///
    /// 如果 `v` 无意义 (如 inf, NaN), 则返回 `None`.
    pub fn eval_u8(&self, v: f32) -> Option<u8> {
        // 255, not 256.
        self.eval(v).map(|t| (t * 255.0) as u8)
    }
}

impl Default for ColorScale {
    fn default() -> Self {
        Self::unit()
    }
}
