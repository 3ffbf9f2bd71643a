//! 载入时的一次性归一化.

use ndarray::{Array, ArrayView, Dimension};
use num::Float;

use crate::error::{ViewError, ViewResult};

/// 将数组按其最大值缩放到 `[0, 1]`, 即 `x / max(x)`.
///
/// 最大值必须是有限正数, 否则返回 `ViewError::InvalidMaximum`.
/// NaN 元素不参与求最大值, 并原样保留.
///
/// # 注意
///
/// 只有非负数组的结果才保证落在 `[0, 1]` 内; 负值缩放后仍是负值.
pub fn normalize_by_max<T, D>(x: ArrayView<T, D>) -> ViewResult<Array<T, D>>
where
    T: Float,
    D: Dimension,
{
    let max = x
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(T::neg_infinity(), T::max);
    if !(max.is_finite() && max > T::zero()) {
        return Err(ViewError::InvalidMaximum(max.to_f64().unwrap_or(f64::NAN)));
    }
    Ok(x.mapv(|v| v / max))
}
