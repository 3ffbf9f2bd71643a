//! 展平特征向量到 2D 图像的还原.

use ndarray::{Array2, ArrayView1, ShapeBuilder};

use crate::error::{ViewError, ViewResult};
use crate::Idx2d;

/// 将长度为 `n_row * n_col` 的展平向量按 **列优先** (Fortran) 顺序还原为 `(n_row, n_col)` 矩阵.
///
/// 还原后 `(i, j)` 处的元素等于 `flat[i + j * n_row]`. 长度不符时返回 `ViewError::ShapeMismatch`.
pub fn reshape_column_major(
    flat: ArrayView1<f32>,
    (n_row, n_col): Idx2d,
) -> ViewResult<Array2<f32>> {
    if flat.len() != n_row * n_col {
        return Err(ViewError::ShapeMismatch {
            expected: vec![n_row * n_col],
            found: vec![flat.len()],
        });
    }
    let raw = flat.to_vec();
    // 长度已经检查过, 该操作不会生成 `Err`.
    Array2::from_shape_vec((n_row, n_col).f(), raw).map_err(|_| ViewError::ShapeMismatch {
        expected: vec![n_row, n_col],
        found: vec![flat.len()],
    })
}
