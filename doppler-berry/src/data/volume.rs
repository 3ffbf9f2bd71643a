//! 3D 数组的切片视图.

use ndarray::{ArrayView2, ArrayView3, Axis};

use crate::error::{ViewError, ViewResult};
use crate::Idx3d;

/// 选取切片前对 3D 数组施加的轴置换.
///
/// 置换后第 0 轴即被滑块驱动的轴, 剩余两轴组成被展示的 2D 切片 `(行, 列)`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Permutation {
    /// `(0, 1, 2)`. 直接按第 0 轴取切片.
    Identity,

    /// `(1, 0, 2)`. 按第 1 轴取切片, 得到 `A[:, i, :]`.
    SwapLeading,

    /// `(2, 1, 0)`. 按第 2 轴取切片, 得到 `A[:, :, i]` 的转置.
    Reverse,
}

impl Permutation {
    /// 置换对应的轴顺序.
    #[inline]
    pub const fn axes(&self) -> [usize; 3] {
        match self {
            Self::Identity => [0, 1, 2],
            Self::SwapLeading => [1, 0, 2],
            Self::Reverse => [2, 1, 0],
        }
    }

    /// 被滑块驱动的原数组轴编号.
    #[inline]
    pub const fn driven_axis(&self) -> usize {
        self.axes()[0]
    }
}

/// 借用的、只读的 3D 切片数组.
///
/// 数组由调用方分配并持有, 该结构仅在可视化会话期间借用它.
#[derive(Copy, Clone, Debug)]
pub struct SliceVolume<'a> {
    data: ArrayView3<'a, f32>,
}

impl<'a> SliceVolume<'a> {
    /// 直接初始化.
    #[inline]
    pub fn new(data: ArrayView3<'a, f32>) -> Self {
        Self { data }
    }

    /// 数组形状.
    #[inline]
    pub fn shape(&self) -> Idx3d {
        self.data.dim()
    }

    /// 第 `axis` 轴长度. `axis >= 3` 时 panic.
    #[inline]
    pub fn len_of(&self, axis: usize) -> usize {
        self.data.len_of(Axis(axis))
    }

    /// 按 `perm` 置换后可取的切片个数.
    #[inline]
    pub fn slice_count(&self, perm: Permutation) -> usize {
        self.len_of(perm.driven_axis())
    }

    /// 检查 `perm` 驱动的轴非空. 否则返回 `ViewError::EmptyAxis`.
    pub fn check_driven(&self, perm: Permutation) -> ViewResult<usize> {
        match self.slice_count(perm) {
            0 => Err(ViewError::EmptyAxis {
                axis: perm.driven_axis(),
            }),
            n => Ok(n),
        }
    }

    /// 先按 `perm` 置换轴, 再取第 `index` 个切片.
    ///
    /// 当 `index` 越界时 panic.
    #[inline]
    pub fn slice_at(&self, perm: Permutation, index: usize) -> ArrayView2<'a, f32> {
        self.data
            .permuted_axes(perm.axes())
            .index_axis_move(Axis(0), index)
    }

    /// 同 `slice_at`, 但越界时返回 `None`.
    #[inline]
    pub fn get_slice(&self, perm: Permutation, index: usize) -> Option<ArrayView2<'a, f32>> {
        (index < self.slice_count(perm)).then(|| self.slice_at(perm, index))
    }

    /// 获取能按升序迭代 `perm` 下所有切片的迭代器.
    #[inline]
    pub fn slice_iter(
        &self,
        perm: Permutation,
    ) -> impl ExactSizeIterator<Item = ArrayView2<'a, f32>> {
        let this = *self;
        (0..self.slice_count(perm)).map(move |i| this.slice_at(perm, i))
    }

    /// 获得数据的一份不可变 shallow copy.
    #[inline]
    pub fn data(&self) -> ArrayView3<'a, f32> {
        self.data
    }
}

impl<'a> From<ArrayView3<'a, f32>> for SliceVolume<'a> {
    fn from(data: ArrayView3<'a, f32>) -> Self {
        Self::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::{Permutation, SliceVolume};
    use ndarray::{s, Array3};

    /// `(F, R, T) = (3, 4, 5)`, 每个元素编码自身索引.
    fn coded() -> Array3<f32> {
        Array3::from_shape_fn((3, 4, 5), |(f, r, t)| (f * 100 + r * 10 + t) as f32)
    }

    #[test]
    fn test_range_slice_is_middle_axis() {
        let a = coded();
        let v = SliceVolume::new(a.view());
        assert_eq!(v.slice_count(Permutation::SwapLeading), 4);
        for r in 0..4 {
            assert_eq!(v.slice_at(Permutation::SwapLeading, r), a.slice(s![.., r, ..]));
        }
    }

    #[test]
    fn test_time_slice_is_last_axis_transposed() {
        let a = coded();
        let v = SliceVolume::new(a.view());
        assert_eq!(v.slice_count(Permutation::Reverse), 5);
        for t in 0..5 {
            let sli = v.slice_at(Permutation::Reverse, t);
            assert_eq!(sli.dim(), (4, 3));
            assert_eq!(sli, a.slice(s![.., .., t]).t());
        }
    }

    #[test]
    fn test_identity_slice() {
        let a = coded();
        let v = SliceVolume::new(a.view());
        assert_eq!(v.slice_at(Permutation::Identity, 2), a.slice(s![2, .., ..]));
        assert!(v.get_slice(Permutation::Identity, 3).is_none());
        assert_eq!(v.slice_iter(Permutation::Identity).len(), 3);
    }

    #[test]
    fn test_empty_axis() {
        let a = Array3::<f32>::zeros((2, 0, 3));
        let v = SliceVolume::new(a.view());
        assert!(v.check_driven(Permutation::Identity).is_ok());
        assert!(v.check_driven(Permutation::SwapLeading).is_err());
    }
}
