//! 运行时错误.

use thiserror::Error;

/// 可视化过程中的运行时错误.
///
/// 这些错误都不会被内部捕获或重试, 而是直接返回给调用方.
#[derive(Debug, Error)]
pub enum ViewError {
    /// 被滑块驱动的数组轴长度为 0, 没有可以展示的切片.
    #[error("第 {axis} 轴长度为 0, 没有可展示的切片")]
    EmptyAxis {
        /// 轴编号.
        axis: usize,
    },

    /// 标签序列比切片轴短, 访问越界.
    #[error("标签索引越界: 索引 {index}, 但标签序列长度为 {len}")]
    LabelOutOfRange {
        /// 访问的索引.
        index: usize,

        /// 标签序列实际长度.
        len: usize,
    },

    /// 数组形状与期望不符.
    #[error("形状不匹配: 期望 {expected:?}, 实际 {found:?}")]
    ShapeMismatch {
        /// 期望形状.
        expected: Vec<usize>,

        /// 实际形状.
        found: Vec<usize>,
    },

    /// 网格视图最多容纳 `capacity` 个特征.
    #[error("特征数 {count} 超出网格容量 {capacity}")]
    TooManyFeatures {
        /// 请求展示的特征数.
        count: usize,

        /// 网格容量.
        capacity: usize,
    },

    /// 归一化时数组最大值不是有限正数.
    #[error("无法按最大值归一化: 最大值为 {0}")]
    InvalidMaximum(f64),

    /// 窗口后端错误.
    #[cfg(feature = "plot")]
    #[error("窗口后端错误: {0}")]
    Backend(#[from] opencv::Error),
}

/// 可视化运行时结果.
pub type ViewResult<T> = Result<T, ViewError>;
