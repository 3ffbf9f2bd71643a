//! 被可视化的数据: 3D 切片数组, 标签序列, 颜色范围以及少量预处理.

pub mod labels;
pub mod normalize;
pub mod reshape;
pub mod scale;
pub mod volume;

pub use labels::LabelSeq;
pub use normalize::normalize_by_max;
pub use reshape::reshape_column_major;
pub use scale::ColorScale;
pub use volume::{Permutation, SliceVolume};
