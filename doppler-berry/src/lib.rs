#![warn(missing_docs)] // <= 合适时移除它.
// #![warn(clippy::missing_docs_in_private_items)]  // <= too strict.

//! 核心库. 提供雷达微多普勒 / 距离-方位数据的交互式切片查看, 以及 PCA 特征网格展示.
//!
//! 该 crate 只做可视化, 不做任何信号处理: 所有数组都由调用方计算好后传入.
//!
//! # 注意
//!
//! 1. 视图和渲染都不依赖窗口系统, 可以在无显示环境下构建、驱动和测试.
//!   只有 `plot` feature 会引入 OpenCV 窗口后端.
//! 2. 输入数组在交互期间被只读借用, 视图不会修改调用方的数据.
//!
//! # 开发计划
//!
//! ### 切片数组与标签序列 ✅
//!
//! 按固定轴排列取 3D 数组的 2D 切片; 标签序列越界时返回错误而不是 panic.
//!
//! 实现位于 `doppler-berry/src/data`.
//!
//! ### 颜色范围与颜色表 ✅
//!
//! 提供独立的 `ColorScale` 对象, 把浮点数映射到 `[0, 1]`;
//! 颜色表支持 viridis, jet 和灰度.
//!
//! 实现位于 `doppler-berry/src/data/scale.rs` 和 `doppler-berry/src/render/colormap.rs`.
//!
//! ### 滑块与按钮 ✅
//!
//! 滑块是带监听者列表的有界整数, 每次设值都通知监听者.
//!
//! 实现位于 `doppler-berry/src/widget`.
//!
//! ### 交互切片视图 ✅
//!
//! 1. 微多普勒双面板视图, 每帧自动调整颜色范围. ✅
//! 2. 距离-方位视图, 载入时归一化, 固定颜色范围. ✅
//! 3. 分类样本视图, 标题随标签变化. ✅
//!
//! 实现位于 `doppler-berry/src/view/slice_viewer.rs`.
//!
//! ### 特征网格与拼接视图 ✅
//!
//! 4×4 网格, 每个特征按列优先还原成图像. 拼接视图带物理坐标范围.
//!
//! 实现位于 `doppler-berry/src/view/grid.rs` 和 `doppler-berry/src/view/stitch.rs`.
//!
//! ### OpenCV 窗口后端 ✅
//!
//! 实现位于 `doppler-berry/src/plot`.
//!
//! ### 完善代码文档 ✅
//!
//! 给每个 public API 提供文档, 并视情况给 private
//! API 提供文档.

/// 二维索引, 同时也可用作二维数组形状.
pub type Idx2d = (usize, usize);

/// 三维索引, 同时也可用作三维数组形状.
pub type Idx3d = (usize, usize, usize);

pub mod config;
pub mod consts;
pub mod data;
pub mod error;
pub mod render;
pub mod view;
pub mod widget;

cfg_if::cfg_if! {
    if #[cfg(feature = "plot")] {
        pub mod plot;
    }
}

pub use config::ViewConfig;
pub use data::{ColorScale, LabelSeq, Permutation, SliceVolume};
pub use error::{ViewError, ViewResult};
pub use render::{Colormap, Frame};
pub use view::{FeatureGrid, Figure, SliceViewer, StitchView, UiEvent};

pub mod prelude;
