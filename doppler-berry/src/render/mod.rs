//! 离屏渲染: 颜色表, 布局, 栅格化与画布.
//!
//! 该模块不依赖任何窗口系统, 可在无显示环境下使用和测试.

mod colormap;
mod frame;
mod layout;
mod raster;

pub use colormap::Colormap;
pub use frame::{Anchor, Caption, Frame};
pub use layout::{Rect, SubplotParams};
pub use raster::{colorbar, rasterize, Origin};
