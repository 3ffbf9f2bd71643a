//! 视图: 交互切片视图, 特征网格视图和拼接视图.
//!
//! 视图本身不依赖窗口系统. 窗口后端 (`plot` feature) 把用户输入翻译成
//! [`UiEvent`] 交给 [`Figure::handle`], 再把 [`Figure::render`] 的结果画到屏幕上.

mod grid;
mod panel;
mod slice_viewer;
mod stitch;

pub use grid::FeatureGrid;
pub use panel::{ImagePanel, ScaleRule};
pub use slice_viewer::SliceViewer;
pub use stitch::{Extent, StitchView};

use crate::error::ViewResult;
use crate::render::Frame;

/// 窗口后端派发给视图的输入事件. 坐标为画布像素坐标.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum UiEvent {
    /// 左键按下.
    PointerDown {
        /// 横坐标.
        x: i32,

        /// 纵坐标.
        y: i32,
    },

    /// 鼠标移动. `pressed` 表示左键是否仍按着.
    PointerMove {
        /// 横坐标.
        x: i32,

        /// 纵坐标.
        y: i32,

        /// 左键是否按下.
        pressed: bool,
    },

    /// 左键抬起.
    PointerUp,

    /// 键盘输入.
    Key(char),
}

/// 表明一个可以在窗口中展示的画布.
pub trait Figure {
    /// 绘制当前状态.
    fn render(&self) -> Frame;

    /// 处理一个输入事件. 需要重绘时返回 `true`.
    ///
    /// 静态视图忽略所有事件.
    fn handle(&mut self, event: UiEvent) -> ViewResult<bool> {
        let _ = event;
        Ok(false)
    }
}
