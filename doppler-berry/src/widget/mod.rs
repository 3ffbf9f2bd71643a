//! 交互控件.
//!
//! 控件只保存自身状态并在状态变化时通知监听者; 事件由窗口后端派发,
//! 全部在同一线程上处理.

mod button;
mod slider;

pub use button::{Button, ClickListener};
pub use slider::{ChangeListener, Slider};
