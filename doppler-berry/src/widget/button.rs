//! 按钮.

use std::fmt;

use crate::consts::rgb::{BUTTON_FACE, BUTTON_HOVER};
use crate::error::ViewResult;
use crate::render::{Anchor, Frame, Rect};

/// 按钮点击的监听者.
pub type ClickListener<'a> = Box<dyn FnMut() -> ViewResult<()> + 'a>;

/// 可点击的矩形按钮.
pub struct Button<'a> {
    label: String,
    rect: Rect,
    hovered: bool,
    listeners: Vec<ClickListener<'a>>,
}

impl<'a> Button<'a> {
    /// 在 `rect` 处构建按钮.
    pub fn new(label: impl Into<String>, rect: Rect) -> Self {
        Self {
            label: label.into(),
            rect,
            hovered: false,
            listeners: Vec::new(),
        }
    }

    /// 按钮文本.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// 按钮在画布上的位置.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// 注册监听者.
    pub fn on_clicked<F>(&mut self, f: F)
    where
        F: FnMut() -> ViewResult<()> + 'a,
    {
        self.listeners.push(Box::new(f));
    }

    /// 触发一次点击.
    pub fn click(&mut self) -> ViewResult<()> {
        for f in self.listeners.iter_mut() {
            f()?;
        }
        Ok(())
    }

    /// 如果 `(x, y)` 落在按钮内则触发点击, 并返回 `true`.
    pub fn click_at(&mut self, x: i32, y: i32) -> ViewResult<bool> {
        if self.rect.contains(x, y) {
            self.click()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// 更新悬停状态. 状态有变化时返回 `true`.
    pub fn hover(&mut self, x: i32, y: i32) -> bool {
        let now = self.rect.contains(x, y);
        std::mem::replace(&mut self.hovered, now) != now
    }

    /// 将按钮绘制到画布上.
    pub fn draw(&self, frame: &mut Frame, font_scale: f32) {
        let face = if self.hovered {
            BUTTON_HOVER
        } else {
            BUTTON_FACE
        };
        frame.fill(self.rect, face);
        frame.stroke(self.rect);
        let (cx, _) = self.rect.center();
        let baseline = self.rect.y + self.rect.height * 3 / 4;
        frame.caption(self.label.as_str(), (cx, baseline), Anchor::Center, font_scale);
    }
}

impl fmt::Debug for Button<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label)
            .field("rect", &self.rect)
            .field("hovered", &self.hovered)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Button;
    use crate::render::Rect;
    use std::cell::Cell;

    #[test]
    fn test_click_at() {
        let clicks = Cell::new(0);
        let mut b = Button::new("Reset", Rect::new(10, 10, 20, 10));
        b.on_clicked(|| {
            clicks.set(clicks.get() + 1);
            Ok(())
        });
        assert!(!b.click_at(0, 0).unwrap());
        assert!(b.click_at(15, 15).unwrap());
        assert!(b.click_at(29, 19).unwrap());
        drop(b);
        assert_eq!(clicks.get(), 2);
    }

    #[test]
    fn test_hover_changes() {
        let mut b = Button::new("Reset", Rect::new(0, 0, 5, 5));
        assert!(b.hover(1, 1));
        assert!(!b.hover(2, 2));
        assert!(b.hover(9, 9));
    }
}
