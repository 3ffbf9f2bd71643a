//! 有界整数滑块.

use std::fmt;

use log::debug;

use crate::consts::rgb::{SLIDER_FILL, SLIDER_TRACK};
use crate::error::ViewResult;
use crate::render::{Anchor, Frame, Rect};

/// 滑块值变化的监听者. 参数为变化后的值.
pub type ChangeListener<'a> = Box<dyn FnMut(usize) -> ViewResult<()> + 'a>;

/// 有界整数滑块, 步长为 1.
///
/// 滑块值总是落在 `[lower, upper]` 内. 每次设值 (即使值没有变化)
/// 都会按注册顺序通知所有监听者, 因此重置总能触发一次重绘.
pub struct Slider<'a> {
    label: String,
    lower: usize,
    upper: usize,
    init: usize,
    value: usize,
    rect: Rect,
    listeners: Vec<ChangeListener<'a>>,
}

impl<'a> Slider<'a> {
    /// 构建滑块. `init` 会被截断到 `[lower, upper]` 内, 作为初始值和重置值.
    ///
    /// 如果 `lower > upper`, 则程序 panic.
    pub fn new(label: impl Into<String>, lower: usize, upper: usize, init: usize) -> Self {
        assert!(lower <= upper, "滑块下界 {lower} 大于上界 {upper}");
        let init = init.clamp(lower, upper);
        Self {
            label: label.into(),
            lower,
            upper,
            init,
            value: init,
            rect: Rect::default(),
            listeners: Vec::new(),
        }
    }

    /// 设置滑块在画布上的位置.
    #[inline]
    pub fn place(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    /// 滑块名.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// 当前值.
    #[inline]
    pub fn value(&self) -> usize {
        self.value
    }

    /// 初始值 (也是重置值).
    #[inline]
    pub fn init(&self) -> usize {
        self.init
    }

    /// 闭区间 `(lower, upper)`.
    #[inline]
    pub fn bounds(&self) -> (usize, usize) {
        (self.lower, self.upper)
    }

    /// 滑块在画布上的位置.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// 注册监听者.
    pub fn on_changed<F>(&mut self, f: F)
    where
        F: FnMut(usize) -> ViewResult<()> + 'a,
    {
        self.listeners.push(Box::new(f));
    }

    /// 设值并通知监听者. 返回截断后的实际值.
    ///
    /// 任一监听者返回 `Err` 时立即停止并返回该错误; 此时滑块值已经更新.
    pub fn set_value(&mut self, v: usize) -> ViewResult<usize> {
        self.value = v.clamp(self.lower, self.upper);
        debug!("slider `{}` -> {}", self.label, self.value);
        for f in self.listeners.iter_mut() {
            f(self.value)?;
        }
        Ok(self.value)
    }

    /// 恢复到初始值, 并通知监听者.
    #[inline]
    pub fn reset(&mut self) -> ViewResult<usize> {
        self.set_value(self.init)
    }

    /// 求画布横坐标 `x` 对应的滑块值. 轨道两端之外的坐标被截断到端点.
    pub fn value_at(&self, x: i32) -> usize {
        let span = self.upper - self.lower;
        if span == 0 || self.rect.width <= 1 {
            return self.lower;
        }
        let offset = (x as i64 - self.rect.x as i64).clamp(0, self.rect.width as i64 - 1);
        let t = offset as f64 / (self.rect.width - 1) as f64;
        self.lower + (t * span as f64).round() as usize
    }

    /// 当前值在轨道上的相对位置 (0.0 <= value <= 1.0).
    #[inline]
    pub fn fraction(&self) -> f32 {
        match self.upper - self.lower {
            0 => 0.0,
            span => (self.value - self.lower) as f32 / span as f32,
        }
    }

    /// 将滑块绘制到画布上: 轨道, 已填充部分, 左侧名称, 右侧当前值.
    pub fn draw(&self, frame: &mut Frame, font_scale: f32) {
        let r = self.rect;
        frame.fill(r, SLIDER_TRACK);
        let filled = (r.width as f32 * self.fraction()).round() as u32;
        frame.fill(Rect::new(r.x, r.y, filled, r.height), SLIDER_FILL);
        frame.stroke(r);

        let baseline = r.y + r.height * 3 / 4;
        frame.caption(
            self.label.as_str(),
            (r.x.saturating_sub(6), baseline),
            Anchor::Right,
            font_scale,
        );
        frame.caption(
            self.value.to_string(),
            (r.right() + 6, baseline),
            Anchor::Left,
            font_scale,
        );
    }
}

impl fmt::Debug for Slider<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slider")
            .field("label", &self.label)
            .field("lower", &self.lower)
            .field("upper", &self.upper)
            .field("init", &self.init)
            .field("value", &self.value)
            .field("rect", &self.rect)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Slider;
    use crate::error::ViewError;
    use crate::render::Rect;
    use std::cell::RefCell;

    #[test]
    fn test_init_is_clamped() {
        let s = Slider::new("Time", 1, 9, 0);
        assert_eq!(s.value(), 1);
        assert_eq!(s.init(), 1);
        assert_eq!(s.bounds(), (1, 9));
    }

    #[test]
    fn test_set_value_clamps_and_notifies() {
        let seen = RefCell::new(Vec::new());
        let mut s = Slider::new("Range", 0, 5, 0);
        s.on_changed(|v| {
            seen.borrow_mut().push(v);
            Ok(())
        });
        assert_eq!(s.set_value(3).unwrap(), 3);
        assert_eq!(s.set_value(42).unwrap(), 5);
        // 值不变也通知.
        assert_eq!(s.set_value(5).unwrap(), 5);
        assert_eq!(s.reset().unwrap(), 0);
        drop(s);
        assert_eq!(seen.into_inner(), vec![3, 5, 5, 0]);
    }

    #[test]
    fn test_reset_from_any_position() {
        for start in 0..8 {
            let mut s = Slider::new("Sample", 0, 7, 0);
            s.set_value(start).unwrap();
            assert_eq!(s.reset().unwrap(), 0);
            assert_eq!(s.value(), 0);
        }
    }

    #[test]
    fn test_listener_error_propagates() {
        let mut s = Slider::new("Sample", 0, 3, 0);
        s.on_changed(|v| match v {
            3 => Err(ViewError::LabelOutOfRange { index: 3, len: 3 }),
            _ => Ok(()),
        });
        assert!(s.set_value(2).is_ok());
        assert!(s.set_value(3).is_err());
        assert_eq!(s.value(), 3);
    }

    #[test]
    fn test_value_at_pointer() {
        let s = Slider::new("Time", 0, 10, 0).place(Rect::new(100, 0, 101, 10));
        assert_eq!(s.value_at(100), 0);
        assert_eq!(s.value_at(50), 0);
        assert_eq!(s.value_at(150), 5);
        assert_eq!(s.value_at(200), 10);
        assert_eq!(s.value_at(900), 10);
    }
}
