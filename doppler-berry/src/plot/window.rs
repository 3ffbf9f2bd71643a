//! OpenCV `highgui` 窗口.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use log::{debug, info, warn};
use opencv::core::{Point, Scalar, Size, Vec3b, VecN, CV_8UC3};
use opencv::highgui;
use opencv::imgproc;
use opencv::prelude::*;

use crate::error::ViewResult;
use crate::render::{Anchor, Caption, Frame};
use crate::view::{Figure, UiEvent};

/// 窗口回调与主循环之间共享的事件队列.
type EventQueue = Arc<Mutex<VecDeque<UiEvent>>>;

/// `wait_key` 超时时的返回值.
const NO_KEY: i32 = -1;

/// Esc.
const KEY_ESC: i32 = 27;

/// 字号为 1.0 时对应的 Hershey 字体缩放.
const FONT_BASE: f64 = 0.45;

/// 一个已打开的窗口. 窗口在 drop 时被销毁.
///
/// OpenCV 的鼠标回调必须是 `Send + Sync + 'static` 的, 因此回调只把事件压入队列,
/// 所有事件都在 [`Window::run`] 所在线程上派发给视图.
pub struct Window {
    name: String,
    poll_ms: i32,
    events: EventQueue,
}

impl Window {
    /// 打开名为 `name` 的窗口并注册鼠标回调.
    pub fn open(name: &str, poll_ms: u32) -> ViewResult<Self> {
        highgui::named_window(name, highgui::WINDOW_AUTOSIZE)?;
        let events = EventQueue::default();
        let queue = Arc::clone(&events);
        highgui::set_mouse_callback(
            name,
            Some(Box::new(move |event: i32, x: i32, y: i32, flags: i32| {
                let pressed = flags & highgui::EVENT_FLAG_LBUTTON != 0;
                let e = match event {
                    highgui::EVENT_LBUTTONDOWN => UiEvent::PointerDown { x, y },
                    highgui::EVENT_MOUSEMOVE => UiEvent::PointerMove { x, y, pressed },
                    highgui::EVENT_LBUTTONUP => UiEvent::PointerUp,
                    _ => return,
                };
                queue
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push_back(e);
            })),
        )?;
        info!("window `{name}` opened");
        Ok(Self {
            name: name.to_owned(),
            poll_ms: poll_ms.clamp(1, i32::MAX as u32) as i32,
            events,
        })
    }

    /// 窗口名.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 窗口是否仍然可见? 用户点击关闭按钮后返回 `false`.
    pub fn is_open(&self) -> ViewResult<bool> {
        let v = highgui::get_window_property(&self.name, highgui::WND_PROP_VISIBLE)?;
        Ok(v >= 1.0)
    }

    /// 把画布画到窗口上.
    pub fn present(&self, frame: &Frame) -> ViewResult<()> {
        let mat = frame_to_mat(frame)?;
        highgui::imshow(&self.name, &mat)?;
        Ok(())
    }

    /// 展示 `figure` 并处理输入, 直到窗口被关闭或按下 Esc / `q`.
    ///
    /// 事件处理返回的错误会终止循环并原样返回.
    pub fn run<F: Figure + ?Sized>(&self, figure: &mut F) -> ViewResult<()> {
        self.present(&figure.render())?;
        loop {
            let key = highgui::wait_key(self.poll_ms)?;
            if !self.is_open()? {
                break;
            }
            let mut pending = self.drain();
            match key {
                NO_KEY => {}
                KEY_ESC => break,
                k => match u8::try_from(k & 0xff).map(char::from) {
                    Ok('q') => break,
                    Ok(c) => pending.push_back(UiEvent::Key(c)),
                    Err(_) => {}
                },
            }

            let mut dirty = false;
            for e in pending {
                dirty |= figure.handle(e)?;
            }
            if dirty {
                debug!("window `{}`: redraw", self.name);
                self.present(&figure.render())?;
            }
        }
        Ok(())
    }

    /// 取出当前排队的所有事件.
    fn drain(&self) -> VecDeque<UiEvent> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        match highgui::destroy_window(&self.name) {
            Ok(()) => info!("window `{}` closed", self.name),
            Err(e) => warn!("window `{}`: failed to close: {e}", self.name),
        }
    }
}

/// 将画布转成 BGR 格式的 `Mat`, 并绘制文本.
fn frame_to_mat(frame: &Frame) -> ViewResult<Mat> {
    let (w, h) = frame.size();
    let mut mat = Mat::new_size_with_default(
        Size::new(w as i32, h as i32),
        CV_8UC3,
        Scalar::all(255.0),
    )?;
    for (x, y, p) in frame.image().enumerate_pixels() {
        let [r, g, b] = p.0;
        *mat.at_2d_mut::<Vec3b>(y as i32, x as i32)? = VecN([b, g, r]);
    }
    for c in frame.captions() {
        put_caption(&mut mat, c)?;
    }
    Ok(mat)
}

/// 按对齐方式绘制一条文本.
fn put_caption(mat: &mut Mat, c: &Caption) -> ViewResult<()> {
    let font = imgproc::FONT_HERSHEY_SIMPLEX;
    let scale = FONT_BASE * c.scale as f64;
    let mut baseline = 0;
    let size = imgproc::get_text_size(&c.text, font, scale, 1, &mut baseline)?;
    let (x, y) = (c.at.0 as i32, c.at.1 as i32);
    let x = match c.anchor {
        Anchor::Left => x,
        Anchor::Center => x - size.width / 2,
        Anchor::Right => x - size.width,
    };
    imgproc::put_text(
        mat,
        &c.text,
        Point::new(x, y),
        font,
        scale,
        Scalar::all(0.0),
        1,
        imgproc::LINE_AA,
        false,
    )?;
    Ok(())
}
