//! 交互切片视图.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use log::info;
use ndarray::ArrayView3;

use crate::config::ViewConfig;
use crate::consts::layout::{LOWER_SLIDER_RECT, RESET_RECT, UPPER_SLIDER_RECT};
use crate::consts::slider::{SLIDER_INIT, SLIDER_LOWER};
use crate::consts::text::*;
use crate::data::{normalize_by_max, ColorScale, LabelSeq, Permutation, SliceVolume};
use crate::error::ViewResult;
use crate::render::{Frame, Rect, SubplotParams};
use crate::view::{Figure, ImagePanel, ScaleRule, UiEvent};
use crate::widget::{Button, Slider};

type Shared<T> = Rc<RefCell<T>>;

#[inline]
fn share<T>(v: T) -> Shared<T> {
    Rc::new(RefCell::new(v))
}

/// 由滑块驱动的交互切片视图.
///
/// 视图包含一到两个图像面板, 每个面板由自己的滑块驱动; 滑块值变化时,
/// 其监听者重新索引数组并替换面板图像. "Reset" 按钮 (或 `r` 键)
/// 把所有滑块恢复为初始值, 由滑块自身的变化通知触发重绘.
///
/// 数组在会话期间被借用, 生命周期为 `'a`.
pub struct SliceViewer<'a> {
    size: (u32, u32),
    font_scale: f32,
    panels: Vec<Shared<ImagePanel>>,
    sliders: Vec<Shared<Slider<'a>>>,
    reset: Button<'a>,
    dragging: Option<usize>,
}

impl<'a> SliceViewer<'a> {
    fn empty(config: &ViewConfig) -> Self {
        Self {
            size: config.figure_size,
            font_scale: config.font_scale,
            panels: Vec::new(),
            sliders: Vec::new(),
            reset: Button::new(
                RESET_BUTTON,
                Rect::from_fraction(RESET_RECT, config.figure_size),
            ),
            dragging: None,
        }
    }

    /// 微多普勒双面板视图. `data` 的轴为 `(F, R, T)`.
    ///
    /// 左侧面板 "uDoppler Plot" 展示 `A[:, r, :]`, 由 "Range" 滑块驱动;
    /// 右侧面板 "Range Doppler Plot" 展示 `A[:, :, t]` 的转置, 由 "Time" 滑块驱动.
    /// 两个面板在每次重绘时都按新切片重算颜色范围.
    pub fn microdoppler(data: ArrayView3<'a, f32>, config: &ViewConfig) -> ViewResult<Self> {
        let volume = SliceVolume::new(data);
        let n_range = volume.check_driven(Permutation::SwapLeading)?;
        let n_time = volume.check_driven(Permutation::Reverse)?;
        info!("micro-Doppler viewer: shape {:?}", volume.shape());

        let mut viewer = Self::empty(config);
        for (perm, title, label, rect, len) in [
            (
                Permutation::SwapLeading,
                UDOPPLER_TITLE,
                RANGE_SLIDER,
                UPPER_SLIDER_RECT,
                n_range,
            ),
            (
                Permutation::Reverse,
                RANGE_DOPPLER_TITLE,
                TIME_SLIDER,
                LOWER_SLIDER_RECT,
                n_time,
            ),
        ] {
            let slider = Slider::new(label, SLIDER_LOWER, len - 1, SLIDER_INIT)
                .place(Rect::from_fraction(rect, config.figure_size));
            let init = slider.init();
            let panel = ImagePanel::new(
                title,
                init,
                volume.slice_at(perm, init),
                ScaleRule::Autoscale,
                config.slice_cmap,
            );
            viewer.bind(slider, panel, move |p, i| {
                p.set_data(i, volume.slice_at(perm, i));
                Ok(())
            });
        }
        viewer.wire_reset();
        Ok(viewer)
    }

    /// 距离-方位单面板视图. `data` 的轴为 `(T, H, W)`.
    ///
    /// 数组在载入时按最大值归一化一次, 之后以固定的 `[0, 1]` 颜色范围展示,
    /// 并附带颜色条. "Time" 滑块沿第 0 轴切片.
    pub fn range_azimuth(data: ArrayView3<f32>, config: &ViewConfig) -> ViewResult<Self> {
        SliceVolume::new(data).check_driven(Permutation::Identity)?;
        let normalized = normalize_by_max(data)?;
        info!("range-azimuth viewer: shape {:?}", normalized.dim());

        let mut viewer = Self::empty(config);
        let slider = Slider::new(TIME_SLIDER, SLIDER_LOWER, normalized.dim().0 - 1, SLIDER_INIT)
            .place(Rect::from_fraction(LOWER_SLIDER_RECT, config.figure_size));
        let init = slider.init();
        let panel = ImagePanel::new(
            RANGE_AZIMUTH_TITLE,
            init,
            SliceVolume::new(normalized.view()).slice_at(Permutation::Identity, init),
            ScaleRule::Fixed(ColorScale::unit()),
            config.slice_cmap,
        )
        .with_colorbar();
        viewer.bind(slider, panel, move |p, i| {
            let volume = SliceVolume::new(normalized.view());
            p.set_data(i, volume.slice_at(Permutation::Identity, i));
            Ok(())
        });
        viewer.wire_reset();
        Ok(viewer)
    }

    /// 分类数据单面板视图. `data` 的轴为 `(N, H, W)`, 每个样本一张频谱图.
    ///
    /// "Sample" 滑块沿第 0 轴切片, 并把标题更新为
    /// `"MicroDoppler Spectrogram Plot: {label} {index}"`. 颜色范围只按第一个样本计算一次.
    /// 没有标签时, 标题只追加索引.
    ///
    /// 标签序列比第 0 轴短时, 滑到序列末尾之后会返回 `ViewError::LabelOutOfRange`.
    pub fn classification<S>(
        data: ArrayView3<'a, f32>,
        labels: Option<&'a [S]>,
        config: &ViewConfig,
    ) -> ViewResult<Self>
    where
        S: AsRef<str> + 'a,
    {
        let volume = SliceVolume::new(data);
        let n = volume.check_driven(Permutation::Identity)?;
        let labels = labels.map(LabelSeq::new);
        info!(
            "classification viewer: shape {:?}, {} labels",
            volume.shape(),
            labels.map_or(0, |l| l.len())
        );

        let mut viewer = Self::empty(config);
        let slider = Slider::new(SAMPLE_SLIDER, SLIDER_LOWER, n - 1, SLIDER_INIT)
            .place(Rect::from_fraction(LOWER_SLIDER_RECT, config.figure_size));
        let init = slider.init();
        let panel = ImagePanel::new(
            SPECTROGRAM_TITLE,
            init,
            volume.slice_at(Permutation::Identity, init),
            ScaleRule::Initial,
            config.slice_cmap,
        )
        .with_colorbar();
        viewer.bind(slider, panel, move |p, i| {
            p.set_data(i, volume.slice_at(Permutation::Identity, i));
            let title = match labels {
                Some(seq) => seq.title(SPECTROGRAM_TITLE, i)?,
                None => format!("{SPECTROGRAM_TITLE}: {i}"),
            };
            p.set_title(title);
            Ok(())
        });
        viewer.wire_reset();
        Ok(viewer)
    }

    /// 注册面板和驱动它的滑块. `update` 在每次滑块值变化时被调用.
    fn bind<F>(&mut self, mut slider: Slider<'a>, panel: ImagePanel, mut update: F)
    where
        F: FnMut(&mut ImagePanel, usize) -> ViewResult<()> + 'a,
    {
        let panel = share(panel);
        let target = Rc::clone(&panel);
        slider.on_changed(move |i| update(&mut *target.borrow_mut(), i));
        self.panels.push(panel);
        self.sliders.push(share(slider));
    }

    /// 让 "Reset" 按钮重置所有滑块.
    fn wire_reset(&mut self) {
        let sliders = self.sliders.clone();
        self.reset.on_clicked(move || {
            for s in sliders.iter() {
                s.borrow_mut().reset()?;
            }
            Ok(())
        });
    }

    /// 面板个数.
    #[inline]
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    /// 第 `i` 个面板. 越界时 panic.
    #[inline]
    pub fn panel(&self, i: usize) -> Ref<'_, ImagePanel> {
        self.panels[i].borrow()
    }

    /// 滑块个数.
    #[inline]
    pub fn slider_count(&self) -> usize {
        self.sliders.len()
    }

    /// 第 `i` 个滑块. 越界时 panic.
    #[inline]
    pub fn slider(&self, i: usize) -> Ref<'_, Slider<'a>> {
        self.sliders[i].borrow()
    }

    /// 将第 `i` 个滑块设为 `v` (会被截断到合法范围), 返回实际值. 越界时 panic.
    pub fn set_slider(&mut self, i: usize, v: usize) -> ViewResult<usize> {
        self.sliders[i].borrow_mut().set_value(v)
    }

    /// 按下 "Reset" 按钮.
    #[inline]
    pub fn reset(&mut self) -> ViewResult<()> {
        self.reset.click()
    }

    /// 点 `(x, y)` 所在的滑块.
    fn slider_at(&self, x: i32, y: i32) -> Option<usize> {
        self.sliders
            .iter()
            .position(|s| s.borrow().rect().contains(x, y))
    }

    /// 拖动第 `i` 个滑块到横坐标 `x`. 只有值真正变化时才通知监听者.
    fn drag(&mut self, i: usize, x: i32) -> ViewResult<bool> {
        let mut s = self.sliders[i].borrow_mut();
        let v = s.value_at(x);
        if v == s.value() {
            return Ok(false);
        }
        s.set_value(v)?;
        Ok(true)
    }
}

impl Figure for SliceViewer<'_> {
    fn render(&self) -> Frame {
        let mut frame = Frame::new(self.size);
        let cells = SubplotParams::slice_viewer().cells((1, self.panels.len()), self.size);
        for (panel, cell) in self.panels.iter().zip(cells) {
            panel.borrow().draw(&mut frame, cell, self.font_scale);
        }
        for s in self.sliders.iter() {
            s.borrow().draw(&mut frame, self.font_scale);
        }
        self.reset.draw(&mut frame, self.font_scale);
        frame
    }

    fn handle(&mut self, event: UiEvent) -> ViewResult<bool> {
        match event {
            UiEvent::PointerDown { x, y } => {
                if self.reset.click_at(x, y)? {
                    return Ok(true);
                }
                match self.slider_at(x, y) {
                    Some(i) => {
                        self.dragging = Some(i);
                        self.drag(i, x)
                    }
                    None => Ok(false),
                }
            }
            UiEvent::PointerMove { x, y, pressed } => {
                let hover = self.reset.hover(x, y);
                match (self.dragging, pressed) {
                    (Some(i), true) => Ok(self.drag(i, x)? || hover),
                    (Some(_), false) => {
                        self.dragging = None;
                        Ok(hover)
                    }
                    (None, _) => Ok(hover),
                }
            }
            UiEvent::PointerUp => {
                self.dragging = None;
                Ok(false)
            }
            UiEvent::Key('r' | 'R') => {
                self.reset()?;
                Ok(true)
            }
            UiEvent::Key(_) => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SliceViewer;
    use crate::config::ViewConfig;
    use crate::consts::text::*;
    use crate::data::ColorScale;
    use crate::error::ViewError;
    use crate::view::{Figure, UiEvent};
    use ndarray::{s, Array3};

    fn init_logger() {
        let _ = simple_logger::SimpleLogger::new()
            .with_level(log::LevelFilter::Debug)
            .init();
    }

    /// `(F, R, T) = (4, 6, 8)`.
    fn udoppler() -> Array3<f32> {
        Array3::from_shape_fn((4, 6, 8), |(f, r, t)| (f * 100 + r * 10 + t) as f32)
    }

    #[test]
    fn test_microdoppler_panels_follow_sliders() {
        init_logger();
        let a = udoppler();
        let mut v = SliceViewer::microdoppler(a.view(), &ViewConfig::default()).unwrap();
        assert_eq!(v.panel_count(), 2);
        assert_eq!(v.slider(0).label(), RANGE_SLIDER);
        assert_eq!(v.slider(0).bounds(), (0, 5));
        assert_eq!(v.slider(1).bounds(), (0, 7));
        assert_eq!(v.panel(0).data(), a.slice(s![.., 0, ..]));

        v.set_slider(0, 3).unwrap();
        assert_eq!(v.panel(0).index(), 3);
        assert_eq!(v.panel(0).data(), a.slice(s![.., 3, ..]));
        // 另一个面板不受影响.
        assert_eq!(v.panel(1).index(), 0);

        v.set_slider(1, 5).unwrap();
        assert_eq!(v.panel(1).data(), a.slice(s![.., .., 5]).t());
        assert_eq!(v.panel(1).title(), RANGE_DOPPLER_TITLE);
    }

    #[test]
    fn test_microdoppler_autoscale() {
        let a = udoppler();
        let mut v = SliceViewer::microdoppler(a.view(), &ViewConfig::default()).unwrap();
        v.set_slider(0, 2).unwrap();
        // A[:, 2, :] 的范围是 [20, 327].
        assert_eq!(v.panel(0).scale(), ColorScale::new(20.0, 327.0).unwrap());
    }

    #[test]
    fn test_slider_stays_in_bounds() {
        let a = udoppler();
        let mut v = SliceViewer::microdoppler(a.view(), &ViewConfig::default()).unwrap();
        assert_eq!(v.set_slider(0, 100).unwrap(), 5);
        assert_eq!(v.panel(0).index(), 5);
    }

    #[test]
    fn test_reset_restores_initial_slice() {
        let a = udoppler();
        let mut v = SliceViewer::microdoppler(a.view(), &ViewConfig::default()).unwrap();
        v.set_slider(0, 4).unwrap();
        v.set_slider(1, 6).unwrap();
        v.reset().unwrap();
        for i in 0..2 {
            assert_eq!(v.slider(i).value(), 0);
            assert_eq!(v.panel(i).index(), 0);
        }
        assert_eq!(v.panel(0).data(), a.slice(s![.., 0, ..]));
    }

    #[test]
    fn test_pointer_drag_and_reset_click() {
        let a = udoppler();
        let mut v = SliceViewer::microdoppler(a.view(), &ViewConfig::default()).unwrap();
        let track = v.slider(1).rect();
        let (_, cy) = track.center();
        let right = track.right() as i32 - 1;

        assert!(v
            .handle(UiEvent::PointerDown {
                x: right,
                y: cy as i32
            })
            .unwrap());
        assert_eq!(v.slider(1).value(), 7);
        assert_eq!(v.panel(1).index(), 7);

        // 拖到最左端.
        let moved = v
            .handle(UiEvent::PointerMove {
                x: track.x as i32 - 50,
                y: cy as i32,
                pressed: true,
            })
            .unwrap();
        assert!(moved);
        assert_eq!(v.panel(1).index(), 0);
        v.handle(UiEvent::PointerUp).unwrap();

        v.set_slider(0, 3).unwrap();
        let (bx, by) = v.reset.rect().center();
        v.handle(UiEvent::PointerDown {
            x: bx as i32,
            y: by as i32,
        })
        .unwrap();
        assert_eq!(v.slider(0).value(), 0);

        v.set_slider(1, 2).unwrap();
        assert!(v.handle(UiEvent::Key('r')).unwrap());
        assert_eq!(v.panel(1).index(), 0);
        assert!(!v.handle(UiEvent::Key('x')).unwrap());
    }

    #[test]
    fn test_range_azimuth_fixed_unit_scale() {
        let x = Array3::from_shape_fn((5, 3, 4), |(t, h, w)| (t + h * w) as f32);
        let mut v = SliceViewer::range_azimuth(x.view(), &ViewConfig::default()).unwrap();
        let max = x.iter().copied().fold(f32::MIN, f32::max);
        for t in 0..5 {
            v.set_slider(0, t).unwrap();
            let p = v.panel(0);
            assert_eq!(p.scale(), ColorScale::unit());
            assert_eq!(p.data(), x.slice(s![t, .., ..]).mapv(|e| e / max));
        }
        assert_eq!(v.panel(0).title(), RANGE_AZIMUTH_TITLE);
    }

    #[test]
    fn test_range_azimuth_rejects_zero_array() {
        let x = Array3::<f32>::zeros((2, 2, 2));
        assert!(matches!(
            SliceViewer::range_azimuth(x.view(), &ViewConfig::default()),
            Err(ViewError::InvalidMaximum(_))
        ));
    }

    #[test]
    fn test_classification_title_follows_label() {
        let x = Array3::from_shape_fn((3, 2, 2), |(n, h, w)| (n * 4 + h * 2 + w) as f32);
        let labels = ["walk", "run", "sit"];
        let mut v =
            SliceViewer::classification(x.view(), Some(&labels[..]), &ViewConfig::default())
                .unwrap();
        assert_eq!(v.panel(0).title(), SPECTROGRAM_TITLE);
        v.set_slider(0, 1).unwrap();
        assert_eq!(v.panel(0).title(), "MicroDoppler Spectrogram Plot: run 1");
        // 颜色范围保持第一个样本的范围.
        assert_eq!(v.panel(0).scale(), ColorScale::new(0.0, 3.0).unwrap());
    }

    #[test]
    fn test_classification_short_labels() {
        let x = Array3::<f32>::ones((4, 2, 2));
        let labels = vec![String::from("a"), String::from("b")];
        let mut v =
            SliceViewer::classification(x.view(), Some(labels.as_slice()), &ViewConfig::default())
                .unwrap();
        let last = v.slider(0).bounds().1;
        assert_eq!(last, 3);
        assert!(matches!(
            v.set_slider(0, last),
            Err(ViewError::LabelOutOfRange { index: 3, len: 2 })
        ));
    }

    #[test]
    fn test_classification_without_labels() {
        let x = Array3::<f32>::ones((2, 2, 2));
        let mut v =
            SliceViewer::classification::<&str>(x.view(), None, &ViewConfig::default()).unwrap();
        v.set_slider(0, 1).unwrap();
        assert_eq!(v.panel(0).title(), "MicroDoppler Spectrogram Plot: 1");
    }

    #[test]
    fn test_empty_axis_is_rejected() {
        let a = Array3::<f32>::zeros((4, 0, 3));
        assert!(matches!(
            SliceViewer::microdoppler(a.view(), &ViewConfig::default()),
            Err(ViewError::EmptyAxis { axis: 1 })
        ));
    }

    #[test]
    fn test_render_layout() {
        let a = udoppler();
        let v = SliceViewer::microdoppler(a.view(), &ViewConfig::default()).unwrap();
        let frame = v.render();
        assert_eq!(frame.size(), (800, 600));
        let texts: Vec<_> = frame.captions().iter().map(|c| c.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                UDOPPLER_TITLE,
                RANGE_DOPPLER_TITLE,
                RANGE_SLIDER,
                "0",
                TIME_SLIDER,
                "0",
                RESET_BUTTON
            ]
        );
    }
}
