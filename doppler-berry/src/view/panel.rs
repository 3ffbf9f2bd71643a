//! 图像面板.

use log::{debug, warn};
use ndarray::{Array2, ArrayView2};

use crate::data::ColorScale;
use crate::render::{colorbar, rasterize, Anchor, Colormap, Frame, Origin, Rect};

/// 面板颜色范围的更新规则.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScaleRule {
    /// 每次替换数据后都按新切片的最小值/最大值重算.
    Autoscale,

    /// 只按第一个切片计算一次, 之后保持不变.
    Initial,

    /// 固定范围.
    Fixed(ColorScale),
}

/// 绑定到某个 2D 切片的图像面板.
///
/// 面板持有当前切片的一份拷贝, 以及颜色范围、标题和当前切片索引.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImagePanel {
    title: String,
    data: Array2<f32>,
    index: usize,
    scale: ColorScale,
    rule: ScaleRule,
    cmap: Colormap,
    origin: Origin,
    colorbar: bool,
}

impl ImagePanel {
    /// 以第 `index` 个切片 `data` 初始化面板.
    pub fn new(
        title: impl Into<String>,
        index: usize,
        data: ArrayView2<f32>,
        rule: ScaleRule,
        cmap: Colormap,
    ) -> Self {
        let mut panel = Self {
            title: title.into(),
            data: data.to_owned(),
            index,
            scale: ColorScale::unit(),
            rule,
            cmap,
            origin: Origin::Upper,
            colorbar: false,
        };
        match rule {
            ScaleRule::Fixed(s) => panel.scale = s,
            ScaleRule::Autoscale | ScaleRule::Initial => panel.autoscale(),
        }
        panel
    }

    /// 在面板右侧附加颜色条.
    #[inline]
    pub fn with_colorbar(mut self) -> Self {
        self.colorbar = true;
        self
    }

    /// 修改行绘制方向.
    #[inline]
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    /// 面板标题.
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// 修改面板标题.
    #[inline]
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// 当前切片.
    #[inline]
    pub fn data(&self) -> ArrayView2<f32> {
        self.data.view()
    }

    /// 当前切片索引.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// 当前颜色范围.
    #[inline]
    pub fn scale(&self) -> ColorScale {
        self.scale
    }

    /// 颜色范围更新规则.
    #[inline]
    pub fn rule(&self) -> ScaleRule {
        self.rule
    }

    /// 用第 `index` 个切片替换当前图像, 并按规则更新颜色范围.
    pub fn set_data(&mut self, index: usize, data: ArrayView2<f32>) {
        self.data = data.to_owned();
        self.index = index;
        if self.rule == ScaleRule::Autoscale {
            self.autoscale();
        }
        debug!(
            "panel `{}` -> slice {index}, scale [{}, {}]",
            self.title,
            self.scale.vmin(),
            self.scale.vmax()
        );
    }

    /// 按当前切片的最小值/最大值重算颜色范围.
    ///
    /// 切片不含有限值时保留原范围.
    pub fn autoscale(&mut self) {
        match ColorScale::autoscale(self.data.view()) {
            Some(s) => self.scale = s,
            None => warn!("panel `{}`: slice has no finite value, keep scale", self.title),
        }
    }

    /// 将面板绘制到画布 `rect` 区域: 标题, 图像, 边框, 以及可选的颜色条.
    pub fn draw(&self, frame: &mut Frame, rect: Rect, font_scale: f32) {
        let (img_rect, bar_rect) = if self.colorbar {
            let (a, b) = rect.split_colorbar();
            (a, Some(b))
        } else {
            (rect, None)
        };

        let img = rasterize(
            self.data.view(),
            self.scale,
            self.cmap,
            self.origin,
            (img_rect.width, img_rect.height),
        );
        frame.blit(img_rect, &img);
        frame.stroke(img_rect);
        frame.title_above(img_rect, self.title.as_str(), font_scale);

        if let Some(bar) = bar_rect {
            frame.blit(bar, &colorbar(self.cmap, (bar.width, bar.height)));
            frame.stroke(bar);
            let x = bar.right() + 4;
            frame.caption(
                format_tick(self.scale.vmax()),
                (x, bar.y + 10),
                Anchor::Left,
                font_scale * 0.8,
            );
            frame.caption(
                format_tick(self.scale.vmin()),
                (x, bar.bottom()),
                Anchor::Left,
                font_scale * 0.8,
            );
        }
    }
}

/// 颜色条刻度文本.
pub(crate) fn format_tick(v: f32) -> String {
    if v != 0.0 && (v.abs() >= 1e4 || v.abs() < 1e-2) {
        format!("{v:.1e}")
    } else {
        format!("{v:.2}")
    }
}
