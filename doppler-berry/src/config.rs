//! 视图配置.

use crate::render::Colormap;

/// 视图配置. 所有视图共用同一份配置.
///
/// 使用 `ViewConfig::default()` 获得默认值, 再用 `with_*` 系列方法按需修改.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ViewConfig {
    /// 交互切片视图和拼接视图的画布大小 `(W, H)`, 以像素为单位.
    pub figure_size: (u32, u32),

    /// 特征网格视图的画布大小 `(W, H)`, 以像素为单位.
    pub grid_size: (u32, u32),

    /// 切片面板使用的颜色表.
    pub slice_cmap: Colormap,

    /// 特征网格使用的颜色表.
    pub grid_cmap: Colormap,

    /// 文本相对字号.
    pub font_scale: f32,

    /// 窗口后端轮询事件的间隔, 以毫秒为单位.
    pub poll_ms: u32,

    /// 窗口标题.
    pub window_name: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            figure_size: (800, 600),
            grid_size: (1000, 1000),
            slice_cmap: Colormap::Viridis,
            grid_cmap: Colormap::Jet,
            font_scale: 1.0,
            poll_ms: 30,
            window_name: String::from("Figure"),
        }
    }
}

impl ViewConfig {
    /// 修改画布大小.
    #[inline]
    pub fn with_figure_size(mut self, size: (u32, u32)) -> Self {
        self.figure_size = size;
        self
    }

    /// 修改网格画布大小.
    #[inline]
    pub fn with_grid_size(mut self, size: (u32, u32)) -> Self {
        self.grid_size = size;
        self
    }

    /// 修改切片面板颜色表.
    #[inline]
    pub fn with_slice_cmap(mut self, cmap: Colormap) -> Self {
        self.slice_cmap = cmap;
        self
    }

    /// 修改特征网格颜色表.
    #[inline]
    pub fn with_grid_cmap(mut self, cmap: Colormap) -> Self {
        self.grid_cmap = cmap;
        self
    }

    /// 修改字号.
    #[inline]
    pub fn with_font_scale(mut self, scale: f32) -> Self {
        self.font_scale = scale;
        self
    }

    /// 修改轮询间隔.
    #[inline]
    pub fn with_poll_ms(mut self, ms: u32) -> Self {
        self.poll_ms = ms.max(1);
        self
    }

    /// 修改窗口标题.
    #[inline]
    pub fn with_window_name(mut self, name: impl Into<String>) -> Self {
        self.window_name = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::ViewConfig;
    use crate::render::Colormap;

    #[test]
    fn test_builder() {
        let c = ViewConfig::default()
            .with_figure_size((320, 240))
            .with_slice_cmap(Colormap::Gray)
            .with_poll_ms(0)
            .with_window_name("radar");
        assert_eq!(c.figure_size, (320, 240));
        assert_eq!(c.slice_cmap, Colormap::Gray);
        assert_eq!(c.poll_ms, 1);
        assert_eq!(c.window_name, "radar");
        assert_eq!(c.grid_cmap, Colormap::Jet);
    }
}
