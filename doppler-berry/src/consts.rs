//! 通用常量.

/// 面板与滑块标题.
pub mod text {
    /// 微多普勒视图中, 按距离切片的面板标题.
    pub const UDOPPLER_TITLE: &str = "uDoppler Plot";

    /// 微多普勒视图中, 按时间切片的面板标题.
    pub const RANGE_DOPPLER_TITLE: &str = "Range Doppler Plot";

    /// 距离-方位视图面板标题.
    pub const RANGE_AZIMUTH_TITLE: &str = "Range Azimuth Plot";

    /// 分类数据视图面板标题. 滑动后会追加 `": {label} {index}"`.
    pub const SPECTROGRAM_TITLE: &str = "MicroDoppler Spectrogram Plot";

    /// 特征网格视图的默认总标题.
    pub const FEATURE_GRID_TITLE: &str = "PCA Features";

    /// 拼接视图的默认标题.
    pub const STITCH_TITLE: &str = "uDoppler w/ range selection";

    /// 拼接视图横轴.
    pub const TIME_AXIS_LABEL: &str = "Time (s)";

    /// 拼接视图纵轴.
    pub const DOPPLER_AXIS_LABEL: &str = "Doppler (m/s)";

    /// 距离滑块.
    pub const RANGE_SLIDER: &str = "Range";

    /// 时间滑块.
    pub const TIME_SLIDER: &str = "Time";

    /// 样本滑块.
    pub const SAMPLE_SLIDER: &str = "Sample";

    /// 重置按钮.
    pub const RESET_BUTTON: &str = "Reset";
}

/// 画布布局. 所有矩形均为 `[left, bottom, width, height]`,
/// 以画布宽高为单位、原点位于左下角.
pub mod layout {
    /// 交互视图中图像区域左边界.
    pub const SUBPLOT_LEFT: f32 = 0.25;

    /// 交互视图中图像区域下边界 (为滑块留出空间).
    pub const SUBPLOT_BOTTOM: f32 = 0.25;

    /// 图像区域右边界.
    pub const SUBPLOT_RIGHT: f32 = 0.9;

    /// 图像区域上边界.
    pub const SUBPLOT_TOP: f32 = 0.88;

    /// 相邻面板之间的水平间距, 以面板平均宽度为单位.
    pub const SUBPLOT_WSPACE: f32 = 0.2;

    /// 第一个 (上方) 滑块.
    pub const UPPER_SLIDER_RECT: [f32; 4] = [0.25, 0.15, 0.65, 0.03];

    /// 第二个 (下方) 滑块. 只有一个滑块时也使用该位置.
    pub const LOWER_SLIDER_RECT: [f32; 4] = [0.25, 0.1, 0.65, 0.03];

    /// 重置按钮.
    pub const RESET_RECT: [f32; 4] = [0.8, 0.025, 0.1, 0.04];

    /// 颜色条占据面板宽度的比例.
    pub const COLORBAR_FRACTION: f32 = 0.15;

    /// 颜色条与面板之间的间距, 以面板宽度为单位.
    pub const COLORBAR_PAD: f32 = 0.05;

    /// 颜色条的高宽比.
    pub const COLORBAR_ASPECT: f32 = 20.0;
}

/// 特征网格布局.
pub mod grid {
    /// 网格行数.
    pub const ROWS: usize = 4;

    /// 网格列数.
    pub const COLS: usize = 4;

    /// 网格容量.
    pub const CAPACITY: usize = ROWS * COLS;

    /// 行间距, 以格子平均高度为单位.
    pub const HSPACE: f32 = 0.15;

    /// 列间距, 以格子平均宽度为单位.
    pub const WSPACE: f32 = 0.15;

    /// 网格区域左边界.
    pub const LEFT: f32 = 0.125;

    /// 网格区域右边界.
    pub const RIGHT: f32 = 0.9;

    /// 网格区域下边界.
    pub const BOTTOM: f32 = 0.11;

    /// 网格区域上边界.
    pub const TOP: f32 = 0.88;

    /// 总标题锚点 `(x, y)`.
    pub const SUPTITLE_ANCHOR: (f32, f32) = (0.55, 0.95);

    /// 总标题相对字号.
    pub const SUPTITLE_SCALE: f32 = 1.6;
}

/// 三通道颜色.
pub mod rgb {
    /// 白色. 画布与滑块底色.
    pub const WHITE: [u8; 3] = [255, 255, 255];

    /// 黑色. 文字与边框.
    pub const BLACK: [u8; 3] = [0, 0, 0];

    /// 滑块已填充部分.
    pub const SLIDER_FILL: [u8; 3] = [31, 119, 180];

    /// 滑块轨道.
    pub const SLIDER_TRACK: [u8; 3] = [220, 220, 220];

    /// 按钮底色.
    pub const BUTTON_FACE: [u8; 3] = [255, 255, 255];

    /// 鼠标悬停时的按钮底色.
    pub const BUTTON_HOVER: [u8; 3] = [249, 249, 249];

    /// 无效值 (NaN) 像素颜色.
    pub const BAD: [u8; 3] = WHITE;
}

/// 滑块参数.
pub mod slider {
    /// 滑块下界. 切片 0 也可以被滑块选中.
    pub const SLIDER_LOWER: usize = 0;

    /// 滑块初始值, 也是重置值.
    pub const SLIDER_INIT: usize = 0;
}
