//! 整张画布的离屏表示.

use image::{imageops, Rgb, RgbImage};

use crate::consts::rgb::{BLACK, WHITE};
use crate::render::Rect;

/// 文本水平对齐方式.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Anchor {
    /// 左对齐, 锚点为文本左端.
    Left,

    /// 居中.
    Center,

    /// 右对齐, 锚点为文本右端.
    Right,
}

/// 一条待绘制的文本.
///
/// 位图本身不包含字形; 文本由窗口后端在展示前绘制.
#[derive(Clone, Debug, PartialEq)]
pub struct Caption {
    /// 文本内容.
    pub text: String,

    /// 锚点 `(x, y)`, `y` 为文本基线.
    pub at: (u32, u32),

    /// 水平对齐方式.
    pub anchor: Anchor,

    /// 相对字号, 1.0 为默认字号.
    pub scale: f32,
}

/// 离屏画布: RGB 位图加上文本列表.
#[derive(Clone, Debug)]
pub struct Frame {
    image: RgbImage,
    captions: Vec<Caption>,
}

impl Frame {
    /// 创建 `(width, height)` 大小的白色画布.
    pub fn new((width, height): (u32, u32)) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, Rgb(WHITE)),
            captions: Vec::new(),
        }
    }

    /// 画布尺寸 `(W, H)`.
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// 底层位图.
    #[inline]
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// 待绘制文本.
    #[inline]
    pub fn captions(&self) -> &[Caption] {
        &self.captions
    }

    /// 拆出位图和文本.
    #[inline]
    pub fn into_parts(self) -> (RgbImage, Vec<Caption>) {
        (self.image, self.captions)
    }

    /// 将 `img` 贴到 `(rect.x, rect.y)` 处. 超出画布的部分被裁掉.
    pub fn blit(&mut self, rect: Rect, img: &RgbImage) {
        imageops::replace(&mut self.image, img, rect.x as i64, rect.y as i64);
    }

    /// 用 `color` 填充矩形.
    pub fn fill(&mut self, rect: Rect, color: [u8; 3]) {
        let (w, h) = self.size();
        for y in rect.y..rect.bottom().min(h) {
            for x in rect.x..rect.right().min(w) {
                self.image.put_pixel(x, y, Rgb(color));
            }
        }
    }

    /// 绘制 1 像素宽的黑色矩形边框.
    pub fn stroke(&mut self, rect: Rect) {
        let (w, h) = self.size();
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        let (right, bottom) = (rect.right() - 1, rect.bottom() - 1);
        let mut put = |x: u32, y: u32| {
            if x < w && y < h {
                self.image.put_pixel(x, y, Rgb(BLACK));
            }
        };
        for x in rect.x..=right {
            put(x, rect.y);
            put(x, bottom);
        }
        for y in rect.y..=bottom {
            put(rect.x, y);
            put(right, y);
        }
    }

    /// 追加一条文本.
    pub fn caption(
        &mut self,
        text: impl Into<String>,
        at: (u32, u32),
        anchor: Anchor,
        scale: f32,
    ) {
        self.captions.push(Caption {
            text: text.into(),
            at,
            anchor,
            scale,
        });
    }

    /// 在矩形上方居中追加标题.
    pub fn title_above(&mut self, rect: Rect, text: impl Into<String>, scale: f32) {
        let (cx, _) = rect.center();
        self.caption(text, (cx, rect.y.saturating_sub(8)), Anchor::Center, scale);
    }
}
