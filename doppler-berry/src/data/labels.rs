//! 样本标签序列.

use crate::error::{ViewError, ViewResult};

/// 借用的、只读的标签序列. 与数组第 0 轴逐一对应.
///
/// 序列长度由调用方保证与数组第 0 轴一致; 如果序列更短,
/// 访问末尾之后的索引会返回 `ViewError::LabelOutOfRange`.
#[derive(Debug)]
pub struct LabelSeq<'a, S> {
    labels: &'a [S],
}

// 手写以避免 `S: Copy` 约束.
impl<S> Clone for LabelSeq<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for LabelSeq<'_, S> {}

impl<'a, S: AsRef<str>> LabelSeq<'a, S> {
    /// 直接初始化.
    #[inline]
    pub fn new(labels: &'a [S]) -> Self {
        Self { labels }
    }

    /// 序列长度.
    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// 序列是否为空?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// 获取第 `index` 个标签.
    pub fn get(&self, index: usize) -> ViewResult<&'a str> {
        self.labels
            .get(index)
            .map(|s| s.as_ref())
            .ok_or(ViewError::LabelOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// 生成第 `index` 个样本的面板标题: `"{base}: {label} {index}"`.
    pub fn title(&self, base: &str, index: usize) -> ViewResult<String> {
        let label = self.get(index)?;
        Ok(format!("{base}: {label} {index}"))
    }
}

#[cfg(test)]
mod tests {
    use super::LabelSeq;
    use crate::error::ViewError;

    #[test]
    fn test_title() {
        let labels = ["walk", "run", "jump"];
        let seq = LabelSeq::new(&labels);
        assert_eq!(seq.title("Plot", 1).unwrap(), "Plot: run 1");
        assert_eq!(seq.get(2).unwrap(), "jump");
    }

    #[test]
    fn test_short_labels_fail_at_last_index() {
        // 数组第 0 轴长度为 5, 最后一个合法滑块索引为 4.
        let labels = vec![String::from("a"), String::from("b"), String::from("c")];
        let seq = LabelSeq::new(&labels);
        let last = 5 - 1;
        assert!(matches!(
            seq.get(last),
            Err(ViewError::LabelOutOfRange { index: 4, len: 3 })
        ));
        assert!(seq.title("Plot", last).is_err());
    }
}
