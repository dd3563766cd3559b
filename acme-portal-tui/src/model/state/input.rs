//! 单行文本输入框

/// 输入框内容（光标固定在末尾）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    value: String,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// 追加一个字符，控制字符被忽略
    pub fn push(&mut self, ch: char) {
        if !ch.is_control() {
            self.value.push(ch);
        }
    }

    /// 删除最后一个字符
    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_sequence() {
        let mut input = InputField::new();
        for ch in "ab.c\u{7}om".chars() {
            input.push(ch);
        }
        assert_eq!(input.as_str(), "ab.com");

        input.backspace();
        assert_eq!(input.as_str(), "ab.co");

        input.clear();
        assert!(input.is_empty());
        input.backspace();
        assert!(input.is_empty());
    }
}
