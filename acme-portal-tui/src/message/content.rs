//! 内容面板消息
//!
//! 表单页（挑战 / 签发）和设置页的操作

/// 内容面板消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== 输入框 ==========
    /// 输入字符
    Input(char),
    /// 删除最后一个字符
    Backspace,
    /// 清空输入框
    ClearInput,
    /// 提交表单
    Submit,

    // ========== 结果区 ==========
    /// 向上滚动一行
    ScrollUp,
    /// 向下滚动一行
    ScrollDown,
    /// 向上翻页
    PageUp,
    /// 向下翻页
    PageDown,
    /// 显示 / 隐藏私钥
    TogglePrivateKey,
    /// 导出证书文件
    Export,

    // ========== 设置页面专用 ==========
    /// 上一个设置项
    SelectPrevious,
    /// 下一个设置项
    SelectNext,
    /// 切换当前设置项的取值
    Toggle,
}
