//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：所有弹窗（Modal）的标题都放在 modal 下
//! 3. **页面内容归对应页面**：如 `challenge.*`, `issue.*`
//! 4. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 5. **键盘提示归 `hints.*`**：按键名称和操作提示
//!
//! 后端返回的错误信息和表单校验错误原样显示，不经过翻译。

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 导航栏文本
    pub nav: NavTexts,
    /// 挑战页面文本
    pub challenge: ChallengeTexts,
    /// 签发页面文本
    pub issue: IssueTexts,
    /// 设置页面文本
    pub settings: SettingsTexts,
    /// 弹窗文本
    pub modal: ModalTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
    /// 帮助页面文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub submit: &'static str,
    pub submitting: &'static str,
    pub error_prefix: &'static str,
    pub not_configured: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作描述
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub arrows_ud: &'static str,  // "↑↓"
    pub arrows_lr: &'static str,  // "←→"
}

/// 动作描述（用于组合提示）
pub struct ActionTexts {
    pub navigate: &'static str,
    pub open: &'static str,
    pub switch_panel: &'static str,
    pub submit: &'static str,
    pub scroll: &'static str,
    pub clear: &'static str,
    pub export: &'static str,
    pub toggle_key: &'static str,
    pub switch_option: &'static str,
    pub back: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 导航栏
// ============================================================================

/// 导航栏文本
pub struct NavTexts {
    pub challenge: &'static str,
    pub issue: &'static str,
    pub settings: &'static str,
}

// ============================================================================
// 页面文本
// ============================================================================

/// 挑战页面文本
pub struct ChallengeTexts {
    pub title: &'static str,
    pub input_label: &'static str,
    pub placeholder: &'static str,
    pub success: &'static str,
    pub request_id: &'static str,
    pub dns_records: &'static str,
    pub no_records: &'static str,
    pub col_type: &'static str,
    pub col_record: &'static str,
    pub col_value: &'static str,
}

/// 签发页面文本
pub struct IssueTexts {
    pub title: &'static str,
    pub input_label: &'static str,
    pub placeholder: &'static str,
    pub message: &'static str,
    pub domains: &'static str,
    pub leaf: &'static str,
    pub bundle: &'static str,
    pub private_key: &'static str,
    pub private_key_hidden: &'static str,
    pub exporting: &'static str,
    /// 证书解析结果
    pub details: CertificateDetailTexts,
}

/// 证书解析结果标签
pub struct CertificateDetailTexts {
    pub subject: &'static str,
    pub issuer: &'static str,
    pub san: &'static str,
    pub not_before: &'static str,
    pub not_after: &'static str,
    pub days_remaining: &'static str,
    pub expired: &'static str,
    pub fingerprint: &'static str,
}

/// 设置页面文本
pub struct SettingsTexts {
    pub title: &'static str,
    /// 主题设置
    pub theme: ThemeTexts,
    /// 语言设置
    pub language: LanguageTexts,
    /// 只读配置项
    pub readonly: ReadonlyConfigTexts,
}

pub struct ThemeTexts {
    pub label: &'static str,
    pub dark: &'static str,
    pub light: &'static str,
}

pub struct LanguageTexts {
    pub label: &'static str,
}

/// 只读配置项（来自配置文件或环境变量）
pub struct ReadonlyConfigTexts {
    pub section: &'static str,
    pub api_url: &'static str,
    pub timeout: &'static str,
    pub output_dir: &'static str,
    pub seconds: &'static str,
}

// ============================================================================
// 弹窗文本
// ============================================================================

/// 弹窗标题
pub struct ModalTexts {
    pub export_failed: &'static str,
    pub save_failed: &'static str,
}

// ============================================================================
// 其他组件
// ============================================================================

/// 状态栏文本
pub struct StatusBarTexts {
    pub ready: &'static str,
    pub busy: &'static str,
    pub challenge_received: &'static str,
    pub certificate_received: &'static str,
    pub request_failed: &'static str,
    pub exported: &'static str,
    pub export_in_progress: &'static str,
    pub nothing_to_export: &'static str,
    pub settings_saved: &'static str,
}

/// 帮助页面文本
pub struct HelpTexts {
    pub title: &'static str,
    pub global_shortcuts: &'static str,
    pub form_shortcuts: &'static str,
    pub close_hint: &'static str,
    /// 快捷键动作描述
    pub actions: HelpActionTexts,
}

/// 帮助页面快捷键动作描述
pub struct HelpActionTexts {
    pub switch_panel: &'static str,
    pub move_up_down: &'static str,
    pub confirm: &'static str,
    pub back_cancel: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub submit: &'static str,
    pub clear_input: &'static str,
    pub scroll: &'static str,
    pub export: &'static str,
    pub toggle_key: &'static str,
}
