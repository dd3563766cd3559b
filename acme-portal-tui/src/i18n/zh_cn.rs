//! 简体中文翻译 (zh-CN)

use super::keys::{
    ActionTexts, CertificateDetailTexts, ChallengeTexts, CommonTexts, HelpActionTexts, HelpTexts,
    HintTexts, IssueTexts, KeyNames, LanguageTexts, ModalTexts, NavTexts, ReadonlyConfigTexts,
    SettingsTexts, StatusBarTexts, ThemeTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "ACME 证书门户",
        submit: "提交",
        submitting: "提交中...",
        error_prefix: "错误：",
        not_configured: "（未配置）",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            arrows_ud: "↑↓",
            arrows_lr: "←→",
        },
        actions: ActionTexts {
            navigate: "导航",
            open: "打开",
            switch_panel: "切换面板",
            submit: "提交",
            scroll: "滚动",
            clear: "清空",
            export: "导出",
            toggle_key: "显示/隐藏私钥",
            switch_option: "切换",
            back: "返回",
            help: "帮助",
            quit: "退出",
        },
    },

    // ========================================================================
    // 导航栏
    // ========================================================================
    nav: NavTexts {
        challenge: "申请挑战",
        issue: "签发证书",
        settings: "设置",
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    challenge: ChallengeTexts {
        title: "申请 DNS 挑战",
        input_label: "输入域名（逗号分隔）",
        placeholder: "example.com, www.example.com",
        success: "成功，请保存下方的请求 ID，签发时需要使用",
        request_id: "请求 ID",
        dns_records: "DNS 记录：",
        no_records: "后端未返回 DNS 记录",
        col_type: "类型",
        col_record: "记录",
        col_value: "值",
    },

    issue: IssueTexts {
        title: "签发 SSL 证书",
        input_label: "输入 ID",
        placeholder: "请输入 ID",
        message: "消息",
        domains: "域名",
        leaf: "叶子证书",
        bundle: "证书链（中间证书）",
        private_key: "私钥",
        private_key_hidden: "（已隐藏，按 Alt+v 显示）",
        exporting: "导出中...",
        details: CertificateDetailTexts {
            subject: "主体",
            issuer: "颁发者",
            san: "备用名称",
            not_before: "生效时间",
            not_after: "到期时间",
            days_remaining: "剩余天数",
            expired: "已过期",
            fingerprint: "SHA-256",
        },
    },

    settings: SettingsTexts {
        title: "设置",
        theme: ThemeTexts {
            label: "主题",
            dark: "深色",
            light: "浅色",
        },
        language: LanguageTexts {
            label: "语言",
        },
        readonly: ReadonlyConfigTexts {
            section: "配置（配置文件 / 环境变量）",
            api_url: "API 地址",
            timeout: "请求超时",
            output_dir: "导出目录",
            seconds: " 秒",
        },
    },

    // ========================================================================
    // 弹窗文本
    // ========================================================================
    modal: ModalTexts {
        export_failed: "导出失败",
        save_failed: "保存设置失败",
    },

    // ========================================================================
    // 其他组件
    // ========================================================================
    status_bar: StatusBarTexts {
        ready: "就绪",
        busy: "已有请求在进行中",
        challenge_received: "挑战已创建",
        certificate_received: "已获取证书",
        request_failed: "请求失败",
        exported: "已导出到",
        export_in_progress: "正在导出，请稍候",
        nothing_to_export: "没有可导出的证书",
        settings_saved: "设置已保存",
    },

    help: HelpTexts {
        title: "帮助",
        global_shortcuts: "全局快捷键",
        form_shortcuts: "表单快捷键",
        close_hint: "按 Esc 关闭帮助",
        actions: HelpActionTexts {
            switch_panel: "切换面板",
            move_up_down: "上下移动",
            confirm: "打开页面",
            back_cancel: "返回/取消",
            help: "帮助（导航面板）",
            quit: "退出",
            submit: "提交",
            clear_input: "清空输入",
            scroll: "滚动结果",
            export: "导出证书文件",
            toggle_key: "显示/隐藏私钥",
        },
    },
};
