//! 英文翻译 (en-US)

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
        app_name: "ACME Portal",
        submit: "Submit",
        submitting: "Submitting...",
        error_prefix: "Error:",
        not_configured: "(not configured)",
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
            navigate: "Navigate",
            open: "Open",
            switch_panel: "Switch panel",
            submit: "Submit",
            scroll: "Scroll",
            clear: "Clear",
            export: "Export",
            toggle_key: "Show/hide key",
            switch_option: "Switch",
            back: "Back",
            help: "Help",
            quit: "Quit",
        },
    },

    // ========================================================================
    // 导航栏
    // ========================================================================
    nav: NavTexts {
        challenge: "Challenge",
        issue: "Issue",
        settings: "Settings",
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    challenge: ChallengeTexts {
        title: "Order Challenge",
        input_label: "Input Domains (comma separated)",
        placeholder: "example.com, www.example.com",
        success: "Success – Please save the Request ID below for the Issue process",
        request_id: "Request ID",
        dns_records: "DNS Records:",
        no_records: "No DNS records returned",
        col_type: "Type",
        col_record: "Record",
        col_value: "Value",
    },

    issue: IssueTexts {
        title: "Issue SSL",
        input_label: "Input ID",
        placeholder: "Enter ID",
        message: "Message",
        domains: "Domains",
        leaf: "Leaf Certificate",
        bundle: "Certificate Bundle (Intermediate)",
        private_key: "Private Key",
        private_key_hidden: "(hidden, press Alt+v to show)",
        exporting: "Exporting...",
        details: CertificateDetailTexts {
            subject: "Subject",
            issuer: "Issuer",
            san: "SAN",
            not_before: "Valid from",
            not_after: "Valid until",
            days_remaining: "Days remaining",
            expired: "EXPIRED",
            fingerprint: "SHA-256",
        },
    },

    settings: SettingsTexts {
        title: "Settings",
        theme: ThemeTexts {
            label: "Theme",
            dark: "Dark",
            light: "Light",
        },
        language: LanguageTexts {
            label: "Language",
        },
        readonly: ReadonlyConfigTexts {
            section: "Configuration (config file / environment)",
            api_url: "API URL",
            timeout: "Request timeout",
            output_dir: "Export directory",
            seconds: "s",
        },
    },

    // ========================================================================
    // 弹窗文本
    // ========================================================================
    modal: ModalTexts {
        export_failed: "Export failed",
        save_failed: "Saving settings failed",
    },

    // ========================================================================
    // 其他组件
    // ========================================================================
    status_bar: StatusBarTexts {
        ready: "Ready",
        busy: "A request is already in progress",
        challenge_received: "Challenge created",
        certificate_received: "Certificate received",
        request_failed: "Request failed",
        exported: "Exported to",
        export_in_progress: "Export already in progress",
        nothing_to_export: "No certificate to export",
        settings_saved: "Settings saved",
    },

    help: HelpTexts {
        title: "Help",
        global_shortcuts: "Global shortcuts",
        form_shortcuts: "Form shortcuts",
        close_hint: "Press Esc to close the help",
        actions: HelpActionTexts {
            switch_panel: "Switch panel",
            move_up_down: "Move Up/Down",
            confirm: "Open page",
            back_cancel: "Back/Cancel",
            help: "Help (navigation panel)",
            quit: "Quit",
            submit: "Submit",
            clear_input: "Clear input",
            scroll: "Scroll result",
            export: "Export certificate files",
            toggle_key: "Show/hide private key",
        },
    },
};
