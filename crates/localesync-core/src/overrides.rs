//! Manually curated translations that bypass the translation backend.

use std::collections::BTreeMap;

/// Built-in English → Simplified Chinese overrides for short UI labels that
/// machine translation gets wrong out of context.
const BUILTIN: &[(&str, &str)] = &[
    ("auth.pair_button", "配对"),
    ("common.actions", "操作"),
    ("common.name", "名称"),
    ("common.save", "保存"),
    ("common.status", "状态"),
    ("cost.request_count", "请求数"),
    ("cost.requests", "请求数"),
    ("cron.enable", "启用"),
    ("dashboard.status", "状态"),
    ("health.component", "组件"),
    ("health.status", "状态"),
    ("integrations.active", "已启用"),
    ("integrations.available", "可用"),
    ("integrations.status", "状态"),
    ("memory.key", "键"),
    ("nav.agent", "助手"),
    ("nav.doctor", "诊断"),
    ("nav.memory", "记忆库"),
    ("tools.name", "名称"),
];

/// Read-only key → fixed target text table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    entries: BTreeMap<String, String>,
}

impl Overrides {
    /// The built-in table.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// The built-in table with `extra` layered on top; `extra` wins on
    /// conflicting keys.
    pub fn with_builtin(extra: &BTreeMap<String, String>) -> Self {
        let mut table = Self::builtin();
        table
            .entries
            .extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        table
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}
