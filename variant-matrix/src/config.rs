use crate::key::CombinationKeyMode;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};

/// 变体编辑器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | VARIANT_MAX_OPTION_GROUPS | 3 | 选项组上限 |
/// | VARIANT_KEY_MODE | sorted | 组合 ID 构造方式 (positional / sorted) |
/// | VARIANT_ID_LENGTH | 8 | 新选项/选项组 ID 长度 |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Hard cap on option groups per product
    pub max_option_groups: usize,
    /// Combination identifier construction
    pub key_mode: CombinationKeyMode,
    /// Length of generated option/group ids
    pub id_length: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_option_groups: 3,
            key_mode: CombinationKeyMode::Sorted,
            id_length: 8,
        }
    }
}

impl EngineConfig {
    /// 从环境变量加载配置
    ///
    /// 未设置或无法解析时使用默认值
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key/value source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            max_option_groups: parse_or(
                &lookup,
                "VARIANT_MAX_OPTION_GROUPS",
                defaults.max_option_groups,
            ),
            key_mode: parse_or(&lookup, "VARIANT_KEY_MODE", defaults.key_mode),
            id_length: parse_or(&lookup, "VARIANT_ID_LENGTH", defaults.id_length),
        }
        .sanitized()
    }

    /// Replace out-of-range fields with their defaults
    ///
    /// A zero id length would hand every value the same empty id.
    pub fn sanitized(self) -> Self {
        if self.validate().is_ok() {
            return self;
        }
        let defaults = Self::default();
        Self {
            max_option_groups: positive_or(
                "max_option_groups",
                self.max_option_groups,
                defaults.max_option_groups,
            ),
            id_length: positive_or("id_length", self.id_length, defaults.id_length),
            ..self
        }
    }

    pub fn with_key_mode(mut self, key_mode: CombinationKeyMode) -> Self {
        self.key_mode = key_mode;
        self
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.max_option_groups == 0 {
            return Err(AppError::config("max_option_groups must be positive")
                .with_detail("field", "max_option_groups"));
        }
        if self.id_length == 0 {
            return Err(
                AppError::config("id_length must be positive").with_detail("field", "id_length")
            );
        }
        Ok(())
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Invalid config value, using default {default}");
            default
        }),
        None => default,
    }
}

fn positive_or(field: &str, value: usize, default: usize) -> usize {
    if value == 0 {
        tracing::warn!(field, "Config value must be positive, using default {default}");
        default
    } else {
        value
    }
}
