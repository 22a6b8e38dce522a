//! 密码哈希配置
//!
//! [`PasswordConfig`] 决定新摘要使用的默认算法和各算法的开销参数。
//! 校验摘要时始终使用摘要中嵌入的参数，配置只影响编码。

use serde::{Deserialize, Serialize};

use super::algorithm::Algorithm;
use crate::crypto::{ARGON2_MAX_PARALLELISM, ARGON2_MIN_HASH_LENGTH, Argon2Params};
use crate::error::{ConfigError, Result};

/// 不可用密码的前缀标记
pub const UNUSABLE_PASSWORD_PREFIX: char = '!';

/// 不可用密码标记之后的随机串长度
pub const UNUSABLE_PASSWORD_SUFFIX_LENGTH: usize = 40;

/// 默认盐值长度
pub const DEFAULT_SALT_LENGTH: usize = 12;

/// 表示"使用配置的默认算法"的哈希器标识
pub const DEFAULT_HASHER: &str = "default";

/// 默认 PBKDF2 迭代次数
pub const DEFAULT_PBKDF2_ITERATIONS: u32 = 180_000;

/// 默认 bcrypt cost
pub const DEFAULT_BCRYPT_COST: u32 = 12;

/// 密码哈希配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordConfig {
    /// `make_password` 收到 `"default"` 时使用的算法
    pub default_algorithm: Algorithm,
    /// 调用方未提供盐值时生成的随机盐长度
    pub salt_length: usize,
    /// PBKDF2 迭代次数
    pub pbkdf2_iterations: u32,
    /// bcrypt cost (4-31)
    pub bcrypt_cost: u32,
    /// Argon2 参数
    pub argon2: Argon2Params,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            default_algorithm: Algorithm::Pbkdf2Sha256,
            salt_length: DEFAULT_SALT_LENGTH,
            pbkdf2_iterations: DEFAULT_PBKDF2_ITERATIONS,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            argon2: Argon2Params::default(),
        }
    }
}

impl PasswordConfig {
    /// 创建新的配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置默认算法
    pub fn with_default_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.default_algorithm = algorithm;
        self
    }

    /// 设置随机盐长度
    pub fn with_salt_length(mut self, length: usize) -> Self {
        self.salt_length = length;
        self
    }

    /// 设置 PBKDF2 迭代次数
    pub fn with_pbkdf2_iterations(mut self, iterations: u32) -> Self {
        self.pbkdf2_iterations = iterations;
        self
    }

    /// 设置 bcrypt cost
    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    /// 设置 Argon2 参数
    pub fn with_argon2_params(mut self, params: Argon2Params) -> Self {
        self.argon2 = params;
        self
    }

    /// 检查配置是否可用
    ///
    /// # Errors
    ///
    /// 任一参数超出范围，或默认算法在当前构建中没有实现时返回
    /// [`ConfigError::InvalidValue`]。
    pub fn validate(&self) -> Result<()> {
        if !self.default_algorithm.is_implemented() {
            return Err(invalid(
                "default_algorithm",
                format!("{} is not implemented", self.default_algorithm),
            ));
        }
        if self.salt_length == 0 {
            return Err(invalid("salt_length", "must be greater than 0"));
        }
        if self.pbkdf2_iterations == 0 {
            return Err(invalid("pbkdf2_iterations", "must be greater than 0"));
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(invalid("bcrypt_cost", "must be between 4 and 31"));
        }
        if self.argon2.iterations == 0 {
            return Err(invalid("argon2.iterations", "must be greater than 0"));
        }
        if !(1..=ARGON2_MAX_PARALLELISM).contains(&self.argon2.parallelism) {
            return Err(invalid(
                "argon2.parallelism",
                format!("must be between 1 and {ARGON2_MAX_PARALLELISM}"),
            ));
        }
        if u64::from(self.argon2.memory_kib) < 8 * u64::from(self.argon2.parallelism) {
            return Err(invalid("argon2.memory_kib", "must be at least 8 KiB per lane"));
        }
        if self.argon2.hash_length < ARGON2_MIN_HASH_LENGTH {
            return Err(invalid("argon2.hash_length", "must be at least 4 bytes"));
        }
        Ok(())
    }
}

fn invalid(key: &str, message: impl Into<String>) -> crate::error::Error {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.into(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_default_config() {
        let config = PasswordConfig::default();
        assert_eq!(config.default_algorithm, Algorithm::Pbkdf2Sha256);
        assert_eq!(config.salt_length, 12);
        assert_eq!(config.bcrypt_cost, 12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = PasswordConfig::new()
            .with_default_algorithm(Algorithm::Pbkdf2Sha1)
            .with_salt_length(16)
            .with_pbkdf2_iterations(1000)
            .with_bcrypt_cost(4);

        assert_eq!(config.default_algorithm, Algorithm::Pbkdf2Sha1);
        assert_eq!(config.salt_length, 16);
        assert_eq!(config.pbkdf2_iterations, 1000);
        assert_eq!(config.bcrypt_cost, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_values() {
        let cases = [
            PasswordConfig::new().with_salt_length(0),
            PasswordConfig::new().with_pbkdf2_iterations(0),
            PasswordConfig::new().with_bcrypt_cost(3),
            PasswordConfig::new().with_bcrypt_cost(32),
            PasswordConfig::new().with_default_algorithm(Algorithm::Crypt),
            PasswordConfig::new().with_argon2_params(Argon2Params {
                hash_length: 2,
                ..Argon2Params::default()
            }),
        ];

        for config in cases {
            assert!(matches!(config.validate(), Err(Error::Config(_))));
        }
    }

    #[test]
    fn test_argon2_lane_limits() {
        for json in [
            r#"{"argon2": {"parallelism": 4294967295}}"#,
            r#"{"argon2": {"parallelism": 16777216, "memory_kib": 4294967295}}"#,
            r#"{"argon2": {"parallelism": 0}}"#,
            r#"{"argon2": {"parallelism": 8, "memory_kib": 63}}"#,
        ] {
            let config: PasswordConfig = serde_json::from_str(json).unwrap();
            assert!(matches!(config.validate(), Err(Error::Config(_))), "{json}");
        }

        let config: PasswordConfig =
            serde_json::from_str(r#"{"argon2": {"parallelism": 8, "memory_kib": 64}}"#).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: PasswordConfig =
            serde_json::from_str(r#"{"pbkdf2_iterations": 24000}"#).unwrap();
        assert_eq!(config.pbkdf2_iterations, 24000);
        assert_eq!(config.default_algorithm, Algorithm::Pbkdf2Sha256);
    }

    #[test]
    fn test_serialize_algorithm_identifier() {
        let json = serde_json::to_string(&PasswordConfig::default()).unwrap();
        assert!(json.contains(r#""default_algorithm":"pbkdf2_sha256""#));
    }
}
