//! # pwdigest
//!
//! 读取、校验并生成 Django 风格的多算法密码摘要。
//!
//! 摘要格式为 `<algorithm>$<field>$...`，第一个字段是算法标识符，
//! 其余字段（迭代次数、cost、盐值、摘要）由各算法自行定义。
//!
//! ## 功能特性
//!
//! - **识别**: 从编码摘要中识别算法，包括没有前缀的旧格式
//! - **校验**: 使用摘要中嵌入的参数重新计算，并做常量时间比较
//! - **生成**: 使用配置的默认算法或指定算法生成新摘要
//! - **不可用密码**: 为禁用的账户生成永远无法通过校验的标记值
//! - **错误分类**: 格式错误以结构化的 [`HasherError`] 返回
//!
//! ## Features
//!
//! - `argon2` - 启用 Argon2i 编解码器（默认启用）
//! - `bcrypt` - 启用 bcrypt / bcrypt_sha256 编解码器（默认启用）
//! - `full` - 启用所有功能
//!
//! 关闭某个 feature 后，对应的标识符仍然有效，但分发时返回 `NotImplemented`。
//!
//! ## 示例
//!
//! ```rust
//! use pwdigest::{check_password, make_password};
//!
//! let encoded = make_password("my_secure_password", "", "default").unwrap();
//! assert!(encoded.starts_with("pbkdf2_sha256$"));
//!
//! assert!(check_password("my_secure_password", &encoded).unwrap());
//! assert!(!check_password("wrong_password", &encoded).unwrap());
//! ```
//!
//! ## 校验已有的 Django 摘要
//!
//! ```rust
//! use pwdigest::check_password;
//!
//! let encoded = "pbkdf2_sha1$24000$zX573SspyROA$eqWjJBui5kY/TRXg2TwvSwA+2wk=";
//! assert!(check_password("test", encoded).unwrap());
//! ```
//!
//! ## 自定义配置
//!
//! ```rust
//! use pwdigest::{Algorithm, HasherRegistry, PasswordConfig};
//!
//! let config = PasswordConfig::new()
//!     .with_default_algorithm(Algorithm::Pbkdf2Sha1)
//!     .with_pbkdf2_iterations(10_000);
//! let registry = HasherRegistry::new(config).unwrap();
//!
//! let encoded = registry.make_password("secret", "NaCl", "default").unwrap();
//! assert!(encoded.starts_with("pbkdf2_sha1$10000$NaCl$"));
//! ```
//!
//! ## 错误处理
//!
//! ```rust
//! use pwdigest::{HasherErrorKind, check_password};
//!
//! let err = check_password("admin", "pbkdf2_sha256$notanumber$salt$hash").unwrap_err();
//! assert_eq!(err.hasher_kind(), Some(HasherErrorKind::ComponentUnreadable));
//! ```

pub mod crypto;
pub mod error;
pub mod password;
pub mod random;

pub use error::{ConfigError, CryptoError, Error, HasherError, HasherErrorKind, Result};

// ============================================================================
// 密码摘要相关导出
// ============================================================================

pub use password::{
    Algorithm, HasherRegistry, PasswordConfig, PasswordHasher, check_password, identify_hasher,
    is_hasher_implemented, is_password_usable, is_valid_hasher, is_weak_hasher, make_password,
};

// ============================================================================
// 工具函数导出
// ============================================================================

pub use crypto::{constant_time_eq, constant_time_eq_str};
pub use random::get_random_string;
