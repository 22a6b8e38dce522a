//! 密码摘要模块
//!
//! 读写 `<algorithm>$<field>$...` 格式的密码摘要，兼容 Django 的存储格式。
//!
//! ## 支持的算法
//!
//! | 标识符 | 说明 |
//! |---|---|
//! | `pbkdf2_sha256` | 默认算法 |
//! | `pbkdf2_sha1` | |
//! | `argon2` | Argon2i v=19（需启用 `argon2` feature） |
//! | `bcrypt` / `bcrypt_sha256` | 需启用 `bcrypt` feature |
//! | `md5` / `unsalted_md5` / `sha1` / `unsalted_sha1` | 弱算法，仅用于读取旧数据 |
//! | `crypt` | 可识别，但没有实现 |
//!
//! ## 示例
//!
//! ```rust
//! use pwdigest::password::{check_password, identify_hasher, make_password};
//!
//! let encoded = make_password("my_password", "", "default").unwrap();
//! assert_eq!(identify_hasher(&encoded), "pbkdf2_sha256");
//! assert!(check_password("my_password", &encoded).unwrap());
//! assert!(!check_password("not_my_password", &encoded).unwrap());
//! ```
//!
//! ### 不可用密码
//!
//! ```rust
//! use pwdigest::password::{check_password, is_password_usable, make_password};
//!
//! let disabled = make_password("", "", "default").unwrap();
//! assert!(disabled.starts_with('!'));
//! assert!(!is_password_usable(&disabled));
//! assert!(!check_password("", &disabled).unwrap());
//! ```

pub mod algorithm;
pub mod config;
pub mod format;
pub mod hashers;
mod registry;

pub use algorithm::Algorithm;
pub use config::{
    DEFAULT_BCRYPT_COST, DEFAULT_HASHER, DEFAULT_PBKDF2_ITERATIONS, DEFAULT_SALT_LENGTH,
    PasswordConfig, UNUSABLE_PASSWORD_PREFIX, UNUSABLE_PASSWORD_SUFFIX_LENGTH,
};
pub use hashers::PasswordHasher;
pub use registry::{
    HasherRegistry, check_password, identify_hasher, is_hasher_implemented, is_password_usable,
    is_valid_hasher, is_weak_hasher, make_password,
};
