//! 密码学工具模块
//!
//! ## 功能
//!
//! - **常量时间比较**: 比较重新计算的摘要与存储的摘要
//! - **原语封装**: PBKDF2、Argon2i、bcrypt 以及 MD5/SHA1/SHA-256 摘要
//!
//! ## 示例
//!
//! ```rust
//! use pwdigest::crypto::{constant_time_eq, kdf::md5_hex};
//!
//! let digest = md5_hex(&["salt".as_bytes(), "password".as_bytes()]);
//! let expected = md5_hex(&["saltpassword".as_bytes()]);
//! assert!(constant_time_eq(digest.as_bytes(), expected.as_bytes()));
//! ```

pub mod compare;
pub mod kdf;

pub use compare::{constant_time_eq, constant_time_eq_str};
pub use kdf::{
    ARGON2_MAX_PARALLELISM, ARGON2_MIN_HASH_LENGTH, ARGON2_MIN_SALT_LENGTH, ARGON2_VERSION,
    Argon2Params, Pbkdf2Prf, md5_hex, pbkdf2_hmac, sha1_hex, sha256_hex,
};
