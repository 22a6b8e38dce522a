//! 各算法的编解码器
//!
//! 每个编解码器实现 [`PasswordHasher`]：`encode` 生成编码摘要，`verify`
//! 使用摘要中嵌入的参数重新计算并做常量时间比较。编解码器本身不可变，
//! 开销参数在构造时按值传入，`verify` 不会修改任何状态，可以在多个线程间共享。
//!
//! ## 示例
//!
//! ```rust
//! use pwdigest::password::hashers::{PasswordHasher, Pbkdf2Hasher};
//!
//! let hasher = Pbkdf2Hasher::sha256(1000);
//! let encoded = hasher.encode("my_password", "NaCl").unwrap();
//! assert!(encoded.starts_with("pbkdf2_sha256$1000$NaCl$"));
//! assert!(hasher.verify("my_password", &encoded).unwrap());
//! ```

#[cfg(feature = "argon2")]
mod argon2;
#[cfg(feature = "bcrypt")]
mod bcrypt;
mod md5;
mod pbkdf2;
mod sha1;

#[cfg(feature = "argon2")]
pub use self::argon2::Argon2Hasher;
#[cfg(feature = "bcrypt")]
pub use self::bcrypt::BcryptHasher;
pub use self::md5::{Md5Hasher, UnsaltedMd5Hasher};
pub use self::pbkdf2::Pbkdf2Hasher;
pub use self::sha1::Sha1Hasher;

use std::fmt;

use super::algorithm::Algorithm;
use crate::error::Result;

/// 编解码器能力：编码与校验
pub trait PasswordHasher: fmt::Debug + Send + Sync {
    /// 该编解码器处理的算法
    fn algorithm(&self) -> Algorithm;

    /// 将明文密码编码为摘要
    ///
    /// 对同样的输入和参数是确定的；bcrypt 系列例外，它们忽略 `salt`，
    /// 由底层库生成随机盐并嵌入结果。
    fn encode(&self, password: &str, salt: &str) -> Result<String>;

    /// 校验明文密码是否与编码摘要匹配
    ///
    /// 密码不匹配返回 `Ok(false)`；摘要格式错误返回对应的 [`HasherError`](crate::error::HasherError)。
    fn verify(&self, password: &str, encoded: &str) -> Result<bool>;

    /// 摘要使用的参数是否与本编解码器的参数不同（需要重新哈希）
    ///
    /// 无法解析时返回 `true`。
    fn must_update(&self, _encoded: &str) -> bool {
        false
    }
}
