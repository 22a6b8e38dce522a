//! 算法标识符
//!
//! [`Algorithm`] 是编码格式中所有历史有效标识符的封闭集合，
//! 同时携带每个算法的静态描述：标识符、字段数、是否弱算法、当前构建是否实现。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, HasherError};

/// 编码摘要中可识别的哈希算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// `argon2`，Argon2i v=19
    Argon2,
    /// `bcrypt`
    Bcrypt,
    /// `bcrypt_sha256`，密码先做 SHA-256（十六进制）再交给 bcrypt
    BcryptSha256,
    /// `crypt`，系统 crypt(3)；可识别但没有实现
    Crypt,
    /// `md5`，加盐 MD5
    Md5,
    /// `pbkdf2_sha1`
    Pbkdf2Sha1,
    /// `pbkdf2_sha256`，默认算法
    Pbkdf2Sha256,
    /// `sha1`，加盐 SHA1
    Sha1,
    /// `unsalted_md5`
    UnsaltedMd5,
    /// `unsalted_sha1`
    UnsaltedSha1,
}

impl Algorithm {
    /// 所有历史有效的算法
    pub const ALL: [Algorithm; 10] = [
        Algorithm::Argon2,
        Algorithm::Bcrypt,
        Algorithm::BcryptSha256,
        Algorithm::Crypt,
        Algorithm::Md5,
        Algorithm::Pbkdf2Sha1,
        Algorithm::Pbkdf2Sha256,
        Algorithm::Sha1,
        Algorithm::UnsaltedMd5,
        Algorithm::UnsaltedSha1,
    ];

    /// 编码格式中使用的标识符
    pub fn identifier(&self) -> &'static str {
        match self {
            Algorithm::Argon2 => "argon2",
            Algorithm::Bcrypt => "bcrypt",
            Algorithm::BcryptSha256 => "bcrypt_sha256",
            Algorithm::Crypt => "crypt",
            Algorithm::Md5 => "md5",
            Algorithm::Pbkdf2Sha1 => "pbkdf2_sha1",
            Algorithm::Pbkdf2Sha256 => "pbkdf2_sha256",
            Algorithm::Sha1 => "sha1",
            Algorithm::UnsaltedMd5 => "unsalted_md5",
            Algorithm::UnsaltedSha1 => "unsalted_sha1",
        }
    }

    /// 按标识符查找算法
    pub fn from_identifier(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.identifier() == id)
    }

    /// 编码摘要按 `$` 切分后的字段数（含标识符字段）
    ///
    /// bcrypt 系列按 2 个字段切分（原生编码整体作为一个字段）；
    /// 无前缀的 `unsalted_md5` 为 1 个字段。
    pub fn arity(&self) -> usize {
        match self {
            Algorithm::Argon2 => 6,
            Algorithm::Bcrypt | Algorithm::BcryptSha256 => 2,
            Algorithm::Crypt | Algorithm::Md5 | Algorithm::Sha1 | Algorithm::UnsaltedSha1 => 3,
            Algorithm::Pbkdf2Sha1 | Algorithm::Pbkdf2Sha256 => 4,
            Algorithm::UnsaltedMd5 => 1,
        }
    }

    /// 是否为已弃用、仅为兼容读取而保留的弱算法
    pub fn is_weak(&self) -> bool {
        matches!(
            self,
            Algorithm::Crypt
                | Algorithm::Md5
                | Algorithm::Sha1
                | Algorithm::UnsaltedMd5
                | Algorithm::UnsaltedSha1
        )
    }

    /// 当前构建是否支持该算法的编码与校验
    pub fn is_implemented(&self) -> bool {
        match self {
            Algorithm::Argon2 => cfg!(feature = "argon2"),
            Algorithm::Bcrypt | Algorithm::BcryptSha256 => cfg!(feature = "bcrypt"),
            Algorithm::Crypt => false,
            _ => true,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_identifier(s).ok_or_else(|| HasherError::InvalidHasher(s.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(Algorithm::from_identifier(algorithm.identifier()), Some(algorithm));
            assert_eq!(algorithm.to_string().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_unknown_identifier() {
        assert_eq!(Algorithm::from_identifier("scrypt"), None);
        assert_eq!(Algorithm::from_identifier(""), None);
        assert!(matches!(
            "PBKDF2_SHA256".parse::<Algorithm>(),
            Err(Error::Hasher(HasherError::InvalidHasher(_)))
        ));
    }

    #[test]
    fn test_weak() {
        assert!(Algorithm::UnsaltedMd5.is_weak());
        assert!(Algorithm::Sha1.is_weak());
        assert!(Algorithm::Crypt.is_weak());
        assert!(!Algorithm::Pbkdf2Sha256.is_weak());
        assert!(!Algorithm::Argon2.is_weak());
    }

    #[test]
    fn test_implemented() {
        assert!(!Algorithm::Crypt.is_implemented());
        assert!(Algorithm::Pbkdf2Sha256.is_implemented());
        assert!(Algorithm::UnsaltedSha1.is_implemented());
        assert_eq!(Algorithm::Argon2.is_implemented(), cfg!(feature = "argon2"));
        assert_eq!(Algorithm::Bcrypt.is_implemented(), cfg!(feature = "bcrypt"));
    }
}
