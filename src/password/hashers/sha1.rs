//! SHA1 编解码器（弱算法，仅为兼容旧数据）
//!
//! 两种模式共用 `sha1$<salt>$<hex digest>` 格式：
//!
//! - `sha1`: 摘要为 `SHA1(salt + password)`，盐值必须非空
//! - `unsalted_sha1`: 盐值字段始终为空，摘要为 `SHA1(password)`

use super::PasswordHasher;
use crate::crypto::{constant_time_eq_str, sha1_hex};
use crate::error::{HasherError, Result};
use crate::password::algorithm::Algorithm;
use crate::password::format;

/// 编码摘要中的前导标识符，加盐与不加盐模式相同
const SHA1_PREFIX: &str = "sha1";

/// 加盐 / 不加盐 SHA1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sha1Hasher {
    salted: bool,
}

impl Sha1Hasher {
    /// `sha1`
    pub fn new() -> Self {
        Self { salted: true }
    }

    /// `unsalted_sha1`
    pub fn unsalted() -> Self {
        Self { salted: false }
    }

    /// 是否使用盐值
    pub fn is_salted(&self) -> bool {
        self.salted
    }
}

impl Default for Sha1Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for Sha1Hasher {
    fn algorithm(&self) -> Algorithm {
        if self.salted {
            Algorithm::Sha1
        } else {
            Algorithm::UnsaltedSha1
        }
    }

    fn encode(&self, password: &str, salt: &str) -> Result<String> {
        let salt = if self.salted {
            let id = self.algorithm().identifier();
            if salt.is_empty() {
                return Err(HasherError::SaltEmpty { algorithm: id }.into());
            }
            format::check_salt(id, salt)?;
            salt
        } else {
            ""
        };

        let digest = sha1_hex(&[salt.as_bytes(), password.as_bytes()]);
        Ok(format!("{}${}${}", SHA1_PREFIX, salt, digest))
    }

    fn verify(&self, password: &str, encoded: &str) -> Result<bool> {
        let parts = format::fields(
            self.algorithm().identifier(),
            encoded,
            self.algorithm().arity(),
        )?;
        format::expect_identifier(SHA1_PREFIX, parts[0])?;

        let recomputed = self.encode(password, parts[1])?;
        Ok(constant_time_eq_str(&recomputed, encoded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HasherErrorKind;

    const PASSWORD: &str = "this-is-my-password";

    #[test]
    fn test_sha1_encode_vector() {
        let encoded = Sha1Hasher::new().encode(PASSWORD, "FJkZbdAmXSDF").unwrap();
        assert_eq!(encoded, "sha1$FJkZbdAmXSDF$972db6461472a5345bab667d0255d120e06a3415");
    }

    #[test]
    fn test_sha1_verify() {
        let encoded = "sha1$FJkZbdAmXSDF$972db6461472a5345bab667d0255d120e06a3415";
        assert!(Sha1Hasher::new().verify(PASSWORD, encoded).unwrap());
        assert!(!Sha1Hasher::new().verify("wrong", encoded).unwrap());
    }

    #[test]
    fn test_sha1_salt_rules() {
        let err = Sha1Hasher::new().encode(PASSWORD, "").unwrap_err();
        assert_eq!(err.hasher_kind(), Some(HasherErrorKind::SaltEmpty));

        let err = Sha1Hasher::new().encode(PASSWORD, "FJk$bdAm").unwrap_err();
        assert_eq!(err.hasher_kind(), Some(HasherErrorKind::SaltContainsDelimiter));
    }

    #[test]
    fn test_unsalted_sha1_encode_vector() {
        let hasher = Sha1Hasher::unsalted();
        assert_eq!(
            hasher.encode(PASSWORD, "").unwrap(),
            "sha1$$47a0caaf95db24a7f6701f0681610b9eed7e880f"
        );
        // 盐值被忽略
        assert_eq!(
            hasher.encode(PASSWORD, "FJkZbdAmXSDF").unwrap(),
            "sha1$$47a0caaf95db24a7f6701f0681610b9eed7e880f"
        );
    }

    #[test]
    fn test_unsalted_sha1_verify() {
        let hasher = Sha1Hasher::unsalted();
        let encoded = "sha1$$47a0caaf95db24a7f6701f0681610b9eed7e880f";
        assert!(hasher.verify(PASSWORD, encoded).unwrap());
        assert!(!hasher.verify("wrong", encoded).unwrap());
        assert_eq!(hasher.algorithm(), Algorithm::UnsaltedSha1);
        assert!(!hasher.is_salted());
    }

    #[test]
    fn test_sha1_component_errors() {
        let err = Sha1Hasher::new().verify(PASSWORD, "sha1$abc").unwrap_err();
        assert_eq!(err.hasher_kind(), Some(HasherErrorKind::ComponentMismatch));

        let err = Sha1Hasher::new().verify(PASSWORD, "md5$salt$abc").unwrap_err();
        assert_eq!(err.hasher_kind(), Some(HasherErrorKind::AlgorithmMismatch));
    }
}
