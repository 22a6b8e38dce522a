//! MD5 编解码器（弱算法，仅为兼容旧数据）
//!
//! - `md5`: `md5$<salt>$<hex digest>`，摘要为 `MD5(salt + password)`
//! - `unsalted_md5`: 不带前缀的 32 位十六进制摘要；校验时也接受旧的 `md5$$<hex digest>`

use super::PasswordHasher;
use crate::crypto::{constant_time_eq_str, md5_hex};
use crate::error::Result;
use crate::password::algorithm::Algorithm;
use crate::password::format;

/// 旧格式 `md5$$<32 hex>` 的前缀
const LEGACY_PREFIX: &str = "md5$$";

/// 加盐 MD5
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Md5Hasher;

impl Md5Hasher {
    /// 创建加盐 MD5 编解码器
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Md5Hasher {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Md5
    }

    fn encode(&self, password: &str, salt: &str) -> Result<String> {
        let id = self.algorithm().identifier();
        format::check_salt(id, salt)?;

        let digest = md5_hex(&[salt.as_bytes(), password.as_bytes()]);
        Ok(format!("{}${}${}", id, salt, digest))
    }

    fn verify(&self, password: &str, encoded: &str) -> Result<bool> {
        let id = self.algorithm().identifier();
        let parts = format::fields(id, encoded, self.algorithm().arity())?;
        format::expect_identifier(id, parts[0])?;

        let recomputed = self.encode(password, parts[1])?;
        Ok(constant_time_eq_str(&recomputed, encoded))
    }
}

/// 不加盐 MD5
///
/// 编码结果没有算法前缀，只有 32 位十六进制摘要；传入的盐值被忽略。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnsaltedMd5Hasher;

impl UnsaltedMd5Hasher {
    /// 创建不加盐 MD5 编解码器
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for UnsaltedMd5Hasher {
    fn algorithm(&self) -> Algorithm {
        Algorithm::UnsaltedMd5
    }

    fn encode(&self, password: &str, _salt: &str) -> Result<String> {
        Ok(md5_hex(&[password.as_bytes()]))
    }

    fn verify(&self, password: &str, encoded: &str) -> Result<bool> {
        let digest = match encoded.strip_prefix(LEGACY_PREFIX) {
            Some(rest) if encoded.len() == LEGACY_PREFIX.len() + 32 => rest,
            _ => encoded,
        };
        let id = self.algorithm().identifier();
        format::fields(id, digest, self.algorithm().arity())?;

        let recomputed = self.encode(password, "")?;
        Ok(constant_time_eq_str(&recomputed, digest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HasherErrorKind;

    const PASSWORD: &str = "this-is-my-password";

    #[test]
    fn test_md5_encode_vector() {
        let encoded = Md5Hasher::new().encode(PASSWORD, "NMxMaHPlUEr7").unwrap();
        assert_eq!(encoded, "md5$NMxMaHPlUEr7$5b7913a35d0cfbbd3e5ef243c84eadd1");
    }

    #[test]
    fn test_md5_verify() {
        let hasher = Md5Hasher::new();
        let encoded = "md5$NMxMaHPlUEr7$5b7913a35d0cfbbd3e5ef243c84eadd1";
        assert!(hasher.verify(PASSWORD, encoded).unwrap());
        assert!(!hasher.verify("wrong", encoded).unwrap());
    }

    #[test]
    fn test_md5_salt_with_delimiter() {
        let err = Md5Hasher::new().encode(PASSWORD, "NMx$aHPl").unwrap_err();
        assert_eq!(err.hasher_kind(), Some(HasherErrorKind::SaltContainsDelimiter));
    }

    #[test]
    fn test_md5_errors() {
        let hasher = Md5Hasher::new();
        let err = hasher.verify(PASSWORD, "md5$5b7913a35d0cfbbd3e5ef243c84eadd1").unwrap_err();
        assert_eq!(err.hasher_kind(), Some(HasherErrorKind::ComponentMismatch));

        let err = hasher.verify(PASSWORD, "sha1$salt$abc").unwrap_err();
        assert_eq!(err.hasher_kind(), Some(HasherErrorKind::AlgorithmMismatch));
    }

    #[test]
    fn test_unsalted_md5_encode_vector() {
        let encoded = UnsaltedMd5Hasher::new().encode(PASSWORD, "ignored").unwrap();
        assert_eq!(encoded, "d24c80177269fb85874b1361e6b71fb4");
    }

    #[test]
    fn test_unsalted_md5_verify_both_forms() {
        let hasher = UnsaltedMd5Hasher::new();
        assert!(hasher.verify(PASSWORD, "d24c80177269fb85874b1361e6b71fb4").unwrap());
        assert!(hasher.verify(PASSWORD, "md5$$d24c80177269fb85874b1361e6b71fb4").unwrap());
        assert!(!hasher.verify("wrong", "md5$$d24c80177269fb85874b1361e6b71fb4").unwrap());
    }

    #[test]
    fn test_unsalted_md5_rejects_extra_fields() {
        let err = UnsaltedMd5Hasher::new()
            .verify(PASSWORD, "md5$salt$d24c80177269fb85874b1361e6b71fb4")
            .unwrap_err();
        assert_eq!(err.hasher_kind(), Some(HasherErrorKind::ComponentMismatch));
    }
}
