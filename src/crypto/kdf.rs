//! 密钥派生与摘要原语
//!
//! 对外部密码学库的薄封装，编解码器只通过这里调用底层原语：
//!
//! - **PBKDF2**: HMAC-SHA1 / HMAC-SHA256
//! - **Argon2i**: 内存硬密钥派生（需启用 `argon2` feature）
//! - **bcrypt**: cost 因子哈希（需启用 `bcrypt` feature）
//! - **MD5 / SHA1 / SHA-256**: 十六进制摘要
//!
//! 底层库返回的错误统一包装为 [`CryptoError::PrimitiveFailed`](crate::error::CryptoError)。
//!
//! ## 示例
//!
//! ```rust
//! use pwdigest::crypto::kdf::{pbkdf2_hmac, Pbkdf2Prf};
//!
//! let dk = pbkdf2_hmac(Pbkdf2Prf::Sha256, b"password", b"salt", 1).unwrap();
//! assert_eq!(dk.len(), 32);
//! ```

use hmac::Hmac;
use md5::Md5;
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use sha2::Sha256;

use crate::error::{Error, Result};

/// Argon2 格式版本（0x13）
pub const ARGON2_VERSION: u32 = 0x13;

/// Argon2 允许的最短盐值（字节）
pub const ARGON2_MIN_SALT_LENGTH: usize = 8;

/// Argon2 允许的最短输出（字节）
pub const ARGON2_MIN_HASH_LENGTH: usize = 4;

/// Argon2 允许的最大并行度（lane 数）
pub const ARGON2_MAX_PARALLELISM: u32 = 0xFF_FFFF;

/// PBKDF2 使用的伪随机函数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pbkdf2Prf {
    /// HMAC-SHA1，输出 20 字节
    Sha1,
    /// HMAC-SHA256，输出 32 字节
    Sha256,
}

impl Pbkdf2Prf {
    /// 派生密钥长度，等于底层哈希的输出长度
    pub fn output_length(&self) -> usize {
        match self {
            Pbkdf2Prf::Sha1 => 20,
            Pbkdf2Prf::Sha256 => 32,
        }
    }
}

/// 使用 PBKDF2-HMAC 派生密钥
///
/// # Errors
///
/// `iterations` 为 0 或底层库拒绝输出长度时返回错误。
pub fn pbkdf2_hmac(
    prf: Pbkdf2Prf,
    password: &[u8],
    salt: &[u8],
    iterations: u32,
) -> Result<Vec<u8>> {
    if iterations == 0 {
        return Err(Error::primitive("pbkdf2", "iterations must be greater than 0"));
    }

    let mut out = vec![0u8; prf.output_length()];
    match prf {
        Pbkdf2Prf::Sha1 => pbkdf2::pbkdf2::<Hmac<Sha1>>(password, salt, iterations, &mut out),
        Pbkdf2Prf::Sha256 => pbkdf2::pbkdf2::<Hmac<Sha256>>(password, salt, iterations, &mut out),
    }
    .map_err(|e| Error::primitive("pbkdf2", e))?;

    Ok(out)
}

/// Argon2 参数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Argon2Params {
    /// 内存开销（KiB）
    pub memory_kib: u32,
    /// 迭代次数（时间开销）
    pub iterations: u32,
    /// 并行度（lane 数）
    pub parallelism: u32,
    /// 输出摘要长度（字节）
    pub hash_length: usize,
}

impl Default for Argon2Params {
    fn default() -> Self {
        Self {
            memory_kib: 512,
            iterations: 2,
            parallelism: 2,
            hash_length: 16,
        }
    }
}

/// 使用 Argon2i (v=19) 派生摘要
///
/// # Errors
///
/// 参数超出 Argon2 允许范围（如盐值少于 8 字节、输出少于 4 字节）时返回错误。
#[cfg(feature = "argon2")]
pub fn argon2i(password: &[u8], salt: &[u8], params: &Argon2Params) -> Result<Vec<u8>> {
    use argon2::{Algorithm, Argon2, Params, Version};

    let argon2_params = Params::new(
        params.memory_kib,
        params.iterations,
        params.parallelism,
        Some(params.hash_length),
    )
    .map_err(|e| Error::primitive("argon2", e))?;

    let mut out = vec![0u8; params.hash_length];
    Argon2::new(Algorithm::Argon2i, Version::V0x13, argon2_params)
        .hash_password_into(password, salt, &mut out)
        .map_err(|e| Error::primitive("argon2", e))?;

    Ok(out)
}

/// 使用 bcrypt 哈希密码，返回库原生的 `$2b$<cost>$...` 编码
///
/// 盐值由 bcrypt 库内部随机生成。
#[cfg(feature = "bcrypt")]
pub fn bcrypt_hash(password: &[u8], cost: u32) -> Result<String> {
    bcrypt::hash(password, cost).map_err(|e| Error::primitive("bcrypt", e))
}

/// 使用 bcrypt 校验密码
///
/// 原生编码的前缀、cost 或结构无法解析时返回 `ComponentUnreadable`；
/// 摘要主体无法解码时视为不匹配。
#[cfg(feature = "bcrypt")]
pub fn bcrypt_verify(algorithm: &'static str, password: &[u8], hash: &str) -> Result<bool> {
    use crate::error::HasherError;
    use bcrypt::BcryptError;

    match bcrypt::verify(password, hash) {
        Ok(valid) => Ok(valid),
        Err(BcryptError::InvalidCost(_) | BcryptError::CostNotAllowed(_)) => {
            Err(HasherError::ComponentUnreadable {
                algorithm,
                component: "cost",
            }
            .into())
        }
        Err(BcryptError::InvalidPrefix(_) | BcryptError::InvalidHash(_)) => {
            Err(HasherError::ComponentUnreadable {
                algorithm,
                component: "hash",
            }
            .into())
        }
        Err(e) => {
            tracing::debug!(algorithm, error = %e, "bcrypt digest body rejected");
            Ok(false)
        }
    }
}

/// 计算各段数据依次拼接后的 MD5，返回小写十六进制
pub fn md5_hex(parts: &[&[u8]]) -> String {
    digest_hex::<Md5>(parts)
}

/// 计算各段数据依次拼接后的 SHA1，返回小写十六进制
pub fn sha1_hex(parts: &[&[u8]]) -> String {
    digest_hex::<Sha1>(parts)
}

/// 计算 SHA-256，返回小写十六进制（bcrypt_sha256 的预哈希）
pub fn sha256_hex(data: &[u8]) -> String {
    digest_hex::<Sha256>(&[data])
}

fn digest_hex<D: Digest>(parts: &[&[u8]]) -> String {
    let mut hasher = D::new();
    for part in parts {
        hasher.update(part);
    }
    hex_encode(&hasher.finalize())
}

/// 将字节数组编码为十六进制字符串
fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pbkdf2_sha1_rfc6070() {
        // RFC 6070 测试向量
        let dk = pbkdf2_hmac(Pbkdf2Prf::Sha1, b"password", b"salt", 2).unwrap();
        assert_eq!(hex_encode(&dk), "ea6c014dc72d6f8ccd1ed92ace1d41f0d8de8957");
    }

    #[test]
    fn test_pbkdf2_sha256_vector() {
        let dk = pbkdf2_hmac(Pbkdf2Prf::Sha256, b"password", b"salt", 1).unwrap();
        assert_eq!(
            hex_encode(&dk),
            "120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b"
        );
    }

    #[test]
    fn test_pbkdf2_zero_iterations() {
        let result = pbkdf2_hmac(Pbkdf2Prf::Sha256, b"password", b"salt", 0);
        assert!(matches!(result, Err(Error::Crypto(_))));
    }

    #[test]
    fn test_digests() {
        assert_eq!(md5_hex(&["".as_bytes()]), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(md5_hex(&["ab".as_bytes(), "c".as_bytes()]), md5_hex(&["abc".as_bytes()]));
        assert_eq!(sha1_hex(&["abc".as_bytes()]), "a9993e364706816aba3e25717850c26c9cd0d89d");
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_hex_encode() {
        assert_eq!(hex_encode(&[0x00, 0xff, 0x10]), "00ff10");
        assert_eq!(hex_encode(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
    }

    #[test]
    #[cfg(feature = "argon2")]
    fn test_argon2i_output_length() {
        let params = Argon2Params::default();
        let out = argon2i(b"password", b"somesalt", &params).unwrap();
        assert_eq!(out.len(), 16);
        assert_eq!(out, argon2i(b"password", b"somesalt", &params).unwrap());
    }

    #[test]
    #[cfg(feature = "argon2")]
    fn test_argon2i_short_salt_is_wrapped() {
        let result = argon2i(b"password", b"short", &Argon2Params::default());
        assert!(matches!(result, Err(Error::Crypto(_))));
    }

    #[test]
    #[cfg(feature = "bcrypt")]
    fn test_bcrypt_hash_and_verify() {
        let hash = bcrypt_hash(b"password", 4).unwrap();
        assert!(hash.starts_with("$2b$04$"));
        assert!(bcrypt_verify("bcrypt", b"password", &hash).unwrap());
        assert!(!bcrypt_verify("bcrypt", b"wrong", &hash).unwrap());
    }

    #[test]
    #[cfg(feature = "bcrypt")]
    fn test_bcrypt_verify_malformed() {
        use crate::error::HasherError;

        let result = bcrypt_verify("bcrypt", b"password", "$2b$xx$abc");
        assert!(matches!(
            result,
            Err(Error::Hasher(HasherError::ComponentUnreadable { .. }))
        ));
    }
}
