//! Argon2 编解码器
//!
//! 格式：`argon2$argon2i$v=19$m=<memory>,t=<time>,p=<threads>$<base64 salt>$<base64 hash>`，
//! base64 不带填充。调用方提供的盐值按原始字节参与运算。

use base64::{Engine, engine::general_purpose::STANDARD_NO_PAD};

use super::PasswordHasher;
use crate::crypto::kdf::argon2i;
use crate::crypto::{
    ARGON2_MIN_HASH_LENGTH, ARGON2_MIN_SALT_LENGTH, ARGON2_VERSION, Argon2Params,
    constant_time_eq_str,
};
use crate::error::{HasherError, Result};
use crate::password::algorithm::Algorithm;
use crate::password::format;

const ID: &str = "argon2";
const VARIANT: &str = "argon2i";

/// Argon2i 编解码器
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argon2Hasher {
    params: Argon2Params,
}

/// 从编码摘要中解析出的各部分
struct Argon2Parts<'a> {
    params: Argon2Params,
    salt: Vec<u8>,
    hash: &'a str,
}

impl Argon2Hasher {
    /// 使用指定参数创建编解码器
    pub fn new(params: Argon2Params) -> Self {
        Self { params }
    }

    /// 编码时使用的参数
    pub fn params(&self) -> &Argon2Params {
        &self.params
    }

    fn parse<'a>(&self, encoded: &'a str) -> Result<Argon2Parts<'a>> {
        let parts = format::fields(ID, encoded, self.algorithm().arity())?;
        format::expect_identifier(ID, parts[0])?;
        format::expect_identifier(VARIANT, parts[1])?;

        let version: u32 = format::parse_keyed(ID, "v", parts[2])?;
        if version != ARGON2_VERSION {
            return Err(HasherError::IncompatibleVersion {
                expected: ARGON2_VERSION,
                actual: version,
            }
            .into());
        }

        let costs: Vec<&str> = parts[3].split(',').collect();
        if costs.len() != 3 {
            return Err(HasherError::ComponentUnreadable {
                algorithm: ID,
                component: "params",
            }
            .into());
        }

        let salt = STANDARD_NO_PAD
            .decode(parts[4])
            .ok()
            .filter(|salt| salt.len() >= ARGON2_MIN_SALT_LENGTH)
            .ok_or(HasherError::ComponentUnreadable {
                algorithm: ID,
                component: "salt",
            })?;

        let hash = parts[5];
        if hash.len() * 3 / 4 < ARGON2_MIN_HASH_LENGTH {
            return Err(HasherError::ComponentUnreadable {
                algorithm: ID,
                component: "hash",
            }
            .into());
        }
        let params = Argon2Params {
            memory_kib: format::parse_keyed(ID, "m", costs[0])?,
            iterations: format::parse_keyed(ID, "t", costs[1])?,
            parallelism: format::parse_keyed(ID, "p", costs[2])?,
            // 输出长度由摘要字段长度决定，不需要先解码
            hash_length: hash.len() * 3 / 4,
        };

        Ok(Argon2Parts { params, salt, hash })
    }

    fn encode_raw(&self, password: &str, salt: &[u8], params: &Argon2Params) -> Result<String> {
        let hash = argon2i(password.as_bytes(), salt, params)?;
        Ok(format!(
            "{}${}$v={}$m={},t={},p={}${}${}",
            ID,
            VARIANT,
            ARGON2_VERSION,
            params.memory_kib,
            params.iterations,
            params.parallelism,
            STANDARD_NO_PAD.encode(salt),
            STANDARD_NO_PAD.encode(hash)
        ))
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new(Argon2Params::default())
    }
}

impl PasswordHasher for Argon2Hasher {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Argon2
    }

    fn encode(&self, password: &str, salt: &str) -> Result<String> {
        if salt.len() < ARGON2_MIN_SALT_LENGTH {
            return Err(HasherError::SaltTooShort {
                algorithm: ID,
                min: ARGON2_MIN_SALT_LENGTH,
            }
            .into());
        }
        self.encode_raw(password, salt.as_bytes(), &self.params)
    }

    fn verify(&self, password: &str, encoded: &str) -> Result<bool> {
        let parts = self.parse(encoded)?;
        let hash = argon2i(password.as_bytes(), &parts.salt, &parts.params)?;
        Ok(constant_time_eq_str(
            &STANDARD_NO_PAD.encode(hash),
            parts.hash,
        ))
    }

    fn must_update(&self, encoded: &str) -> bool {
        match self.parse(encoded) {
            Ok(parts) => parts.params != self.params,
            Err(_) => true,
        }
    }
}
