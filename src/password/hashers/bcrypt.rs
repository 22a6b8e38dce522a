//! bcrypt / bcrypt_sha256 编解码器
//!
//! 格式：`<algorithm>$<bcrypt 原生编码>`，例如 `bcrypt$$2b$12$<53 字符>`。
//! 盐值由 bcrypt 库生成并嵌入原生编码，`encode` 的 `salt` 参数被忽略。
//! `bcrypt_sha256` 先把密码做 SHA-256 并转为小写十六进制，以绕开 bcrypt 的 72 字节限制。

use super::PasswordHasher;
use crate::crypto::kdf::{bcrypt_hash, bcrypt_verify};
use crate::crypto::sha256_hex;
use crate::error::{HasherError, Result};
use crate::password::algorithm::Algorithm;
use crate::password::format;

/// bcrypt 编解码器
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BcryptHasher {
    algorithm: Algorithm,
    cost: u32,
}

impl BcryptHasher {
    /// `bcrypt`
    pub fn new(cost: u32) -> Self {
        Self {
            algorithm: Algorithm::Bcrypt,
            cost,
        }
    }

    /// `bcrypt_sha256`
    pub fn sha256(cost: u32) -> Self {
        Self {
            algorithm: Algorithm::BcryptSha256,
            cost,
        }
    }

    /// 编码时使用的 cost
    pub fn cost(&self) -> u32 {
        self.cost
    }

    fn prepare(&self, password: &str) -> String {
        match self.algorithm {
            Algorithm::BcryptSha256 => sha256_hex(password.as_bytes()),
            _ => password.to_string(),
        }
    }

    /// 拆出原生编码部分
    fn native<'a>(&self, encoded: &'a str) -> Result<&'a str> {
        let id = self.algorithm.identifier();
        let arity = self.algorithm.arity();
        let parts = format::splitn(encoded, arity);
        if parts.len() != arity {
            return Err(HasherError::ComponentMismatch {
                algorithm: id,
                expected: arity,
                actual: parts.len(),
            }
            .into());
        }
        format::expect_identifier(id, parts[0])?;
        Ok(parts[1])
    }
}

impl PasswordHasher for BcryptHasher {
    fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn encode(&self, password: &str, _salt: &str) -> Result<String> {
        let native = bcrypt_hash(self.prepare(password).as_bytes(), self.cost)?;
        Ok(format!("{}${}", self.algorithm.identifier(), native))
    }

    fn verify(&self, password: &str, encoded: &str) -> Result<bool> {
        let native = self.native(encoded)?;
        bcrypt_verify(
            self.algorithm.identifier(),
            self.prepare(password).as_bytes(),
            native,
        )
    }

    fn must_update(&self, encoded: &str) -> bool {
        // 原生编码为 `$2b$<cost>$...`
        let cost = self
            .native(encoded)
            .ok()
            .and_then(|native| native.split('$').nth(2))
            .and_then(|cost| cost.parse::<u32>().ok());

        match cost {
            Some(cost) => cost < self.cost,
            None => true,
        }
    }
}
