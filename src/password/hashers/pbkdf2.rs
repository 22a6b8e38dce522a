//! PBKDF2 编解码器
//!
//! 格式：`<algorithm>$<iterations>$<salt>$<base64 hash>`，base64 为带填充的标准编码。

use base64::{Engine, engine::general_purpose::STANDARD};

use super::PasswordHasher;
use crate::crypto::{Pbkdf2Prf, constant_time_eq_str, pbkdf2_hmac};
use crate::error::{HasherError, Result};
use crate::password::algorithm::Algorithm;
use crate::password::format;

/// PBKDF2-HMAC-SHA1 / PBKDF2-HMAC-SHA256
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pbkdf2Hasher {
    prf: Pbkdf2Prf,
    iterations: u32,
}

impl Pbkdf2Hasher {
    /// `pbkdf2_sha1`
    pub fn sha1(iterations: u32) -> Self {
        Self {
            prf: Pbkdf2Prf::Sha1,
            iterations,
        }
    }

    /// `pbkdf2_sha256`
    pub fn sha256(iterations: u32) -> Self {
        Self {
            prf: Pbkdf2Prf::Sha256,
            iterations,
        }
    }

    /// 编码时使用的迭代次数
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    fn identifier(&self) -> &'static str {
        self.algorithm().identifier()
    }

    fn encode_with(&self, password: &str, salt: &str, iterations: u32) -> Result<String> {
        format::check_salt(self.identifier(), salt)?;

        let derived = pbkdf2_hmac(self.prf, password.as_bytes(), salt.as_bytes(), iterations)?;
        Ok(format!(
            "{}${}${}${}",
            self.identifier(),
            iterations,
            salt,
            STANDARD.encode(derived)
        ))
    }

    /// 解析摘要中的迭代次数
    fn parse_iterations<'a>(&self, encoded: &'a str) -> Result<(u32, Vec<&'a str>)> {
        let id = self.identifier();
        let parts = format::fields(id, encoded, self.algorithm().arity())?;
        format::expect_identifier(id, parts[0])?;

        let iterations: u32 = format::parse_number(id, "iterations", parts[1])?;
        if iterations == 0 {
            return Err(HasherError::ComponentUnreadable {
                algorithm: id,
                component: "iterations",
            }
            .into());
        }
        Ok((iterations, parts))
    }
}

impl PasswordHasher for Pbkdf2Hasher {
    fn algorithm(&self) -> Algorithm {
        match self.prf {
            Pbkdf2Prf::Sha1 => Algorithm::Pbkdf2Sha1,
            Pbkdf2Prf::Sha256 => Algorithm::Pbkdf2Sha256,
        }
    }

    fn encode(&self, password: &str, salt: &str) -> Result<String> {
        self.encode_with(password, salt, self.iterations)
    }

    fn verify(&self, password: &str, encoded: &str) -> Result<bool> {
        let (iterations, parts) = self.parse_iterations(encoded)?;
        let recomputed = self.encode_with(password, parts[2], iterations)?;
        Ok(constant_time_eq_str(&recomputed, encoded))
    }

    fn must_update(&self, encoded: &str) -> bool {
        match self.parse_iterations(encoded) {
            Ok((iterations, _)) => iterations != self.iterations,
            Err(_) => true,
        }
    }
}
