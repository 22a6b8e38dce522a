//! 算法注册表与分发
//!
//! [`HasherRegistry`] 在构建时为每个已实现的算法创建一个编解码器，之后只读。
//! 模块级函数 [`check_password`]、[`make_password`] 使用进程内共享的
//! 默认注册表 [`HasherRegistry::global`]。

use std::collections::HashMap;
use std::sync::LazyLock;

use super::algorithm::Algorithm;
use super::config::{
    DEFAULT_HASHER, PasswordConfig, UNUSABLE_PASSWORD_PREFIX, UNUSABLE_PASSWORD_SUFFIX_LENGTH,
};
use super::format;
#[cfg(feature = "argon2")]
use super::hashers::Argon2Hasher;
#[cfg(feature = "bcrypt")]
use super::hashers::BcryptHasher;
use super::hashers::{Md5Hasher, PasswordHasher, Pbkdf2Hasher, Sha1Hasher, UnsaltedMd5Hasher};
use crate::error::{HasherError, Result};
use crate::random::get_random_string;

static GLOBAL: LazyLock<HasherRegistry> = LazyLock::new(HasherRegistry::default);

/// 旧格式 `md5$$<32 hex>` 的前缀
const UNSALTED_MD5_PREFIX: &str = "md5$$";

/// 旧格式 `sha1$$<40 hex>` 的前缀
const UNSALTED_SHA1_PREFIX: &str = "sha1$$";

/// 算法注册表
///
/// 保存配置以及每个已实现算法的编解码器。构建后不可变，可以在线程间共享。
///
/// ## 示例
///
/// ```rust
/// use pwdigest::password::{HasherRegistry, PasswordConfig};
///
/// let config = PasswordConfig::new().with_pbkdf2_iterations(1000);
/// let registry = HasherRegistry::new(config).unwrap();
///
/// let encoded = registry.make_password("secret", "", "default").unwrap();
/// assert!(encoded.starts_with("pbkdf2_sha256$1000$"));
/// assert!(registry.check_password("secret", &encoded).unwrap());
/// ```
#[derive(Debug)]
pub struct HasherRegistry {
    config: PasswordConfig,
    hashers: HashMap<Algorithm, Box<dyn PasswordHasher>>,
}

impl HasherRegistry {
    /// 使用指定配置创建注册表
    ///
    /// # Errors
    ///
    /// 配置无效时返回 [`ConfigError`](crate::error::ConfigError)。
    pub fn new(config: PasswordConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// 进程内共享的默认注册表
    ///
    /// 第一次访问时使用默认配置创建，之后不再改变。
    pub fn global() -> &'static HasherRegistry {
        &GLOBAL
    }

    fn build(config: PasswordConfig) -> Self {
        let mut codecs: Vec<Box<dyn PasswordHasher>> = Vec::with_capacity(Algorithm::ALL.len());

        #[cfg(feature = "argon2")]
        codecs.push(Box::new(Argon2Hasher::new(config.argon2)));
        #[cfg(feature = "bcrypt")]
        {
            codecs.push(Box::new(BcryptHasher::new(config.bcrypt_cost)));
            codecs.push(Box::new(BcryptHasher::sha256(config.bcrypt_cost)));
        }
        codecs.push(Box::new(Pbkdf2Hasher::sha1(config.pbkdf2_iterations)));
        codecs.push(Box::new(Pbkdf2Hasher::sha256(config.pbkdf2_iterations)));
        codecs.push(Box::new(Md5Hasher::new()));
        codecs.push(Box::new(UnsaltedMd5Hasher::new()));
        codecs.push(Box::new(Sha1Hasher::new()));
        codecs.push(Box::new(Sha1Hasher::unsalted()));

        let hashers = codecs
            .into_iter()
            .map(|codec| (codec.algorithm(), codec))
            .collect();

        Self { config, hashers }
    }

    /// 当前配置
    pub fn config(&self) -> &PasswordConfig {
        &self.config
    }

    /// 获取算法对应的编解码器；算法未实现时返回 `None`
    pub fn hasher(&self, algorithm: Algorithm) -> Option<&dyn PasswordHasher> {
        self.hashers.get(&algorithm).map(|codec| &**codec)
    }

    /// 将标识符解析为编解码器
    fn resolve(&self, id: &str) -> Result<&dyn PasswordHasher> {
        let algorithm = Algorithm::from_identifier(id)
            .ok_or_else(|| HasherError::InvalidHasher(id.to_string()))?;

        self.hasher(algorithm)
            .ok_or_else(|| HasherError::NotImplemented(id.to_string()).into())
    }

    /// 校验明文密码是否与编码摘要匹配
    ///
    /// 不可用的摘要直接返回 `Ok(false)`。
    ///
    /// # Errors
    ///
    /// - 标识符无法识别: [`HasherError::InvalidHasher`]
    /// - 标识符有效但没有实现: [`HasherError::NotImplemented`]
    /// - 摘要格式错误: 编解码器返回的具体错误
    pub fn check_password(&self, password: &str, encoded: &str) -> Result<bool> {
        if !is_password_usable(encoded) {
            tracing::debug!("unusable password, skipping verification");
            return Ok(false);
        }

        let id = identify_hasher(encoded);
        let codec = self.resolve(id)?;
        tracing::debug!(algorithm = id, "verifying password");

        codec.verify(password, encoded).inspect_err(|e| {
            if let Some(kind) = e.hasher_kind() {
                tracing::debug!(algorithm = id, ?kind, "encoded password rejected");
            }
        })
    }

    /// 生成编码摘要
    ///
    /// - `password` 为空时返回不可用密码：`!` 加 40 位随机串
    /// - `salt` 为空时生成配置长度的随机盐
    /// - `hasher` 为 `"default"` 时使用配置的默认算法
    ///
    /// # Errors
    ///
    /// - 标识符无法识别: [`HasherError::InvalidHasher`]
    /// - 标识符有效但没有实现: [`HasherError::NotImplemented`]
    /// - 盐值不合法: [`HasherError::SaltContainsDelimiter`] 等
    pub fn make_password(&self, password: &str, salt: &str, hasher: &str) -> Result<String> {
        if password.is_empty() {
            let suffix = get_random_string(UNUSABLE_PASSWORD_SUFFIX_LENGTH)?;
            return Ok(format!("{}{}", UNUSABLE_PASSWORD_PREFIX, suffix));
        }

        let id = if hasher == DEFAULT_HASHER {
            self.config.default_algorithm.identifier()
        } else {
            hasher
        };
        let codec = self.resolve(id)?;

        if codec.algorithm().is_weak() {
            tracing::warn!(algorithm = id, "encoding password with a weak hasher");
        }

        let generated;
        let salt = if salt.is_empty() {
            generated = get_random_string(self.config.salt_length)?;
            generated.as_str()
        } else {
            salt
        };

        codec.encode(password, salt)
    }

    /// 摘要是否应在下次登录时用当前配置重新生成
    ///
    /// 以下情况返回 `true`：摘要不可用或无法识别、算法不是配置的默认算法、
    /// 开销参数与当前配置不同。只做判断，不会修改任何数据。
    pub fn needs_rehash(&self, encoded: &str) -> bool {
        if !is_password_usable(encoded) {
            return true;
        }

        let Some(algorithm) = Algorithm::from_identifier(identify_hasher(encoded)) else {
            return true;
        };
        if algorithm != self.config.default_algorithm {
            return true;
        }

        self.hasher(algorithm)
            .is_none_or(|codec| codec.must_update(encoded))
    }
}

impl Default for HasherRegistry {
    fn default() -> Self {
        Self::build(PasswordConfig::default())
    }
}

/// 识别编码摘要使用的算法标识符
///
/// 依次检查：32 位十六进制（`unsalted_md5`）、37 位 `md5$$` 前缀
/// （`unsalted_md5`）、46 位 `sha1$$` 前缀（`unsalted_sha1`）；
/// 都不满足时返回第一个 `$` 之前的文本，可能是无法识别的标识符。
///
/// ```rust
/// use pwdigest::password::identify_hasher;
///
/// assert_eq!(identify_hasher("d24c80177269fb85874b1361e6b71fb4"), "unsalted_md5");
/// assert_eq!(identify_hasher("pbkdf2_sha256$180000$salt$hash"), "pbkdf2_sha256");
/// assert_eq!(identify_hasher(""), "");
/// ```
pub fn identify_hasher(encoded: &str) -> &str {
    if encoded.len() == 32 && encoded.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Algorithm::UnsaltedMd5.identifier();
    }
    if encoded.len() == UNSALTED_MD5_PREFIX.len() + 32 && encoded.starts_with(UNSALTED_MD5_PREFIX)
    {
        return Algorithm::UnsaltedMd5.identifier();
    }
    if encoded.len() == UNSALTED_SHA1_PREFIX.len() + 40 && encoded.starts_with(UNSALTED_SHA1_PREFIX)
    {
        return Algorithm::UnsaltedSha1.identifier();
    }
    format::identifier(encoded)
}

/// 标识符是否属于历史上有效的算法集合（包括未实现的 `crypt`）
pub fn is_valid_hasher(id: &str) -> bool {
    Algorithm::from_identifier(id).is_some()
}

/// 标识符是否为弱算法
pub fn is_weak_hasher(id: &str) -> bool {
    Algorithm::from_identifier(id).is_some_and(|algorithm| algorithm.is_weak())
}

/// 当前构建是否实现了该算法
pub fn is_hasher_implemented(id: &str) -> bool {
    Algorithm::from_identifier(id).is_some_and(|algorithm| algorithm.is_implemented())
}

/// 摘要是否可用
///
/// 空字符串或以 `!` 开头的值不可用，永远无法通过校验。
pub fn is_password_usable(encoded: &str) -> bool {
    !encoded.is_empty() && !encoded.starts_with(UNUSABLE_PASSWORD_PREFIX)
}

/// 使用默认注册表校验密码，见 [`HasherRegistry::check_password`]
pub fn check_password(password: &str, encoded: &str) -> Result<bool> {
    HasherRegistry::global().check_password(password, encoded)
}

/// 使用默认注册表生成摘要，见 [`HasherRegistry::make_password`]
pub fn make_password(password: &str, salt: &str, hasher: &str) -> Result<String> {
    HasherRegistry::global().make_password(password, salt, hasher)
}
