//! 统一错误类型模块
//!
//! 提供 pwdigest 库中所有操作的错误类型定义。
//!
//! 解析、校验类错误都归入 [`HasherError`]，每个变体携带出错的算法、字段等上下文，
//! 调用方按种类匹配即可，无需比较某个导出的错误值。

use std::fmt;

/// pwdigest 库的统一结果类型
pub type Result<T> = std::result::Result<T, Error>;

/// pwdigest 库的错误类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// 哈希器解析 / 分发错误
    Hasher(HasherError),

    /// 底层密码学原语或随机数错误
    Crypto(CryptoError),

    /// 配置错误
    Config(ConfigError),
}

impl Error {
    /// 包装底层原语返回的错误
    pub fn primitive(algorithm: &'static str, err: impl fmt::Display) -> Self {
        Error::Crypto(CryptoError::PrimitiveFailed {
            algorithm,
            message: err.to_string(),
        })
    }

    /// 如果是哈希器错误，返回其种类
    pub fn hasher_kind(&self) -> Option<HasherErrorKind> {
        match self {
            Error::Hasher(e) => Some(e.kind()),
            _ => None,
        }
    }
}

/// 编码摘要的解析与分发错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HasherError {
    /// `$` 分隔的字段数与算法要求不符
    ComponentMismatch {
        algorithm: &'static str,
        expected: usize,
        actual: usize,
    },
    /// 应为数值（迭代次数、cost、版本号）的字段无法解析
    ComponentUnreadable {
        algorithm: &'static str,
        component: &'static str,
    },
    /// 前导标识符与所调用的编解码器不符
    AlgorithmMismatch {
        expected: &'static str,
        actual: String,
    },
    /// Argon2 格式版本不受支持
    IncompatibleVersion { expected: u32, actual: u32 },
    /// 盐值包含分隔符 `$`
    SaltContainsDelimiter { algorithm: &'static str },
    /// 加盐算法收到空盐值
    SaltEmpty { algorithm: &'static str },
    /// 盐值短于算法允许的最小长度（字节）
    SaltTooShort { algorithm: &'static str, min: usize },
    /// 标识符历史上有效，但当前构建没有对应实现
    NotImplemented(String),
    /// 无法识别的标识符
    InvalidHasher(String),
}

/// [`HasherError`] 的种类，不携带上下文
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HasherErrorKind {
    ComponentMismatch,
    ComponentUnreadable,
    AlgorithmMismatch,
    IncompatibleVersion,
    SaltContainsDelimiter,
    SaltEmpty,
    SaltTooShort,
    NotImplemented,
    InvalidHasher,
}

impl HasherError {
    /// 返回错误种类
    pub fn kind(&self) -> HasherErrorKind {
        match self {
            HasherError::ComponentMismatch { .. } => HasherErrorKind::ComponentMismatch,
            HasherError::ComponentUnreadable { .. } => HasherErrorKind::ComponentUnreadable,
            HasherError::AlgorithmMismatch { .. } => HasherErrorKind::AlgorithmMismatch,
            HasherError::IncompatibleVersion { .. } => HasherErrorKind::IncompatibleVersion,
            HasherError::SaltContainsDelimiter { .. } => HasherErrorKind::SaltContainsDelimiter,
            HasherError::SaltEmpty { .. } => HasherErrorKind::SaltEmpty,
            HasherError::SaltTooShort { .. } => HasherErrorKind::SaltTooShort,
            HasherError::NotImplemented(_) => HasherErrorKind::NotImplemented,
            HasherError::InvalidHasher(_) => HasherErrorKind::InvalidHasher,
        }
    }
}

/// 配置相关错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// 无效的配置值
    InvalidValue { key: String, message: String },
}

/// 加密相关错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// 底层哈希 / 密钥派生原语失败
    PrimitiveFailed {
        algorithm: &'static str,
        message: String,
    },
}

// ============================================================================
// Display 实现
// ============================================================================

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Hasher(e) => write!(f, "Hasher error: {}", e),
            Error::Crypto(e) => write!(f, "Crypto error: {}", e),
            Error::Config(e) => write!(f, "Config error: {}", e),
        }
    }
}

impl fmt::Display for HasherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HasherError::ComponentMismatch {
                algorithm,
                expected,
                actual,
            } => write!(
                f,
                "{}: hashed password components mismatch: expected {} fields, got {}",
                algorithm, expected, actual
            ),
            HasherError::ComponentUnreadable {
                algorithm,
                component,
            } => write!(
                f,
                "{}: unreadable component in hashed password: {}",
                algorithm, component
            ),
            HasherError::AlgorithmMismatch { expected, actual } => {
                write!(f, "algorithm mismatch: expected {}, got {}", expected, actual)
            }
            HasherError::IncompatibleVersion { expected, actual } => {
                write!(
                    f,
                    "incompatible version: expected {}, got {}",
                    expected, actual
                )
            }
            HasherError::SaltContainsDelimiter { algorithm } => {
                write!(f, "{}: salt contains dollar sign ($)", algorithm)
            }
            HasherError::SaltEmpty { algorithm } => write!(f, "{}: salt is empty", algorithm),
            HasherError::SaltTooShort { algorithm, min } => {
                write!(f, "{}: salt must be at least {} bytes", algorithm, min)
            }
            HasherError::NotImplemented(id) => write!(f, "hasher not implemented: {}", id),
            HasherError::InvalidHasher(id) => write!(f, "invalid hasher: {}", id),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue { key, message } => {
                write!(f, "invalid configuration value for '{}': {}", key, message)
            }
        }
    }
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoError::PrimitiveFailed { algorithm, message } => {
                write!(f, "{} primitive failed: {}", algorithm, message)
            }
        }
    }
}

// ============================================================================
// std::error::Error 实现
// ============================================================================

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Hasher(e) => Some(e),
            Error::Crypto(e) => Some(e),
            Error::Config(e) => Some(e),
        }
    }
}

impl std::error::Error for HasherError {}
impl std::error::Error for ConfigError {}
impl std::error::Error for CryptoError {}

// ============================================================================
// From 实现 - 方便错误转换
// ============================================================================

impl From<HasherError> for Error {
    fn from(err: HasherError) -> Self {
        Error::Hasher(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::Config(err)
    }
}

impl From<CryptoError> for Error {
    fn from(err: CryptoError) -> Self {
        Error::Crypto(err)
    }
}
