//! 编码摘要的公共语法
//!
//! 所有算法共用 `$` 分隔的文本格式，第一个字段是算法标识符：
//!
//! ```text
//! <algorithm>$<field>$<field>...
//! ```
//!
//! 字段数必须与算法要求的数量完全一致；数值字段（迭代次数、cost、版本号）
//! 无法解析时报告 `ComponentUnreadable`，与字段数不符的 `ComponentMismatch` 区分开。

use std::str::FromStr;

use crate::error::{HasherError, Result};

/// 字段分隔符
pub const DELIMITER: char = '$';

/// 按分隔符切分全部字段（不限次数）
///
/// # Example
///
/// ```rust
/// use pwdigest::password::format::split;
///
/// assert_eq!(split("md5$salt$abc"), vec!["md5", "salt", "abc"]);
/// assert_eq!(split(""), vec![""]);
/// ```
pub fn split(encoded: &str) -> Vec<&str> {
    encoded.split(DELIMITER).collect()
}

/// 最多切分出 `n` 个字段，最后一个字段保留剩余文本（其中可能含有分隔符）
///
/// 用于末尾字段本身带有 `$` 的算法，例如 bcrypt 的原生编码。
///
/// # Example
///
/// ```rust
/// use pwdigest::password::format::splitn;
///
/// assert_eq!(splitn("bcrypt$$2b$12$abc", 2), vec!["bcrypt", "$2b$12$abc"]);
/// ```
pub fn splitn(encoded: &str, n: usize) -> Vec<&str> {
    encoded.splitn(n, DELIMITER).collect()
}

/// 返回第一个分隔符之前的文本
///
/// 对任意输入都不会失败：空字符串得到空标识符，没有分隔符时返回整个输入。
pub fn identifier(encoded: &str) -> &str {
    match encoded.split_once(DELIMITER) {
        Some((id, _)) => id,
        None => encoded,
    }
}

/// 按固定字段数切分，字段数不符时返回 `ComponentMismatch`
pub(crate) fn fields<'a>(
    algorithm: &'static str,
    encoded: &'a str,
    arity: usize,
) -> Result<Vec<&'a str>> {
    let parts = split(encoded);
    if parts.len() != arity {
        return Err(HasherError::ComponentMismatch {
            algorithm,
            expected: arity,
            actual: parts.len(),
        }
        .into());
    }
    Ok(parts)
}

/// 检查前导标识符
pub(crate) fn expect_identifier(expected: &'static str, actual: &str) -> Result<()> {
    if actual != expected {
        return Err(HasherError::AlgorithmMismatch {
            expected,
            actual: actual.to_string(),
        }
        .into());
    }
    Ok(())
}

/// 解析数值字段，失败时返回 `ComponentUnreadable`
pub(crate) fn parse_number<T: FromStr>(
    algorithm: &'static str,
    component: &'static str,
    value: &str,
) -> Result<T> {
    value.parse::<T>().map_err(|_| {
        HasherError::ComponentUnreadable {
            algorithm,
            component,
        }
        .into()
    })
}

/// 解析 `key=value` 形式的数值字段（如 Argon2 的 `v=19`、`m=512`）
pub(crate) fn parse_keyed<T: FromStr>(
    algorithm: &'static str,
    key: &'static str,
    value: &str,
) -> Result<T> {
    let number = value
        .strip_prefix(key)
        .and_then(|rest| rest.strip_prefix('='))
        .ok_or(HasherError::ComponentUnreadable {
            algorithm,
            component: key,
        })?;
    parse_number(algorithm, key, number)
}

/// 盐值会原样写入一个字段，因此不能含有分隔符
pub(crate) fn check_salt(algorithm: &'static str, salt: &str) -> Result<()> {
    if salt.contains(DELIMITER) {
        return Err(HasherError::SaltContainsDelimiter { algorithm }.into());
    }
    Ok(())
}
