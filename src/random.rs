//! 安全随机数生成模块
//!
//! 为默认盐值和不可用密码的填充串提供密码学安全的随机字符串。

use rand::{Rng, distr::Alphanumeric};

use crate::error::Result;

/// 生成指定长度的字母数字随机字符串
///
/// 只包含 a-z, A-Z, 0-9 字符。使用线程本地的 CSPRNG（由操作系统熵源播种），
/// 可直接作为盐值使用：结果中不会出现 `$`。
///
/// # Example
///
/// ```rust
/// use pwdigest::random::get_random_string;
///
/// let salt = get_random_string(12).unwrap();
/// assert_eq!(salt.len(), 12);
/// assert!(salt.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn get_random_string(length: usize) -> Result<String> {
    let token: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect();
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_get_random_string() {
        let s = get_random_string(40).unwrap();
        assert_eq!(s.len(), 40);
        assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_get_random_string_zero_length() {
        assert_eq!(get_random_string(0).unwrap(), "");
    }

    #[test]
    fn test_get_random_string_unique() {
        let values: HashSet<_> = (0..50).map(|_| get_random_string(12).unwrap()).collect();
        assert_eq!(values.len(), 50);
    }
}
