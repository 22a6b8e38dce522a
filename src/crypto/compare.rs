//! 常量时间比较
//!
//! 编解码器在比较重新计算的摘要与存储的摘要时使用，防止时序攻击。

use subtle::{Choice, ConstantTimeEq};

/// 常量时间比较两个字节切片
///
/// 不在第一个不同的字节处提前返回；长度不同时仍然遍历较长一方的全部长度
/// （较短一方以 0 填充），长度是否相等作为最后一个条件并入结果。
///
/// # Example
///
/// ```rust
/// use pwdigest::crypto::constant_time_eq;
///
/// assert!(constant_time_eq(b"secret_digest", b"secret_digest"));
/// assert!(!constant_time_eq(b"secret_digest", b"secret_digesT"));
/// assert!(!constant_time_eq(b"secret", b"secret_digest"));
/// ```
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    let len = a.len().max(b.len());
    let mut equal: Choice = (a.len() as u64).ct_eq(&(b.len() as u64));

    for i in 0..len {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        equal &= x.ct_eq(&y);
    }

    equal.into()
}

/// 常量时间比较两个字符串
pub fn constant_time_eq_str(a: &str, b: &str) -> bool {
    constant_time_eq(a.as_bytes(), b.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal() {
        assert!(constant_time_eq(b"hello", b"hello"));
        assert!(constant_time_eq(b"", b""));
    }

    #[test]
    fn test_different_content() {
        assert!(!constant_time_eq(b"hello", b"world"));
        assert!(!constant_time_eq(b"hello", b"hellO"));
    }

    #[test]
    fn test_different_length() {
        assert!(!constant_time_eq(b"hello", b"hell"));
        assert!(!constant_time_eq(b"", b"a"));
        // 零填充不能让前缀 + 尾部 0 字节通过
        assert!(!constant_time_eq(b"abc", b"abc\0"));
    }

    #[test]
    fn test_str() {
        assert!(constant_time_eq_str("secret", "secret"));
        assert!(!constant_time_eq_str("secret", "Secret"));
    }
}
