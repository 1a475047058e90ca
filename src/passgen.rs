//  ____  ____     __        __     ____
// |  _ \|  _ \ __ \ \      / /__  / ___| ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \| |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) | |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/ \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-18
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password generator

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use std::fmt;

/// 最小生成长度，保证熵的下限
pub const MIN_LENGTH: usize = 12;

const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const NUMBERS: &str = "0123456789";
const SPECIALS: &str = "!@#$%*()<>[]{}?,./:;`~'\"";

// 密码生成选项
#[derive(Debug, Clone, Copy)]
pub struct PasswordOptions {
    pub length: usize,
    pub include_numbers: bool,
    pub include_special: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: MIN_LENGTH,
            include_numbers: false,
            include_special: false,
        }
    }
}

#[derive(Debug)]
pub enum PassgenError {
    InvalidConfiguration(String),
    EmptyCharset,
}

impl fmt::Display for PassgenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassgenError::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            PassgenError::EmptyCharset => write!(f, "Character set is empty"),
        }
    }
}

impl std::error::Error for PassgenError {}

/// 实际生成长度：不足 MIN_LENGTH 时补齐到下限
pub fn effective_length(length: usize) -> usize {
    length.max(MIN_LENGTH)
}

/// Build the character pool: base alphabet first, then numbers and
/// special characters appended in a fixed order.
pub fn build_charset(options: &PasswordOptions) -> Vec<char> {
    let mut pool: Vec<char> = LETTERS.chars().collect();
    if options.include_numbers {
        pool.extend(NUMBERS.chars());
    }
    if options.include_special {
        pool.extend(SPECIALS.chars());
    }
    pool
}

/// 字符池大小（无需构建字符池）
pub fn charset_size(options: &PasswordOptions) -> usize {
    let mut size = LETTERS.len();
    if options.include_numbers {
        size += NUMBERS.len();
    }
    if options.include_special {
        size += SPECIALS.len();
    }
    size
}

/// Entropy of a generated password in bits.
pub fn entropy_bits(options: &PasswordOptions) -> f64 {
    (charset_size(options) as f64).log2() * effective_length(options.length) as f64
}

pub fn generate_password(options: &PasswordOptions) -> Result<String, PassgenError> {
    if options.length == 0 {
        return Err(PassgenError::InvalidConfiguration(
            "Password length must be a positive integer".to_string(),
        ));
    }

    let pool = build_charset(options);
    if pool.is_empty() {
        // 固定字母表下不会发生，保护基础字符集将来可配置的情况
        return Err(PassgenError::EmptyCharset);
    }

    // OsRng 直接从系统熵池取随机数；choose 内部做无偏均匀采样，不存在取模偏差
    let mut rng = OsRng::default();
    let count = effective_length(options.length);
    let mut password_chars = Vec::with_capacity(count);
    for _ in 0..count {
        let c = pool.choose(&mut rng).ok_or(PassgenError::EmptyCharset)?;
        password_chars.push(*c);
    }

    Ok(password_chars.into_iter().collect())
}
