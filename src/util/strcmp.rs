use crate::error::{Error, Result};

pub fn longest_common_prefix<'a>(s1: &'a [u8], s2: &[u8]) -> &'a [u8] {
    let n = s1.iter().zip(s2).take_while(|(a, b)| a == b).count();
    &s1[..n]
}

pub fn longest_common_suffix<'a>(s1: &'a [u8], s2: &[u8]) -> &'a [u8] {
    let n = s1.iter().rev().zip(s2.iter().rev()).take_while(|(a, b)| a == b).count();
    &s1[s1.len() - n..]
}

/// 等长序列的 Hamming 距离，长度不一致时报错。
pub fn hamming_distance(s1: &[u8], s2: &[u8]) -> Result<usize> {
    if s1.len() != s2.len() {
        return Err(Error::LengthMismatch { left: s1.len(), right: s2.len() });
    }
    Ok(s1.iter().zip(s2).filter(|(a, b)| a != b).count())
}

/// Hamming 距离是否不超过 `max`；超出即提前返回。调用方保证等长。
#[inline]
pub(crate) fn within_hamming(s1: &[u8], s2: &[u8], max: usize) -> bool {
    let mut diff = 0usize;
    for (a, b) in s1.iter().zip(s2) {
        if a != b {
            diff += 1;
            if diff > max {
                return false;
            }
        }
    }
    true
}

/// 全局编辑距离（Levenshtein）：替换、插入、删除各计 1。
/// 只保留两行 DP，内存 O(len(s2))。
pub fn levenshtein_distance(s1: &[u8], s2: &[u8]) -> usize {
    let mut prev: Vec<usize> = (0..=s2.len()).collect();
    let mut cur = vec![0usize; s2.len() + 1];
    for i in 1..=s1.len() {
        cur[0] = i;
        for j in 1..=s2.len() {
            let left = cur[j - 1] + 1;
            let above = prev[j] + 1;
            let diag = prev[j - 1] + usize::from(s1[i - 1] != s2[j - 1]);
            cur[j] = left.min(above).min(diag);
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[s2.len()]
}
