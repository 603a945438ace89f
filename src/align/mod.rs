//! 精确与近似匹配。所有匹配器都满足同一约定：
//! (pattern, text) → 按匹配器自身顺序排列的起点列表。

pub mod boyer_moore;
pub mod dp;
pub mod naive;

pub use boyer_moore::{bad_character_skip, boyer_moore_match, good_suffix_skip, BadCharTable, BoyerMoore, GoodSuffixTable};
pub use dp::{approximate_match, approximate_occurrences, ops_to_cigar, DpMatrix, Occurrence};
pub use naive::naive_match;

use crate::error::Result;
use crate::util::dna;

pub trait Matcher {
    fn find(&self, pattern: &[u8], text: &[u8]) -> Vec<usize>;
}

impl<F> Matcher for F
where
    F: Fn(&[u8], &[u8]) -> Vec<usize>,
{
    fn find(&self, pattern: &[u8], text: &[u8]) -> Vec<usize> {
        self(pattern, text)
    }
}

/// 以固定编辑距离上限包装的 DP 近似匹配器
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditDistanceMatcher {
    pub max_mismatches: usize,
}

impl Matcher for EditDistanceMatcher {
    fn find(&self, pattern: &[u8], text: &[u8]) -> Vec<usize> {
        approximate_match(pattern, text, self.max_mismatches)
    }
}

/// 同时搜索模式及其反向互补。
///
/// 先返回正向模式的全部命中，再追加反向互补的命中，各自保持匹配器给出的顺序；
/// 不去重、不排序。模式为自身反向互补（回文）时只搜索一次。
/// 模式含互补表之外的字符时，在任何搜索之前报错。
pub fn with_reverse_complement<M>(matcher: &M, pattern: &[u8], text: &[u8]) -> Result<Vec<usize>>
where
    M: Matcher + ?Sized,
{
    let rc = dna::reverse_complement(pattern)?;
    let mut hits = matcher.find(pattern, text);
    if rc != pattern {
        hits.extend(matcher.find(&rc, text));
    }
    Ok(hits)
}
