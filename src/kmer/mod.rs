//! k-mer 频率统计：频率表、最高频子串、滑窗聚簇、GC 偏斜、容错高频 k-mer。
//!
//! 返回的 k-mer 尽量借用输入文本，避免逐个分配。

pub mod mismatch;
pub mod skew;

pub use mismatch::{frequent_kmers_with_mismatches, CostPolicy, MismatchOpt};
pub use skew::{minimum_skew_positions, skew_profile};

use std::collections::{BTreeSet, HashMap, HashSet};

use log::debug;

use crate::error::{Error, Result};

/// 统计文本中所有重叠的长度为 k 的子串。
/// 频数之和恒为 len(text) - k + 1；k 大于文本长度时返回空表。
pub fn frequency_map(text: &[u8], k: usize) -> Result<HashMap<&[u8], usize>> {
    if k == 0 {
        return Err(Error::InvalidInput("k-mer length must be positive".into()));
    }
    if text.is_empty() {
        return Err(Error::InvalidInput("cannot count k-mers of an empty text".into()));
    }
    let mut freq = HashMap::new();
    for kmer in text.windows(k) {
        *freq.entry(kmer).or_insert(0) += 1;
    }
    Ok(freq)
}

/// 频数最高的 k-mer（按在文本中首次出现的顺序）及该频数。
pub fn most_frequent_kmers(text: &[u8], k: usize) -> Result<(Vec<&[u8]>, usize)> {
    let freq = frequency_map(text, k)?;
    let max = freq.values().copied().max().ok_or_else(|| {
        Error::InvalidInput(format!("k={} exceeds text length {}", k, text.len()))
    })?;

    let mut seen = HashSet::new();
    let top = text
        .windows(k)
        .filter(|kmer| freq[kmer] == max && seen.insert(*kmer))
        .collect();
    Ok((top, max))
}

/// 滑窗聚簇：在任一长度为 `window` 的窗口内出现至少 `min_freq` 次的 k-mer 的并集。
///
/// 窗口每前移一位只有一个 k-mer 离开、一个进入，因此增量维护计数，
/// 结果与逐窗重新统计完全一致。
pub fn pattern_clumps(text: &[u8], k: usize, window: usize, min_freq: usize) -> Result<BTreeSet<&[u8]>> {
    if k == 0 {
        return Err(Error::InvalidInput("k-mer length must be positive".into()));
    }
    if window == 0 {
        return Err(Error::InvalidInput("window length must be positive".into()));
    }

    let mut clumps = BTreeSet::new();
    if window > text.len() || window < k {
        return Ok(clumps);
    }

    let mut counts: HashMap<&[u8], usize> = HashMap::new();
    for kmer in text[..window].windows(k) {
        *counts.entry(kmer).or_insert(0) += 1;
    }
    clumps.extend(counts.iter().filter(|&(_, &c)| c >= min_freq).map(|(&kmer, _)| kmer));

    for start in 1..=text.len() - window {
        let leaving = &text[start - 1..start - 1 + k];
        let emptied = match counts.get_mut(leaving) {
            Some(c) => {
                *c -= 1;
                *c == 0
            }
            None => false,
        };
        if emptied {
            counts.remove(leaving);
        }

        let entering = &text[start + window - k..start + window];
        let c = counts.entry(entering).or_insert(0);
        *c += 1;
        if *c >= min_freq {
            clumps.insert(entering);
        }
    }

    debug!(
        "pattern clumps: text_len={} k={} window={} min_freq={} found={}",
        text.len(),
        k,
        window,
        min_freq,
        clumps.len()
    );
    Ok(clumps)
}
