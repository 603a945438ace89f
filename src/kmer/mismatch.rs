use std::collections::BTreeSet;

use log::{debug, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::util::dna::{self, DNA_BASES};
use crate::util::strcmp::within_hamming;

/// 超过任一阈值即视为耗时配置（候选数 4^k，逐窗比较）
pub const COSTLY_K: usize = 12;
pub const COSTLY_D: usize = 3;

/// 耗时配置的处理方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostPolicy {
    /// 返回 `Error::CostlySearch`
    #[default]
    Deny,
    /// 记录 warn 日志后继续
    Warn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MismatchOpt {
    pub cost_policy: CostPolicy,
    /// 1: 单线程；0: rayon 全局线程池；>1: 专用线程池
    pub threads: usize,
}

impl Default for MismatchOpt {
    fn default() -> Self {
        Self { cost_policy: CostPolicy::Deny, threads: 1 }
    }
}

/// 容错高频 k-mer：允许至多 d 个错配时出现次数最多的所有 k-mer。
///
/// 枚举 {A,C,G,T} 上全部 4^k 个候选，对基因组每个长度为 k 的窗口，
/// Hamming 距离不超过 d 即为该候选计数一次。候选不必真正出现在基因组中，
/// 也不考虑反向互补。
pub fn frequent_kmers_with_mismatches(
    genome: &[u8],
    k: usize,
    d: usize,
    opt: &MismatchOpt,
) -> Result<BTreeSet<Vec<u8>>> {
    dna::validate_bases(genome)?;
    let n = genome.len();
    if n < k || k < d {
        return Err(Error::ParameterRange { genome_len: n, k, d });
    }
    if k > COSTLY_K || d > COSTLY_D {
        match opt.cost_policy {
            CostPolicy::Deny => return Err(Error::CostlySearch { k, d }),
            CostPolicy::Warn => warn!(
                "the large input values k={} and/or d={} might cause long run times",
                k, d
            ),
        }
    }

    let n_candidates = u32::try_from(k)
        .ok()
        .and_then(|e| 4usize.checked_pow(e))
        .ok_or_else(|| Error::InvalidInput(format!("4^{} candidate k-mers do not fit in memory", k)))?;

    // windows() rejects zero width, slice by hand so k == 0 still yields n + 1 windows
    let windows: Vec<&[u8]> = (0..=n - k).map(|i| &genome[i..i + k]).collect();
    let counts = count_candidates(&windows, k, d, n_candidates, opt.threads)?;

    let max = counts.iter().copied().max().unwrap_or(0);
    let mut buf = vec![0u8; k];
    let best: BTreeSet<Vec<u8>> = counts
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c == max)
        .map(|(code, _)| {
            decode_kmer(code, &mut buf);
            buf.clone()
        })
        .collect();

    debug!(
        "mismatch k-mers: windows={} candidates={} k={} d={} max_count={} best={}",
        windows.len(),
        n_candidates,
        k,
        d,
        max,
        best.len()
    );
    Ok(best)
}

/// 候选编码 → 碱基串：按 2 bit 一位的 4 进制展开，高位在前
#[inline]
fn decode_kmer(mut code: usize, out: &mut [u8]) {
    for slot in out.iter_mut().rev() {
        *slot = DNA_BASES[code & 3];
        code >>= 2;
    }
}

#[inline]
fn count_one(code: usize, buf: &mut [u8], windows: &[&[u8]], d: usize) -> usize {
    decode_kmer(code, buf);
    windows.iter().filter(|w| within_hamming(w, buf, d)).count()
}

// Per-candidate counts are independent, so any schedule yields the same vector.
fn count_candidates(
    windows: &[&[u8]],
    k: usize,
    d: usize,
    n_candidates: usize,
    threads: usize,
) -> Result<Vec<usize>> {
    let par = || -> Vec<usize> {
        (0..n_candidates)
            .into_par_iter()
            .map_init(|| vec![0u8; k], |buf, code| count_one(code, buf, windows, d))
            .collect()
    };

    match threads {
        1 => {
            let mut buf = vec![0u8; k];
            Ok((0..n_candidates).map(|code| count_one(code, &mut buf, windows, d)).collect())
        }
        0 => Ok(par()),
        t => {
            let pool = rayon::ThreadPoolBuilder::new().num_threads(t).build()?;
            Ok(pool.install(par))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(genome: &str, k: usize, d: usize) -> BTreeSet<String> {
        frequent_kmers_with_mismatches(genome.as_bytes(), k, d, &MismatchOpt::default())
            .unwrap()
            .into_iter()
            .map(|kmer| String::from_utf8(kmer).unwrap())
            .collect()
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn includes_kmers_absent_from_genome() {
        assert_eq!(run("AAAAAAAAAA", 2, 1), set(&["AA", "AC", "AG", "CA", "AT", "GA", "TA"]));
    }

    #[test]
    fn does_not_swap_k_and_d() {
        let expected = set(&[
            "TCTC", "CGGC", "AAGC", "TGTG", "GGCC", "AGGT", "ATCC", "ACTG", "ACAC", "AGAG", "ATTA", "TGAC",
            "AATT", "CGTT", "GTTC", "GGTA", "AGCA", "CATC",
        ]);
        assert_eq!(run("AGTCAGTC", 4, 2), expected);
    }

    #[test]
    fn ignores_reverse_complement() {
        assert_eq!(run("AATTAATTGGTAGGTAGGTA", 4, 0), set(&["GGTA"]));
        assert_eq!(run("AAT", 3, 0), set(&["AAT"]));
    }

    #[test]
    fn counts_exact_and_partial_mismatches() {
        let expected = set(&["GTA", "ACA", "AAA", "ATC", "ATA", "AGA", "ATT", "CTA", "TTA", "ATG"]);
        assert_eq!(run("ATA", 3, 1), expected);
        assert_eq!(run("ACGTTGCATGTCGCATGATGCATGAGAGCT", 4, 1), set(&["ATGC", "ATGT", "GATG"]));
    }

    #[test]
    fn zero_length_kmer() {
        assert_eq!(run("ACGT", 0, 0), set(&[""]));
    }

    #[test]
    fn rejects_bad_ranges() {
        let opt = MismatchOpt::default();
        let err = frequent_kmers_with_mismatches(b"ACGT", 6, 1, &opt).unwrap_err();
        assert!(err.to_string().contains("Received: len(genome)=4, k=6, d=1."));
        assert!(matches!(
            frequent_kmers_with_mismatches(b"ACGT", 2, 3, &opt),
            Err(Error::ParameterRange { genome_len: 4, k: 2, d: 3 })
        ));
    }

    #[test]
    fn rejects_non_acgt_genome() {
        let opt = MismatchOpt::default();
        assert!(matches!(
            frequent_kmers_with_mismatches(b"ACGU", 2, 0, &opt),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn costly_configurations_are_denied_by_default() {
        let opt = MismatchOpt::default();
        assert!(matches!(
            frequent_kmers_with_mismatches(b"ACGTTGCAACGTTGCA", 13, 3, &opt),
            Err(Error::CostlySearch { k: 13, d: 3 })
        ));
        assert!(matches!(
            frequent_kmers_with_mismatches(b"ACGTTGCAACGTTGCA", 12, 4, &opt),
            Err(Error::CostlySearch { k: 12, d: 4 })
        ));
    }

    #[test]
    fn warn_policy_proceeds() {
        // d > 3 trips the advisory while k stays small enough to run quickly
        let opt = MismatchOpt { cost_policy: CostPolicy::Warn, threads: 1 };
        let res = frequent_kmers_with_mismatches(b"ACGTA", 4, 4, &opt).unwrap();
        // every candidate is within 4 mismatches of both windows
        assert_eq!(res.len(), 256);
    }

    #[test]
    fn parallel_matches_sequential() {
        let genome = b"ACGTTGCATGTCGCATGATGCATGAGAGCT";
        let seq = frequent_kmers_with_mismatches(genome, 5, 1, &MismatchOpt::default()).unwrap();
        for threads in [0, 3] {
            let opt = MismatchOpt { threads, ..MismatchOpt::default() };
            assert_eq!(frequent_kmers_with_mismatches(genome, 5, 1, &opt).unwrap(), seq, "threads={}", threads);
        }
    }

    #[test]
    fn decode_is_base4_big_endian() {
        let mut buf = [0u8; 3];
        decode_kmer(0, &mut buf);
        assert_eq!(&buf, b"AAA");
        decode_kmer(0b00_01_11, &mut buf);
        assert_eq!(&buf, b"ACT");
        decode_kmer(63, &mut buf);
        assert_eq!(&buf, b"TTT");
    }

    #[test]
    fn opt_deserializes_with_defaults() {
        let opt: MismatchOpt = serde_json::from_str(r#"{"cost_policy":"warn"}"#).unwrap();
        assert_eq!(opt, MismatchOpt { cost_policy: CostPolicy::Warn, threads: 1 });
        let opt: MismatchOpt = serde_json::from_str("{}").unwrap();
        assert_eq!(opt, MismatchOpt::default());
    }
}
