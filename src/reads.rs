//! 测序 read 批次的组成统计。

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// 批次非空时，判断所有 read 是否等长
pub fn same_length_reads<R: AsRef<[u8]>>(reads: &[R]) -> Result<bool> {
    let first = reads
        .first()
        .ok_or_else(|| Error::InvalidInput("read batch is empty".into()))?
        .as_ref()
        .len();
    Ok(reads.iter().all(|r| r.as_ref().len() == first))
}

/// 每个位置上为 G 或 C 的 read 所占比例。
///
/// 要求批次非空、等长，且只含 A/C/G/T/N。
pub fn gc_by_position<R: AsRef<[u8]>>(reads: &[R]) -> Result<Vec<f64>> {
    if !same_length_reads(reads)? {
        return Err(Error::InvalidInput("reads have different lengths".into()));
    }

    let len = reads[0].as_ref().len();
    let mut gc = vec![0usize; len];
    for (ri, read) in reads.iter().enumerate() {
        for (i, &b) in read.as_ref().iter().enumerate() {
            match b {
                b'G' | b'C' => gc[i] += 1,
                b'A' | b'T' | b'N' => {}
                other => {
                    return Err(Error::InvalidInput(format!(
                        "read {} has unexpected base {:?} at position {}",
                        ri, other as char, i
                    )))
                }
            }
        }
    }

    let total = reads.len() as f64;
    Ok(gc.into_iter().map(|c| c as f64 / total).collect())
}

/// 所有 read 合计的逐字符频数
pub fn base_frequency<R: AsRef<[u8]>>(reads: &[R]) -> BTreeMap<u8, usize> {
    let mut freq = BTreeMap::new();
    for read in reads {
        for &b in read.as_ref() {
            *freq.entry(b).or_insert(0) += 1;
        }
    }
    freq
}
