use crate::error::Result;
use crate::util::dna;

/// 累积 GC 偏斜：遇 G 加一、遇 C 减一，长度为 len(genome) + 1，首项为 0。
pub fn skew_profile(genome: &[u8]) -> Result<Vec<i64>> {
    dna::validate_bases(genome)?;
    let mut skew = Vec::with_capacity(genome.len() + 1);
    let mut cur = 0i64;
    skew.push(cur);
    for &b in genome {
        match b {
            b'G' => cur += 1,
            b'C' => cur -= 1,
            _ => {}
        }
        skew.push(cur);
    }
    Ok(skew)
}

/// 偏斜取全局最小值的所有位置（升序）。
///
/// 位置相对累积数组偏移 -1，即指向刚被计入的碱基；
/// 若最小值出现在起始的 0 处，对应位置为 -1（第一个碱基之前）。
pub fn minimum_skew_positions(genome: &[u8]) -> Result<Vec<isize>> {
    let skew = skew_profile(genome)?;
    let min = skew.iter().copied().min().unwrap_or(0);
    Ok(skew
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v == min)
        .map(|(i, _)| i as isize - 1)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn profile_runs_from_zero() {
        assert_eq!(skew_profile(b"GAGCCACCGCGATA").unwrap(), vec![0, 1, 1, 2, 1, 0, 0, -1, -2, -1, -2, -1, -1, -1, -1]);
        assert_eq!(skew_profile(b"").unwrap(), vec![0]);
    }

    #[test]
    fn minimum_skew_reference() {
        assert_eq!(minimum_skew_positions(b"CATGGGCATCGGCCATACGCCGAATA").unwrap(), vec![20]);
        assert_eq!(minimum_skew_positions(b"CATGGGCATCGGCCATACGCCGAATACGA").unwrap(), vec![20, 26]);
    }

    #[test]
    fn minimum_at_start_is_minus_one() {
        assert_eq!(minimum_skew_positions(b"GGA").unwrap(), vec![-1]);
        assert_eq!(minimum_skew_positions(b"").unwrap(), vec![-1]);
        assert_eq!(minimum_skew_positions(b"AT").unwrap(), vec![-1, 0, 1]);
    }

    #[test]
    fn rejects_non_acgt() {
        assert!(matches!(minimum_skew_positions(b"CATGN"), Err(Error::InvalidInput(_))));
    }
}
