use crate::error::{Error, Result};

pub const DNA_BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];

// 0 marks a byte with no complement.
const COMPLEMENT: [u8; 256] = {
    let mut table = [0u8; 256];
    table[b'A' as usize] = b'T';
    table[b'C' as usize] = b'G';
    table[b'G' as usize] = b'C';
    table[b'T' as usize] = b'A';
    table[b'N' as usize] = b'N';
    table
};

#[inline]
pub fn complement(base: u8) -> Option<u8> {
    match COMPLEMENT[base as usize] {
        0 => None,
        c => Some(c),
    }
}

/// 反向互补。互补表之外的字符（包括小写）直接报错，不做替换。
pub fn reverse_complement(seq: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(seq.len());
    for (i, &b) in seq.iter().enumerate().rev() {
        let c = complement(b).ok_or(Error::UnknownBase { base: b as char, position: i })?;
        out.push(c);
    }
    Ok(out)
}

#[inline]
pub fn is_dna_base(b: u8) -> bool {
    matches!(b, b'A' | b'C' | b'G' | b'T')
}

/// Fails unless every byte of `genome` is one of A, C, G, T.
pub fn validate_bases(genome: &[u8]) -> Result<()> {
    match genome.iter().position(|&b| !is_dna_base(b)) {
        None => Ok(()),
        Some(i) => Err(Error::InvalidInput(format!(
            "genome contains {:?} at position {}, expected only A, C, G, T",
            genome[i] as char, i
        ))),
    }
}
