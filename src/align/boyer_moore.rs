use std::collections::HashMap;

use log::debug;

/// 坏字符规则：在模式前缀中从右往左找失配字符，
/// 返回其距右端的下标（即可跳过的对齐数）；前缀中不存在时返回前缀长度。
pub fn bad_character_skip(mismatched: u8, prefix: &[u8]) -> usize {
    prefix
        .iter()
        .rev()
        .position(|&c| c == mismatched)
        .unwrap_or(prefix.len())
}

/// 好后缀规则：找最大的 i（0 < i < m），使 pattern[..i] 与已匹配后缀
/// 在长度 min(i, |suffix|) 上的尾部相同，返回 m - i - 1。找不到时返回 m - 1。
pub fn good_suffix_skip(matched_suffix: &[u8], pattern: &[u8]) -> usize {
    let m = pattern.len();
    let s = matched_suffix.len();
    for i in (1..m).rev() {
        let len = i.min(s);
        if pattern[i - len..i] == matched_suffix[s - len..] {
            return m - i - 1;
        }
    }
    m.saturating_sub(1)
}

/// 坏字符表：字符 → 各前缀长度（0..m）对应的跳过数。
/// 不在模式中出现的字符无需存储，跳过数恒为前缀长度。
#[derive(Debug, Clone, Default)]
pub struct BadCharTable {
    skips: HashMap<u8, Vec<usize>>,
}

impl BadCharTable {
    pub fn new(pattern: &[u8]) -> Self {
        let mut skips = HashMap::new();
        for &c in pattern {
            skips.entry(c).or_insert_with(|| Self::row(c, pattern));
        }
        Self { skips }
    }

    // One pass per character: track the last position of `c` left of each prefix end.
    fn row(c: u8, pattern: &[u8]) -> Vec<usize> {
        let mut row = Vec::with_capacity(pattern.len());
        let mut last: Option<usize> = None;
        for (k, &b) in pattern.iter().enumerate() {
            row.push(match last {
                Some(p) => k - 1 - p,
                None => k,
            });
            if b == c {
                last = Some(k);
            }
        }
        row
    }

    #[inline]
    pub fn skip(&self, mismatched: u8, prefix_len: usize) -> usize {
        self.skips
            .get(&mismatched)
            .and_then(|row| row.get(prefix_len).copied())
            .unwrap_or(prefix_len)
    }

    pub fn row_for(&self, c: u8) -> Option<&[usize]> {
        self.skips.get(&c).map(Vec::as_slice)
    }

    /// 表中的字符数（即模式中不同字符的个数）
    pub fn len(&self) -> usize {
        self.skips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skips.is_empty()
    }
}

/// 好后缀表：按已匹配后缀长度（0..m）索引。
/// 模式的后缀由长度唯一确定，因此不必以后缀串为键。
#[derive(Debug, Clone, Default)]
pub struct GoodSuffixTable {
    skips: Vec<usize>,
}

impl GoodSuffixTable {
    pub fn new(pattern: &[u8]) -> Self {
        let m = pattern.len();
        let skips = (0..m)
            .map(|len| good_suffix_skip(&pattern[m - len..], pattern))
            .collect();
        Self { skips }
    }

    #[inline]
    pub fn skip(&self, suffix_len: usize) -> usize {
        self.skips[suffix_len]
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.skips
    }

    pub fn len(&self) -> usize {
        self.skips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skips.is_empty()
    }
}

/// 预处理后的 Boyer-Moore 模式，可在多段文本上重复使用。
#[derive(Debug, Clone)]
pub struct BoyerMoore {
    pattern: Vec<u8>,
    bad_char: BadCharTable,
    good_suffix: GoodSuffixTable,
}

impl BoyerMoore {
    pub fn new(pattern: &[u8]) -> Self {
        let bad_char = BadCharTable::new(pattern);
        let good_suffix = GoodSuffixTable::new(pattern);
        debug!(
            "boyer-moore tables built: pattern_len={} distinct_chars={}",
            pattern.len(),
            bad_char.len()
        );
        Self { pattern: pattern.to_vec(), bad_char, good_suffix }
    }

    pub fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    pub fn bad_char_table(&self) -> &BadCharTable {
        &self.bad_char
    }

    pub fn good_suffix_table(&self) -> &GoodSuffixTable {
        &self.good_suffix
    }

    /// 从右往左比较；失配时按两条规则中较大的跳过数前移。
    /// 跳过数是被略过的对齐个数，所以下一次对齐位于 idx + skip + 1。
    pub fn find_in(&self, text: &[u8]) -> Vec<usize> {
        let m = self.pattern.len();
        let n = text.len();
        let mut hits = Vec::new();
        if m > n {
            return hits;
        }

        let mut idx = 0usize;
        let mut alignments = 0usize;
        while idx <= n - m {
            alignments += 1;
            match (0..m).rev().find(|&o| self.pattern[o] != text[idx + o]) {
                Some(o) => {
                    let bc = self.bad_char.skip(text[idx + o], o);
                    let gs = self.good_suffix.skip(m - o - 1);
                    idx += bc.max(gs) + 1;
                }
                None => {
                    hits.push(idx);
                    idx += 1;
                }
            }
        }
        debug!(
            "boyer-moore scan: text_len={} alignments_checked={} hits={}",
            n,
            alignments,
            hits.len()
        );
        hits
    }
}

pub fn boyer_moore_match(pattern: &[u8], text: &[u8]) -> Vec<usize> {
    BoyerMoore::new(pattern).find_in(text)
}
