/// 朴素精确匹配：逐个位置比较，O(n·m)。
/// 模式串为空时在 0..=n 的每个位置都命中。
pub fn naive_match(pattern: &[u8], text: &[u8]) -> Vec<usize> {
    let m = pattern.len();
    let n = text.len();
    if m > n {
        return Vec::new();
    }
    (0..=n - m).filter(|&i| &text[i..i + m] == pattern).collect()
}
