use std::fmt::Write as _;

use log::debug;
use serde::{Deserialize, Serialize};

/// 一次近似匹配：text[start..end] 与模式的编辑距离为 `edits`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub start: usize,
    /// 不含
    pub end: usize,
    pub edits: usize,
    /// M: 匹配/替换, I: 模式多出的字符, D: 文本多出的字符
    pub cigar: String,
}

/// 编辑距离矩阵，(m+1) × (n+1)，行优先展平存储。
///
/// 第一列为 0..=m（插入模式前缀的代价），第一行全为 0：
/// 匹配可从文本任意位置免费开始（子串搜索而非全局比对）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl DpMatrix {
    pub fn fill(pattern: &[u8], text: &[u8]) -> Self {
        let rows = pattern.len() + 1;
        let cols = text.len() + 1;
        let mut d = vec![0usize; rows * cols];

        for i in 0..rows {
            d[i * cols] = i;
        }

        for i in 1..rows {
            for j in 1..cols {
                let left = d[i * cols + (j - 1)] + 1;
                let above = d[(i - 1) * cols + j] + 1;
                let diag = d[(i - 1) * cols + (j - 1)] + usize::from(pattern[i - 1] != text[j - 1]);
                d[i * cols + j] = left.min(above).min(diag);
            }
        }

        Self { rows, cols, cells: d }
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn last_row(&self) -> &[usize] {
        &self.cells[(self.rows - 1) * self.cols..]
    }

    /// 从 (m, end) 回溯到第 0 行，返回起点列与正序的编辑操作。
    ///
    /// 优先级固定为：上移（I）> 左移（D）> 对角（M）。多条路径等价时
    /// 报告的起点由该顺序决定。
    pub fn backtrace(&self, pattern: &[u8], text: &[u8], end: usize) -> (usize, Vec<char>) {
        let mut ops = Vec::new();
        let mut i = self.rows - 1;
        let mut j = end;

        while i > 0 {
            let here = self.get(i, j);
            // at j == 0 the first column guarantees the upward move
            if here == self.get(i - 1, j) + 1 {
                ops.push('I');
                i -= 1;
            } else if here == self.get(i, j - 1) + 1 {
                ops.push('D');
                j -= 1;
            } else {
                debug_assert_eq!(
                    here,
                    self.get(i - 1, j - 1) + usize::from(pattern[i - 1] != text[j - 1])
                );
                ops.push('M');
                i -= 1;
                j -= 1;
            }
        }

        ops.reverse();
        (j, ops)
    }
}

/// 基于编辑距离 DP 的近似匹配，返回每个候选终点回溯得到的起点。
///
/// 候选终点按列升序枚举；不同终点回溯到同一起点时不去重。
pub fn approximate_match(pattern: &[u8], text: &[u8], max_mismatches: usize) -> Vec<usize> {
    approximate_occurrences(pattern, text, max_mismatches)
        .into_iter()
        .map(|occ| occ.start)
        .collect()
}

pub fn approximate_occurrences(pattern: &[u8], text: &[u8], max_mismatches: usize) -> Vec<Occurrence> {
    if pattern.len() > text.len() {
        return Vec::new();
    }

    let d = DpMatrix::fill(pattern, text);
    let last = d.last_row();
    let best = last.iter().copied().min().unwrap_or(0);
    if best > max_mismatches {
        debug!("approximate match: best edit distance {} exceeds budget {}", best, max_mismatches);
        return Vec::new();
    }

    let occs: Vec<Occurrence> = last
        .iter()
        .enumerate()
        .filter(|&(_, &edits)| edits <= max_mismatches)
        .map(|(end, &edits)| {
            let (start, ops) = d.backtrace(pattern, text, end);
            Occurrence { start, end, edits, cigar: ops_to_cigar(&ops) }
        })
        .collect();
    debug!(
        "approximate match: pattern_len={} text_len={} budget={} occurrences={}",
        pattern.len(),
        text.len(),
        max_mismatches,
        occs.len()
    );
    occs
}

pub fn ops_to_cigar(ops: &[char]) -> String {
    let mut cigar = String::new();
    let Some((&first, rest)) = ops.split_first() else {
        return cigar;
    };
    let mut cur = first;
    let mut len = 1usize;
    for &op in rest {
        if op == cur {
            len += 1;
        } else {
            let _ = write!(&mut cigar, "{}{}", len, cur);
            cur = op;
            len = 1;
        }
    }
    let _ = write!(&mut cigar, "{}{}", len, cur);
    cigar
}
