//! # genomics-algo
//!
//! DNA 序列匹配与序列统计算法库。
//!
//! 本 crate 提供：
//!
//! - **精确匹配**：朴素扫描与 Boyer-Moore（坏字符 + 好后缀规则）
//! - **近似匹配**：编辑距离动态规划 + 回溯，报告错配预算内的匹配起点
//! - **反向互补搜索**：对任意匹配器同时搜索模式的反向互补
//! - **k-mer 统计**：频率表、最高频子串、滑窗聚簇、GC 偏斜最小位置、容错高频 k-mer
//!
//! ## 快速示例
//!
//! ```rust
//! use genomics_algo::align::{boyer_moore_match, naive_match, approximate_match, with_reverse_complement};
//! use genomics_algo::kmer::{pattern_clumps, minimum_skew_positions};
//!
//! let text = b"GACTACGGAGACT";
//! assert_eq!(boyer_moore_match(b"ACT", text), naive_match(b"ACT", text));
//!
//! let hits = with_reverse_complement(&naive_match, b"CCC", b"AAAAAAAAAACCCAAAAAAAAAAGGGAAAAAAAAAA").unwrap();
//! assert_eq!(hits, vec![10, 23]);
//!
//! assert_eq!(approximate_match(b"GCGTATGC", b"TATTGGCTATACGGTT", 2), vec![5]);
//!
//! let clumps = pattern_clumps(b"GACAGAC", 3, 7, 2).unwrap();
//! assert!(clumps.contains(&b"GAC"[..]));
//!
//! assert_eq!(minimum_skew_positions(b"CATGGGCATCGGCCATACGCCGAATA").unwrap(), vec![20]);
//! ```
//!
//! ## 模块说明
//!
//! - [`align`]：朴素 / Boyer-Moore 精确匹配、DP 近似匹配、反向互补包装
//! - [`kmer`]：k-mer 频率与基序统计
//! - [`reads`]：read 批次的 GC 与碱基组成
//! - [`io`]：FASTA / FASTQ 读取
//! - [`util`]：反向互补、碱基校验、Hamming / 编辑距离等工具函数
//!
//! 库本身只通过 `log` 输出日志，不安装任何 logger。

pub mod align;
pub mod error;
pub mod io;
pub mod kmer;
pub mod reads;
pub mod util;

pub use error::{Error, Result};
