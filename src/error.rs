//! 算法层统一错误类型。
//!
//! 文件读取（[`crate::io`]）走 `anyhow`，这里只描述算法本身的失败。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// 输入不合法：k 为 0、空文本、非 ACGT 碱基、空 read 批次等
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// 反向互补时遇到互补表之外的字符
    #[error("no complement for base {base:?} at position {position}")]
    UnknownBase { base: char, position: usize },

    /// Hamming 距离要求两条序列等长
    #[error("sequences differ in length: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error(
        "parameters out of range: must hold len(genome) >= k >= d. \
         Received: len(genome)={genome_len}, k={k}, d={d}."
    )]
    ParameterRange { genome_len: usize, k: usize, d: usize },

    /// k > 12 或 d > 3 时的耗时预警（仅在 `CostPolicy::Deny` 下返回）
    #[error("the large input values k={k} and/or d={d} might cause long run times")]
    CostlySearch { k: usize, d: usize },

    #[error("thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, Error>;
