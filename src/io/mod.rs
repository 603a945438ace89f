//! 基因组 FASTA 与测序 FASTQ 的读取，作为算法的输入来源。

pub mod fasta;
pub mod fastq;

pub use fasta::{genome_from_reader, read_genome, FastaReader, FastaRecord};
pub use fastq::{read_fastq, reads_from_reader, FastqReader, FastqRecord};
