use anyhow::{anyhow, Context, Result};
use std::io::BufRead;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct FastqRecord {
    pub id: String,
    pub seq: Vec<u8>,
    pub qual: Vec<u8>,
}

pub struct FastqReader<R: BufRead> {
    reader: R,
    buf: String,
    line_no: usize,
    done: bool,
}

impl<R: BufRead> FastqReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, buf: String::new(), line_no: 0, done: false }
    }

    fn read_line(&mut self) -> Result<bool> {
        self.buf.clear();
        let n = self.reader.read_line(&mut self.buf)?;
        self.line_no += 1;
        Ok(n > 0)
    }

    pub fn next_record(&mut self) -> Result<Option<FastqRecord>> {
        if self.done { return Ok(None); }

        // header; trailing blank lines end the file
        loop {
            if !self.read_line()? { self.done = true; return Ok(None); }
            if !self.buf.trim().is_empty() { break; }
        }
        let header = self.buf.strip_prefix('@')
            .ok_or_else(|| anyhow!("line {}: FASTQ header not starting with '@'", self.line_no))?;
        let id = header.split_whitespace().next().unwrap_or("").to_string();

        if !self.read_line()? { return Err(anyhow!("line {}: unexpected EOF after header", self.line_no)); }
        let seq = self.buf.trim_end().as_bytes().to_vec();

        if !self.read_line()? || !self.buf.starts_with('+') {
            return Err(anyhow!("line {}: missing '+' line", self.line_no));
        }

        if !self.read_line()? { return Err(anyhow!("line {}: missing quality line", self.line_no)); }
        let qual = self.buf.trim_end().as_bytes().to_vec();

        if qual.len() != seq.len() {
            return Err(anyhow!("line {}: seq/qual length mismatch ({} vs {})", self.line_no, seq.len(), qual.len()));
        }

        Ok(Some(FastqRecord { id, seq, qual }))
    }
}

/// 读出平行的 read 与质量串列表，下标一一对应
pub fn reads_from_reader<R: BufRead>(reader: R) -> Result<(Vec<Vec<u8>>, Vec<Vec<u8>>)> {
    let mut fq = FastqReader::new(reader);
    let mut reads = Vec::new();
    let mut quals = Vec::new();
    while let Some(rec) = fq.next_record()? {
        reads.push(rec.seq);
        quals.push(rec.qual);
    }
    Ok((reads, quals))
}

pub fn read_fastq<P: AsRef<Path>>(path: P) -> Result<(Vec<Vec<u8>>, Vec<Vec<u8>>)> {
    let path = path.as_ref();
    let fh = std::fs::File::open(path)
        .with_context(|| format!("cannot open FASTQ '{}'", path.display()))?;
    reads_from_reader(std::io::BufReader::new(fh))
        .with_context(|| format!("cannot parse FASTQ '{}'", path.display()))
}
