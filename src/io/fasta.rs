use anyhow::{Context, Result};
use std::io::BufRead;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct FastaRecord {
    pub id: String,
    pub desc: Option<String>,
    pub seq: Vec<u8>,
}

pub struct FastaReader<R: BufRead> {
    reader: R,
    buf: String,
    done: bool,
    peek_header: Option<String>,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            done: false,
            peek_header: None,
        }
    }

    pub fn next_record(&mut self) -> Result<Option<FastaRecord>> {
        if self.done {
            return Ok(None);
        }

        // Sequence lines before the first header belong to an unnamed record.
        let header = match self.peek_header.take() {
            Some(h) => h,
            None => {
                let mut seq = Vec::new();
                loop {
                    self.buf.clear();
                    if self.reader.read_line(&mut self.buf)? == 0 {
                        self.done = true;
                        return Ok((!seq.is_empty()).then(|| FastaRecord { id: String::new(), desc: None, seq }));
                    }
                    if let Some(h) = self.buf.strip_prefix('>') {
                        let h = h.trim().to_string();
                        if seq.is_empty() {
                            break h;
                        }
                        self.peek_header = Some(h);
                        return Ok(Some(FastaRecord { id: String::new(), desc: None, seq }));
                    }
                    push_seq_line(&self.buf, &mut seq);
                }
            }
        };

        let mut parts = header.splitn(2, char::is_whitespace);
        let id = parts.next().unwrap_or("").to_string();
        let desc = parts
            .next()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let mut seq: Vec<u8> = Vec::new();
        loop {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                self.done = true;
                break;
            }
            if let Some(h) = self.buf.strip_prefix('>') {
                self.peek_header = Some(h.trim().to_string());
                break;
            }
            push_seq_line(&self.buf, &mut seq);
        }

        Ok(Some(FastaRecord { id, desc, seq }))
    }
}

// Case is kept as-is; soft-masked bases stay lowercase.
fn push_seq_line(line: &str, seq: &mut Vec<u8>) {
    seq.extend(
        line.bytes()
            .filter(|b| !matches!(b, b'\n' | b'\r' | b' ' | b'\t')),
    );
}

/// 读取所有记录并拼接为单条序列（去掉 '>' 头行与换行）
pub fn genome_from_reader<R: BufRead>(reader: R) -> Result<Vec<u8>> {
    let mut fa = FastaReader::new(reader);
    let mut genome = Vec::new();
    while let Some(rec) = fa.next_record()? {
        genome.extend_from_slice(&rec.seq);
    }
    Ok(genome)
}

pub fn read_genome<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let fh = std::fs::File::open(path)
        .with_context(|| format!("cannot open genome FASTA '{}'", path.display()))?;
    genome_from_reader(std::io::BufReader::new(fh))
        .with_context(|| format!("cannot read genome FASTA '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parse_simple_fasta() {
        let data = b">chr1 first\nACgTNN\n>chr2\nAAA\n";
        let mut r = FastaReader::new(Cursor::new(&data[..]));

        let r1 = r.next_record().unwrap().unwrap();
        assert_eq!(r1.id, "chr1");
        assert_eq!(r1.desc.as_deref(), Some("first"));
        assert_eq!(r1.seq, b"ACgTNN");

        let r2 = r.next_record().unwrap().unwrap();
        assert_eq!(r2.id, "chr2");
        assert_eq!(r2.desc, None);
        assert_eq!(r2.seq, b"AAA");

        assert!(r.next_record().unwrap().is_none());
    }

    #[test]
    fn genome_concatenates_records_and_strips_line_breaks() {
        let data = b">phage desc\r\nGGGCGGCGAC\r\nCTCGCGGG\n>plasmid\nTTTT\n";
        let genome = genome_from_reader(Cursor::new(&data[..])).unwrap();
        assert_eq!(genome, b"GGGCGGCGACCTCGCGGGTTTT");
    }

    #[test]
    fn genome_without_header() {
        let data = b"ACGT\nACGT\n";
        assert_eq!(genome_from_reader(Cursor::new(&data[..])).unwrap(), b"ACGTACGT");
    }

    #[test]
    fn headerless_lines_then_record() {
        let data = b"\n\nAC\n>chr1\nGT\n";
        let mut r = FastaReader::new(Cursor::new(&data[..]));
        let r0 = r.next_record().unwrap().unwrap();
        assert_eq!(r0.id, "");
        assert_eq!(r0.seq, b"AC");
        let r1 = r.next_record().unwrap().unwrap();
        assert_eq!(r1.id, "chr1");
        assert_eq!(r1.seq, b"GT");
        assert!(r.next_record().unwrap().is_none());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_genome("/nonexistent/genome.fa").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/genome.fa"));
    }
}
