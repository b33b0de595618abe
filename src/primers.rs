use crate::complement::reverse_complement;
use crate::error::FastxError;
use crate::policy::ScanOptions;
use crate::reader::FastxReader;

use std::collections::HashMap;
use std::path::Path;

/// Load primers from a FASTA/FASTQ file.
///
/// Every record contributes `name -> seq` and `-name -> revcomp(seq)`.
pub fn load_primers<P: AsRef<Path>>(path: P) -> Result<HashMap<String, String>, FastxError> {
    let mut primers = HashMap::new();
    for rec in FastxReader::from_path(path, ScanOptions::default())? {
        let rec = rec?;
        let rc = reverse_complement(&rec.seq);
        primers.insert(format!("-{}", rec.name), rc);
        primers.insert(rec.name, rec.seq);
    }
    Ok(primers)
}
