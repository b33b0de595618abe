use fastx_utils::{
    FastxError, FastxRecord, RecordFormat, complement, error_probabilities, get_runid,
    load_primers, mean_quality, record_size, reverse_complement, write_fastq,
};
use std::io::Write;

fn fq(name: &str, seq: &str, qual: Option<&str>) -> FastxRecord {
    FastxRecord {
        id: name.split(' ').next().unwrap().to_string(),
        name: name.to_string(),
        seq: seq.to_string(),
        qual: qual.map(str::to_string),
    }
}

#[test]
fn complement_table() {
    for (a, b) in [('A', 'T'), ('C', 'G'), ('a', 't'), ('c', 'g')] {
        assert_eq!(complement(a), b);
        assert_eq!(complement(b), a);
    }
    for c in ['X', 'N', 'x', 'n', '-'] {
        assert_eq!(complement(c), c);
    }
    assert_eq!(complement('Z'), 'Z');
}

#[test]
fn reverse_complement_sequences() {
    assert_eq!(reverse_complement(""), "");
    assert_eq!(reverse_complement("ATGC"), "GCAT");
    assert_eq!(reverse_complement("aaCGn-"), "-nCGtt");
    assert_eq!(reverse_complement("AZ"), "ZT");

    let s = "ACGTNXacgtnx-";
    assert_eq!(reverse_complement(&reverse_complement(s)), s);
}

#[test]
fn reverse_complement_record_reverses_quality() {
    let rc = fq("r1", "AACG", Some("!#%I")).reverse_complement();
    assert_eq!(rc.seq, "CGTT");
    assert_eq!(rc.qual.as_deref(), Some("I%#!"));
    assert_eq!(rc.name, "r1");

    let rc = fq("r2", "AC", None).reverse_complement();
    assert_eq!(rc.seq, "GT");
    assert_eq!(rc.qual, None);
}

#[test]
fn mean_quality_values() {
    assert_eq!(mean_quality("", false).unwrap(), 0.0);
    assert_eq!(mean_quality("!!!!", true).unwrap(), 0.0);
    assert!((mean_quality("IIII", false).unwrap() - 40.0).abs() < 1e-9);

    // Q20 and Q10 average to an error rate of 0.055
    let mq = mean_quality("5+", false).unwrap();
    assert!((mq - 12.596_373_105_057_56).abs() < 1e-9);
    assert_eq!(mean_quality("5+", true).unwrap(), 13.0);
}

#[test]
fn mean_quality_rejects_out_of_range() {
    assert!(mean_quality("II I", false).is_err());
    // '!' + 129
    let too_high = char::from_u32(33 + 129).unwrap().to_string();
    assert!(mean_quality(&too_high, false).is_err());
    let top = char::from_u32(33 + 128).unwrap().to_string();
    assert!((mean_quality(&top, false).unwrap() - 128.0).abs() < 1e-6);
}

#[test]
fn error_probability_table() {
    let tab = error_probabilities(128);
    assert_eq!(tab.len(), 129);
    assert_eq!(tab[0], 1.0);
    assert!((tab[10] - 0.1).abs() < 1e-12);
    assert!((tab[30] - 0.001).abs() < 1e-12);
}

#[test]
fn runid_extraction() {
    assert_eq!(get_runid("read1 runid=abc123 ch=4"), "abc123");
    assert_eq!(get_runid("read1 ch=4"), "NA");
    assert_eq!(get_runid("read1 runid=a runid=b"), "NA");
    assert_eq!(get_runid("read1 runid"), "NA");
}

#[test]
fn fastq_writer() {
    let mut out = Vec::new();
    write_fastq(&fq("r1 desc", "ACGT", Some("IIII")), &mut out).unwrap();
    write_fastq(&fq("r2", "AC", None), &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "@r1 desc\nACGT\n+\nIIII\n@r2\nAC\n+\n!!\n"
    );
}

#[test]
fn size_estimates() {
    let q = fq("r1", "ACGT", Some("IIII"));
    assert_eq!(record_size(&q, RecordFormat::Fastq), 16);
    assert_eq!(record_size(&q, RecordFormat::Fasta), 9);

    let a = fq("r1", "ACGT", None);
    assert_eq!(record_size(&a, RecordFormat::Fastq), 9);

    assert_eq!(q.size_as("fastq").unwrap(), 16);
    assert!(matches!(
        q.size_as("bam"),
        Err(FastxError::UnknownFormat(tag)) if tag == "bam"
    ));
}

#[test]
fn primers_with_reverse_complements() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(f, ">SSP\nTTTCTGTTGG\n>VNP\nACTTGCCTGTCG\n").unwrap();
    f.flush().unwrap();

    let primers = load_primers(f.path()).unwrap();
    assert_eq!(primers.len(), 4);
    assert_eq!(primers["SSP"], "TTTCTGTTGG");
    assert_eq!(primers["-SSP"], "CCAACAGAAA");
    assert_eq!(primers["VNP"], "ACTTGCCTGTCG");
    assert_eq!(primers["-VNP"], "CGACAGGCAAGT");
}

#[test]
fn primers_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_primers(dir.path().join("primers.fa")).unwrap_err();
    assert!(matches!(err, FastxError::Io { .. }));
}
