//! Base complement table and reverse-complementation.

/// Complement of a single base.
///
/// Swaps `A<->T` and `C<->G` in either case, keeps `X`, `N` and `-` as is.
/// Any other character is returned unchanged after a warning.
pub fn complement(base: char) -> char {
    match base {
        'A' => 'T',
        'T' => 'A',
        'C' => 'G',
        'G' => 'C',
        'X' => 'X',
        'N' => 'N',
        'a' => 't',
        't' => 'a',
        'c' => 'g',
        'g' => 'c',
        'x' => 'x',
        'n' => 'n',
        '-' => '-',
        other => {
            log::warn!("no complement for base {other:?}, keeping it");
            other
        }
    }
}

/// Reverse complement of a sequence. Never fails.
pub fn reverse_complement(seq: &str) -> String {
    seq.chars().rev().map(complement).collect()
}
