use crate::error::QualityError;

/// Highest Phred value covered by the error-probability table.
pub const MAX_PHRED: usize = 128;

const PHRED_OFFSET: u32 = 33;

lazy_static::lazy_static! {
    static ref ERROR_PROB: Vec<f64> = error_probabilities(MAX_PHRED);
}

/// Error probability `10^(-q/10)` for every Phred value `q` in `0..=max`.
pub fn error_probabilities(max: usize) -> Vec<f64> {
    (0..=max).map(|q| 10_f64.powf(q as f64 / -10.0)).collect()
}

#[inline]
fn phred(ch: char, offset: usize) -> Result<usize, QualityError> {
    (ch as u32)
        .checked_sub(PHRED_OFFSET)
        .map(|q| q as usize)
        .filter(|&q| q <= MAX_PHRED)
        .ok_or(QualityError::OutOfRange { ch, offset })
}

/// Average basecall quality of a read.
///
/// Each Phred+33 character is turned into an error probability, the
/// probabilities are averaged and the mean is converted back to the Phred
/// scale. An empty string scores `0.0`. With `round` set the result is rounded
/// half to even.
pub fn mean_quality(quals: &str, round: bool) -> Result<f64, QualityError> {
    if quals.is_empty() {
        return Ok(0.0);
    }

    let mut sum = 0.0;
    let mut n = 0usize;
    for (offset, ch) in quals.chars().enumerate() {
        sum += ERROR_PROB[phred(ch, offset)?];
        n += 1;
    }

    let mq = -10.0 * (sum / n as f64).log10();
    Ok(if round { mq.round_ties_even() } else { mq })
}
