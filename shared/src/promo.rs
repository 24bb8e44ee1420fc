use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::prize::Prize;

pub const PROMO_PREFIX: &str = "SPIN";
pub const PROMO_SUFFIX_LEN: usize = 6;
const BASE36_UPPER: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// `SPIN` followed by six random upper-case base-36 characters.
/// Codes are not guaranteed unique.
pub fn generate_promo_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    let suffix: String = (0..PROMO_SUFFIX_LEN)
        .map(|_| BASE36_UPPER[rng.gen_range(0..BASE36_UPPER.len())] as char)
        .collect();
    format!("{}{}", PROMO_PREFIX, suffix)
}

pub fn is_valid_promo_code(code: &str) -> bool {
    match code.strip_prefix(PROMO_PREFIX) {
        Some(suffix) => {
            suffix.len() == PROMO_SUFFIX_LEN
                && suffix
                    .chars()
                    .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        }
        None => false,
    }
}

/// A finished spin: the prize and, unless it is the no-luck entry, its code.
///
/// The code is drawn once here, so re-rendering an outcome never changes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub prize: Prize,
    pub promo_code: Option<String>,
}

impl Outcome {
    pub fn new<R: Rng + ?Sized>(prize: Prize, rng: &mut R) -> Self {
        let promo_code = if prize.is_no_luck() {
            None
        } else {
            Some(generate_promo_code(rng))
        };
        Self { prize, promo_code }
    }

    pub fn is_no_luck(&self) -> bool {
        self.prize.is_no_luck()
    }
}
