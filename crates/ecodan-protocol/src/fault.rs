//! Fault code translation.
//!
//! The controller reports faults as a numeric code plus two letter-index
//! bytes. The displayed fault code (the one printed in the service manual and
//! on the remote) is rebuilt from two lookup tables and a decimal re-encoding
//! of the numeric code.

use crate::constants::*;

/// Text returned when the numeric code is the communication-fault sentinel.
pub const FAULT_TEXT_COMMUNICATION: &str = "Bad communication with unit";

/// Text returned when the numeric code is the no-fault sentinel.
pub const FAULT_TEXT_NONE: &str = "No error";

/// Translate a fault report into the displayed fault string, e.g. "A3 354".
///
/// `first` and `second` are the two letter-index bytes, `code` the numeric
/// fault code. The translation is total: the first index is masked to three
/// bits, the second is masked to five bits and then clamped to the table
/// (the mask alone admits indices 21-31, which the 21-entry table does not
/// have).
pub fn translate_fault(first: u8, second: u8, code: u16) -> String {
    if code == FAULT_CODE_COMMUNICATION {
        return FAULT_TEXT_COMMUNICATION.to_string();
    }
    if code == FAULT_CODE_NONE {
        return FAULT_TEXT_NONE.to_string();
    }

    let display_code = (code >> 8) * 100 + (code & 0xFF);

    let first_idx = (first & FAULT_FIRST_LETTER_MASK) as usize;
    let second_idx = (second.wrapping_sub(1) & FAULT_SECOND_LETTER_MASK) as usize;
    let second_idx = second_idx.min(FAULT_SECOND_LETTERS.len() - 1);

    format!(
        "{}{} {}",
        FAULT_FIRST_LETTERS[first_idx], FAULT_SECOND_LETTERS[second_idx], display_code
    )
}
