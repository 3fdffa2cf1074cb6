// preprocessor/prepare.rs
use crate::preprocessor::utils::{SENTINEL, is_kept, is_latin_run_char};

/// Tags every `[A-Za-z0-9_-]+` run with a leading sentinel and drops characters that are
/// neither Han, letters, marks, numbers, punctuation, separators nor the sentinel.
///
/// A dropped character still ends the Latin run it interrupts, so `ab$cd` yields two runs.
pub fn prepare(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut in_run = false;

    for c in text.chars() {
        if is_latin_run_char(c) {
            if !in_run {
                out.push(SENTINEL);
                in_run = true;
            }
            out.push(c);
            continue;
        }
        in_run = false;
        if is_kept(c) {
            out.push(c);
        }
    }

    out
}
