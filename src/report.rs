//! Printing and checking what came back from the device.

use std::fmt::Write;
use crate::config::Radix;


/// Formats `values` space separated, each followed by a single space.
pub fn format_values(values: &[i32], radix: Radix) -> String {
    let mut out = String::with_capacity(values.len() * 4);
    for val in values.iter() {
        // Writing to a `String` never fails.
        let _ = match radix {
            Radix::Decimal => write!(out, "{} ", val),
            Radix::Hex => write!(out, "{:x} ", val),
        };
    }
    out
}


/// Renders a labeled dump: `[host] {label}:` followed by the values.
pub fn render_dump(label: &str, values: &[i32], radix: Radix) -> String {
    format!("[host] {}:\n{}\n", label, format_values(values, radix))
}


/// The outcome of comparing device output with host input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    Matched,
    Mismatch { index: usize, expected: i32, actual: i32 },
    LengthMismatch { expected: usize, actual: usize },
}

impl Verification {
    pub fn is_match(&self) -> bool {
        *self == Verification::Matched
    }

    pub fn message(&self) -> &'static str {
        if self.is_match() {
            "Input and output matched."
        } else {
            "Input and output did not match."
        }
    }
}

/// Compares `output` against `input` element by element, starting at the
/// first element, and reports the first difference.
pub fn verify(input: &[i32], output: &[i32]) -> Verification {
    if input.len() != output.len() {
        return Verification::LengthMismatch { expected: input.len(), actual: output.len() };
    }

    input.iter().zip(output.iter())
        .enumerate()
        .find(|&(_, (i, o))| i != o)
        .map(|(index, (&expected, &actual))| Verification::Mismatch { index, expected, actual })
        .unwrap_or(Verification::Matched)
}


/// Host input and the device output read back after a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    input: Vec<i32>,
    output: Vec<i32>,
}

impl RunReport {
    pub fn new(input: Vec<i32>, output: Vec<i32>) -> RunReport {
        RunReport { input, output }
    }

    pub fn input(&self) -> &[i32] {
        &self.input
    }

    pub fn output(&self) -> &[i32] {
        &self.output
    }

    pub fn verify(&self) -> Verification {
        verify(&self.input, &self.output)
    }

    /// Renders the input and output dumps exactly as `::print` writes them.
    pub fn render(&self, radix: Radix) -> String {
        format!("{}\n{}", render_dump("inputs", &self.input, radix),
            render_dump("outputs", &self.output, radix))
    }

    pub fn print(&self, radix: Radix) {
        print!("{}", self.render(radix));
    }
}
