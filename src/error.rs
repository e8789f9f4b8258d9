// Copyright (c) 2026 The sat-look-angle developers

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The error module contains the crate error type.
//!
//! All operations in this crate are pure and deterministic, so no error is
//! ever retried; every error is returned directly to the caller.

use thiserror::Error;

/// The error type for fallible conversions.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A conversion whose signature is part of the public contract but whose
    /// implementation is outstanding.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    /// A malformed input string, e.g. a UTM grid reference that does not
    /// have the `"ZZ B EEEEEE NNNNNNN"` shape.
    #[error("cannot parse {text:?}: {reason}")]
    Parse {
        /// The offending input.
        text: String,
        /// What was wrong with it.
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = Error::NotImplemented("MGRS conversion");
        assert_eq!("MGRS conversion is not implemented", error.to_string());

        let error = Error::Parse {
            text: "bogus".to_string(),
            reason: "expected 4 fields",
        };
        assert_eq!(
            "cannot parse \"bogus\": expected 4 fields",
            error.to_string()
        );
    }
}
