use std::iter::FusedIterator;

use crate::{RlpError, RlpItem};

/// Iterator over RLP items encoded back-to-back in a single buffer.
///
/// Iteration stops at the end of the buffer or after the first error.
#[derive(Clone, Debug)]
pub struct RlpSequence<'a> {
    buf: &'a [u8],
    failed: bool,
}

impl<'a> RlpSequence<'a> {
    /// Constructs a new instance over `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, failed: false }
    }

    /// Returns the bytes that have not been consumed yet.
    pub fn remaining(&self) -> &'a [u8] {
        self.buf
    }
}

impl Iterator for RlpSequence<'_> {
    type Item = Result<RlpItem, RlpError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.buf.is_empty() {
            return None;
        }

        let result = RlpItem::decode_next(&mut self.buf);
        self.failed = result.is_err();

        Some(result)
    }
}

impl FusedIterator for RlpSequence<'_> {}
