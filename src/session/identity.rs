//! Visitor id allocation.

use rand::Rng;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Range of the random tag mixed into every id.
const TAG_RANGE: std::ops::RangeInclusive<u16> = 100..=999;

/// An id issued to a first-time visitor, rendered as `<prefix><tag>_<sequence>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitorId {
    prefix: String,
    tag: u16,
    sequence: u64,
}

impl VisitorId {
    pub fn tag(&self) -> u16 {
        self.tag
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

impl fmt::Display for VisitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}_{}", self.prefix, self.tag, self.sequence)
    }
}

/// Issues visitor ids from a counter shared by every connection handler.
///
/// The sequence starts at 1 for each allocator, so ids are only unique for
/// the lifetime of the process that owns it.
#[derive(Debug)]
pub struct IdAllocator {
    prefix: String,
    counter: AtomicU64,
}

impl IdAllocator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }

    /// Mints a new id. The increment and the read of the new sequence value
    /// happen in one atomic step, so concurrent callers never share a value.
    pub fn allocate(&self) -> VisitorId {
        let sequence = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        let tag = rand::thread_rng().gen_range(TAG_RANGE);

        VisitorId {
            prefix: self.prefix.clone(),
            tag,
            sequence,
        }
    }

    /// Number of ids issued so far.
    pub fn issued(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_starts_at_one() {
        let ids = IdAllocator::new("User");
        assert_eq!(ids.issued(), 0);

        let first = ids.allocate();
        assert_eq!(first.sequence(), 1);
        assert!(first.to_string().starts_with("User"));
        assert!(first.to_string().ends_with("_1"));
        assert_eq!(ids.issued(), 1);
    }
}
