//! Fixed storage quota
//!
//! The quota holds no state of its own; callers pass the current usage, which
//! [`MediaStore::used_bytes`](super::MediaStore::used_bytes) recomputes from
//! the upload directory on every call.

/// Default quota: 200 MiB
pub const DEFAULT_QUOTA_BYTES: u64 = 200 * 1024 * 1024;

/// Maximum total bytes of stored files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quota {
    limit: u64,
}

impl Quota {
    #[must_use]
    pub const fn new(limit: u64) -> Self {
        Self { limit }
    }

    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.limit
    }

    /// Bytes still free given `used`
    #[must_use]
    pub const fn available(&self, used: u64) -> u64 {
        self.limit.saturating_sub(used)
    }

    /// No further uploads fit, whatever their size
    #[must_use]
    pub const fn is_reached(&self, used: u64) -> bool {
        used >= self.limit
    }

    /// An upload of `incoming` bytes fits next to `used`
    #[must_use]
    pub const fn admits(&self, used: u64, incoming: u64) -> bool {
        match used.checked_add(incoming) {
            Some(total) => total <= self.limit,
            None => false,
        }
    }

    /// Fraction of the quota in use, clamped to `0.0..=1.0`
    #[must_use]
    pub fn usage_ratio(&self, used: u64) -> f64 {
        if self.limit == 0 {
            return 1.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = used as f64 / self.limit as f64;
        ratio.clamp(0.0, 1.0)
    }
}

impl Default for Quota {
    fn default() -> Self {
        Self::new(DEFAULT_QUOTA_BYTES)
    }
}
