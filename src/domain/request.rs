// SPDX-License-Identifier: MPL-2.0
//! Correlation ids for asynchronous service calls.

/// Identifies one issued service call.
///
/// Workflows stamp every call they issue with a fresh id and only accept a
/// completion whose id matches the call they are still waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RequestId(u64);

impl RequestId {
    /// Returns the id following this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}
