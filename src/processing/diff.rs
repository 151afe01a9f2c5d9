//! Unused-address selection.

use std::collections::HashSet;

/// Candidates not present in the used set, candidate order preserved.
///
/// Membership is exact string equality.
pub fn find_unused_ips(used: &HashSet<String>, mut candidates: Vec<String>) -> Vec<String> {
    candidates.retain(|ip| !used.contains(ip));
    candidates
}
