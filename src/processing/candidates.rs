//! Candidate host enumeration.

use crate::models::Prefix;

/// First assignable host octet (.0 is the network address).
pub const FIRST_HOST: u8 = 1;
/// Last assignable host octet (.255 is the broadcast address).
pub const LAST_HOST: u8 = 254;

/// All 254 host addresses under the prefix, ascending by final octet.
pub fn candidate_ips(prefix: &Prefix) -> Vec<String> {
    (FIRST_HOST..=LAST_HOST).map(|i| prefix.host(i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_candidate_count_and_bounds() {
        let candidates = candidate_ips(&Prefix::normalize("211.218.228."));
        assert_eq!(candidates.len(), 254);
        assert_eq!(candidates.first().map(String::as_str), Some("211.218.228.1"));
        assert_eq!(
            candidates.last().map(String::as_str),
            Some("211.218.228.254")
        );
    }

    #[test]
    fn test_candidates_ascending_no_duplicates() {
        let candidates = candidate_ips(&Prefix::normalize("10.0.0"));

        let octets: Vec<u8> = candidates
            .iter()
            .map(|ip| {
                ip.rsplit('.')
                    .next()
                    .expect("candidate has a final octet")
                    .parse()
                    .expect("final octet is numeric")
            })
            .collect();
        assert!(octets.windows(2).all(|w| w[0] < w[1]), "strictly ascending");

        let unique: HashSet<&String> = candidates.iter().collect();
        assert_eq!(unique.len(), candidates.len(), "no duplicates");
    }

    #[test]
    fn test_network_and_broadcast_never_generated() {
        let candidates = candidate_ips(&Prefix::normalize("10.0.0."));
        assert!(!candidates.contains(&"10.0.0.0".to_string()));
        assert!(!candidates.contains(&"10.0.0.255".to_string()));
    }
}
