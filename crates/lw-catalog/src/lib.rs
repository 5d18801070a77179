//! Static airline catalog
//!
//! Maps ICAO airline codes to IATA codes and display names. ICAO is the
//! lookup key on the device and the output filename; IATA is what the logo
//! CDN keys its images by.

mod airlines;

pub use airlines::AIRLINES;

/// One airline in the catalog.
///
/// The table is embedded in the binary; entries are never constructed at
/// runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AirlineEntry {
    /// Three-letter ICAO code, uppercase. Device-side lookup key.
    pub icao: &'static str,
    /// Two-character IATA code. Used in the logo CDN URL.
    pub iata: &'static str,
    /// Human-readable airline name, for logging only.
    pub name: &'static str,
}

/// All catalog entries, ordered roughly by global passenger volume so
/// partial runs cover the most common airlines first.
pub fn all() -> &'static [AirlineEntry] {
    AIRLINES
}

/// Look up an airline by ICAO code (case-insensitive).
pub fn find_by_icao(code: &str) -> Option<&'static AirlineEntry> {
    AIRLINES.iter().find(|a| a.icao.eq_ignore_ascii_case(code))
}

/// Number of airlines in the catalog.
pub fn len() -> usize {
    AIRLINES.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_not_empty() {
        assert!(len() > 50);
    }

    #[test]
    fn test_icao_codes_unique() {
        let mut seen = HashSet::new();
        for entry in all() {
            assert!(seen.insert(entry.icao), "duplicate ICAO: {}", entry.icao);
        }
    }

    #[test]
    fn test_icao_codes_uppercase_three_chars() {
        for entry in all() {
            assert_eq!(entry.icao.len(), 3, "bad ICAO length: {}", entry.icao);
            assert!(
                entry.icao.chars().all(|c| c.is_ascii_uppercase()),
                "ICAO not uppercase: {}",
                entry.icao
            );
        }
    }

    #[test]
    fn test_iata_codes_two_chars() {
        for entry in all() {
            assert_eq!(entry.iata.len(), 2, "bad IATA length: {}", entry.iata);
        }
    }

    #[test]
    fn test_names_non_empty() {
        for entry in all() {
            assert!(!entry.name.is_empty(), "empty name for {}", entry.icao);
        }
    }

    #[test]
    fn test_find_by_icao_case_insensitive() {
        let upper = find_by_icao("DLH").expect("Lufthansa should be present");
        let lower = find_by_icao("dlh").expect("lookup should ignore case");
        assert_eq!(upper, lower);
        assert_eq!(upper.iata, "LH");
    }

    #[test]
    fn test_find_by_icao_missing() {
        assert!(find_by_icao("ZZZ").is_none());
    }
}
