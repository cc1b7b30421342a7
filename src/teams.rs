use once_cell::sync::Lazy;
use std::collections::HashMap;

/// NBA team abbreviation → stats.nba.com team id.
pub static ABBR_TO_TEAM_ID: Lazy<HashMap<&'static str, i64>> = Lazy::new(|| {
    HashMap::from([
        ("ATL", 1610612737),
        ("BOS", 1610612738),
        ("BKN", 1610612751),
        ("CHA", 1610612766),
        ("CHI", 1610612741),
        ("CLE", 1610612739),
        ("DAL", 1610612742),
        ("DEN", 1610612743),
        ("DET", 1610612765),
        ("GSW", 1610612744),
        ("HOU", 1610612745),
        ("IND", 1610612754),
        ("LAC", 1610612746),
        ("LAL", 1610612747),
        ("MEM", 1610612763),
        ("MIA", 1610612748),
        ("MIL", 1610612749),
        ("MIN", 1610612750),
        ("NOP", 1610612740),
        ("NYK", 1610612752),
        ("OKC", 1610612760),
        ("ORL", 1610612753),
        ("PHI", 1610612755),
        ("PHX", 1610612756),
        ("POR", 1610612757),
        ("SAC", 1610612758),
        ("SAS", 1610612759),
        ("TOR", 1610612761),
        ("UTA", 1610612762),
        ("WAS", 1610612764),
    ])
});

/// Reverse of [`ABBR_TO_TEAM_ID`], derived by inversion.
pub static TEAM_ID_TO_ABBR: Lazy<HashMap<i64, &'static str>> =
    Lazy::new(|| ABBR_TO_TEAM_ID.iter().map(|(&abbr, &id)| (id, abbr)).collect());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_all_thirty_teams() {
        assert_eq!(ABBR_TO_TEAM_ID.len(), 30);
        assert_eq!(TEAM_ID_TO_ABBR.len(), 30);
    }

    #[test]
    fn reverse_map_inverts_the_forward_map() {
        for (abbr, id) in ABBR_TO_TEAM_ID.iter() {
            assert_eq!(TEAM_ID_TO_ABBR.get(id), Some(abbr));
        }
    }

    #[test]
    fn known_lookups() {
        assert_eq!(ABBR_TO_TEAM_ID.get("MIL"), Some(&1610612749));
        assert_eq!(TEAM_ID_TO_ABBR.get(&1610612738), Some(&"BOS"));
        assert_eq!(ABBR_TO_TEAM_ID.get("XYZ"), None);
    }
}
