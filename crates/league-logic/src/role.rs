//! Position label classification
//!
//! Roster labels are free text typed by club admins, mostly in Portuguese.
//! They are folded into a handful of buckets used only for team balancing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Normalized playing-position category
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleBucket {
    Goalkeeper,
    Defender,
    Midfielder,
    Attacker,
    Unspecified,
}

const GOALKEEPER_KEYWORDS: &[&str] = &["goleiro", "goleira", "gol", "keeper", "goalkeeper", "gk"];
const DEFENDER_KEYWORDS: &[&str] = &[
    "zagueiro", "zagueira", "lateral", "defensor", "beque", "defender", "back",
];
const MIDFIELDER_KEYWORDS: &[&str] = &["meio", "volante", "meia", "armador", "midfielder", "mid"];
const ATTACKER_KEYWORDS: &[&str] = &[
    "atacante", "ponta", "centroavante", "pivô", "pivo", "ala", "forward", "striker", "winger",
];

impl RoleBucket {
    /// Order in which buckets are dealt out by the drawer. Scarce roles go first.
    pub const DRAW_ORDER: [RoleBucket; 5] = [
        RoleBucket::Goalkeeper,
        RoleBucket::Defender,
        RoleBucket::Midfielder,
        RoleBucket::Attacker,
        RoleBucket::Unspecified,
    ];

    fn keywords(self) -> &'static [&'static str] {
        match self {
            RoleBucket::Goalkeeper => GOALKEEPER_KEYWORDS,
            RoleBucket::Defender => DEFENDER_KEYWORDS,
            RoleBucket::Midfielder => MIDFIELDER_KEYWORDS,
            RoleBucket::Attacker => ATTACKER_KEYWORDS,
            RoleBucket::Unspecified => &[],
        }
    }

    /// Position in [`RoleBucket::DRAW_ORDER`]
    pub fn index(self) -> usize {
        match self {
            RoleBucket::Goalkeeper => 0,
            RoleBucket::Defender => 1,
            RoleBucket::Midfielder => 2,
            RoleBucket::Attacker => 3,
            RoleBucket::Unspecified => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RoleBucket::Goalkeeper => "GOALKEEPER",
            RoleBucket::Defender => "DEFENDER",
            RoleBucket::Midfielder => "MIDFIELDER",
            RoleBucket::Attacker => "ATTACKER",
            RoleBucket::Unspecified => "UNSPECIFIED",
        }
    }
}

impl fmt::Display for RoleBucket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoleBucket {
    type Err = std::convert::Infallible;

    /// Same as [`classify_role`]; never fails.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(classify_role(Some(s)))
    }
}

/// Map a free-text position label to a bucket.
///
/// Case-insensitive substring match, checked goalkeeper, defender,
/// midfielder, attacker in that order. Missing or unmatched labels are
/// `Unspecified`.
pub fn classify_role(label: Option<&str>) -> RoleBucket {
    let label = match label.map(str::trim) {
        Some(l) if !l.is_empty() => l.to_lowercase(),
        _ => return RoleBucket::Unspecified,
    };

    RoleBucket::DRAW_ORDER
        .into_iter()
        .take(4)
        .find(|bucket| bucket.keywords().iter().any(|kw| label.contains(kw)))
        .unwrap_or(RoleBucket::Unspecified)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_labels_are_unspecified() {
        assert_eq!(classify_role(None), RoleBucket::Unspecified);
        assert_eq!(classify_role(Some("")), RoleBucket::Unspecified);
        assert_eq!(classify_role(Some("   ")), RoleBucket::Unspecified);
    }

    #[test]
    fn test_portuguese_labels() {
        assert_eq!(classify_role(Some("Goleiro")), RoleBucket::Goalkeeper);
        assert_eq!(classify_role(Some("ZAGUEIRO")), RoleBucket::Defender);
        assert_eq!(classify_role(Some("Lateral esquerdo")), RoleBucket::Defender);
        assert_eq!(classify_role(Some("Volante")), RoleBucket::Midfielder);
        assert_eq!(classify_role(Some("Meio-campo")), RoleBucket::Midfielder);
        assert_eq!(classify_role(Some("Atacante")), RoleBucket::Attacker);
        assert_eq!(classify_role(Some("PIVÔ")), RoleBucket::Attacker);
    }

    #[test]
    fn test_english_labels() {
        assert_eq!(classify_role(Some("GK")), RoleBucket::Goalkeeper);
        assert_eq!(classify_role(Some("Centre Back")), RoleBucket::Defender);
        assert_eq!(classify_role(Some("Midfielder")), RoleBucket::Midfielder);
        assert_eq!(classify_role(Some("Striker")), RoleBucket::Attacker);
    }

    #[test]
    fn test_priority_order_wins_on_overlap() {
        // Contains both a defender and an attacker keyword
        assert_eq!(classify_role(Some("lateral / ponta")), RoleBucket::Defender);
        // Contains both a goalkeeper and a midfielder keyword
        assert_eq!(classify_role(Some("goleiro ou meia")), RoleBucket::Goalkeeper);
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(classify_role(Some("coringa")), RoleBucket::Unspecified);
        assert_eq!("coringa".parse::<RoleBucket>(), Ok(RoleBucket::Unspecified));
    }

    #[test]
    fn test_draw_order_indices() {
        for (i, bucket) in RoleBucket::DRAW_ORDER.iter().enumerate() {
            assert_eq!(bucket.index(), i);
        }
    }
}
