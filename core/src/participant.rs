// Copyright (c) 2024 The Botho Foundation

use serde::{Deserialize, Serialize};

/// One entrant in a giveaway draw.
///
/// Names need not be unique: two entries with the same name are distinct
/// participants, identified by their position in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Display name shown on the reel.
    pub name: String,

    /// Draw weight: a participant with multiplier N is N times as likely to
    /// win as one with multiplier 1. A missing field deserializes to 0 and
    /// contributes nothing to the sampling pool; the weight substitution to
    /// 1 happens only at render time via [`Participant::display_multiplier`].
    #[serde(default)]
    pub multiplier: u32,
}

impl Participant {
    /// Create a participant with the given name and weight.
    pub fn new(name: impl Into<String>, multiplier: u32) -> Self {
        Self {
            name: name.into(),
            multiplier,
        }
    }

    /// Multiplier as shown on a reel frame: unweighted entries render as 1x.
    pub fn display_multiplier(&self) -> u32 {
        self.multiplier.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_multiplier_deserializes_to_zero() {
        let p: Participant = serde_json::from_str(r#"{"name":"ana"}"#).unwrap();
        assert_eq!(p.multiplier, 0);
        assert_eq!(p.display_multiplier(), 1);
    }

    #[test]
    fn test_display_multiplier_passes_weights_through() {
        assert_eq!(Participant::new("bea", 3).display_multiplier(), 3);
    }
}
