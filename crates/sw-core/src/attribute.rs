//! The six character attributes and their value set.

use serde::{Deserialize, Serialize};

/// One of the six character attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Attribute {
    /// Raw physical power.
    Might,
    /// Agility, coordination, and precision.
    Finesse,
    /// Toughness and stamina.
    Endurance,
    /// Perception, reasoning, and memory.
    Wits,
    /// Resolve and supernatural control.
    Will,
    /// Force of personality.
    Presence,
}

impl Attribute {
    /// All attributes in canonical order.
    pub const ALL: [Attribute; 6] = [
        Attribute::Might,
        Attribute::Finesse,
        Attribute::Endurance,
        Attribute::Wits,
        Attribute::Will,
        Attribute::Presence,
    ];
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Might => "Might",
            Self::Finesse => "Finesse",
            Self::Endurance => "Endurance",
            Self::Wits => "Wits",
            Self::Will => "Will",
            Self::Presence => "Presence",
        };
        write!(f, "{name}")
    }
}

/// A full set of attribute values for one character.
///
/// Values are plain integers; the usual range during play is 1..=5 but the
/// model does not enforce it, since rules effects can push values outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttributeSet {
    /// Might value.
    pub might: i32,
    /// Finesse value.
    pub finesse: i32,
    /// Endurance value.
    pub endurance: i32,
    /// Wits value.
    pub wits: i32,
    /// Will value.
    pub will: i32,
    /// Presence value.
    pub presence: i32,
}

impl AttributeSet {
    /// Creates a set with the given values, in canonical attribute order.
    pub fn new(
        might: i32,
        finesse: i32,
        endurance: i32,
        wits: i32,
        will: i32,
        presence: i32,
    ) -> Self {
        Self {
            might,
            finesse,
            endurance,
            wits,
            will,
            presence,
        }
    }

    /// Returns the value of a single attribute.
    pub fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Might => self.might,
            Attribute::Finesse => self.finesse,
            Attribute::Endurance => self.endurance,
            Attribute::Wits => self.wits,
            Attribute::Will => self.will,
            Attribute::Presence => self.presence,
        }
    }

    /// Sets the value of a single attribute.
    pub fn set(&mut self, attribute: Attribute, value: i32) {
        match attribute {
            Attribute::Might => self.might = value,
            Attribute::Finesse => self.finesse = value,
            Attribute::Endurance => self.endurance = value,
            Attribute::Wits => self.wits = value,
            Attribute::Will => self.will = value,
            Attribute::Presence => self.presence = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_matches_fields() {
        let set = AttributeSet::new(3, 2, 4, 1, 0, -1);
        assert_eq!(set.get(Attribute::Might), 3);
        assert_eq!(set.get(Attribute::Finesse), 2);
        assert_eq!(set.get(Attribute::Endurance), 4);
        assert_eq!(set.get(Attribute::Wits), 1);
        assert_eq!(set.get(Attribute::Will), 0);
        assert_eq!(set.get(Attribute::Presence), -1);
    }

    #[test]
    fn set_round_trips() {
        let mut set = AttributeSet::default();
        for attribute in Attribute::ALL {
            set.set(attribute, 2);
            assert_eq!(set.get(attribute), 2);
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(Attribute::Might.to_string(), "Might");
        assert_eq!(Attribute::Presence.to_string(), "Presence");
    }

    #[test]
    fn serde_round_trip() {
        let set = AttributeSet::new(3, 2, 2, 1, 1, 2);
        let json = serde_json::to_string(&set).unwrap();
        let back: AttributeSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
