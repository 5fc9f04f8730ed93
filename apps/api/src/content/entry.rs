use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Stable identity of a collection entry. Assigned once when the entry is added and
/// never rewritten by any editor operation, whatever its position in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for EntryId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Implemented by every type stored in an ordered content collection.
pub trait Entry {
    fn id(&self) -> EntryId;
}

/// Skill proficiency on a 1–5 scale. Out-of-range values clamp into range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillLevel(u8);

impl SkillLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(level: i64) -> Self {
        Self(level.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for SkillLevel {
    fn default() -> Self {
        Self(3)
    }
}

// Form inputs have historically stored the level as a string ("4"), so accept both.
impl<'de> Deserialize<'de> for SkillLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Float(f64),
            Text(String),
        }

        let level = match Raw::deserialize(deserializer)? {
            Raw::Int(n) => n,
            Raw::Float(f) => f.round() as i64,
            Raw::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| serde::de::Error::custom(format!("invalid skill level '{s}'")))?,
        };
        Ok(Self::new(level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_level_clamps() {
        assert_eq!(SkillLevel::new(0).get(), 1);
        assert_eq!(SkillLevel::new(9).get(), 5);
        assert_eq!(SkillLevel::new(4).get(), 4);
    }

    #[test]
    fn test_skill_level_default_is_three() {
        assert_eq!(SkillLevel::default().get(), 3);
    }

    #[test]
    fn test_skill_level_accepts_string_form_value() {
        let level: SkillLevel = serde_json::from_str("\"4\"").unwrap();
        assert_eq!(level.get(), 4);
        let level: SkillLevel = serde_json::from_str("7").unwrap();
        assert_eq!(level.get(), 5);
    }

    #[test]
    fn test_entry_id_serializes_as_plain_uuid() {
        let uuid = Uuid::new_v4();
        let json = serde_json::to_string(&EntryId::from(uuid)).unwrap();
        assert_eq!(json, format!("\"{uuid}\""));
    }
}
