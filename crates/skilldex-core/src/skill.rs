use serde::{Deserialize, Serialize};

/// Externally assigned skill identifier. Unique in the source data;
/// uniqueness is assumed, not enforced here.
pub type SkillId = i64;

/// A single skill record from the source dataset.
///
/// The shape is fixed: a source record missing a field (or carrying a
/// wrongly typed one) fails deserialization rather than producing a
/// partial record. Unknown extra fields in the source are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
    /// Free-form category, e.g. "Languages" or "Frameworks".
    pub category: String,
    /// Open set of levels, e.g. "Beginner", "Expert". Not an enum.
    pub proficiency: String,
}

impl Skill {
    /// Case-insensitive exact match on proficiency.
    pub fn proficiency_is(&self, level: &str) -> bool {
        self.proficiency.to_lowercase() == level.to_lowercase()
    }

    /// Case-insensitive substring match on category.
    pub fn category_contains(&self, fragment: &str) -> bool {
        self.category
            .to_lowercase()
            .contains(&fragment.to_lowercase())
    }

    /// Case-insensitive exact match on category. Distinct from
    /// [`Skill::category_contains`]: "lang" matches "Languages" there
    /// but not here.
    pub fn category_is(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}
