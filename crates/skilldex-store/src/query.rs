use serde::Deserialize;
use std::cmp::Ordering;

use skilldex_core::Skill;

/// Filter/sort parameters for the skill list, deserialized straight
/// from the query string. Every field is optional; an absent field is
/// a no-op.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SkillQuery {
    /// Case-insensitive exact match against `proficiency`.
    pub proficiency: Option<String>,
    /// Case-insensitive substring match against `category`.
    pub category: Option<String>,
    /// Only `sort=name` is recognized; anything else keeps source order.
    pub sort: Option<String>,
}

impl SkillQuery {
    /// Apply the filters and sort to a loaded collection. Filters apply
    /// as sequential narrowing (logical AND); the sort runs last and is
    /// stable.
    pub fn apply(&self, mut skills: Vec<Skill>) -> Vec<Skill> {
        if let Some(ref level) = self.proficiency {
            skills.retain(|s| s.proficiency_is(level));
        }

        if let Some(ref fragment) = self.category {
            skills.retain(|s| s.category_contains(fragment));
        }

        if self.sort.as_deref() == Some("name") {
            skills.sort_by(|a, b| compare_names(&a.name, &b.name));
        }

        skills
    }
}

/// Ascending name ordering: case-insensitive first, with a
/// case-sensitive tiebreak so equal-ignoring-case names still order
/// deterministically.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
