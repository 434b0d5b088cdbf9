use std::path::{Path, PathBuf};
use tracing::debug;

use skilldex_core::{Result, Skill, SkillId};

/// Read-only access to the skills JSON source.
///
/// The store holds only the source path. Every [`SkillStore::load`]
/// re-reads the file, so edits to the source are visible on the next
/// request without a restart. There are no writers, so no locking.
#[derive(Debug, Clone)]
pub struct SkillStore {
    path: PathBuf,
}

impl SkillStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the JSON source.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all skills from the source, in source order.
    ///
    /// Fails with [`skilldex_core::SkilldexError::Io`] when the file is
    /// unreadable and [`skilldex_core::SkilldexError::Parse`] when the
    /// content is not a JSON array of skill records.
    pub async fn load(&self) -> Result<Vec<Skill>> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let skills: Vec<Skill> = serde_json::from_str(&raw)?;
        debug!(path = ?self.path, count = skills.len(), "loaded skills");
        Ok(skills)
    }

    /// Load and look up a single skill by id. Ids are assumed unique in
    /// the source; the first match wins.
    pub async fn find_by_id(&self, id: SkillId) -> Result<Option<Skill>> {
        let skills = self.load().await?;
        Ok(skills.into_iter().find(|s| s.id == id))
    }

    /// Load and keep only skills whose category equals `category`,
    /// case-insensitively. Full-string equality, not substring.
    pub async fn find_by_category(&self, category: &str) -> Result<Vec<Skill>> {
        let skills = self.load().await?;
        Ok(skills
            .into_iter()
            .filter(|s| s.category_is(category))
            .collect())
    }
}
