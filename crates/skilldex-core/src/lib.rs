//! # skilldex-core
//!
//! Core types for the skilldex service: the [`Skill`] record and the
//! unified [`SkilldexError`] type shared by every crate in the
//! workspace.

pub mod error;
pub mod skill;

pub use error::{Result, SkilldexError};
pub use skill::{Skill, SkillId};
