use serde::{Deserialize, Serialize};

use super::{EntityId, Resource, StatusFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberRole {
    #[default]
    Member,
    Librarian,
    Admin,
    #[serde(other)]
    Unknown,
}

impl StatusFilter for MemberRole {
    const FILTERS: &'static [Self] = &[Self::Member, Self::Librarian, Self::Admin];

    fn label(self) -> &'static str {
        match self {
            Self::Member => "Member",
            Self::Librarian => "Librarian",
            Self::Admin => "Admin",
            Self::Unknown => "Unknown",
        }
    }

    fn code(self) -> &'static str {
        match self {
            Self::Member => "MEMBER",
            Self::Librarian => "LIBRARIAN",
            Self::Admin => "ADMIN",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// A library user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: MemberRole,
    #[serde(default)]
    pub joined_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDraft {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: MemberRole,
}

impl Resource for Member {
    type Draft = MemberDraft;

    const PATH: &'static str = "users";
    const NAME: &'static str = "member";

    fn id(&self) -> EntityId {
        self.id
    }
}
