use strum::{AsRefStr, Display, EnumString};
use time::OffsetDateTime;

use crate::{id::*, user::*};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyGroup {
    pub id: Id,
    pub name: String,
    pub admin_id: Id,
    pub created_at: OffsetDateTime,
}

impl FamilyGroup {
    pub const NAME_MAX_LEN: usize = 50;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum MemberRole {
    Admin,
    #[default]
    Member,
}

/// Membership of a user in a family group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyMember {
    pub group_id: Id,
    pub user_id: Id,
    pub role: MemberRole,
    /// Joined profile of the member, if requested.
    pub user: Option<Profile>,
}

impl FamilyMember {
    pub fn is_admin(&self) -> bool {
        self.role == MemberRole::Admin
    }
}
