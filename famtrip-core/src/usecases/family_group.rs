use super::prelude::*;

/// Trims a family group name and checks its length.
pub fn validate_family_group_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::Name);
    }
    if name.chars().count() > FamilyGroup::NAME_MAX_LEN {
        return Err(Error::NameTooLong {
            max: FamilyGroup::NAME_MAX_LEN,
        });
    }
    Ok(name.to_owned())
}
