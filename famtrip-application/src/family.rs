use super::*;

pub async fn fetch_family_groups(
    store: &Store,
    family: &dyn FamilyRepo,
) -> Result<Vec<FamilyGroup>> {
    store.dispatch(store::family::Action::FetchPending);
    match family.load_family_groups().await {
        Ok(groups) => {
            store.dispatch(store::family::Action::FetchFulfilled(groups.clone()));
            Ok(groups)
        }
        Err(err) => {
            store.dispatch(store::family::Action::FetchRejected(err.to_string()));
            Err(err.into())
        }
    }
}

/// Creates a group with the signed in user as its admin.
pub async fn create_family_group(
    store: &Store,
    family: &dyn FamilyRepo,
    name: &str,
) -> Result<FamilyGroup> {
    let name = usecases::validate_family_group_name(name)?;
    let admin_id = store
        .select(|s| s.auth.user.as_ref().map(|u| u.id.clone()))
        .ok_or(usecases::Error::Unauthorized)?;
    let group = match family.create_family_group(&name, &admin_id).await {
        Ok(group) => group,
        Err(err) => {
            store.dispatch(store::family::Action::Rejected(err.to_string()));
            return Err(err.into());
        }
    };
    store.dispatch(store::family::Action::Created(group.clone()));
    match family
        .add_family_member(&group.id, &admin_id, MemberRole::Admin)
        .await
    {
        Ok(member) => {
            store.dispatch(store::family::Action::MemberAdded(member));
            Ok(group)
        }
        Err(err) => {
            warn!("Group {} has been created without its admin: {err}", group.id);
            store.dispatch(store::family::Action::Rejected(err.to_string()));
            Err(err.into())
        }
    }
}

pub async fn rename_family_group(
    store: &Store,
    family: &dyn FamilyRepo,
    id: &Id,
    name: &str,
) -> Result<FamilyGroup> {
    let name = usecases::validate_family_group_name(name)?;
    match family.update_family_group(id, &name).await {
        Ok(group) => {
            store.dispatch(store::family::Action::Updated(group.clone()));
            Ok(group)
        }
        Err(err) => {
            store.dispatch(store::family::Action::Rejected(err.to_string()));
            Err(err.into())
        }
    }
}

pub async fn fetch_family_members(
    store: &Store,
    family: &dyn FamilyRepo,
    group_id: &Id,
) -> Result<Vec<FamilyMember>> {
    match family.load_family_members(group_id).await {
        Ok(members) => {
            store.dispatch(store::family::Action::MembersFetched(members.clone()));
            Ok(members)
        }
        Err(err) => {
            store.dispatch(store::family::Action::Rejected(err.to_string()));
            Err(err.into())
        }
    }
}

pub async fn add_family_member(
    store: &Store,
    family: &dyn FamilyRepo,
    group_id: &Id,
    user_id: &Id,
) -> Result<FamilyMember> {
    match family
        .add_family_member(group_id, user_id, MemberRole::Member)
        .await
    {
        Ok(member) => {
            store.dispatch(store::family::Action::MemberAdded(member.clone()));
            Ok(member)
        }
        Err(err) => {
            store.dispatch(store::family::Action::Rejected(err.to_string()));
            Err(err.into())
        }
    }
}

pub async fn remove_family_member(
    store: &Store,
    family: &dyn FamilyRepo,
    group_id: &Id,
    user_id: &Id,
) -> Result<()> {
    match family.remove_family_member(group_id, user_id).await {
        Ok(()) => {
            store.dispatch(store::family::Action::MemberRemoved {
                group_id: group_id.clone(),
                user_id: user_id.clone(),
            });
            Ok(())
        }
        Err(err) => {
            store.dispatch(store::family::Action::Rejected(err.to_string()));
            Err(err.into())
        }
    }
}
