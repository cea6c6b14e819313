use crate::entities::*;

#[derive(Debug, Default, Clone)]
pub struct FamilyState {
    pub groups: Vec<FamilyGroup>,
    pub selected: Option<FamilyGroup>,
    pub members: Vec<FamilyMember>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Action {
    FetchPending,
    FetchFulfilled(Vec<FamilyGroup>),
    FetchRejected(String),
    Created(FamilyGroup),
    Updated(FamilyGroup),
    MembersFetched(Vec<FamilyMember>),
    MemberAdded(FamilyMember),
    MemberRemoved { group_id: Id, user_id: Id },
    Rejected(String),
    Select(Option<FamilyGroup>),
    ClearError,
}

impl FamilyState {
    pub fn reduce(&mut self, action: Action) {
        match action {
            Action::FetchPending => {
                self.loading = true;
                self.error = None;
            }
            Action::FetchFulfilled(mut groups) => {
                self.loading = false;
                groups.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                self.groups = groups;
            }
            Action::FetchRejected(err) => {
                self.loading = false;
                self.error = Some(err);
            }
            Action::Created(group) => {
                self.groups.insert(0, group);
            }
            Action::Updated(group) => {
                if let Some(g) = self.groups.iter_mut().find(|g| g.id == group.id) {
                    *g = group.clone();
                }
                if self.selected.as_ref().is_some_and(|s| s.id == group.id) {
                    self.selected = Some(group);
                }
            }
            Action::MembersFetched(members) => {
                self.members = members;
            }
            Action::MemberAdded(member) => {
                self.members.push(member);
            }
            Action::MemberRemoved { group_id, user_id } => {
                self.members
                    .retain(|m| !(m.group_id == group_id && m.user_id == user_id));
            }
            Action::Rejected(err) => {
                self.error = Some(err);
            }
            Action::Select(group) => {
                self.selected = group;
            }
            Action::ClearError => {
                self.error = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use famtrip_entities::builders::*;
    use time::{Duration, OffsetDateTime};

    fn member(group_id: &str, user_id: &str) -> FamilyMember {
        FamilyMember {
            group_id: group_id.into(),
            user_id: user_id.into(),
            role: MemberRole::Member,
            user: None,
        }
    }

    #[test]
    fn newest_groups_first() {
        let now = OffsetDateTime::UNIX_EPOCH + Duration::days(1000);
        let mut state = FamilyState::default();
        state.reduce(Action::FetchFulfilled(vec![
            FamilyGroup::build().id("old").created_at(now - Duration::days(3)).finish(),
            FamilyGroup::build().id("new").created_at(now).finish(),
        ]));
        assert_eq!("new", state.groups[0].id.as_str());
        state.reduce(Action::Created(FamilyGroup::build().id("newest").finish()));
        assert_eq!("newest", state.groups[0].id.as_str());
    }

    #[test]
    fn add_and_remove_members() {
        let mut state = FamilyState::default();
        state.reduce(Action::MembersFetched(vec![member("g1", "u1")]));
        state.reduce(Action::MemberAdded(member("g1", "u2")));
        state.reduce(Action::MemberAdded(member("g2", "u2")));
        state.reduce(Action::MemberRemoved {
            group_id: "g1".into(),
            user_id: "u2".into(),
        });
        let members: Vec<_> = state
            .members
            .iter()
            .map(|m| (m.group_id.as_str(), m.user_id.as_str()))
            .collect();
        assert_eq!(vec![("g1", "u1"), ("g2", "u2")], members);
    }

    #[test]
    fn replace_updated_group() {
        let mut state = FamilyState::default();
        let group = FamilyGroup::build().id("g1").name("Smiths").finish();
        state.reduce(Action::Created(group.clone()));
        state.reduce(Action::Select(Some(group)));
        state.reduce(Action::Updated(
            FamilyGroup::build().id("g1").name("Smith family").finish(),
        ));
        assert_eq!("Smith family", state.groups[0].name);
        assert_eq!("Smith family", state.selected.unwrap().name);
    }
}
