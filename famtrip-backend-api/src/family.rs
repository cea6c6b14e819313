use reqwest::Method;

use famtrip_boundary::{
    FamilyGroupRow, FamilyGroupUpdate, FamilyMemberRow, NewFamilyGroup, NewFamilyMember,
};

use crate::{into_empty, into_json, BackendApi, Query, Result, ACCEPT_OBJECT, RETURN_REPRESENTATION};

const GROUPS: &str = "family_groups";
const MEMBERS: &str = "family_members";
const MEMBER_WITH_USER: &str = "*, users ( id, name, email, avatar_url )";

impl BackendApi {
    /// Family groups, newest first.
    pub async fn family_groups(&self) -> Result<Vec<FamilyGroupRow>> {
        let query = Query::new().select("*").order_desc("created_at");
        let response = self.table(Method::GET, GROUPS, &query).send().await?;
        into_json(response).await
    }

    pub async fn create_family_group(&self, group: &NewFamilyGroup) -> Result<FamilyGroupRow> {
        let response = self
            .table(Method::POST, GROUPS, &Query::new().select("*"))
            .header("Accept", ACCEPT_OBJECT)
            .header("Prefer", RETURN_REPRESENTATION)
            .json(group)
            .send()
            .await?;
        into_json(response).await
    }

    pub async fn update_family_group(
        &self,
        id: &str,
        update: &FamilyGroupUpdate,
    ) -> Result<FamilyGroupRow> {
        let query = Query::new().eq("id", id).select("*");
        let response = self
            .table(Method::PATCH, GROUPS, &query)
            .header("Accept", ACCEPT_OBJECT)
            .header("Prefer", RETURN_REPRESENTATION)
            .json(update)
            .send()
            .await?;
        into_json(response).await
    }

    pub async fn family_members(&self, group_id: &str) -> Result<Vec<FamilyMemberRow>> {
        let query = Query::new().select(MEMBER_WITH_USER).eq("group_id", group_id);
        let response = self.table(Method::GET, MEMBERS, &query).send().await?;
        into_json(response).await
    }

    pub async fn add_family_member(&self, member: &NewFamilyMember) -> Result<FamilyMemberRow> {
        let response = self
            .table(Method::POST, MEMBERS, &Query::new().select(MEMBER_WITH_USER))
            .header("Accept", ACCEPT_OBJECT)
            .header("Prefer", RETURN_REPRESENTATION)
            .json(member)
            .send()
            .await?;
        into_json(response).await
    }

    pub async fn remove_family_member(&self, group_id: &str, user_id: &str) -> Result<()> {
        let query = Query::new().eq("group_id", group_id).eq("user_id", user_id);
        let response = self.table(Method::DELETE, MEMBERS, &query).send().await?;
        into_empty(response).await
    }
}
