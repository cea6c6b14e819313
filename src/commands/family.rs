use anyhow::Result;

use famtrip_application::prelude::*;
use famtrip_core::entities::Id;

use super::{app_error, Context};
use crate::{cli::FamilyCommand, output};

pub async fn run(ctx: &Context, cmd: FamilyCommand) -> Result<()> {
    let user = ctx.signed_in_user()?;
    match cmd {
        FamilyCommand::List => {
            let groups = fetch_family_groups(&ctx.store, &ctx.backend)
                .await
                .map_err(app_error)?;
            for group in &groups {
                println!("{}", output::group_line(group, Some(&user)));
            }
            if groups.is_empty() {
                println!("No family groups");
            }
        }
        FamilyCommand::Create { name } => {
            let group = create_family_group(&ctx.store, &ctx.backend, &name)
                .await
                .map_err(app_error)?;
            println!("{}", output::group_line(&group, Some(&user)));
        }
        FamilyCommand::Rename { id, name } => {
            let group = rename_family_group(&ctx.store, &ctx.backend, &id.into(), &name)
                .await
                .map_err(app_error)?;
            println!("{}", output::group_line(&group, Some(&user)));
        }
        FamilyCommand::Members { id } => {
            let members = fetch_family_members(&ctx.store, &ctx.backend, &id.into())
                .await
                .map_err(app_error)?;
            for member in &members {
                println!("{}", output::member_line(member));
            }
        }
        FamilyCommand::AddMember { id, user_id } => {
            let member =
                add_family_member(&ctx.store, &ctx.backend, &id.into(), &user_id.into())
                    .await
                    .map_err(app_error)?;
            println!("{}", output::member_line(&member));
        }
        FamilyCommand::RemoveMember { id, user_id } => {
            let user_id = Id::from(user_id);
            remove_family_member(&ctx.store, &ctx.backend, &id.into(), &user_id)
                .await
                .map_err(app_error)?;
            println!("Removed {user_id}");
        }
    }
    Ok(())
}
