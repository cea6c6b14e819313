use anyhow::Result;

use famtrip_application::prelude::*;
use famtrip_core::usecases::ProfileUpdate;

use super::{app_error, Context};

pub async fn login(ctx: &Context, email: &str, password: &str) -> Result<()> {
    let session = sign_in(&ctx.store, &ctx.backend, email, password)
        .await
        .map_err(app_error)?;
    save_session(ctx.storage(), &session)?;
    println!("Signed in as {}", session.user.email);
    Ok(())
}

pub async fn signup(ctx: &Context, email: &str, name: &str, password: &str) -> Result<()> {
    let outcome = sign_up(&ctx.store, &ctx.backend, email, password, name)
        .await
        .map_err(app_error)?;
    match outcome.session {
        Some(session) => {
            save_session(ctx.storage(), &session)?;
            println!("Signed up and signed in as {}", session.user.email);
        }
        None => {
            println!(
                "Signed up as {}, please confirm your e-mail address before signing in",
                outcome.user.email
            );
        }
    }
    Ok(())
}

pub async fn logout(ctx: &Context) -> Result<()> {
    if ctx.user().is_none() {
        println!("Not signed in");
        return Ok(());
    }
    sign_out(&ctx.store, &ctx.backend, ctx.storage())
        .await
        .map_err(app_error)?;
    println!("Signed out");
    Ok(())
}

pub async fn profile(ctx: &Context, name: Option<String>, avatar_url: Option<String>) -> Result<()> {
    ctx.signed_in_user()?;
    let profile = if name.is_some() || avatar_url.is_some() {
        let update = ProfileUpdate {
            name,
            avatar_url: avatar_url.map(|url| Some(url).filter(|u| !u.trim().is_empty())),
        };
        update_profile(&ctx.store, &ctx.backend, update)
            .await
            .map_err(app_error)?
    } else {
        fetch_profile(&ctx.store, &ctx.backend)
            .await
            .map_err(app_error)?
    };
    println!("{}  {}", profile.id, profile.display_name());
    println!("e-mail  {}", profile.email);
    if let Some(url) = &profile.avatar_url {
        println!("avatar  {url}");
    }
    Ok(())
}
