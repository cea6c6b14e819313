use super::*;

use famtrip_boundary::AuthSession;
use famtrip_core::{gateways::storage::KeyValueStorage, usecases::ProfileUpdate};

/// Storage key of the most recent session.
pub const SESSION_KEY: &str = "session";

pub async fn sign_in(
    store: &Store,
    auth: &dyn AuthGateway,
    email: &str,
    password: &str,
) -> Result<Session> {
    store.dispatch(store::auth::Action::Pending);
    match auth.sign_in(email.trim(), password).await {
        Ok(session) => {
            debug!("Signed in as {}", session.user.email);
            store.dispatch(store::auth::Action::SignedIn(session.clone()));
            Ok(session)
        }
        Err(err) => {
            store.dispatch(store::auth::Action::Rejected(err.to_string()));
            Err(err.into())
        }
    }
}

pub async fn sign_up(
    store: &Store,
    auth: &dyn AuthGateway,
    email: &str,
    password: &str,
    name: &str,
) -> Result<SignUpOutcome> {
    store.dispatch(store::auth::Action::Pending);
    match auth.sign_up(email.trim(), password, name.trim()).await {
        Ok(outcome) => {
            store.dispatch(store::auth::Action::SignedUp {
                user: outcome.user.clone(),
                session: outcome.session.clone(),
            });
            Ok(outcome)
        }
        Err(err) => {
            store.dispatch(store::auth::Action::Rejected(err.to_string()));
            Err(err.into())
        }
    }
}

/// Signs out locally even if the backend could not be reached.
pub async fn sign_out(
    store: &Store,
    auth: &dyn AuthGateway,
    storage: &dyn KeyValueStorage,
) -> Result<()> {
    let result = auth.sign_out().await;
    store.dispatch(store::auth::Action::SignedOut);
    if let Err(err) = storage.remove(SESSION_KEY) {
        warn!("Unable to forget session: {err}");
    }
    if let Err(err) = &result {
        warn!("Sign out failed: {err}");
    }
    result.map_err(Into::into)
}

pub fn save_session(storage: &dyn KeyValueStorage, session: &Session) -> Result<()> {
    let json = serde_json::to_string(&AuthSession::from(session.clone()))?;
    storage.set(SESSION_KEY, &json)?;
    Ok(())
}

/// Continues with the session of a previous run, if any.
pub fn restore_session(
    store: &Store,
    auth: &dyn AuthGateway,
    storage: &dyn KeyValueStorage,
) -> Option<Session> {
    let json = match storage.get(SESSION_KEY) {
        Ok(json) => json?,
        Err(err) => {
            warn!("Unable to read session: {err}");
            return None;
        }
    };
    let session: Session = match serde_json::from_str::<AuthSession>(&json) {
        Ok(session) => session.into(),
        Err(err) => {
            warn!("Discarding invalid session: {err}");
            return None;
        }
    };
    auth.restore_session(&session);
    store.dispatch(store::auth::Action::SessionRestored(session.clone()));
    Some(session)
}

fn current_user(store: &Store) -> Result<User> {
    store
        .select(|s| s.auth.user.clone())
        .ok_or_else(|| usecases::Error::Unauthorized.into())
}

pub async fn fetch_profile(store: &Store, users: &dyn UserRepo) -> Result<Profile> {
    let user = current_user(store)?;
    let profile = users.load_profile(&user.id).await?;
    store.dispatch(store::auth::Action::ProfileFetched(profile.clone()));
    Ok(profile)
}

pub async fn update_profile(
    store: &Store,
    users: &dyn UserRepo,
    update: ProfileUpdate,
) -> Result<Profile> {
    let user = current_user(store)?;
    match users.update_profile(&user.id, &update).await {
        Ok(profile) => {
            store.dispatch(store::auth::Action::ProfileUpdated(profile.clone()));
            Ok(profile)
        }
        Err(err) => {
            store.dispatch(store::auth::Action::Rejected(err.to_string()));
            Err(err.into())
        }
    }
}
