use crate::entities::*;

#[derive(Debug, Default, Clone)]
pub struct AuthState {
    pub user: Option<User>,
    pub session: Option<Session>,
    pub profile: Option<Profile>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Action {
    Pending,
    Rejected(String),
    SignedIn(Session),
    SignedUp {
        user: User,
        session: Option<Session>,
    },
    SignedOut,
    /// Restored from a previous run.
    SessionRestored(Session),
    ProfileFetched(Profile),
    ProfileUpdated(Profile),
    ClearError,
}

impl AuthState {
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn reduce(&mut self, action: Action) {
        match action {
            Action::Pending => {
                self.loading = true;
                self.error = None;
            }
            Action::Rejected(err) => {
                self.loading = false;
                self.error = Some(err);
            }
            Action::SignedIn(session) | Action::SessionRestored(session) => {
                self.loading = false;
                self.user = Some(session.user.clone());
                self.session = Some(session);
            }
            Action::SignedUp { user, session } => {
                self.loading = false;
                self.user = Some(user);
                self.session = session;
            }
            Action::SignedOut => {
                self.user = None;
                self.session = None;
                self.profile = None;
                self.loading = false;
            }
            Action::ProfileFetched(profile) | Action::ProfileUpdated(profile) => {
                self.profile = Some(profile);
            }
            Action::ClearError => {
                self.error = None;
            }
        }
    }
}
