//! Observable session state for the logged-in agent.
//!
//! # Design
//! A single value object replaces scattered key-value reads: the store
//! holds `LoggedOut` or `LoggedIn(Identity)` and nothing else. The client
//! facade never mutates it; the caller logs in after inspecting a decoded
//! `LoginResponse` and logs out on user action, so there is one writer at
//! a time. Observers subscribe through a watch channel and see every
//! transition.

use tokio::sync::watch;

use crate::types::User;

/// The persisted subset of a `User`: what later operations need (`ucode`,
/// `brn`) plus the display fields. The transient `type` field is not part
/// of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub ucode: String,
    pub brn: String,
    pub fname: String,
    pub sname: String,
    pub username: String,
    pub email: String,
    pub djoined: String,
}

impl From<&User> for Identity {
    fn from(user: &User) -> Self {
        Self {
            ucode: user.ucode.clone(),
            brn: user.brn.clone(),
            fname: user.fname.clone(),
            sname: user.sname.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            djoined: user.djoined.clone(),
        }
    }
}

/// Session state as a plain value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn(Identity),
}

/// Single-writer, multi-reader store for the current `Session`.
///
/// Starts logged out. Once `log_out` runs, the identity fields are gone
/// until the next `log_in`.
#[derive(Debug)]
pub struct SessionStore {
    tx: watch::Sender<Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Session::LoggedOut);
        Self { tx }
    }

    /// Record a successful login.
    pub fn log_in(&self, identity: Identity) {
        self.tx.send_replace(Session::LoggedIn(identity));
    }

    /// Clear the session. Subsequent reads see `LoggedOut`.
    pub fn log_out(&self) {
        self.tx.send_replace(Session::LoggedOut);
    }

    /// Snapshot of the current session.
    pub fn current(&self) -> Session {
        self.tx.borrow().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(*self.tx.borrow(), Session::LoggedIn(_))
    }

    /// The logged-in agent's user code, if any.
    pub fn ucode(&self) -> Option<String> {
        match &*self.tx.borrow() {
            Session::LoggedIn(identity) => Some(identity.ucode.clone()),
            Session::LoggedOut => None,
        }
    }

    /// The logged-in agent's branch code, if any.
    pub fn brn(&self) -> Option<String> {
        match &*self.tx.borrow() {
            Session::LoggedIn(identity) => Some(identity.brn.clone()),
            Session::LoggedOut => None,
        }
    }

    /// Watch for session transitions. The receiver yields the current
    /// value first, then every change.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.tx.subscribe()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
