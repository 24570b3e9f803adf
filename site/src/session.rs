use tracing::{info, warn};

// admin session
//
// a single shared secret compared in the clear, with no hashing or lockout.
// this gates the in-browser editor and nothing else
#[derive(Debug)]
pub struct SessionState {
    secret: String,
    is_admin: bool,
}

impl SessionState {
    pub fn new(secret: impl Into<String>) -> Self {
        SessionState {
            secret: secret.into(),
            is_admin: false,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn login(&mut self, secret: &str) -> bool {
        if secret != self.secret {
            warn!("rejected admin login attempt");
            return false;
        }

        info!("admin session started");
        self.is_admin = true;
        true
    }

    pub fn logout(&mut self) {
        if self.is_admin {
            info!("admin session ended");
        }
        self.is_admin = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_login_keeps_admin() {
        let mut session = SessionState::new("s3cret");
        assert!(session.login("s3cret"));

        // a wrong guess while logged in does not end the session
        assert!(!session.login("nope"));
        assert!(session.is_admin());
    }

    #[test]
    fn empty_secret_is_rejected() {
        let mut session = SessionState::new("s3cret");
        assert!(!session.login(""));
        assert!(!session.is_admin());
    }
}
