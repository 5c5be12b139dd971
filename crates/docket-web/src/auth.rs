use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
}

pub fn sign_in(username: &str, password: &str) -> Result<Identity, String> {
    let username = username.trim();
    if username.is_empty() {
        warn!("sign-in attempt without a username");
        return Err("Username is required".to_string());
    }
    if password.is_empty() {
        warn!(username, "sign-in attempt without a password");
        return Err("Password is required".to_string());
    }

    info!(username, "signed in");
    Ok(Identity {
        username: username.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::sign_in;

    #[test]
    fn accepts_non_empty_credentials() {
        let identity = sign_in("  casey ", "hunter2").expect("sign-in should succeed");
        assert_eq!(identity.username, "casey");
    }

    #[test]
    fn rejects_blank_fields() {
        assert!(sign_in("", "hunter2").is_err());
        assert!(sign_in("   ", "hunter2").is_err());
        assert!(sign_in("casey", "").is_err());
    }
}
