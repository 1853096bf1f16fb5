use super::FormDraft;
use crate::api::{LoginRequest, SignupRequest};

pub(crate) const PASSWORD_MIN: usize = 8;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct LoginDraft {
    pub username: String,
    pub password: String,
}

impl FormDraft for LoginDraft {
    fn set_field(&mut self, name: &str, value: String) {
        match name {
            "username" => self.username = value,
            "password" => self.password = value,
            _ => {}
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err("Username and password required".to_string());
        }
        Ok(())
    }
}

impl LoginDraft {
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct SignupDraft {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl FormDraft for SignupDraft {
    fn set_field(&mut self, name: &str, value: String) {
        match name {
            "username" => self.username = value,
            "email" => self.email = value,
            "password" => self.password = value,
            "password_confirmation" => self.password_confirmation = value,
            _ => {}
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.username.trim().is_empty() || self.email.trim().is_empty() {
            return Err("Username, email, and password required".to_string());
        }
        if self.password != self.password_confirmation {
            return Err("Passwords do not match".to_string());
        }
        if self.password.chars().count() < PASSWORD_MIN {
            return Err(format!("Password must be at least {PASSWORD_MIN} characters"));
        }
        Ok(())
    }
}

impl SignupDraft {
    pub fn to_request(&self) -> SignupRequest {
        SignupRequest {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            password_confirmation: self.password_confirmation.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(password: &str, confirmation: &str) -> SignupDraft {
        let mut d = SignupDraft::default();
        d.set_field("username", "u".to_string());
        d.set_field("email", "u@example.com".to_string());
        d.set_field("password", password.to_string());
        d.set_field("password_confirmation", confirmation.to_string());
        d
    }

    #[test]
    fn test_signup_mismatch_checked_before_length() {
        assert_eq!(signup("short", "other").validate(), Err("Passwords do not match".to_string()));
    }

    #[test]
    fn test_signup_password_length() {
        assert_eq!(
            signup("short", "short").validate(),
            Err("Password must be at least 8 characters".to_string())
        );
        assert_eq!(signup("12345678", "12345678").validate(), Ok(()));
    }

    #[test]
    fn test_login_requires_both_fields() {
        let mut d = LoginDraft::default();
        assert!(d.validate().is_err());
        d.set_field("username", "u".to_string());
        d.set_field("password", "p".to_string());
        d.set_field("unknown", "ignored".to_string());
        assert!(d.validate().is_ok());
        assert_eq!(d.to_request().username, "u");
    }
}
