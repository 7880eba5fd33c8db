use crate::{api::ApiError, utils::network::url_host};

pub const SENDING_MESSAGE: &str = "Sending reset link, please wait...";

/// Trims the input and applies the deliberately loose `@` + `.` check.
pub fn validate_email(raw: &str) -> Result<String, ApiError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(ApiError::validation("Please enter an email address"));
    }
    if !email.contains('@') || !email.contains('.') {
        return Err(ApiError::validation("Please enter a valid email address"));
    }
    Ok(email.to_string())
}

pub fn build_reset_url(server_ip: &str, port: u16, path: &str) -> String {
    format!("http://{}:{}{}", url_host(server_ip), port, path)
}

pub fn success_message(email: &str) -> String {
    format!("Reset link sent to {}, please check your inbox", email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_email_rejects_empty_and_blank() {
        for raw in ["", "   "] {
            let err = validate_email(raw).expect_err("should fail");
            assert_eq!(err.code(), "VALIDATION_ERROR");
            assert_eq!(err.to_string(), "Please enter an email address");
        }
    }

    #[test]
    fn validate_email_requires_at_and_dot() {
        for raw in ["alice", "alice@example", "alice.example.com"] {
            let err = validate_email(raw).expect_err("should fail");
            assert_eq!(err.to_string(), "Please enter a valid email address");
        }
    }

    #[test]
    fn validate_email_is_permissive_beyond_at_and_dot() {
        assert_eq!(validate_email(" a.b@c ").unwrap(), "a.b@c");
        assert_eq!(validate_email("@.").unwrap(), "@.");
    }

    #[test]
    fn build_reset_url_uses_ip_port_and_path() {
        assert_eq!(
            build_reset_url("192.168.1.20", 3000, "/reset-password"),
            "http://192.168.1.20:3000/reset-password"
        );
        assert_eq!(
            build_reset_url("fd00::5", 3000, "/reset-password"),
            "http://[fd00::5]:3000/reset-password"
        );
    }

    #[test]
    fn success_message_names_the_address() {
        assert!(success_message("a@b.com").contains("a@b.com"));
    }
}
