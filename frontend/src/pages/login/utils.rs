use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub identifier: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            identifier: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

pub fn validate_credentials(identifier: &str, password: &str) -> Result<(), String> {
    if identifier.trim().is_empty() {
        return Err("Ingresa tu usuario o correo".into());
    }
    if password.is_empty() {
        return Err("Ingresa tu contraseña".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_credentials;

    #[test]
    fn rejects_blank_identifier() {
        assert!(validate_credentials("  ", "secret").is_err());
    }

    #[test]
    fn rejects_empty_password() {
        assert!(validate_credentials("admin", "").is_err());
    }

    #[test]
    fn accepts_filled_credentials() {
        assert!(validate_credentials("admin@test.com", "secret").is_ok());
    }
}
