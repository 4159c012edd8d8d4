use crate::error::{ClientError, ClientResult};
use crate::models::{LoginRequest, RegisterRequest};
use crate::search::toggle_membership;

/// Категории предпочтений при регистрации; тот же набор, что у фильтров
/// поиска.
pub use crate::search::TAG_OPTIONS as PREFERENCE_OPTIONS;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Состояние формы регистрации с локальной валидацией.
pub struct RegistrationForm {
    /// Полное имя.
    pub name: String,
    /// Email, используется как логин.
    pub email: String,
    /// Пароль.
    pub password: String,
    /// Подтверждение пароля; должно совпадать с `password`.
    pub confirm_password: String,
    preferences: Vec<String>,
}

impl RegistrationForm {
    /// Включает или выключает предпочтение.
    pub fn toggle_preference(&mut self, preference: &str) {
        toggle_membership(&mut self.preferences, preference);
    }

    /// Выбранные предпочтения в порядке выбора.
    pub fn preferences(&self) -> &[String] {
        &self.preferences
    }

    /// Выбрано ли предпочтение.
    pub fn is_preferred(&self, preference: &str) -> bool {
        self.preferences.iter().any(|p| p == preference)
    }

    /// Валидирует форму до любого сетевого вызова.
    ///
    /// При успехе возвращает тело для `POST /register`; при провале ошибку
    /// `Validation` с текстом, который форма показывает inline.
    pub fn validate(&self) -> ClientResult<RegisterRequest> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() || email.is_empty() || self.password.is_empty() {
            return Err(ClientError::Validation(
                "Please fill in all fields".to_string(),
            ));
        }
        if self.password != self.confirm_password {
            return Err(ClientError::Validation(
                "Passwords do not match".to_string(),
            ));
        }
        if self.preferences.is_empty() {
            return Err(ClientError::Validation(
                "Please select at least one preference".to_string(),
            ));
        }

        Ok(RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: self.password.clone(),
            preferences: self.preferences.clone(),
        })
    }
}

/// Валидирует поля входа до любого сетевого вызова.
pub fn validate_login(email: &str, password: &str) -> ClientResult<LoginRequest> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ClientError::Validation(
            "Please enter your email and password".to_string(),
        ));
    }
    Ok(LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> RegistrationForm {
        let mut form = RegistrationForm {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            password: "secret".to_string(),
            confirm_password: "secret".to_string(),
            ..RegistrationForm::default()
        };
        form.toggle_preference("model");
        form
    }

    #[test]
    fn valid_form_produces_register_payload() {
        let request = filled_form().validate().expect("form is valid");
        assert_eq!(request.name, "A");
        assert_eq!(request.email, "a@b.com");
        assert_eq!(request.preferences, vec!["model"]);
    }

    #[test]
    fn password_mismatch_is_a_local_validation_error() {
        let mut form = filled_form();
        form.confirm_password = "different".to_string();
        match form.validate() {
            Err(ClientError::Validation(message)) => {
                assert_eq!(message, "Passwords do not match");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn empty_preference_set_is_a_local_validation_error() {
        let mut form = filled_form();
        form.toggle_preference("model");
        match form.validate() {
            Err(ClientError::Validation(message)) => {
                assert_eq!(message, "Please select at least one preference");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn preference_toggle_is_idempotent_over_double_toggles() {
        let mut form = RegistrationForm::default();
        let before = form.clone();
        form.toggle_preference("dataset");
        form.toggle_preference("dataset");
        assert_eq!(form, before);
    }

    #[test]
    fn login_validation_requires_both_fields() {
        assert!(matches!(
            validate_login("", "secret"),
            Err(ClientError::Validation(_))
        ));
        assert!(matches!(
            validate_login("a@b.com", ""),
            Err(ClientError::Validation(_))
        ));
        let request = validate_login(" a@b.com ", "secret").expect("login is valid");
        assert_eq!(request.email, "a@b.com");
    }
}
