use crate::models::User;

#[derive(Debug, Clone, PartialEq, Default)]
/// Авторизованная личность, которую держит клиент.
///
/// Токен и пользователь взаимозависимы: сессия с одной половиной без другой
/// считается разлогиненной, так что читатели никогда не видят частично
/// закоммиченное состояние.
pub struct Session {
    token: Option<String>,
    user: Option<User>,
}

impl Session {
    /// Сессия, в которой никто не вошёл.
    pub fn logged_out() -> Self {
        Self::default()
    }

    /// Восстанавливает сессию из независимо сохранённых половин (например,
    /// двух ключей localStorage). Отсутствующая или пустая половина даёт
    /// разлогиненную сессию.
    pub fn restore(token: Option<String>, user: Option<User>) -> Self {
        match (token, user) {
            (Some(token), Some(user)) if !token.trim().is_empty() => Self {
                token: Some(token.trim().to_string()),
                user: Some(user),
            },
            _ => Self::logged_out(),
        }
    }

    /// Коммитит обе половины разом.
    pub fn set(&mut self, token: String, user: User) {
        self.token = Some(token);
        self.user = Some(user);
    }

    /// Убирает обе половины разом.
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
    }

    /// Текущий bearer-токен, если выполнен вход.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Текущий профиль пользователя, если выполнен вход.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Единственный источник истины для "пользователь вошёл".
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 1,
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            preferences: vec!["model".to_string()],
        }
    }

    #[test]
    fn restore_requires_both_halves() {
        assert!(!Session::restore(Some("t1".to_string()), None).is_authenticated());
        assert!(!Session::restore(None, Some(sample_user())).is_authenticated());
        assert!(Session::restore(Some("t1".to_string()), Some(sample_user())).is_authenticated());
    }

    #[test]
    fn restore_rejects_blank_token() {
        let session = Session::restore(Some("   ".to_string()), Some(sample_user()));
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
        assert!(session.user().is_none());
    }

    #[test]
    fn set_then_clear_leaves_no_residue() {
        let mut session = Session::logged_out();
        session.set("t1".to_string(), sample_user());
        assert_eq!(session.token(), Some("t1"));
        assert!(session.is_authenticated());

        session.clear();
        assert!(session.token().is_none());
        assert!(session.user().is_none());
        assert!(!session.is_authenticated());
    }
}
