use crate::error::{ClientError, ClientResult};

/// Категории ресурсов, предлагаемые как фильтры поиска и как предпочтения
/// при регистрации.
pub const TAG_OPTIONS: [&str; 6] = [
    "dataset",
    "model",
    "article",
    "research paper",
    "documentation",
    "code",
];

/// Переключает `item` в упорядоченном множестве на `Vec`. Двойное
/// переключение возвращает множество в исходное состояние.
pub fn toggle_membership(set: &mut Vec<String>, item: &str) {
    if let Some(position) = set.iter().position(|existing| existing == item) {
        set.remove(position);
    } else {
        set.push(item.to_string());
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Текст запроса плюс выбранные фильтры-теги для следующего поиска.
pub struct SearchQuery {
    /// Сырой текст из поисковой строки.
    pub text: String,
    selected_tags: Vec<String>,
}

impl SearchQuery {
    /// Включает или выключает фильтр-тег.
    pub fn toggle_tag(&mut self, tag: &str) {
        toggle_membership(&mut self.selected_tags, tag);
    }

    /// Выбранные теги в порядке выбора.
    pub fn selected_tags(&self) -> &[String] {
        &self.selected_tags
    }

    /// Активен ли фильтр-тег.
    pub fn is_selected(&self, tag: &str) -> bool {
        self.selected_tags.iter().any(|t| t == tag)
    }

    /// Валидирует запрос до любого сетевого вызова.
    ///
    /// Пустой или пробельный текст отклоняется локально; при успехе
    /// возвращается очищенный запрос для отправки.
    pub fn validate(&self) -> ClientResult<String> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            return Err(ClientError::Validation(
                "Please enter a search query".to_string(),
            ));
        }
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_a_tag_twice_is_a_no_op() {
        let mut query = SearchQuery::default();
        let before = query.clone();

        query.toggle_tag("model");
        assert!(query.is_selected("model"));

        query.toggle_tag("model");
        assert_eq!(query, before);
    }

    #[test]
    fn toggle_preserves_selection_order() {
        let mut query = SearchQuery::default();
        query.toggle_tag("article");
        query.toggle_tag("model");
        query.toggle_tag("dataset");
        query.toggle_tag("model");
        assert_eq!(query.selected_tags(), ["article", "dataset"]);
    }

    #[test]
    fn blank_query_is_rejected_locally() {
        let mut query = SearchQuery::default();
        assert!(matches!(query.validate(), Err(ClientError::Validation(_))));

        query.text = "   \t ".to_string();
        assert!(matches!(query.validate(), Err(ClientError::Validation(_))));
    }

    #[test]
    fn validate_trims_the_query() {
        let query = SearchQuery {
            text: "  transformers  ".to_string(),
            ..SearchQuery::default()
        };
        assert_eq!(query.validate().expect("query is valid"), "transformers");
    }
}
