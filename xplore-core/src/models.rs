use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Публичная модель зарегистрированного пользователя.
pub struct User {
    /// Идентификатор пользователя.
    pub id: i64,
    /// Отображаемое имя.
    pub name: String,
    /// Email, он же логин.
    pub email: String,
    /// Предпочитаемые категории ресурсов. `/login` это поле опускает,
    /// `/user` возвращает заполненным.
    #[serde(default)]
    pub preferences: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Один найденный ML-артефакт (датасет, модель, статья, ...).
///
/// Гарантирован только `url`; остальное зависит от того, какой endpoint
/// вернул запись (поиск добавляет `score`, история `timestamp`,
/// админ-таблица `popularity_score` и `last_crawled`).
pub struct Resource {
    /// Канонический URL ресурса.
    pub url: String,
    #[serde(default)]
    /// Заголовок страницы, если краулер его сохранил.
    pub title: Option<String>,
    #[serde(default)]
    /// Краткое описание.
    pub description: Option<String>,
    #[serde(default)]
    /// Теги одной строкой через запятую, как хранит индексатор.
    pub tags: Option<String>,
    #[serde(default)]
    /// Релевантность в `[0, 1]`, присутствует у результатов поиска.
    pub score: Option<f64>,
    #[serde(default)]
    /// Популярность (на основе PageRank).
    pub popularity_score: Option<f64>,
    #[serde(default)]
    /// Время взаимодействия, присутствует у записей истории.
    pub timestamp: Option<String>,
    #[serde(default)]
    /// Когда краулер последний раз посещал ресурс.
    pub last_crawled: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Отображаемая градация релевантности. Только презентация, бэкенд этим
/// порогам смысла не придаёт.
pub enum ScoreBucket {
    /// `score >= 0.7`
    High,
    /// `0.4 <= score < 0.7`
    Medium,
    /// `score < 0.4`
    Low,
}

impl ScoreBucket {
    /// Градация нормированной релевантности.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.7 {
            Self::High
        } else if score >= 0.4 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// CSS-класс, который использует карточка ресурса.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl Resource {
    /// Заголовок для показа, с запасным текстом для безымянных записей.
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.trim().is_empty() => title,
            _ => "Untitled Resource",
        }
    }

    /// Разбивает строку тегов на очищенные непустые теги.
    pub fn tag_list(&self) -> Vec<String> {
        let Some(raw) = self.tags.as_deref() else {
            return Vec::new();
        };
        raw.split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Градация релевантности, если score присутствует.
    pub fn score_bucket(&self) -> Option<ScoreBucket> {
        self.score.map(ScoreBucket::from_score)
    }

    /// Best-effort разбор `last_crawled` для показа даты.
    ///
    /// Индексатор пишет SQLite-овые метки `%Y-%m-%d %H:%M:%S`; RFC 3339 тоже
    /// принимается. Неразборчивые значения показываются сырой строкой.
    pub fn crawled_date(&self) -> Option<NaiveDate> {
        let raw = self.last_crawled.as_deref()?;
        parse_date(raw)
    }
}

pub(crate) fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    None
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Ответ успешного `/login`.
pub struct AuthResponse {
    /// Непрозрачный bearer-токен.
    pub token: String,
    /// Авторизованный пользователь.
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Тело `POST /register`.
pub struct RegisterRequest {
    /// Отображаемое имя.
    pub name: String,
    /// Email, используется как логин.
    pub email: String,
    /// Пароль открытым текстом; хранит его сервер, не мы.
    pub password: String,
    /// Хотя бы одна предпочитаемая категория.
    pub preferences: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Тело `POST /login`.
pub struct LoginRequest {
    /// Email, указанный при регистрации.
    pub email: String,
    /// Пароль.
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Тело `POST /history`.
pub struct AddHistoryRequest {
    /// URL посещённого ресурса.
    pub resource_url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Сводная статистика вкладки Statistics админ-панели.
pub struct AdminStats {
    /// Проиндексированные ресурсы.
    pub total_resources: i64,
    /// Собранные краулером связи между ресурсами.
    pub total_links: i64,
    /// Зарегистрированные пользователи.
    pub total_users: i64,
    /// Записанные взаимодействия пользователь/ресурс.
    pub total_interactions: i64,
    /// Топ категорий по числу ресурсов.
    #[serde(default)]
    pub tag_distribution: Vec<TagCount>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Один столбец диаграммы распределения тегов.
pub struct TagCount {
    /// Строка тега; у нетегированных ресурсов пустая или отсутствует.
    #[serde(default)]
    pub tag: Option<String>,
    /// Сколько ресурсов несут тег.
    pub count: i64,
}

impl TagCount {
    /// Подпись для показа; нетегированная корзина отображается как "general".
    pub fn label(&self) -> &str {
        match self.tag.as_deref() {
            Some(tag) if !tag.trim().is_empty() => tag,
            _ => "general",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Одна страница админ-таблицы ресурсов.
pub struct AdminResourcesPage {
    /// Ресурсы этой страницы, сначала недавно обойдённые.
    pub resources: Vec<Resource>,
    /// Какая страница отдана.
    #[serde(default)]
    pub page: u32,
    /// Отданный размер страницы.
    #[serde(default)]
    pub per_page: u32,
    /// Всего ресурсов по всем страницам.
    #[serde(default)]
    pub total: i64,
    /// Всего страниц.
    pub total_pages: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource_with_tags(tags: Option<&str>) -> Resource {
        Resource {
            url: "https://example.com/r".to_string(),
            title: None,
            description: None,
            tags: tags.map(str::to_string),
            score: None,
            popularity_score: None,
            timestamp: None,
            last_crawled: None,
        }
    }

    #[test]
    fn tag_list_splits_trims_and_drops_empties() {
        let resource = resource_with_tags(Some(" model , dataset ,, article "));
        assert_eq!(resource.tag_list(), vec!["model", "dataset", "article"]);
    }

    #[test]
    fn tag_list_is_empty_without_tags() {
        assert!(resource_with_tags(None).tag_list().is_empty());
        assert!(resource_with_tags(Some("  ")).tag_list().is_empty());
    }

    #[test]
    fn display_title_falls_back_for_blank_titles() {
        let mut resource = resource_with_tags(None);
        assert_eq!(resource.display_title(), "Untitled Resource");
        resource.title = Some("  ".to_string());
        assert_eq!(resource.display_title(), "Untitled Resource");
        resource.title = Some("BERT".to_string());
        assert_eq!(resource.display_title(), "BERT");
    }

    #[test]
    fn score_buckets_follow_display_thresholds() {
        assert_eq!(ScoreBucket::from_score(0.7), ScoreBucket::High);
        assert_eq!(ScoreBucket::from_score(0.69), ScoreBucket::Medium);
        assert_eq!(ScoreBucket::from_score(0.4), ScoreBucket::Medium);
        assert_eq!(ScoreBucket::from_score(0.39), ScoreBucket::Low);
    }

    #[test]
    fn crawled_date_parses_sqlite_and_rfc3339_timestamps() {
        assert_eq!(
            parse_date("2026-03-14 09:26:53"),
            NaiveDate::from_ymd_opt(2026, 3, 14)
        );
        assert_eq!(
            parse_date("2026-03-14T09:26:53+00:00"),
            NaiveDate::from_ymd_opt(2026, 3, 14)
        );
        assert!(parse_date("yesterday").is_none());
    }

    #[test]
    fn user_deserializes_without_preferences() {
        let raw = r#"{"id":1,"name":"A","email":"a@b.com"}"#;
        let user: User = serde_json::from_str(raw).expect("user should parse");
        assert!(user.preferences.is_empty());
    }

    #[test]
    fn tag_count_labels_untagged_buckets_as_general() {
        let untagged = TagCount { tag: None, count: 3 };
        assert_eq!(untagged.label(), "general");
        let blank = TagCount {
            tag: Some(String::new()),
            count: 1,
        };
        assert_eq!(blank.label(), "general");
        let tagged = TagCount {
            tag: Some("model".to_string()),
            count: 9,
        };
        assert_eq!(tagged.label(), "model");
    }
}
