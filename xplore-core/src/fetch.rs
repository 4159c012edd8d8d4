use crate::error::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Фаза одного цикла удалённой загрузки.
pub enum FetchPhase {
    /// Загрузка ещё ни разу не запускалась. Для поиска это "ещё не искали".
    #[default]
    Idle,
    /// Запрос в полёте.
    Loading,
    /// Последний запрос завершился данными.
    Success,
    /// Последний запрос провалился; `error()` содержит текст для показа.
    Error,
}

#[derive(Debug, Clone, PartialEq)]
/// Универсальный цикл загрузки, управляющий одним срезом серверных данных.
///
/// Переходы: `Idle -> Loading -> (Success | Error)`; повторная загрузка
/// перезапускает цикл из `Loading` независимо от предыдущей фазы. Каждый
/// `begin` выдаёт монотонно растущее поколение, а `resolve` отбрасывает
/// ответы с устаревшим поколением, поэтому быстрый перезапуск никогда не
/// перезаписывается ответом более старого запроса.
pub struct FetchState<T> {
    phase: FetchPhase,
    data: Option<T>,
    error: Option<String>,
    generation: u64,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FetchState<T> {
    /// Цикл, который ещё ничего не загружал.
    pub fn new() -> Self {
        Self {
            phase: FetchPhase::Idle,
            data: None,
            error: None,
            generation: 0,
        }
    }

    /// Запускает (или перезапускает) цикл и возвращает поколение, которое
    /// вызывающий обязан предъявить `resolve`.
    ///
    /// Ранее загруженные данные остаются видимыми, пока новый запрос в
    /// полёте; ошибка сбрасывается сразу.
    pub fn begin(&mut self) -> u64 {
        self.phase = FetchPhase::Loading;
        self.error = None;
        self.generation += 1;
        self.generation
    }

    /// Завершает цикл, начатый соответствующим `begin`.
    ///
    /// Возвращает `false`, если ответ был отброшен: его поколение устарело
    /// (успел начаться более новый запрос) либо запроса в полёте нет.
    pub fn resolve(&mut self, generation: u64, result: Result<T, ClientError>) -> bool {
        if generation != self.generation || self.phase != FetchPhase::Loading {
            return false;
        }
        match result {
            Ok(data) => {
                self.phase = FetchPhase::Success;
                self.data = Some(data);
                self.error = None;
            }
            Err(err) => {
                self.phase = FetchPhase::Error;
                self.error = Some(err.display_message());
            }
        }
        true
    }

    /// Текущая фаза.
    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    /// Запрос в полёте.
    pub fn is_loading(&self) -> bool {
        self.phase == FetchPhase::Loading
    }

    /// Загрузка ещё ни разу не запускалась.
    pub fn is_idle(&self) -> bool {
        self.phase == FetchPhase::Idle
    }

    /// Последний цикл завершился успешно.
    pub fn is_success(&self) -> bool {
        self.phase == FetchPhase::Success
    }

    /// Нет данных для показа и нет запроса в полёте: при активации
    /// представления загрузку нужно запустить (заново).
    ///
    /// В отличие от `is_idle`, охватывает и провалившуюся первую загрузку,
    /// после которой данных так и не появилось.
    pub fn needs_load(&self) -> bool {
        self.data.is_none() && !self.is_loading()
    }

    /// Последние успешно загруженные данные; переживают последующие циклы.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Текст последней ошибки, если цикл в фазе `Error`.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Скрывает inline-ошибку, не трогая данные и историю фаз.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_runs_idle_loading_success() {
        let mut fetch: FetchState<Vec<u32>> = FetchState::new();
        assert!(fetch.is_idle());

        let generation = fetch.begin();
        assert!(fetch.is_loading());
        assert!(fetch.error().is_none());

        assert!(fetch.resolve(generation, Ok(vec![1, 2])));
        assert!(fetch.is_success());
        assert_eq!(fetch.data(), Some(&vec![1, 2]));
    }

    #[test]
    fn failure_keeps_previous_data_and_sets_message() {
        let mut fetch: FetchState<u32> = FetchState::new();
        let first = fetch.begin();
        assert!(fetch.resolve(first, Ok(7)));

        let second = fetch.begin();
        assert!(fetch.resolve(second, Err(ClientError::Network("refused".to_string()))));
        assert_eq!(fetch.phase(), FetchPhase::Error);
        assert_eq!(fetch.data(), Some(&7));
        assert_eq!(
            fetch.error(),
            Some("Network error. Please check your connection and try again.")
        );
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut fetch: FetchState<&str> = FetchState::new();
        let first = fetch.begin();
        let second = fetch.begin();

        // Старый запрос завершается после того, как стартовал новый.
        assert!(!fetch.resolve(first, Ok("stale")));
        assert!(fetch.is_loading());
        assert!(fetch.data().is_none());

        assert!(fetch.resolve(second, Ok("fresh")));
        assert_eq!(fetch.data(), Some(&"fresh"));
    }

    #[test]
    fn resolve_without_inflight_request_is_ignored() {
        let mut fetch: FetchState<&str> = FetchState::new();
        let generation = fetch.begin();
        assert!(fetch.resolve(generation, Ok("first")));
        // Повторное завершение того же поколения не должно пройти.
        assert!(!fetch.resolve(generation, Ok("second")));
        assert_eq!(fetch.data(), Some(&"first"));
    }

    #[test]
    fn refetch_restarts_from_loading_and_clears_error() {
        let mut fetch: FetchState<&str> = FetchState::new();
        let first = fetch.begin();
        fetch.resolve(first, Err(ClientError::from_status(500, None)));
        assert!(fetch.error().is_some());

        fetch.begin();
        assert!(fetch.is_loading());
        assert!(fetch.error().is_none());
    }

    #[test]
    fn empty_success_is_distinct_from_idle() {
        let mut fetch: FetchState<Vec<u32>> = FetchState::new();
        let generation = fetch.begin();
        fetch.resolve(generation, Ok(Vec::new()));
        assert!(fetch.is_success());
        assert_eq!(fetch.data().map(Vec::len), Some(0));
        assert!(!fetch.is_idle());
    }

    #[test]
    fn failed_first_load_still_needs_load() {
        let mut fetch: FetchState<Vec<u32>> = FetchState::new();
        assert!(fetch.needs_load());

        let generation = fetch.begin();
        assert!(!fetch.needs_load());

        // Первая загрузка провалилась: данных нет, повтор обязателен.
        fetch.resolve(generation, Err(ClientError::from_status(500, None)));
        assert!(fetch.needs_load());
    }

    #[test]
    fn loaded_data_stops_needing_load() {
        let mut fetch: FetchState<Vec<u32>> = FetchState::new();
        let first = fetch.begin();
        fetch.resolve(first, Ok(vec![1]));
        assert!(!fetch.needs_load());

        // Провал повторной загрузки оставляет старые данные на экране,
        // поэтому автозапуск при активации не нужен.
        let second = fetch.begin();
        fetch.resolve(second, Err(ClientError::from_status(500, None)));
        assert!(!fetch.needs_load());
    }
}
