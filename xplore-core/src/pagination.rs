#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Состояние пагинации админ-таблицы ресурсов.
///
/// Инвариант: `1 <= page <= total_pages`, причём `total_pages >= 1`.
pub struct Pagination {
    page: u32,
    total_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new()
    }
}

impl Pagination {
    /// Первая страница таблицы, размер которой ещё неизвестен.
    pub fn new() -> Self {
        Self {
            page: 1,
            total_pages: 1,
        }
    }

    /// Показываемая сейчас страница.
    pub fn page(self) -> u32 {
        self.page
    }

    /// Всего страниц.
    pub fn total_pages(self) -> u32 {
        self.total_pages
    }

    /// Previous доступна только при `page > 1`.
    pub fn has_prev(self) -> bool {
        self.page > 1
    }

    /// Next доступна только при `page < total_pages`.
    pub fn has_next(self) -> bool {
        self.page < self.total_pages
    }

    /// Страница, которую должен запросить клик по Previous, если есть.
    pub fn prev_page(self) -> Option<u32> {
        self.has_prev().then(|| self.page - 1)
    }

    /// Страница, которую должен запросить клик по Next, если есть.
    pub fn next_page(self) -> Option<u32> {
        self.has_next().then(|| self.page + 1)
    }

    /// Коммитит завершившуюся загрузку страницы: отданный номер и total от
    /// сервера. Нулевой total считается одной страницей; номер страницы
    /// зажимается в диапазон.
    pub fn commit(&mut self, page: u32, total_pages: u32) {
        self.total_pages = total_pages.max(1);
        self.page = page.clamp(1, self.total_pages);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_are_disabled_exactly_at_the_boundaries() {
        let mut p = Pagination::new();
        p.commit(1, 5);
        assert!(!p.has_prev());
        assert!(p.has_next());

        p.commit(3, 5);
        assert!(p.has_prev());
        assert!(p.has_next());

        p.commit(5, 5);
        assert!(p.has_prev());
        assert!(!p.has_next());
    }

    #[test]
    fn single_page_disables_both_directions() {
        let p = Pagination::new();
        assert!(!p.has_prev());
        assert!(!p.has_next());
        assert!(p.prev_page().is_none());
        assert!(p.next_page().is_none());
    }

    #[test]
    fn next_and_prev_step_by_one() {
        let mut p = Pagination::new();
        p.commit(2, 5);
        assert_eq!(p.next_page(), Some(3));
        assert_eq!(p.prev_page(), Some(1));
    }

    #[test]
    fn commit_clamps_out_of_range_pages() {
        let mut p = Pagination::new();
        p.commit(9, 4);
        assert_eq!(p.page(), 4);

        p.commit(0, 4);
        assert_eq!(p.page(), 1);

        // Сжавшаяся таблица не оставляет страницу висеть за концом.
        p.commit(4, 2);
        assert_eq!(p.page(), 2);
        assert_eq!(p.total_pages(), 2);
    }

    #[test]
    fn zero_total_pages_counts_as_one() {
        let mut p = Pagination::new();
        p.commit(1, 0);
        assert_eq!(p.total_pages(), 1);
        assert_eq!(p.page(), 1);
    }
}
