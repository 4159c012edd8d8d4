pub(crate) mod admin_page;
pub(crate) mod history_page;
pub(crate) mod home_page;
pub(crate) mod login_page;
pub(crate) mod navbar;
pub(crate) mod recommendations_page;
pub(crate) mod register_page;
pub(crate) mod resource_card;
pub(crate) mod search_page;

/// Открывает ресурс в новой вкладке. Никогда не блокирует и не валит
/// вызывающего; отклонённый popup только логируется.
pub(crate) fn open_resource(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.open_with_url_and_target(url, "_blank") {
        log::warn!("failed to open {url}: {err:?}");
    }
}
