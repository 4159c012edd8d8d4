//! Платформонезависимое ядро клиента ML Xplore.
//!
//! Всё, что нужно клиентскому фронтенду помимо самого транспорта:
//! - модель данных сервиса поиска ресурсов (`models`)
//! - таксономия ошибок, общая для всех представлений (`error`)
//! - инварианты сессии (`session`) и маршрутный guard (`routes`)
//! - универсальный цикл загрузки (`fetch`), пагинация (`pagination`),
//!   состояние поискового запроса (`search`) и валидация auth-форм
//!   (`register`)
//! - построители путей и query-строк API (`api`)
//!
//! Крейт не делает I/O и без изменений собирается для хоста и для `wasm32`,
//! так что браузерный и нативный клиенты делят одно ядро.
#![warn(missing_docs)]

pub mod api;
pub mod error;
pub mod fetch;
pub mod models;
pub mod pagination;
pub mod register;
pub mod routes;
pub mod search;
pub mod session;

pub use error::{ClientError, ClientResult};
pub use fetch::{FetchPhase, FetchState};
pub use models::{
    AdminResourcesPage, AdminStats, AuthResponse, LoginRequest, RegisterRequest, Resource,
    ScoreBucket, TagCount, User,
};
pub use pagination::Pagination;
pub use register::RegistrationForm;
pub use routes::{Route, resolve_navigation};
pub use search::SearchQuery;
pub use session::Session;
