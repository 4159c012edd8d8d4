use std::fs;
use std::io;
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use xplore_client::{AdminResourcesPage, AdminStats, Resource, XploreClient, XploreClientError};

const TOKEN_FILE: &str = ".xplore_token";
const DEFAULT_API_URL: &str = "http://127.0.0.1:5000/api";

#[derive(Debug, Parser)]
#[command(name = "xplore-cli", version, about = "CLI клиент сервиса поиска ML-ресурсов ML Xplore")]
struct Cli {
    /// Корень API (по умолчанию XPLORE_API_URL или локальный dev-сервер).
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Регистрация аккаунта.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Предпочитаемые категории; повторите флаг для нескольких.
        #[arg(long = "preference", required = true)]
        preferences: Vec<String>,
    },
    /// Вход и сохранение токена.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Удаление сохранённого токена.
    Logout,
    /// Профиль авторизованного пользователя (требует токен).
    Whoami,
    /// Поиск по индексу ресурсов (требует токен).
    Search {
        query: String,
        /// Фильтры-теги; повторите флаг для нескольких.
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Персональные рекомендации (требует токен).
    Recommendations,
    /// История просмотров (требует токен).
    History,
    /// Запись посещённого ресурса в историю (требует токен).
    Visit {
        url: String,
    },
    /// Сводная статистика индекса (требует токен).
    Stats,
    /// Постраничный список всех ресурсов (требует токен).
    Resources {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        per_page: u32,
    },
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Ошибка: {err}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let base_url = resolve_server(cli.server);
    let mut client = XploreClient::new(base_url);

    if let Some(token) = load_token().context("не удалось прочитать .xplore_token")? {
        client.set_token(token);
    }

    match cli.command {
        Command::Register {
            name,
            email,
            password,
            preferences,
        } => {
            client
                .register(&name, &email, &password, &preferences)
                .await
                .map_err(map_client_error)?;
            let auth = client
                .login(&email, &password)
                .await
                .map_err(map_client_error)?;
            persist_token(&client).context("не удалось сохранить токен")?;
            println!(
                "Регистрация успешна, вход выполнен: {} <{}>",
                auth.user.name, auth.user.email
            );
        }
        Command::Login { email, password } => {
            let auth = client
                .login(&email, &password)
                .await
                .map_err(map_client_error)?;
            persist_token(&client).context("не удалось сохранить токен")?;
            println!("Вход выполнен: {} <{}>", auth.user.name, auth.user.email);
        }
        Command::Logout => {
            remove_token().context("не удалось удалить .xplore_token")?;
            println!("Выход выполнен");
        }
        Command::Whoami => {
            let user = client.get_user().await.map_err(map_client_error)?;
            println!("id: {}", user.id);
            println!("name: {}", user.name);
            println!("email: {}", user.email);
            println!("preferences: {}", user.preferences.join(", "));
        }
        Command::Search { query, tags } => {
            let results = client
                .search(&query, &tags)
                .await
                .map_err(map_client_error)?;
            println!("Найдено ресурсов: {}", results.len());
            print_resources(&results);
        }
        Command::Recommendations => {
            let recommendations = client
                .recommendations()
                .await
                .map_err(map_client_error)?;
            println!("Рекомендаций: {}", recommendations.len());
            print_resources(&recommendations);
        }
        Command::History => {
            let history = client.history().await.map_err(map_client_error)?;
            println!("Недавних ресурсов: {}", history.len());
            print_resources(&history);
        }
        Command::Visit { url } => {
            client.add_history(&url).await.map_err(map_client_error)?;
            println!("Добавлено в историю: {url}");
        }
        Command::Stats => {
            let stats = client.admin_stats().await.map_err(map_client_error)?;
            print_stats(&stats);
        }
        Command::Resources { page, per_page } => {
            let table = client
                .admin_resources(page, per_page)
                .await
                .map_err(map_client_error)?;
            print_resource_page(&table);
        }
    }

    Ok(())
}

fn resolve_server(server: Option<String>) -> String {
    let raw = server
        .or_else(|| std::env::var("XPLORE_API_URL").ok())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    normalize_server(raw)
}

fn normalize_server(server: String) -> String {
    if server.starts_with("http://") || server.starts_with("https://") {
        return server;
    }

    format!("http://{server}")
}

fn parse_token_content(raw: &str) -> Option<String> {
    let token = raw.trim().to_string();
    if token.is_empty() {
        return None;
    }
    Some(token)
}

fn load_token() -> io::Result<Option<String>> {
    if !Path::new(TOKEN_FILE).exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(TOKEN_FILE)?;
    Ok(parse_token_content(&raw))
}

fn persist_token(client: &XploreClient) -> io::Result<()> {
    if let Some(token) = client.get_token() {
        fs::write(TOKEN_FILE, token)?;
    }
    Ok(())
}

fn remove_token() -> io::Result<()> {
    if Path::new(TOKEN_FILE).exists() {
        fs::remove_file(TOKEN_FILE)?;
    }
    Ok(())
}

fn map_client_error(err: XploreClientError) -> anyhow::Error {
    let message = match err {
        XploreClientError::Unauthorized => {
            "требуется авторизация: выполните `xplore-cli login ...` или `xplore-cli register ...`"
                .to_string()
        }
        XploreClientError::NotFound => "ресурс не найден".to_string(),
        XploreClientError::InvalidRequest(message) => format!("некорректный запрос: {message}"),
        XploreClientError::Http(err) => format!("ошибка HTTP: {err}"),
    };
    anyhow::anyhow!(message)
}

fn print_resources(resources: &[Resource]) {
    for resource in resources {
        println!("- {}", resource.display_title());
        println!("  url: {}", resource.url);
        let tags = resource.tag_list();
        if !tags.is_empty() {
            println!("  tags: {}", tags.join(", "));
        }
        if let Some(score) = resource.score {
            println!("  score: {score:.2}");
        }
        if let Some(timestamp) = &resource.timestamp {
            println!("  visited: {timestamp}");
        }
    }
}

fn print_stats(stats: &AdminStats) {
    println!("resources: {}", stats.total_resources);
    println!("links: {}", stats.total_links);
    println!("users: {}", stats.total_users);
    println!("interactions: {}", stats.total_interactions);
    if !stats.tag_distribution.is_empty() {
        println!("top categories:");
        for entry in &stats.tag_distribution {
            println!("  {}: {}", entry.label(), entry.count);
        }
    }
}

fn print_resource_page(page: &AdminResourcesPage) {
    println!(
        "Страница {} из {} (total={})",
        page.page, page.total_pages, page.total
    );
    for resource in &page.resources {
        let popularity = resource.popularity_score.unwrap_or(0.0);
        let crawled = resource
            .crawled_date()
            .map(|date| date.to_string())
            .or_else(|| resource.last_crawled.clone())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "- {} | popularity {:.2} | crawled {}",
            resource.display_title(),
            popularity,
            crawled
        );
        println!("  {}", resource.url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_server_keeps_scheme() {
        let server = normalize_server("https://xplore.example.com/api".to_string());
        assert_eq!(server, "https://xplore.example.com/api");
    }

    #[test]
    fn normalize_server_adds_http_scheme() {
        let server = normalize_server("127.0.0.1:5000/api".to_string());
        assert_eq!(server, "http://127.0.0.1:5000/api");
    }

    #[test]
    fn parse_token_content_trims_whitespace() {
        let token = parse_token_content("  abc.def.ghi \n");
        assert_eq!(token.as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn parse_token_content_rejects_blank() {
        assert!(parse_token_content("   \n").is_none());
    }
}
