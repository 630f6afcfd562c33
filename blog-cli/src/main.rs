use std::process;

use anyhow::{Context, Result};
use blog_client::{BlogClient, BlogClientError, Category, CategoryPage, Post, PostPage};
use clap::{Parser, Subcommand};
use serde_json::to_string_pretty;

const DEFAULT_SERVER: &str = "http://127.0.0.1:8080";
const SERVER_ENV: &str = "BLOG_SERVER";

#[derive(Debug, Parser)]
#[command(name = "blog-cli", version, about = "CLI клиент для blog-server")]
struct Cli {
    /// Адрес сервера. По умолчанию берётся из BLOG_SERVER или http://127.0.0.1:8080.
    #[arg(long, global = true)]
    server: Option<String>,

    /// Печатать ответ сервера как JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Лента опубликованных постов.
    List {
        /// Номер страницы (любое значение, сервер нормализует).
        #[arg(long)]
        page: Option<String>,
    },
    /// Посты одной категории.
    Category {
        slug: String,
        #[arg(long)]
        page: Option<String>,
    },
    /// Список категорий.
    Categories,
    /// Пост по slug.
    Show { slug: String },
    /// Отправка сообщения через форму обратной связи.
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
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

    let server = resolve_server(cli.server, std::env::var(SERVER_ENV).ok());
    let client = BlogClient::new(server).context("не удалось создать HTTP клиент")?;

    match cli.command {
        Command::List { page } => {
            let page = client
                .list_posts(page.as_deref())
                .await
                .map_err(map_client_error)?;
            if cli.json {
                println!("{}", to_string_pretty(&page)?);
            } else {
                print_page(&page);
            }
        }
        Command::Category { slug, page } => {
            let result = client
                .list_category_posts(&slug, page.as_deref())
                .await
                .map_err(map_client_error)?;
            if cli.json {
                println!("{}", to_string_pretty(&result)?);
            } else {
                print_category_page(&result);
            }
        }
        Command::Categories => {
            let categories = client.list_categories().await.map_err(map_client_error)?;
            if cli.json {
                println!("{}", to_string_pretty(&categories)?);
            } else {
                print_categories(&categories);
            }
        }
        Command::Show { slug } => {
            let post = client.get_post(&slug).await.map_err(map_client_error)?;
            if cli.json {
                println!("{}", to_string_pretty(&post)?);
            } else {
                print_post(&post);
            }
        }
        Command::Contact {
            name,
            email,
            message,
        } => {
            client
                .send_contact(&name, &email, &message)
                .await
                .map_err(map_client_error)?;
            println!("Сообщение отправлено");
        }
    }

    Ok(())
}

fn resolve_server(flag: Option<String>, env: Option<String>) -> String {
    let raw = flag
        .or(env)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_SERVER.to_string());
    normalize_server(raw)
}

fn normalize_server(server: String) -> String {
    if server.starts_with("http://") || server.starts_with("https://") {
        return server;
    }

    format!("http://{server}")
}

fn map_client_error(err: BlogClientError) -> anyhow::Error {
    let message = match err {
        BlogClientError::NotFound => "не найдено".to_string(),
        BlogClientError::InvalidRequest { message, fields } if fields.is_empty() => {
            format!("некорректный запрос: {message}")
        }
        BlogClientError::InvalidRequest { fields, .. } => {
            format!("не заполнены поля: {}", fields.join(", "))
        }
        BlogClientError::Delivery(message) => format!("сообщение не доставлено: {message}"),
        BlogClientError::Http(err) => format!("ошибка HTTP: {err}"),
    };
    anyhow::anyhow!(message)
}

fn print_page(page: &PostPage) {
    println!(
        "Страница {} из {} (постов всего: {})",
        page.page, page.num_pages, page.total
    );

    if page.empty {
        println!("Постов пока нет");
        return;
    }

    for post in &page.posts {
        println!(
            "- {} [{}] {} ({})",
            post.created_at.format("%Y-%m-%d"),
            post.category.name,
            post.title,
            post.slug
        );
    }

    if let Some(previous) = page.previous_page {
        println!("предыдущая: --page {previous}");
    }
    if let Some(next) = page.next_page {
        println!("следующая: --page {next}");
    }
}

fn print_category_page(result: &CategoryPage) {
    println!("Категория: {} ({})", result.category.name, result.category.slug);
    if let Some(description) = &result.category.description {
        println!("{description}");
    }
    print_page(&result.page);
}

fn print_categories(categories: &[Category]) {
    println!("Категорий: {}", categories.len());
    for category in categories {
        println!("- {} ({})", category.name, category.slug);
    }
}

fn print_post(post: &Post) {
    println!("{}", post.title);
    if let Some(subtitle) = &post.subtitle {
        println!("{subtitle}");
    }
    println!("author: {}", post.author.username);
    println!("category: {}", post.category.name);
    println!("created_at: {}", post.created_at);
    if !post.tags.is_empty() {
        println!("tags: {}", post.tags.join(", "));
    }
    println!();
    println!("{}", post.content);
}
