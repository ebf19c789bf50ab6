use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

use mangaplus_lib::commands::invoke;
use mangaplus_lib::modules::auth::commands as auth_commands;
use mangaplus_lib::modules::auth::{LoginForm, RegistrationForm};
use mangaplus_lib::modules::catalog::commands as catalog_commands;
use mangaplus_lib::modules::comments::commands as comment_commands;
use mangaplus_lib::modules::favorites::commands as favorite_commands;
use mangaplus_lib::modules::reader::commands as reader_commands;
use mangaplus_lib::modules::reader::{ReaderSession, ReaderUpdate};
use mangaplus_lib::shared::application::Notice;
use mangaplus_lib::shared::utils::init_logger;
use mangaplus_lib::shared::AppConfig;
use mangaplus_lib::AppState;

#[derive(Parser, Debug)]
#[command(name = "mangaplus")]
#[command(version, about = "Browse and read the Manga Plus catalogue from the terminal")]
struct Cli {
    /// Directory holding the signed-in user record
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Fake network delay in milliseconds
    #[arg(long, global = true)]
    latency_ms: Option<u64>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Featured, trending and latest titles
    Home,
    /// Search, filter and sort the library
    Library {
        #[arg(short, long)]
        search: Option<String>,
        #[arg(short, long)]
        genre: Option<String>,
        /// ongoing, completed, hiatus or the Arabic label
        #[arg(long)]
        status: Option<String>,
        /// title, rating, views, chapters or updated
        #[arg(long)]
        sort: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        page_size: u32,
    },
    /// List the genres of the filter menu
    Genres,
    /// Title page with comments and your rating
    Show { manga_id: String },
    /// Open the interactive reader
    Read {
        manga_id: String,
        /// Defaults to the first chapter
        chapter_id: Option<String>,
    },
    Login {
        email: String,
        #[arg(long)]
        password: String,
    },
    Register {
        username: String,
        email: String,
        #[arg(long)]
        password: String,
        /// Defaults to the password
        #[arg(long)]
        confirm_password: Option<String>,
        #[arg(long)]
        accept_terms: bool,
    },
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Reading history, most recent first
    History,
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
    /// Rate a title from 1 to 5 stars
    Rate { manga_id: String, stars: u8 },
    Comment {
        manga_id: String,
        text: String,
        #[arg(long)]
        chapter: Option<String>,
    },
    Reply { comment_id: String, text: String },
    Like { comment_id: String },
    /// Call a command by name with JSON arguments
    Invoke {
        name: String,
        #[arg(default_value = "{}")]
        args: String,
    },
}

#[derive(Subcommand, Debug)]
enum FavoritesAction {
    List,
    Toggle { manga_id: String },
    Remove { manga_id: String },
    Clear,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a command's result, or its error as a destructive notice
fn emit<T: Serialize>(result: Result<T, String>) -> Result<bool> {
    match result {
        Ok(value) => {
            print_json(&value)?;
            Ok(true)
        }
        Err(message) => {
            let notice = Notice::destructive("خطأ", message);
            eprintln!("{}", serde_json::to_string_pretty(&notice)?);
            Ok(false)
        }
    }
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::from_env().context("reading configuration")?;
    if let Some(dir) = &cli.data_dir {
        config = config.with_data_dir(dir);
    }
    if let Some(ms) = cli.latency_ms {
        config = config.with_latency(Duration::from_millis(ms));
    }
    Ok(config)
}

fn describe(session: &ReaderSession) -> String {
    let zoom_limit = if !session.zoom.can_zoom_in() {
        " (أقصى)"
    } else if !session.zoom.can_zoom_out() {
        " (أدنى)"
    } else {
        ""
    };
    format!(
        "الفصل {}: {} | صفحة {} من {} | {}%{} | {}{}",
        session.chapter_number,
        session.chapter_title,
        session.current_page + 1,
        session.page_count,
        session.zoom.percent(),
        zoom_limit,
        session.mode.display_name(),
        if session.fullscreen { " | ملء الشاشة" } else { "" }
    )
}

async fn show_pages(state: &AppState, session: &ReaderSession) -> Result<()> {
    println!("{}", describe(session));
    let pages = reader_commands::reader_visible_pages(
        reader_commands::ReaderSessionRequest {
            session_id: session.id,
        },
        &state.reader_service,
    )
    .await
    .map_err(anyhow::Error::msg)?;
    for page in pages {
        println!("  [{}] {}", page.page + 1, page.image);
    }
    Ok(())
}

async fn read_loop(state: &AppState, manga_id: String, chapter_id: Option<String>) -> Result<()> {
    let chapter_id = match chapter_id {
        Some(id) => id,
        None => {
            catalog_commands::start_reading(
                catalog_commands::GetMangaRequest {
                    manga_id: manga_id.clone(),
                },
                &state.catalog_service,
            )
            .await
            .map_err(anyhow::Error::msg)?
            .id
        }
    };

    let session = reader_commands::open_reader(
        reader_commands::OpenReaderRequest {
            manga_id,
            chapter_id,
        },
        &state.reader_service,
    )
    .await
    .map_err(anyhow::Error::msg)?;
    let session_id = session.id;

    println!("n: التالي, p: السابق, g <رقم>: انتقال, + / - / 0: تكبير, m <single|double|scroll>, f: ملء الشاشة, q: خروج");
    show_pages(state, &session).await?;

    let request = || reader_commands::ReaderSessionRequest { session_id };
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        let mut parts = line.split_whitespace();
        let Some(action) = parts.next() else {
            continue;
        };
        let argument = parts.next();
        let service = &state.reader_service;

        let update: Result<ReaderUpdate, String> = match action {
            "n" => reader_commands::reader_next_page(request(), service).await,
            "p" => reader_commands::reader_previous_page(request(), service).await,
            "g" => match argument.and_then(|raw| raw.parse::<usize>().ok()) {
                Some(page) if page > 0 => {
                    reader_commands::reader_go_to_page(
                        reader_commands::GoToPageRequest {
                            session_id,
                            page: page - 1,
                        },
                        service,
                    )
                    .await
                }
                _ => Err("g <رقم الصفحة>".to_string()),
            },
            "+" | "-" | "0" => {
                let zoom_action = match action {
                    "+" => reader_commands::ZoomAction::In,
                    "-" => reader_commands::ZoomAction::Out,
                    _ => reader_commands::ZoomAction::Reset,
                };
                let zoomed = reader_commands::reader_zoom(
                    reader_commands::ZoomRequest {
                        session_id,
                        action: zoom_action,
                    },
                    service,
                )
                .await;
                match zoomed {
                    Ok(_) => reader_session(state, session_id).await,
                    Err(e) => Err(e),
                }
            }
            "m" => reader_commands::reader_set_mode(
                reader_commands::SetModeRequest {
                    session_id,
                    mode: argument.unwrap_or_default().to_string(),
                },
                service,
            )
            .await
            .map(|session| ReaderUpdate {
                session,
                turn: None,
            }),
            "f" => {
                reader_commands::reader_key_press(
                    reader_commands::KeyPressRequest {
                        session_id,
                        key: "f".to_string(),
                    },
                    service,
                )
                .await
            }
            "q" => break,
            other => Err(format!("أمر غير معروف: {}", other)),
        };

        match update {
            Ok(update) => {
                if let Some(turn) = &update.turn {
                    log::debug!("Turn: {:?}", turn);
                }
                show_pages(state, &update.session).await?;
            }
            Err(message) => eprintln!("{}", message),
        }
    }

    reader_commands::close_reader(request(), &state.reader_service)
        .await
        .map_err(anyhow::Error::msg)?;
    Ok(())
}

async fn reader_session(state: &AppState, session_id: uuid::Uuid) -> Result<ReaderUpdate, String> {
    state
        .reader_service
        .session(session_id)
        .map(|session| ReaderUpdate {
            session,
            turn: None,
        })
        .map_err(|e| e.into_command_error())
}

async fn run(cli: Cli) -> Result<bool> {
    let config = load_config(&cli)?;
    let state = AppState::initialize(config)
        .await
        .context("starting services")?;

    let ok = match cli.command {
        Command::Home => emit(catalog_commands::get_home_feed(&state.catalog_service).await)?,
        Command::Library {
            search,
            genre,
            status,
            sort,
            page,
            page_size,
        } => {
            let request = catalog_commands::BrowseLibraryRequest {
                search,
                genre,
                status,
                sort_by: sort,
                page: Some(page),
                page_size: Some(page_size),
            };
            emit(catalog_commands::browse_library(request, &state.catalog_service).await)?
        }
        Command::Genres => emit(catalog_commands::get_genres(&state.catalog_service).await)?,
        Command::Show { manga_id } => emit(
            comment_commands::get_manga_detail(
                comment_commands::GetMangaDetailRequest { manga_id },
                &state.manga_detail_handler,
            )
            .await,
        )?,
        Command::Read {
            manga_id,
            chapter_id,
        } => {
            read_loop(&state, manga_id, chapter_id).await?;
            true
        }
        Command::Login { email, password } => emit(
            auth_commands::login(LoginForm::new(email, password), &state.auth_service).await,
        )?,
        Command::Register {
            username,
            email,
            password,
            confirm_password,
            accept_terms,
        } => {
            let form = RegistrationForm {
                username,
                email,
                confirm_password: confirm_password.unwrap_or_else(|| password.clone()),
                password,
                accept_terms,
            };
            emit(auth_commands::register(form, &state.auth_service).await)?
        }
        Command::Logout => emit(auth_commands::logout(&state.auth_service).await)?,
        Command::Whoami => emit(auth_commands::get_current_user(&state.auth_service).await)?,
        Command::History => emit(auth_commands::get_reading_history(&state.auth_service).await)?,
        Command::Favorites { action } => {
            let service = &state.favorites_service;
            match action {
                FavoritesAction::List => emit(favorite_commands::get_favorites(service).await)?,
                FavoritesAction::Toggle { manga_id } => emit(
                    favorite_commands::toggle_favorite(
                        favorite_commands::FavoriteRequest { manga_id },
                        service,
                    )
                    .await,
                )?,
                FavoritesAction::Remove { manga_id } => emit(
                    favorite_commands::remove_favorite(
                        favorite_commands::FavoriteRequest { manga_id },
                        service,
                    )
                    .await,
                )?,
                FavoritesAction::Clear => emit(favorite_commands::clear_favorites(service).await)?,
            }
        }
        Command::Rate { manga_id, stars } => emit(
            auth_commands::rate_manga(
                auth_commands::RateMangaRequest {
                    manga_id,
                    rating: stars,
                },
                &state.rate_manga_handler,
            )
            .await,
        )?,
        Command::Comment {
            manga_id,
            text,
            chapter,
        } => emit(
            comment_commands::add_comment(
                comment_commands::AddCommentRequest {
                    manga_id,
                    chapter_id: chapter,
                    content: text,
                },
                &state.comment_service,
            )
            .await,
        )?,
        Command::Reply { comment_id, text } => emit(
            comment_commands::reply_to_comment(
                comment_commands::ReplyRequest {
                    comment_id,
                    content: text,
                },
                &state.comment_service,
            )
            .await,
        )?,
        Command::Like { comment_id } => emit(
            comment_commands::like_comment(
                comment_commands::LikeCommentRequest { comment_id },
                &state.comment_service,
            )
            .await,
        )?,
        Command::Invoke { name, args } => {
            let payload = serde_json::from_str(&args).context("arguments must be JSON")?;
            emit(invoke(&state, &name, payload).await)?
        }
    };

    Ok(ok)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    log::debug!("CLI arguments: {:?}", cli);

    if !run(cli).await? {
        std::process::exit(1);
    }
    Ok(())
}
