/// Test helper functions and service builders
use mangaplus_lib::modules::auth::infrastructure::{
    FileSessionStore, FixtureUserDirectory, MemorySessionStore,
};
use mangaplus_lib::modules::auth::{LoginForm, SessionStore};
use mangaplus_lib::modules::catalog::infrastructure::InMemoryMangaRepository;
use mangaplus_lib::modules::catalog::{Manga, MangaRepository};
use mangaplus_lib::modules::comments::infrastructure::InMemoryCommentRepository;
use mangaplus_lib::shared::AppConfig;
use mangaplus_lib::AppState;
use std::path::Path;
use std::sync::Arc;

pub const DEMO_EMAIL: &str = "ahmed@example.com";
pub const DEMO_PASSWORD: &str = "password";

/// Services over the seed catalogue with an in-memory session store
pub fn build_state() -> AppState {
    build_state_with(Arc::new(InMemoryMangaRepository::seeded()))
}

pub fn build_state_with(manga_repo: Arc<dyn MangaRepository>) -> AppState {
    AppState::with_repositories(
        AppConfig::default(),
        manga_repo,
        Arc::new(FixtureUserDirectory::seeded()),
        Arc::new(MemorySessionStore::new()),
        Arc::new(InMemoryCommentRepository::seeded()),
    )
    .expect("services should build")
}

pub fn build_state_over(mangas: Vec<Manga>) -> AppState {
    build_state_with(Arc::new(InMemoryMangaRepository::new(mangas)))
}

/// Full start-up path with the session record kept under `data_dir`
pub async fn start_app(data_dir: &Path) -> AppState {
    AppState::initialize(AppConfig::default().with_data_dir(data_dir))
        .await
        .expect("app should start")
}

pub fn file_store(data_dir: &Path) -> Arc<dyn SessionStore> {
    Arc::new(FileSessionStore::in_dir(data_dir))
}

pub async fn sign_in(state: &AppState) {
    state
        .auth_service
        .login(&LoginForm::new(DEMO_EMAIL, DEMO_PASSWORD))
        .await
        .expect("demo login should succeed");
}
