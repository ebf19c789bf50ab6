pub mod commands;
pub mod modules;
pub mod shared;

use modules::{
    auth::{
        application::use_cases::RateMangaHandler,
        infrastructure::{FileSessionStore, FixtureUserDirectory},
        AuthService, SessionStore, UserDirectory,
    },
    catalog::{infrastructure::InMemoryMangaRepository, CatalogService, MangaRepository},
    comments::{
        infrastructure::InMemoryCommentRepository, CommentRepository, CommentService,
        MangaDetailHandler,
    },
    favorites::FavoritesService,
    reader::ReaderService,
};
use shared::{AppConfig, AppResult};
use std::sync::Arc;

/// Every service the command layer talks to
pub struct AppState {
    pub config: AppConfig,
    pub catalog_service: Arc<CatalogService>,
    pub auth_service: Arc<AuthService>,
    pub favorites_service: Arc<FavoritesService>,
    pub comment_service: Arc<CommentService>,
    pub reader_service: Arc<ReaderService>,
    pub manga_detail_handler: Arc<MangaDetailHandler>,
    pub rate_manga_handler: Arc<RateMangaHandler>,
}

impl AppState {
    /// Wire the fixture catalogue and the file-backed session store, then
    /// restore whoever was signed in last time.
    pub async fn initialize(config: AppConfig) -> AppResult<Self> {
        let manga_repo: Arc<dyn MangaRepository> = Arc::new(InMemoryMangaRepository::seeded());
        let user_directory: Arc<dyn UserDirectory> = Arc::new(FixtureUserDirectory::seeded());
        let session_store: Arc<dyn SessionStore> =
            Arc::new(FileSessionStore::in_dir(&config.data_dir));
        let comment_repo: Arc<dyn CommentRepository> =
            Arc::new(InMemoryCommentRepository::seeded());

        let state = Self::with_repositories(
            config,
            manga_repo,
            user_directory,
            session_store,
            comment_repo,
        )?;

        state.auth_service.restore().await?;
        Ok(state)
    }

    /// Build the services over the given repositories without touching storage
    pub fn with_repositories(
        config: AppConfig,
        manga_repo: Arc<dyn MangaRepository>,
        user_directory: Arc<dyn UserDirectory>,
        session_store: Arc<dyn SessionStore>,
        comment_repo: Arc<dyn CommentRepository>,
    ) -> AppResult<Self> {
        let latency = config.simulated_latency;

        let catalog_service = Arc::new(CatalogService::new(Arc::clone(&manga_repo), latency));

        let auth_service = Arc::new(AuthService::new(
            user_directory,
            session_store,
            config.demo_password.clone(),
            latency,
        )?);

        let favorites_service = Arc::new(FavoritesService::new(
            Arc::clone(&auth_service),
            Arc::clone(&catalog_service),
            latency,
        ));

        let comment_service = Arc::new(CommentService::new(
            comment_repo,
            Arc::clone(&auth_service),
            Arc::clone(&catalog_service),
        ));

        let reader_service = Arc::new(ReaderService::new(
            Arc::clone(&catalog_service),
            Arc::clone(&auth_service),
        ));

        let manga_detail_handler = Arc::new(MangaDetailHandler::new(
            Arc::clone(&catalog_service),
            Arc::clone(&comment_service),
            Arc::clone(&auth_service),
        ));

        let rate_manga_handler = Arc::new(RateMangaHandler::new(
            Arc::clone(&auth_service),
            Arc::clone(&manga_repo),
        ));

        crate::log_info!(
            "Services ready (data dir {}, latency {}ms)",
            config.data_dir.display(),
            latency.as_millis()
        );

        Ok(Self {
            config,
            catalog_service,
            auth_service,
            favorites_service,
            comment_service,
            reader_service,
            manga_detail_handler,
            rate_manga_handler,
        })
    }
}
