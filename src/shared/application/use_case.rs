use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Handler for an action that changes state, such as rating a title.
///
/// ```ignore
/// #[async_trait]
/// impl UseCase<RateMangaCommand, RateMangaResult> for RateMangaHandler {
///     async fn execute(&self, command: RateMangaCommand) -> AppResult<RateMangaResult> {
///         // ...
///     }
/// }
/// ```
#[async_trait]
pub trait UseCase<TCommand, TResult> {
    async fn execute(&self, command: TCommand) -> AppResult<TResult>;
}

/// Read-only counterpart of [`UseCase`]; assembles a view without side effects
#[async_trait]
pub trait Query<TQuery, TResult> {
    async fn execute(&self, query: TQuery) -> AppResult<TResult>;
}
