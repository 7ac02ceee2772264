// App module structure for better organization

pub mod types;
pub mod core;
pub mod input;
pub mod navigation;

// Re-export the main App struct and key types
pub use self::core::App;
pub use types::{Focus, NumberInputs};

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::api::{AddTraderResponse, TraderApi};
    use crate::error::SubmissionFailure;
    use crate::form::TraderDraft;
    use crate::i18n::Language;
    use super::App;

    struct UnreachableApi;

    #[async_trait]
    impl TraderApi for UnreachableApi {
        async fn add_trader(
            &self,
            _draft: &TraderDraft,
        ) -> Result<AddTraderResponse, SubmissionFailure> {
            Err(SubmissionFailure::with_message("backend unreachable"))
        }
    }

    pub(crate) fn test_app() -> App {
        App::new(Arc::new(UnreachableApi), Language::En)
    }
}
