//! Caller-side state for the recipe list: what is shown, which refresh is
//! current, and what to tell the user when a refresh fails.

use tracing::{debug, info, warn};

use crate::error::{GenerationError, RETRY_MESSAGE};
use crate::recipe::GeneratedRecipe;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Stays until a refresh succeeds (missing configuration).
    Persistent(String),
    /// Worth trying again.
    Transient(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    Replaced { count: usize },
    Failed { retryable: bool },
    /// A newer refresh was started after this one; its result was dropped.
    Stale,
}

#[derive(Debug, Default)]
pub struct RecipeBook {
    recipes: Vec<GeneratedRecipe>,
    next_ticket: u64,
    in_flight: Option<RefreshTicket>,
    notice: Option<Notice>,
}

impl RecipeBook {
    pub fn new(initial: Vec<GeneratedRecipe>) -> Self {
        Self {
            recipes: initial,
            ..Self::default()
        }
    }

    pub fn recipes(&self) -> &[GeneratedRecipe] {
        &self.recipes
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_refreshing(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start a refresh. Any refresh still in flight becomes stale.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        let ticket = RefreshTicket(self.next_ticket);
        self.next_ticket += 1;
        if let Some(previous) = self.in_flight.replace(ticket) {
            debug!(superseded = previous.0, current = ticket.0, "superseding in-flight refresh");
        }
        ticket
    }

    pub fn finish_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Vec<GeneratedRecipe>, GenerationError>,
    ) -> RefreshOutcome {
        if self.in_flight != Some(ticket) {
            debug!(ticket = ticket.0, "ignoring stale refresh result");
            return RefreshOutcome::Stale;
        }
        self.in_flight = None;

        match result {
            Ok(recipes) => {
                let count = recipes.len();
                self.recipes = recipes;
                self.notice = None;
                info!(count, "recipe list replaced");
                RefreshOutcome::Replaced { count }
            }
            Err(err) => {
                match &err {
                    GenerationError::Configuration(_) => warn!(error = %err, "recipe refresh unavailable"),
                    GenerationError::Request(_) => warn!(error = %err, "recipe refresh failed"),
                    GenerationError::ResponseFormat(_) => warn!(error = %err, "recipe refresh got a malformed response"),
                }
                self.report(&err);
                RefreshOutcome::Failed {
                    retryable: err.is_retryable(),
                }
            }
        }
    }

    /// Give up on a refresh (e.g. the caller's deadline passed). No-op if stale.
    pub fn cancel(&mut self, ticket: RefreshTicket) {
        if self.in_flight == Some(ticket) {
            self.in_flight = None;
        }
    }

    /// The caller's deadline passed. Same as a failed refresh: the list stays
    /// and the user is told to try again. No-op if stale.
    pub fn time_out(&mut self, ticket: RefreshTicket) -> RefreshOutcome {
        if self.in_flight != Some(ticket) {
            return RefreshOutcome::Stale;
        }
        self.cancel(ticket);
        warn!(ticket = ticket.0, "recipe refresh timed out");
        self.notice = Some(Notice::Transient(RETRY_MESSAGE.to_string()));
        RefreshOutcome::Failed { retryable: true }
    }

    /// Record a failure that happened before any refresh could start.
    pub fn report(&mut self, err: &GenerationError) {
        let message = err.user_message().to_string();
        self.notice = Some(if err.is_retryable() {
            Notice::Transient(message)
        } else {
            Notice::Persistent(message)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::error::ResponseFormatError;
    use crate::samples::sample_recipes;

    #[test]
    fn test_success_replaces_list_wholesale() {
        let mut book = RecipeBook::new(sample_recipes());
        let ticket = book.begin_refresh();
        assert!(book.is_refreshing());

        let fresh = vec![sample_recipes().remove(1)];
        let outcome = book.finish_refresh(ticket, Ok(fresh.clone()));

        assert_eq!(outcome, RefreshOutcome::Replaced { count: 1 });
        assert_eq!(book.recipes(), fresh.as_slice());
        assert!(!book.is_refreshing());
        assert!(book.notice().is_none());
    }

    #[test]
    fn test_failure_keeps_previous_list() {
        let before = sample_recipes();
        let mut book = RecipeBook::new(before.clone());
        let ticket = book.begin_refresh();

        let err = GenerationError::from(ResponseFormatError::new("not an array", "{}"));
        let outcome = book.finish_refresh(ticket, Err(err));

        assert_eq!(outcome, RefreshOutcome::Failed { retryable: true });
        assert_eq!(book.recipes(), before.as_slice());
        assert!(matches!(book.notice(), Some(Notice::Transient(_))));
    }

    #[test]
    fn test_stale_result_is_ignored() {
        let before = sample_recipes();
        let mut book = RecipeBook::new(before.clone());
        let first = book.begin_refresh();
        let second = book.begin_refresh();

        assert_eq!(book.finish_refresh(first, Ok(Vec::new())), RefreshOutcome::Stale);
        assert_eq!(book.recipes(), before.as_slice());
        assert!(book.is_refreshing());

        assert_eq!(
            book.finish_refresh(second, Ok(Vec::new())),
            RefreshOutcome::Replaced { count: 0 }
        );
    }

    #[test]
    fn test_cancelled_refresh_result_is_stale() {
        let mut book = RecipeBook::new(sample_recipes());
        let ticket = book.begin_refresh();
        book.cancel(ticket);
        assert!(!book.is_refreshing());
        assert_eq!(book.finish_refresh(ticket, Ok(Vec::new())), RefreshOutcome::Stale);
        assert_eq!(book.recipes().len(), sample_recipes().len());
    }

    #[test]
    fn test_timed_out_refresh_keeps_list_and_asks_to_retry() {
        let before = sample_recipes();
        let mut book = RecipeBook::new(before.clone());
        let ticket = book.begin_refresh();

        assert_eq!(book.time_out(ticket), RefreshOutcome::Failed { retryable: true });
        assert!(!book.is_refreshing());
        assert_eq!(book.recipes(), before.as_slice());
        assert_eq!(
            book.notice(),
            Some(&Notice::Transient(RETRY_MESSAGE.to_string()))
        );

        // A late result for the abandoned refresh changes nothing.
        assert_eq!(book.finish_refresh(ticket, Ok(Vec::new())), RefreshOutcome::Stale);
        assert_eq!(book.recipes(), before.as_slice());
    }

    #[test]
    fn test_time_out_of_superseded_refresh_is_ignored() {
        let mut book = RecipeBook::new(sample_recipes());
        let first = book.begin_refresh();
        let _second = book.begin_refresh();
        assert_eq!(book.time_out(first), RefreshOutcome::Stale);
        assert!(book.is_refreshing());
        assert!(book.notice().is_none());
    }

    #[test]
    fn test_missing_configuration_is_a_persistent_notice() {
        let mut book = RecipeBook::new(sample_recipes());
        book.report(&GenerationError::from(ConfigError::MissingApiKey(
            "OPENROUTER_API_KEY".to_string(),
        )));
        assert!(matches!(book.notice(), Some(Notice::Persistent(_))));
    }
}
