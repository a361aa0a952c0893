//! Toggle Flow
//!
//! The two synchronous halves of a favorite click, around the one request.

use super::sequence::{Ticket, ToggleSequencer};
use crate::error::{UiError, UiResult};
use crate::models::{FavoriteResponse, FavoriteState, RecipeId};

/// What the toggle flow needs from a favorite control
pub trait FavoriteControl {
    /// Raw id from the enclosing recipe card, if there is one
    fn recipe_id(&self) -> Option<String>;

    /// Raw cached favorite flag
    fn cached_flag(&self) -> Option<String>;

    /// Show `state`: flag, glyph and styling class
    fn render(&self, state: FavoriteState) -> UiResult<()>;
}

/// A click that passed the local checks and is ready to be sent
#[derive(Debug, Clone)]
pub struct PendingToggle {
    pub recipe_id: RecipeId,
    pub prior: FavoriteState,
    pub ticket: Ticket,
}

/// How a finished request ended for the control
#[derive(Debug, Clone, PartialEq)]
pub enum Settled {
    /// Server state rendered
    Applied(FavoriteResponse),
    /// A later click's response already rendered; nothing changed
    Stale(FavoriteResponse),
    /// Request failed; nothing changed
    Failed(UiError),
}

/// Read the control before sending anything.
///
/// Fails without numbering a click, so no request goes out.
pub fn begin<C: FavoriteControl>(control: &C, sequencer: &ToggleSequencer) -> UiResult<PendingToggle> {
    let recipe_id = RecipeId::parse(control.recipe_id().as_deref())?;
    let prior = FavoriteState::from_attr(control.cached_flag().as_deref())?;

    Ok(PendingToggle {
        recipe_id,
        prior,
        ticket: sequencer.issue(),
    })
}

/// Apply a request's outcome to the control
pub fn settle<C: FavoriteControl>(
    control: &C,
    sequencer: &ToggleSequencer,
    ticket: Ticket,
    outcome: UiResult<FavoriteResponse>,
) -> Settled {
    let response = match outcome {
        Ok(response) => response,
        Err(e) => return Settled::Failed(e),
    };

    if sequencer.is_superseded(ticket) {
        return Settled::Stale(response);
    }

    // Only a fully rendered response supersedes older clicks
    match control.render(response.state()) {
        Ok(()) => {
            sequencer.mark_applied(ticket);
            Settled::Applied(response)
        }
        Err(e) => Settled::Failed(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FavoriteConfig;
    use std::cell::{Cell, RefCell};

    /// In-memory favorite button inside an optional recipe card
    struct FakeControl {
        card_id: Option<String>,
        flag: RefCell<Option<String>>,
        glyph: RefCell<String>,
        favorited_class: Cell<bool>,
        renders: Cell<usize>,
        fail_render: Cell<bool>,
        config: FavoriteConfig,
    }

    impl FakeControl {
        fn new(card_id: Option<&str>, flag: &str) -> Self {
            let config = FavoriteConfig::default();
            let state = FavoriteState::from_attr(Some(flag)).unwrap_or(FavoriteState::NotFavorited);
            Self {
                card_id: card_id.map(str::to_string),
                flag: RefCell::new(Some(flag.to_string())),
                glyph: RefCell::new(state.glyph(&config).to_string()),
                favorited_class: Cell::new(state.is_favorited()),
                renders: Cell::new(0),
                fail_render: Cell::new(false),
                config,
            }
        }

        fn snapshot(&self) -> (Option<String>, String, bool) {
            (
                self.flag.borrow().clone(),
                self.glyph.borrow().clone(),
                self.favorited_class.get(),
            )
        }
    }

    impl FavoriteControl for FakeControl {
        fn recipe_id(&self) -> Option<String> {
            self.card_id.clone()
        }

        fn cached_flag(&self) -> Option<String> {
            self.flag.borrow().clone()
        }

        fn render(&self, state: FavoriteState) -> UiResult<()> {
            *self.flag.borrow_mut() = Some(state.as_attr().to_string());
            if self.fail_render.get() {
                return Err(UiError::Dom("classList unavailable".to_string()));
            }
            *self.glyph.borrow_mut() = state.glyph(&self.config).to_string();
            self.favorited_class.set(state.is_favorited());
            self.renders.set(self.renders.get() + 1);
            Ok(())
        }
    }

    fn response(favorited: bool) -> UiResult<FavoriteResponse> {
        Ok(FavoriteResponse { is_favorited: favorited, message: None })
    }

    #[test]
    fn test_click_renders_server_state() {
        let control = FakeControl::new(Some("42"), "false");
        let seq = ToggleSequencer::default();

        let pending = begin(&control, &seq).unwrap();
        assert_eq!(pending.recipe_id.as_str(), "42");
        assert_eq!(pending.prior, FavoriteState::NotFavorited);
        assert_eq!(
            pending.recipe_id.favorite_url(&control.config),
            "/recipes/favorite/42"
        );

        let settled = settle(&control, &seq, pending.ticket, response(true));
        assert!(matches!(settled, Settled::Applied(_)));
        assert_eq!(control.snapshot(), (Some("true".to_string()), "⭐".to_string(), true));
    }

    #[test]
    fn test_server_state_wins_over_expected_toggle() {
        // Click expected an unfavorite, but another tab already toggled it back.
        let control = FakeControl::new(Some("9"), "true");
        let seq = ToggleSequencer::default();

        let pending = begin(&control, &seq).unwrap();
        let settled = settle(&control, &seq, pending.ticket, response(true));
        assert!(matches!(settled, Settled::Applied(_)));
        assert_eq!(control.snapshot(), (Some("true".to_string()), "⭐".to_string(), true));
    }

    #[test]
    fn test_missing_recipe_id_sends_nothing() {
        let control = FakeControl::new(None, "false");
        let seq = ToggleSequencer::default();
        let before = control.snapshot();

        assert_eq!(begin(&control, &seq).unwrap_err(), UiError::MissingRecipeId);
        assert_eq!(seq.issued(), 0);
        assert_eq!(control.snapshot(), before);
        assert_eq!(control.renders.get(), 0);
    }

    #[test]
    fn test_invalid_flag_sends_nothing() {
        let control = FakeControl::new(Some("3"), "yes");
        let seq = ToggleSequencer::default();

        assert_eq!(
            begin(&control, &seq).unwrap_err(),
            UiError::InvalidFlag("yes".to_string())
        );
        assert_eq!(seq.issued(), 0);
    }

    #[test]
    fn test_failures_leave_control_untouched() {
        let failures = vec![
            UiError::Http { status: 500, message: None },
            UiError::Http { status: 401, message: Some("Unauthorized".to_string()) },
            UiError::Transport("network down".to_string()),
            UiError::Parse("expected value".to_string()),
        ];

        for failure in failures {
            let control = FakeControl::new(Some("5"), "true");
            let seq = ToggleSequencer::default();
            let before = control.snapshot();

            let pending = begin(&control, &seq).unwrap();
            let settled = settle(&control, &seq, pending.ticket, Err(failure.clone()));
            assert_eq!(settled, Settled::Failed(failure));
            assert_eq!(control.snapshot(), before);
            assert_eq!(control.renders.get(), 0);
        }
    }

    #[test]
    fn test_overlapping_clicks_newest_wins_out_of_order() {
        let control = FakeControl::new(Some("1"), "false");
        let seq = ToggleSequencer::default();

        let first = begin(&control, &seq).unwrap();
        let second = begin(&control, &seq).unwrap();
        // Both clicks saw the same cached flag
        assert_eq!(first.prior, second.prior);

        assert!(matches!(settle(&control, &seq, second.ticket, response(false)), Settled::Applied(_)));
        assert!(matches!(settle(&control, &seq, first.ticket, response(true)), Settled::Stale(_)));
        assert_eq!(control.snapshot(), (Some("false".to_string()), "☆".to_string(), false));
    }

    #[test]
    fn test_overlapping_clicks_in_order() {
        let control = FakeControl::new(Some("1"), "false");
        let seq = ToggleSequencer::default();

        let first = begin(&control, &seq).unwrap();
        let second = begin(&control, &seq).unwrap();

        settle(&control, &seq, first.ticket, response(true));
        settle(&control, &seq, second.ticket, response(false));
        assert_eq!(control.renders.get(), 2);
        assert_eq!(control.snapshot(), (Some("false".to_string()), "☆".to_string(), false));
    }

    #[test]
    fn test_newest_failure_keeps_last_good_state() {
        let control = FakeControl::new(Some("1"), "false");
        let seq = ToggleSequencer::default();

        let first = begin(&control, &seq).unwrap();
        let second = begin(&control, &seq).unwrap();

        let failed = settle(&control, &seq, second.ticket, Err(UiError::Transport("aborted".to_string())));
        assert!(matches!(failed, Settled::Failed(_)));
        assert!(matches!(settle(&control, &seq, first.ticket, response(true)), Settled::Applied(_)));
        assert_eq!(control.snapshot(), (Some("true".to_string()), "⭐".to_string(), true));
    }

    #[test]
    fn test_failed_render_does_not_supersede_older_clicks() {
        let control = FakeControl::new(Some("1"), "false");
        let seq = ToggleSequencer::default();

        let first = begin(&control, &seq).unwrap();
        let second = begin(&control, &seq).unwrap();

        control.fail_render.set(true);
        let failed = settle(&control, &seq, second.ticket, response(true));
        assert!(matches!(failed, Settled::Failed(UiError::Dom(_))));

        // The older response can still repair the half-rendered control
        control.fail_render.set(false);
        assert!(matches!(settle(&control, &seq, first.ticket, response(false)), Settled::Applied(_)));
        assert_eq!(control.snapshot(), (Some("false".to_string()), "☆".to_string(), false));
    }
}
