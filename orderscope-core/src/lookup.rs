//! Order lookup orchestration.
//!
//! [`LookupController`] owns the single source of truth for what is being
//! searched and drives the presenter and view model from outcomes. It never
//! performs I/O itself: `search` hands back a [`LookupTicket`], the frontend
//! runs [`run_lookup`] as an async task, and the completion comes back
//! through [`apply_outcome`]. Completions carry the ticket's token so
//! out-of-order arrivals can be discarded instead of overwriting a newer
//! lookup's display.

use std::sync::Arc;
use std::time::Instant;

use orderscope_gateway::OrderGateway;

use crate::error::{CoreError, CoreResult};
use crate::location::{History, UrlSynchronizer};
use crate::presenter::StatusPresenter;
use crate::types::{DisplayState, LookupMeta, LookupReply};
use crate::view_model::OrderViewModel;

/// A lookup the controller has initiated but not yet resolved.
///
/// The token orders tickets: only the outcome carrying the latest issued
/// token is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    pub token: u64,
    pub identifier: String,
}

/// Executes one lookup against the gateway, measuring its latency.
///
/// Every failure folds into [`CoreError`]; the elapsed time is only
/// reported for successful lookups.
pub async fn run_lookup(
    gateway: Arc<dyn OrderGateway>,
    identifier: &str,
) -> CoreResult<LookupReply> {
    let started = Instant::now();
    let fetched = gateway.fetch_order(identifier).await?;
    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    Ok(LookupReply {
        order: fetched.order,
        meta: LookupMeta {
            latency_ms,
            served_from_cache: fetched.served_from_cache,
        },
    })
}

/// Owns the lookup state machine.
///
/// All mutation happens on the caller's single event loop; the controller
/// holds no locks and spawns no tasks.
pub struct LookupController {
    gateway: Arc<dyn OrderGateway>,
    url: UrlSynchronizer,
    presenter: StatusPresenter,
    view: OrderViewModel,
    current_identifier: String,
    issued_token: u64,
}

impl LookupController {
    /// Creates a controller whose address line starts at `initial_path`.
    #[must_use]
    pub fn new(gateway: Arc<dyn OrderGateway>, initial_path: impl Into<String>) -> Self {
        Self {
            gateway,
            url: UrlSynchronizer::with_initial_path(initial_path),
            presenter: StatusPresenter::new(),
            view: OrderViewModel::new(),
            current_identifier: String::new(),
            issued_token: 0,
        }
    }

    /// Validates `raw` and, when it holds an identifier, starts a lookup.
    ///
    /// The input is trimmed first. An empty result shows the validation
    /// error, hides any visible result, records the no-identifier path,
    /// and returns `None` without touching the network. Otherwise the
    /// canonical path is recorded, the panels flip to loading, and the
    /// returned ticket is ready to be executed.
    pub fn search(&mut self, raw: &str) -> Option<LookupTicket> {
        let identifier = raw.trim().to_string();
        self.current_identifier.clone_from(&identifier);

        if identifier.is_empty() {
            self.presenter.hide_result();
            self.presenter
                .show_error(CoreError::IdentifierRequired.to_string());
            self.url.record("");
            return None;
        }

        self.url.record(&identifier);
        self.presenter.show_loading();
        self.presenter.hide_error();
        self.presenter.hide_result();

        self.issued_token += 1;
        log::debug!("Lookup #{} for '{identifier}'", self.issued_token);
        Some(LookupTicket {
            token: self.issued_token,
            identifier,
        })
    }

    /// Reacts to the address line: if the current path names an identifier,
    /// adopts it and starts the same lookup a manual search would.
    ///
    /// A non-canonical path does nothing; an already-displayed result is
    /// left in place. Called once at startup and after every history
    /// traversal.
    pub fn load_from_current_location(&mut self) -> Option<LookupTicket> {
        let identifier = self.url.current_identifier()?.to_string();
        self.search(&identifier)
    }

    /// Moves one history entry back and reloads from the restored path.
    ///
    /// Returns `None` when there is no earlier entry or the restored path
    /// holds no identifier.
    pub fn navigate_back(&mut self) -> Option<LookupTicket> {
        if !self.url.back() {
            return None;
        }
        self.load_from_current_location()
    }

    /// Moves one history entry forward and reloads from the restored path.
    pub fn navigate_forward(&mut self) -> Option<LookupTicket> {
        if !self.url.forward() {
            return None;
        }
        self.load_from_current_location()
    }

    /// Applies a completed lookup outcome.
    ///
    /// An outcome whose token is not the latest issued one is stale: a
    /// newer lookup owns the display, so the completion is dropped and
    /// `false` is returned. Otherwise exactly one of the error/result
    /// paths fires, and the loading panel is cleared on both.
    pub fn apply_outcome(&mut self, token: u64, outcome: CoreResult<LookupReply>) -> bool {
        if token != self.issued_token {
            log::debug!(
                "Discarding stale lookup completion #{token} (latest is #{})",
                self.issued_token
            );
            return false;
        }

        match outcome {
            Ok(reply) => {
                self.view.apply(&reply.order, reply.meta);
                self.presenter.show_result();
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Lookup #{token} failed: {e}");
                } else {
                    log::error!("Lookup #{token} failed: {e}");
                }
                self.presenter.show_error(e.to_string());
            }
        }
        self.presenter.hide_loading();
        true
    }

    /// Identifier of the most recently initiated search, as the input
    /// field should show it.
    #[must_use]
    pub fn current_identifier(&self) -> &str {
        &self.current_identifier
    }

    /// Current address-line path.
    #[must_use]
    pub fn current_path(&self) -> &str {
        self.url.current_path()
    }

    #[must_use]
    pub fn can_navigate_back(&self) -> bool {
        self.url.history().can_go_back()
    }

    #[must_use]
    pub fn can_navigate_forward(&self) -> bool {
        self.url.history().can_go_forward()
    }

    /// The navigation history backing the address line.
    #[must_use]
    pub fn history(&self) -> &History {
        self.url.history()
    }

    #[must_use]
    pub fn presenter(&self) -> &StatusPresenter {
        &self.presenter
    }

    #[must_use]
    pub fn view_model(&self) -> &OrderViewModel {
        &self.view
    }

    /// The single exclusive display mode.
    #[must_use]
    pub fn display_state(&self) -> DisplayState {
        self.presenter.display_state()
    }

    /// Shared handle to the gateway, for executing tickets.
    #[must_use]
    pub fn gateway(&self) -> Arc<dyn OrderGateway> {
        Arc::clone(&self.gateway)
    }
}
