//! Desk controller
//!
//! Owns the client session, the fetched catalog and the tip selection.
//! Each command mutates that state through the order core and the screen is
//! re-rendered from scratch afterwards.

use crate::command::{DeskCommand, HELP};
use crate::render::{self, MISSING_FIELDS_NOTICE};
use menu_client::{CatalogProvider, ClientConfig};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::Catalog;
use shared::order::{ClientSession, OrderChange, OrderSummary, TipPercent};

/// Result of handling one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeskOutcome {
    pub screen: String,
    pub quit: bool,
}

#[derive(Debug, Default)]
pub struct Desk {
    session: Option<ClientSession>,
    catalog: Catalog,
    tip: Option<TipPercent>,
    /// Shown once with the next screen, then dismissed
    notice: Option<String>,
}

impl Desk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&ClientSession> {
        self.session.as_ref()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn tip(&self) -> Option<TipPercent> {
        self.tip
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Open the client session; returns `false` and sets a notice when a
    /// required field is blank
    pub fn save_client(&mut self, table: &str, time: &str) -> bool {
        match ClientSession::new(table, time) {
            Ok(session) => {
                self.session = Some(session);
                self.tip = None;
                self.notice = None;
                true
            }
            Err(e) => {
                tracing::warn!(code = %e.code, error = %e, "Client session rejected");
                self.notice = Some(if e.code == ErrorCode::RequiredField {
                    MISSING_FIELDS_NOTICE.to_string()
                } else {
                    e.message
                });
                false
            }
        }
    }

    /// Fetch the catalog; on failure log and leave the current catalog in place
    pub async fn load_catalog(&mut self, provider: &dyn CatalogProvider) -> bool {
        match provider.fetch_catalog().await {
            Ok(catalog) => {
                tracing::info!(dishes = catalog.len(), "Catalog loaded");
                self.catalog = catalog;
                true
            }
            Err(e) => {
                let err = AppError::from(e);
                tracing::error!(
                    code = %err.code,
                    category = err.code.category().name(),
                    error = %err,
                    "Failed to load catalog"
                );
                false
            }
        }
    }

    /// Build the HTTP catalog client and fetch; a client that cannot be
    /// built is logged like any other fetch failure
    pub async fn connect_catalog(&mut self, config: &ClientConfig) -> bool {
        match config.build_http_client() {
            Ok(client) => self.load_catalog(&client).await,
            Err(e) => {
                let err = AppError::from(e);
                tracing::error!(
                    code = %err.code,
                    category = err.code.category().name(),
                    error = %err,
                    "Failed to build catalog client"
                );
                false
            }
        }
    }

    /// Parse and handle one line of input
    pub fn handle_line(&mut self, line: &str) -> DeskOutcome {
        match line.parse::<DeskCommand>() {
            Ok(command) => self.handle(command),
            Err(e) => {
                tracing::warn!(input = %line, error = %e, "Rejected command");
                self.notice = Some(e.message);
                self.outcome(false)
            }
        }
    }

    pub fn handle(&mut self, command: DeskCommand) -> DeskOutcome {
        self.notice = None;
        match self.apply(command) {
            Ok(quit) => self.outcome(quit),
            Err(e) => {
                tracing::warn!(
                    command = ?command,
                    code = %e.code,
                    category = e.code.category().name(),
                    error = %e,
                    "Command failed"
                );
                self.notice = Some(e.message);
                self.outcome(false)
            }
        }
    }

    fn apply(&mut self, command: DeskCommand) -> AppResult<bool> {
        match command {
            DeskCommand::Quit => return Ok(true),
            DeskCommand::Help => {
                self.notice = Some(HELP.to_string());
                return Ok(false);
            }
            DeskCommand::Show | DeskCommand::Menu => return Ok(false),
            _ => {}
        }

        let session = self
            .session
            .as_mut()
            .ok_or_else(|| AppError::new(ErrorCode::SessionNotStarted))?;
        let order = session.order_mut();

        let change = match command {
            DeskCommand::Quantity { dish_id, quantity } => {
                order.set_quantity_by_id(&self.catalog, dish_id, quantity)?
            }
            DeskCommand::Remove { dish_id } => order.remove_line(dish_id),
            DeskCommand::Tip(tip) => {
                if order.is_empty() {
                    return Err(AppError::new(ErrorCode::OrderEmpty));
                }
                self.tip = Some(tip);
                OrderChange::Unchanged
            }
            _ => OrderChange::Unchanged,
        };

        // The tip options disappear with the last line
        if change.is_changed() && order.is_empty() {
            self.tip = None;
        }
        Ok(false)
    }

    fn outcome(&mut self, quit: bool) -> DeskOutcome {
        let screen = self.screen();
        self.notice = None;
        DeskOutcome { screen, quit }
    }

    /// Full screen: catalog, summary and any pending notice
    pub fn screen(&self) -> String {
        let mut out = render::render_catalog(&self.catalog, self.session.as_ref().map(|s| s.order()));
        out.push('\n');
        match &self.session {
            Some(session) => match OrderSummary::build(session, self.tip) {
                Ok(summary) => out.push_str(&render::render_summary(summary.as_ref())),
                Err(e) => {
                    tracing::error!(code = %e.code, error = %e, "Failed to build order summary");
                    out.push_str(&e.message);
                    out.push('\n');
                }
            },
            None => out.push_str(&render::render_summary(None)),
        }
        if let Some(notice) = &self.notice {
            out.push('\n');
            out.push_str("! ");
            out.push_str(notice);
            out.push('\n');
        }
        out
    }
}
