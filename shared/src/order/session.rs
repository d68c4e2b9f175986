//! Client session: table, time and the order being built

use super::state::OrderState;
use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Table / time values longer than this are rejected
///
/// Both fields are free text; the limit only guards against pasted blobs.
pub const MAX_FIELD_LEN: usize = 1024;

/// One client's session, held in memory only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSession {
    table: String,
    time: String,
    order: OrderState,
}

impl ClientSession {
    /// Open a session once both required fields are provided
    ///
    /// Blank fields fail with `RequiredField`; the `fields` detail lists
    /// every missing one.
    pub fn new(table: impl Into<String>, time: impl Into<String>) -> AppResult<Self> {
        let table = table.into().trim().to_string();
        let time = time.into().trim().to_string();

        let missing: Vec<&str> = [("table", &table), ("time", &time)]
            .into_iter()
            .filter(|(_, v)| v.is_empty())
            .map(|(name, _)| name)
            .collect();
        if !missing.is_empty() {
            return Err(
                AppError::required_field(format!("{} must not be empty", missing.join(" and ")))
                    .with_detail("fields", missing),
            );
        }

        for (field, value) in [("table", &table), ("time", &time)] {
            if value.chars().count() > MAX_FIELD_LEN {
                return Err(AppError::validation(format!(
                    "{field} is too long ({} chars, max {MAX_FIELD_LEN})",
                    value.chars().count()
                ))
                .with_detail("field", field));
            }
        }

        tracing::info!(table = %table, time = %time, "Client session opened");
        Ok(Self {
            table,
            time,
            order: OrderState::new(),
        })
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn order(&self) -> &OrderState {
        &self.order
    }

    pub fn order_mut(&mut self) -> &mut OrderState {
        &mut self.order
    }
}
