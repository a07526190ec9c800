//! A plain model of what the inserted History View branch renders, used to
//! check the markup's behavior without a browser. The date formatter stays
//! an opaque collaborator supplied by the caller, mirroring
//! `formatDateByCountry` in the patched component.

/// One history record as the UI receives it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub created_at: String,
    pub message: String,
}

/// The three mutually exclusive views of the customer modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    CustomerDetails,
    History,
    Services,
}

/// Resolves the broadened three-way conditional: details only when both
/// toggles are off, then history, then services.
pub fn active_view(show_services: bool, show_history: bool) -> View {
    if !show_services && !show_history {
        View::CustomerDetails
    } else if show_history {
        View::History
    } else {
        View::Services
    }
}

/// What the history branch renders for a given collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HistoryRender {
    /// One `(date_cell, message_cell)` row per entry, in input order.
    Table(Vec<(String, String)>),
    /// Shown when the collection is empty.
    Fallback(&'static str),
}

pub const NO_HISTORY_MESSAGE: &str = "No history found for this customer.";

pub fn render_history<F>(entries: &[HistoryEntry], country: &str, format_date: F) -> HistoryRender
where
    F: Fn(&str, &str) -> String,
{
    if entries.is_empty() {
        return HistoryRender::Fallback(NO_HISTORY_MESSAGE);
    }
    let rows = entries
        .iter()
        .map(|e| (format_date(&e.created_at, country), e.message.clone()))
        .collect();
    HistoryRender::Table(rows)
}
