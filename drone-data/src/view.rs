//! Explicit view-state record for the display client.
//!
//! All interaction state (sort selection, expanded row, draft question,
//! last answer, in-flight flag) lives in one immutable [`ViewState`] value;
//! every user action goes through the single [`reduce`] function. Updates
//! are sequential user-driven events, so there is no coordination to do.

use crate::sort::{SortField, SortOrder};

/// Snapshot of everything the display client shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub sort_field: SortField,
    pub sort_order: SortOrder,
    /// Identifier of the row with its detail panel open, if any.
    pub expanded_row: Option<String>,
    /// The question currently typed into the input field.
    pub question: String,
    /// The last answer received; empty until the first response.
    pub answer: String,
    /// True while a submitted question is waiting on the relay.
    pub loading: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            sort_field: SortField::ImageId,
            sort_order: SortOrder::Asc,
            expanded_row: None,
            question: String::new(),
            answer: String::new(),
            loading: false,
        }
    }
}

/// One user-driven event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    EditQuestion(String),
    SetSortField(SortField),
    SetSortOrder(SortOrder),
    /// Opens the detail panel for the given row, or closes it when the same
    /// row is toggled again.
    ToggleRow(String),
    /// The question was submitted to the relay.
    Submit,
    AnswerReceived(String),
    RequestFailed,
}

/// Applies one action to the state, returning the next state.
///
/// `Submit` clears the input field and any previously displayed answer, so
/// no stale answer is visible while the request is in flight.
pub fn reduce(state: &ViewState, action: ViewAction) -> ViewState {
    let mut next = state.clone();
    match action {
        ViewAction::EditQuestion(text) => next.question = text,
        ViewAction::SetSortField(field) => next.sort_field = field,
        ViewAction::SetSortOrder(order) => next.sort_order = order,
        ViewAction::ToggleRow(image_id) => {
            next.expanded_row = if state.expanded_row.as_deref() == Some(image_id.as_str()) {
                None
            } else {
                Some(image_id)
            };
        }
        ViewAction::Submit => {
            next.question.clear();
            next.answer.clear();
            next.loading = true;
        }
        ViewAction::AnswerReceived(answer) => {
            next.answer = answer;
            next.loading = false;
        }
        ViewAction::RequestFailed => next.loading = false,
    }
    next
}
