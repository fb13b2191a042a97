//! Presentation components. Each one is a plain function of borrowed props
//! that reports user intent through a callback and keeps no state.

pub mod button;
pub mod loading;
pub mod search;
pub mod table;
pub mod theme;

pub use button::{button, ButtonProps, ButtonStyle};
pub use loading::loading;
pub use search::{search, SearchEvent, SearchProps, SEARCH_INPUT_ID};
pub use table::{table, RowResponse, TableEvent, TableProps};
pub use theme::AppTheme;

/// Everything the view can ask the container to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    QueryTextChanged(String),
    QuerySubmitted,
    HitDismissed(String),
    MoreRequested,
    OpenLink(String),
    ToggleTheme,
}

impl From<SearchEvent> for Msg {
    fn from(event: SearchEvent) -> Self {
        match event {
            SearchEvent::Changed(text) => Msg::QueryTextChanged(text),
            SearchEvent::Submitted => Msg::QuerySubmitted,
        }
    }
}

impl From<TableEvent> for Msg {
    fn from(event: TableEvent) -> Self {
        match event {
            TableEvent::Dismiss(object_id) => Msg::HitDismissed(object_id),
            TableEvent::OpenLink(url) => Msg::OpenLink(url),
        }
    }
}
