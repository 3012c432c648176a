//! Navigation targets for row actions.

use std::fmt::Display;

/// Row actions that navigate rather than mutate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    View,
    Edit,
}

/// Path prefixes for row navigation; the row id is appended verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowRoutes {
    view: String,
    edit: String,
}

impl RowRoutes {
    pub fn new(view: impl Into<String>, edit: impl Into<String>) -> Self {
        Self {
            view: view.into().trim_end_matches('/').to_string(),
            edit: edit.into().trim_end_matches('/').to_string(),
        }
    }

    /// Path for `action` on the row `id`, e.g. `/student-view/42`.
    pub fn path(&self, action: RowAction, id: &impl Display) -> String {
        let prefix = match action {
            RowAction::View => &self.view,
            RowAction::Edit => &self.edit,
        };
        format!("{prefix}/{id}")
    }
}
