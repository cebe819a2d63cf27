//! Result rendering (pure).
//!
//! [`render`] maps a search reply and its title to one of four mutually
//! exclusive outcomes: error, empty, results, malformed. It holds no state;
//! the same reply always renders the same view.

use crate::api::reply::{self, Status};
use crate::model::{format_timestamp, ApiError, Module};
use serde_json::Value;

/// Text shown when a reply matches no known shape.
pub const MALFORMED_MESSAGE: &str = "Something unexpected happened!";

/// What the result region shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    /// Nothing requested yet.
    Idle,
    /// A search is in flight.
    Loading {
        /// Title of the pending query.
        title: String,
    },
    /// The registry reported an error, or the request failed.
    Error {
        /// Message list joined with `", "`.
        message: String,
    },
    /// The query matched nothing.
    Empty {
        /// Query title.
        title: String,
    },
    /// One page of modules.
    Results(ResultList),
    /// The reply had neither an error status nor a module list.
    Malformed,
}

impl ResultView {
    /// Whether pager and sort controls are shown.
    pub fn shows_controls(&self) -> bool {
        matches!(self, ResultView::Results(_))
    }

    /// The result list, if showing one.
    pub fn list(&self) -> Option<&ResultList> {
        match self {
            ResultView::Results(list) => Some(list),
            _ => None,
        }
    }

    /// Mutable result list, if showing one.
    pub fn list_mut(&mut self) -> Option<&mut ResultList> {
        match self {
            ResultView::Results(list) => Some(list),
            _ => None,
        }
    }
}

/// Render a search reply.
pub fn render(reply: &Value, title: &str) -> ResultView {
    match reply::status(reply) {
        Status::Error(messages) => return error_view(&messages),
        Status::Denied => {
            return ResultView::Error {
                message: ApiError::Denied.to_string(),
            }
        }
        Status::Ok | Status::Other => {}
    }

    let Some(modules) = reply.get("modules") else {
        return ResultView::Malformed;
    };
    let Ok(modules) = serde_json::from_value::<Vec<Module>>(modules.clone()) else {
        return ResultView::Malformed;
    };

    if modules.is_empty() {
        return ResultView::Empty {
            title: title.to_string(),
        };
    }

    ResultView::Results(ResultList {
        title: title.to_string(),
        rows: modules.into_iter().map(ModuleRow::new).collect(),
        selected: 0,
    })
}

/// Render a transport result: failures become the error view.
pub fn render_result(result: &Result<Value, ApiError>, title: &str) -> ResultView {
    match result {
        Ok(reply) => render(reply, title),
        Err(ApiError::Malformed { .. }) => ResultView::Malformed,
        Err(err) => error_view(&err.messages()),
    }
}

fn error_view(messages: &[String]) -> ResultView {
    let message = if messages.is_empty() {
        "The registry reported an error.".to_string()
    } else {
        messages.join(", ")
    };
    ResultView::Error { message }
}

/// One page of rendered modules with a selection cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultList {
    /// Query title.
    pub title: String,
    /// Rows in server order.
    pub rows: Vec<ModuleRow>,
    selected: usize,
}

impl ResultList {
    /// Index of the selected row.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The selected row.
    pub fn selected_row(&self) -> Option<&ModuleRow> {
        self.rows.get(self.selected)
    }

    /// Move selection down, stopping at the last row.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.rows.len() {
            self.selected += 1;
        }
    }

    /// Move selection up, stopping at the first row.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Expand or collapse the selected row.
    pub fn toggle_selected(&mut self) {
        if let Some(row) = self.rows.get_mut(self.selected) {
            row.expanded = !row.expanded;
        }
    }
}

/// A control offered on a row to authenticated moderators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// Approve (only for unapproved modules).
    Approve,
    /// Remove (always).
    Remove,
}

/// A key/value line in a row's detail panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLine {
    /// Field label.
    pub key: &'static str,
    /// Field value.
    pub value: String,
    /// Whether the value is a URL.
    pub is_link: bool,
}

impl DetailLine {
    fn text(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
            is_link: false,
        }
    }

    fn link(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
            is_link: true,
        }
    }
}

/// A module with its lazily shown detail panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleRow {
    /// The module record.
    pub module: Module,
    /// Formatted registration time.
    pub registered: String,
    /// Whether the detail panel is open.
    pub expanded: bool,
}

impl ModuleRow {
    /// Wrap a module, collapsed.
    pub fn new(module: Module) -> Self {
        let registered = format_timestamp(module.time_registered);
        Self {
            module,
            registered,
            expanded: false,
        }
    }

    /// Detail lines in display order.
    pub fn details(&self) -> Vec<DetailLine> {
        let m = &self.module;
        let mut lines = vec![
            DetailLine::text("Name", m.name.clone()),
            DetailLine::text("Description", m.description.clone().unwrap_or_default()),
            DetailLine::text("Author", m.author.clone().unwrap_or_default()),
            DetailLine::text("Licenses", m.licenses.join(", ")),
        ];

        if let Some(repo) = m.repo_type {
            if let Some(name) = repo.display_name() {
                lines.push(DetailLine::text("Repository", name));
            }
            if repo == crate::model::RepoType::MavenOther {
                lines.push(DetailLine::text(
                    "Prefix",
                    m.download_url.clone().unwrap_or_default(),
                ));
            }
        }

        if let Some(homepage) = m.homepage.as_ref().filter(|h| !h.is_empty()) {
            lines.push(DetailLine::link("Homepage", homepage.clone()));
        }
        if let Some(developers) = &m.developers {
            lines.push(DetailLine::text("Developers", sorted_join(developers)));
        }
        if let Some(keywords) = &m.keywords {
            lines.push(DetailLine::text("Keywords", sorted_join(keywords)));
        }

        lines
    }

    /// Moderation controls for this row. Empty unless `authenticated`.
    pub fn actions(&self, authenticated: bool) -> Vec<RowAction> {
        if !authenticated {
            return Vec::new();
        }
        if self.module.approved {
            vec![RowAction::Remove]
        } else {
            vec![RowAction::Approve, RowAction::Remove]
        }
    }
}

fn sorted_join(values: &[String]) -> String {
    let mut sorted = values.to_vec();
    sorted.sort();
    sorted.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn module_json(id: &str, name: &str, approved: bool) -> Value {
        json!({
            "_id": id,
            "name": name,
            "description": "A module",
            "author": "someone",
            "licenses": ["Apache 2", "MIT"],
            "timeRegistered": 0,
            "timeApproved": -1,
            "approved": approved
        })
    }

    #[test]
    fn empty_module_list_renders_empty_not_error() {
        let view = render(&json!({"status": "ok", "modules": []}), "All modules");
        assert_eq!(
            view,
            ResultView::Empty {
                title: "All modules".to_string()
            }
        );
    }

    #[test]
    fn error_messages_are_joined() {
        let view = render(
            &json!({"status": "error", "messages": ["a", "b"]}),
            "Search results",
        );
        assert_eq!(
            view,
            ResultView::Error {
                message: "a, b".to_string()
            }
        );
    }

    #[test]
    fn reply_without_modules_is_malformed() {
        assert_eq!(render(&json!({"status": "ok"}), "t"), ResultView::Malformed);
        assert_eq!(render(&json!([]), "t"), ResultView::Malformed);
    }

    #[test]
    fn undecodable_module_is_malformed() {
        let view = render(&json!({"status": "ok", "modules": [{"name": "no id"}]}), "t");
        assert_eq!(view, ResultView::Malformed);
    }

    #[test]
    fn denied_renders_error() {
        let view = render(&json!({"status": "denied"}), "All unapproved modules");
        assert_eq!(
            view,
            ResultView::Error {
                message: "Access denied.".to_string()
            }
        );
    }

    #[test]
    fn success_keeps_server_order_and_selects_first() {
        let reply = json!({
            "status": "ok",
            "modules": [module_json("1", "b-mod", true), module_json("2", "a-mod", true)]
        });
        let view = render(&reply, "Search results");
        let list = view.list().expect("results");
        assert_eq!(list.title, "Search results");
        assert_eq!(list.rows[0].module.name, "b-mod");
        assert_eq!(list.rows[1].module.name, "a-mod");
        assert_eq!(list.selected(), 0);
        assert!(view.shows_controls());
    }

    #[test]
    fn null_optional_fields_still_render_results() {
        let reply = json!({
            "status": "ok",
            "modules": [{
                "_id": "1",
                "name": "bare-mod",
                "timeRegistered": 0,
                "licenses": null,
                "approved": null
            }]
        });
        let view = render(&reply, "All modules");
        let list = view.list().expect("results");
        assert_eq!(list.rows[0].module.name, "bare-mod");
        assert!(list.rows[0].module.licenses.is_empty());
    }

    #[test]
    fn network_failure_renders_error() {
        let result = Err(ApiError::Network("connection refused".to_string()));
        assert_eq!(
            render_result(&result, "t"),
            ResultView::Error {
                message: "Network failure: connection refused".to_string()
            }
        );
    }

    #[test]
    fn actions_only_for_authenticated() {
        let unapproved: Module = serde_json::from_value(module_json("1", "m", false)).unwrap();
        let row = ModuleRow::new(unapproved);
        assert!(row.actions(false).is_empty());
        assert_eq!(row.actions(true), vec![RowAction::Approve, RowAction::Remove]);

        let approved: Module = serde_json::from_value(module_json("2", "m", true)).unwrap();
        assert_eq!(ModuleRow::new(approved).actions(true), vec![RowAction::Remove]);
    }

    #[test]
    fn details_follow_display_order() {
        let module: Module = serde_json::from_value(json!({
            "_id": "1",
            "name": "io.vertx~mod-web~1.0",
            "description": "Web server",
            "author": "tim",
            "licenses": ["Apache 2"],
            "repoType": "mavenOther",
            "downloadUrl": "http://repo.example/maven",
            "homepage": "http://vertx.io",
            "developers": ["zoe", "adam"],
            "keywords": ["web", "http"],
            "timeRegistered": 0
        }))
        .unwrap();

        let text: Vec<String> = ModuleRow::new(module)
            .details()
            .iter()
            .map(|d| format!("{}: {}", d.key, d.value))
            .collect();

        insta::assert_snapshot!(text.join("\n"), @r"
        Name: io.vertx~mod-web~1.0
        Description: Web server
        Author: tim
        Licenses: Apache 2
        Repository: Other Maven Repository
        Prefix: http://repo.example/maven
        Homepage: http://vertx.io
        Developers: adam, zoe
        Keywords: http, web
        ");
    }

    #[test]
    fn central_repo_has_no_prefix_line() {
        let module: Module = serde_json::from_value(json!({
            "_id": "1", "name": "m", "repoType": "mavenCentral", "timeRegistered": 0
        }))
        .unwrap();
        let keys: Vec<&str> = ModuleRow::new(module).details().iter().map(|d| d.key).collect();
        assert_eq!(
            keys,
            vec!["Name", "Description", "Author", "Licenses", "Repository"]
        );
    }

    #[test]
    fn selection_is_clamped_and_toggle_expands() {
        let reply = json!({
            "status": "ok",
            "modules": [module_json("1", "a", true), module_json("2", "b", true)]
        });
        let mut view = render(&reply, "t");
        let list = view.list_mut().unwrap();

        list.select_prev();
        assert_eq!(list.selected(), 0);
        list.select_next();
        list.select_next();
        assert_eq!(list.selected(), 1);

        list.toggle_selected();
        assert!(list.rows[1].expanded);
        list.toggle_selected();
        assert!(!list.rows[1].expanded);
    }
}
