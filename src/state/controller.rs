//! Search/result controller (pure).
//!
//! The controller owns all client state: the active query, paging, sorting,
//! the moderator session, the rendered result view, the registration form and
//! the current dialog. User actions are methods that return the requests to
//! send ([`Outgoing`]); replies come back through [`Controller::on_completion`],
//! which may in turn return follow-up requests. The controller never performs
//! I/O itself, so every flow is testable by feeding replies by hand.
//!
//! # Request ordering
//!
//! Every request gets a monotonic [`RequestTicket`]. Only the reply to the most
//! recently issued search is rendered; older search replies are discarded.
//! A "refresh count, then search" sequence issues the count first and only
//! issues the search from the count's completion, so the page is always
//! clamped against a fresh total.

use crate::api::reply::{self, ActionReply, LoginReply, RegisterReply};
use crate::api::{params, ApiRequest, Endpoint, Params};
use crate::model::ApiError;
use crate::state::dialog::Dialog;
use crate::state::query::{QuerySpec, SortChange, SortKey, SortState};
use crate::state::registration::{confirmation_text, RegistrationForm};
use crate::state::results::{self, ResultView, MALFORMED_MESSAGE};
use crate::state::{PageState, SessionState};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Inline login error for a wrong password.
pub const LOGIN_DENIED_MESSAGE: &str = "Access denied. Wrong password?";

/// Monotonic request sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    /// Raw sequence number.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// What a request was sent for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Purpose {
    /// A page of results for the query with this title.
    Search {
        /// Title rendered above the results.
        title: String,
    },
    /// Total count for the active query, followed by the search itself.
    RefreshCount,
    /// Total number of modules in the registry (header).
    ModuleCount,
    /// Moderator login.
    Login,
    /// Moderator logout.
    Logout,
    /// Module registration.
    Register,
    /// Approve a module.
    Approve,
    /// Remove a module.
    Remove,
}

/// Tag attached to a dispatched request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pending {
    /// Sequence number.
    pub ticket: RequestTicket,
    /// Why it was sent.
    pub purpose: Purpose,
}

/// A request the shell must send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outgoing {
    /// Tag to hand back with the reply.
    pub pending: Pending,
    /// The request.
    pub request: ApiRequest,
}

/// Coordinates query state, result rendering and session state.
#[derive(Debug, Clone)]
pub struct Controller {
    page: PageState,
    sort: SortState,
    last_search: Option<QuerySpec>,
    session: SessionState,
    view: ResultView,
    module_count: Option<u64>,
    registration: RegistrationForm,
    dialog: Option<Dialog>,
    next_ticket: u64,
    latest_search: Option<RequestTicket>,
    latest_refresh: Option<RequestTicket>,
}

impl Controller {
    /// Create a controller with the given page size.
    pub fn new(page_size: usize) -> Self {
        Self {
            page: PageState::new(page_size),
            sort: SortState::default(),
            last_search: None,
            session: SessionState::new(),
            view: ResultView::Idle,
            module_count: None,
            registration: RegistrationForm::new(),
            dialog: None,
            next_ticket: 0,
            latest_search: None,
            latest_refresh: None,
        }
    }

    // ===== Accessors =====

    /// Paging state.
    pub fn page(&self) -> &PageState {
        &self.page
    }

    /// Sorting state.
    pub fn sort(&self) -> SortState {
        self.sort
    }

    /// The active query, if any.
    pub fn last_search(&self) -> Option<&QuerySpec> {
        self.last_search.as_ref()
    }

    /// Moderator session.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Whether moderator-only controls are visible.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Result region state.
    pub fn view(&self) -> &ResultView {
        &self.view
    }

    /// Mutable result view (selection and expansion only).
    pub fn view_mut(&mut self) -> &mut ResultView {
        &mut self.view
    }

    /// Whether a search (or its count refresh) is pending.
    pub fn is_loading(&self) -> bool {
        matches!(self.view, ResultView::Loading { .. })
    }

    /// Total module count for the header, once fetched.
    pub fn module_count(&self) -> Option<u64> {
        self.module_count
    }

    /// Registration form.
    pub fn registration(&self) -> &RegistrationForm {
        &self.registration
    }

    /// Mutable registration form (field edits).
    pub fn registration_mut(&mut self) -> &mut RegistrationForm {
        &mut self.registration
    }

    /// Dialog currently shown.
    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    /// Close the dialog.
    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }

    fn issue(&mut self, purpose: Purpose, request: ApiRequest) -> Outgoing {
        self.next_ticket += 1;
        let ticket = RequestTicket(self.next_ticket);
        debug!(ticket = ticket.get(), ?purpose, endpoint = %request.endpoint, "Issuing request");
        Outgoing {
            pending: Pending { ticket, purpose },
            request,
        }
    }

    // ===== Queries =====

    /// Initial requests: the header count and the latest additions.
    pub fn startup(&mut self) -> Vec<Outgoing> {
        let mut out = vec![self.count_modules()];
        self.sort = SortState::default();
        out.extend(self.list_all());
        out
    }

    /// Fetch the total module count for the header.
    pub fn count_modules(&mut self) -> Outgoing {
        self.issue(
            Purpose::ModuleCount,
            ApiRequest::get(Endpoint::Count, Params::new()),
        )
    }

    /// Replace the active query. Resets to page 0 when the sort key changes.
    pub fn set_query(&mut self, spec: QuerySpec) {
        let previous_key = self.last_search.as_ref().and_then(QuerySpec::sort_key);
        if previous_key != spec.sort_key() {
            self.page.reset();
        }
        self.last_search = Some(spec);
    }

    fn start_query(&mut self, spec: QuerySpec) -> Vec<Outgoing> {
        self.page.reset();
        self.set_query(spec);
        self.refresh_then_run()
    }

    /// Full-text search.
    pub fn search(&mut self, text: &str) -> Vec<Outgoing> {
        let spec = QuerySpec::search(text, self.sort);
        self.start_query(spec)
    }

    /// List all approved modules.
    pub fn list_all(&mut self) -> Vec<Outgoing> {
        let spec = QuerySpec::list_all(self.sort);
        self.start_query(spec)
    }

    /// List modules awaiting moderation. No-op when anonymous.
    pub fn list_unapproved(&mut self) -> Vec<Outgoing> {
        let Some(token) = self.session.token() else {
            return Vec::new();
        };
        let spec = QuerySpec::unapproved(token);
        self.start_query(spec)
    }

    /// Select a sort key and re-run the active query.
    ///
    /// The active key flips direction and keeps the page; another key resets
    /// to page 0.
    pub fn sort_by(&mut self, key: SortKey) -> Vec<Outgoing> {
        if self.sort.select(key) == SortChange::KeyChanged {
            self.page.reset();
        }
        let sort = self.sort;
        let Some(spec) = self.last_search.as_mut() else {
            return Vec::new();
        };
        spec.apply_sort(sort);
        self.refresh_then_run()
    }

    /// Move by `delta` pages (clamped) and fetch that page.
    pub fn change_page(&mut self, delta: i64) -> Vec<Outgoing> {
        let before = self.page.current();
        self.page.change(delta);
        if self.page.current() == before {
            return Vec::new();
        }
        self.run()
    }

    /// Jump to a 1-based page number (clamped) and fetch that page.
    pub fn goto_page(&mut self, one_based: i64) -> Vec<Outgoing> {
        let before = self.page.current();
        self.page.goto_one_based(one_based);
        if self.page.current() == before {
            return Vec::new();
        }
        self.run()
    }

    /// Dispatch the active query for the current page.
    pub fn run(&mut self) -> Vec<Outgoing> {
        let Some(spec) = self.last_search.clone() else {
            return Vec::new();
        };
        let request = spec.to_request(&self.page);
        let outgoing = self.issue(
            Purpose::Search {
                title: spec.title.clone(),
            },
            request,
        );
        self.latest_search = Some(outgoing.pending.ticket);
        self.view = ResultView::Loading { title: spec.title };
        vec![outgoing]
    }

    /// Refresh the count for the active query; the search follows on completion.
    ///
    /// Any search already in flight is superseded.
    pub fn refresh_then_run(&mut self) -> Vec<Outgoing> {
        let Some(spec) = self.last_search.as_ref() else {
            return Vec::new();
        };
        let title = spec.title.clone();
        let request = ApiRequest::get(Endpoint::Count, spec.count_params(&self.page));
        let outgoing = self.issue(Purpose::RefreshCount, request);
        self.latest_refresh = Some(outgoing.pending.ticket);
        self.latest_search = None;
        self.view = ResultView::Loading { title };
        vec![outgoing]
    }

    // ===== Session =====

    /// Submit the moderator password.
    pub fn login(&mut self, password: &str) -> Vec<Outgoing> {
        if self.session.is_submitting() || self.session.is_authenticated() {
            return Vec::new();
        }
        self.session.begin_submit();
        vec![self.issue(
            Purpose::Login,
            ApiRequest::post(Endpoint::Login, params([("password", password.to_string())])),
        )]
    }

    /// End the moderator session.
    pub fn logout(&mut self) -> Vec<Outgoing> {
        if self.session.is_submitting() {
            return Vec::new();
        }
        let Some(token) = self.session.token() else {
            return Vec::new();
        };
        let request = ApiRequest::post(
            Endpoint::Logout,
            params([("sessionID", token.as_str().to_string())]),
        );
        self.session.begin_submit();
        vec![self.issue(Purpose::Logout, request)]
    }

    // ===== Moderation =====

    /// Approve the selected module. No-op unless authenticated and the
    /// selected module is unapproved.
    pub fn approve_selected(&mut self) -> Vec<Outgoing> {
        let Some(token) = self.session.token() else {
            return Vec::new();
        };
        let Some(row) = self.view.list().and_then(|list| list.selected_row()) else {
            return Vec::new();
        };
        if row.module.approved {
            return Vec::new();
        }
        let request = ApiRequest::post(
            Endpoint::Approve,
            params([
                ("sessionID", token.as_str().to_string()),
                ("_id", row.module.id.as_str().to_string()),
            ]),
        );
        vec![self.issue(Purpose::Approve, request)]
    }

    /// Remove the selected module. No-op unless authenticated.
    pub fn remove_selected(&mut self) -> Vec<Outgoing> {
        let Some(token) = self.session.token() else {
            return Vec::new();
        };
        let Some(row) = self.view.list().and_then(|list| list.selected_row()) else {
            return Vec::new();
        };
        let request = ApiRequest::post(
            Endpoint::Remove,
            params([
                ("sessionID", token.as_str().to_string()),
                ("name", row.module.name.clone()),
            ]),
        );
        vec![self.issue(Purpose::Remove, request)]
    }

    // ===== Registration =====

    /// Submit the registration form. No-op while a submission is in flight.
    pub fn register(&mut self) -> Vec<Outgoing> {
        if !self.registration.begin_submit() {
            return Vec::new();
        }
        let request = ApiRequest::post(Endpoint::Register, self.registration.params());
        vec![self.issue(Purpose::Register, request)]
    }

    // ===== Replies =====

    /// Apply a reply. Returns follow-up requests.
    pub fn on_completion(
        &mut self,
        pending: Pending,
        result: Result<Value, ApiError>,
    ) -> Vec<Outgoing> {
        if let Err(err) = &result {
            warn!(ticket = pending.ticket.get(), purpose = ?pending.purpose, error = %err, "Request failed");
        }

        match pending.purpose {
            Purpose::Search { title } => {
                if self.latest_search != Some(pending.ticket) {
                    debug!(ticket = pending.ticket.get(), "Discarding stale search reply");
                    return Vec::new();
                }
                self.view = results::render_result(&result, &title);
                Vec::new()
            }
            Purpose::RefreshCount => {
                if self.latest_refresh != Some(pending.ticket) {
                    debug!(ticket = pending.ticket.get(), "Discarding superseded count reply");
                    return Vec::new();
                }
                self.latest_refresh = None;
                let total = result
                    .as_ref()
                    .ok()
                    .and_then(reply::count)
                    .or(self.module_count)
                    .unwrap_or(0);
                self.page.set_total(total);
                self.run()
            }
            Purpose::ModuleCount => {
                let count = result.as_ref().ok().and_then(reply::count).unwrap_or(0);
                self.module_count = Some(count);
                Vec::new()
            }
            Purpose::Login => self.on_login(result),
            Purpose::Logout => {
                self.session.clear();
                self.dialog = Some(Dialog::info("Successfully logged out."));
                self.list_all()
            }
            Purpose::Register => self.on_register(result),
            Purpose::Approve => match ActionReply::from_result(&result) {
                ActionReply::Done => {
                    self.dialog = Some(Dialog::info("The module was approved!"));
                    self.refresh_then_run()
                }
                ActionReply::Failed(messages) => {
                    self.dialog = Some(Dialog::error(format!(
                        "Could not approve: {}",
                        messages.join(", ")
                    )));
                    Vec::new()
                }
            },
            Purpose::Remove => match ActionReply::from_result(&result) {
                ActionReply::Done => {
                    self.dialog = Some(Dialog::info("The module was removed!"));
                    self.refresh_then_run()
                }
                ActionReply::Failed(messages) => {
                    self.dialog = Some(Dialog::error(format!(
                        "Could not remove: {}",
                        messages.join(", ")
                    )));
                    Vec::new()
                }
            },
        }
    }

    fn on_login(&mut self, result: Result<Value, ApiError>) -> Vec<Outgoing> {
        let reply = match result {
            Ok(value) => LoginReply::parse(&value),
            Err(err) => {
                self.session.reject(err.to_string());
                return Vec::new();
            }
        };
        match reply {
            LoginReply::Granted(token) => {
                self.session.authenticate(token);
                self.list_unapproved()
            }
            LoginReply::Denied => {
                info!("Login denied");
                self.session.reject(LOGIN_DENIED_MESSAGE);
                Vec::new()
            }
            LoginReply::Error(messages) => {
                self.session.reject(messages.join(", "));
                Vec::new()
            }
            LoginReply::Malformed => {
                self.session.reject(MALFORMED_MESSAGE);
                Vec::new()
            }
        }
    }

    fn on_register(&mut self, result: Result<Value, ApiError>) -> Vec<Outgoing> {
        self.registration.finish_submit();
        let reply = match result {
            Ok(value) => RegisterReply::parse(&value),
            Err(err) => {
                self.dialog = Some(Dialog::error_list(&err.messages()));
                return Vec::new();
            }
        };
        match reply {
            RegisterReply::Submitted { name, mail_sent } => {
                info!(module = %name, mail_sent, "Module submitted for moderation");
                self.registration.reset();
                self.dialog = Some(Dialog::info(confirmation_text(&name, mail_sent)));
                self.refresh_then_run()
            }
            RegisterReply::Rejected(messages) => {
                self.dialog = Some(Dialog::error_list(&messages));
                Vec::new()
            }
            RegisterReply::Malformed => {
                self.dialog = Some(Dialog::error(MALFORMED_MESSAGE));
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
