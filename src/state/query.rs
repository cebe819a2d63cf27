//! Query specifications and sort order (pure).

use crate::api::{ApiRequest, Endpoint, HttpMethod, Params};
use crate::model::SessionToken;
use crate::state::PageState;

/// Field the registry sorts results by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Module name.
    Name,
    /// Registration time.
    TimeRegistered,
}

impl SortKey {
    /// Value of the `by` request parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::TimeRegistered => "timeRegistered",
        }
    }

    /// Parse a `by` parameter value.
    pub fn from_param(raw: &str) -> Option<Self> {
        match raw {
            "name" => Some(SortKey::Name),
            "timeRegistered" => Some(SortKey::TimeRegistered),
            _ => None,
        }
    }

    /// Direction applied when this key is first selected.
    ///
    /// Names read A→Z; dates show the newest first.
    pub fn default_desc(self) -> bool {
        match self {
            SortKey::Name => false,
            SortKey::TimeRegistered => true,
        }
    }

    /// Short label for the sort controls.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::TimeRegistered => "Date",
        }
    }
}

/// What selecting a sort key did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortChange {
    /// Same key selected again: direction flipped.
    Flipped,
    /// A different key selected: its default direction applies.
    KeyChanged,
}

/// Active sort key and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    key: SortKey,
    desc: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: SortKey::TimeRegistered,
            desc: true,
        }
    }
}

impl SortState {
    /// Active key.
    pub fn key(&self) -> SortKey {
        self.key
    }

    /// Whether sorting is descending.
    pub fn desc(&self) -> bool {
        self.desc
    }

    /// Value of the `desc` request parameter (`"1"` or `"0"`).
    pub fn desc_param(&self) -> &'static str {
        if self.desc {
            "1"
        } else {
            "0"
        }
    }

    /// Select `key`: flips direction when already active, otherwise switches
    /// to `key` with its default direction.
    pub fn select(&mut self, key: SortKey) -> SortChange {
        if self.key == key {
            self.desc = !self.desc;
            SortChange::Flipped
        } else {
            self.key = key;
            self.desc = key.default_desc();
            SortChange::KeyChanged
        }
    }
}

/// The active search: which endpoint, how, under what title, with which parameters.
///
/// `limit` and `skip` are never stored here; [`QuerySpec::to_request`] derives
/// them from the page state at dispatch time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    /// Endpoint to query.
    pub endpoint: Endpoint,
    /// HTTP method.
    pub method: HttpMethod,
    /// Heading shown above the results.
    pub title: String,
    /// Query parameters other than pagination.
    pub params: Params,
}

impl QuerySpec {
    /// Full-text search.
    pub fn search(text: &str, sort: SortState) -> Self {
        let mut spec = Self {
            endpoint: Endpoint::Search,
            method: HttpMethod::Post,
            title: "Search results".to_string(),
            params: Params::new(),
        };
        spec.params.insert("query".to_string(), text.to_string());
        spec.apply_sort(sort);
        spec
    }

    /// All approved modules.
    pub fn list_all(sort: SortState) -> Self {
        let mut spec = Self {
            endpoint: Endpoint::List,
            method: HttpMethod::Get,
            title: "All modules".to_string(),
            params: Params::new(),
        };
        spec.apply_sort(sort);
        spec
    }

    /// Modules awaiting moderation.
    pub fn unapproved(token: &SessionToken) -> Self {
        let mut spec = Self {
            endpoint: Endpoint::Unapproved,
            method: HttpMethod::Post,
            title: "All unapproved modules".to_string(),
            params: Params::new(),
        };
        spec.params
            .insert("sessionID".to_string(), token.as_str().to_string());
        spec
    }

    /// Write `by`/`desc` into the parameters. The unapproved listing is unsorted.
    pub fn apply_sort(&mut self, sort: SortState) {
        if self.endpoint == Endpoint::Unapproved {
            return;
        }
        self.params
            .insert("by".to_string(), sort.key().as_param().to_string());
        self.params
            .insert("desc".to_string(), sort.desc_param().to_string());
    }

    /// Sort key carried in the parameters, if any.
    pub fn sort_key(&self) -> Option<SortKey> {
        self.params.get("by").and_then(|by| SortKey::from_param(by))
    }

    /// Build the request for the given page, appending `limit` and `skip`.
    pub fn to_request(&self, page: &PageState) -> ApiRequest {
        let mut params = self.params.clone();
        params.insert("limit".to_string(), page.page_size().to_string());
        params.insert("skip".to_string(), page.skip().to_string());
        ApiRequest {
            endpoint: self.endpoint,
            method: self.method,
            params,
        }
    }

    /// Parameters for the `/count` request matching this query.
    ///
    /// Session and offset are dropped; `unapproved` selects which set is counted.
    pub fn count_params(&self, page: &PageState) -> Params {
        let mut params = self.params.clone();
        params.remove("sessionID");
        params.remove("skip");
        params.insert("limit".to_string(), page.page_size().to_string());
        let unapproved = if self.endpoint == Endpoint::Unapproved {
            "1"
        } else {
            "0"
        };
        params.insert("unapproved".to_string(), unapproved.to_string());
        params
    }
}
