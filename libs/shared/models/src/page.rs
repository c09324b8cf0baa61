use serde::Serialize;

/// Page-level view model. Pages that need a signed-in user degrade to a
/// login placeholder instead of failing the request.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", content = "page", rename_all = "snake_case")]
pub enum Page<T> {
    Ready(T),
    LoginRequired { message: String },
}

impl<T> Page<T> {
    pub fn login_required(message: &str) -> Self {
        Page::LoginRequired {
            message: message.to_string(),
        }
    }
}

/// One independently loaded block of a page (a dashboard panel, a list).
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum Section<T> {
    Ready(T),
    Unavailable,
}

impl<T> Section<T> {
    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>, what: &str) -> Self {
        match result {
            Ok(data) => Section::Ready(data),
            Err(e) => {
                tracing::warn!("Failed to load {}: {}", what, e);
                Section::Unavailable
            }
        }
    }

    pub fn as_ready(&self) -> Option<&T> {
        match self {
            Section::Ready(data) => Some(data),
            Section::Unavailable => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Section<U> {
        match self {
            Section::Ready(data) => Section::Ready(f(data)),
            Section::Unavailable => Section::Unavailable,
        }
    }
}
