/// Outcome of binding a component to its page element(s).
///
/// Components never fail loudly when markup is missing; they report it and
/// let the caller decide whether that matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attachment<T> {
    Attached(T),
    TargetNotFound(&'static str),
}

impl<T> Attachment<T> {
    pub fn from_option(value: Option<T>, selector: &'static str) -> Self {
        match value {
            Some(v) => Attachment::Attached(v),
            None => Attachment::TargetNotFound(selector),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Attachment<U> {
        match self {
            Attachment::Attached(v) => Attachment::Attached(f(v)),
            Attachment::TargetNotFound(s) => Attachment::TargetNotFound(s),
        }
    }

    /// Chain another lookup that only runs when this one succeeded.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Attachment<U>) -> Attachment<U> {
        match self {
            Attachment::Attached(v) => f(v),
            Attachment::TargetNotFound(s) => Attachment::TargetNotFound(s),
        }
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Attachment::Attached(v) => Some(v),
            Attachment::TargetNotFound(_) => None,
        }
    }

    /// Treat absence as an error.
    pub fn required(self) -> anyhow::Result<T> {
        match self {
            Attachment::Attached(v) => Ok(v),
            Attachment::TargetNotFound(s) => Err(anyhow::anyhow!("missing {}", s)),
        }
    }

    pub fn missing_selector(&self) -> Option<&'static str> {
        match self {
            Attachment::Attached(_) => None,
            Attachment::TargetNotFound(s) => Some(s),
        }
    }
}
