use super::kind::ErrorKind;
use std::fmt;
use std::sync::Arc;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Error with kind, context lines and source
#[derive(Debug, Clone)]
pub struct Error {
    pub(super) inner: Arc<Inner>,
}

#[derive(Debug)]
pub(super) struct Inner {
    pub(super) kind: ErrorKind,
    /// Innermost context first
    pub(super) contexts: Vec<String>,
    pub(super) source: Option<BoxedSource>,
    #[cfg(feature = "full-backtrace")]
    pub(super) backtrace: backtrace::Backtrace,
}

impl Error {
    fn build(kind: ErrorKind, source: Option<BoxedSource>) -> Self {
        Self {
            inner: Arc::new(Inner {
                kind,
                contexts: Vec::new(),
                source,
                #[cfg(feature = "full-backtrace")]
                backtrace: backtrace::Backtrace::new(),
            }),
        }
    }

    /// Error of `kind` without a source
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self::build(kind, None)
    }

    /// Error of `kind` caused by `source`
    #[must_use]
    pub fn with_source<E>(kind: ErrorKind, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::build(kind, Some(Box::new(source)))
    }

    /// Push a context line describing what was being done
    ///
    /// A shared error is wrapped instead, so other holders keep their view.
    #[must_use]
    pub fn context<C: fmt::Display>(self, context: C) -> Self {
        match Arc::try_unwrap(self.inner) {
            Ok(mut inner) => {
                inner.contexts.push(context.to_string());
                Self {
                    inner: Arc::new(inner),
                }
            }
            Err(shared) => {
                let kind = shared.kind.clone();
                let mut wrapped = Self::build(kind, Some(Box::new(Self { inner: shared })));
                if let Some(inner) = Arc::get_mut(&mut wrapped.inner) {
                    inner.contexts.push(context.to_string());
                }
                wrapped
            }
        }
    }

    /// Category of the error
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }

    /// Outermost context line
    #[must_use]
    pub fn get_context(&self) -> Option<&str> {
        self.inner.contexts.last().map(String::as_str)
    }

    /// Every context line, outermost first
    pub fn contexts(&self) -> impl Iterator<Item = &str> {
        self.inner.contexts.iter().rev().map(String::as_str)
    }

    /// Backtrace captured at creation
    #[cfg(feature = "full-backtrace")]
    #[must_use]
    pub fn backtrace(&self) -> &backtrace::Backtrace {
        &self.inner.backtrace
    }

    /// Configuration error
    #[must_use]
    pub fn configuration() -> Self {
        Self::new(ErrorKind::Configuration)
    }

    /// Malformed word list
    #[must_use]
    pub fn word_list() -> Self {
        Self::new(ErrorKind::WordList)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(err.kind().into(), err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(ErrorKind::Serialization, err)
    }
}
