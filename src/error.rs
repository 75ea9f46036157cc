/// An error that can occur while building, persisting, or loading an
/// automaton.
pub struct Error {
    kind: ErrorKind,
    reason: Option<String>,
}

#[derive(Debug)]
enum ErrorKind {
    /// A pattern passed to [`Builder::insert`][crate::Builder::insert] was
    /// empty.
    EmptyPattern,

    /// A persisted automaton failed to load.
    Corrupt,

    /// An IO error occurred while loading or saving an automaton, or while
    /// reading a pattern file.
    Io(std::io::Error),
}

impl Error {
    /// Constructs a new empty-pattern error.
    pub(crate) fn empty_pattern() -> Self {
        Self {
            kind: ErrorKind::EmptyPattern,
            reason: None,
        }
    }

    /// Constructs a new corrupt-automaton error with the given reason.
    pub(crate) fn corrupt(reason: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Corrupt,
            reason: Some(reason.into()),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self {
            kind: ErrorKind::Io(err),
            reason: None,
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Error")
            .field("kind", &self.kind)
            .field("reason", &self.reason)
            .finish()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match &self.kind {
            ErrorKind::EmptyPattern => "pattern must not be empty",
            ErrorKind::Corrupt => "corrupt automaton",
            ErrorKind::Io(_) => "io error",
        };
        match &self.reason {
            Some(reason) => write!(f, "{msg}: {reason}"),
            None => write!(f, "{msg}"),
        }
    }
}
