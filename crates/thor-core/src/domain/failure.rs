//! Invocation failures reported by a [`Target`](crate::ports::Target).
//!
//! A target never hands back a bare message string. It reports a tagged
//! [`FailureKind`] plus the frames the failure travelled through, so the
//! translator can tell a bad call from a bug inside the member without
//! parsing human-readable text.

use std::fmt;
use std::panic::Location;

use serde::{Deserialize, Serialize};

/// Number of positional arguments a member accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),
    /// At least this many arguments.
    AtLeast(usize),
    /// Between `min` and `max` arguments (both inclusive).
    Range(usize, usize),
}

impl Arity {
    pub fn accepts(&self, given: usize) -> bool {
        match *self {
            Arity::Exact(n) => given == n,
            Arity::AtLeast(n) => given >= n,
            Arity::Range(min, max) => (min..=max).contains(&given),
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Arity::Exact(n) => write!(f, "{n}"),
            Arity::AtLeast(n) => write!(f, "{n}+"),
            Arity::Range(min, max) => write!(f, "{min}..{max}"),
        }
    }
}

/// One source location a failure passed through.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Frame {
    pub file: String,
    pub line: u32,
}

impl Frame {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// The location of whoever called the current `#[track_caller]` chain.
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }
}

impl From<&Location<'_>> for Frame {
    fn from(location: &Location<'_>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// What went wrong, as a tag instead of a message pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// The member was called with the wrong number of arguments.
    Arity { expected: Arity, given: usize },

    /// A member lookup failed. `receiver` is the string form of the object
    /// the lookup was performed on.
    MemberMissing { member: String, receiver: String },

    /// Anything else the member raised.
    Other,
}

/// A failure raised while invoking a member on a target.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct InvokeFailure {
    kind: FailureKind,
    message: String,
    backtrace: Vec<Frame>,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl InvokeFailure {
    fn new(kind: FailureKind, message: String) -> Self {
        Self {
            kind,
            message,
            backtrace: Vec::new(),
            source: None,
        }
    }

    pub fn arity(expected: Arity, given: usize) -> Self {
        Self::new(
            FailureKind::Arity { expected, given },
            format!("wrong number of arguments (given {given}, expected {expected})"),
        )
    }

    pub fn member_missing(member: impl Into<String>, receiver: impl Into<String>) -> Self {
        let member = member.into();
        let receiver = receiver.into();
        let message = format!("undefined member `{member}' for {receiver}");
        Self::new(FailureKind::MemberMissing { member, receiver }, message)
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Other, message.into())
    }

    /// Wraps a lower-level error; its display becomes the message.
    pub fn from_error(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        let mut failure = Self::other(err.to_string());
        failure.source = Some(Box::new(err));
        failure
    }

    /// Records the caller's location as the innermost frame.
    ///
    /// Member bodies call this when they raise, which is what marks the
    /// failure as coming from inside the member rather than the call site.
    #[track_caller]
    pub fn raised_here(mut self) -> Self {
        self.backtrace.push(Frame::caller());
        self
    }

    pub fn with_frame(mut self, frame: Frame) -> Self {
        self.backtrace.push(frame);
        self
    }

    pub fn with_backtrace(mut self, frames: Vec<Frame>) -> Self {
        self.backtrace = frames;
        self
    }

    /// Same failure kind and frames, new message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> &FailureKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn backtrace(&self) -> &[Frame] {
        &self.backtrace
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::exact_match(Arity::Exact(1), 1, true)]
    #[case::exact_short(Arity::Exact(1), 0, false)]
    #[case::exact_long(Arity::Exact(1), 2, false)]
    #[case::at_least(Arity::AtLeast(1), 5, true)]
    #[case::at_least_short(Arity::AtLeast(2), 1, false)]
    #[case::range_low(Arity::Range(1, 3), 1, true)]
    #[case::range_high(Arity::Range(1, 3), 3, true)]
    #[case::range_over(Arity::Range(1, 3), 4, false)]
    fn arity_accepts(#[case] arity: Arity, #[case] given: usize, #[case] expected: bool) {
        assert_eq!(arity.accepts(given), expected);
    }

    #[test]
    fn arity_message_names_both_counts() {
        let failure = InvokeFailure::arity(Arity::Exact(2), 1);
        assert_eq!(
            failure.to_string(),
            "wrong number of arguments (given 1, expected 2)"
        );
        assert!(failure.backtrace().is_empty());
    }

    #[test]
    fn raised_here_records_this_file() {
        let failure = InvokeFailure::other("boom").raised_here();
        assert_eq!(failure.backtrace().len(), 1);
        assert_eq!(failure.backtrace()[0].file, file!());
    }

    #[test]
    fn with_message_keeps_kind_and_frames() {
        let failure = InvokeFailure::arity(Arity::Exact(0), 2)
            .with_frame(Frame::new("app/commands.rs", 3))
            .with_message("rewritten");
        assert_eq!(failure.message(), "rewritten");
        assert!(matches!(failure.kind(), FailureKind::Arity { given: 2, .. }));
        assert_eq!(failure.backtrace().len(), 1);
    }

    #[test]
    fn from_error_exposes_source() {
        let io = std::io::Error::other("disk on fire");
        let failure = InvokeFailure::from_error(io);
        assert_eq!(failure.message(), "disk on fire");
        assert!(std::error::Error::source(&failure).is_some());
    }
}
