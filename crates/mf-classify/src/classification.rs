//! Outcome of classifying a single stream's format.

/// Result of running a format through a rule table.
///
/// The distinction between [`Missing`](Classification::Missing) and
/// [`Unidentified`](Classification::Unidentified) mirrors what the prober
/// reports: no stream at all versus a stream whose format it could not name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// No stream of this kind exists.
    Missing,
    /// A stream exists but the prober reported an empty format.
    Unidentified,
    /// A rule matched and produced a canonical label.
    Known(String),
    /// No rule matched; carries the raw format for pass-through.
    Unrecognized(String),
}

impl Classification {
    /// Collapse into the label stored on a normalized record.
    ///
    /// `Missing` becomes `None`, `Unidentified` becomes an empty string, and
    /// unrecognized formats pass through unchanged.
    pub fn into_label(self) -> Option<String> {
        match self {
            Classification::Missing => None,
            Classification::Unidentified => Some(String::new()),
            Classification::Known(label) | Classification::Unrecognized(label) => Some(label),
        }
    }

    /// Whether no rule matched a present, non-empty format.
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, Classification::Unrecognized(_))
    }
}
