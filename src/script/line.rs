use crate::foundation::core::Rgb8;

/// A run of text drawn in one color.
///
/// Segments of a line are laid out left to right; each starts where the previous one's rendered
/// width ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    /// Text to draw.
    pub text: String,
    /// Fill color.
    pub color: Rgb8,
}

impl Segment {
    /// Build a segment.
    pub fn new(text: impl Into<String>, color: Rgb8) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

/// One row of terminal output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Line {
    /// Text drawn in the theme's default text color.
    Plain(String),
    /// Colored segments concatenated without spacing. An empty list is a blank row.
    Styled(Vec<Segment>),
}

impl Line {
    /// An empty row.
    pub fn blank() -> Self {
        Self::Styled(Vec::new())
    }

    /// A plain row.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(text.into())
    }

    /// A styled row from `(text, color)` pairs.
    pub fn styled<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = (S, Rgb8)>,
        S: Into<String>,
    {
        Self::Styled(
            segments
                .into_iter()
                .map(|(text, color)| Segment::new(text, color))
                .collect(),
        )
    }

    /// The row's characters with styling dropped.
    pub fn text(&self) -> String {
        match self {
            Self::Plain(s) => s.clone(),
            Self::Styled(segments) => segments.iter().map(|s| s.text.as_str()).collect(),
        }
    }

    /// `true` when the row draws nothing.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Plain(s) => s.is_empty(),
            Self::Styled(segments) => segments.iter().all(|s| s.text.is_empty()),
        }
    }
}
