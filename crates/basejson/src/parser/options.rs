/// Nesting limit used by [`ParserOptions::default`].
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 128;

/// Configuration options for the parser.
///
/// # Examples
///
/// ```rust
/// use basejson::{ParserOptions, parse_with_options};
///
/// let options = ParserOptions {
///     strict_commas: true,
///     ..Default::default()
/// };
/// assert!(parse_with_options("[1,,2]", options).is_err());
/// assert!(parse_with_options("[1,2]", options).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Whether objects and arrays must separate members with exactly one
    /// comma.
    ///
    /// When `false`, commas are optional separators: leading, trailing and
    /// repeated commas are skipped, and members may follow one another with
    /// no comma at all.
    ///
    /// ```json
    /// [1,,2,]
    /// ```
    ///
    /// ```json
    /// {"a": 1 "b": 2}
    /// ```
    ///
    /// When `true`, both examples above are rejected with an
    /// unexpected-character error.
    ///
    /// # Default
    ///
    /// `false`
    pub strict_commas: bool,

    /// How many objects and arrays may be open at once.
    ///
    /// Opening one more composite than this fails with
    /// [`SyntaxError::NestingTooDeep`](crate::SyntaxError::NestingTooDeep).
    /// `None` removes the limit; deeply nested input then recurses without
    /// bound.
    ///
    /// # Default
    ///
    /// `Some(DEFAULT_MAX_NESTING_DEPTH)`
    pub max_nesting_depth: Option<usize>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            strict_commas: false,
            max_nesting_depth: Some(DEFAULT_MAX_NESTING_DEPTH),
        }
    }
}
