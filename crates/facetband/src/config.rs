use serde::{Deserialize, Serialize};

///
/// WidgetConfig
///
/// Per-widget settings the host persists between requests. `ranges` is the
/// raw multi-line `min|max` blob for the checkbox-list widget and is parsed
/// anew on every configuration save; the text-input widget ignores it.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Currency symbol (or other unit marker) prepended to displayed
    /// values, e.g. `"$"`. May be empty.
    pub prefix: String,

    /// Whether list items carry their result counts.
    pub show_counts: bool,

    /// Raw band configuration, one `min|max` range per line.
    pub ranges: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            show_counts: true,
            ranges: String::new(),
        }
    }
}
