mod matches;
mod table;

pub use matches::render_match_cards;
pub use table::render_table_rows;

/// Escape the five HTML-significant characters with named references.
///
/// Applied exactly once per render pass, on render output only — never on
/// stored state, so escaping a value twice double-escapes it.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Markup builder that forces API-derived text through [`escape_html`] at the
/// type boundary. Renderers push trusted structure with [`SafeHtml::raw`] and
/// untrusted content with [`SafeHtml::text`]; there is no way to interpolate
/// unescaped input by accident.
#[derive(Debug, Default)]
pub struct SafeHtml {
    buf: String,
}

impl SafeHtml {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append trusted markup verbatim. Only for literals owned by the renderer.
    pub fn raw(&mut self, markup: &str) -> &mut Self {
        self.buf.push_str(markup);
        self
    }

    /// Append untrusted text, escaped.
    pub fn text(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(&escape_html(text));
        self
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}
