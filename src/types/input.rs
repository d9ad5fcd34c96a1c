//! Input modes: analyze a URL, an uploaded HTML document or uploaded text.

use std::fmt;

use super::Document;

/// How the content to analyze reaches the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputMode {
    /// The service fetches a URL itself
    Url,
    /// An HTML document is uploaded in the body
    Html,
    /// A plain text document is uploaded in the body
    Text,
}

impl InputMode {
    /// Path namespace: `url`, `html` or `text`
    pub fn namespace(&self) -> &'static str {
        match self {
            InputMode::Url => "url",
            InputMode::Html => "html",
            InputMode::Text => "text",
        }
    }

    /// Prefix of the operation name within the namespace
    pub fn prefix(&self) -> &'static str {
        match self {
            InputMode::Url => "URL",
            InputMode::Html => "HTML",
            InputMode::Text => "Text",
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// The content an AlchemyLanguage operation analyzes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// URL fetched and analyzed by the service
    Url(String),
    /// Uploaded HTML, with an optional companion URL sent as metadata
    Html {
        /// The HTML document
        document: Document,
        /// Companion URL
        url: Option<String>,
    },
    /// Uploaded plain text, with an optional companion URL sent as metadata
    Text {
        /// The text document
        document: Document,
        /// Companion URL
        url: Option<String>,
    },
}

impl Input {
    /// Analyze the page at `url`
    pub fn url(url: impl Into<String>) -> Self {
        Input::Url(url.into())
    }

    /// Analyze an HTML document
    pub fn html(document: impl Into<Document>) -> Self {
        Input::Html {
            document: document.into(),
            url: None,
        }
    }

    /// Analyze a plain text document
    pub fn text(document: impl Into<Document>) -> Self {
        Input::Text {
            document: document.into(),
            url: None,
        }
    }

    /// Attach a companion URL to an HTML or Text input.
    ///
    /// URL inputs are returned unchanged.
    pub fn with_url(self, companion: impl Into<String>) -> Self {
        match self {
            Input::Html { document, .. } => Input::Html {
                document,
                url: Some(companion.into()),
            },
            Input::Text { document, .. } => Input::Text {
                document,
                url: Some(companion.into()),
            },
            url @ Input::Url(_) => url,
        }
    }

    /// The input mode
    pub fn mode(&self) -> InputMode {
        match self {
            Input::Url(_) => InputMode::Url,
            Input::Html { .. } => InputMode::Html,
            Input::Text { .. } => InputMode::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes() {
        assert_eq!(Input::url("http://example.com").mode(), InputMode::Url);
        assert_eq!(Input::html("<p></p>").mode(), InputMode::Html);
        assert_eq!(Input::text("words").mode(), InputMode::Text);
    }

    #[test]
    fn test_with_url() {
        let input = Input::text("words").with_url("http://example.com");
        assert_eq!(
            input,
            Input::Text {
                document: Document::text("words"),
                url: Some("http://example.com".to_string()),
            }
        );

        let unchanged = Input::url("http://a.example").with_url("http://b.example");
        assert_eq!(unchanged, Input::url("http://a.example"));
    }

    #[test]
    fn test_namespaces() {
        assert_eq!(InputMode::Url.namespace(), "url");
        assert_eq!(InputMode::Html.prefix(), "HTML");
        assert_eq!(InputMode::Text.to_string(), "Text");
    }
}
