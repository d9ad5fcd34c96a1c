//! The AlchemyLanguage operation catalogue.

use super::InputMode;

const ALL_MODES: &[InputMode] = &[InputMode::Url, InputMode::Html, InputMode::Text];
const URL_AND_HTML: &[InputMode] = &[InputMode::Url, InputMode::Html];
const URL_AND_TEXT: &[InputMode] = &[InputMode::Url, InputMode::Text];

/// One remote AlchemyLanguage capability.
///
/// Every operation is a POST to `/<namespace>/<prefix>Get<Name>`, for example
/// `/html/HTMLGetRankedKeywords`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlchemyOperation {
    /// Document authors
    Authors,
    /// Ranked concepts
    RankedConcepts,
    /// Ranked named entities
    RankedNamedEntities,
    /// Ranked keywords
    RankedKeywords,
    /// Document language
    Language,
    /// Microformat data
    MicroformatData,
    /// Publication date
    PubDate,
    /// Subject-action-object relations
    Relations,
    /// Document sentiment
    TextSentiment,
    /// Sentiment toward a target phrase
    TargetedSentiment,
    /// Ranked taxonomy categories
    RankedTaxonomy,
    /// Raw page text
    RawText,
    /// Cleaned page text
    Text,
    /// Page title
    Title,
    /// RSS/Atom feed links
    FeedLinks,
}

impl AlchemyOperation {
    /// Every operation
    pub const ALL: [AlchemyOperation; 15] = [
        AlchemyOperation::Authors,
        AlchemyOperation::RankedConcepts,
        AlchemyOperation::RankedNamedEntities,
        AlchemyOperation::RankedKeywords,
        AlchemyOperation::Language,
        AlchemyOperation::MicroformatData,
        AlchemyOperation::PubDate,
        AlchemyOperation::Relations,
        AlchemyOperation::TextSentiment,
        AlchemyOperation::TargetedSentiment,
        AlchemyOperation::RankedTaxonomy,
        AlchemyOperation::RawText,
        AlchemyOperation::Text,
        AlchemyOperation::Title,
        AlchemyOperation::FeedLinks,
    ];

    /// Suffix shared by all input modes
    pub fn suffix(&self) -> &'static str {
        match self {
            AlchemyOperation::Authors => "GetAuthors",
            AlchemyOperation::RankedConcepts => "GetRankedConcepts",
            AlchemyOperation::RankedNamedEntities => "GetRankedNamedEntities",
            AlchemyOperation::RankedKeywords => "GetRankedKeywords",
            AlchemyOperation::Language => "GetLanguage",
            AlchemyOperation::MicroformatData => "GetMicroformatData",
            AlchemyOperation::PubDate => "GetPubDate",
            AlchemyOperation::Relations => "GetRelations",
            AlchemyOperation::TextSentiment => "GetTextSentiment",
            AlchemyOperation::TargetedSentiment => "GetTargetedSentiment",
            AlchemyOperation::RankedTaxonomy => "GetRankedTaxonomy",
            AlchemyOperation::RawText => "GetRawText",
            AlchemyOperation::Text => "GetText",
            AlchemyOperation::Title => "GetTitle",
            AlchemyOperation::FeedLinks => "GetFeedLinks",
        }
    }

    /// Name used in logs, spans and metric keys
    pub fn name(&self) -> &'static str {
        match self {
            AlchemyOperation::Authors => "authors",
            AlchemyOperation::RankedConcepts => "ranked_concepts",
            AlchemyOperation::RankedNamedEntities => "ranked_named_entities",
            AlchemyOperation::RankedKeywords => "ranked_keywords",
            AlchemyOperation::Language => "language",
            AlchemyOperation::MicroformatData => "microformat_data",
            AlchemyOperation::PubDate => "publication_date",
            AlchemyOperation::Relations => "relations",
            AlchemyOperation::TextSentiment => "text_sentiment",
            AlchemyOperation::TargetedSentiment => "targeted_sentiment",
            AlchemyOperation::RankedTaxonomy => "ranked_taxonomy",
            AlchemyOperation::RawText => "raw_text",
            AlchemyOperation::Text => "text",
            AlchemyOperation::Title => "title",
            AlchemyOperation::FeedLinks => "feed_links",
        }
    }

    /// Input modes the service accepts for this operation
    pub fn supported_modes(&self) -> &'static [InputMode] {
        match self {
            AlchemyOperation::RankedConcepts
            | AlchemyOperation::RankedNamedEntities
            | AlchemyOperation::RankedKeywords
            | AlchemyOperation::Relations
            | AlchemyOperation::TextSentiment
            | AlchemyOperation::TargetedSentiment
            | AlchemyOperation::RankedTaxonomy => ALL_MODES,
            AlchemyOperation::Language => URL_AND_TEXT,
            AlchemyOperation::Authors
            | AlchemyOperation::MicroformatData
            | AlchemyOperation::PubDate
            | AlchemyOperation::RawText
            | AlchemyOperation::Text
            | AlchemyOperation::Title
            | AlchemyOperation::FeedLinks => URL_AND_HTML,
        }
    }

    /// Whether the operation accepts a mode
    pub fn supports(&self, mode: InputMode) -> bool {
        self.supported_modes().contains(&mode)
    }

    /// Request path for a mode, e.g. `/text/TextGetRankedKeywords`
    pub fn path(&self, mode: InputMode) -> String {
        format!("/{}/{}{}", mode.namespace(), mode.prefix(), self.suffix())
    }

    /// Parameters always sent with this operation
    pub fn fixed_params(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            AlchemyOperation::RankedConcepts => &[("linkedData", "1")],
            _ => &[],
        }
    }

    /// Whether the service rejects document-mode requests without a `url`
    /// parameter. For these a single space is sent when the caller gives none.
    pub fn requires_companion_url(&self) -> bool {
        matches!(
            self,
            AlchemyOperation::MicroformatData | AlchemyOperation::FeedLinks
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(InputMode::Url, "/url/URLGetRankedKeywords")]
    #[test_case(InputMode::Html, "/html/HTMLGetRankedKeywords")]
    #[test_case(InputMode::Text, "/text/TextGetRankedKeywords")]
    fn test_path_per_mode(mode: InputMode, expected: &str) {
        assert_eq!(AlchemyOperation::RankedKeywords.path(mode), expected);
    }

    #[test]
    fn test_suffix_is_shared_across_modes() {
        for op in AlchemyOperation::ALL {
            for mode in op.supported_modes() {
                let path = op.path(*mode);
                assert!(path.starts_with(&format!("/{}/", mode.namespace())));
                assert!(path.ends_with(op.suffix()));
            }
        }
    }

    #[test]
    fn test_supported_modes() {
        assert!(AlchemyOperation::Language.supports(InputMode::Text));
        assert!(!AlchemyOperation::Language.supports(InputMode::Html));
        assert!(!AlchemyOperation::Title.supports(InputMode::Text));
        assert!(AlchemyOperation::RankedTaxonomy.supports(InputMode::Html));
        assert!(AlchemyOperation::ALL.iter().all(|op| op.supports(InputMode::Url)));
    }

    #[test]
    fn test_fixed_params() {
        assert_eq!(
            AlchemyOperation::RankedConcepts.fixed_params(),
            &[("linkedData", "1")]
        );
        assert!(AlchemyOperation::RankedKeywords.fixed_params().is_empty());
    }

    #[test]
    fn test_companion_url_operations() {
        let required: Vec<_> = AlchemyOperation::ALL
            .iter()
            .filter(|op| op.requires_companion_url())
            .collect();
        assert_eq!(
            required,
            vec![&AlchemyOperation::MicroformatData, &AlchemyOperation::FeedLinks]
        );
    }
}
