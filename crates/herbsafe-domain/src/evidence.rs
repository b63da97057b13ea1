//! Literature evidence records

/// Placeholder title when the upstream record has none
pub const NO_TITLE: &str = "No title found.";

/// Placeholder snippet when the upstream record has no abstract
pub const NO_ABSTRACT: &str = "No abstract available.";

/// Maximum snippet length in characters before the ellipsis marker
pub const SNIPPET_LIMIT: usize = 300;

/// Marker appended to truncated snippets
pub const ELLIPSIS: &str = "...";

/// Public article page for a literature identifier
pub const DEFAULT_ARTICLE_BASE_URL: &str = "https://pubmed.ncbi.nlm.nih.gov";

/// Title and abstract as extracted from an upstream record
///
/// Either field may be missing; placeholders are applied when the record
/// is turned into an [`EvidenceRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleSummary {
    /// Article title, if present
    pub title: Option<String>,
    /// First abstract section, if present
    pub abstract_text: Option<String>,
}

impl ArticleSummary {
    /// Create a summary from optional parts
    pub fn new(title: Option<String>, abstract_text: Option<String>) -> Self {
        Self {
            title,
            abstract_text,
        }
    }
}

/// A citation supporting a hepatotoxicity concern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvidenceRecord {
    /// Article title (or [`NO_TITLE`])
    pub title: String,
    /// Truncated abstract (or [`NO_ABSTRACT`])
    pub snippet: String,
    /// Canonical article URL
    pub url: String,
}

impl EvidenceRecord {
    /// Build a record from an article summary and its identifier
    pub fn from_article(id: &str, article: ArticleSummary, article_base_url: &str) -> Self {
        let title = article
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| NO_TITLE.to_string());

        let snippet = article
            .abstract_text
            .filter(|a| !a.is_empty())
            .map(|a| truncate_snippet(&a, SNIPPET_LIMIT))
            .unwrap_or_else(|| NO_ABSTRACT.to_string());

        Self {
            title,
            snippet,
            url: article_url(article_base_url, id),
        }
    }
}

/// Canonical article URL: `<base>/<id>/`
pub fn article_url(base_url: &str, id: &str) -> String {
    format!("{}/{}/", base_url.trim_end_matches('/'), id)
}

/// Cut `text` to `limit` characters, appending [`ELLIPSIS`] if anything was cut
pub fn truncate_snippet(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], ELLIPSIS),
        None => text.to_string(),
    }
}

/// Outcome of one evidence lookup
///
/// `Errored` keeps the failure cause observable for tests and logs; callers
/// that only care about presence use [`EvidenceOutcome::into_record`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvidenceOutcome {
    /// A record was found
    Found(EvidenceRecord),

    /// The index has nothing relevant
    NotFound,

    /// A transport or parsing failure occurred
    Errored(String),
}

impl EvidenceOutcome {
    /// Collapse to the outward-facing shape: errors become absence
    pub fn into_record(self) -> Option<EvidenceRecord> {
        match self {
            EvidenceOutcome::Found(record) => Some(record),
            EvidenceOutcome::NotFound | EvidenceOutcome::Errored(_) => None,
        }
    }
}
