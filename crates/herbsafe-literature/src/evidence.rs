//! Evidence retrieval service
//!
//! Looks up the best-ranked article tying an ingredient to liver injury.
//! A lookup is two round-trips (search, then fetch). When the search comes
//! back empty the ingredient's aliases are tried once each, in order.
//! Failures never reach the caller of [`EvidenceService::find_evidence`]:
//! they are logged and reported as "no evidence".

use crate::SynonymTable;
use herbsafe_domain::evidence::DEFAULT_ARTICLE_BASE_URL;
use herbsafe_domain::traits::LiteratureIndex;
use herbsafe_domain::{EvidenceOutcome, EvidenceRecord};
use tracing::{debug, info, warn};

/// Only the single best-ranked record is requested
const TOP_RESULTS: usize = 1;

/// Liver-injury terms combined with every ingredient query
pub const LIVER_INJURY_TERMS: &str =
    r#"(hepatotoxicity OR "liver injury" OR "drug-induced liver injury")"#;

/// Build the boolean query for an ingredient
///
/// The name is quoted as an exact phrase; embedded double quotes are
/// stripped so they cannot break the phrase.
pub fn hepatotoxicity_query(ingredient: &str) -> String {
    let name: String = ingredient.trim().chars().filter(|c| *c != '"').collect();
    format!("\"{}\" AND {}", name.trim(), LIVER_INJURY_TERMS)
}

enum Attempt {
    NoHits,
    NoArticle,
    Found(EvidenceRecord),
}

/// Evidence lookups against a literature index
pub struct EvidenceService<I> {
    index: I,
    synonyms: SynonymTable,
    article_base_url: String,
}

impl<I> EvidenceService<I>
where
    I: LiteratureIndex,
    I::Error: std::fmt::Display,
{
    /// Create a service with the built-in synonym table
    pub fn new(index: I) -> Self {
        Self {
            index,
            synonyms: SynonymTable::with_defaults(),
            article_base_url: DEFAULT_ARTICLE_BASE_URL.to_string(),
        }
    }

    /// Replace the synonym table
    pub fn with_synonyms(mut self, synonyms: SynonymTable) -> Self {
        self.synonyms = synonyms;
        self
    }

    /// Set the base used to build article URLs
    pub fn with_article_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.article_base_url = base_url.into();
        self
    }

    /// The synonym table in use
    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    /// Find evidence for an ingredient
    ///
    /// Returns `None` when nothing was found or any step failed; failures
    /// are logged at `warn`. Never panics or errors.
    pub fn find_evidence(&self, ingredient: &str) -> Option<EvidenceRecord> {
        match self.lookup(ingredient) {
            EvidenceOutcome::Errored(reason) => {
                warn!(ingredient, %reason, "Evidence lookup failed, reporting no evidence");
                None
            }
            outcome => outcome.into_record(),
        }
    }

    /// Look up evidence, keeping the failure cause observable
    pub fn lookup(&self, ingredient: &str) -> EvidenceOutcome {
        let name = ingredient.trim();
        if name.is_empty() {
            return EvidenceOutcome::NotFound;
        }

        match self.attempt(name) {
            Ok(Attempt::NoHits) => {}
            Ok(Attempt::NoArticle) => return EvidenceOutcome::NotFound,
            Ok(Attempt::Found(record)) => return EvidenceOutcome::Found(record),
            Err(reason) => return EvidenceOutcome::Errored(reason),
        }

        for alias in self.synonyms.aliases_for(name) {
            info!(ingredient = name, alias = %alias, "No hits, retrying with synonym");
            match self.attempt(alias) {
                Ok(Attempt::NoHits) => continue,
                Ok(Attempt::NoArticle) => return EvidenceOutcome::NotFound,
                Ok(Attempt::Found(record)) => return EvidenceOutcome::Found(record),
                Err(reason) => return EvidenceOutcome::Errored(reason),
            }
        }

        debug!(ingredient = name, "No evidence found");
        EvidenceOutcome::NotFound
    }

    /// One search + fetch sequence for a single name
    fn attempt(&self, name: &str) -> Result<Attempt, String> {
        let term = hepatotoxicity_query(name);
        debug!(%term, "Searching literature index");

        let ids = self
            .index
            .search(&term, TOP_RESULTS)
            .map_err(|e| format!("search for '{}' failed: {}", name, e))?;

        let Some(id) = ids.into_iter().next() else {
            return Ok(Attempt::NoHits);
        };

        let article = self
            .index
            .fetch_article(&id)
            .map_err(|e| format!("fetch of record {} failed: {}", id, e))?;

        Ok(match article {
            Some(article) => Attempt::Found(EvidenceRecord::from_article(
                &id,
                article,
                &self.article_base_url,
            )),
            None => Attempt::NoArticle,
        })
    }
}
