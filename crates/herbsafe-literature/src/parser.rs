//! Parse Entrez responses
//!
//! esearch is requested as JSON; efetch only speaks XML for PubMed, so the
//! article is pulled out with a streaming reader rather than a full tree.

use crate::LiteratureError;
use herbsafe_domain::ArticleSummary;
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Deserialize;

#[derive(Deserialize)]
struct SearchEnvelope {
    esearchresult: SearchResult,
}

#[derive(Deserialize)]
struct SearchResult {
    #[serde(default)]
    idlist: Vec<String>,
    #[serde(rename = "ERROR")]
    error: Option<String>,
}

/// Parse an esearch JSON body into record identifiers, best-ranked first
pub fn parse_search_response(body: &str) -> Result<Vec<String>, LiteratureError> {
    let envelope: SearchEnvelope = serde_json::from_str(body)?;

    if let Some(error) = envelope.esearchresult.error {
        return Err(LiteratureError::Upstream(error));
    }

    Ok(envelope
        .esearchresult
        .idlist
        .into_iter()
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .collect())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Abstract,
}

impl Field {
    fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"ArticleTitle" => Some(Field::Title),
            b"AbstractText" => Some(Field::Abstract),
            _ => None,
        }
    }
}

struct Capture {
    field: Field,
    depth: usize,
    text: String,
}

#[derive(Default)]
struct ArticleBuilder {
    title: Option<String>,
    abstract_text: Option<String>,
}

impl ArticleBuilder {
    fn has(&self, field: Field) -> bool {
        match field {
            Field::Title => self.title.is_some(),
            Field::Abstract => self.abstract_text.is_some(),
        }
    }

    // Titles are trimmed; abstracts are kept exactly as sent
    fn set(&mut self, field: Field, text: String) {
        match field {
            Field::Title => self.title = Some(text.trim().to_string()),
            Field::Abstract => self.abstract_text = Some(text),
        }
    }

    fn build(self) -> ArticleSummary {
        ArticleSummary::new(self.title, self.abstract_text)
    }
}

fn malformed(reader: &Reader<&[u8]>, e: impl std::fmt::Display) -> LiteratureError {
    LiteratureError::MalformedResponse(format!(
        "XML error at position {}: {}",
        reader.buffer_position(),
        e
    ))
}

/// Extract the first article from an efetch XML document
///
/// Returns `Ok(None)` when the document holds no `PubmedArticle`. Only the
/// first `ArticleTitle` and first `AbstractText` inside that article are
/// read; inline markup within them is flattened to its text.
pub fn parse_article_xml(xml: &str) -> Result<Option<ArticleSummary>, LiteratureError> {
    let mut reader = Reader::from_str(xml);

    let mut depth = 0usize;
    let mut article_depth: Option<usize> = None;
    let mut builder = ArticleBuilder::default();
    let mut capture: Option<Capture> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                depth += 1;
                let name = e.local_name();
                match article_depth {
                    None if name.as_ref() == b"PubmedArticle" => article_depth = Some(depth),
                    Some(_) if capture.is_none() => {
                        if let Some(field) = Field::from_tag(name.as_ref()) {
                            if !builder.has(field) {
                                capture = Some(Capture {
                                    field,
                                    depth,
                                    text: String::new(),
                                });
                            }
                        }
                    }
                    _ => {}
                }
            }
            Ok(Event::Empty(e)) => {
                let name = e.local_name();
                match article_depth {
                    // A self-closed article has nothing to offer but still counts
                    None if name.as_ref() == b"PubmedArticle" => {
                        return Ok(Some(ArticleSummary::default()));
                    }
                    Some(_) if capture.is_none() => {
                        if let Some(field) = Field::from_tag(name.as_ref()) {
                            if !builder.has(field) {
                                builder.set(field, String::new());
                            }
                        }
                    }
                    _ => {}
                }
            }
            Ok(Event::Text(t)) => {
                if let Some(capture) = capture.as_mut() {
                    let text = t.unescape().map_err(|e| malformed(&reader, e))?;
                    capture.text.push_str(&text);
                }
            }
            Ok(Event::CData(c)) => {
                if let Some(capture) = capture.as_mut() {
                    capture.text.push_str(&String::from_utf8_lossy(&c));
                }
            }
            Ok(Event::End(_)) => {
                if capture.as_ref().is_some_and(|c| c.depth == depth) {
                    if let Some(done) = capture.take() {
                        builder.set(done.field, done.text);
                    }
                }
                if article_depth == Some(depth) {
                    return Ok(Some(builder.build()));
                }
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Eof) => {
                if depth != 0 || article_depth.is_some() {
                    return Err(malformed(&reader, "unexpected end of document"));
                }
                return Ok(None);
            }
            Ok(_) => {}
            Err(e) => return Err(malformed(&reader, e)),
        }
    }
}
