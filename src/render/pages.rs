//! Server-rendered HTML for the question form and its result blocks.
//!
//! Templates are embedded at compile time and rendered with Tera, which
//! escapes every interpolated value since the template names end in `.html`.

use crate::{Result, analysis::Outcome};
use tera::{Context, Tera};

pub const PAGE_TITLE: &str = "Financial AI Assistant";
pub const NO_INTENT_MESSAGE: &str = "No clear intent detected. Please rephrase your message.";
pub const NO_ENTITIES_MESSAGE: &str = "No entities detected.";

const TPL_INDEX: &str = include_str!("templates/index.html");
const TPL_OUTCOME: &str = include_str!("templates/outcome.html");

pub struct Pages {
    tera: Tera,
}

impl Pages {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // outcome.html is included by index.html
        tera.add_raw_template("outcome.html", TPL_OUTCOME)?;
        tera.add_raw_template("index.html", TPL_INDEX)?;

        Ok(Self { tera })
    }

    /// Full page: header, form (pre-filled with `query`) and the outcome blocks.
    pub fn index(&self, query: Option<&str>, outcome: Option<&Outcome>) -> Result<String> {
        let mut context = base_context(outcome);
        context.insert("query", query.unwrap_or_default());
        Ok(self.tera.render("index.html", &context)?)
    }

    /// Page shown when the service could not be reached at all.
    pub fn unreachable(&self, query: &str, message: &str) -> Result<String> {
        let mut context = base_context(None);
        context.insert("query", query);
        context.insert("failure", message);
        Ok(self.tera.render("index.html", &context)?)
    }

    /// Just the result blocks for one outcome.
    pub fn outcome(&self, outcome: &Outcome) -> Result<String> {
        Ok(self.tera.render("outcome.html", &base_context(Some(outcome)))?)
    }
}

fn base_context(outcome: Option<&Outcome>) -> Context {
    let mut context = Context::new();
    context.insert("title", PAGE_TITLE);
    context.insert("no_intent_message", NO_INTENT_MESSAGE);
    context.insert("no_entities_message", NO_ENTITIES_MESSAGE);
    context.insert("outcome", &outcome);
    if let Some(Outcome::Success { intent, .. }) = outcome {
        context.insert("confidence", &intent.display_confidence());
    }
    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{DetectedIntent, EntityPresence, EntityRecord, EntitySection};

    fn pages() -> Pages {
        Pages::new().unwrap()
    }

    fn record(category: &str, text: &str, offset: u64, length: u64) -> EntityRecord {
        EntityRecord {
            category: category.to_string(),
            text: text.to_string(),
            offset,
            length,
        }
    }

    #[test]
    fn test_empty_page_has_form_and_no_results() {
        let html = pages().index(None, None).unwrap();
        assert!(html.contains(PAGE_TITLE));
        assert!(html.contains(r#"name="query""#));
        assert!(html.contains(r#"value="""#));
        assert!(!html.contains("Detected Intent"));
        assert!(!html.contains(NO_ENTITIES_MESSAGE));
    }

    #[test]
    fn test_empty_outcome_renders_no_blocks() {
        let html = pages().index(Some(""), Some(&Outcome::Empty)).unwrap();
        assert!(!html.contains("class=\"alert"));
        assert!(!html.contains("class=\"card"));
    }

    #[test]
    fn test_success_renders_intent_and_entities_in_order() {
        let outcome = Outcome::Success {
            intent: DetectedIntent {
                category: "GetExpenses".to_string(),
                confidence: 0.876,
            },
            entities: EntitySection::Found(vec![
                record("ExpenseCategory", "food", 23, 4),
                record("Month", "May", 31, 3),
            ]),
            entity_presence: EntityPresence::Present,
        };

        let html = pages().outcome(&outcome).unwrap();
        assert!(html.contains("<b>Intent:</b> GetExpenses"));
        assert!(html.contains("<b>Confidence:</b> 0.88"));
        assert!(html.contains("Extracted Entities"));
        assert!(html.contains("<b>Offset:</b> 23, <b>Length:</b> 4"));
        let food = html.find("food").unwrap();
        let may = html.find("May").unwrap();
        assert!(food < may);
    }

    #[test]
    fn test_no_intent_renders_warning() {
        let outcome = Outcome::NoIntent {
            entities: EntitySection::NoEntities,
            entity_presence: EntityPresence::Absent,
        };

        let html = pages().outcome(&outcome).unwrap();
        assert!(html.contains(NO_INTENT_MESSAGE));
        assert!(html.contains(r#"class="alert warning""#));
        assert!(html.contains(NO_ENTITIES_MESSAGE));
    }

    #[test]
    fn test_transport_error_shows_status_and_body() {
        let outcome = Outcome::TransportError {
            code: 401,
            body: "Access denied due to invalid subscription key.".to_string(),
        };

        let html = pages().outcome(&outcome).unwrap();
        assert!(html.contains("Error 401: Access denied due to invalid subscription key."));
        assert!(!html.contains(NO_ENTITIES_MESSAGE));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let pages = pages();
        let html = pages
            .index(Some(r#""><script>alert(1)</script>"#), None)
            .unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));

        let outcome = Outcome::NoIntent {
            entities: EntitySection::Found(vec![record("Note", "<b>bold</b>", 0, 11)]),
            entity_presence: EntityPresence::Present,
        };
        let html = pages.outcome(&outcome).unwrap();
        assert!(!html.contains("<b>bold</b>"));
        assert!(html.contains("&lt;b&gt;bold&lt;&#x2F;b&gt;"));
    }

    #[test]
    fn test_unreachable_page_shows_message() {
        let html = pages()
            .unreachable("balance?", "connection refused")
            .unwrap();
        assert!(html.contains("Error: connection refused"));
        assert!(html.contains(r#"value="balance?""#));
    }
}
