use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

/// One parsed feed entry.
///
/// Fields hold the raw character data accumulated under the corresponding
/// `<item>` child tags, concatenated across tokenizer chunks and never
/// trimmed or validated. An item with no recognized children parses to an
/// article with every field empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub link: String,
    /// Feed-native publication date string, e.g.
    /// `"Mon, 02 Jan 2006 15:04:05 GMT"`. Normalization into a timestamp is
    /// the presenter's concern, not the parser's.
    pub pub_date: String,
    pub description: String,
    pub source: String,
}

/// Errors produced while parsing a feed document.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The XML tokenizer rejected the document (malformed or truncated XML,
    /// bad entity reference, invalid encoding).
    #[error("XML parse error: {0}")]
    Xml(String),
}

/// Child tags of `<item>` whose character data we accumulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Link,
    PubDate,
    Description,
    Source,
}

impl Field {
    fn from_tag(name: &[u8]) -> Option<Self> {
        match name {
            b"title" => Some(Field::Title),
            b"link" => Some(Field::Link),
            b"pubDate" => Some(Field::PubDate),
            b"description" => Some(Field::Description),
            b"source" => Some(Field::Source),
            _ => None,
        }
    }

    /// Appends `text` to this field of `article`. Appending (not assigning)
    /// tolerates tokenizers that split one element's character run across
    /// several events.
    fn append_to(self, article: &mut Article, text: &str) {
        let slot = match self {
            Field::Title => &mut article.title,
            Field::Link => &mut article.link,
            Field::PubDate => &mut article.pub_date,
            Field::Description => &mut article.description,
            Field::Source => &mut article.source,
        };
        slot.push_str(text);
    }
}

/// Parses a feed document into its articles, in document order.
///
/// The tokenizer walks the document once; a new `<item>` start appends an
/// empty [`Article`] to the accumulator, and character data under a tracked
/// child tag is appended to the corresponding field of the most recently
/// appended article. Character data outside any `<item>` span (there is no
/// accumulated article yet) is discarded, as is data under untracked tags.
///
/// The result is all-or-nothing: the first tokenizer error discards any
/// articles accumulated so far and fails the whole call. State is local to
/// each call, so concurrent calls are safe.
///
/// # Errors
///
/// Returns [`ParseError::Xml`] with the tokenizer's description when the
/// document is malformed or truncated.
pub fn parse(bytes: &[u8]) -> Result<Vec<Article>, ParseError> {
    let mut reader = Reader::from_reader(bytes);

    let mut articles: Vec<Article> = Vec::new();
    let mut current: Option<Field> = None;
    // The tokenizer tolerates a document that ends with elements still open;
    // we count nesting ourselves so truncation fails the call.
    let mut depth: usize = 0;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                depth += 1;
                if e.name().as_ref() == b"item" {
                    // A new entry: it becomes the active write target.
                    articles.push(Article::default());
                    current = None;
                } else {
                    current = Field::from_tag(e.name().as_ref());
                }
            }
            Ok(Event::Empty(e)) => {
                if e.name().as_ref() == b"item" {
                    articles.push(Article::default());
                }
                // Self-closing tags carry no character data.
                current = None;
            }
            Ok(Event::Text(e)) => {
                if let (Some(field), Some(article)) = (current, articles.last_mut()) {
                    let text = e
                        .unescape()
                        .map_err(|err| ParseError::Xml(err.to_string()))?;
                    field.append_to(article, &text);
                }
            }
            Ok(Event::CData(e)) => {
                if let (Some(field), Some(article)) = (current, articles.last_mut()) {
                    field.append_to(article, &String::from_utf8_lossy(e.as_ref()));
                }
            }
            Ok(Event::End(_)) => {
                depth = depth.saturating_sub(1);
                // Only the tracked tag resets; the last article stays the
                // active write target until the next <item> replaces it.
                current = None;
            }
            Ok(Event::Eof) => {
                if depth > 0 {
                    return Err(ParseError::Xml(format!(
                        "unexpected end of document: {depth} unclosed element(s)"
                    )));
                }
                break;
            }
            Ok(_) => {} // declaration, comments, processing instructions
            Err(e) => return Err(ParseError::Xml(e.to_string())),
        }
        buf.clear();
    }

    Ok(articles)
}
