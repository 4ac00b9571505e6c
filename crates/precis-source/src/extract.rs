use precis_core::PrecisError;
use scraper::{ElementRef, Html, Selector};

/// Title and readable body text pulled out of an HTML page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: Option<String>,
    /// Paragraphs separated by newlines.
    pub text: String,
}

const BOILERPLATE: &[&str] = &[
    "nav",
    "menu",
    "sidebar",
    "footer",
    "header",
    "banner",
    "cookie",
    "consent",
    "advert",
    "promo",
    "subscribe",
    "newsletter",
];

const MAX_CANDIDATES: usize = 20_000;
const HTML2TEXT_WIDTH: usize = 120;

/// Extract the article title and main text from an HTML document.
///
/// The body comes from the densest `article`/`main`/`section`/`div` block,
/// then from all `<p>` elements, then from a plain-text rendering of the
/// whole page. A page with no visible text is a [`PrecisError::Parse`].
pub fn extract_article(html: &str) -> Result<Article, PrecisError> {
    let doc = Html::parse_document(html);
    let title = extract_title(&doc);

    let text = main_block_text(&doc)
        .or_else(|| paragraph_text(doc.root_element()))
        .or_else(|| rendered_text(html))
        .ok_or_else(|| PrecisError::Parse("no text found in document".to_string()))?;

    tracing::debug!(
        title = title.as_deref().unwrap_or(""),
        chars = text.len(),
        "extracted article"
    );
    Ok(Article { title, text })
}

fn selector(css: &str) -> Option<Selector> {
    Selector::parse(css).ok()
}

fn extract_title(doc: &Html) -> Option<String> {
    let og = selector(r#"meta[property="og:title"]"#).and_then(|sel| {
        doc.select(&sel)
            .filter_map(|el| el.value().attr("content"))
            .map(norm_ws)
            .find(|t| !t.is_empty())
    });
    og.or_else(|| first_text(doc, "title"))
        .or_else(|| first_text(doc, "h1"))
}

fn first_text(doc: &Html, css: &str) -> Option<String> {
    let sel = selector(css)?;
    doc.select(&sel)
        .map(|el| norm_ws(&el.text().collect::<String>()))
        .find(|t| !t.is_empty())
}

fn norm_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Text nodes under `el`, skipping script and style content.
fn visible_text<'a>(el: ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    el.descendants().filter_map(|node| {
        let text = node.value().as_text()?;
        let parent = node.parent()?.value().as_element()?.name();
        (!matches!(parent, "script" | "style" | "noscript")).then_some(&**text)
    })
}

fn text_chars(el: ElementRef<'_>) -> usize {
    visible_text(el).map(|t| t.chars().count()).sum()
}

fn link_text_chars(el: ElementRef<'_>, links: &Selector) -> usize {
    el.select(links).map(text_chars).sum()
}

fn is_boilerplate(el: &ElementRef<'_>) -> bool {
    let attrs = format!(
        "{} {}",
        el.value().attr("class").unwrap_or(""),
        el.value().attr("id").unwrap_or("")
    )
    .to_ascii_lowercase();
    let tag = el.value().name();
    matches!(tag, "nav" | "footer" | "header" | "aside")
        || BOILERPLATE.iter().any(|b| attrs.contains(b))
}

fn main_block_text(doc: &Html) -> Option<String> {
    let blocks = selector("article, main, section, div")?;
    let links = selector("a")?;

    let mut best: Option<(i64, ElementRef<'_>)> = None;
    for el in doc.select(&blocks).take(MAX_CANDIDATES) {
        if is_boilerplate(&el) {
            continue;
        }
        let txt = text_chars(el) as i64;
        if txt < 20 {
            continue;
        }
        let link_txt = link_text_chars(el, &links) as i64;
        let mut score = txt - 2 * link_txt;
        match el.value().name() {
            "article" => score += 500,
            "main" => score += 300,
            _ => {}
        }
        if link_txt > txt / 2 {
            score -= 500;
        }
        if score > 0 && best.as_ref().is_none_or(|(s, _)| score > *s) {
            best = Some((score, el));
        }
    }

    let (_, el) = best?;
    paragraph_text(el).or_else(|| {
        let text = norm_ws(&visible_text(el).collect::<Vec<_>>().join(" "));
        (!text.is_empty()).then_some(text)
    })
}

/// Paragraph-like children of `el`, one per line.
fn paragraph_text(el: ElementRef<'_>) -> Option<String> {
    let sel = selector("p, li, blockquote, h2, h3, h4")?;
    let paragraphs: Vec<String> = el
        .select(&sel)
        .map(|p| norm_ws(&visible_text(p).collect::<Vec<_>>().join(" ")))
        .filter(|t| !t.is_empty())
        .collect();
    (!paragraphs.is_empty()).then(|| paragraphs.join("\n"))
}

fn rendered_text(html: &str) -> Option<String> {
    let text = html2text::from_read(html.as_bytes(), HTML2TEXT_WIDTH).ok()?;
    let lines: Vec<String> = text
        .lines()
        .map(norm_ws)
        .filter(|l| !l.is_empty())
        .collect();
    (!lines.is_empty()).then(|| lines.join("\n"))
}

/// Heuristic for bodies served without a usable content type.
pub(crate) fn looks_like_html(body: &str) -> bool {
    let head: String = body.trim_start().chars().take(512).collect();
    let head = head.to_ascii_lowercase();
    head.starts_with("<!doctype html") || head.starts_with("<html") || head.contains("<body")
}
