use crate::DocumentSource;
use crate::config::FetchConfig;
use crate::extract::{extract_article, looks_like_html};
use async_trait::async_trait;
use encoding_rs::{Encoding, UTF_8};
use precis_core::{Document, PrecisError};
use std::time::Duration;

const MAX_REDIRECTS: usize = 10;

/// Fetches a web page and extracts its article text.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
    max_bytes: usize,
}

enum BodyKind {
    Html,
    Plain,
}

struct Fetched {
    content_type: Option<String>,
    bytes: Vec<u8>,
    truncated: bool,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, cfg: &FetchConfig) -> Result<Self, PrecisError> {
        let client = reqwest::Client::builder()
            .user_agent(cfg.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .map_err(|e| PrecisError::Fetch(e.to_string()))?;
        Ok(Self {
            url: url.into(),
            client,
            max_bytes: cfg.max_bytes,
        })
    }

    async fn fetch(&self) -> Result<Fetched, PrecisError> {
        let mut resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| PrecisError::Fetch(format!("{}: {e}", self.url)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(PrecisError::Fetch(format!("{}: HTTP {status}", self.url)));
        }
        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_ascii_lowercase());

        let mut bytes = Vec::new();
        let mut truncated = false;
        while let Some(chunk) = resp
            .chunk()
            .await
            .map_err(|e| PrecisError::Fetch(format!("{}: {e}", self.url)))?
        {
            if bytes.len().saturating_add(chunk.len()) > self.max_bytes {
                let can_take = self.max_bytes.saturating_sub(bytes.len());
                bytes.extend_from_slice(&chunk[..can_take]);
                tracing::warn!(url = %self.url, max_bytes = self.max_bytes, "response truncated");
                truncated = true;
                break;
            }
            bytes.extend_from_slice(&chunk);
        }

        tracing::debug!(url = %self.url, %status, bytes = bytes.len(), "fetched");
        Ok(Fetched {
            content_type,
            bytes,
            truncated,
        })
    }
}

/// The `charset` parameter of a Content-Type header value.
fn charset(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        name.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"'))
    })
}

/// Decode a response body by its declared charset, falling back to UTF-8.
///
/// A body cut at the byte limit loses any trailing partial UTF-8 sequence
/// instead of decoding it to U+FFFD.
fn decode(content_type: Option<&str>, bytes: &[u8], truncated: bool) -> String {
    let encoding = content_type
        .and_then(charset)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8);

    let mut bytes = bytes;
    if truncated && encoding == UTF_8 {
        if let Err(e) = std::str::from_utf8(bytes) {
            if e.error_len().is_none() {
                bytes = &bytes[..e.valid_up_to()];
            }
        }
    }

    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::debug!(encoding = used.name(), "body had undecodable bytes");
    }
    text.into_owned()
}

fn body_kind(content_type: Option<&str>, body: &str) -> Result<BodyKind, PrecisError> {
    match content_type {
        Some(ct) if ct.contains("html") => Ok(BodyKind::Html),
        Some(ct) if ct.starts_with("text/plain") => Ok(BodyKind::Plain),
        Some(ct) => Err(PrecisError::Parse(format!("unsupported content type {ct}"))),
        None if looks_like_html(body) => Ok(BodyKind::Html),
        None => Ok(BodyKind::Plain),
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    async fn load(&self) -> Result<Document, PrecisError> {
        let fetched = self.fetch().await?;
        let content_type = fetched.content_type.as_deref();
        let body = decode(content_type, &fetched.bytes, fetched.truncated);

        match body_kind(content_type, &body)? {
            BodyKind::Html => {
                let article = extract_article(&body)?;
                Ok(Document::new(self.url.clone(), article.title, article.text))
            }
            BodyKind::Plain => Ok(Document::new(self.url.clone(), None, body)),
        }
    }

    fn describe(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, http::StatusCode, http::header, routing::get};
    use std::net::SocketAddr;

    async fn serve(app: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    fn source(addr: SocketAddr, path: &str, cfg: &FetchConfig) -> HttpSource {
        HttpSource::new(format!("http://{addr}{path}"), cfg).unwrap()
    }

    #[tokio::test]
    async fn html_page_is_extracted() {
        let app = Router::new().route(
            "/article",
            get(|| async {
                (
                    [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
                    "<html><head><title>Pets</title></head><body><article>\
                     <p>Cats are great.</p><p>Dogs are great too.</p></article></body></html>",
                )
            }),
        );
        let addr = serve(app).await;

        let doc = source(addr, "/article", &FetchConfig::default())
            .load()
            .await
            .unwrap();
        assert_eq!(doc.title.as_deref(), Some("Pets"));
        assert_eq!(doc.body, "Cats are great.\nDogs are great too.");
        assert!(doc.source.ends_with("/article"));
    }

    #[tokio::test]
    async fn plain_text_is_used_as_is() {
        let app = Router::new().route(
            "/",
            get(|| async { ([(header::CONTENT_TYPE, "text/plain")], "Cats are great.") }),
        );
        let addr = serve(app).await;

        let doc = source(addr, "/", &FetchConfig::default())
            .load()
            .await
            .unwrap();
        assert_eq!(doc.body, "Cats are great.");
        assert_eq!(doc.title, None);
    }

    #[tokio::test]
    async fn error_status_is_fetch_error() {
        let app = Router::new().route("/gone", get(|| async { (StatusCode::NOT_FOUND, "nope") }));
        let addr = serve(app).await;

        let err = source(addr, "/gone", &FetchConfig::default())
            .load()
            .await
            .unwrap_err();
        assert!(matches!(err, PrecisError::Fetch(msg) if msg.contains("404")));
    }

    #[tokio::test]
    async fn unsupported_content_type_is_parse_error() {
        let app = Router::new().route(
            "/img",
            get(|| async { ([(header::CONTENT_TYPE, "image/png")], vec![0u8, 1, 2]) }),
        );
        let addr = serve(app).await;

        let err = source(addr, "/img", &FetchConfig::default())
            .load()
            .await
            .unwrap_err();
        assert!(matches!(err, PrecisError::Parse(_)));
    }

    #[tokio::test]
    async fn body_is_capped_at_max_bytes() {
        let app = Router::new().route(
            "/big",
            get(|| async { ([(header::CONTENT_TYPE, "text/plain")], "x".repeat(10_000)) }),
        );
        let addr = serve(app).await;
        let cfg = FetchConfig {
            max_bytes: 100,
            ..FetchConfig::default()
        };

        let doc = source(addr, "/big", &cfg).load().await.unwrap();
        assert_eq!(doc.body.len(), 100);
    }

    #[tokio::test]
    async fn latin1_body_is_decoded_by_charset() {
        let app = Router::new().route(
            "/latin1",
            get(|| async {
                (
                    [(header::CONTENT_TYPE, "text/plain; charset=ISO-8859-1")],
                    vec![0x43u8, 0x61, 0x66, 0xE9],
                )
            }),
        );
        let addr = serve(app).await;

        let doc = source(addr, "/latin1", &FetchConfig::default())
            .load()
            .await
            .unwrap();
        assert_eq!(doc.body, "Caf\u{e9}");
    }

    #[tokio::test]
    async fn truncation_drops_partial_utf8_sequence() {
        let app = Router::new().route(
            "/accents",
            get(|| async {
                (
                    [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                    "\u{e9}".repeat(100),
                )
            }),
        );
        let addr = serve(app).await;
        let cfg = FetchConfig {
            max_bytes: 101,
            ..FetchConfig::default()
        };

        let doc = source(addr, "/accents", &cfg).load().await.unwrap();
        assert_eq!(doc.body.len(), 100);
        assert!(!doc.body.contains('\u{fffd}'));
    }

    #[tokio::test]
    async fn connection_refused_is_fetch_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = source(addr, "/", &FetchConfig::default())
            .load()
            .await
            .unwrap_err();
        assert!(matches!(err, PrecisError::Fetch(_)));
    }

    #[test]
    fn content_type_routing() {
        assert!(matches!(
            body_kind(Some("text/html"), ""),
            Ok(BodyKind::Html)
        ));
        assert!(matches!(
            body_kind(Some("application/xhtml+xml"), ""),
            Ok(BodyKind::Html)
        ));
        assert!(matches!(
            body_kind(None, "<html><body></body></html>"),
            Ok(BodyKind::Html)
        ));
        assert!(matches!(body_kind(None, "plain words"), Ok(BodyKind::Plain)));
        assert!(body_kind(Some("application/json"), "{}").is_err());
    }

    #[test]
    fn charset_parameter() {
        assert_eq!(charset("text/html; charset=utf-8"), Some("utf-8"));
        assert_eq!(charset("text/plain;Charset=\"windows-1252\""), Some("windows-1252"));
        assert_eq!(charset("text/plain"), None);
    }

    #[test]
    fn decode_falls_back_to_utf8() {
        assert_eq!(decode(None, "na\u{ef}ve".as_bytes(), false), "na\u{ef}ve");
        assert_eq!(
            decode(Some("text/plain; charset=bogus"), b"plain", false),
            "plain"
        );
        assert_eq!(
            decode(Some("text/plain; charset=windows-1252"), &[0x93, 0x68, 0x69, 0x94], false),
            "\u{201c}hi\u{201d}"
        );
    }

    #[test]
    fn untruncated_invalid_utf8_is_replaced() {
        assert_eq!(decode(None, &[0x61, 0xC3], false), "a\u{fffd}");
        assert_eq!(decode(None, &[0x61, 0xC3], true), "a");
    }
}
