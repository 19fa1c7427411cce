//! Page shell served for every non-API path.
//!
//! The markup only carries the document language and direction; the page
//! body is rendered client-side. The request path is never echoed back.

use axum::extract::Request;
use axum::response::Html;

use crate::locale::Locale;

pub async fn shell(request: Request) -> Html<String> {
    let locale = request
        .extensions()
        .get::<Locale>()
        .copied()
        .unwrap_or_else(|| Locale::from_path(request.uri().path()));
    Html(render(locale))
}

#[must_use]
pub fn render(locale: Locale) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\" dir=\"{dir}\">\n<head><meta charset=\"utf-8\"></head>\n<body><div id=\"root\"></div></body>\n</html>\n",
        lang = locale.as_str(),
        dir = locale.direction().as_str(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_sets_lang_and_dir() {
        assert!(render(Locale::Ar).contains(r#"<html lang="ar" dir="rtl">"#));
        assert!(render(Locale::En).contains(r#"<html lang="en" dir="ltr">"#));
    }

    #[tokio::test]
    async fn shell_falls_back_to_path_locale() {
        let request = Request::builder()
            .uri("/ar/%3Cscript%3E")
            .body(axum::body::Body::empty())
            .unwrap();
        let Html(body) = shell(request).await;
        assert!(body.contains(r#"lang="ar""#));
        assert!(!body.contains("script"));
    }
}
