use axum::{extract::Path, http::{header, StatusCode}, response::{Html, IntoResponse, Response}};
use include_dir::{include_dir, Dir};

static STATIC_DIR: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/static");

pub async fn index() -> Response {
    match STATIC_DIR.get_file("index.html").and_then(|f| f.contents_utf8()) {
        Some(html) => Html(html).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

pub async fn asset(Path(path): Path<String>) -> Response {
    let Some(file) = STATIC_DIR.get_file(&path) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let mime = mime_guess::from_path(&path).first_or_octet_stream();
    ([(header::CONTENT_TYPE, mime.essence_str().to_string())], file.contents()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn index_is_embedded() {
        let res = index().await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn script_gets_javascript_content_type() {
        let res = asset(Path("app.js".to_string())).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers()[header::CONTENT_TYPE].to_str().unwrap().contains("javascript"));
    }

    #[tokio::test]
    async fn unknown_asset_is_not_found() {
        let res = asset(Path("nope.css".to_string())).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
