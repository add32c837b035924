//! Static dashboard files

use std::path::{Component, Path, PathBuf};

/// Content type for a served file, by extension
pub fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        _ => "text/plain",
    }
}

/// Map a request path onto a relative file path under the static root.
///
/// `/` maps to `index.html`. Paths with `..`, absolute or prefixed
/// components are refused.
pub fn relative_path(request_path: &str) -> Option<PathBuf> {
    let trimmed = request_path.trim_start_matches('/');
    let relative = if trimmed.is_empty() {
        Path::new("index.html")
    } else {
        Path::new(trimmed)
    };

    let safe = relative
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    safe.then(|| relative.to_path_buf())
}

/// Read a static file, refusing anything that resolves outside `root`
pub async fn read_static(root: &Path, request_path: &str) -> Option<(Vec<u8>, &'static str)> {
    let relative = relative_path(request_path)?;
    let root = tokio::fs::canonicalize(root).await.ok()?;
    let path = tokio::fs::canonicalize(root.join(&relative)).await.ok()?;
    if !path.starts_with(&root) {
        return None;
    }
    if !tokio::fs::metadata(&path).await.ok()?.is_file() {
        return None;
    }
    let content = tokio::fs::read(&path).await.ok()?;
    Some((content, content_type(&path)))
}
