use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir, File};
use mime_guess::{from_path, Mime};

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

/// Serves a file of the embedded frontend bundle.
pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    serve_from(&STATIC_DIR, req.path())
}

/// Finds the file answering `path`. Unknown paths resolve to `index.html`
/// so that client-side routes survive a reload.
fn resolve<'d>(dir: &'d Dir<'d>, path: &str) -> Option<(&'d File<'d>, Mime)> {
    let path = path.trim_start_matches('/');
    let wanted = if path.is_empty() { INDEX } else { path };

    dir.get_file(wanted)
        .or_else(|| dir.get_file(INDEX))
        .map(|file| (file, from_path(file.path()).first_or_octet_stream()))
}

fn serve_from(dir: &Dir<'_>, path: &str) -> HttpResponse {
    match resolve(dir, path) {
        Some((file, mime)) => HttpResponse::Ok()
            .content_type(mime.as_ref())
            .body(file.contents().to_vec()),
        None => {
            log::warn!("no embedded file for {} and no {}", path, INDEX);
            HttpResponse::NotFound().body("Not Found")
        }
    }
}
