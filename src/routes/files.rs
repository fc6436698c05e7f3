use std::{fs, path::Path};

use super::*;

pub async fn script(ReqPath(file_name): ReqPath<String>) -> impl IntoResponse {
    static_file(format!("static/scripts/{}", file_name), "text/javascript")
}

pub async fn style(ReqPath(file_name): ReqPath<String>) -> impl IntoResponse {
    static_file(format!("static/styles/{}", file_name), "text/css")
}

pub async fn asset(ReqPath(file_name): ReqPath<String>) -> impl IntoResponse {
    let content_type = match file_name.rsplit('.').next() {
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    };
    static_file(format!("static/assets/{}", file_name), content_type)
}

fn static_file(path: String, content_type: &'static str) -> Response {
    let path = Path::new(&path);
    match fs::read(path) {
        Ok(content) => (
            [
                (header::CONTENT_TYPE, content_type.to_owned()),
                (
                    header::CONTENT_DISPOSITION,
                    format!(
                        "inline; filename=\"{}\"",
                        path.file_name().unwrap().to_string_lossy()
                    ),
                ),
            ],
            content,
        )
            .into_response(),
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}
