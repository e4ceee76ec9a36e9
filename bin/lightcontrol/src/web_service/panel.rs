use axum::response::Html;

static PANEL_HTML: &str = include_str!("./panel.html");

pub async fn panel() -> Html<&'static str> {
    Html(PANEL_HTML)
}
