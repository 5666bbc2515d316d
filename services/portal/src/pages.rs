//! Page shells behind the route gate
//!
//! The dashboard UI is rendered by the separate frontend bundle; these
//! handlers keep the gated navigation surface servable and give the gate
//! something to protect.

use axum::response::Html;

fn shell(title: &str) -> Html<String> {
    Html(format!(
        "<!doctype html><html><head><title>EFMM Admin | {title}</title></head>\
         <body><div id=\"root\" data-page=\"{title}\"></div></body></html>"
    ))
}

/// GET /, the sign-in page.
pub async fn signin() -> Html<String> {
    shell("Sign In")
}

/// GET /forget-password
pub async fn forget_password() -> Html<String> {
    shell("Forget Password")
}

/// GET /admin/dashboard
pub async fn dashboard() -> Html<String> {
    shell("Dashboard")
}

/// Any other page under /admin.
pub async fn admin_section() -> Html<String> {
    shell("Admin")
}
