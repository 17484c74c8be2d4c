//! Informational pages. Each renders with whoever is signed in, if anyone.

use axum::Json;

use crate::{
    handlers::render,
    middleware::Session,
    models::views::{Page, SiteContext},
};

async fn site_page(session: Session, template: &'static str) -> Json<Page<SiteContext>> {
    let identity = session.identity().await;
    render(&session, template, SiteContext { identity }).await
}

/// GET /
pub async fn home(session: Session) -> Json<Page<SiteContext>> {
    site_page(session, "home.html").await
}

/// GET /about
pub async fn about(session: Session) -> Json<Page<SiteContext>> {
    site_page(session, "about.html").await
}

/// GET /services
pub async fn services(session: Session) -> Json<Page<SiteContext>> {
    site_page(session, "services.html").await
}

/// GET /contact
pub async fn contact(session: Session) -> Json<Page<SiteContext>> {
    site_page(session, "contact.html").await
}
