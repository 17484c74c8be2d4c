use reqwest::{Client, Response, header::CONTENT_TYPE, redirect::Policy};
use serde::Serialize;
use telemed::{AppState, Config, Store, build_router};
use tokio::net::TcpListener;

/// HTTP test application wrapper
///
/// Runs the full router on a random port against an in-memory store. Each
/// test gets its own server and store, so tests run in parallel without
/// sharing state.
pub struct TestApp {
    /// Server base URL (e.g., "http://127.0.0.1:54321")
    pub address: String,
    /// Default HTTP client. Keeps cookies and never follows redirects.
    pub client: Client,
    /// Application state, for inspecting what the requests stored
    pub state: AppState,
}

impl TestApp {
    /// Create a new HTTP test app with server on random port
    ///
    /// # Example
    /// ```rust
    /// #[tokio::test]
    /// async fn test_health_endpoint() {
    ///     let app = TestApp::new().await;
    ///     let response = app.get("/health").await;
    ///     assert_eq!(response.status(), 200);
    /// }
    /// ```
    pub async fn new() -> Self {
        let state = AppState::new(Config::default(), Store::new_memory());
        let app = build_router(state.clone());

        // Bind to random port (port 0 tells OS to assign available port)
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{port}");

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            address,
            client: Self::new_client(),
            state,
        }
    }

    /// A separate browser: its own cookie jar, no redirects followed.
    pub fn new_client() -> Client {
        Client::builder()
            .redirect(Policy::none())
            .cookie_store(true)
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client")
    }

    /// Get the full URL for a path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn get(&self, path: &str) -> Response {
        self.get_as(&self.client, path).await
    }

    pub async fn get_as(&self, client: &Client, path: &str) -> Response {
        client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn post_form<T: Serialize + ?Sized>(&self, path: &str, form: &T) -> Response {
        self.post_form_as(&self.client, path, form).await
    }

    /// POSTs `form` urlencoded, the way a browser submits an HTML form.
    pub async fn post_form_as<T: Serialize + ?Sized>(
        &self,
        client: &Client,
        path: &str,
        form: &T,
    ) -> Response {
        let body = serde_urlencoded::to_string(form).expect("Failed to encode form");
        client
            .post(self.url(path))
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .expect("Failed to send request")
    }
}
