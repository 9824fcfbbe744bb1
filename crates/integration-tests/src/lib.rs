//! End-to-end test support for Solecraft.
//!
//! [`TestServer`] runs the studio router on `127.0.0.1:0` with in-memory
//! storage and a [`ScriptedGenerator`] in place of Gemini, so every test gets
//! a private, fully wired studio without a database or network access.
//!
//! ```rust,ignore
//! let server = TestServer::start().await;
//! server.generator.push_reply(r##"{"sole":"#000000",...}"##);
//!
//! let session = server.customizer();
//! session.ask_ai_designer("stealth").await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use url::Url;

use solecraft_client::{ApiClient, Customizer};
use solecraft_core::UserId;
use solecraft_studio::db::{Storage, starter_catalogue};
use solecraft_studio::gemini::GeminiError;
use solecraft_studio::routes;
use solecraft_studio::services::{Designer, TextGenerator};
use solecraft_studio::state::AppState;

/// Text generator answering from a queue of scripted outcomes.
///
/// With [`Self::hold`] set, each call parks until [`Self::release`] is
/// called, which keeps a request in flight for as long as a test needs.
#[derive(Default)]
pub struct ScriptedGenerator {
    outcomes: Mutex<VecDeque<Result<Option<String>, GeminiError>>>,
    prompts: Mutex<Vec<String>>,
    held: Mutex<bool>,
    release: Notify,
}

impl ScriptedGenerator {
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a successful reply.
    pub fn push_reply(&self, text: &str) {
        self.push(Ok(Some(text.to_owned())));
    }

    /// Queue an arbitrary outcome.
    pub fn push(&self, outcome: Result<Option<String>, GeminiError>) {
        lock(&self.outcomes).push_back(outcome);
    }

    /// Make subsequent calls wait for [`Self::release`].
    pub fn hold(&self) {
        *lock(&self.held) = true;
    }

    /// Let one waiting call proceed.
    pub fn release(&self) {
        self.release.notify_one();
    }

    /// Prompts received so far.
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        lock(&self.prompts).clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: String) -> Result<Option<String>, GeminiError> {
        lock(&self.prompts).push(prompt);

        let held = *lock(&self.held);
        if held {
            self.release.notified().await;
        }

        lock(&self.outcomes)
            .pop_front()
            .unwrap_or_else(|| Err(GeminiError::Parse("no scripted reply left".to_string())))
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A studio served on an ephemeral local port.
///
/// The server task is aborted when this value is dropped.
pub struct TestServer {
    pub base_url: Url,
    pub generator: Arc<ScriptedGenerator>,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a studio with the starter catalogue and no saved designs.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn start() -> Self {
        let generator = ScriptedGenerator::new();
        let state = AppState::new(
            Storage::in_memory(starter_catalogue()),
            Designer::new(generator.clone()),
        );

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, routes::app(state))
                .await
                .expect("Test server failed");
        });

        let base_url = Url::parse(&format!("http://{addr}")).expect("Invalid test server URL");

        Self {
            base_url,
            generator,
            handle,
        }
    }

    /// API client acting as `user`.
    #[must_use]
    pub fn client_for(&self, user: UserId) -> ApiClient {
        ApiClient::with_user(self.base_url.clone(), user)
    }

    /// A fresh session for a new user.
    #[must_use]
    pub fn customizer(&self) -> Customizer {
        Customizer::new(self.client_for(UserId::generate()))
    }

    /// A fresh session for `user`.
    #[must_use]
    pub fn customizer_for(&self, user: UserId) -> Customizer {
        Customizer::new(self.client_for(user))
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
