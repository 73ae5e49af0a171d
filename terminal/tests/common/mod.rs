//! Shared fixtures for integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};
use slot_terminal::core::ClientConfig;
use slot_terminal::services::session::{open_shared, SharedSession};
use slot_terminal::App;
use tempfile::TempDir;
use wiremock::MockServer;

/// Mock backend plus an app whose session lives in a temp dir.
pub struct TestEnv {
    pub server: MockServer,
    pub dir: TempDir,
    pub app: App,
}

impl TestEnv {
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().expect("Temp dir should be created");
        let config = ClientConfig::with_session_dir(format!("{}/api", server.uri()), dir.path());
        let app = App::new(config).expect("App should open an empty session");
        Self { server, dir, app }
    }

    /// Same as [`new`](Self::new) but with `alice` already logged in.
    pub async fn logged_in() -> Self {
        let env = Self::new().await;
        {
            let session = env.session();
            let mut session = session.write();
            session.set_token("tok-alice").unwrap();
            session.set_user_info("alice", 100.0).unwrap();
        }
        env
    }

    /// Session as the next process would load it from disk.
    pub fn reload(&self) -> SharedSession {
        open_shared(self.dir.path().join("session.json")).expect("Session file should load")
    }

    /// Session handle the running app uses.
    pub fn session(&self) -> SharedSession {
        self.app.store.shared().clone()
    }
}

/// `{success: true, message: "ok", data}` envelope.
pub fn ok(data: Value) -> Value {
    json!({ "success": true, "message": "ok", "data": data })
}

/// `{success: false, message}` envelope.
pub fn fail(message: &str) -> Value {
    json!({ "success": false, "message": message, "data": null })
}
