//! Test helpers for integration tests
//!
//! Provides a fake AMA service on an ephemeral port, and the client pieces
//! wired against it.

use std::net::SocketAddr;
use std::time::Duration;

use ama_cache::MergeOutcome;
use ama_common::{try_init_tracing_with_config, ClientConfig, TracingConfig};
use ama_core::RoomId;
use ama_gateway::{NotificationChannel, RoomSession};
use ama_service::{CommandService, HttpCommandClient};
use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fake_service::FakeAma;

/// How long a test waits for a notification before failing
pub const EVENT_TIMEOUT: Duration = Duration::from_secs(5);

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub service: FakeAma,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a fake service on an ephemeral port
    pub async fn start() -> Result<Self> {
        // Several tests share the process; only the first install wins
        let _ = try_init_tracing_with_config(TracingConfig::default());

        let service = FakeAma::new();
        let app = service.router();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            service,
            _handle: handle,
        })
    }

    pub fn api_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    pub fn ws_url(&self) -> String {
        format!("ws://{}", self.addr)
    }

    /// Client configuration pointing at this server
    pub fn config(&self) -> Result<ClientConfig> {
        let mut config = ClientConfig::new(self.api_url(), self.ws_url())?;
        config.request_timeout_secs = 10;
        Ok(config)
    }

    pub fn command_client(&self) -> Result<HttpCommandClient> {
        Ok(HttpCommandClient::new(&self.config()?)?)
    }

    /// Create a room through the real command client
    pub async fn create_room(&self, name: &str) -> Result<RoomId> {
        let room = self.command_client()?.create_room(name).await?;
        Ok(room.id)
    }

    /// Open a fully wired session for `room_id`
    pub async fn open_session(&self, room_id: &RoomId) -> Result<RoomSession<HttpCommandClient>> {
        Ok(RoomSession::connect(&self.config()?, room_id.clone()).await?)
    }

    /// A second channel for the same room, e.g. to reopen after a disconnect
    pub async fn open_channel(&self, room_id: &RoomId) -> Result<NotificationChannel> {
        Ok(NotificationChannel::subscribe(&self.config()?.endpoints, room_id).await?)
    }

    /// Wait until the service has `count` subscribers for the room
    pub async fn wait_for_subscribers(&self, room_id: &RoomId, count: usize) -> Result<()> {
        tokio::time::timeout(EVENT_TIMEOUT, async {
            while self.service.subscriber_count(room_id.as_str()).await != count {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .context("subscriber count never settled")
    }
}

/// Apply the next notification, failing after [`EVENT_TIMEOUT`]
pub async fn next_outcome<C: CommandService>(session: &mut RoomSession<C>) -> Result<MergeOutcome> {
    tokio::time::timeout(EVENT_TIMEOUT, session.next_event())
        .await
        .context("timed out waiting for a notification")?
        .context("notification channel ended")
}

/// Apply notifications until `done` holds
pub async fn wait_until<C, F>(session: &mut RoomSession<C>, mut done: F) -> Result<()>
where
    C: CommandService,
    F: FnMut(&RoomSession<C>) -> bool,
{
    while !done(&*session) {
        next_outcome(session).await?;
    }
    Ok(())
}
