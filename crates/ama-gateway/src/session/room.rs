//! Room session
//!
//! Owns everything a client holds for one room: the reconciler (store plus
//! local reaction flags), the command client, and the notification channel.
//! All mutation goes through `&mut self`; the channel pump is the only other
//! task and talks to the session through its ordered queue.

use std::future::Future;

use ama_cache::{MergeOutcome, QuestionSnapshot, Reconciler};
use ama_common::{ClientConfig, ClientError, ClientResult};
use ama_core::{DomainError, Question, QuestionId, RoomEvent, RoomId};
use ama_service::{CommandService, CreateQuestionRequest, HttpCommandClient, QuestionFetcher};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::channel::{ChannelError, ChannelState, NotificationChannel};

/// Failure opening a session end to end
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Channel(#[from] ChannelError),
}

/// Client-side state for one room
pub struct RoomSession<C> {
    room_id: RoomId,
    commands: C,
    reconciler: Reconciler,
    channel: NotificationChannel,
    revision: watch::Sender<u64>,
}

impl RoomSession<HttpCommandClient> {
    /// Subscribe, fetch, and seed a room against the configured service
    pub async fn connect(config: &ClientConfig, room_id: RoomId) -> Result<Self, SessionError> {
        let client = HttpCommandClient::new(config)?;
        let channel = NotificationChannel::subscribe(&config.endpoints, &room_id).await?;
        let session = Self::open(room_id, client.clone(), &client, channel).await?;
        Ok(session)
    }
}

impl<C: CommandService> RoomSession<C> {
    /// Open a session over an already connected channel
    ///
    /// The channel is subscribed before the bulk fetch so nothing published in
    /// between is lost; events that raced the fetch are applied on top of the
    /// seed and converge because creations are idempotent and counts absolute.
    pub async fn open<F>(
        room_id: RoomId,
        commands: C,
        fetcher: &F,
        channel: NotificationChannel,
    ) -> ClientResult<Self>
    where
        F: QuestionFetcher + ?Sized,
    {
        if channel.room_id() != &room_id {
            return Err(ClientError::Config(format!(
                "channel for room {} cannot serve room {room_id}",
                channel.room_id()
            )));
        }

        let page = fetcher.fetch_questions(&room_id).await?;

        let mut reconciler = Reconciler::new(room_id.clone());
        reconciler.seed(page);
        let (revision, _) = watch::channel(reconciler.revision());

        let mut session = Self {
            room_id,
            commands,
            reconciler,
            channel,
            revision,
        };
        let raced = session.process_pending();

        info!(
            room_id = %session.room_id,
            questions = session.reconciler.store().len(),
            raced,
            "Room session opened"
        );

        Ok(session)
    }

    pub fn room_id(&self) -> &RoomId {
        &self.room_id
    }

    pub fn commands(&self) -> &C {
        &self.commands
    }

    pub fn reconciler(&self) -> &Reconciler {
        &self.reconciler
    }

    /// Questions in display order, plus the room total
    pub fn snapshot(&self) -> QuestionSnapshot {
        self.reconciler.snapshot()
    }

    pub fn total(&self) -> u64 {
        self.reconciler.store().total()
    }

    /// Whether this client has reacted to `id`
    pub fn is_reacted(&self, id: &QuestionId) -> bool {
        self.reconciler.is_reacted(id)
    }

    pub fn revision(&self) -> u64 {
        self.reconciler.revision()
    }

    /// Watch the revision; it changes whenever visible state changes
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    pub fn is_connected(&self) -> bool {
        self.channel.state() == ChannelState::Open
    }

    pub fn channel_state(&self) -> ChannelState {
        self.channel.state()
    }

    /// Post a question
    ///
    /// Notifications keep being applied while the call is in flight.
    pub async fn create_question(&mut self, text: &str) -> ClientResult<Question> {
        CreateQuestionRequest::new(text).validated()?;

        let call = self.commands.create_question(&self.room_id, text);
        let result =
            drain_while(call, &mut self.channel, &mut self.reconciler, &self.revision).await;

        match result {
            Ok(question) => {
                let outcome = self.reconciler.apply_local_created(question.clone());
                publish(&self.revision, &self.reconciler, outcome);
                info!(
                    room_id = %self.room_id,
                    question_id = %question.id,
                    outcome = ?outcome,
                    "Question posted"
                );
                Ok(question)
            }
            Err(e) => {
                warn!(room_id = %self.room_id, error = %e, "Failed to post question");
                Err(e)
            }
        }
    }

    /// Add or remove this client's reaction, depending on the current flag
    ///
    /// The flag flips only once the service accepts the command; the shared
    /// count follows later with the reaction notification. Returns the new
    /// flag.
    ///
    /// Questions this session has never seen are rejected without a call, so
    /// no flag is kept for something that cannot be rendered.
    pub async fn toggle_reaction(&mut self, id: &QuestionId) -> ClientResult<bool> {
        // A creation may already be queued
        self.process_pending();
        if !self.reconciler.store().contains(id) {
            debug!(room_id = %self.room_id, question_id = %id, "Reaction on unknown question rejected");
            return Err(DomainError::QuestionNotFound(id.clone()).into());
        }

        let toggle = self.reconciler.toggle_for(id);
        let reacted = toggle.reacted_after();

        let result = if reacted {
            let call = self.commands.add_reaction(&self.room_id, id);
            drain_while(call, &mut self.channel, &mut self.reconciler, &self.revision).await
        } else {
            let call = self.commands.remove_reaction(&self.room_id, id);
            drain_while(call, &mut self.channel, &mut self.reconciler, &self.revision).await
        };

        match result {
            Ok(()) => {
                let outcome = self.reconciler.apply_local_reaction(id, reacted);
                publish(&self.revision, &self.reconciler, outcome);
                debug!(room_id = %self.room_id, question_id = %id, reacted, "Reaction toggled");
                Ok(reacted)
            }
            Err(e) => {
                warn!(
                    room_id = %self.room_id,
                    question_id = %id,
                    error = %e,
                    "Failed to toggle reaction"
                );
                Err(e)
            }
        }
    }

    /// Ask the service to mark a question answered
    ///
    /// Nothing changes locally on success; the question flips once the
    /// answered notification arrives.
    pub async fn mark_answered(&mut self, id: &QuestionId) -> ClientResult<()> {
        let call = self.commands.mark_answered(&self.room_id, id);
        let result =
            drain_while(call, &mut self.channel, &mut self.reconciler, &self.revision).await;

        if let Err(e) = &result {
            warn!(
                room_id = %self.room_id,
                question_id = %id,
                error = %e,
                "Failed to mark question answered"
            );
        }
        result
    }

    /// Wait for the next notification and apply it
    ///
    /// `None` once the channel is closed, or disconnected and drained.
    pub async fn next_event(&mut self) -> Option<MergeOutcome> {
        let event = self.channel.recv().await?;
        Some(apply(&mut self.reconciler, &self.revision, &event))
    }

    /// Apply every queued notification without waiting, returning how many
    pub fn process_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Some(event) = self.channel.try_recv() {
            apply(&mut self.reconciler, &self.revision, &event);
            applied += 1;
        }
        applied
    }

    /// Re-fetch the room and merge it in, e.g. after a reconnect
    pub async fn refresh<F>(&mut self, fetcher: &F) -> ClientResult<MergeOutcome>
    where
        F: QuestionFetcher + ?Sized,
    {
        let page = fetcher.fetch_questions(&self.room_id).await?;
        let outcome = self.reconciler.seed(page);
        publish(&self.revision, &self.reconciler, outcome);
        Ok(outcome)
    }

    /// Swap in a fresh channel, closing the current one
    pub fn reopen_channel(&mut self, channel: NotificationChannel) -> ClientResult<()> {
        if channel.room_id() != &self.room_id {
            return Err(ClientError::Config(format!(
                "channel for room {} cannot serve room {}",
                channel.room_id(),
                self.room_id
            )));
        }

        self.channel.close();
        self.channel = channel;
        info!(room_id = %self.room_id, "Notification channel replaced");
        Ok(())
    }

    /// Stop receiving notifications
    ///
    /// Idempotent. Afterwards the store is never touched by the channel again;
    /// dropping the session has the same effect.
    pub fn close(&mut self) {
        if self.channel.state() == ChannelState::Closed {
            return;
        }
        self.channel.close();
        info!(room_id = %self.room_id, "Room session closed");
    }
}

/// Drive a command future, applying notifications until it completes
async fn drain_while<T>(
    call: impl Future<Output = T>,
    channel: &mut NotificationChannel,
    reconciler: &mut Reconciler,
    revision: &watch::Sender<u64>,
) -> T {
    tokio::pin!(call);

    loop {
        tokio::select! {
            biased;

            result = &mut call => return result,

            Some(event) = channel.recv() => {
                apply(reconciler, revision, &event);
            }
        }
    }
}

fn apply(reconciler: &mut Reconciler, revision: &watch::Sender<u64>, event: &RoomEvent) -> MergeOutcome {
    let outcome = reconciler.apply_event(event);
    publish(revision, reconciler, outcome);
    outcome
}

fn publish(revision: &watch::Sender<u64>, reconciler: &Reconciler, outcome: MergeOutcome) {
    if outcome.is_applied() {
        revision.send_replace(reconciler.revision());
    }
}

impl<C> std::fmt::Debug for RoomSession<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoomSession")
            .field("room_id", &self.room_id)
            .field("channel", &self.channel)
            .field("revision", &self.reconciler.revision())
            .finish()
    }
}
