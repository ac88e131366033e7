//! HTTP command client
//!
//! reqwest-backed implementation of [`CommandService`] and [`QuestionFetcher`].

use ama_common::{ClientConfig, ClientError, ClientResult, CommandKind, EndpointConfig};
use ama_core::{Question, QuestionId, QuestionPage, Room, RoomId};
use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use crate::dto::{
    extract_error_message, CreateQuestionRequest, CreateRoomRequest, QuestionListResponse,
    QuestionResponse, RoomResponse,
};

use super::ports::{CommandService, QuestionFetcher};

/// Command client talking to the AMA REST API
#[derive(Debug, Clone)]
pub struct HttpCommandClient {
    http: reqwest::Client,
    endpoints: EndpointConfig,
}

impl HttpCommandClient {
    /// Build a client from configuration, applying the request timeout
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self::with_client(http, config.endpoints.clone()))
    }

    /// Use an existing reqwest client
    pub fn with_client(http: reqwest::Client, endpoints: EndpointConfig) -> Self {
        Self { http, endpoints }
    }

    pub fn endpoints(&self) -> &EndpointConfig {
        &self.endpoints
    }

    /// Send a request and return the response if its status is a success
    async fn send(&self, command: CommandKind, request: RequestBuilder) -> ClientResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::transport(command, e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // The body is only used for the message; a failed read is not worth
        // masking the status with.
        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body);

        warn!(
            command = %command,
            status = status.as_u16(),
            message = %message,
            "Command rejected by service"
        );

        Err(ClientError::remote(command, status.as_u16(), message))
    }

    /// Send a request and decode its JSON body
    async fn send_json<T: DeserializeOwned>(
        &self,
        command: CommandKind,
        request: RequestBuilder,
    ) -> ClientResult<T> {
        let response = self.send(command, request).await?;
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::transport(command, e))?;

        serde_json::from_str(&body).map_err(|e| ClientError::decode(command, e))
    }

    /// Send a request whose body carries nothing the client needs
    async fn send_discarding(&self, command: CommandKind, request: RequestBuilder) -> ClientResult<()> {
        let response = self.send(command, request).await?;
        // Drain so the connection can be reused
        if let Err(e) = response.bytes().await {
            debug!(command = %command, error = %e, "Failed to drain response body");
        }
        Ok(())
    }
}

#[async_trait]
impl CommandService for HttpCommandClient {
    #[instrument(skip(self))]
    async fn create_room(&self, name: &str) -> ClientResult<Room> {
        let command = CommandKind::CreateRoom;
        let request = CreateRoomRequest::new(name).validated()?;

        let response: RoomResponse = self
            .send_json(command, self.http.post(self.endpoints.rooms_url()).json(&request))
            .await?;
        let room = Room::try_from(response).map_err(|e| ClientError::decode(command, e))?;

        info!(room_id = %room.id, "Room created");

        Ok(room)
    }

    #[instrument(skip(self))]
    async fn create_question(&self, room_id: &RoomId, text: &str) -> ClientResult<Question> {
        let command = CommandKind::CreateQuestion;
        let request = CreateQuestionRequest::new(text).validated()?;

        let response: QuestionResponse = self
            .send_json(
                command,
                self.http.post(self.endpoints.questions_url(room_id)).json(&request),
            )
            .await?;
        let question = response
            .into_question(room_id)
            .map_err(|e| ClientError::decode(command, e))?;

        info!(room_id = %room_id, question_id = %question.id, "Question created");

        Ok(question)
    }

    #[instrument(skip(self))]
    async fn add_reaction(&self, room_id: &RoomId, question_id: &QuestionId) -> ClientResult<()> {
        self.send_discarding(
            CommandKind::AddReaction,
            self.http.patch(self.endpoints.question_url(room_id, question_id)),
        )
        .await?;

        info!(room_id = %room_id, question_id = %question_id, "Reaction added");

        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove_reaction(
        &self,
        room_id: &RoomId,
        question_id: &QuestionId,
    ) -> ClientResult<()> {
        self.send_discarding(
            CommandKind::RemoveReaction,
            self.http.delete(self.endpoints.question_url(room_id, question_id)),
        )
        .await?;

        info!(room_id = %room_id, question_id = %question_id, "Reaction removed");

        Ok(())
    }

    #[instrument(skip(self))]
    async fn mark_answered(&self, room_id: &RoomId, question_id: &QuestionId) -> ClientResult<()> {
        self.send_discarding(
            CommandKind::MarkAnswered,
            self.http.patch(self.endpoints.answer_url(room_id, question_id)),
        )
        .await?;

        info!(room_id = %room_id, question_id = %question_id, "Question marked answered");

        Ok(())
    }
}

#[async_trait]
impl QuestionFetcher for HttpCommandClient {
    #[instrument(skip(self))]
    async fn fetch_questions(&self, room_id: &RoomId) -> ClientResult<QuestionPage> {
        let command = CommandKind::FetchQuestions;

        let response: QuestionListResponse = self
            .send_json(command, self.http.get(self.endpoints.questions_url(room_id)))
            .await?;
        let page = response
            .into_page(room_id)
            .map_err(|e| ClientError::decode(command, e))?;

        debug!(
            room_id = %room_id,
            count = page.questions.len(),
            total = page.total,
            "Questions fetched"
        );

        Ok(page)
    }
}
