//! # Generic Client
//!
//! This module defines the generic client for communicating with actors.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ActorResult, ResourceRequest, Response};
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `ResourceActor`.
///
/// It forwards requests over a Tokio mpsc channel and waits for the answer on a oneshot
/// channel. Holding only a sender, it is cheap to clone and share across tasks.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn list(&self) -> ActorResult<T, Vec<T>> {
        self.request(|respond_to| ResourceRequest::List { respond_to })
            .await
    }

    /// Creates a record and returns it, id included.
    pub async fn create(&self, params: T::Create) -> ActorResult<T, T> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> ActorResult<T, Option<T>> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> ActorResult<T, T> {
        self.request(|respond_to| ResourceRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> ActorResult<T, ()> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<T, R>) -> ResourceRequest<T>,
    ) -> ActorResult<T, R> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
