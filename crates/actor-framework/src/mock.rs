//! # Mock Framework
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from a
//! queue of expectations instead of a running actor. Use it to test code *around* a client
//! (error mapping, HTTP handlers) deterministically and to inject failures that are awkward
//! to produce with a real actor, such as a closed channel.
//!
//! | | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None, answers are scripted | Real store |
//! | **Error Injection** | Easy (`return_err`) | Needs specific state |
//! | **Use Case** | Logic around the client | The entity rules themselves |
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Tag { id: String }
//! #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
//!
//! #[async_trait]
//! impl ActorEntity for Tag {
//!     type Id = String; type Create = (); type Update = ();
//!     type Context = (); type Error = TagError;
//!     fn id(&self) -> &String { &self.id }
//!     fn from_create_params(id: String, _: ()) -> Result<Self, TagError> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: (), _: &()) -> Result<(), TagError> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Tag>::new();
//!     mock.expect_get("tag_1".to_string()).return_err(FrameworkError::ActorClosed);
//!
//!     let result = mock.client().get("tag_1".to_string()).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! For tests that need to inspect the payload a client sends, [`create_mock_client`] returns
//! the raw receiver together with helpers such as [`expect_update`].

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ActorResult, ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted answer to one request.
enum Expectation<T: ActorEntity> {
    List {
        response: ActorResult<T, Vec<T>>,
    },
    Create {
        response: ActorResult<T, T>,
    },
    Get {
        id: T::Id,
        response: ActorResult<T, Option<T>>,
    },
    Update {
        id: T::Id,
        response: ActorResult<T, T>,
    },
    Delete {
        id: T::Id,
        response: ActorResult<T, ()>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in order. A request that does not match the next
/// expectation (wrong operation or wrong id) is recorded as a failure, its responder is
/// dropped (the caller sees `ActorDropped`) and [`MockClient::verify`] panics later.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    failures: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let failures = Arc::new(Mutex::new(Vec::new()));

        let queue = expectations.clone();
        let failed = failures.clone();
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();
                answer(request, expectation, &failed);
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            failures,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::List { response })
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Create { response })
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Update { id, response })
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    /// Verifies that every expectation was consumed and every request matched.
    pub fn verify(&self) {
        let failures = self.failures.lock().unwrap();
        if !failures.is_empty() {
            panic!("Unexpected requests: {}", failures.join("; "));
        }
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }

    fn builder<R>(
        &self,
        wrap: impl FnOnce(ActorResult<T, R>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(wrap),
        }
    }
}

/// Builder returned by the `expect_*` methods; finish it with `return_ok` or `return_err`.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Queue<T>,
    wrap: Box<dyn FnOnce(ActorResult<T, R>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError<T::Error>) {
        self.push(Err(error));
    }

    fn push(self, response: ActorResult<T, R>) {
        let expectation = (self.wrap)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// A mismatch is recorded before the request (and its responder) is dropped, so a caller
// woken by the dropped responder always finds the failure in place.
fn answer<T: ActorEntity>(
    request: ResourceRequest<T>,
    expectation: Option<Expectation<T>>,
    failures: &Mutex<Vec<String>>,
) {
    let record = |reason: String| failures.lock().unwrap().push(reason);
    match (request, expectation) {
        (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
            let _ = respond_to.send(response);
        }
        (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
            let _ = respond_to.send(response);
        }
        (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response })) => {
            match check_id::<T>(&id, &want) {
                Ok(()) => {
                    let _ = respond_to.send(response);
                }
                Err(reason) => record(reason),
            }
        }
        (
            ResourceRequest::Update { id, respond_to, .. },
            Some(Expectation::Update { id: want, response }),
        ) => match check_id::<T>(&id, &want) {
            Ok(()) => {
                let _ = respond_to.send(response);
            }
            Err(reason) => record(reason),
        },
        (
            ResourceRequest::Delete { id, respond_to },
            Some(Expectation::Delete { id: want, response }),
        ) => match check_id::<T>(&id, &want) {
            Ok(()) => {
                let _ = respond_to.send(response);
            }
            Err(reason) => record(reason),
        },
        (request, None) => record(format!("no expectation left for {request:?}")),
        (request, Some(_)) => record(format!("expectation mismatch for {request:?}")),
    }
}

fn check_id<T: ActorEntity>(got: &T::Id, want: &T::Id) -> Result<(), String> {
    if got == want {
        Ok(())
    } else {
        Err(format!("expected id {want}, got {got}"))
    }
}

// =============================================================================
// RECEIVER HELPERS
// =============================================================================

/// Creates a client together with the receiver its requests arrive on.
///
/// The test plays the actor: it pulls requests off the receiver, asserts on their payloads
/// and answers through the contained responder.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T, T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request.
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, Response<T, T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}
