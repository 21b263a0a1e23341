// HTTP Transport Port
// Abstraction over "POST a JSON body, get a parsed JSON body back"

use crate::domain::HeaderSet;
use async_trait::async_trait;
use serde_json::Value;
use std::error::Error as StdError;
use std::fmt;

/// Failure of the HTTP exchange itself
///
/// Wraps the adapter's own error; `Display` and `source()` are forwarded
/// so callers see it unaltered.
#[derive(Debug)]
pub struct TransportError(Box<dyn StdError + Send + Sync + 'static>);

impl TransportError {
    pub fn new<E>(error: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        Self(error.into())
    }

    pub fn get_ref(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.0.as_ref()
    }

    /// Access the adapter error as its concrete type
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.0.downcast_ref::<E>()
    }

    pub fn into_inner(self) -> Box<dyn StdError + Send + Sync + 'static> {
        self.0
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl StdError for TransportError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

/// HTTP Transport trait
///
/// Implementations:
/// - ReqwestTransport (infra-http): real network exchange
/// - MockTransport (below): records calls, replies with canned bodies
///
/// Implementations must send `body` as standard JSON text and treat header
/// names case-insensitively.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// POST `body` to `url` with `headers`, returning the parsed reply body
    ///
    /// # Errors
    /// - TransportError on connection, protocol or decode failure
    async fn post(&self, url: &str, body: &Value, headers: &HeaderSet)
        -> Result<Value, TransportError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// One recorded `post` call
    #[derive(Debug, Clone)]
    pub struct RecordedCall {
        pub url: String,
        pub body: Value,
        pub headers: HeaderSet,
    }

    /// Mock transport behavior
    #[derive(Debug, Clone)]
    pub enum MockBehavior {
        /// Reply with this JSON body
        Reply(Value),
        /// Fail the exchange with this message
        Fail(String),
    }

    /// Mock HTTP transport for testing
    #[derive(Clone)]
    pub struct MockTransport {
        behavior: Arc<Mutex<MockBehavior>>,
        calls: Arc<Mutex<Vec<RecordedCall>>>,
    }

    impl MockTransport {
        pub fn new(behavior: MockBehavior) -> Self {
            Self {
                behavior: Arc::new(Mutex::new(behavior)),
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn replying(body: Value) -> Self {
            Self::new(MockBehavior::Reply(body))
        }

        pub fn failing(message: impl Into<String>) -> Self {
            Self::new(MockBehavior::Fail(message.into()))
        }

        pub fn set_behavior(&self, behavior: MockBehavior) {
            *self.behavior.lock().unwrap() = behavior;
        }

        pub fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        pub fn last_call(&self) -> Option<RecordedCall> {
            self.calls.lock().unwrap().last().cloned()
        }
    }

    #[async_trait]
    impl HttpTransport for MockTransport {
        async fn post(
            &self,
            url: &str,
            body: &Value,
            headers: &HeaderSet,
        ) -> Result<Value, TransportError> {
            self.calls.lock().unwrap().push(RecordedCall {
                url: url.to_string(),
                body: body.clone(),
                headers: headers.clone(),
            });

            let behavior = self.behavior.lock().unwrap().clone();

            match behavior {
                MockBehavior::Reply(value) => Ok(value),
                MockBehavior::Fail(msg) => Err(TransportError::new(msg)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_transport_error_is_transparent() {
        let err = TransportError::new(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            "connect ECONNREFUSED 127.0.0.1:1234",
        ));

        assert_eq!(err.to_string(), "connect ECONNREFUSED 127.0.0.1:1234");
        let inner = err.downcast_ref::<io::Error>().unwrap();
        assert_eq!(inner.kind(), io::ErrorKind::ConnectionRefused);
    }

    #[test]
    fn test_transport_error_from_string() {
        let err = TransportError::new("socket hang up");
        assert_eq!(err.to_string(), "socket hang up");
    }
}
