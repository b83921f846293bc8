//! Provider-scoped byte transport.
//!
//! Fetching is expressed as a capability: the pipeline hands a URL and an
//! opaque [`ProviderHandle`] to a [`Transport`] and gets back a byte
//! stream. Per-source concerns — auth headers, referers, rate limiting,
//! retries — belong to the transport implementation and the registry that
//! mints handles; the crop pipeline never learns source identities.
//!
//! [`HttpTransport`] is the shipped implementation: a shared `ureq` agent
//! with explicit connect/read timeouts, applying whatever headers the
//! handle carries.

use std::io::Read;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("request failed: {0}")]
    Request(String),
}

/// Blocking byte stream returned by a fetch. The caller owns the stream and
/// releases the underlying connection by dropping it.
pub type ByteStream = Box<dyn Read>;

/// Identifies the upstream source a URL belongs to, plus whatever request
/// decoration that source needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderHandle {
    pub name: String,
    /// Header name/value pairs applied to every request for this source.
    pub headers: Vec<(String, String)>,
}

impl ProviderHandle {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            headers: Vec::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Trait for byte-fetch collaborators.
pub trait Transport {
    /// Fetch `url` on behalf of `provider`, blocking until the response
    /// headers arrive. Body bytes are streamed through the returned reader.
    fn fetch(&self, url: &str, provider: &ProviderHandle) -> Result<ByteStream, TransportError>;
}

/// Trait for provider registries: maps a catalog scope to the handle its
/// fetches must carry.
pub trait ProviderRegistry {
    fn provider(&self, scope: &str) -> ProviderHandle;
}

/// HTTP transport backed by a shared `ureq` agent.
pub struct HttpTransport {
    agent: ureq::Agent,
}

impl HttpTransport {
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(5))
            .timeout_read(Duration::from_secs(30))
            .build();
        Self { agent }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn fetch(&self, url: &str, provider: &ProviderHandle) -> Result<ByteStream, TransportError> {
        let mut request = self.agent.get(url);
        for (name, value) in &provider.headers {
            request = request.set(name, value);
        }

        log::debug!("fetching {url} via provider {}", provider.name);
        let response = request
            .call()
            .map_err(|e| TransportError::Request(e.to_string()))?;
        Ok(Box::new(response.into_reader()))
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Mock transport serving queued payloads and recording every fetch.
    #[derive(Default)]
    pub struct MockTransport {
        pub payloads: Mutex<Vec<Vec<u8>>>,
        pub requests: Mutex<Vec<(String, String)>>,
        pub fail_with: Option<String>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_payload(payload: Vec<u8>) -> Self {
            Self {
                payloads: Mutex::new(vec![payload]),
                ..Self::default()
            }
        }

        pub fn failing(message: &str) -> Self {
            Self {
                fail_with: Some(message.to_string()),
                ..Self::default()
            }
        }

        pub fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    impl Transport for MockTransport {
        fn fetch(
            &self,
            url: &str,
            provider: &ProviderHandle,
        ) -> Result<ByteStream, TransportError> {
            self.requests
                .lock()
                .unwrap()
                .push((url.to_string(), provider.name.clone()));

            if let Some(message) = &self.fail_with {
                return Err(TransportError::Request(message.clone()));
            }
            let payload = self
                .payloads
                .lock()
                .unwrap()
                .pop()
                .ok_or_else(|| TransportError::Request("no mock payload".to_string()))?;
            Ok(Box::new(std::io::Cursor::new(payload)))
        }
    }

    /// Registry handing out one handle per scope.
    #[derive(Default)]
    pub struct MockRegistry {
        pub handles: HashMap<String, ProviderHandle>,
    }

    impl MockRegistry {
        pub fn single(scope: &str, handle: ProviderHandle) -> Self {
            Self {
                handles: HashMap::from([(scope.to_string(), handle)]),
            }
        }
    }

    impl ProviderRegistry for MockRegistry {
        fn provider(&self, scope: &str) -> ProviderHandle {
            self.handles.get(scope).cloned().unwrap_or_default()
        }
    }

    #[test]
    fn handle_builder_collects_headers() {
        let handle = ProviderHandle::named("example")
            .with_header("Referer", "https://example.org/")
            .with_header("User-Agent", "artcrop");

        assert_eq!(handle.name, "example");
        assert_eq!(handle.headers.len(), 2);
        assert_eq!(handle.headers[0].0, "Referer");
    }

    #[test]
    fn mock_transport_records_url_and_provider() {
        let transport = MockTransport::with_payload(b"bytes".to_vec());
        let handle = ProviderHandle::named("example");

        let mut stream = transport.fetch("https://img.example/x.jpg", &handle).unwrap();
        let mut buf = Vec::new();
        stream.read_to_end(&mut buf).unwrap();

        assert_eq!(buf, b"bytes");
        assert_eq!(
            transport.requests.lock().unwrap()[0],
            ("https://img.example/x.jpg".to_string(), "example".to_string())
        );
    }

    #[test]
    fn mock_transport_fails_when_drained() {
        let transport = MockTransport::new();
        let result = transport.fetch("https://img.example/x.jpg", &ProviderHandle::default());
        assert!(matches!(result, Err(TransportError::Request(_))));
    }

    #[test]
    fn http_transport_constructs_with_defaults() {
        let _ = HttpTransport::default();
    }
}
