#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use formai_core::{
    error::FormAiError,
    generic::{GenericChatCompletionResponse, GenericMessage, GenericRole},
    provider::{ChatCompleteFuture, ChatCompleteParameters, ChatCompletionProvider},
};
use formai_proxy::{FieldConfigService, GenerationSettings, InMemoryCache, router};
use serde_json::Value;

pub const CEP_JSON: &str = r#"{"type":"mask-text","placeholder":"99999-999","mask":"99999-999","validation":{"required":true,"regex":"^\\d{5}-\\d{3}$","minLength":9,"maxLength":9}}"#;

pub const EMAIL_JSON: &str = r#"{"type":"text","placeholder":"email@example.com","mask":null,"validation":{"required":true,"regex":"^[^@\\s]+@[^@\\s]+\\.[^@\\s]+$","minLength":null,"maxLength":null}}"#;

#[derive(Debug, Clone)]
pub enum Reply {
    Content(String),
    Empty,
    Fail,
}

/// What the service sent on the last call.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub messages: Vec<GenericMessage>,
    pub temperature: Option<f64>,
    pub response_format: Option<Value>,
}

/// Scripted backend. Clones share the call counter and the recording.
#[derive(Debug, Clone)]
pub struct MockBackend {
    reply: Reply,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
    last: Arc<Mutex<Option<Recorded>>>,
}

impl MockBackend {
    pub fn replying(content: &str) -> Self {
        Self::with_reply(Reply::Content(content.to_owned()))
    }

    pub fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            delay: None,
            calls: Arc::new(AtomicUsize::new(0)),
            last: Arc::new(Mutex::new(None)),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last(&self) -> Option<Recorded> {
        self.last.lock().unwrap().clone()
    }
}

impl ChatCompletionProvider for MockBackend {
    type Message = GenericMessage;

    fn chat_complete<'p, M>(&'p self, params: ChatCompleteParameters<M>) -> ChatCompleteFuture<'p>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        let recorded = Recorded {
            messages: params.messages.iter().cloned().map(Into::into).collect(),
            temperature: params.temperature,
            response_format: params.response_format.clone(),
        };

        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some(recorded);

            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }

            let content = match &self.reply {
                Reply::Content(content) => content.clone(),
                Reply::Empty => String::new(),
                Reply::Fail => return Err(FormAiError::Backend("upstream unavailable".into())),
            };

            Ok(GenericChatCompletionResponse {
                content: GenericMessage::new(content, GenericRole::Assistant),
                usage: None,
            })
        })
    }
}

pub fn service(backend: Option<MockBackend>) -> FieldConfigService<MockBackend> {
    FieldConfigService::new(
        backend,
        Arc::new(InMemoryCache::new()),
        GenerationSettings::default(),
    )
}

pub struct TestServer {
    pub addr: SocketAddr,
    pub base_url: String,
}

impl TestServer {
    pub async fn new<B>(service: FieldConfigService<B>) -> Self
    where
        B: ChatCompletionProvider + 'static,
        GenericMessage: Into<B::Message>,
    {
        let app = router(Arc::new(service), "/api/generate");

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        TestServer { addr, base_url }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
