use std::sync::Arc;

use formai_core::{
    error::Result,
    generic::{GenericChatCompletionResponse, GenericMessage, GenericUsageReport},
    provider::{ChatCompleteFuture, ChatCompleteParameters, ChatCompletionProvider},
};

use crate::{
    OpenAiAdapter,
    api_v1::{ChatCompletionMessage, ChatCompletionRequest, FinishReason},
    client::OpenAiClient,
    error::OpenAiError,
};

impl ChatCompletionProvider for OpenAiAdapter {
    type Message = ChatCompletionMessage;

    fn chat_complete<'p, M>(&'p self, params: ChatCompleteParameters<M>) -> ChatCompleteFuture<'p>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        let client = Arc::clone(&self.client);
        Box::pin(complete(client, params))
    }
}

async fn complete<M>(
    client: Arc<OpenAiClient>,
    params: ChatCompleteParameters<M>,
) -> Result<GenericChatCompletionResponse<GenericMessage>>
where
    M: Into<ChatCompletionMessage> + Clone,
{
    let request = ChatCompletionRequest::try_from(params)?;

    let mut response = client.chat_completion(request).await?;

    let usage_report = response.usage.map(|usage| GenericUsageReport {
        prompt_tokens: usage.prompt_tokens as i64,
        completion_tokens: usage.completion_tokens as i64,
        total_tokens: usage.total_tokens as i64,
    });

    if response.choices.is_empty() {
        return Err(OpenAiError::Format("response has no choices".into()).into());
    }
    let first_choice = response.choices.swap_remove(0);

    if let Some(refusal) = first_choice.message.refusal.as_deref() {
        return Err(OpenAiError::Format(format!("model refused: {refusal}")).into());
    }

    match &first_choice.finish_reason {
        None | Some(FinishReason::Stop) => Ok(GenericChatCompletionResponse {
            content: first_choice.message.into(),
            usage: usage_report,
        }),
        Some(other) => Err(OpenAiError::Format(format!(
            "unhandled finish reason on API: {other:?}"
        ))
        .into()),
    }
}
