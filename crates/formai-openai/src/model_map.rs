use std::borrow::Cow;

use formai_core::model::Model;

pub(crate) fn map_model(model: &Model) -> Option<Cow<'static, str>> {
    match model {
        Model::OpenAi(openai_model) => Some(openai_model.as_str().into()),
        Model::Custom(custom) if !custom.is_empty() => Some(custom.clone().into()),
        Model::Custom(_) => None,
    }
}
