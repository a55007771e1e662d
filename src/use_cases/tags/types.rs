use db_adapters::tag_adapter::{CreateTagParams, TagWithParams, UpdateTagParams};
use serde::{Deserialize, Serialize};

use crate::{
    params::types::{ParamCreateRequest, ParamVisible},
    types::deserialize_present,
    validation::{
        validate_optional_text_len, validate_tag_name, validate_text_len, MAX_SHORT_TEXT_LEN,
    },
    UseCaseError,
};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct TagVisible {
    pub id: i32,
    pub tag: String,
    pub query: String,
    pub comment: String,
    pub dynamic_param_source: String,
    pub api_active: bool,
    pub api_endpoint: String,
    pub api_name: String,
    pub api_at_get_data: bool,
    pub api_message: String,
    pub query_active: bool,
    pub tag_active: bool,
    pub params: Vec<ParamVisible>,
}

impl From<TagWithParams> for TagVisible {
    fn from((tag, params): TagWithParams) -> Self {
        Self {
            id: tag.id,
            tag: tag.tag,
            query: tag.query,
            comment: tag.comment,
            dynamic_param_source: tag.dynamic_param_source,
            api_active: tag.api_active,
            api_endpoint: tag.api_endpoint,
            api_name: tag.api_name,
            api_at_get_data: tag.api_at_get_data,
            api_message: tag.api_message,
            query_active: tag.query_active,
            tag_active: tag.tag_active,
            params: params.into_iter().map(ParamVisible::from).collect(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TagCreateRequest {
    pub tag: String,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub dynamic_param_source: String,
    #[serde(default)]
    pub api_active: bool,
    #[serde(default)]
    pub api_endpoint: String,
    #[serde(default)]
    pub api_name: String,
    #[serde(default)]
    pub api_at_get_data: bool,
    #[serde(default)]
    pub api_message: String,
    #[serde(default = "default_true")]
    pub query_active: bool,
    #[serde(default = "default_true")]
    pub tag_active: bool,
    #[serde(default)]
    pub params: Vec<ParamCreateRequest>,
}

impl TagCreateRequest {
    /// A request carrying only a name, every other field at its default.
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            query: "".to_string(),
            comment: "".to_string(),
            dynamic_param_source: "".to_string(),
            api_active: false,
            api_endpoint: "".to_string(),
            api_name: "".to_string(),
            api_at_get_data: false,
            api_message: "".to_string(),
            query_active: true,
            tag_active: true,
            params: vec![],
        }
    }

    pub(crate) fn validate(&self) -> Result<(), UseCaseError> {
        validate_tag_name(&self.tag)?;
        validate_text_len(
            &self.dynamic_param_source,
            "dynamic_param_source",
            0,
            MAX_SHORT_TEXT_LEN,
        )?;
        validate_text_len(&self.api_endpoint, "api_endpoint", 0, MAX_SHORT_TEXT_LEN)?;
        validate_text_len(&self.api_name, "api_name", 0, MAX_SHORT_TEXT_LEN)?;
        self.params.iter().try_for_each(ParamCreateRequest::validate)
    }
}

impl From<TagCreateRequest> for CreateTagParams {
    fn from(value: TagCreateRequest) -> Self {
        Self {
            tag: value.tag,
            query: value.query,
            comment: value.comment,
            dynamic_param_source: value.dynamic_param_source,
            api_active: value.api_active,
            api_endpoint: value.api_endpoint,
            api_name: value.api_name,
            api_at_get_data: value.api_at_get_data,
            api_message: value.api_message,
            query_active: value.query_active,
            tag_active: value.tag_active,
            params: value.params.into_iter().map(Into::into).collect(),
        }
    }
}

/// Absent fields are left untouched; `null` is not accepted. `params`, when
/// present, replaces the whole parameter set.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct TagUpdateRequest {
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub tag: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub query: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub comment: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub dynamic_param_source: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub api_active: Option<bool>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub api_endpoint: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub api_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub api_at_get_data: Option<bool>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub api_message: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub query_active: Option<bool>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub tag_active: Option<bool>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub params: Option<Vec<ParamCreateRequest>>,
}

impl TagUpdateRequest {
    pub(crate) fn validate(&self) -> Result<(), UseCaseError> {
        if let Some(tag) = &self.tag {
            validate_tag_name(tag)?;
        }
        validate_optional_text_len(
            &self.dynamic_param_source,
            "dynamic_param_source",
            0,
            MAX_SHORT_TEXT_LEN,
        )?;
        validate_optional_text_len(&self.api_endpoint, "api_endpoint", 0, MAX_SHORT_TEXT_LEN)?;
        validate_optional_text_len(&self.api_name, "api_name", 0, MAX_SHORT_TEXT_LEN)?;
        match &self.params {
            Some(params) => params.iter().try_for_each(ParamCreateRequest::validate),
            None => Ok(()),
        }
    }
}

impl From<TagUpdateRequest> for UpdateTagParams {
    fn from(value: TagUpdateRequest) -> Self {
        Self {
            tag: value.tag,
            query: value.query,
            comment: value.comment,
            dynamic_param_source: value.dynamic_param_source,
            api_active: value.api_active,
            api_endpoint: value.api_endpoint,
            api_name: value.api_name,
            api_at_get_data: value.api_at_get_data,
            api_message: value.api_message,
            query_active: value.query_active,
            tag_active: value.tag_active,
            params: value
                .params
                .map(|params| params.into_iter().map(Into::into).collect()),
        }
    }
}
