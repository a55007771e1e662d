use db_adapters::param_adapter::{CreateParamParams, UpdateParamParams};
use entities::param;
use serde::{Deserialize, Serialize};

use crate::{
    types::deserialize_present,
    validation::{
        validate_optional_text_len, validate_text_len, MAX_DB_COLUMN_LEN, MAX_DISPLAY_NAME_LEN,
        MAX_TYPE_NAME_LEN,
    },
    UseCaseError,
};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ParamVisible {
    pub id: i32,
    pub tag_id: i32,
    pub db_column: String,
    pub display_name: String,
    pub option_value: Vec<String>,
    pub field_type: String,
    pub value_type: String,
    pub api_param: bool,
}

impl From<param::Model> for ParamVisible {
    fn from(value: param::Model) -> Self {
        Self {
            id: value.id,
            tag_id: value.tag_id,
            db_column: value.db_column,
            display_name: value.display_name,
            option_value: value.option_value.0,
            field_type: value.field_type,
            value_type: value.value_type,
            api_param: value.api_param,
        }
    }
}

fn default_field_type() -> String {
    "text".to_string()
}

fn default_value_type() -> String {
    "string".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ParamCreateRequest {
    pub db_column: String,
    pub display_name: String,
    #[serde(default)]
    pub option_value: Vec<String>,
    #[serde(default = "default_field_type")]
    pub field_type: String,
    #[serde(default = "default_value_type")]
    pub value_type: String,
    #[serde(default)]
    pub api_param: bool,
}

impl ParamCreateRequest {
    pub fn new(db_column: &str, display_name: &str) -> Self {
        Self {
            db_column: db_column.to_string(),
            display_name: display_name.to_string(),
            option_value: vec![],
            field_type: default_field_type(),
            value_type: default_value_type(),
            api_param: false,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), UseCaseError> {
        validate_text_len(&self.db_column, "db_column", 1, MAX_DB_COLUMN_LEN)?;
        validate_text_len(&self.display_name, "display_name", 1, MAX_DISPLAY_NAME_LEN)?;
        validate_text_len(&self.field_type, "field_type", 0, MAX_TYPE_NAME_LEN)?;
        validate_text_len(&self.value_type, "value_type", 0, MAX_TYPE_NAME_LEN)
    }
}

impl From<ParamCreateRequest> for CreateParamParams {
    fn from(value: ParamCreateRequest) -> Self {
        Self {
            db_column: value.db_column,
            display_name: value.display_name,
            option_value: value.option_value,
            field_type: value.field_type,
            value_type: value.value_type,
            api_param: value.api_param,
        }
    }
}

/// Absent fields are left untouched; `null` is not accepted.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ParamUpdateRequest {
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub db_column: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub display_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub option_value: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub field_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub value_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub api_param: Option<bool>,
}

impl ParamUpdateRequest {
    pub(crate) fn validate(&self) -> Result<(), UseCaseError> {
        validate_optional_text_len(&self.db_column, "db_column", 1, MAX_DB_COLUMN_LEN)?;
        validate_optional_text_len(&self.display_name, "display_name", 1, MAX_DISPLAY_NAME_LEN)?;
        validate_optional_text_len(&self.field_type, "field_type", 0, MAX_TYPE_NAME_LEN)?;
        validate_optional_text_len(&self.value_type, "value_type", 0, MAX_TYPE_NAME_LEN)
    }
}

impl From<ParamUpdateRequest> for UpdateParamParams {
    fn from(value: ParamUpdateRequest) -> Self {
        Self {
            db_column: value.db_column,
            display_name: value.display_name,
            option_value: value.option_value,
            field_type: value.field_type,
            value_type: value.value_type,
            api_param: value.api_param,
        }
    }
}
