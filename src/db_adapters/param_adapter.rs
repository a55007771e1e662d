use std::future::Future;

use sea_orm::{
    sqlx::error::Error::Database, ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DbConn,
    DbErr, EntityTrait, IntoActiveModel, Order, QueryFilter, QueryOrder, QuerySelect,
    RuntimeErr::SqlxError, Select, Set, TransactionTrait,
};

use entities::{
    param::{ActiveModel, Column, Entity, Model, OptionValues},
    tag,
};

use crate::{flatten_transaction_err, CustomDbErr};

#[derive(Clone)]
pub struct ParamAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> ParamAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait ParamFilter {
    fn filter_eq_tag_id(self, tag_id: i32) -> Self;
}

impl ParamFilter for ParamAdapter<'_> {
    fn filter_eq_tag_id(mut self, tag_id: i32) -> Self {
        self.query = self.query.filter(Column::TagId.eq(tag_id));
        self
    }
}

pub trait ParamOrder {
    fn order_by_id(self, order: Order) -> Self;
}

impl ParamOrder for ParamAdapter<'_> {
    fn order_by_id(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::Id, order);
        self
    }
}

pub trait ParamPaginate {
    fn paginate(self, offset: u64, limit: u64) -> Self;
}

impl ParamPaginate for ParamAdapter<'_> {
    fn paginate(mut self, offset: u64, limit: u64) -> Self {
        self.query = self.query.offset(offset).limit(limit);
        self
    }
}

pub trait ParamQuery {
    fn get_all(self) -> impl Future<Output = Result<Vec<Model>, DbErr>>;
    fn get_by_id(self, id: i32) -> impl Future<Output = Result<Option<Model>, DbErr>>;
}

impl ParamQuery for ParamAdapter<'_> {
    async fn get_all(self) -> Result<Vec<Model>, DbErr> {
        self.query.all(self.db).await
    }

    async fn get_by_id(self, id: i32) -> Result<Option<Model>, DbErr> {
        self.query.filter(Column::Id.eq(id)).one(self.db).await
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateParamParams {
    pub db_column: String,
    pub display_name: String,
    pub option_value: Vec<String>,
    pub field_type: String,
    pub value_type: String,
    pub api_param: bool,
}

impl CreateParamParams {
    pub(crate) fn into_active_model_for(self, tag_id: i32) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            tag_id: Set(tag_id),
            db_column: Set(self.db_column),
            display_name: Set(self.display_name),
            option_value: Set(OptionValues(self.option_value)),
            field_type: Set(self.field_type),
            value_type: Set(self.value_type),
            api_param: Set(self.api_param),
        }
    }
}

/// `None` fields are left as stored.
#[derive(Debug, Clone, Default)]
pub struct UpdateParamParams {
    pub db_column: Option<String>,
    pub display_name: Option<String>,
    pub option_value: Option<Vec<String>>,
    pub field_type: Option<String>,
    pub value_type: Option<String>,
    pub api_param: Option<bool>,
}

pub trait ParamMutation {
    fn create_for_tag(
        self,
        tag_id: i32,
        params: CreateParamParams,
    ) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn partial_update(
        self,
        id: i32,
        params: UpdateParamParams,
    ) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn delete_by_id(self, id: i32) -> impl Future<Output = Result<bool, DbErr>>;
}

impl ParamMutation for ParamAdapter<'_> {
    /// Returns `None` when the owning tag does not exist.
    async fn create_for_tag(
        self,
        tag_id: i32,
        params: CreateParamParams,
    ) -> Result<Option<Model>, DbErr> {
        self.db
            .transaction::<_, Option<Model>, DbErr>(|txn| {
                Box::pin(async move {
                    if tag::Entity::find_by_id(tag_id).one(txn).await?.is_none() {
                        return Ok(None);
                    }
                    params
                        .into_active_model_for(tag_id)
                        .insert(txn)
                        .await
                        .map(Some)
                })
            })
            .await
            .map_err(flatten_transaction_err)
            .map_err(|e| match &e {
                DbErr::Query(SqlxError(Database(err))) | DbErr::Exec(SqlxError(Database(err))) => {
                    match err.constraint() {
                        Some("fk-params-tag_id") => {
                            DbErr::Custom(CustomDbErr::NotFound.to_string())
                        }
                        _ => e,
                    }
                }
                _ => e,
            })
    }

    async fn partial_update(
        self,
        id: i32,
        params: UpdateParamParams,
    ) -> Result<Option<Model>, DbErr> {
        self.db
            .transaction::<_, Option<Model>, DbErr>(|txn| {
                Box::pin(async move {
                    let param = match Entity::find_by_id(id).one(txn).await? {
                        Some(param) => param,
                        None => return Ok(None),
                    };

                    let mut active_param = param.clone().into_active_model();
                    if let Some(db_column) = params.db_column {
                        active_param.db_column = Set(db_column);
                    }
                    if let Some(display_name) = params.display_name {
                        active_param.display_name = Set(display_name);
                    }
                    if let Some(option_value) = params.option_value {
                        active_param.option_value = Set(OptionValues(option_value));
                    }
                    if let Some(field_type) = params.field_type {
                        active_param.field_type = Set(field_type);
                    }
                    if let Some(value_type) = params.value_type {
                        active_param.value_type = Set(value_type);
                    }
                    if let Some(api_param) = params.api_param {
                        active_param.api_param = Set(api_param);
                    }

                    if !active_param.is_changed() {
                        return Ok(Some(param));
                    }
                    active_param.update(txn).await.map(Some)
                })
            })
            .await
            .map_err(flatten_transaction_err)
    }

    async fn delete_by_id(self, id: i32) -> Result<bool, DbErr> {
        Entity::delete_by_id(id)
            .exec(self.db)
            .await
            .map(|res| res.rows_affected > 0)
    }
}
