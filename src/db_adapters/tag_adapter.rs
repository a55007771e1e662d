use std::{collections::HashMap, future::Future};

use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DbConn, DbErr, EntityTrait,
    IntoActiveModel, ModelTrait, Order, QueryFilter, QueryOrder, QuerySelect, Select, Set,
    TransactionTrait,
};

use entities::{
    param,
    tag::{ActiveModel, Column, Entity, Model},
};

use crate::{flatten_transaction_err, param_adapter::CreateParamParams};

#[derive(Clone)]
pub struct TagAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> TagAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait TagOrder {
    fn order_by_id(self, order: Order) -> Self;
}

impl TagOrder for TagAdapter<'_> {
    fn order_by_id(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::Id, order);
        self
    }
}

pub trait TagPaginate {
    fn paginate(self, offset: u64, limit: u64) -> Self;
}

impl TagPaginate for TagAdapter<'_> {
    fn paginate(mut self, offset: u64, limit: u64) -> Self {
        self.query = self.query.offset(offset).limit(limit);
        self
    }
}

pub type TagWithParams = (Model, Vec<param::Model>);

pub trait TagQuery {
    fn get_by_id(self, id: i32) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_with_params(
        self,
        id: i32,
    ) -> impl Future<Output = Result<Option<TagWithParams>, DbErr>>;
    fn get_all_with_params(self) -> impl Future<Output = Result<Vec<TagWithParams>, DbErr>>;
}

impl TagQuery for TagAdapter<'_> {
    async fn get_by_id(self, id: i32) -> Result<Option<Model>, DbErr> {
        self.query.filter(Column::Id.eq(id)).one(self.db).await
    }

    /// Params come back in ascending id order.
    async fn get_with_params(self, id: i32) -> Result<Option<TagWithParams>, DbErr> {
        let tag = match self.query.filter(Column::Id.eq(id)).one(self.db).await? {
            Some(tag) => tag,
            None => return Ok(None),
        };
        let params = tag
            .find_related(param::Entity)
            .order_by_asc(param::Column::Id)
            .all(self.db)
            .await?;
        Ok(Some((tag, params)))
    }

    async fn get_all_with_params(self) -> Result<Vec<TagWithParams>, DbErr> {
        let tags = self.query.all(self.db).await?;
        if tags.is_empty() {
            return Ok(vec![]);
        }

        let tag_ids = tags.iter().map(|tag| tag.id).collect::<Vec<_>>();
        let params = param::Entity::find()
            .filter(param::Column::TagId.is_in(tag_ids))
            .order_by_asc(param::Column::Id)
            .all(self.db)
            .await?;

        let mut params_by_tag_id: HashMap<i32, Vec<param::Model>> = HashMap::new();
        for param in params {
            params_by_tag_id.entry(param.tag_id).or_default().push(param);
        }
        Ok(tags
            .into_iter()
            .map(|tag| {
                let params = params_by_tag_id.remove(&tag.id).unwrap_or_default();
                (tag, params)
            })
            .collect())
    }
}

#[derive(Debug, Clone)]
pub struct CreateTagParams {
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
    pub params: Vec<CreateParamParams>,
}

/// `None` fields are left as stored. `params: Some(_)` replaces the whole
/// parameter set of the tag.
#[derive(Debug, Clone, Default)]
pub struct UpdateTagParams {
    pub tag: Option<String>,
    pub query: Option<String>,
    pub comment: Option<String>,
    pub dynamic_param_source: Option<String>,
    pub api_active: Option<bool>,
    pub api_endpoint: Option<String>,
    pub api_name: Option<String>,
    pub api_at_get_data: Option<bool>,
    pub api_message: Option<String>,
    pub query_active: Option<bool>,
    pub tag_active: Option<bool>,
    pub params: Option<Vec<CreateParamParams>>,
}

pub trait TagMutation {
    fn create_with_params(
        self,
        params: CreateTagParams,
    ) -> impl Future<Output = Result<Model, DbErr>>;
    fn partial_update_with_params(
        self,
        id: i32,
        params: UpdateTagParams,
    ) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn delete_by_id(self, id: i32) -> impl Future<Output = Result<bool, DbErr>>;
}

impl TagMutation for TagAdapter<'_> {
    async fn create_with_params(self, params: CreateTagParams) -> Result<Model, DbErr> {
        self.db
            .transaction::<_, Model, DbErr>(|txn| {
                Box::pin(async move {
                    let tag = ActiveModel {
                        id: NotSet,
                        tag: Set(params.tag),
                        query: Set(params.query),
                        comment: Set(params.comment),
                        dynamic_param_source: Set(params.dynamic_param_source),
                        api_active: Set(params.api_active),
                        api_endpoint: Set(params.api_endpoint),
                        api_name: Set(params.api_name),
                        api_at_get_data: Set(params.api_at_get_data),
                        api_message: Set(params.api_message),
                        query_active: Set(params.query_active),
                        tag_active: Set(params.tag_active),
                    }
                    .insert(txn)
                    .await?;

                    let params_to_create = params
                        .params
                        .into_iter()
                        .map(|param| param.into_active_model_for(tag.id));
                    param::Entity::insert_many(params_to_create)
                        .on_empty_do_nothing()
                        .exec(txn)
                        .await?;

                    Ok(tag)
                })
            })
            .await
            .map_err(flatten_transaction_err)
    }

    async fn partial_update_with_params(
        self,
        id: i32,
        params: UpdateTagParams,
    ) -> Result<Option<Model>, DbErr> {
        self.db
            .transaction::<_, Option<Model>, DbErr>(|txn| {
                Box::pin(async move {
                    let tag = match Entity::find_by_id(id).one(txn).await? {
                        Some(tag) => tag,
                        None => return Ok(None),
                    };

                    let mut active_tag = tag.clone().into_active_model();
                    if let Some(name) = params.tag {
                        active_tag.tag = Set(name);
                    }
                    if let Some(query) = params.query {
                        active_tag.query = Set(query);
                    }
                    if let Some(comment) = params.comment {
                        active_tag.comment = Set(comment);
                    }
                    if let Some(dynamic_param_source) = params.dynamic_param_source {
                        active_tag.dynamic_param_source = Set(dynamic_param_source);
                    }
                    if let Some(api_active) = params.api_active {
                        active_tag.api_active = Set(api_active);
                    }
                    if let Some(api_endpoint) = params.api_endpoint {
                        active_tag.api_endpoint = Set(api_endpoint);
                    }
                    if let Some(api_name) = params.api_name {
                        active_tag.api_name = Set(api_name);
                    }
                    if let Some(api_at_get_data) = params.api_at_get_data {
                        active_tag.api_at_get_data = Set(api_at_get_data);
                    }
                    if let Some(api_message) = params.api_message {
                        active_tag.api_message = Set(api_message);
                    }
                    if let Some(query_active) = params.query_active {
                        active_tag.query_active = Set(query_active);
                    }
                    if let Some(tag_active) = params.tag_active {
                        active_tag.tag_active = Set(tag_active);
                    }

                    let tag = match active_tag.is_changed() {
                        true => active_tag.update(txn).await?,
                        false => tag,
                    };

                    if let Some(new_params) = params.params {
                        param::Entity::delete_many()
                            .filter(param::Column::TagId.eq(tag.id))
                            .exec(txn)
                            .await?;
                        let params_to_create = new_params
                            .into_iter()
                            .map(|param| param.into_active_model_for(tag.id));
                        param::Entity::insert_many(params_to_create)
                            .on_empty_do_nothing()
                            .exec(txn)
                            .await?;
                    }

                    Ok(Some(tag))
                })
            })
            .await
            .map_err(flatten_transaction_err)
    }

    /// Owned params go with the tag through the foreign key cascade.
    async fn delete_by_id(self, id: i32) -> Result<bool, DbErr> {
        Entity::delete_by_id(id)
            .exec(self.db)
            .await
            .map(|res| res.rows_affected > 0)
    }
}
