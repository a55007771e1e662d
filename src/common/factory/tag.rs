use entities::tag;
use sea_orm::{ActiveValue::NotSet, Set};

pub fn tag() -> tag::ActiveModel {
    tag::ActiveModel {
        id: NotSet,
        tag: Set("tag".to_string()),
        query: Set("".to_string()),
        comment: Set("".to_string()),
        dynamic_param_source: Set("".to_string()),
        api_active: Set(false),
        api_endpoint: Set("".to_string()),
        api_name: Set("".to_string()),
        api_at_get_data: Set(false),
        api_message: Set("".to_string()),
        query_active: Set(true),
        tag_active: Set(true),
    }
}

pub trait TagFactory {
    fn tag(self, tag: String) -> tag::ActiveModel;
    fn query(self, query: String) -> tag::ActiveModel;
    fn comment(self, comment: String) -> tag::ActiveModel;
    fn api_active(self, api_active: bool) -> tag::ActiveModel;
    fn api_endpoint(self, api_endpoint: String) -> tag::ActiveModel;
    fn tag_active(self, tag_active: bool) -> tag::ActiveModel;
}

impl TagFactory for tag::ActiveModel {
    fn tag(mut self, tag: String) -> tag::ActiveModel {
        self.tag = Set(tag);
        self
    }

    fn query(mut self, query: String) -> tag::ActiveModel {
        self.query = Set(query);
        self
    }

    fn comment(mut self, comment: String) -> tag::ActiveModel {
        self.comment = Set(comment);
        self
    }

    fn api_active(mut self, api_active: bool) -> tag::ActiveModel {
        self.api_active = Set(api_active);
        self
    }

    fn api_endpoint(mut self, api_endpoint: String) -> tag::ActiveModel {
        self.api_endpoint = Set(api_endpoint);
        self
    }

    fn tag_active(mut self, tag_active: bool) -> tag::ActiveModel {
        self.tag_active = Set(tag_active);
        self
    }
}
