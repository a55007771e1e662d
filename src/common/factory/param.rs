use entities::param::{self, OptionValues};
use sea_orm::{ActiveValue::NotSet, Set};

pub fn param(tag_id: i32) -> param::ActiveModel {
    param::ActiveModel {
        id: NotSet,
        tag_id: Set(tag_id),
        db_column: Set("column".to_string()),
        display_name: Set("Column".to_string()),
        option_value: Set(OptionValues::default()),
        field_type: Set("text".to_string()),
        value_type: Set("string".to_string()),
        api_param: Set(false),
    }
}

pub trait ParamFactory {
    fn db_column(self, db_column: String) -> param::ActiveModel;
    fn display_name(self, display_name: String) -> param::ActiveModel;
    fn option_value(self, option_value: Vec<String>) -> param::ActiveModel;
    fn field_type(self, field_type: String) -> param::ActiveModel;
    fn api_param(self, api_param: bool) -> param::ActiveModel;
}

impl ParamFactory for param::ActiveModel {
    fn db_column(mut self, db_column: String) -> param::ActiveModel {
        self.db_column = Set(db_column);
        self
    }

    fn display_name(mut self, display_name: String) -> param::ActiveModel {
        self.display_name = Set(display_name);
        self
    }

    fn option_value(mut self, option_value: Vec<String>) -> param::ActiveModel {
        self.option_value = Set(OptionValues(option_value));
        self
    }

    fn field_type(mut self, field_type: String) -> param::ActiveModel {
        self.field_type = Set(field_type);
        self
    }

    fn api_param(mut self, api_param: bool) -> param::ActiveModel {
        self.api_param = Set(api_param);
        self
    }
}
