pub mod param_adapter;
pub mod tag_adapter;

use core::fmt;
pub use sea_orm::Order;
use sea_orm::{DbErr, TransactionError};

pub enum CustomDbErr {
    NotFound,
    Unimplemented,
}

impl fmt::Display for CustomDbErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomDbErr::NotFound => write!(f, "NotFound"),
            CustomDbErr::Unimplemented => write!(f, "Unimplemented"),
        }
    }
}

impl std::str::FromStr for CustomDbErr {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NotFound" => Ok(CustomDbErr::NotFound),
            _ => Ok(CustomDbErr::Unimplemented),
        }
    }
}

impl From<&String> for CustomDbErr {
    fn from(value: &String) -> Self {
        value.parse().unwrap_or(CustomDbErr::Unimplemented)
    }
}

/// Both arms already carry a `DbErr`; callers only care which one.
pub(crate) fn flatten_transaction_err(e: TransactionError<DbErr>) -> DbErr {
    match e {
        TransactionError::Connection(e) => e,
        TransactionError::Transaction(e) => e,
    }
}
