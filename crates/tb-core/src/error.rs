use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Part has no retailer listings")]
    EmptyListings,

    #[error("Invalid price {price} from retailer {retailer}")]
    InvalidPrice { retailer: String, price: f64 },

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
