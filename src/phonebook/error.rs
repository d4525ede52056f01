use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("Wrong {field} format. {expected}")]
    Format {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Contact already exists: {0}")]
    DuplicateName(String),

    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    #[error("Phone {phone} not found for contact {name}")]
    PhoneNotFound { name: String, phone: String },

    #[error("No birthday set for contact {0}")]
    NoBirthday(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, BookError>;
