use crate::domain::common::entities::app_errors::CoreError;

/// String-keyed persistence medium for serialized values, the local-storage
/// abstraction the saved items store sits on.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, CoreError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), CoreError>;
}
