use tracing::info;

use crate::{
    domain::{
        common::{LeftoverChefConfig, entities::app_errors::CoreError, services::Service},
        saved_item::services::SavedItemsStore,
    },
    infrastructure::{llm::GeminiLLMClient, storage::FileKeyValueStorage},
};

pub type LeftoverChefService = Service<GeminiLLMClient>;

pub type LeftoverChefStore = SavedItemsStore<FileKeyValueStorage>;

pub fn create_service(config: &LeftoverChefConfig) -> LeftoverChefService {
    let llm_client = GeminiLLMClient::with_base_url(
        config.llm.gemini_api_key.clone(),
        config.llm.gemini_model.clone(),
        config.llm.gemini_base_url.clone(),
    );

    info!(model = %config.llm.gemini_model, "LLM client configured");

    Service::new(llm_client)
}

pub fn create_saved_items_store(config: &LeftoverChefConfig) -> Result<LeftoverChefStore, CoreError> {
    let storage = FileKeyValueStorage::new(&config.storage.data_dir)?;

    info!(
        data_dir = %config.storage.data_dir,
        key = %config.storage.saved_items_key,
        "Saved items store opened"
    );

    Ok(SavedItemsStore::new(
        storage,
        config.storage.saved_items_key.clone(),
    ))
}
