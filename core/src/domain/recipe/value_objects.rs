use base64::{Engine as _, engine::general_purpose};

use crate::domain::{common::entities::app_errors::CoreError, recipe::entities::PlanChoice};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl Photo {
    /// Parses `data:<mimetype>;base64,<encoded>`.
    pub fn from_data_uri(uri: &str) -> Result<Self, CoreError> {
        let invalid = || CoreError::InvalidInput("Photo must be a base64 data URI".to_string());

        let rest = uri.trim().strip_prefix("data:").ok_or_else(invalid)?;
        let (header, encoded) = rest.split_once(',').ok_or_else(invalid)?;
        let mime_type = header.strip_suffix(";base64").ok_or_else(invalid)?;

        if !mime_type.starts_with("image/") {
            return Err(CoreError::InvalidInput(format!(
                "Photo must be an image, got {mime_type:?}"
            )));
        }

        let data = general_purpose::STANDARD
            .decode(encoded.trim())
            .map_err(|_| invalid())?;

        if data.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            mime_type: mime_type.to_string(),
            data,
        })
    }
}

/// Everything the generator accepts; all fields are optional on the wire and
/// checked by the service.
#[derive(Debug, Clone, Default)]
pub struct GenerateContentInput {
    pub ingredients_text: Option<String>,
    pub allergy_list: Option<String>,
    pub photo: Option<Photo>,
    pub plan_choice: Option<PlanChoice>,
}

impl GenerateContentInput {
    pub fn ingredients(&self) -> Option<&str> {
        non_blank(self.ingredients_text.as_deref())
    }

    pub fn allergies(&self) -> Option<&str> {
        non_blank(self.allergy_list.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
