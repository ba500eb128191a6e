mod prompts;

use serde::Serialize;
use std::fmt;

/// Kind of document an upload is expected to show. Chosen by the route, never
/// by the caller's payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    DriverLicence,
    CarPlate,
    CarteGris,
}

impl DocumentType {
    pub const ALL: [DocumentType; 3] = [Self::DriverLicence, Self::CarPlate, Self::CarteGris];

    pub fn prompt(self) -> &'static str {
        match self {
            Self::DriverLicence => prompts::DRIVER_LICENCE,
            Self::CarPlate => prompts::CAR_PLATE,
            Self::CarteGris => prompts::CARTE_GRIS,
        }
    }

    /// Name used both as the route path and as `document_type` in responses.
    pub fn slug(self) -> &'static str {
        match self {
            Self::DriverLicence => "driver_licence",
            Self::CarPlate => "car_plate",
            Self::CarteGris => "carte_gris",
        }
    }

    /// Key under which the model's reply is returned.
    pub fn result_key(self) -> &'static str {
        match self {
            Self::CarPlate => "plate_number",
            Self::DriverLicence | Self::CarteGris => "extracted_data",
        }
    }

    pub fn route(self) -> String {
        format!("/{}", self.slug())
    }

    /// Line shown for this route on the index page.
    pub fn description(self) -> &'static str {
        match self {
            Self::DriverLicence => "POST - Process driving licence (upload image)",
            Self::CarPlate => "POST - Extract car plate number (upload image)",
            Self::CarteGris => "POST - Process carte grise document (upload image)",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
