use serde::{Deserialize, Serialize};

/// List-view row for an animal: the fields the listing endpoint exposes,
/// with the first related photo already resolved by the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalSummary {
    pub id: i32,
    pub nombre_comun: String,
    pub nombre_cientifico: String,
    pub estado: Option<String>,
    pub categoria: i32,
    pub categoria_nombre: String,
    pub foto_principal: Option<String>,
}

/// List-view row for a plant. Flora has no category dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantSummary {
    pub id: i32,
    pub nombre_comun: String,
    pub nombre_cientifico: String,
    pub estado: Option<String>,
    pub foto_principal: Option<String>,
}

impl AnimalSummary {
    /// Human-readable status; the stored value is already display-ready.
    pub fn estado_display(&self) -> &str {
        self.estado.as_deref().unwrap_or("")
    }
}

impl PlantSummary {
    pub fn estado_display(&self) -> &str {
        self.estado.as_deref().unwrap_or("")
    }
}
