use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::kind::Kind;

/// Unified carousel entry built from either a fauna or a flora photo.
///
/// Constructed per request and never persisted. `(kind, id)` identifies the
/// item; `especie_id` resolves against the species table selected by `kind`
/// and must not be compared across kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: i32,
    #[serde(rename = "tipo")]
    pub kind: Kind,
    pub nombre: String,
    pub url_foto: String,
    pub descripcion_foto: Option<String>,
    pub especie_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre_cientifico: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
}

/// Aggregate counters for the gallery/homepage, recomputed per request.
///
/// Only the four component counts are stored; the combined totals are
/// derived at serialization time so they can never drift from the parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryStatistics {
    pub total_animales: i64,
    pub total_plantas: i64,
    pub total_fotos_fauna: i64,
    pub total_fotos_flora: i64,
}

impl GalleryStatistics {
    pub fn total_especies(&self) -> i64 {
        self.total_animales + self.total_plantas
    }

    pub fn total_fotos(&self) -> i64 {
        self.total_fotos_fauna + self.total_fotos_flora
    }
}

impl Serialize for GalleryStatistics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("GalleryStatistics", 6)?;
        s.serialize_field("total_animales", &self.total_animales)?;
        s.serialize_field("total_plantas", &self.total_plantas)?;
        s.serialize_field("total_fotos_fauna", &self.total_fotos_fauna)?;
        s.serialize_field("total_fotos_flora", &self.total_fotos_flora)?;
        s.serialize_field("total_especies", &self.total_especies())?;
        s.serialize_field("total_fotos", &self.total_fotos())?;
        s.end()
    }
}
