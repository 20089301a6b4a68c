use sqlx::FromRow;

/// A fauna photo with its parent animal joined in.
///
/// The gallery mapper is the only consumer that reads these fields; the
/// aggregation service never touches kind-specific names.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct FaunaPhotoRecord {
    pub id_foto: i32,
    pub url_foto: String,
    pub descripcion: Option<String>,
    pub id_animal: i32,
    pub nombre_comun: String,
    pub nombre_cientifico: String,
    pub estado: Option<String>,
}

/// A flora photo with its parent plant joined in.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct FloraPhotoRecord {
    pub id_foto: i32,
    pub url_foto: String,
    pub descripcion: Option<String>,
    pub id_planta: i32,
    pub nombre_comun: String,
    pub nombre_cientifico: String,
    pub estado: Option<String>,
}
