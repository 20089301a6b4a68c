//! Photo record to gallery item mapping.
//!
//! The only place that knows both photo schemas. Scientific name and
//! conservation status come from the parent species, not the photo.

use ecoalbum_model::{GalleryItem, Kind};

use crate::database::records::{FaunaPhotoRecord, FloraPhotoRecord};

pub fn map_fauna_photo(record: FaunaPhotoRecord) -> GalleryItem {
    GalleryItem {
        id: record.id_foto,
        kind: Kind::Fauna,
        nombre: record.nombre_comun,
        url_foto: record.url_foto,
        descripcion_foto: record.descripcion,
        especie_id: record.id_animal,
        nombre_cientifico: Some(record.nombre_cientifico),
        estado: record.estado,
    }
}

pub fn map_flora_photo(record: FloraPhotoRecord) -> GalleryItem {
    GalleryItem {
        id: record.id_foto,
        kind: Kind::Flora,
        nombre: record.nombre_comun,
        url_foto: record.url_foto,
        descripcion_foto: record.descripcion,
        especie_id: record.id_planta,
        nombre_cientifico: Some(record.nombre_cientifico),
        estado: record.estado,
    }
}
