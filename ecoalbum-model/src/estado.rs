//! Conservation-status catalogs, kept in sync with the database schema.
//!
//! Fauna carries one extra category (`Casi amenazado`) that the flora
//! schema does not define.

pub const ESTADOS_FAUNA: [&str; 5] = [
    "Preocupación menor (LC)",
    "Casi amenazado (NT)",
    "Vulnerable (VU)",
    "En peligro (EN)",
    "Peligro crítico (CR)",
];

pub const ESTADOS_FLORA: [&str; 4] = [
    "Preocupación menor (LC)",
    "Vulnerable (VU)",
    "En peligro (EN)",
    "Peligro crítico (CR)",
];
