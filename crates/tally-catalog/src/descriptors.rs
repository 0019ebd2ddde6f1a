//! Grain descriptor scales: grain size, sphericity, roundness, contacts,
//! sorting, maturity and packing.

use crate::TermEntry;

const fn t(term: &'static str, description: &'static str) -> TermEntry {
    TermEntry { term, description }
}

/// Udden-Wentworth classes for clastic sediments.
pub static GRAIN_SIZE_SEDIMENTARIAS: &[TermEntry] = &[
    t("Bloque", "> 256 mm"),
    t("Canto", "64 - 256 mm"),
    t("Guijarro", "4 - 64 mm"),
    t("Gránulo", "2 - 4 mm"),
    t("Arena muy gruesa", "1 - 2 mm"),
    t("Arena gruesa", "0.5 - 1 mm"),
    t("Arena media", "0.25 - 0.5 mm"),
    t("Arena fina", "0.125 - 0.25 mm"),
    t("Arena muy fina", "0.0625 - 0.125 mm"),
    t("Limo", "0.0039 - 0.0625 mm"),
    t("Arcilla", "< 0.0039 mm"),
];

/// Crystal-size classes for igneous rocks.
pub static GRAIN_SIZE_IGNEAS: &[TermEntry] = &[
    t("Pegmatítico", "Cristales > 30 mm"),
    t("Grano muy grueso", "Cristales de 10 - 30 mm"),
    t("Grano grueso", "Cristales de 5 - 10 mm"),
    t("Grano medio", "Cristales de 1 - 5 mm"),
    t("Grano fino", "Cristales < 1 mm, visibles con lupa"),
    t("Afanítico", "Cristales no distinguibles a simple vista"),
    t("Criptocristalino", "Cristales solo visibles al microscopio"),
    t("Vítreo", "Sin cristales, vidrio volcánico"),
];

pub static SPHERICITY: &[TermEntry] = &[
    t("Muy alta", "Grano casi equidimensional (> 0.9)"),
    t("Alta", "Forma próxima a la esfera (0.7 - 0.9)"),
    t("Moderada", "Ligeramente alargado o aplanado (0.5 - 0.7)"),
    t("Baja", "Claramente alargado o aplanado (0.3 - 0.5)"),
    t("Muy baja", "Forma de aguja o lámina (< 0.3)"),
];

/// Powers roundness scale.
pub static ROUNDNESS: &[TermEntry] = &[
    t("Muy anguloso", "Aristas y vértices agudos, sin desgaste (0.12 - 0.17)"),
    t("Anguloso", "Aristas agudas con desgaste mínimo (0.17 - 0.25)"),
    t("Subanguloso", "Aristas algo desgastadas, caras originales visibles (0.25 - 0.35)"),
    t("Subredondeado", "Aristas redondeadas, caras originales reducidas (0.35 - 0.49)"),
    t("Redondeado", "Contorno suave, caras originales casi ausentes (0.49 - 0.70)"),
    t("Bien redondeado", "Contorno completamente curvo, sin caras originales (0.70 - 1.00)"),
];

/// Grain-to-grain contact types.
pub static CONTACTS: &[TermEntry] = &[
    t("Flotante", "Grano sin contacto con otros, rodeado de matriz o cemento"),
    t("Puntual", "Contacto en un punto"),
    t("Tangencial", "Contacto en un punto, típico de empaquetamiento abierto"),
    t("Longitudinal", "Contacto a lo largo de una línea recta"),
    t("Cóncavo-convexo", "Un grano se amolda al otro por presión-disolución"),
    t("Suturado", "Contacto irregular interpenetrado por disolución intensa"),
];

/// Folk and Ward sorting classes (standard deviation in phi units).
pub static SORTING: &[TermEntry] = &[
    t("Muy bien seleccionado", "σ < 0.35 φ"),
    t("Bien seleccionado", "σ 0.35 - 0.50 φ"),
    t("Moderadamente bien seleccionado", "σ 0.50 - 0.71 φ"),
    t("Moderadamente seleccionado", "σ 0.71 - 1.00 φ"),
    t("Mal seleccionado", "σ 1.00 - 2.00 φ"),
    t("Muy mal seleccionado", "σ 2.00 - 4.00 φ"),
    t("Extremadamente mal seleccionado", "σ > 4.00 φ"),
];

/// Textural maturity stages.
pub static MATURITY: &[TermEntry] = &[
    t("Inmadura", "Más de 5% de matriz arcillosa, granos mal seleccionados y angulosos"),
    t("Submadura", "Menos de 5% de matriz, granos mal seleccionados y poco redondeados"),
    t("Madura", "Sin matriz, granos bien seleccionados pero poco redondeados"),
    t("Supermadura", "Sin matriz, granos bien seleccionados y bien redondeados"),
];

pub static PACKING: &[TermEntry] = &[
    t("Abierto", "Predominan granos flotantes y contactos puntuales"),
    t("Normal", "Mezcla de contactos puntuales y longitudinales"),
    t("Cerrado", "Predominan contactos longitudinales y cóncavo-convexos"),
    t("Muy cerrado", "Contactos suturados, porosidad casi nula"),
];
