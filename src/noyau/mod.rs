//! Noyau exact (entiers non bornés)
//!
//! Organisation interne :
//! - note.rs        : classement score -> A/B/C/D (seuils décroissants)
//! - formes.rs      : rectangle, triangle, cube, prisme + aire/volume
//! - comparaison.rs : sommes de métriques + comparaison ternaire des aires
//! - lecture.rs     : texte -> entiers / littéraux de structure
//! - format.rs      : phrases (sans accents / accentuées)
//! - eval.rs        : pipeline complet + démarche

pub mod comparaison;
pub mod eval;
pub mod format;
pub mod formes;
pub mod lecture;
pub mod note;

#[cfg(test)]
mod tests_scenarios;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use comparaison::{
    combined_area, combined_volume, compare_areas, AreaComparison, Comparison,
};
pub use eval::{eval_formes, eval_note};
pub use formes::{Cube, Metric, Rectangle, RectangularPrism, Shape, Triangle};
pub use note::{classify, Grade};
