//! Mesures Q-pur
//!
//! Bibliothèque : classement de notes (A/B/C/D) et métriques exactes de formes
//! (aires, volumes, comparaison). L'interface egui vit dans le binaire.

pub mod noyau;
