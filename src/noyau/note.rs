// src/noyau/note.rs

use std::fmt;

use num_bigint::BigInt;

/// Étiquette de classement. L'ordre dérivé met la meilleure note en premier :
/// `A < B < C < D`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grade {
    A,
    B,
    C,
    D,
}

/// Seuils (borne basse incluse), du plus haut au plus bas.
/// D n’a pas de seuil : c’est le cas par défaut.
const SEUILS: [(i64, Grade); 3] = [(90, Grade::A), (80, Grade::B), (70, Grade::C)];

impl Grade {
    pub const ALL: [Grade; 4] = [Grade::A, Grade::B, Grade::C, Grade::D];

    pub fn letter(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        }
    }

    /// Borne basse du seau (None pour D).
    pub fn threshold(self) -> Option<i64> {
        SEUILS
            .iter()
            .find(|(_, g)| *g == self)
            .map(|(seuil, _)| *seuil)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// Classe un score : le premier seuil atteint (ordre décroissant) gagne.
/// Totale sur tous les entiers : négatif => D, au-delà de 100 => A.
pub fn classify(score: impl Into<BigInt>) -> Grade {
    let score = score.into();
    SEUILS
        .iter()
        .find(|(seuil, _)| score >= BigInt::from(*seuil))
        .map_or(Grade::D, |(_, g)| *g)
}
