// src/noyau/format.rs
//
// Rendu texte des résultats. Deux variantes de la même phrase :
// sans accents (la sortie historique) ou accentuée.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;

use super::comparaison::{AreaComparison, Comparison};
use super::note::Grade;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Langue {
    #[default]
    Plain,
    Accented,
}

impl Langue {
    fn choisit(self, plain: &'static str, accented: &'static str) -> &'static str {
        match self {
            Langue::Plain => plain,
            Langue::Accented => accented,
        }
    }
}

/// n ou n/d (forme réduite).
pub fn format_rational(r: &BigRational) -> String {
    let n = r.numer();
    let d = r.denom();
    if d.is_one() {
        format!("{n}")
    } else {
        format!("{n}/{d}")
    }
}

pub fn format_grade(g: Grade) -> String {
    g.letter().to_string()
}

pub fn format_combined_area(total: &BigInt, langue: Langue) -> String {
    let prefixe = langue.choisit(
        "Area del Rectangulo + Area del triangulo:",
        "Área del Rectángulo + Área del triángulo:",
    );
    format!("{prefixe} {total}")
}

// Aucun accent dans cette phrase : les deux variantes coïncident.
pub fn format_combined_volume(total: &BigInt, _langue: Langue) -> String {
    format!("Volumen del Cubo + Volumen del Prisma Rectangular: {total}")
}

pub fn format_comparison(c: &AreaComparison, langue: Langue) -> String {
    let phrase = match c.outcome {
        Comparison::Greater => langue.choisit(
            "El area del rectangulo es mayor que el area del triangulo",
            "El área del rectángulo es mayor que el área del triángulo",
        ),
        Comparison::Less => langue.choisit(
            "El area del rectangulo es menor que el area del triangulo",
            "El área del rectángulo es menor que el área del triángulo",
        ),
        Comparison::Equal => langue.choisit(
            "El area del rectangulo es igual al area del triangulo",
            "El área del rectángulo es igual al área del triángulo",
        ),
    };
    format!(
        "{phrase} ({} {} {})",
        c.rectangle_area,
        c.outcome.symbol(),
        c.triangle_area
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::comparaison::compare_areas;
    use crate::noyau::formes::{Rectangle, Triangle};

    #[test]
    fn rationnels() {
        let r = BigRational::new(BigInt::from(15), BigInt::from(2));
        assert_eq!(format_rational(&r), "15/2");
        let r = BigRational::new(BigInt::from(20), BigInt::from(2));
        assert_eq!(format_rational(&r), "10");
    }

    #[test]
    fn phrases_aire() {
        let total = BigInt::from(30);
        assert_eq!(
            format_combined_area(&total, Langue::Plain),
            "Area del Rectangulo + Area del triangulo: 30"
        );
        assert_eq!(
            format_combined_area(&total, Langue::Accented),
            "Área del Rectángulo + Área del triángulo: 30"
        );
    }

    #[test]
    fn phrase_comparaison() {
        let c = compare_areas(&Rectangle::new(5, 4), &Triangle::new(6, 3));
        assert_eq!(
            format_comparison(&c, Langue::Plain),
            "El area del rectangulo es mayor que el area del triangulo (20 > 9)"
        );
    }

    #[test]
    fn phrases_menor_et_igual() {
        let moins = compare_areas(&Rectangle::new(2, 2), &Triangle::new(10, 10));
        assert_eq!(
            format_comparison(&moins, Langue::Plain),
            "El area del rectangulo es menor que el area del triangulo (4 < 50)"
        );
        assert_eq!(
            format_comparison(&moins, Langue::Accented),
            "El área del rectángulo es menor que el área del triángulo (4 < 50)"
        );

        let egal = compare_areas(&Rectangle::new(2, 2), &Triangle::new(3, 3));
        assert_eq!(
            format_comparison(&egal, Langue::Plain),
            "El area del rectangulo es igual al area del triangulo (4 = 4)"
        );
        assert_eq!(
            format_comparison(&egal, Langue::Accented),
            "El área del rectángulo es igual al área del triángulo (4 = 4)"
        );
    }
}
