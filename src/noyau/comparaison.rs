// src/noyau/comparaison.rs
//
// Combinaisons et comparaison de métriques entre variantes différentes.

use std::cmp::Ordering;

use num_bigint::BigInt;

use super::formes::{Cube, Rectangle, RectangularPrism, Triangle};

/// Issue ternaire d’une comparaison de deux métriques.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Comparison {
    Greater,
    Less,
    Equal,
}

impl From<Ordering> for Comparison {
    fn from(o: Ordering) -> Self {
        match o {
            Ordering::Greater => Comparison::Greater,
            Ordering::Less => Comparison::Less,
            Ordering::Equal => Comparison::Equal,
        }
    }
}

impl Comparison {
    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::Greater => ">",
            Comparison::Less => "<",
            Comparison::Equal => "=",
        }
    }
}

/// Résultat observable : l’issue ET les deux aires calculées.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AreaComparison {
    pub outcome: Comparison,
    pub rectangle_area: BigInt,
    pub triangle_area: BigInt,
}

pub fn compare_areas(r: &Rectangle, t: &Triangle) -> AreaComparison {
    let rectangle_area = r.area();
    let triangle_area = t.area();
    AreaComparison {
        outcome: rectangle_area.cmp(&triangle_area).into(),
        rectangle_area,
        triangle_area,
    }
}

pub fn combined_area(r: &Rectangle, t: &Triangle) -> BigInt {
    r.area() + t.area()
}

pub fn combined_volume(cube: &Cube, prism: &RectangularPrism) -> BigInt {
    cube.volume() + prism.volume()
}
