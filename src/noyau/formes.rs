// src/noyau/formes.rs

use num_bigint::BigInt;
use num_rational::BigRational;

/* ------------------------ Enregistrements ------------------------ */

// Aucune validation : dimensions nulles ou négatives acceptées telles quelles.

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rectangle {
    pub width: BigInt,
    pub height: BigInt,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Triangle {
    pub base: BigInt,
    pub height: BigInt,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cube {
    pub side: BigInt,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RectangularPrism {
    pub width: BigInt,
    pub length: BigInt,
    pub height: BigInt,
}

impl Rectangle {
    pub fn new(width: impl Into<BigInt>, height: impl Into<BigInt>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }

    pub fn area(&self) -> BigInt {
        &self.width * &self.height
    }
}

impl Triangle {
    pub fn new(base: impl Into<BigInt>, height: impl Into<BigInt>) -> Self {
        Self {
            base: base.into(),
            height: height.into(),
        }
    }

    /// (base*hauteur)/2 en division entière tronquée vers zéro :
    /// 15/2 -> 7, -15/2 -> -7.
    pub fn area(&self) -> BigInt {
        (&self.base * &self.height) / BigInt::from(2)
    }

    /// Aire sans troncature (base*hauteur/2 réduit).
    pub fn exact_area(&self) -> BigRational {
        BigRational::new(&self.base * &self.height, BigInt::from(2))
    }
}

impl Cube {
    pub fn new(side: impl Into<BigInt>) -> Self {
        Self { side: side.into() }
    }

    pub fn volume(&self) -> BigInt {
        &self.side * &self.side * &self.side
    }
}

impl RectangularPrism {
    pub fn new(
        width: impl Into<BigInt>,
        length: impl Into<BigInt>,
        height: impl Into<BigInt>,
    ) -> Self {
        Self {
            width: width.into(),
            length: length.into(),
            height: height.into(),
        }
    }

    pub fn volume(&self) -> BigInt {
        &self.width * &self.length * &self.height
    }
}

/* ------------------------ Forme (type somme fermé) ------------------------ */

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Rectangle(Rectangle),
    Triangle(Triangle),
    Cube(Cube),
    RectangularPrism(RectangularPrism),
}

/// Grandeur dérivée d’une forme : aire (2D) ou volume (3D). Jamais mise en cache.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    Area(BigInt),
    Volume(BigInt),
}

impl Metric {
    pub fn value(&self) -> &BigInt {
        match self {
            Metric::Area(v) | Metric::Volume(v) => v,
        }
    }
}

impl Shape {
    pub fn metric(&self) -> Metric {
        match self {
            Shape::Rectangle(r) => Metric::Area(r.area()),
            Shape::Triangle(t) => Metric::Area(t.area()),
            Shape::Cube(c) => Metric::Volume(c.volume()),
            Shape::RectangularPrism(p) => Metric::Volume(p.volume()),
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(r: Rectangle) -> Self {
        Shape::Rectangle(r)
    }
}

impl From<Triangle> for Shape {
    fn from(t: Triangle) -> Self {
        Shape::Triangle(t)
    }
}

impl From<Cube> for Shape {
    fn from(c: Cube) -> Self {
        Shape::Cube(c)
    }
}

impl From<RectangularPrism> for Shape {
    fn from(p: RectangularPrism) -> Self {
        Shape::RectangularPrism(p)
    }
}
