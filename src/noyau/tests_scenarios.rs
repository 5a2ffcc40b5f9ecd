//! Scénarios : les petits programmes Go (califica, aires, volumes, comparaison),
//! rejoués de bout en bout
//! (texte saisi -> pipeline -> phrase affichée).

use num_bigint::BigInt;

use super::eval::{eval_formes, eval_note, EntreesFormes};
use super::format::Langue;
use super::{classify, combined_volume, compare_areas, Comparison, Cube, Grade};
use super::{RectangularPrism, Rectangle, Triangle};

fn formes(r: &str, t: &str, c: &str, p: &str) -> EntreesFormes {
    EntreesFormes {
        rectangle: r.into(),
        triangle: t.into(),
        cube: c.into(),
        prisme: p.into(),
    }
}

/* ------------------------ Classement (califica) ------------------------ */

#[test]
fn scenario_califica() {
    let (a, _) = eval_note("95").unwrap();
    let (c, _) = eval_note("78").unwrap();
    assert_eq!(a.to_string(), "A");
    assert_eq!(c.to_string(), "C");
}

/* ------------------------ Aire rectangle + triangle ------------------------ */

#[test]
fn scenario_somme_des_aires() {
    let (rap, _) = eval_formes(
        &formes("Rectangulo{5, 4}", "Triangulo{5, 4}", "1", "1 1 1"),
        Langue::Plain,
    )
    .unwrap();

    assert_eq!(rap.rectangle_area, BigInt::from(20));
    assert_eq!(rap.triangle_area, BigInt::from(10));
    assert_eq!(
        rap.msg_aire,
        "Area del Rectangulo + Area del triangulo: 30"
    );
}

/* ------------------------ Volume cube + prisme ------------------------ */

#[test]
fn scenario_somme_des_volumes() {
    let (rap, _) = eval_formes(
        &formes(
            "1 1",
            "1 1",
            "Cubo{lado: 3}",
            "PrismaRectangular{ancho: 2, largo: 3, alto: 4}",
        ),
        Langue::Plain,
    )
    .unwrap();

    assert_eq!(rap.cube_volume, BigInt::from(27));
    assert_eq!(rap.prism_volume, BigInt::from(24));
    assert_eq!(
        rap.msg_volume,
        "Volumen del Cubo + Volumen del Prisma Rectangular: 51"
    );

    // même chose sans passer par le texte
    assert_eq!(
        combined_volume(&Cube::new(3), &RectangularPrism::new(2, 3, 4)),
        BigInt::from(51)
    );
}

/* ------------------------ Comparaison des aires ------------------------ */

#[test]
fn scenario_comparaison() {
    let c = compare_areas(&Rectangle::new(5, 4), &Triangle::new(6, 3));
    assert_eq!(c.outcome, Comparison::Greater);
    assert_eq!(
        (c.rectangle_area, c.triangle_area),
        (BigInt::from(20), BigInt::from(9))
    );

    let (rap, _) = eval_formes(&formes("5 4", "6 3", "1", "1 1 1"), Langue::Accented).unwrap();
    assert_eq!(
        rap.msg_comparaison,
        "El área del rectángulo es mayor que el área del triángulo (20 > 9)"
    );
}

/* ------------------------ Idempotence ------------------------ */

#[test]
fn scenario_deux_fois_meme_resultat() {
    let e = formes("5 4", "5 3", "3", "2 3 4");
    let (a, da) = eval_formes(&e, Langue::Plain).unwrap();
    let (b, db) = eval_formes(&e, Langue::Plain).unwrap();

    assert_eq!(a.comparison, b.comparison);
    assert_eq!(a.combined_area, b.combined_area);
    assert_eq!(a.combined_volume, b.combined_volume);
    assert_eq!(da.calculs, db.calculs);

    assert_eq!(classify(89), classify(89));
    assert_eq!(classify(89), Grade::B);
}
