//! Propriétés (proptest) : bornes des seaux, monotonie, parité de la troncature,
//! pureté des calculs.

use num_bigint::BigInt;
use proptest::prelude::*;

use super::{classify, combined_area, combined_volume, compare_areas, Comparison, Grade};
use super::{Cube, RectangularPrism, Rectangle, Shape, Triangle};

// bornes assez petites pour que les produits tiennent dans i128
const DIM: std::ops::RangeInclusive<i64> = -1_000_000..=1_000_000;

proptest! {
    #[test]
    fn seau_a(s in 90i64..) {
        prop_assert_eq!(classify(s), Grade::A);
    }

    #[test]
    fn seau_b(s in 80i64..90) {
        prop_assert_eq!(classify(s), Grade::B);
    }

    #[test]
    fn seau_c(s in 70i64..80) {
        prop_assert_eq!(classify(s), Grade::C);
    }

    #[test]
    fn seau_d(s in ..70i64) {
        prop_assert_eq!(classify(s), Grade::D);
    }

    /// Un score plus haut ne donne jamais une note strictement moins bonne.
    #[test]
    fn classement_monotone(a in any::<i64>(), b in any::<i64>()) {
        let (bas, haut) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(classify(haut) <= classify(bas));
    }

    /// Division tronquée vers zéro, comme `/` sur les entiers machine.
    #[test]
    fn triangle_tronque_comme_i128(b in DIM, h in DIM) {
        let attendu = (i128::from(b) * i128::from(h)) / 2;
        prop_assert_eq!(Triangle::new(b, h).area(), BigInt::from(attendu));
    }

    #[test]
    fn volumes_et_aires_exacts(w in DIM, l in DIM, h in DIM) {
        let (w2, l2, h2) = (i128::from(w), i128::from(l), i128::from(h));
        prop_assert_eq!(Rectangle::new(w, h).area(), BigInt::from(w2 * h2));
        prop_assert_eq!(Cube::new(w).volume(), BigInt::from(w2 * w2 * w2));
        prop_assert_eq!(
            RectangularPrism::new(w, l, h).volume(),
            BigInt::from(w2 * l2 * h2)
        );
    }

    #[test]
    fn comparaison_coherente(rw in DIM, rh in DIM, tb in DIM, th in DIM) {
        let r = Rectangle::new(rw, rh);
        let t = Triangle::new(tb, th);
        let c = compare_areas(&r, &t);

        prop_assert_eq!(c.rectangle_area.clone(), r.area());
        prop_assert_eq!(c.triangle_area.clone(), t.area());
        let attendu = match c.rectangle_area.cmp(&c.triangle_area) {
            std::cmp::Ordering::Greater => Comparison::Greater,
            std::cmp::Ordering::Less => Comparison::Less,
            std::cmp::Ordering::Equal => Comparison::Equal,
        };
        prop_assert_eq!(c.outcome, attendu);
        prop_assert_eq!(combined_area(&r, &t), r.area() + t.area());
    }

    /// Aucun état caché : deux appels identiques, deux résultats identiques.
    #[test]
    fn calculs_purs(w in DIM, l in DIM, h in DIM) {
        let cube = Cube::new(w);
        let prisme = RectangularPrism::new(w, l, h);
        prop_assert_eq!(combined_volume(&cube, &prisme), combined_volume(&cube, &prisme));

        let s: Shape = Triangle::new(l, h).into();
        prop_assert_eq!(s.metric(), s.metric());
    }
}
