//! Noyau — évaluation (pipeline réel)
//!
//! texte -> lecture (entiers / littéraux) -> métriques -> comparaison -> phrases
//!
//! Les calculs eux-mêmes restent purs (note.rs, formes.rs, comparaison.rs) ;
//! ce module ne fait qu’enchaîner, journaliser et raconter la démarche.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use tracing::{debug, warn};

use super::comparaison::{combined_area, combined_volume, compare_areas, AreaComparison};
use super::format::{
    format_combined_area, format_combined_volume, format_comparison, format_rational, Langue,
};
use super::lecture::{read_cube, read_integer, read_prism, read_rectangle, read_triangle, ReadError};
use super::note::{classify, Grade};

#[derive(Default, Clone, Debug)]
pub struct Demarche {
    pub lecture: String,
    pub calculs: String,
    pub troncature: String,
    pub note: String,
}

/// Textes bruts saisis pour les quatre formes.
#[derive(Default, Clone, Debug)]
pub struct EntreesFormes {
    pub rectangle: String,
    pub triangle: String,
    pub cube: String,
    pub prisme: String,
}

#[derive(Clone, Debug)]
pub struct RapportFormes {
    pub rectangle_area: BigInt,
    pub triangle_area: BigInt,
    pub triangle_exact: BigRational,
    pub cube_volume: BigInt,
    pub prism_volume: BigInt,
    pub combined_area: BigInt,
    pub combined_volume: BigInt,
    pub comparison: AreaComparison,

    // phrases prêtes à afficher
    pub msg_aire: String,
    pub msg_volume: String,
    pub msg_comparaison: String,
}

fn signale(e: ReadError) -> ReadError {
    warn!(erreur = %e, "entrée rejetée");
    e
}

/// API publique : lit un score et le classe.
pub fn eval_note(entree: &str) -> Result<(Grade, Demarche), ReadError> {
    let score = read_integer("score", entree).map_err(signale)?;
    let grade = classify(score.clone());
    debug!(%score, %grade, "score classé");

    let calculs = match grade.threshold() {
        Some(seuil) => format!("{score} ≥ {seuil} (premier seuil atteint) → {grade}"),
        None => {
            let plus_bas = Grade::C.threshold().unwrap_or_default();
            format!("{score} < {plus_bas} (aucun seuil atteint) → {grade}")
        }
    };

    let d = Demarche {
        lecture: format!("score = {score}"),
        calculs,
        troncature: String::new(),
        note: "Seuils testés dans l’ordre : A ≥ 90, B ≥ 80, C ≥ 70, sinon D.".into(),
    };

    Ok((grade, d))
}

/// API publique : lit les quatre formes, calcule aires/volumes, sommes et comparaison.
pub fn eval_formes(
    entrees: &EntreesFormes,
    langue: Langue,
) -> Result<(RapportFormes, Demarche), ReadError> {
    // 1) Lecture
    let r = read_rectangle(&entrees.rectangle).map_err(signale)?;
    let t = read_triangle(&entrees.triangle).map_err(signale)?;
    let c = read_cube(&entrees.cube).map_err(signale)?;
    let p = read_prism(&entrees.prisme).map_err(signale)?;

    let lecture = [
        format!("Rectangulo{{ancho: {}, alto: {}}}", r.width, r.height),
        format!("Triangulo{{base: {}, altura: {}}}", t.base, t.height),
        format!("Cubo{{lado: {}}}", c.side),
        format!(
            "PrismaRectangular{{ancho: {}, largo: {}, alto: {}}}",
            p.width, p.length, p.height
        ),
    ]
    .join("\n");

    // 2) Métriques
    let rectangle_area = r.area();
    let triangle_area = t.area();
    let triangle_exact = t.exact_area();
    let cube_volume = c.volume();
    let prism_volume = p.volume();
    debug!(%rectangle_area, %triangle_area, %cube_volume, %prism_volume, "métriques");

    // 3) Combinaisons + comparaison
    let aire_totale = combined_area(&r, &t);
    let volume_total = combined_volume(&c, &p);
    let comparison = compare_areas(&r, &t);
    debug!(
        %aire_totale,
        %volume_total,
        issue = ?comparison.outcome,
        "combinaisons"
    );

    let calculs = [
        format!("aire rectangle = {} * {} = {rectangle_area}", r.width, r.height),
        format!(
            "aire triangle = ({} * {}) / 2 = {triangle_area}",
            t.base, t.height
        ),
        format!("volume cube = {0} * {0} * {0} = {cube_volume}", c.side),
        format!(
            "volume prisme = {} * {} * {} = {prism_volume}",
            p.width, p.length, p.height
        ),
        format!("aires : {rectangle_area} + {triangle_area} = {aire_totale}"),
        format!("volumes : {cube_volume} + {prism_volume} = {volume_total}"),
        format!(
            "comparaison : {} {} {}",
            comparison.rectangle_area,
            comparison.outcome.symbol(),
            comparison.triangle_area
        ),
    ]
    .join("\n");

    // 4) Troncature : seulement si base*hauteur est impair
    let produit = &t.base * &t.height;
    let troncature = if (&produit % BigInt::from(2)).is_zero() {
        String::new()
    } else {
        format!(
            "aire exacte du triangle = {} ; division entière tronquée → {triangle_area}",
            format_rational(&triangle_exact)
        )
    };

    let rapport = RapportFormes {
        msg_aire: format_combined_area(&aire_totale, langue),
        msg_volume: format_combined_volume(&volume_total, langue),
        msg_comparaison: format_comparison(&comparison, langue),
        rectangle_area,
        triangle_area,
        triangle_exact,
        cube_volume,
        prism_volume,
        combined_area: aire_totale,
        combined_volume: volume_total,
        comparison,
    };

    let d = Demarche {
        lecture,
        calculs,
        troncature,
        note: "Pipeline: lecture → aires/volumes → sommes → comparaison → phrases.".into(),
    };

    Ok((rapport, d))
}
