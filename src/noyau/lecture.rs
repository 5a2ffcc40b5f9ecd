// src/noyau/lecture.rs
//
// Lecture des entrées texte : entiers (score, dimensions) et enregistrements
// écrits comme des littéraux de structure :
//   5, 4            (positionnel)
//   5 4             (positionnel, séparé par des espaces)
//   Rectangulo{5, 4}
//   {ancho: 2, largo: 3, alto: 4}   (nommé, ordre libre)

use num_bigint::BigInt;
use thiserror::Error;

use super::formes::{Cube, Rectangle, RectangularPrism, Triangle};

pub const CHAMPS_RECTANGLE: [&str; 2] = ["ancho", "alto"];
pub const CHAMPS_TRIANGLE: [&str; 2] = ["base", "altura"];
pub const CHAMPS_CUBE: [&str; 1] = ["lado"];
pub const CHAMPS_PRISME: [&str; 3] = ["ancho", "largo", "alto"];

pub const TYPE_RECTANGLE: &str = "Rectangulo";
pub const TYPE_TRIANGLE: &str = "Triangulo";
pub const TYPE_CUBE: &str = "Cubo";
pub const TYPE_PRISME: &str = "PrismaRectangular";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    #[error("Entrée vide ({field})")]
    Empty { field: String },

    #[error("{field} : entier attendu, reçu '{text}'")]
    NotAnInteger { field: String, text: String },

    #[error("{expected} valeur(s) attendue(s), {found} reçue(s)")]
    Arity { expected: usize, found: usize },

    #[error("champ inconnu: '{name}'")]
    UnknownField { name: String },

    #[error("champ répété: '{name}'")]
    DuplicateField { name: String },

    #[error("champ manquant: '{name}'")]
    MissingField { name: String },

    #[error("champs nommés et positionnels mélangés")]
    MixedFields,

    #[error("accolades mal appariées")]
    Unbalanced,

    #[error("nom de type invalide: '{name}'")]
    InvalidTypeName { name: String },

    #[error("type attendu: '{expected}', reçu '{found}'")]
    WrongType { expected: String, found: String },

    #[error("virgule attendue après le champ '{field}'")]
    MissingComma { field: String },
}

/// Entier signé en base 10 : `[+-]?[0-9]+` (espaces autour tolérés).
pub fn read_integer(field: &str, text: &str) -> Result<BigInt, ReadError> {
    let s = text.trim();
    if s.is_empty() {
        return Err(ReadError::Empty {
            field: field.to_string(),
        });
    }

    let (neg, digits) = match s.as_bytes()[0] {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    let invalide = || ReadError::NotAnInteger {
        field: field.to_string(),
        text: s.to_string(),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalide());
    }
    let n = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalide)?;

    Ok(if neg { -n } else { n })
}

/// Retire un éventuel `Nom{ ... }` / `{ ... }` et renvoie l’intérieur.
/// Le nom, s’il est écrit, doit être exactement `type_name`.
fn corps_litteral<'a>(s: &'a str, type_name: &str) -> Result<&'a str, ReadError> {
    let ouvrantes = s.matches('{').count();
    let fermantes = s.matches('}').count();

    match (ouvrantes, fermantes) {
        (0, 0) => Ok(s),
        (1, 1) => {
            let (avant, reste) = s.split_once('{').ok_or(ReadError::Unbalanced)?;
            let corps = reste
                .trim_end()
                .strip_suffix('}')
                .ok_or(ReadError::Unbalanced)?;

            let nom = avant.trim();
            let nom_ok = nom
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
                && !nom.starts_with(|c: char| c.is_ascii_digit());
            if !nom_ok {
                return Err(ReadError::InvalidTypeName {
                    name: nom.to_string(),
                });
            }
            if !nom.is_empty() && nom != type_name {
                return Err(ReadError::WrongType {
                    expected: type_name.to_string(),
                    found: nom.to_string(),
                });
            }
            Ok(corps)
        }
        _ => Err(ReadError::Unbalanced),
    }
}

/// Lit un enregistrement `type_name` dont les champs sont `names` (dans cet ordre).
/// Les valeurs sont rendues dans l’ordre de `names`, quel que soit l’ordre d’écriture.
pub fn read_fields(
    text: &str,
    type_name: &str,
    names: &[&str],
) -> Result<Vec<BigInt>, ReadError> {
    let s = text.trim();
    if s.is_empty() {
        return Err(ReadError::Empty {
            field: names.join(", "),
        });
    }

    let corps = corps_litteral(s, type_name)?;

    let mut positionnels: Vec<&str> = Vec::new();
    let mut nommes: Vec<(&str, &str)> = Vec::new();

    for item in corps.split(',').map(str::trim).filter(|i| !i.is_empty()) {
        match item.split_once(':') {
            Some((nom, valeur)) => {
                let nom = nom.trim();
                // `base: 3 altura: 4` : deux champs sans virgule entre eux
                if valeur.trim().contains(|c: char| c.is_whitespace() || c == ':') {
                    return Err(ReadError::MissingComma {
                        field: nom.to_string(),
                    });
                }
                nommes.push((nom, valeur));
            }
            None => positionnels.extend(item.split_whitespace()),
        }
    }

    if !positionnels.is_empty() && !nommes.is_empty() {
        return Err(ReadError::MixedFields);
    }

    if nommes.is_empty() {
        if positionnels.len() != names.len() {
            return Err(ReadError::Arity {
                expected: names.len(),
                found: positionnels.len(),
            });
        }
        return names
            .iter()
            .zip(positionnels)
            .map(|(nom, texte)| read_integer(nom, texte))
            .collect();
    }

    let mut valeurs: Vec<Option<BigInt>> = vec![None; names.len()];
    for (nom, texte) in nommes {
        let idx = names
            .iter()
            .position(|n| *n == nom)
            .ok_or_else(|| ReadError::UnknownField {
                name: nom.to_string(),
            })?;
        if valeurs[idx].is_some() {
            return Err(ReadError::DuplicateField {
                name: nom.to_string(),
            });
        }
        valeurs[idx] = Some(read_integer(nom, texte)?);
    }

    names
        .iter()
        .zip(valeurs)
        .map(|(nom, v)| {
            v.ok_or_else(|| ReadError::MissingField {
                name: (*nom).to_string(),
            })
        })
        .collect()
}

fn read_array<const N: usize>(
    text: &str,
    type_name: &str,
    names: &[&str; N],
) -> Result<[BigInt; N], ReadError> {
    read_fields(text, type_name, names)?
        .try_into()
        .map_err(|v: Vec<BigInt>| ReadError::Arity {
            expected: N,
            found: v.len(),
        })
}

pub fn read_rectangle(text: &str) -> Result<Rectangle, ReadError> {
    let [width, height] = read_array(text, TYPE_RECTANGLE, &CHAMPS_RECTANGLE)?;
    Ok(Rectangle { width, height })
}

pub fn read_triangle(text: &str) -> Result<Triangle, ReadError> {
    let [base, height] = read_array(text, TYPE_TRIANGLE, &CHAMPS_TRIANGLE)?;
    Ok(Triangle { base, height })
}

pub fn read_cube(text: &str) -> Result<Cube, ReadError> {
    let [side] = read_array(text, TYPE_CUBE, &CHAMPS_CUBE)?;
    Ok(Cube { side })
}

pub fn read_prism(text: &str) -> Result<RectangularPrism, ReadError> {
    let [width, length, height] = read_array(text, TYPE_PRISME, &CHAMPS_PRISME)?;
    Ok(RectangularPrism {
        width,
        length,
        height,
    })
}
