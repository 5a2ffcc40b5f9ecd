//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de l’application (entrées, résultats, erreur, démarche,
//! langue des phrases) et offrir des opérations simples (C/CLR/AC).
//!
//! Contrats :
//! - Aucun calcul ici (pas de lecture, pas de métrique).
//! - Actions déterministes, sans effet de bord caché.

use mesures_qpur::noyau::eval::{Demarche, EntreesFormes};
use mesures_qpur::noyau::format::Langue;

/// Langue des phrases au démarrage.
const LANGUE_DEFAUT: Langue = Langue::Plain;

#[derive(Clone, Debug)]
pub struct AppMesures {
    // --- entrées utilisateur ---
    pub entree_score: String,
    pub entrees: EntreesFormes,

    // --- sorties ---
    pub note: String,            // A/B/C/D
    pub metriques: String,       // aires + volumes, une ligne chacun
    pub phrases: Vec<String>,    // phrases “programme” (aire, volume, comparaison)
    pub erreur: String,          // message d’erreur (lecture échouée)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub langue: Langue,

    // --- UX ---
    pub focus_score: bool,
}

impl Default for AppMesures {
    fn default() -> Self {
        Self {
            entree_score: String::new(),
            entrees: EntreesFormes::default(),
            note: String::new(),
            metriques: String::new(),
            phrases: Vec::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            langue: LANGUE_DEFAUT,
            focus_score: true,
        }
    }
}

impl AppMesures {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrées + résultats + langue par défaut).
    pub fn reset_total(&mut self) {
        self.clear_entrees();
        self.clear_resultats();
        self.langue = LANGUE_DEFAUT;
    }

    /// C : effacer seulement les entrées (sans toucher aux résultats).
    pub fn clear_entrees(&mut self) {
        self.entree_score.clear();
        self.entrees = EntreesFormes::default();
        self.focus_score = true;
    }

    /// CLR : effacer résultats + erreur + démarche (sans toucher aux entrées).
    pub fn clear_resultats(&mut self) {
        self.note.clear();
        self.metriques.clear();
        self.phrases.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
    }

    /// On CONSERVE les derniers résultats affichés ; seule la démarche est coupée
    /// (elle ne correspond plus à l’entrée fautive).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
    }

    pub fn set_note(&mut self, note: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.note = note.into();
        self.demarche = demarche;
    }

    pub fn set_formes(&mut self, metriques: String, phrases: Vec<String>, demarche: Demarche) {
        self.erreur.clear();
        self.metriques = metriques;
        self.phrases = phrases;
        self.demarche = demarche;
    }
}
