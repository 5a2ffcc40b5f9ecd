// src/app.rs
//
// Mesures Q-pur — module App (racine)
// -----------------------------------
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppMesures (pour main.rs)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)

pub mod etat;
pub mod vue;

pub use etat::AppMesures;

use eframe::egui;

impl eframe::App for AppMesures {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = effacer seulement les entrées (comme bouton "C").
        // Enter est géré par la vue, champ par champ.
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.clear_entrees();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
