// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Même AppMesures (etat.rs) pour natif + wasm
// - Clavier : Enter évalue le bloc dont le champ a le focus
// - Les calculs passent tous par crate noyau (eval_note / eval_formes)

use eframe::egui;
use tracing::debug;

use mesures_qpur::noyau::eval::{eval_formes, eval_note, EntreesFormes, RapportFormes};
use mesures_qpur::noyau::format::{format_grade, format_rational, Langue};

use super::etat::AppMesures;

impl AppMesures {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Mesures Q-pur");
                ui.add_space(6.0);

                self.ui_actions(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_note(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_formes(ui);

                if !self.erreur.is_empty() {
                    ui.add_space(6.0);
                    ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_actions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            // Contrat: C = entrées seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement les entrées", Action::ClearEntrees);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultats + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            ui.label("Phrases :");
            ui.radio_value(&mut self.langue, Langue::Plain, "sans accents");
            ui.radio_value(&mut self.langue, Langue::Accented, "accentuées");
        });
    }

    fn ui_note(&mut self, ui: &mut egui::Ui) {
        ui.label("Score :");

        let mut evaluer = false;
        ui.horizontal(|ui| {
            let resp = ui.add(
                egui::TextEdit::singleline(&mut self.entree_score)
                    .desired_width(160.0)
                    .hint_text("Ex: 95")
                    .id_source("entree_score")
                    .code_editor(),
            );

            if self.focus_score {
                resp.request_focus();
                self.focus_score = false;
            }

            let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
            evaluer = resp.lost_focus() && enter;

            if ui.add_sized([72.0, 28.0], egui::Button::new("Classer")).clicked() {
                evaluer = true;
            }
        });

        if evaluer {
            self.eval_note_via_noyau();
        }

        ui.add_space(4.0);
        ui.label("Note :");
        Self::champ_monospace(ui, "note_out", &self.note, 1);
    }

    fn ui_formes(&mut self, ui: &mut egui::Ui) {
        ui.label("Formes (positionnel « 5, 4 » ou nommé « {ancho: 5, alto: 4} ») :");

        let mut evaluer = false;
        egui::Grid::new("grille_formes")
            .num_columns(2)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                let EntreesFormes {
                    rectangle,
                    triangle,
                    cube,
                    prisme,
                } = &mut self.entrees;

                evaluer |= Self::ligne_forme(ui, "Rectangulo", "ancho, alto", rectangle);
                evaluer |= Self::ligne_forme(ui, "Triangulo", "base, altura", triangle);
                evaluer |= Self::ligne_forme(ui, "Cubo", "lado", cube);
                evaluer |= Self::ligne_forme(ui, "PrismaRectangular", "ancho, largo, alto", prisme);
            });

        ui.add_space(6.0);
        if ui.add_sized([96.0, 30.0], egui::Button::new("Calculer")).clicked() {
            evaluer = true;
        }

        if evaluer {
            self.eval_formes_via_noyau();
        }

        ui.add_space(6.0);
        ui.label("Aires / volumes :");
        Self::champ_monospace(ui, "metriques_out", &self.metriques, 4);

        ui.add_space(6.0);
        ui.label("Sortie :");
        Self::champ_monospace(ui, "phrases_out", &self.phrases.join("\n"), 3);
    }

    /// Une ligne de la grille ; renvoie true si Enter a été pressé dans ce champ.
    fn ligne_forme(ui: &mut egui::Ui, nom: &str, hint: &str, texte: &mut String) -> bool {
        ui.label(nom);
        let resp = ui.add(
            egui::TextEdit::singleline(texte)
                .desired_width(220.0)
                .hint_text(hint)
                .id_source(nom)
                .code_editor(),
        );
        ui.end_row();

        resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Lecture", "demarche_lecture", &self.demarche.lecture);
                Self::champ_demarche(ui, "Calculs", "demarche_calculs", &self.demarche.calculs);
                if !self.demarche.troncature.is_empty() {
                    Self::champ_demarche(
                        ui,
                        "Troncature",
                        "demarche_troncature",
                        &self.demarche.troncature,
                    );
                }
                Self::champ_demarche(ui, "Note", "demarche_note", &self.demarche.note);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // lecture seule : Frame + Label monospace
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            debug!(?action, "action");
            match action {
                Action::ClearEntrees => self.clear_entrees(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
            }
        }
    }

    fn eval_note_via_noyau(&mut self) {
        match eval_note(&self.entree_score) {
            Ok((grade, d)) => self.set_note(format_grade(grade), d),
            Err(e) => self.set_erreur(e.to_string()),
        }
        self.focus_score = true;
    }

    fn eval_formes_via_noyau(&mut self) {
        match eval_formes(&self.entrees, self.langue) {
            Ok((rapport, d)) => {
                let metriques = texte_metriques(&rapport);
                let phrases = vec![
                    rapport.msg_aire,
                    rapport.msg_volume,
                    rapport.msg_comparaison,
                ];
                self.set_formes(metriques, phrases, d);
            }
            Err(e) => self.set_erreur(e.to_string()),
        }
    }
}

fn texte_metriques(r: &RapportFormes) -> String {
    format!(
        "aire rectangle : {}\naire triangle  : {} (exacte {})\nvolume cube    : {}\nvolume prisme  : {}",
        r.rectangle_area,
        r.triangle_area,
        format_rational(&r.triangle_exact),
        r.cube_volume,
        r.prism_volume,
    )
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntrees,
    ClearResultats,
    ResetTotal,
}
