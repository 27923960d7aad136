// src/app.rs
//
// Calculatrice standard — module App (racine)
// -------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - La gestion du clavier est faite dans vue.rs, avec la saisie des boutons.
// - Ici, seulement le raccourci global ESC et la mise en page des panneaux.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Raccourci clavier global minimal (safe natif + web) :
        // ESC = ouvrir/fermer le panneau historique/mémoire.
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.panneau_ouvert = !self.panneau_ouvert;
        }

        if self.panneau_ouvert {
            egui::SidePanel::right("panneau_lateral")
                .default_width(220.0)
                .show(ctx, |ui| {
                    self.ui_panneau(ui); // méthode publique (dans vue.rs)
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
