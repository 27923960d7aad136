// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Pavé de boutons : toute touche passe par AppCalc::saisir (sauf "=")
// - Clavier : les caractères tapés suivent le même chemin que les boutons,
//   Enter évalue, un collage valide remplace l'entrée
// - Panneau latéral : historique cliquable (recopie dans le presse-papiers)
//   et emplacements mémoire avec leurs commandes
//
// Note :
// - PAS de Key::NumEnter (n'existe pas dans egui 0.33.x)

use eframe::egui;

use crate::conversion::{self, Categorie};
use crate::noyau;

use super::etat::{AppCalc, Onglet, PanneauLateral};

/// Pavé standard ; les cases vides restent inertes, "=" évalue.
const PAVE: [[&str; 5]; 7] = [
    ["MC", "MR", "M+", "M-", "MS"],
    ["%", "CE", "C", "←", "1/x"],
    ["(", ")", "!", "^", "√"],
    ["7", "8", "9", "/", "*"],
    ["4", "5", "6", "-", "+"],
    ["1", "2", "3", "±", "="],
    ["0", ".", "", "", ""],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.onglet, Onglet::Calculatrice, "Calculatrice");
            ui.selectable_value(&mut self.onglet, Onglet::Convertisseur, "Convertisseur");
        });
        ui.separator();

        match self.onglet {
            Onglet::Calculatrice => self.ui_calculatrice(ui),
            Onglet::Convertisseur => self.ui_convertisseur(ui),
        }
    }

    /// Contenu du panneau latéral (historique / mémoire), appelé depuis app.rs.
    pub fn ui_panneau(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.panneau, PanneauLateral::Historique, "Historique");
            ui.selectable_value(&mut self.panneau, PanneauLateral::Memoire, "Mémoire");
        });
        ui.separator();

        match self.panneau {
            PanneauLateral::Historique => self.ui_historique(ui),
            PanneauLateral::Memoire => self.ui_memoire(ui),
        }
    }

    /* ------------------------ Calculatrice ------------------------ */

    fn ui_calculatrice(&mut self, ui: &mut egui::Ui) {
        self.gerer_clavier(ui);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_affichage(ui);
                ui.add_space(8.0);
                self.ui_pave(ui);
            });
    }

    /// Écran : expression figée (petite ligne) + entrée ou dernier résultat.
    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.monospace(
                        egui::RichText::new(&self.expression_affichee)
                            .weak()
                            .size(14.0),
                    );
                    let ligne = self.ligne_resultat().to_owned();
                    ui.monospace(egui::RichText::new(ligne).size(28.0));
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_standard")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for touche in ligne {
                        self.bouton(ui, touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: &str) {
        if touche.is_empty() {
            ui.label("");
            return;
        }
        let resp = ui.add_sized([52.0, 32.0], egui::Button::new(touche));
        if !resp.clicked() {
            return;
        }
        if touche == "=" {
            self.evaluer_et_archiver();
        } else {
            self.saisir(touche);
        }
    }

    /// Clavier physique : mêmes chemins que les boutons.
    fn gerer_clavier(&mut self, ui: &mut egui::Ui) {
        let evenements = ui.input(|i| i.events.clone());
        for evenement in evenements {
            match evenement {
                egui::Event::Text(texte) => {
                    for c in texte.chars() {
                        if c == '=' {
                            self.evaluer_et_archiver();
                        } else {
                            self.saisir(&c.to_string());
                        }
                    }
                }
                // Un collage valide remplace l'entrée ; sinon il est ignoré.
                egui::Event::Paste(texte) => {
                    if noyau::valider_expression(&texte) {
                        self.entree = texte;
                        self.ecraser_entree = false;
                    } else {
                        log::debug!("collage refusé: {texte}");
                    }
                }
                _ => {}
            }
        }

        if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.evaluer_et_archiver();
        }
        if ui.input(|i| i.key_pressed(egui::Key::Backspace)) {
            self.saisir("←");
        }
    }

    /// `=` : normaliser, évaluer via le noyau, figer l'expression, archiver.
    ///
    /// Une expression hors alphabet est signalée dans le journal mais tout de
    /// même évaluée. Une erreur du noyau laisse l'affichage en l'état.
    fn evaluer_et_archiver(&mut self) {
        if self.entree.is_empty() {
            return;
        }
        if !noyau::valider_expression(&self.entree) {
            log::warn!("expression hors alphabet: {}", self.entree);
        }

        let expression = noyau::preparer_expression(&self.entree);
        self.expression_affichee = format!("{expression}=");
        self.entree.clear();

        match noyau::evaluer(&expression) {
            Ok(valeur) => {
                self.resultat_affiche = format!("{valeur}");
                self.archiver(
                    self.expression_affichee.clone(),
                    self.resultat_affiche.clone(),
                );
                self.ecraser_entree = true;
            }
            Err(e) => log::error!("évaluation impossible ({expression}): {e}"),
        }
    }

    /* ------------------------ Historique / mémoire ------------------------ */

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if self.historique.is_empty() {
                    ui.weak("Aucun calcul pour le moment");
                    return;
                }

                let mut rappel = None;
                for (i, element) in self.historique.iter().enumerate().rev() {
                    let texte = format!("{}\n{}", element.expression, element.resultat);
                    if ui.selectable_label(false, texte).clicked() {
                        rappel = Some(i);
                    }
                }
                if let Some(i) = rappel {
                    if let Some(entree) = self.rappeler_historique(i) {
                        ui.ctx().copy_text(entree);
                    }
                }
            });
    }

    fn ui_memoire(&mut self, ui: &mut egui::Ui) {
        if self.memoire.is_empty() {
            ui.weak("Mémoire vide");
            return;
        }

        // Les clics sont collectés avant de toucher à la liste.
        let mut commandes: Vec<(usize, &str)> = Vec::new();
        for (i, valeur) in self.memoire.iter().enumerate() {
            ui.horizontal(|ui| {
                ui.monospace(format!("{valeur}"));
                for action in ["M+", "M-", "MC"] {
                    if ui.small_button(action).clicked() {
                        commandes.push((i, action));
                    }
                }
            });
        }
        for (i, action) in commandes {
            self.commande_memoire(action, Some(i));
        }
    }

    /* ------------------------ Convertisseur ------------------------ */

    fn ui_convertisseur(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for categorie in Categorie::TOUTES {
                let actif = self.convertisseur.categorie == categorie;
                if ui.selectable_label(actif, categorie.nom()).clicked() && !actif {
                    self.convertisseur.choisir_categorie(categorie);
                }
            }
        });
        ui.separator();

        let categorie = self.convertisseur.categorie;
        let unites = categorie.unites();

        ui.horizontal(|ui| {
            let mut saisie = self.convertisseur.saisie.clone();
            let resp = ui.add(
                egui::TextEdit::singleline(&mut saisie)
                    .desired_width(160.0)
                    .hint_text("0"),
            );
            if resp.changed() {
                self.saisie_convertisseur(&saisie);
            }
            Self::choix_unite(ui, "unite_source", unites, &mut self.convertisseur.unite_source);
        });

        ui.horizontal(|ui| {
            let valeur = self.valeur_convertisseur();
            let de = unites[self.convertisseur.unite_source];
            let vers = unites[self.convertisseur.unite_cible];
            match conversion::convertir(categorie, valeur, de, vers) {
                Ok(resultat) => {
                    ui.monospace(egui::RichText::new(format!("{resultat:.3}")).size(22.0));
                }
                Err(e) => {
                    log::error!("conversion impossible: {e}");
                    ui.monospace("indisponible");
                }
            }
            Self::choix_unite(ui, "unite_cible", unites, &mut self.convertisseur.unite_cible);
        });
    }

    fn choix_unite(ui: &mut egui::Ui, id: &str, unites: &[&str], choix: &mut usize) {
        egui::ComboBox::from_id_salt(id)
            .selected_text(unites.get(*choix).copied().unwrap_or("?"))
            .show_ui(ui, |ui| {
                for (i, unite) in unites.iter().enumerate() {
                    ui.selectable_value(choix, i, *unite);
                }
            });
    }
}
