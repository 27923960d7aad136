//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l'état de la calculatrice (entrée, affichage, historique,
//! mémoire, convertisseur) et offrir les actions des boutons sous forme de
//! méthodes pures sur l'état. Aucune logique d'affichage ici ; la seule
//! évaluation passe par `noyau::evaluer` au moment du `=`, dans la vue.

use std::sync::OnceLock;

use regex::Regex;

use crate::conversion::Categorie;

/// Garde-fou : longueur maximale de l'entrée calculatrice.
const LONGUEUR_MAX_ENTREE: usize = 120;

/// Garde-fou : longueur maximale de la saisie du convertisseur.
const LONGUEUR_MAX_CONVERTISSEUR: usize = 15;

/// Dernier nombre en fin d'entrée, précédé du début ou d'un opérateur.
fn re_dernier_nombre() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:^|[+\-*/^%])(-?\d+(?:\.\d+)?)$").unwrap())
}

/// N'importe quel nombre (pour retrouver le dernier via `find_iter`).
fn re_nombre() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-?\d+(?:\.\d+)?").unwrap())
}

/// Saisie numérique partielle acceptée par le convertisseur.
fn re_saisie_convertisseur() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-?\d*\.?\d*$").unwrap())
}

/// Une ligne d'historique : expression figée (avec le `=` final) et résultat.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementHistorique {
    pub expression: String,
    pub resultat: String,
}

/// Onglet principal de l'application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Onglet {
    Calculatrice,
    Convertisseur,
}

/// Onglet du panneau latéral.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanneauLateral {
    Historique,
    Memoire,
}

/// État propre au convertisseur d'unités.
#[derive(Clone, Debug)]
pub struct EtatConvertisseur {
    pub categorie: Categorie,
    pub saisie: String,
    pub unite_source: usize,
    pub unite_cible: usize,
}

impl Default for EtatConvertisseur {
    fn default() -> Self {
        Self {
            categorie: Categorie::Temperature,
            saisie: String::new(),
            unite_source: 0,
            unite_cible: 1, // deuxième unité de la catégorie par défaut
        }
    }
}

impl EtatConvertisseur {
    /// Changer de catégorie remet la saisie et les unités à zéro.
    pub fn choisir_categorie(&mut self, categorie: Categorie) {
        self.categorie = categorie;
        self.saisie.clear();
        self.unite_source = 0;
        self.unite_cible = 1;
    }
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,
    // Après un `=`, le prochain chiffre remplace l'entrée au lieu de s'ajouter.
    pub ecraser_entree: bool,

    // --- sorties ---
    pub expression_affichee: String, // dernière expression évaluée, suivie de `=`
    pub resultat_affiche: String,    // dernier résultat (ou "0" au démarrage)

    // --- historique / mémoire ---
    pub historique: Vec<ElementHistorique>,
    pub memoire: Vec<f64>, // emplacements, le plus récent en tête

    // --- navigation ---
    pub onglet: Onglet,
    pub panneau_ouvert: bool,
    pub panneau: PanneauLateral,

    // --- convertisseur ---
    pub convertisseur: EtatConvertisseur,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            ecraser_entree: false,
            expression_affichee: String::new(),
            resultat_affiche: "0".to_owned(),
            historique: Vec::new(),
            memoire: Vec::new(),
            onglet: Onglet::Calculatrice,
            panneau_ouvert: true,
            panneau: PanneauLateral::Historique,
            convertisseur: EtatConvertisseur::default(),
        }
    }
}

impl AppCalc {
    /* ------------------------ Saisie calculatrice ------------------------ */

    /// Point d'entrée unique des boutons et du clavier (hors `=`).
    ///
    /// Les alias clavier sont normalisés ici : `s`/`S` devient `√`,
    /// la virgule devient le point.
    pub fn saisir(&mut self, valeur: &str) {
        let valeur = if valeur.eq_ignore_ascii_case("s") {
            "√"
        } else if valeur == "," {
            "."
        } else {
            valeur
        };

        let supprime = matches!(valeur, "Delete" | "Backspace" | "←");
        if !supprime && self.entree.chars().count() >= LONGUEUR_MAX_ENTREE {
            self.entree = self.entree.chars().take(LONGUEUR_MAX_ENTREE).collect();
            return;
        }

        match valeur {
            "C" | "Delete" | "Del" => self.effacer_affichage(),
            "CE" => self.effacer_dernier_nombre(),
            "←" | "Backspace" => self.retour_arriere(),
            v if v.len() == 1 && v.as_bytes()[0].is_ascii_digit() => {
                if self.ecraser_entree {
                    self.entree = v.to_owned();
                    self.ecraser_entree = false;
                } else {
                    self.entree.push_str(v);
                }
            }
            "+" | "-" | "*" | "/" | "!" | "%" | "^" | "." | "√" => {
                let op = valeur.chars().next().unwrap_or('+');
                self.touche_operateur(op);
            }
            "±" => self.basculer_signe(),
            "1/x" => self.inverser_dernier_nombre(),
            "M+" | "M-" | "MC" | "MR" | "MS" => self.commande_memoire(valeur, None),
            autre => log::debug!("bouton non géré: {autre}"),
        }
    }

    /// Point ou opérateur : entrée vide amorcée à `0`, sauf pour `√` ;
    /// un opérateur tapé sur un opérateur remplace ce dernier.
    fn touche_operateur(&mut self, op: char) {
        if self.entree.is_empty() {
            if op == '√' {
                self.entree.push(op);
            } else {
                self.entree.push('0');
                self.entree.push(op);
            }
            return;
        }

        let dernier = self.entree.chars().last().unwrap_or('0');
        if dernier.is_ascii_digit() || dernier == ')' || op == '√' {
            self.entree.push(op);
        } else if "+-*/^%√!".contains(dernier) {
            self.entree.pop();
            self.entree.push(op);
        }
        // dernier caractère `.` ou `(` : on ignore la touche
    }

    /// ± : basculer le signe du dernier nombre de l'entrée.
    ///
    /// Sans effet si l'entrée ne se termine pas par un nombre, ou si ce
    /// nombre suit `!`, `%` ou `√` (il n'est alors pas un opérande libre).
    pub fn basculer_signe(&mut self) {
        if self.entree.is_empty() {
            return;
        }
        let Some(capture) = re_dernier_nombre().captures(&self.entree) else {
            return;
        };
        let Some(nombre) = capture.get(1) else {
            return;
        };
        let debut = nombre.start();
        if let Some(avant) = self.entree[..debut].chars().last() {
            if "!%√".contains(avant) {
                return;
            }
        }

        if self.entree[debut..].starts_with('-') {
            self.entree.remove(debut);
        } else {
            self.entree.insert(debut, '-');
        }
    }

    /// 1/x : remplacer le dernier nombre `n` de l'entrée par `(1/(n))`.
    pub fn inverser_dernier_nombre(&mut self) {
        let Some(dernier) = re_nombre().find_iter(&self.entree).last() else {
            return;
        };
        if dernier.as_str().parse::<f64>() == Ok(0.0) {
            return;
        }
        let (debut, fin) = (dernier.start(), dernier.end());
        let enveloppe = format!("(1/({}))", dernier.as_str());
        self.entree.replace_range(debut..fin, &enveloppe);
    }

    /// CE : effacer le dernier nombre (et l'opérateur isolé qui le suivrait).
    pub fn effacer_dernier_nombre(&mut self) {
        if !self.entree.chars().last().is_some_and(|c| c.is_ascii_digit()) {
            self.entree.pop();
        }
        while self.entree.chars().last().is_some_and(|c| c.is_ascii_digit()) {
            self.entree.pop();
        }
    }

    /// ← : effacer le dernier caractère.
    pub fn retour_arriere(&mut self) {
        self.entree.pop();
    }

    /// C : tout effacer, l'affichage revient à `0`.
    pub fn effacer_affichage(&mut self) {
        self.entree.clear();
        self.expression_affichee.clear();
        self.resultat_affiche = "0".to_owned();
        self.ecraser_entree = false;
    }

    /// Texte de la grande ligne d'affichage.
    pub fn ligne_resultat(&self) -> &str {
        if self.entree.is_empty() {
            &self.resultat_affiche
        } else {
            &self.entree
        }
    }

    /// Valeur numérique de la grande ligne (premier nombre lisible, ou 0).
    fn valeur_affichee(&self) -> f64 {
        let texte = self.ligne_resultat();
        if let Ok(v) = texte.parse::<f64>() {
            return v;
        }
        re_nombre()
            .find(texte)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0.0)
    }

    /* ------------------------ Mémoire ------------------------ */

    /// Commandes mémoire. `cible` vise un emplacement précis (boutons du
    /// panneau) ; sans cible, la commande porte sur l'emplacement de tête.
    pub fn commande_memoire(&mut self, action: &str, cible: Option<usize>) {
        let valeur = self.valeur_affichee();

        if let Some(i) = cible {
            if i >= self.memoire.len() {
                return;
            }
            match action {
                "M+" => self.memoire[i] += valeur,
                "M-" => self.memoire[i] -= valeur,
                "MC" => {
                    self.memoire.remove(i);
                }
                autre => log::debug!("commande mémoire non gérée: {autre}"),
            }
            return;
        }

        // M+ / M- sans mémoire : on crée un emplacement à zéro.
        if matches!(action, "M+" | "M-") && self.memoire.is_empty() {
            self.memoire.push(0.0);
        }

        match action {
            "MC" => self.memoire.clear(),
            "MR" => {
                if let Some(&v) = self.memoire.first() {
                    self.entree = format!("{v}");
                    self.ecraser_entree = false;
                }
            }
            "MS" => self.memoire.insert(0, valeur),
            "M+" => self.memoire[0] += valeur,
            "M-" => self.memoire[0] -= valeur,
            autre => log::debug!("commande mémoire non gérée: {autre}"),
        }
    }

    /* ------------------------ Historique ------------------------ */

    /// Archiver une évaluation réussie.
    pub fn archiver(&mut self, expression: String, resultat: String) {
        self.historique.push(ElementHistorique {
            expression,
            resultat,
        });
    }

    /// Recharger une ligne d'historique dans l'affichage. Retourne le texte
    /// de l'entrée restaurée (l'expression sans son `=` final), que la vue
    /// place dans le presse-papiers.
    pub fn rappeler_historique(&mut self, indice: usize) -> Option<String> {
        let element = self.historique.get(indice)?.clone();
        let entree = element
            .expression
            .strip_suffix('=')
            .unwrap_or(&element.expression)
            .to_owned();
        self.expression_affichee = element.expression;
        self.resultat_affiche = element.resultat;
        self.entree = entree.clone();
        self.ecraser_entree = false;
        Some(entree)
    }

    /* ------------------------ Convertisseur ------------------------ */

    /// Filtrer la saisie du convertisseur : nombre décimal partiel
    /// uniquement, zéros de tête nettoyés, longueur bornée.
    pub fn saisie_convertisseur(&mut self, texte: &str) {
        if !re_saisie_convertisseur().is_match(texte) {
            return; // saisie refusée, l'ancienne valeur reste
        }
        let mut texte = texte.to_owned();
        if texte != "0" && texte != "-0" {
            let negatif = texte.starts_with('-');
            let chiffres = texte.trim_start_matches('-').trim_start_matches('0');
            if chiffres.len() != texte.len() - usize::from(negatif) {
                let nettoye = if chiffres.is_empty() || chiffres.starts_with('.') {
                    format!("0{chiffres}")
                } else {
                    chiffres.to_owned()
                };
                texte = if negatif {
                    format!("-{nettoye}")
                } else {
                    nettoye
                };
            }
        }
        if texte.chars().count() > LONGUEUR_MAX_CONVERTISSEUR {
            return;
        }
        self.convertisseur.saisie = texte;
    }

    /// Valeur numérique de la saisie du convertisseur (0 si vide).
    pub fn valeur_convertisseur(&self) -> f64 {
        self.convertisseur.saisie.parse().unwrap_or(0.0)
    }
}
