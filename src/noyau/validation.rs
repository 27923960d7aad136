// src/noyau/validation.rs
//
// Bonne formation + normalisation d'entrée
// ----------------------------------------
// Le prédicat est un simple contrôle de jeu de caractères : il ne vérifie
// ni l'appariement des parenthèses ni la position des opérateurs. Un échec
// N'EMPÊCHE PAS l'évaluation — l'appelant se contente de journaliser et
// évalue quand même (politique « muet pour l'utilisateur, bruyant pour la
// console »).

use std::sync::OnceLock;

use regex::Regex;

fn motif_expression() -> &'static Regex {
    static MOTIF: OnceLock<Regex> = OnceLock::new();
    MOTIF.get_or_init(|| {
        // Chiffres (point ou virgule décimale), opérateurs, parenthèses.
        Regex::new(r"^(?:[+\-*/^(),]|(?:\d+(?:[.,]\d+)?|[.,]\d+)|√|\^|!|%|/|\*)+$")
            .expect("motif d'expression valide")
    })
}

/// Prédicat de bonne formation (jeu de caractères uniquement).
pub fn valider_expression(expression: &str) -> bool {
    motif_expression().is_match(expression)
}

/// Normalisation avant évaluation : virgule décimale → point,
/// alias clavier `s` → `√`.
pub fn preparer_expression(expression: &str) -> String {
    expression.replace(',', ".").replace('s', "√")
}
