// src/noyau/erreurs.rs

use thiserror::Error;

/// Erreurs levées par le noyau.
///
/// Les résultats flottants dégénérés (inf, -inf, NaN) ne sont PAS des
/// erreurs : ce sont des valeurs affichables telles quelles.
#[derive(Debug, Error, Clone, Copy)]
pub enum ErreurNoyau {
    /// Le répartiteur a reçu un symbole hors de son jeu connu.
    /// Invariant violé : l'analyse n'émet que des symboles de la table.
    #[error("opérateur non géré: '{0}'")]
    OperateurInconnu(char),

    /// Factorielle d'un opérande non entier (NaN et inf inclus).
    #[error("factorielle d'un nombre non entier: {0}")]
    FactorielleNonEntiere(f64),
}

// Égalité totale sur les erreurs : deux opérandes NaN portent la même
// erreur (la dérivation suivrait NaN != NaN et casserait la comparaison).
impl PartialEq for ErreurNoyau {
    fn eq(&self, autre: &Self) -> bool {
        match (self, autre) {
            (Self::OperateurInconnu(a), Self::OperateurInconnu(b)) => a == b,
            (Self::FactorielleNonEntiere(a), Self::FactorielleNonEntiere(b)) => {
                a == b || (a.is_nan() && b.is_nan())
            }
            _ => false,
        }
    }
}
