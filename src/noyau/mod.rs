//! Noyau — évaluation arithmétique flottante
//!
//! Organisation interne :
//! - priorite.rs    : table des priorités des opérateurs
//! - parentheses.rs : réduction des groupes (…) par évaluation récursive
//! - analyse.rs     : recherche de l'opérateur de coupe (balayage droite→gauche)
//! - eval.rs        : évaluation récursive (préfixes, %, coupe, littéraux)
//! - operations.rs  : répartiteur des opérations primitives + factorielle
//! - validation.rs  : prédicat de bonne formation + normalisation d'entrée
//! - erreurs.rs     : taxonomie d'erreurs
//!
//! Le noyau est une fonction pure de sa chaîne d'entrée : pas d'état retenu,
//! réentrant, aucun panic quelle que soit l'entrée (une entrée malformée
//! produit un nombre tronqué ou NaN, jamais un plantage).

pub mod analyse;
pub mod erreurs;
pub mod eval;
pub mod operations;
pub mod parentheses;
pub mod priorite;
pub mod validation;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreurs::ErreurNoyau;
pub use eval::evaluer;
pub use validation::{preparer_expression, valider_expression};
