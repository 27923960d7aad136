// src/noyau/eval.rs
//
// Évaluation récursive
// --------------------
// descente sur tranches de caractères (pas de flux de jetons) :
//
//   chaîne brute → réduction des parenthèses → préfixes (+, √)
//     → pour-cent littéral → coupe au moins prioritaire
//     → récursion gauche/droite → répartiteur → résultat
//
// Ordre des vérifications sur une tranche :
// 1. vide → 0
// 2. réduction des parenthèses (idempotente)
// 3. `+` en tête → signe neutre
// 4. `√` en tête → racine de TOUT le reste
// 5. `%` final sans opérateur dans le reste → littéral pour-cent
// 6. coupe ; sans candidat : `-` en tête (moins unaire), `!` final
//    (factorielle), sinon littéral numérique
// 7. coupe `√` : racine de la tranche droite, la gauche est IGNORÉE
//    (comportement hérité, conservé — cf. DESIGN.md)
// 8. coupe ordinaire : récursion gauche, pour-cent relatif à gauche si la
//    tranche droite finit par `%`, sinon récursion droite + répartiteur.
//
// La tranche est en `&[char]` : `√` fait trois octets en UTF-8, indexer la
// chaîne par octets est exclu.

use super::analyse::operateur_le_moins_prioritaire;
use super::erreurs::ErreurNoyau;
use super::operations::{effectuer_operation, factorielle};
use super::parentheses::reduire_parentheses;
use super::priorite::contient_operateur;

/// Point d'entrée unique du noyau : évalue une expression déjà normalisée
/// (virgules et alias remplacés en amont, cf. `validation`).
///
/// Les blancs sont retirés avant l'évaluation. Chaîne vide → 0.
pub fn evaluer(expression: &str) -> Result<f64, ErreurNoyau> {
    let exp: Vec<char> = expression.chars().filter(|c| !c.is_whitespace()).collect();
    evaluer_tranche(&exp)
}

/// Évaluation d'une tranche (récursif, pur).
pub(super) fn evaluer_tranche(exp: &[char]) -> Result<f64, ErreurNoyau> {
    if exp.is_empty() {
        return Ok(0.0);
    }

    let reduite = reduire_parentheses(exp)?;
    let exp = &reduite[..];
    if exp.is_empty() {
        return Ok(0.0);
    }

    if exp[0] == '+' {
        return evaluer_tranche(&exp[1..]);
    }
    if exp[0] == '√' {
        // La forme préfixe consomme TOUT le reste : √9+16 = √(9+16) = 5.
        return Ok(evaluer_tranche(&exp[1..])?.sqrt());
    }

    let dernier = exp.len() - 1;
    if exp[dernier] == '%' && !contient_operateur(&exp[..dernier]) {
        return Ok(parse_nombre(&exp[..dernier]) / 100.0);
    }

    let Some((operateur, indice)) = operateur_le_moins_prioritaire(exp) else {
        if exp[0] == '-' {
            return Ok(-evaluer_tranche(&exp[1..])?);
        }
        if exp[dernier] == '!' {
            return factorielle(evaluer_tranche(&exp[..dernier])?);
        }
        return Ok(parse_nombre(exp));
    };

    let gauche = &exp[..indice];
    let droite = &exp[indice + 1..];

    if operateur == '√' {
        // Coupe √ : l'opérande gauche est abandonné (2√9 = 3). Branche
        // rare — la priorité maximale de √ ne la laisse gagner qu'en
        // l'absence de tout opérateur moins prioritaire.
        return Ok(evaluer_tranche(droite)?.sqrt());
    }

    let valeur_gauche = evaluer_tranche(gauche)?;

    if droite.last() == Some(&'%') {
        // Pour-cent relatif à l'opérande gauche selon l'opérateur trouvé.
        let pour_cent = parse_nombre(&droite[..droite.len() - 1]) / 100.0;
        return Ok(match operateur {
            '+' => valeur_gauche + valeur_gauche * pour_cent,
            '-' => valeur_gauche - valeur_gauche * pour_cent,
            '*' => valeur_gauche * pour_cent,
            '/' => valeur_gauche / pour_cent,
            _ => effectuer_operation(valeur_gauche, operateur, pour_cent)?,
        });
    }

    let valeur_droite = evaluer_tranche(droite)?;
    effectuer_operation(valeur_gauche, operateur, valeur_droite)
}

/// Littéral numérique, sémantique « parseFloat » : préfixe numérique le
/// plus long (`[signe] chiffres [. chiffres]`), NaN s'il n'y en a pas.
///
/// La tranche entière est d'abord tentée telle quelle, ce qui accepte aussi
/// les formes `inf` / `NaN` recollées par la réduction des parenthèses.
fn parse_nombre(exp: &[char]) -> f64 {
    let entiere: String = exp.iter().collect();
    if let Ok(v) = entiere.parse::<f64>() {
        return v;
    }

    let mut fin = 0_usize;
    let mut i = 0_usize;
    if matches!(exp.first(), Some('+' | '-')) {
        i = 1;
    }
    while i < exp.len() && exp[i].is_ascii_digit() {
        i += 1;
        fin = i;
    }
    if i < exp.len() && exp[i] == '.' {
        let point = i;
        i += 1;
        while i < exp.len() && exp[i].is_ascii_digit() {
            i += 1;
        }
        if i > point + 1 {
            fin = i;
        }
    }

    if fin == 0 {
        return f64::NAN;
    }
    exp[..fin]
        .iter()
        .collect::<String>()
        .parse()
        .unwrap_or(f64::NAN)
}
