// src/noyau/parentheses.rs
//
// Réduction des parenthèses
// -------------------------
// Contrat : en sortie, plus aucun groupe (…) apparié au niveau 0 ; la valeur
// de l'expression est inchangée.
//
// Chaque groupe est ÉVALUÉ (pas réduit) récursivement, sa valeur décimale
// est recollée à la place du span  (…)  entier, puis le balayage reprend
// depuis le début de la chaîne raccourcie. Stratégie volontairement simple
// et quadratique ; la longueur d'entrée est bornée en amont par l'UI.

use super::erreurs::ErreurNoyau;
use super::eval::evaluer_tranche;

/// Remplace chaque groupe `(…)` apparié par sa valeur numérique.
///
/// Les parenthèses non appariées sont laissées en place : l'analyse aval
/// produira alors un nombre tronqué ou NaN.
pub fn reduire_parentheses(exp: &[char]) -> Result<Vec<char>, ErreurNoyau> {
    let mut exp: Vec<char> = exp.to_vec();
    if !exp.contains(&'(') {
        return Ok(exp);
    }

    while let Some((debut, fin)) = premier_groupe(&exp) {
        let valeur = evaluer_tranche(&exp[debut + 1..fin])?;

        let mut recollee = Vec::with_capacity(exp.len());
        recollee.extend_from_slice(&exp[..debut]);
        recollee.extend(format!("{valeur}").chars());
        recollee.extend_from_slice(&exp[fin + 1..]);
        exp = recollee;
    }

    Ok(exp)
}

/// Premier groupe apparié au niveau 0 : indices de `(` et de `)`.
///
/// La profondeur peut devenir négative sur une `)` orpheline ; un groupe
/// n'est retenu que si une `)` ramène la profondeur exactement à 0.
fn premier_groupe(exp: &[char]) -> Option<(usize, usize)> {
    let mut profondeur: i32 = 0;
    let mut debut: Option<usize> = None;

    for (i, &c) in exp.iter().enumerate() {
        if c == '(' {
            if profondeur == 0 {
                debut = Some(i);
            }
            profondeur += 1;
        } else if c == ')' {
            profondeur -= 1;
            if profondeur == 0 {
                return debut.map(|d| (d, i));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduit(s: &str) -> String {
        let exp: Vec<char> = s.chars().collect();
        reduire_parentheses(&exp).unwrap().iter().collect()
    }

    #[test]
    fn groupe_simple() {
        assert_eq!(reduit("(2+3)*4"), "5*4");
    }

    #[test]
    fn groupes_imbriques_puis_reprise() {
        // Le groupe extérieur englobe tout : il est évalué d'un bloc.
        assert_eq!(reduit("((1+2)*(3+4))"), "21");
    }

    #[test]
    fn groupes_successifs() {
        assert_eq!(reduit("(1+2)+(3+4)"), "3+7");
    }

    #[test]
    fn groupe_vide() {
        assert_eq!(reduit("()"), "0");
    }

    #[test]
    fn valeur_negative_recollee() {
        assert_eq!(reduit("(2-5)*3"), "-3*3");
    }

    #[test]
    fn parentheses_orphelines_laissees() {
        assert_eq!(reduit("(2+3"), "(2+3");
        assert_eq!(reduit("2+3)"), "2+3)");
        assert_eq!(reduit(")("), ")(");
        assert_eq!(reduit("2)(3)"), "2)(3)");
    }
}
