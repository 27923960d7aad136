//! Campagne de propriétés du noyau : priorités, associativité, préfixes,
//! suffixes, pour-cent, dégénérés flottants, erreurs, idempotence.
//!
//! Les bizarreries héritées (coupe √ qui abandonne sa gauche, factorielle
//! négative valant 1) sont testées comme des contrats, pas corrigées.

use super::erreurs::ErreurNoyau;
use super::evaluer;
use super::operations::factorielle;

fn eval_ok(exp: &str) -> f64 {
    evaluer(exp).unwrap_or_else(|e| panic!("evaluer({exp:?}) erreur: {e}"))
}

fn assert_vaut(exp: &str, attendu: f64) {
    let obtenu = eval_ok(exp);
    assert!(
        (obtenu - attendu).abs() < 1e-9,
        "exp={exp:?} obtenu={obtenu} attendu={attendu}"
    );
}

/* ------------------------ Priorités et parenthèses ------------------------ */

#[test]
fn operations_de_base() {
    assert_vaut("2+3", 5.0);
    assert_vaut("7-2", 5.0);
    assert_vaut("6*7", 42.0);
    assert_vaut("9/2", 4.5);
    assert_vaut("2^3", 8.0);
}

#[test]
fn multiplication_lie_plus_fort() {
    assert_vaut("2+3*4", 14.0);
    assert_vaut("3*4+2", 14.0);
    assert_vaut("10-2*3", 4.0);
}

#[test]
fn parentheses_prioritaires() {
    assert_vaut("(2+3)*4", 20.0);
    assert_vaut("((1+2)*(3+4))", 21.0);
    assert_vaut("2*(3+(4*5))", 46.0);
    assert_vaut("-(2+3)", -5.0);
}

#[test]
fn chaines_evaluees_de_gauche_a_droite() {
    assert_vaut("8-3-2", 3.0);
    assert_vaut("2-3+4", 3.0);
    assert_vaut("100/5/2", 10.0);
    assert_vaut("1-2-3-4", -8.0);
}

/* ------------------------ Signes ------------------------ */

#[test]
fn moins_unaire() {
    assert_vaut("-5+3", -2.0);
    assert_vaut("-5-3", -8.0);
    assert_vaut("5*-3", -15.0);
    assert_vaut("5--3", 8.0);
    assert_vaut("-5*-3", 15.0);
}

/* ------------------------ Factorielle et racine ------------------------ */

#[test]
fn factorielle_suffixe() {
    assert_vaut("5!", 120.0);
    assert_vaut("0!", 1.0);
    assert_vaut("2*3!", 12.0);
    assert_vaut("2!+1", 3.0);
    assert_vaut("(3!)!", 720.0);
    assert_vaut("-5!", -120.0);
}

#[test]
fn racine_prefixe() {
    assert_vaut("√9", 3.0);
    assert_vaut("√√81", 3.0);
    assert_vaut("2*√9", 6.0);
    assert_vaut("2+√9", 5.0);
    assert_vaut("-√9", -3.0);
    assert_vaut("√4!", f64::sqrt(24.0));
}

#[test]
fn bizarreries_heritees_des_coupes() {
    // Coupe √ : l'opérande gauche est abandonné.
    assert_vaut("2√9", 3.0);
    // Coupe ! (le `-` suivant est pris pour un moins unaire) :
    // l'opérande droit est ignoré par le répartiteur.
    assert_vaut("3!-2", 6.0);
}

/* ------------------------ Pour-cent ------------------------ */

#[test]
fn pour_cent_litteral() {
    assert_vaut("50%", 0.5);
    assert_vaut("-50%", -0.5);
    assert_vaut("50%+1", 1.5);
}

#[test]
fn pour_cent_relatif_a_gauche() {
    assert_vaut("100+10%", 110.0);
    assert_vaut("100-10%", 90.0);
    assert_vaut("100*10%", 10.0);
    assert_vaut("100/10%", 1000.0);
}

/* ------------------------ Dégénérés flottants ------------------------ */

#[test]
fn degeneres_sont_des_valeurs() {
    assert_eq!(eval_ok("1/0"), f64::INFINITY);
    assert_eq!(eval_ok("-1/0"), f64::NEG_INFINITY);
    assert!(eval_ok("0/0").is_nan());
    assert!(eval_ok("√(0-9)").is_nan());
}

#[test]
fn chaine_vide_vaut_zero() {
    assert_vaut("", 0.0);
    assert_vaut("   ", 0.0);
}

/* ------------------------ Erreurs propagées ------------------------ */

#[test]
fn factorielle_non_entiere_propagee() {
    assert_eq!(
        evaluer("4.5!"),
        Err(ErreurNoyau::FactorielleNonEntiere(4.5))
    );
    assert_eq!(evaluer("(1/2)!"), Err(ErreurNoyau::FactorielleNonEntiere(0.5)));
}

#[test]
fn factorielle_d_un_nan_donne_des_erreurs_comparables() {
    // (0/0)! se réduit en NaN! : l'erreur porte un opérande NaN et doit
    // rester égale à elle-même d'une évaluation à l'autre.
    let premiere = evaluer("(0/0)!");
    let seconde = evaluer("(0/0)!");
    assert!(matches!(
        premiere,
        Err(ErreurNoyau::FactorielleNonEntiere(n)) if n.is_nan()
    ));
    assert_eq!(premiere, seconde);
}

#[test]
fn factorielle_negative_vaut_un() {
    assert_eq!(factorielle(-3.0), Ok(1.0));
    // Via l'évaluateur, le moins unaire passe devant le `!` final :
    // (0-3)! se réduit en -3! puis -(3!) = -6.
    assert_vaut("(0-3)!", -6.0);
}

/* ------------------------ Entrées malformées ------------------------ */

#[test]
fn malforme_sans_panic() {
    // Pas de garantie de valeur, seulement : pas de panic, un f64 sort.
    for exp in [
        "((2+3", "2+3)", ")(", "2)(3)", "..", "5+", "*5", "+", "-", "!", "%",
        "√", "5..2", "().", "(((((", ")))))",
    ] {
        let _ = evaluer(exp);
    }
    // Quelques-unes ont une valeur stable connue :
    assert_vaut("5+", 5.0);
    assert_vaut("*5", 0.0);
    assert_vaut("2+3)", 2.0);
}

/* ------------------------ Idempotence du ré-affichage ------------------------ */

#[test]
fn reevaluation_du_rendu_decimal() {
    for exp in ["2+3", "9/7", "2^0.5", "100+10%", "8-3-2", "1/3*3"] {
        let v = eval_ok(exp);
        let rendu = format!("{v}");
        let relu = eval_ok(&rendu);
        assert!(
            (relu - v).abs() <= f64::EPSILON * v.abs().max(1.0),
            "exp={exp:?} rendu={rendu:?} relu={relu}"
        );
    }
}
