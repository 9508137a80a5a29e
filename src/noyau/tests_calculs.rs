//! Tests calculs (campagne) : invariants + contrats de comportement.
//!
//! Notes (alignées sur l'état du noyau) :
//! - '^' est associatif À GAUCHE (dépilage à précédence >=) : 2^3^2 = 64.
//! - sin/cos/tan prennent des DEGRÉS.
//! - factorial hors domaine rend NaN (jamais d'erreur) ; sqrt et log, eux,
//!   échouent dur hors domaine.
//! - les espaces ne portent aucune frontière : "2 3" est le littéral 23.

use super::eval::{evaluer, evaluer_texte};
use super::jetons::{format_jetons, tokenize};
use super::rpn::en_rpn;

fn eval_ok(expr: &str) -> f64 {
    evaluer(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_proche(expr: &str, attendu: f64) {
    let v = eval_ok(expr);
    assert!(
        (v - attendu).abs() < 1e-9,
        "expr={expr:?} obtenu={v} attendu={attendu}"
    );
}

/* ------------------ précédence : équivalence avec le calcul direct ------------------ */

#[test]
fn calc_precedence_reference() {
    assert_proche("1 + 2 * 3 - 4 / 2", 5.0);
    assert_proche("2 * 3 % 4", 2.0); // (2*3) % 4
    assert_proche("10 % 3 + 1", 2.0);
    assert_proche("2 ^ 2 ^ 3", 64.0); // (2^2)^3, pas 2^(2^3)
    assert_proche("100 / 10 / 5", 2.0); // (100/10)/5
    assert_proche("2 + 3 ^ 2 * 2", 20.0);
}

#[test]
fn calc_parentheses_imbriquees() {
    assert_proche("((2 + 3) * (4 - 1)) ^ 2", 225.0);
    assert_proche("(((7)))", 7.0);
}

#[test]
fn calc_espaces_sans_frontiere() {
    // contrat hérité : la suppression des espaces colle les chiffres
    assert_proche("2 3 + 1", 24.0);
}

/* ------------------ identités trigonométriques (degrés) ------------------ */

#[test]
fn calc_pythagore_degres() {
    for angle in [0, 30, 45, 60, 90, 123, 270] {
        let expr = format!("sin({angle}) ^ 2 + cos({angle}) ^ 2");
        let v = eval_ok(&expr);
        assert!((v - 1.0).abs() < 1e-9, "angle={angle} obtenu={v}");
    }
}

#[test]
fn calc_tan_coherente() {
    // tan(x) = sin(x)/cos(x) hors zéros du cosinus
    for angle in [10, 20, 45, 75] {
        let direct = eval_ok(&format!("tan({angle})"));
        let quotient = eval_ok(&format!("sin({angle}) / cos({angle})"));
        assert!(
            (direct - quotient).abs() < 1e-9,
            "angle={angle} tan={direct} sin/cos={quotient}"
        );
    }
}

#[test]
fn calc_sqrt_et_log_composes() {
    assert_proche("sqrt(sqrt(16))", 2.0);
    assert_proche("log(sqrt(2.718281828459045 ^ 2))", 1.0);
}

/* ------------------ déterminisme ------------------ */

#[test]
fn calc_rpn_deterministe() {
    let jetons = tokenize("sin(30) + 2 * (1 - 4) ^ 2").unwrap();
    let a = format_jetons(&en_rpn(&jetons).unwrap());
    let b = format_jetons(&en_rpn(&jetons).unwrap());
    assert_eq!(a, b);
    assert_eq!(a, "30 sin 2 1 4 - 2 ^ * +");
}

#[test]
fn calc_idempotence_texte() {
    // même entrée => même sortie, y compris pour NaN et les erreurs
    for expr in ["3 + 4 * 2", "factorial(-3)", "10 / 0", "sqrt(2)", "10 % 0"] {
        assert_eq!(evaluer_texte(expr), evaluer_texte(expr), "expr={expr:?}");
    }
}

/* ------------------ frontières d'erreur ------------------ */

#[test]
fn calc_erreurs_recuperables() {
    // jamais de panique : tout revient en Err
    for expr in [
        "", "(", ")", "2 +", "* 2", "log(0)", "sqrt(-1)", "foo(1)", "1.2.3", "2 + $", "sin()",
        "(2)(3)",
    ] {
        assert!(evaluer(expr).is_err(), "expr={expr:?}");
    }
}

#[test]
fn calc_nan_se_propage() {
    // factorial hors domaine contamine l'expression sans la faire échouer
    assert!(eval_ok("factorial(1.5) + 1").is_nan());
    assert!(eval_ok("2 * factorial(-3)").is_nan());
}

#[test]
fn calc_moins_unaire_et_fonctions() {
    assert_proche("sin(-90)", -1.0);
    assert_proche("factorial(3) - -1", 7.0);
}
