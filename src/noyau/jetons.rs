// src/noyau/jetons.rs

use super::erreurs::ErreurCalc;

#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    // Littéral numérique BRUT. Le parse f64 se fait à l'évaluation :
    // "1.2.3" passe la tokenisation et échoue tard (contrat conservé).
    // Les littéraux négatifs sont déjà fusionnés ici ("-3" est UN jeton).
    Num(String),

    // Nom de fonction (sin/cos/...). La validation se fait au passage RPN.
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret, // ^

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - littéraux numériques (chiffres + point, pas d'exposant)
/// - opérateurs + - * / % ^
/// - parenthèses ( )
/// - identifiants (lettres seulement) — noms de fonctions
/// - moins unaire, résolu au balayage (voir ci-dessous)
///
/// Moins unaire : un '-' en tête d'entrée, ou précédé (dans la chaîne sans
/// espaces) d'un de `+ - * / ^ (`, amorce un littéral négatif au lieu de
/// produire un opérateur. Ni '%' ni '+' n'ont d'équivalent : asymétries
/// conservées telles quelles.
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, ErreurCalc> {
    // Aucune frontière de jeton n'est sensible aux espaces : on les retire
    // tous avant le balayage ("2 3" devient le littéral "23").
    let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();

    let mut out = Vec::new();
    let mut nombre = String::new();
    let mut ident = String::new();

    for (i, &c) in chars.iter().enumerate() {
        // Littéral numérique : on accumule sans valider (points multiples
        // acceptés ici, rejetés au parse f64).
        if c.is_ascii_digit() || c == '.' {
            nombre.push(c);
            continue;
        }

        // Nom de fonction : lettres seulement.
        if c.is_alphabetic() {
            ident.push(c);
            continue;
        }

        // Autre caractère : on solde d'abord les tampons en cours.
        if !nombre.is_empty() {
            out.push(Jeton::Num(std::mem::take(&mut nombre)));
        }
        if !ident.is_empty() {
            out.push(Jeton::Ident(std::mem::take(&mut ident)));
        }

        // Moins unaire : amorce un littéral négatif.
        if c == '-' && (i == 0 || matches!(chars[i - 1], '+' | '-' | '*' | '/' | '^' | '(')) {
            nombre.push('-');
            continue;
        }

        out.push(match c {
            '+' => Jeton::Plus,
            '-' => Jeton::Minus,
            '*' => Jeton::Star,
            '/' => Jeton::Slash,
            '%' => Jeton::Percent,
            '^' => Jeton::Caret,
            '(' => Jeton::LPar,
            ')' => Jeton::RPar,
            autre => return Err(ErreurCalc::CaractereInconnu(autre)),
        });
    }

    // Fin d'entrée : on solde les tampons restants.
    if !nombre.is_empty() {
        out.push(Jeton::Num(nombre));
    }
    if !ident.is_empty() {
        out.push(Jeton::Ident(ident));
    }

    Ok(out)
}

/// Format utilitaire (debug/tests) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    let mut out = Vec::new();
    for j in jetons {
        let s = match j {
            Jeton::Num(t) => t.clone(),
            Jeton::Ident(nom) => nom.clone(),

            Jeton::Plus => "+".to_string(),
            Jeton::Minus => "-".to_string(),
            Jeton::Star => "*".to_string(),
            Jeton::Slash => "/".to_string(),
            Jeton::Percent => "%".to_string(),
            Jeton::Caret => "^".to_string(),

            Jeton::LPar => "(".to_string(),
            Jeton::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
