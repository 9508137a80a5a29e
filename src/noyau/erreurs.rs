//! Noyau — erreurs typées.
//!
//! Un seul enum pour les trois étages (jetons, rpn, eval). Chaque étage
//! retourne un `Result` ; l'échec est converti à la source, aucune panique
//! ne traverse la frontière du pipeline. Les messages sont destinés à
//! l'affichage direct (console, JSON).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurCalc {
    // --- tokenisation ---
    #[error("caractère inattendu: '{0}'")]
    CaractereInconnu(char),

    // --- passage en RPN ---
    #[error("jeton inconnu: '{0}'")]
    JetonInconnu(String),

    #[error("parenthèses non appariées")]
    ParentheseOrpheline,

    // --- évaluation postfixe ---
    #[error("nombre invalide: '{0}'")]
    NombreInvalide(String),

    #[error("opérandes insuffisantes")]
    OperandesInsuffisantes,

    #[error("fonction '{0}' sans argument")]
    FonctionSansArgument(String),

    #[error("argument invalide pour {fonction}: {argument}")]
    ArgumentInvalide {
        fonction: &'static str,
        argument: f64,
    },

    #[error("division par zéro")]
    DivisionParZero,

    #[error("expression invalide")]
    ExpressionInvalide,
}
