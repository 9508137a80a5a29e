//! Frontal console : menu interactif.
//!
//! Intègre noyau + historique. Aucune logique de calcul ici : le menu lit,
//! délègue, affiche.

use std::io::{self, Write};

use crate::historique::{EntreeHistorique, Historique};
use crate::noyau::evaluer_texte;

/// Boucle du menu. Retourne quand l'utilisateur quitte (choix 5 ou fin
/// d'entrée sur stdin).
pub fn lancer(historique: &Historique) {
    loop {
        println!();
        println!("~ CALCULATRICE SCIENTIFIQUE ~");
        println!("1. Calculer une expression");
        println!("2. Voir l'historique complet");
        println!("3. Chercher dans l'historique");
        println!("4. Vider l'historique");
        println!("5. Quitter");

        let Some(choix) = lire_ligne("Votre choix [1-5]: ") else {
            return;
        };

        match choix.trim() {
            "1" => calculer(historique),
            "2" => afficher(historique),
            "3" => chercher(historique),
            "4" => vider(historique),
            "5" => {
                println!("Merci d'avoir utilisé la calculatrice. À bientôt !");
                return;
            }
            autre => println!("Choix invalide: {autre:?}. Entrez un numéro de 1 à 5."),
        }
    }
}

fn calculer(historique: &Historique) {
    let Some(expr) =
        lire_ligne("Expression (+ - * / % ^, sin(), cos(), tan(), log(), sqrt(), factorial()): ")
    else {
        return;
    };
    let expr = expr.trim();

    let resultat = evaluer_texte(expr);
    println!("Résultat: {resultat}");

    // les résultats en erreur sont filtrés par l'historique lui-même
    if let Err(e) = historique.ajouter(expr, &resultat) {
        println!("(historique indisponible: {e})");
    }
}

fn afficher(historique: &Historique) {
    match historique.lister() {
        Ok(entrees) if entrees.is_empty() => println!("Aucun historique."),
        Ok(entrees) => {
            println!();
            println!("Historique des calculs:");
            for e in &entrees {
                imprimer_entree(e);
            }
        }
        Err(e) => println!("(historique indisponible: {e})"),
    }
}

fn chercher(historique: &Historique) {
    let Some(motif) = lire_ligne("Mot-clé ou expression à chercher: ") else {
        return;
    };

    match historique.chercher(motif.trim()) {
        Ok(trouvees) if trouvees.is_empty() => println!("Aucune entrée ne correspond."),
        Ok(trouvees) => {
            println!();
            println!("Résultats de la recherche:");
            for e in &trouvees {
                imprimer_entree(e);
            }
        }
        Err(e) => println!("(historique indisponible: {e})"),
    }
}

fn vider(historique: &Historique) {
    let Some(confirmation) = lire_ligne("Sûr ? Tout l'historique sera supprimé (o/n): ") else {
        return;
    };

    if confirmation.trim().eq_ignore_ascii_case("o") {
        match historique.vider() {
            Ok(()) => println!("Historique vidé !"),
            Err(e) => println!("(historique indisponible: {e})"),
        }
    } else {
        println!("Opération annulée.");
    }
}

fn imprimer_entree(e: &EntreeHistorique) {
    println!("{}. {} = {} le {}", e.id, e.expression, e.resultat, e.horodatage);
}

/// Lit une ligne après avoir affiché l'invite.
/// None en fin d'entrée (EOF) ou sur erreur de lecture.
fn lire_ligne(invite: &str) -> Option<String> {
    print!("{invite}");
    let _ = io::stdout().flush();

    let mut ligne = String::new();
    match io::stdin().read_line(&mut ligne) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(ligne),
    }
}
