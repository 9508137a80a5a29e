//! Frontal web : JSON sur HTTP (tiny_http, synchrone).
//!
//! Routes :
//! - POST /calculer   {"expression": "..."}  -> {"resultat": "..."}
//! - GET  /historique                        -> [entrées]
//! - POST /recherche  {"requete": "..."}     -> [entrées]
//! - POST /vider                             -> {"statut": "efface"}
//!
//! Le résultat circule sous forme TEXTE : JSON n'a pas de littéral NaN, et
//! le marqueur d'erreur fait partie du contrat avec l'historique.

use std::io::{Cursor, Read};

use log::{error, info};
use serde::Deserialize;
use tiny_http::{Header, Method, Request, Response, Server};

use crate::historique::Historique;
use crate::noyau::evaluer_texte;

#[derive(Deserialize)]
struct DemandeCalcul {
    #[serde(default)]
    expression: String,
}

#[derive(Deserialize)]
struct DemandeRecherche {
    #[serde(default)]
    requete: String,
}

/// Boucle serveur (bloquante). Les requêtes sont servies une à une : le
/// noyau est pur, l'historique est la seule ressource partagée.
pub fn lancer(adresse: &str, historique: &Historique) -> Result<(), String> {
    let serveur =
        Server::http(adresse).map_err(|e| format!("écoute impossible sur {adresse}: {e}"))?;
    info!("serveur en écoute sur http://{adresse}");

    for mut requete in serveur.incoming_requests() {
        let reponse = traiter(&mut requete, historique);
        if let Err(e) = requete.respond(reponse) {
            error!("réponse perdue: {e}");
        }
    }

    Ok(())
}

fn traiter(requete: &mut Request, historique: &Historique) -> Response<Cursor<Vec<u8>>> {
    let methode = requete.method().clone();
    let url = requete.url().to_string();

    match (methode, url.as_str()) {
        (Method::Post, "/calculer") => {
            let demande: DemandeCalcul = match lire_json(requete) {
                Ok(d) => d,
                Err(e) => return erreur_json(400, &e),
            };

            let resultat = evaluer_texte(&demande.expression);
            info!("calcul: {} => {}", demande.expression, resultat);

            // les résultats en erreur sont filtrés par l'historique lui-même
            if let Err(e) = historique.ajouter(&demande.expression, &resultat) {
                error!("historique indisponible: {e}");
            }

            json(&serde_json::json!({ "resultat": resultat }))
        }

        (Method::Get, "/historique") => match historique.lister() {
            Ok(entrees) => json(&serde_json::json!(entrees)),
            Err(e) => erreur_json(500, &format!("lecture historique: {e}")),
        },

        (Method::Post, "/recherche") => {
            let demande: DemandeRecherche = match lire_json(requete) {
                Ok(d) => d,
                Err(e) => return erreur_json(400, &e),
            };

            match historique.chercher(&demande.requete) {
                Ok(entrees) => json(&serde_json::json!(entrees)),
                Err(e) => erreur_json(500, &format!("recherche historique: {e}")),
            }
        }

        (Method::Post, "/vider") => match historique.vider() {
            Ok(()) => json(&serde_json::json!({ "statut": "efface" })),
            Err(e) => erreur_json(500, &format!("vidage historique: {e}")),
        },

        _ => Response::from_string("introuvable").with_status_code(404),
    }
}

fn lire_json<T: serde::de::DeserializeOwned>(requete: &mut Request) -> Result<T, String> {
    let mut corps = String::new();
    requete
        .as_reader()
        .read_to_string(&mut corps)
        .map_err(|e| format!("corps illisible: {e}"))?;
    serde_json::from_str(&corps).map_err(|e| format!("JSON invalide: {e}"))
}

fn json(valeur: &serde_json::Value) -> Response<Cursor<Vec<u8>>> {
    Response::from_string(valeur.to_string()).with_header(entete_json())
}

fn erreur_json(code: u16, message: &str) -> Response<Cursor<Vec<u8>>> {
    Response::from_string(serde_json::json!({ "erreur": message }).to_string())
        .with_header(entete_json())
        .with_status_code(code)
}

fn entete_json() -> Header {
    // en-tête constant : ne peut pas échouer
    Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap()
}
