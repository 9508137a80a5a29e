//! Historique persistant des calculs (SQLite).
//!
//! Contrats :
//! - seuls les calculs RÉUSSIS sont persistés : un résultat qui commence par
//!   le marqueur d'erreur est ignoré silencieusement
//! - lister() rend l'ordre d'insertion (id croissant)
//! - chercher() est une recherche de sous-chaîne sur le texte de l'expression
//!
//! Le noyau ne connaît pas ce module : il produit des valeurs, l'historique
//! choisit de les conserver.

use chrono::Local;
use log::{debug, info};
use rusqlite::Connection;
use serde::Serialize;

use crate::noyau::MARQUEUR_ERREUR;

/// Fichier SQLite par défaut (répertoire courant).
pub const BASE_DEFAUT: &str = "historique_calculs.db";

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct EntreeHistorique {
    pub id: i64,
    pub expression: String,
    pub resultat: String,
    pub horodatage: String,
}

impl EntreeHistorique {
    fn depuis_ligne(ligne: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: ligne.get("id")?,
            expression: ligne.get("expression")?,
            resultat: ligne.get("resultat")?,
            horodatage: ligne.get("horodatage")?,
        })
    }
}

pub struct Historique {
    connexion: Connection,
}

impl Historique {
    /// Ouvre (ou crée) la base et garantit le schéma.
    pub fn ouvrir(chemin: &str) -> rusqlite::Result<Self> {
        Self::init(Connection::open(chemin)?)
    }

    /// Base en mémoire (tests).
    pub fn en_memoire() -> rusqlite::Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(connexion: Connection) -> rusqlite::Result<Self> {
        connexion.execute(
            "CREATE TABLE IF NOT EXISTS historique(
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                expression TEXT NOT NULL,
                resultat TEXT NOT NULL,
                horodatage TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Self { connexion })
    }

    /// Persiste un calcul réussi, horodaté à la seconde.
    /// Les résultats en erreur ne sont PAS persistés (contrat : l'historique
    /// ne contient que des calculs valides).
    pub fn ajouter(&self, expression: &str, resultat: &str) -> rusqlite::Result<()> {
        if resultat.starts_with(MARQUEUR_ERREUR) {
            debug!("résultat en erreur, non persisté: {expression}");
            return Ok(());
        }

        let horodatage = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        self.connexion.execute(
            "INSERT INTO historique(expression, resultat, horodatage) VALUES (?1, ?2, ?3)",
            rusqlite::params![expression, resultat, horodatage],
        )?;
        Ok(())
    }

    /// Toutes les entrées, en ordre d'insertion.
    pub fn lister(&self) -> rusqlite::Result<Vec<EntreeHistorique>> {
        let mut req = self.connexion.prepare(
            "SELECT id, expression, resultat, horodatage FROM historique ORDER BY id",
        )?;
        let lignes = req.query_map([], EntreeHistorique::depuis_ligne)?;
        lignes.collect()
    }

    /// Recherche de sous-chaîne sur le texte de l'expression.
    pub fn chercher(&self, motif: &str) -> rusqlite::Result<Vec<EntreeHistorique>> {
        let mut req = self.connexion.prepare(
            "SELECT id, expression, resultat, horodatage FROM historique
             WHERE expression LIKE ?1 ORDER BY id",
        )?;
        let lignes = req.query_map([format!("%{motif}%")], EntreeHistorique::depuis_ligne)?;
        lignes.collect()
    }

    /// Vide tout l'historique.
    pub fn vider(&self) -> rusqlite::Result<()> {
        let n = self.connexion.execute("DELETE FROM historique", [])?;
        info!("historique vidé ({n} entrées)");
        Ok(())
    }
}
