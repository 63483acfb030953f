//! Configuration document model.
//!
//! # Responsibility
//! - Define the typed shape of `config.json` and its first-run defaults.
//!
//! # Invariants
//! - On-disk field names never change; existing installations must keep
//!   parsing after upgrades.
//! - Missing fields fall back to their defaults instead of failing the read.

use serde::{Deserialize, Serialize};

/// User configuration document.
///
/// The routine checklist is serialized as `rotina_pastoral`, the name
/// existing installations already carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme_color: String,
    pub theme_mode: String,
    pub font_family: String,
    pub security_level: String,
    pub backup_frequency: String,
    pub module_active_word: bool,
    pub module_active_network: bool,
    #[serde(rename = "rotina_pastoral")]
    pub routine: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme_color: "#D4AF37".to_string(),
            theme_mode: "Dark Cathedral".to_string(),
            font_family: "Inter".to_string(),
            security_level: "High".to_string(),
            backup_frequency: "Daily".to_string(),
            module_active_word: true,
            module_active_network: true,
            routine: vec![
                "Oração Inicial (30 min)".to_string(),
                "Leitura Bíblica Devocional".to_string(),
                "Estudo Teológico".to_string(),
                "Gestão Eclesiástica".to_string(),
            ],
        }
    }
}
