use serde::Deserialize;

use crate::infra::config::{AppConfig, LedgerConfig, LogConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub ledger: Option<FileLedgerConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(ledger) = self.ledger {
            ledger.merge_into(&mut config.ledger);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLedgerConfig {
    pub caller_principal: Option<String>,
}

impl FileLedgerConfig {
    fn merge_into(self, config: &mut LedgerConfig) {
        if let Some(caller_principal) = self.caller_principal {
            config.caller_principal = caller_principal;
        }
    }
}
