use std::sync::{Arc, RwLock};

use serde::Deserialize;

use crate::config::{CompanyProfile, SmtpSettings};

/// Partial settings payload; anything omitted keeps its current value
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsUpdate {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub company_address: Option<String>,
    #[serde(default)]
    pub company_phone: Option<String>,
    #[serde(default)]
    pub company_gstin: Option<String>,
    #[serde(default)]
    pub smtp_host: Option<String>,
    #[serde(default)]
    pub smtp_port: Option<u16>,
    #[serde(default)]
    pub smtp_username: Option<String>,
    #[serde(default)]
    pub smtp_password: Option<String>,
    #[serde(default)]
    pub smtp_from: Option<String>,
}

#[derive(Debug, Clone)]
struct RuntimeSettings {
    company: CompanyProfile,
    smtp: SmtpSettings,
}

/// Company profile and mail credentials, seeded from the environment and
/// adjustable at runtime without a restart
#[derive(Clone)]
pub struct SharedSettings {
    inner: Arc<RwLock<RuntimeSettings>>,
}

impl SharedSettings {
    pub fn new(company: CompanyProfile, smtp: SmtpSettings) -> Self {
        Self {
            inner: Arc::new(RwLock::new(RuntimeSettings { company, smtp })),
        }
    }

    pub fn company(&self) -> CompanyProfile {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .company
            .clone()
    }

    pub fn smtp(&self) -> SmtpSettings {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .smtp
            .clone()
    }

    /// Merge recognized fields into the live settings; blank strings are
    /// treated as absent
    pub fn apply(&self, update: SettingsUpdate) {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        merge(&mut guard.company.name, update.company_name);
        merge(&mut guard.company.address, update.company_address);
        merge(&mut guard.company.phone, update.company_phone);
        merge(&mut guard.company.gstin, update.company_gstin);

        merge(&mut guard.smtp.host, update.smtp_host);
        if let Some(port) = update.smtp_port {
            guard.smtp.port = port;
        }
        merge(&mut guard.smtp.username, update.smtp_username);
        merge(&mut guard.smtp.password, update.smtp_password);
        merge(&mut guard.smtp.from_address, update.smtp_from);
    }
}

fn merge(target: &mut String, value: Option<String>) {
    if let Some(value) = value {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            *target = trimmed.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> SharedSettings {
        SharedSettings::new(CompanyProfile::fallback(), SmtpSettings::default())
    }

    #[test]
    fn test_apply_updates_company_name() {
        let shared = settings();
        shared.apply(SettingsUpdate {
            company_name: Some("Acme Windings".to_string()),
            ..Default::default()
        });
        assert_eq!(shared.company().name, "Acme Windings");
    }

    #[test]
    fn test_blank_fields_keep_current_values() {
        let shared = settings();
        let before = shared.company().name;
        shared.apply(SettingsUpdate {
            company_name: Some("   ".to_string()),
            ..Default::default()
        });
        assert_eq!(shared.company().name, before);
    }

    #[test]
    fn test_smtp_merge() {
        let shared = settings();
        shared.apply(SettingsUpdate {
            smtp_host: Some("smtp.example.com".to_string()),
            smtp_port: Some(465),
            ..Default::default()
        });
        let smtp = shared.smtp();
        assert_eq!(smtp.host, "smtp.example.com");
        assert_eq!(smtp.port, 465);
    }
}
