use crate::labels::labelled_enum;
use std::collections::HashMap;

labelled_enum! {
    pub enum Language {
        En => "en",
        No => "no",
        Pt => "pt",
        Fr => "fr",
        Sv => "sv",
        Da => "da",
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

impl Language {
    fn column(&self) -> usize {
        match self {
            Language::En => 0,
            Language::No => 1,
            Language::Pt => 2,
            Language::Fr => 3,
            Language::Sv => 4,
            Language::Da => 5,
        }
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::No => "Norsk",
            Language::Pt => "Português",
            Language::Fr => "Français",
            Language::Sv => "Svenska",
            Language::Da => "Dansk",
        }
    }
}

/// Columns: en, no, pt, fr, sv, da. An empty cell falls back to English.
const CATALOG: &[(&str, [&str; 6])] = &[
    ("calendar.day", ["Day", "Dag", "Dia", "Jour", "Dag", "Dag"]),
    ("calendar.week", ["Week", "Uke", "Semana", "Semaine", "Vecka", "Uge"]),
    ("calendar.month", ["Month", "Måned", "Mês", "Mois", "Månad", "Måned"]),
    ("calendar.today", ["Today", "I dag", "Hoje", "Aujourd'hui", "Idag", "I dag"]),
    ("shift.status.pending", ["Pending", "Venter", "Pendente", "En attente", "Väntande", "Afventer"]),
    ("shift.status.scheduled", ["Scheduled", "Planlagt", "Agendado", "Planifié", "Schemalagd", "Planlagt"]),
    ("shift.status.in-progress", ["In progress", "Pågår", "Em andamento", "En cours", "Pågår", "I gang"]),
    ("shift.status.completed", ["Completed", "Fullført", "Concluído", "Terminé", "Slutförd", "Afsluttet"]),
    ("shift.status.cancelled", ["Cancelled", "Avlyst", "Cancelado", "Annulé", "Inställd", "Aflyst"]),
    ("shift.priority.low", ["Low", "Lav", "Baixa", "Basse", "Låg", "Lav"]),
    ("shift.priority.normal", ["Normal", "Normal", "Normal", "Normale", "Normal", "Normal"]),
    ("shift.priority.high", ["High", "Høy", "Alta", "Haute", "Hög", "Høj"]),
    ("shift.priority.urgent", ["Urgent", "Haster", "Urgente", "Urgente", "Brådskande", "Haster"]),
    ("search.placeholder", ["Search...", "Søk...", "Pesquisar...", "Rechercher...", "Sök...", "Søg..."]),
    ("login.error.credentials", [
        "Invalid email or password",
        "Ugyldig e-post eller passord",
        "E-mail ou senha inválidos",
        "E-mail ou mot de passe invalide",
        "Ogiltig e-post eller lösenord",
        "Ugyldig e-mail eller adgangskode",
    ]),
    ("login.error.company_code", [
        "Invalid company code",
        "Ugyldig firmakode",
        "Código da empresa inválido",
        "Code entreprise invalide",
        "Ogiltig företagskod",
        "Ugyldig firmakode",
    ]),
    ("dashboard.title", ["Dashboard", "Oversikt", "Painel", "Tableau de bord", "Översikt", "Oversigt"]),
    ("payroll.title", ["Payroll", "Lønn", "Folha de pagamento", "Paie", "Lön", "Løn"]),
];

/// Looks up UI strings for one language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Text for `key`, falling back to English and then to the key itself.
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        let Some((_, texts)) = CATALOG.iter().find(|(k, _)| *k == key) else {
            return key;
        };
        let text = texts[self.language.column()];
        if text.is_empty() { texts[0] } else { text }
    }

    pub fn known_keys() -> impl Iterator<Item = &'static str> {
        CATALOG.iter().map(|(key, _)| *key)
    }
}

/// Minimal key-value persistence for user preferences.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    values: HashMap<String, String>,
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

pub const LANGUAGE_KEY: &str = "language";
const COOKIE_MAX_AGE_SECS: u64 = 365 * 24 * 60 * 60;

/// Reads the `language` cookie out of a `Cookie` request header value.
pub fn language_from_cookie(header: &str) -> Option<Language> {
    header
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| name.trim() == LANGUAGE_KEY)
        .and_then(|(_, value)| value.trim().parse().ok())
}

/// Selected UI language, persisted in a key-value store and mirrored in a cookie.
#[derive(Debug, Clone)]
pub struct LanguagePreference<S> {
    store: S,
    current: Language,
}

impl<S: KeyValueStore> LanguagePreference<S> {
    /// Resolution order: stored value, then the cookie, then `default`.
    /// Unparseable stored values are ignored.
    pub fn resolve(store: S, cookie_header: Option<&str>, default: Language) -> Self {
        let current = store
            .get(LANGUAGE_KEY)
            .and_then(|raw| raw.parse().ok())
            .or_else(|| cookie_header.and_then(language_from_cookie))
            .unwrap_or(default);
        Self { store, current }
    }

    pub fn current(&self) -> Language {
        self.current
    }

    pub fn translator(&self) -> Translator {
        Translator::new(self.current)
    }

    /// Persists `language` and returns the matching `Set-Cookie` value.
    pub fn select(&mut self, language: Language) -> String {
        self.store.set(LANGUAGE_KEY, language.as_str());
        self.current = language;
        tracing::debug!(language = %language, "language selected");
        format!(
            "{LANGUAGE_KEY}={}; Path=/; Max-Age={COOKIE_MAX_AGE_SECS}; SameSite=Lax",
            language.as_str()
        )
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
