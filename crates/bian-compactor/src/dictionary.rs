//! Replacement dictionary — BIAN vocabulary -> short abbreviation.
//!
//! Entries are applied one after another to the running text, each as a
//! global, case-insensitive, literal substring replacement. Phrases are not
//! anchored to word boundaries, so matches inside longer words are rewritten
//! and earlier entries can change what later entries see
//! ("Operations" -> "Opss").

use regex::{NoExpand, Regex};
use std::sync::{Arc, LazyLock};

/// Built-in BIAN vocabulary in application order.
pub const BIAN_TERMS: &[(&str, &str)] = &[
    ("Service Domain", "SD"),
    ("Description", "D"),
    ("Entity", "E"),
    ("Value Object", "VO"),
    ("Aggregate", "AG"),
    ("Domain Event", "DE"),
    ("Workstep", "WS"),
    ("Procedure", "PR"),
    ("Reference", "Ref"),
    ("Identifier", "ID"),
    // Functional domains
    ("Account", "Acct"),
    ("Customer", "Cust"),
    ("Contact", "Cntct"),
    ("Product", "Prod"),
    ("Payment", "Pay"),
    ("Corporate", "Corp"),
    ("Consumer", "Cons"),
    ("Market", "Mkt"),
    ("Financial", "Fin"),
    ("Branch", "Br"),
    ("Channel", "Chan"),
    ("Collateral", "Coll"),
    ("Party", "Party"),
    // Activities
    ("Assessment", "Asmt"),
    ("Notification", "Ntfy"),
    ("Instruction", "Instr"),
    ("Transaction", "Tx"),
    ("Fulfillment", "Ffmt"),
    ("Reconciliation", "Recon"),
    ("Clearing", "Clrg"),
    ("Settlement", "Settl"),
    ("Execution", "Exec"),
    ("Authorization", "Auth"),
    ("Agreement", "Agr"),
    ("Processing", "Proc"),
    ("Evaluation", "Eval"),
    ("Resolution", "Res"),
    ("Analysis", "Analys"),
    ("Operation", "Ops"),
    ("Operations", "Ops"),
    // States
    ("Created", "Crtd"),
    ("Updated", "Updtd"),
    ("Outcome", "Outc"),
    // Management / structure
    ("Management", "Mgmt"),
    ("Administration", "Adm"),
    ("Directory", "Dir"),
    ("Services", "Svcs"),
    ("Reporting", "Rpt"),
    ("Compliance", "Comp"),
    ("Planning", "Plan"),
    ("Matching", "Match"),
    ("History", "Hist"),
    ("Design", "Des"),
    ("Relationship", "Rel"),
];

static BIAN_DICTIONARY: LazyLock<Arc<ReplacementDictionary>> = LazyLock::new(|| {
    Arc::new(ReplacementDictionary::new(BIAN_TERMS.iter().copied()).unwrap())
});

/// One phrase/abbreviation pair with its compiled matcher.
#[derive(Debug, Clone)]
pub struct DictionaryEntry {
    pub phrase: String,
    pub abbreviation: String,
    pattern: Regex,
}

impl DictionaryEntry {
    /// Compile a literal, case-insensitive matcher for `phrase`.
    pub fn new(phrase: impl Into<String>, abbreviation: impl Into<String>) -> Result<Self, regex::Error> {
        let phrase = phrase.into();
        let pattern = Regex::new(&format!("(?i){}", regex::escape(&phrase)))?;
        Ok(Self { phrase, abbreviation: abbreviation.into(), pattern })
    }

    /// Replace every occurrence of the phrase in `text`.
    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, NoExpand(&self.abbreviation))
            .into_owned()
    }
}

/// Ordered, immutable phrase -> abbreviation mapping.
#[derive(Debug, Clone, Default)]
pub struct ReplacementDictionary {
    entries: Vec<DictionaryEntry>,
}

impl ReplacementDictionary {
    pub fn new<I, P, A>(pairs: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = (P, A)>,
        P: Into<String>,
        A: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(p, a)| DictionaryEntry::new(p, a))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entries })
    }

    /// The shared built-in BIAN dictionary.
    pub fn bian() -> Arc<ReplacementDictionary> {
        Arc::clone(&BIAN_DICTIONARY)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(phrase, abbreviation)` pairs in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|e| (e.phrase.as_str(), e.abbreviation.as_str()))
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    /// Run every entry over `text` in order. Whitespace is left untouched.
    pub fn apply(&self, text: &str) -> String {
        self.entries
            .iter()
            .fold(text.to_string(), |acc, entry| entry.apply(&acc))
    }
}
