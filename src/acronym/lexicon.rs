//! Word lists used by the acronym rules.
//!
//! All lookups take normalized (uppercase) keys except [`is_domain_suffix`],
//! which compares case-insensitively.

/// Common words and document-structure vocabulary that are never acronyms.
pub const STOPWORDS: &[&str] = &[
    "THE", "AND", "OF", "IN", "ON", "AT", "FOR", "BY", "TO", "WITH", "AN", "A", "AS", "IS", "IT",
    "THIS", "THAT", "ALL", "ONCE", "USING", "AFTER", "BEFORE", "FROM", "PAGE", "HOME", "MODULE",
    "SYSTEM", "SECTION", "TABLE", "REQUIREMENTS", "DESCRIPTION", "OVERVIEW", "INTRODUCTION",
    "SCOPE", "SUMMARY", "CORE",
];

/// File extensions and domain suffixes that show up in parentheses.
pub const DOMAIN_SUFFIXES: &[&str] = &[
    "com", "org", "net", "htm", "html", "php", "asp", "jsp", "txt", "pdf", "xml", "db", "sql",
];

/// Uppercase tokens observed as recurring false positives in legacy SRS corpora.
pub const NOISY_TOKENS: &[&str] = &[
    "THEGNU", "ANALAN", "PVWAVE", "NONE", "ACTIVE", "EMEANS", "BCOST", "ISUNIX", "FUSE", "LEVEL",
    "SEE",
];

/// Latin abbreviations (e.g., i.e., etc.).
pub const LATIN_ABBREVIATIONS: &[&str] = &["EG", "IE", "ETC", "AKA", "VS"];

/// Words that leak out of headings into prose.
pub const HEADING_WORDS: &[&str] = &["REQUIREMENTS", "MODE", "USERS", "TEST", "WWW", "WWWFS"];

/// Common word or document-structure vocabulary.
pub fn is_stopword(key: &str) -> bool {
    STOPWORDS.contains(&key)
}

/// Known recurring false positive.
pub fn is_noisy_token(key: &str) -> bool {
    NOISY_TOKENS.contains(&key)
}

/// File extension or domain suffix, any case.
pub fn is_domain_suffix(word: &str) -> bool {
    DOMAIN_SUFFIXES.iter().any(|s| s.eq_ignore_ascii_case(word))
}

/// Latin abbreviation or heading word.
pub fn is_skip_word(key: &str) -> bool {
    LATIN_ABBREVIATIONS.contains(&key) || HEADING_WORDS.contains(&key)
}
