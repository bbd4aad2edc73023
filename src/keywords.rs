use std::borrow::Cow;
use std::collections::HashSet;

use crate::settings::Settings;
use crate::tree::TYPE_ALIASES;

const KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "break", "case", "catch", "checked", "class", "const",
    "continue", "default", "delegate", "do", "else", "enum", "event", "explicit", "extern",
    "false", "finally", "fixed", "for", "foreach", "goto", "if", "implicit", "in",
    "interface", "internal", "is", "lock", "namespace", "new", "null", "operator", "out",
    "override", "params", "private", "protected", "public", "readonly", "ref", "return",
    "sealed", "sizeof", "stackalloc", "static", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "unchecked", "unsafe", "using", "virtual", "volatile", "while",
];

/// Identifiers that must be written with the `@` escape prefix.
#[derive(Debug, Clone)]
pub struct ReservedWords {
    words: HashSet<String>,
}

impl ReservedWords {
    pub fn new(settings: &Settings) -> Self {
        let mut words: HashSet<String> = KEYWORDS.iter().map(|k| k.to_string()).collect();
        words.extend(TYPE_ALIASES.iter().map(|(_, alias)| alias.to_string()));
        words.extend(settings.extra_reserved_words.iter().cloned());
        Self { words }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.words.contains(name)
    }

    pub fn escape<'a>(&self, name: &'a str) -> Cow<'a, str> {
        if self.contains(name) {
            Cow::Owned(format!("@{name}"))
        } else {
            Cow::Borrowed(name)
        }
    }
}

impl Default for ReservedWords {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}
