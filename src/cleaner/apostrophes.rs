//! Contraction/possessive quote doubling.
//!
//! A vocabulary-limited safety net that runs before the generic quote pass.
//! Anything not listed in [`CONTRACTIONS`] is left for [`super::quotes`].

/// Natural form → SQL-escaped form, applied in this order.
pub static CONTRACTIONS: &[(&str, &str)] = &[
    // Negations
    ("don't", "don''t"),
    ("won't", "won''t"),
    ("can't", "can''t"),
    ("isn't", "isn''t"),
    ("aren't", "aren''t"),
    ("wasn't", "wasn''t"),
    ("weren't", "weren''t"),
    ("doesn't", "doesn''t"),
    ("haven't", "haven''t"),
    ("hasn't", "hasn''t"),
    ("hadn't", "hadn''t"),
    ("wouldn't", "wouldn''t"),
    ("shouldn't", "shouldn''t"),
    ("couldn't", "couldn''t"),
    // Possessives and 's contractions
    ("it's", "it''s"),
    ("that's", "that''s"),
    ("what's", "what''s"),
    ("here's", "here''s"),
    ("there's", "there''s"),
    ("where's", "where''s"),
    ("let's", "let''s"),
    ("who's", "who''s"),
    // 'll
    ("you'll", "you''ll"),
    ("we'll", "we''ll"),
    ("they'll", "they''ll"),
    ("I'll", "I''ll"),
    ("he'll", "he''ll"),
    ("she'll", "she''ll"),
    // 're, 'm, 've
    ("you're", "you''re"),
    ("we're", "we''re"),
    ("they're", "they''re"),
    ("I'm", "I''m"),
    ("you've", "you''ve"),
    ("we've", "we''ve"),
    ("they've", "they''ve"),
    ("I've", "I''ve"),
];

pub fn fix_apostrophes(text: &str) -> String {
    let mut result = text.to_string();
    for (natural, escaped) in CONTRACTIONS {
        if result.contains(natural) {
            result = result.replace(natural, escaped);
        }
    }
    result
}
