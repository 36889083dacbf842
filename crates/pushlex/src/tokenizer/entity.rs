/// Named character entities, sorted by name for binary search.
static ENTITIES: &[(&str, char)] = &[
    ("amp", '&'),
    ("apos", '\''),
    ("bull", '\u{2022}'),
    ("cent", '\u{00A2}'),
    ("copy", '\u{00A9}'),
    ("deg", '\u{00B0}'),
    ("divide", '\u{00F7}'),
    ("euro", '\u{20AC}'),
    ("gt", '>'),
    ("hellip", '\u{2026}'),
    ("iexcl", '\u{00A1}'),
    ("iquest", '\u{00BF}'),
    ("laquo", '\u{00AB}'),
    ("ldquo", '\u{201C}'),
    ("lsquo", '\u{2018}'),
    ("lt", '<'),
    ("mdash", '\u{2014}'),
    ("micro", '\u{00B5}'),
    ("middot", '\u{00B7}'),
    ("nbsp", '\u{00A0}'),
    ("ndash", '\u{2013}'),
    ("not", '\u{00AC}'),
    ("para", '\u{00B6}'),
    ("plusmn", '\u{00B1}'),
    ("pound", '\u{00A3}'),
    ("quot", '"'),
    ("raquo", '\u{00BB}'),
    ("rdquo", '\u{201D}'),
    ("reg", '\u{00AE}'),
    ("rsquo", '\u{2019}'),
    ("sect", '\u{00A7}'),
    ("shy", '\u{00AD}'),
    ("times", '\u{00D7}'),
    ("trade", '\u{2122}'),
    ("yen", '\u{00A5}'),
];

/// Character named by the entity `&name;`.
pub(crate) fn lookup(name: &str) -> Option<char> {
    ENTITIES
        .binary_search_by_key(&name, |(k, _)| *k)
        .ok()
        .map(|i| ENTITIES[i].1)
}
