//! Identifier casing for generated declarations.
//!
//! Keys are split on `_`. Each segment is title-cased: a letter that follows
//! another letter is lower-cased, every other letter takes its titlecase
//! form, and non-letters pass through (so `"user1name"` becomes
//! `"User1Name"`).
//!
//! Titlecase equals uppercase except for the characters in
//! `titlecase_special`. The Greek letters with iota subscript whose
//! titlecase spans several characters (U+1FB2, U+1FB4, U+1FB6-7 and their
//! eta/omega counterparts) still take their uppercase form.

/// `user_id_field` → `userIdField`. The first segment is kept verbatim.
pub fn to_camel_case(s: &str) -> String {
    let mut segments = s.split('_');
    let mut out = String::with_capacity(s.len());
    if let Some(first) = segments.next() {
        out.push_str(first);
    }
    for segment in segments {
        push_title(&mut out, segment);
    }
    out
}

/// `user_id_field` → `UserIdField`.
pub fn to_pascal_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for segment in s.split('_') {
        push_title(&mut out, segment);
    }
    out
}

fn push_title(out: &mut String, segment: &str) {
    let mut prev_cased = false;
    for c in segment.chars() {
        if is_cased(c) {
            if prev_cased {
                out.extend(c.to_lowercase());
            } else {
                push_titlecase(out, c);
            }
            prev_cased = true;
        } else {
            out.push(c);
            prev_cased = false;
        }
    }
}

fn push_titlecase(out: &mut String, c: char) {
    match titlecase_special(c) {
        Some(Title::Char(t)) => out.push(t),
        Some(Title::Str(t)) => out.push_str(t),
        None => out.extend(c.to_uppercase()),
    }
}

enum Title {
    Char(char),
    Str(&'static str),
}

/// Characters whose titlecase mapping differs from their uppercase one.
fn titlecase_special(c: char) -> Option<Title> {
    let t = match c {
        // Latin digraphs: DŽ Dž dž, LJ Lj lj, NJ Nj nj, DZ Dz dz
        '\u{01C4}'..='\u{01C6}' => Title::Char('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => Title::Char('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => Title::Char('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => Title::Char('\u{01F2}'),
        'ß' => Title::Str("Ss"),
        // Latin ligatures
        '\u{FB00}' => Title::Str("Ff"),
        '\u{FB01}' => Title::Str("Fi"),
        '\u{FB02}' => Title::Str("Fl"),
        '\u{FB03}' => Title::Str("Ffi"),
        '\u{FB04}' => Title::Str("Ffl"),
        '\u{FB05}' | '\u{FB06}' => Title::Str("St"),
        // Armenian ligatures
        '\u{0587}' => Title::Str("\u{0535}\u{0582}"),
        '\u{FB13}' => Title::Str("\u{0544}\u{0576}"),
        '\u{FB14}' => Title::Str("\u{0544}\u{0565}"),
        '\u{FB15}' => Title::Str("\u{0544}\u{056B}"),
        '\u{FB16}' => Title::Str("\u{054E}\u{0576}"),
        '\u{FB17}' => Title::Str("\u{0544}\u{056D}"),
        // Greek with iota subscript: lower forms sit 8 below their titlecase
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            Title::Char(char::from_u32(c as u32 + 8)?)
        }
        '\u{1FB3}' => Title::Char('\u{1FBC}'),
        '\u{1FC3}' => Title::Char('\u{1FCC}'),
        '\u{1FF3}' => Title::Char('\u{1FFC}'),
        c if is_titlecase_letter(c) => Title::Char(c),
        _ => return None,
    };
    Some(t)
}

// General category Lt; neither upper nor lower for `char`.
fn is_titlecase_letter(c: char) -> bool {
    matches!(
        c,
        '\u{01C5}' | '\u{01C8}' | '\u{01CB}' | '\u{01F2}'
            | '\u{1F88}'..='\u{1F8F}'
            | '\u{1F98}'..='\u{1F9F}'
            | '\u{1FA8}'..='\u{1FAF}'
            | '\u{1FBC}' | '\u{1FCC}' | '\u{1FFC}'
    )
}

// Letters with a case mapping; digits and symbols break words.
fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase() || is_titlecase_letter(c)
}

// ------------------------------- Tests ------------------------------------ //
