//! City name normalisation for typed input.

/// Upper-cases the first letter of each word and lower-cases the rest.
/// A word starts at any letter that does not follow another letter, so
/// `"sao-paulo"` becomes `"Sao-Paulo"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for ch in text.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }

    out
}

/// Trims surrounding whitespace and title-cases what is left
pub fn normalize_city_name(input: &str) -> String {
    title_case(input.trim())
}
