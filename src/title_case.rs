//! Name normalization
//!
//! Program names are stored in title case. A word starts at every alphabetic
//! character that is not preceded by another alphabetic character, so
//! apostrophes and digits split words as well.

/// Converts text to title case
///
/// Every alphabetic character following a non-alphabetic one (or starting
/// the text) is mapped to its title-case form, all other alphabetic
/// characters are lowercased. Non-alphabetic characters are kept unchanged.
///
/// # Examples
///
/// ```
/// use media_playlist::title_case;
///
/// assert_eq!(title_case("the mandalorian"), "The Mandalorian");
/// assert_eq!(title_case("FINDING nemo"), "Finding Nemo");
/// ```
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                result.extend(c.to_lowercase());
            } else {
                push_titlecase(&mut result, c);
            }
            in_word = true;
        } else {
            result.push(c);
            in_word = false;
        }
    }

    result
}

/// Appends the title-case form of a word-initial character
///
/// Latin digraphs have dedicated title-case code points. For characters
/// whose uppercase form expands to several characters (`ß` to `SS`) only
/// the first one stays uppercase.
fn push_titlecase(result: &mut String, c: char) {
    let digraph = match c {
        '\u{01C4}'..='\u{01C6}' => Some('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => Some('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => Some('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => Some('\u{01F2}'),
        _ => None,
    };
    if let Some(title) = digraph {
        result.push(title);
        return;
    }

    let mut upper = c.to_uppercase();
    if let Some(first) = upper.next() {
        result.push(first);
    }
    for rest in upper {
        result.extend(rest.to_lowercase());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_basic() {
        assert_eq!(title_case("the mandalorian"), "The Mandalorian");
        assert_eq!(title_case("procurando nemo"), "Procurando Nemo");
        assert_eq!(title_case("DAREDEVIL"), "Daredevil");
        assert_eq!(title_case("sHeRlOcK hOlMeS"), "Sherlock Holmes");
    }

    #[test]
    fn test_title_case_non_ascii() {
        assert_eq!(title_case("todo mundo em pânico"), "Todo Mundo Em Pânico");
        assert_eq!(title_case("élite"), "Élite");
    }

    #[test]
    fn test_title_case_expanding_and_digraph_letters() {
        assert_eq!(title_case("ßa"), "Ssa");
        assert_eq!(title_case("ǆemal"), "ǅemal");
        assert_eq!(title_case("ǄEMAL"), "ǅemal");
        assert_eq!(title_case("ﬁsh"), "Fish");
    }

    #[test]
    fn test_title_case_word_boundaries() {
        // Any non-letter starts a new word
        assert_eq!(title_case("don't look up"), "Don'T Look Up");
        assert_eq!(title_case("the 2nd season"), "The 2Nd Season");
        assert_eq!(title_case("spider-man"), "Spider-Man");
    }

    #[test]
    fn test_title_case_preserves_whitespace() {
        assert_eq!(title_case("  two  spaces "), "  Two  Spaces ");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_title_case_idempotent() {
        let once = title_case("the lord of the rings");
        assert_eq!(title_case(&once), once);
    }
}
