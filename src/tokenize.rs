//! Normalizing word tokenizer.
//!
//! Splits input into maximal runs of letters and digits. Letters are folded
//! to lowercase, with Romanian diacritics mapped to their plain Latin base
//! first; digits pass through unchanged. Letters and digits form one
//! character class, so a letter/digit transition does not split a token.

/// A normalized word: an ordered, non-empty sequence of lowercase,
/// diacritic-folded code points.
pub type Token = Vec<char>;

/// Pluggable tokenizer capability stored inside the engine.
///
/// Swapping the tokenizer affects future item insertions and query
/// tokenization only; already-indexed items keep their tokens.
pub type TokenizeFn = Box<dyn Fn(&str) -> Vec<Token> + Send + Sync>;

/// Map Romanian diacritics to their plain Latin base letter.
#[inline]
fn fold_diacritic(c: char) -> char {
    match c {
        'ă' | 'Ă' | 'â' | 'Â' => 'a',
        'î' | 'Î' => 'i',
        'ș' | 'ş' | 'Ș' | 'Ş' => 's',
        'ț' | 'ţ' | 'Ț' | 'Ţ' => 't',
        _ => c,
    }
}

/// Tokenize input into normalized words, in left-to-right order.
///
/// Deterministic and total: empty input yields no tokens, no token is ever
/// empty, and no deduplication is performed. Non-alphanumeric code points
/// act purely as separators, so `"123.4"` yields `["123", "4"]`.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut token = Token::new();
    for c in input.chars() {
        if c.is_alphanumeric() {
            token.extend(fold_diacritic(c).to_lowercase());
        } else if !token.is_empty() {
            tokens.push(std::mem::take(&mut token));
        }
    }
    if !token.is_empty() {
        tokens.push(token);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn words(ws: &[&str]) -> Vec<Token> {
        ws.iter().map(|w| w.chars().collect()).collect()
    }

    #[test]
    fn splits_on_separators_and_folds_diacritics() {
        let tokens = tokenize("Țară, România, școală, mâine! 123.4 ăĂâÂîÎșşȘŞțţȚŢ");
        assert_eq!(
            tokens,
            words(&[
                "tara",
                "romania",
                "scoala",
                "maine",
                "123",
                "4",
                "aaaaiisssstttt",
            ])
        );
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert_eq!(tokenize(""), Vec::<Token>::new());
    }

    #[test]
    fn separator_only_input_yields_no_tokens() {
        assert_eq!(tokenize(" ,.!? -- "), Vec::<Token>::new());
    }

    #[test]
    fn digit_and_letter_runs_share_one_class() {
        assert_eq!(tokenize("abc123def"), words(&["abc123def"]));
        assert_eq!(tokenize("123.4"), words(&["123", "4"]));
    }

    #[test]
    fn lowercases_latin_letters() {
        assert_eq!(tokenize("Mircea ELIADE"), words(&["mircea", "eliade"]));
    }

    #[test]
    fn keeps_duplicates_in_appearance_order() {
        assert_eq!(tokenize("noapte de noapte"), words(&["noapte", "de", "noapte"]));
    }

    #[test]
    fn tokenization_is_deterministic() {
        let input = "Pădurea spânzuraţilor de Liviu Rebreanu";
        assert_eq!(tokenize(input), tokenize(input));
    }
}
