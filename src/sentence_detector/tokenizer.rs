// Word/punctuation/whitespace tokenizer used by the rule-based pipeline

use super::Token;

/// Split a span into tokens.
///
/// Words are runs of alphanumerics; a hyphen or apostrophe between two
/// alphanumerics stays inside the word, as does a `.` or `,` between two
/// digits. A possessive `'s` is split off as its own word token. Every other
/// non-space character is punctuation, with runs of the same character kept
/// together (`...`, `--`).
pub fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let byte_at = |i: usize| chars.get(i).map_or(text.len(), |&(b, _)| b);
    let char_at = |i: usize| chars.get(i).map(|&(_, c)| c);

    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let start = i;
        let ch = chars[i].1;

        if ch.is_whitespace() {
            while char_at(i).is_some_and(char::is_whitespace) {
                i += 1;
            }
            tokens.push(Token::whitespace(&text[byte_at(start)..byte_at(i)]));
            continue;
        }

        if ch.is_alphanumeric() {
            let mut possessive = false;
            i += 1;
            while let Some(c) = char_at(i) {
                if c.is_alphanumeric() {
                    i += 1;
                    continue;
                }
                let prev = chars[i - 1].1;
                let next = char_at(i + 1);
                let joins = match c {
                    '-' => next.is_some_and(char::is_alphanumeric),
                    '\'' | '\u{2019}' => {
                        if is_possessive(next, char_at(i + 2)) {
                            possessive = true;
                            false
                        } else {
                            prev.is_alphabetic() && next.is_some_and(char::is_alphabetic)
                        }
                    }
                    '.' | ',' => prev.is_ascii_digit() && next.is_some_and(|n| n.is_ascii_digit()),
                    _ => false,
                };
                if !joins {
                    break;
                }
                i += 2;
            }
            tokens.push(Token::word(&text[byte_at(start)..byte_at(i)]));
            if possessive {
                tokens.push(Token::word(&text[byte_at(i)..byte_at(i + 2)]));
                i += 2;
            }
            continue;
        }

        if matches!(ch, '\'' | '\u{2019}') && is_possessive(char_at(i + 1), char_at(i + 2)) && i > 0 {
            tokens.push(Token::word(&text[byte_at(i)..byte_at(i + 2)]));
            i += 2;
            continue;
        }

        while char_at(i) == Some(ch) {
            i += 1;
        }
        tokens.push(Token::punctuation(&text[byte_at(start)..byte_at(i)]));
    }

    tokens
}

/// `'s` followed by a non-alphanumeric character or the end of the text
fn is_possessive(next: Option<char>, after: Option<char>) -> bool {
    matches!(next, Some('s' | 'S')) && !after.is_some_and(char::is_alphanumeric)
}
