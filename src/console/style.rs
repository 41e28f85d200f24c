// Style codes for reply text.
//
// Replies and notices come out of the core with `&` color codes embedded,
// the format most chat servers accept from plugins. The console host either
// translates them to the section-sign form a game client renders, or strips
// them for a plain terminal.

const COLOR_CODES: &str = "0123456789AaBbCcDdEeFf";

/// Replace each valid `&` color code with its section-sign form.
///
/// Only `&` followed by 0-9 or a-f (either case) is a code; the code
/// character is lowercased in the output. Anything else, including a
/// trailing lone `&`, passes through untouched.
pub fn translate(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    for i in 0..chars.len().saturating_sub(1) {
        if chars[i] == '&' && COLOR_CODES.contains(chars[i + 1]) {
            chars[i] = '\u{00a7}';
            chars[i + 1] = chars[i + 1].to_ascii_lowercase();
        }
    }
    chars.into_iter().collect()
}

/// Remove every `&` together with the character after it.
///
/// Deliberately looser than [`translate`]: even an invalid code is dropped,
/// so stripped text never leaks a stray `&x`. A trailing lone `&` stays.
pub fn strip(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '&' {
            if chars.next().is_none() {
                out.push('&');
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_codes_are_translated() {
        assert_eq!(translate("&cblocked"), "\u{00a7}cblocked");
        assert_eq!(
            translate("&eword &ais fine."),
            "\u{00a7}eword \u{00a7}ais fine."
        );
        // Digits are color codes too.
        assert_eq!(translate("50&50"), "50\u{00a7}50");
    }

    #[test]
    fn uppercase_codes_are_lowercased() {
        assert_eq!(translate("&AOk"), "\u{00a7}aOk");
    }

    #[test]
    fn invalid_codes_are_left_alone() {
        assert_eq!(translate("&znope"), "&znope");
    }

    #[test]
    fn a_trailing_ampersand_is_not_a_code() {
        assert_eq!(translate("half&"), "half&");
        assert_eq!(strip("half&"), "half&");
    }

    #[test]
    fn doubled_ampersands_translate_the_second() {
        assert_eq!(translate("&&a"), "&\u{00a7}a");
    }

    #[test]
    fn strip_removes_codes_and_their_markers() {
        assert_eq!(strip("&eword &ais fine."), "word is fine.");
        assert_eq!(
            strip("&cYour message has been filtered from bad words."),
            "Your message has been filtered from bad words."
        );
    }

    #[test]
    fn strip_drops_invalid_codes_too() {
        assert_eq!(strip("&znope"), "nope");
        assert_eq!(strip("&&a"), "a");
    }
}
