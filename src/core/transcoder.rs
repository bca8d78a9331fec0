/// Primary stress glyph, prefixed to the vowel it lands on.
const PRIMARY_STRESS: char = '\u{02c8}';
/// Secondary stress glyph.
const SECONDARY_STRESS: char = '\u{02cc}';

/// A stateless ARPAbet to IPA transcoder.
pub struct IpaTranscoder;

impl IpaTranscoder {
    pub fn new() -> Self {
        Self
    }

    /// Transcodes a full space-delimited ARPAbet sequence into IPA.
    ///
    /// Each token carries an optional stress digit (0 none, 1 primary,
    /// 2 secondary) which is stripped and reattached as a prefix glyph.
    /// Token count and order are preserved; unknown symbols pass through
    /// unchanged. Never fails.
    pub fn transcode(&self, arpabet: &str) -> String {
        arpabet
            .split(' ')
            .map(|token| self.transcode_token(token))
            .collect::<Vec<String>>()
            .join(" ")
    }

    fn transcode_token(&self, token: &str) -> String {
        // First digit found decides the stress; all digits are stripped
        // to recover the base symbol. Dictionary entries put the digit at
        // the end, but that is their convention, not ours to enforce.
        let stress = token.chars().find(|c| c.is_ascii_digit());
        let base: String = token.chars().filter(|c| !c.is_ascii_digit()).collect();
        let ipa = self.ipa_symbol(&base).unwrap_or(base.as_str());

        match stress {
            Some('1') => format!("{}{}", PRIMARY_STRESS, ipa),
            Some('2') => format!("{}{}", SECONDARY_STRESS, ipa),
            _ => ipa.to_string(),
        }
    }

    fn ipa_symbol(&self, arpabet: &str) -> Option<&'static str> {
        match arpabet {
            "AA" => Some("ɑ"), "AE" => Some("æ"), "AH" => Some("ʌ"),
            "AO" => Some("ɔ"), "AW" => Some("aʊ"), "AY" => Some("aɪ"),
            "B" => Some("b"), "CH" => Some("tʃ"), "D" => Some("d"),
            "DH" => Some("ð"), "EH" => Some("ɛ"), "ER" => Some("ɝ"),
            "EY" => Some("eɪ"), "F" => Some("f"), "G" => Some("ɡ"),
            "HH" => Some("h"), "IH" => Some("ɪ"), "IY" => Some("i"),
            "JH" => Some("dʒ"), "K" => Some("k"), "L" => Some("l"),
            "M" => Some("m"), "N" => Some("n"), "NG" => Some("ŋ"),
            "OW" => Some("oʊ"), "OY" => Some("ɔɪ"), "P" => Some("p"),
            "R" => Some("ɹ"), "S" => Some("s"), "SH" => Some("ʃ"),
            "T" => Some("t"), "TH" => Some("θ"), "UH" => Some("ʊ"),
            "UW" => Some("u"), "V" => Some("v"), "W" => Some("w"),
            "Y" => Some("j"), "Z" => Some("z"), "ZH" => Some("ʒ"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_word() {
        let transcoder = IpaTranscoder::new();
        assert_eq!(transcoder.transcode("K AE1 T"), "k ˈæ t");
    }

    #[test]
    fn test_stress_markers() {
        let transcoder = IpaTranscoder::new();
        assert_eq!(transcoder.transcode("IH1"), "ˈɪ");
        assert_eq!(transcoder.transcode("IH2"), "ˌɪ");
        assert_eq!(transcoder.transcode("IH0"), "ɪ");
        assert_eq!(transcoder.transcode("IH"), "ɪ");
    }

    #[test]
    fn test_unexpected_stress_digit_means_no_stress() {
        let transcoder = IpaTranscoder::new();
        assert_eq!(transcoder.transcode("IH3"), "ɪ");
        assert_eq!(transcoder.transcode("IH9"), "ɪ");
    }

    #[test]
    fn test_first_digit_wins() {
        // Malformed multi-digit token: the first digit found sets the
        // stress, every digit is stripped from the base.
        let transcoder = IpaTranscoder::new();
        assert_eq!(transcoder.transcode("IH2K1"), "ˌIHK");
        assert_eq!(transcoder.transcode("IH1K2"), "ˈIHK");
    }

    #[test]
    fn test_unknown_symbol_passthrough() {
        let transcoder = IpaTranscoder::new();
        assert_eq!(transcoder.transcode("QQ"), "QQ");
        assert_eq!(transcoder.transcode("QQ1"), "ˈQQ");
    }

    #[test]
    fn test_passthrough_is_idempotent() {
        let transcoder = IpaTranscoder::new();
        let once = transcoder.transcode("QQ");
        let twice = transcoder.transcode(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_input() {
        let transcoder = IpaTranscoder::new();
        assert_eq!(transcoder.transcode(""), "");
    }

    #[test]
    fn test_digit_only_token() {
        let transcoder = IpaTranscoder::new();
        assert_eq!(transcoder.transcode("0"), "");
        assert_eq!(transcoder.transcode("1"), "ˈ");
    }

    #[test]
    fn test_token_count_preserved() {
        let transcoder = IpaTranscoder::new();
        let input = "HH AH0 L OW1";
        let output = transcoder.transcode(input);
        assert_eq!(
            input.split(' ').count(),
            output.split(' ').count()
        );
        assert_eq!(output, "h ʌ l ˈoʊ");
    }

    #[test]
    fn test_diphthongs_and_affricates() {
        let transcoder = IpaTranscoder::new();
        assert_eq!(transcoder.transcode("JH OY1 N"), "dʒ ˈɔɪ n");
        assert_eq!(transcoder.transcode("CH AW2"), "tʃ ˌaʊ");
    }
}
