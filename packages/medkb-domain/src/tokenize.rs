use unicode_normalization::UnicodeNormalization;
use unicode_script::{Script, UnicodeScript};

/// Normalize `text` into matchable tokens.
///
/// The corpus mixes Chinese and English. Latin-script alphanumeric runs
/// become word tokens; CJK characters become one token each; characters
/// from any other script degrade to one token per character so that
/// unknown scripts still match exactly. Punctuation, symbols, and
/// whitespace separate tokens.
pub fn tokenize(text: &str) -> Vec<String> {
	let mut out = Vec::new();
	let mut word = String::new();

	for ch in text.nfkc() {
		if is_word_char(ch) {
			word.extend(ch.to_lowercase());

			continue;
		}

		if !word.is_empty() {
			out.push(std::mem::take(&mut word));
		}

		if is_cjk(ch) || (ch.is_alphanumeric() && !ch.is_ascii()) {
			out.push(ch.to_lowercase().collect());
		}
	}

	if !word.is_empty() {
		out.push(word);
	}

	out
}

/// Tokenize a query, keeping the first occurrence of each token.
pub fn query_tokens(text: &str) -> Vec<String> {
	let mut out = Vec::new();

	for token in tokenize(text) {
		if !out.contains(&token) {
			out.push(token);
		}
	}

	out
}

fn is_word_char(ch: char) -> bool {
	ch.is_ascii_alphanumeric() || (ch.is_alphabetic() && ch.script() == Script::Latin)
}

pub fn is_cjk(ch: char) -> bool {
	matches!(
		ch.script(),
		Script::Han | Script::Hiragana | Script::Katakana | Script::Hangul | Script::Bopomofo
	)
}

pub fn contains_cjk(input: &str) -> bool {
	input.chars().any(is_cjk)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn latin_text_splits_on_whitespace_and_punctuation() {
		assert_eq!(tokenize("Hello, chemo-therapy world"), vec![
			"hello",
			"chemo",
			"therapy",
			"world"
		]);
	}

	#[test]
	fn cjk_text_splits_per_character() {
		assert_eq!(tokenize("化疗 注意事项"), vec!["化", "疗", "注", "意", "事", "项"]);
	}

	#[test]
	fn mixed_text_keeps_both_segmentations() {
		assert_eq!(tokenize("ALL患儿"), vec!["all", "患", "儿"]);
	}

	#[test]
	fn accented_latin_letters_stay_in_the_word_run() {
		assert_eq!(tokenize("café au lait"), vec!["café", "au", "lait"]);
		assert_eq!(tokenize("naïve Übung"), vec!["naïve", "übung"]);
	}

	#[test]
	fn nfkc_folds_fullwidth_forms() {
		assert_eq!(tokenize("ＡＢＣ１２３"), vec!["abc123"]);
	}

	#[test]
	fn punctuation_only_text_yields_no_tokens() {
		assert!(tokenize("，。！？ --- ...").is_empty());
	}

	#[test]
	fn query_tokens_deduplicate_in_order() {
		assert_eq!(query_tokens("化疗 化疗 diet diet"), vec!["化", "疗", "diet"]);
	}

	#[test]
	fn detects_cjk() {
		assert!(contains_cjk("化疗"));
		assert!(!contains_cjk("chemo"));
	}
}
