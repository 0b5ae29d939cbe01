use interpreter_domain::LanguagePair;

/// Builds the single instruction sent to the text-generation service: target
/// language, interpreter register, and the literal source text tagged with
/// its language name.
pub fn build_instruction(pair: LanguagePair, text: &str) -> String {
    format!(
        "Translate the following text into {output} the way a professional \
interpreter would: natural and accurate. Keep the colloquial register and \
preserve cultural context and nuance. Keep it concise.\n\n\
Source ({input}): {text}",
        output = pair.output.name(),
        input = pair.input.name(),
    )
}

#[cfg(test)]
mod tests {
    use interpreter_domain::Language;

    use super::*;

    #[test]
    fn instruction_names_both_languages_and_embeds_the_source() {
        let pair = LanguagePair::new(Language::Korean, Language::Vietnamese);
        let instruction = build_instruction(pair, "안녕하세요");
        assert!(instruction.contains("into Vietnamese"));
        assert!(instruction.contains("Source (Korean): 안녕하세요"));
        assert!(instruction.contains("colloquial register"));
    }
}
