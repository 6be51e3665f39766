//! Prompt composition for the restyle flow.
//!
//! Turns a raw vision-model description into a bounded, well-formed prompt
//! for the image-generation model: strip boilerplate lead-ins, bound the
//! text at a fixed budget on a word boundary, then render the fixed artwork
//! template.

use crate::{prompts, Error, Result};

/// Content budget, in characters, for the description portion of a composed
/// prompt. The trailing ellipsis of a truncated description counts against
/// this budget, which is what makes [`truncate`] idempotent.
pub const MAX_DESCRIPTION_CHARS: usize = 200;

/// Returned by [`truncate`] when not even the first word fits the budget.
pub const FALLBACK_DESCRIPTION: &str = "An image.";

const ELLIPSIS: &str = "...";

/// Lead-in phrases vision models like to prepend to a description.
/// Tested in priority order; only the first match is removed.
const BOILERPLATE_PREFIXES: [&str; 5] = [
    "Here's a description of the image suitable for an artist to recreate:",
    "Here's a description of the image suitable for an artist to redraw:",
    "The image depicts:",
    "Description:",
    "The image is",
];

/// Strip surrounding whitespace and at most one known boilerplate prefix
/// (matched case-insensitively) from a raw vision description.
///
/// Fails with [`Error::EmptyDescription`] when nothing usable remains, so
/// the restyle flow can abort before calling the generation service.
pub fn normalize(description: &str) -> Result<String> {
    let mut text = description.trim();

    for prefix in BOILERPLATE_PREFIXES {
        let matched = text
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix));
        if matched {
            text = text[prefix.len()..].trim();
            break;
        }
    }

    if text.is_empty() {
        return Err(Error::EmptyDescription);
    }

    Ok(text.to_string())
}

/// Bound a cleaned description at [`MAX_DESCRIPTION_CHARS`].
///
/// Text within the budget is returned unchanged. Longer text is cut on a
/// word boundary and terminated with an ellipsis that fits inside the
/// budget. If not even the first word fits, [`FALLBACK_DESCRIPTION`] is
/// returned so the result is never empty or malformed.
pub fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_DESCRIPTION_CHARS {
        return text.to_string();
    }

    let budget = MAX_DESCRIPTION_CHARS - ELLIPSIS.len();
    let mut kept: Vec<&str> = Vec::new();
    let mut length = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let candidate = if kept.is_empty() {
            word_len
        } else {
            length + 1 + word_len
        };
        if candidate > budget {
            break;
        }
        kept.push(word);
        length = candidate;
    }

    if kept.is_empty() {
        return FALLBACK_DESCRIPTION.to_string();
    }

    let mut result = kept.join(" ");
    result.push_str(ELLIPSIS);
    result
}

/// Render the final generation prompt from a bounded description and a
/// user-supplied style label. Pure; same inputs always produce the same
/// string.
pub fn compose(description: &str, style: &str) -> String {
    prompts::render(
        prompts::RESTYLE,
        &[("description", description), ("style", style)],
    )
}

/// Full normalize -> truncate -> compose chain used by the restyle flow.
pub fn restyle_prompt(description: &str, style: &str) -> Result<String> {
    let cleaned = normalize(description)?;
    Ok(compose(&truncate(&cleaned), style))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_strips_each_known_prefix_in_any_casing() {
        for prefix in BOILERPLATE_PREFIXES {
            for variant in [
                prefix.to_string(),
                prefix.to_uppercase(),
                prefix.to_lowercase(),
            ] {
                let input = format!("  {} A fox in the snow.  ", variant);
                assert_eq!(
                    normalize(&input).unwrap(),
                    "A fox in the snow.",
                    "prefix variant: {:?}",
                    variant
                );
            }
        }
    }

    #[test]
    fn test_normalize_removes_at_most_one_prefix() {
        // "The image is ..." would also match, but only the first hit
        // ("Description:") is removed.
        let input = "Description: The image is a fox.";
        assert_eq!(normalize(input).unwrap(), "The image is a fox.");
    }

    #[test]
    fn test_normalize_keeps_unprefixed_text() {
        assert_eq!(
            normalize("A quiet harbor at dusk.").unwrap(),
            "A quiet harbor at dusk."
        );
    }

    #[test]
    fn test_normalize_rejects_empty_and_whitespace() {
        assert!(matches!(normalize(""), Err(Error::EmptyDescription)));
        assert!(matches!(normalize("   "), Err(Error::EmptyDescription)));
    }

    #[test]
    fn test_normalize_rejects_prefix_only_input() {
        assert!(matches!(
            normalize("Description:   "),
            Err(Error::EmptyDescription)
        ));
    }

    #[test]
    fn test_truncate_returns_short_text_unchanged() {
        let exactly_at_budget = "x".repeat(MAX_DESCRIPTION_CHARS);
        assert_eq!(truncate(&exactly_at_budget), exactly_at_budget);
        assert_eq!(truncate("A red fox."), "A red fox.");
        assert_eq!(truncate(""), "");
    }

    #[test]
    fn test_truncate_cuts_on_word_boundary_with_ellipsis() {
        // 50 four-letter words: 249 characters once joined, over the budget.
        let words = vec!["word"; 50];
        let input = words.join(" ");

        let result = truncate(&input);

        assert!(result.ends_with(ELLIPSIS));
        assert!(result.chars().count() <= MAX_DESCRIPTION_CHARS);
        // 39 words fit within the 197-character word budget (39 * 5 - 1 = 194).
        let expected = format!("{}...", vec!["word"; 39].join(" "));
        assert_eq!(result, expected);
    }

    #[test]
    fn test_truncate_ljust_example() {
        // Python equivalent: "The image depicts ".ljust(250, 'x')
        let input = format!("{:x<250}", "The image depicts ");
        assert!(input.len() > MAX_DESCRIPTION_CHARS);

        let result = truncate(&input);

        assert!(result.ends_with(ELLIPSIS));
        assert!(result.chars().count() <= MAX_DESCRIPTION_CHARS);
        // The padded tail is one giant token that can never fit.
        assert_eq!(result, "The image depicts...");
    }

    #[test]
    fn test_truncate_is_idempotent() {
        let inputs = [
            "short text".to_string(),
            vec!["word"; 50].join(" "),
            "y".repeat(250),
            format!("{:x<250}", "The image depicts "),
        ];
        for input in inputs {
            let once = truncate(&input);
            assert_eq!(truncate(&once), once, "input: {:?}", &input[..20]);
        }
    }

    #[test]
    fn test_truncate_falls_back_on_pathological_token() {
        assert_eq!(truncate(&"y".repeat(250)), FALLBACK_DESCRIPTION);
    }

    #[test]
    fn test_compose_contains_inputs_verbatim() {
        let bounded = "A red fox curled on mossy stone.";
        let composed = compose(bounded, "ukiyo-e");

        assert!(composed.contains(bounded));
        assert!(composed.contains("ukiyo-e"));
        assert!(composed.len() > bounded.len());
    }

    #[test]
    fn test_compose_is_deterministic() {
        assert_eq!(compose("A barn.", "pixel art"), compose("A barn.", "pixel art"));
    }

    #[test]
    fn test_restyle_prompt_end_to_end_example() {
        let prompt =
            restyle_prompt("Description: A red circle on white background.", "watercolor")
                .unwrap();

        assert_eq!(
            prompt,
            "An artwork depicting: A red circle on white background.. Render this scene \
             in a watercolor style. Focus on the artistic medium and overall aesthetic, \
             ensuring the main subjects are clearly recognizable. The image should be \
             visually appealing and harmonious. Realistic photo quality, high detail."
        );
    }

    #[test]
    fn test_restyle_prompt_propagates_empty_description() {
        assert!(matches!(
            restyle_prompt("   ", "watercolor"),
            Err(Error::EmptyDescription)
        ));
    }
}
