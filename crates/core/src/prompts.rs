//! Text sent to the AI designer.

/// Canned prompts offered as quick ideas.
pub const QUICK_IDEAS: [&str; 5] = [
    "Give me a summer beach vibe",
    "Classic all-black stealth mode",
    "Retro 80s neon aesthetic",
    "Nature-inspired forest theme",
    "Cyberpunk futuristic look",
];

/// Instruction prefixed to every user prompt.
pub const DESIGNER_INSTRUCTION: &str = "\
You are a sneaker designer AI. Based on the user's mood, theme, or style description, generate a color scheme for a sneaker.

You MUST respond with ONLY a valid JSON object in this exact format, no other text:
{
  \"sole\": \"#hexcolor\",
  \"upper\": \"#hexcolor\",
  \"laces\": \"#hexcolor\",
  \"logo\": \"#hexcolor\"
}

Rules:
- All colors must be valid 6-digit hex codes starting with #
- Choose colors that work well together and match the described mood
- Be creative but ensure good contrast and visibility
- The logo should be visible against the upper color";

/// Combine the fixed instruction with a user request.
#[must_use]
pub fn build_designer_prompt(user_prompt: &str) -> String {
    format!("{DESIGNER_INSTRUCTION}\n\nUser Request: {user_prompt}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_layout() {
        let prompt = build_designer_prompt("Retro 80s neon aesthetic");
        assert!(prompt.starts_with("You are a sneaker designer AI."));
        assert!(prompt.ends_with("against the upper color\n\nUser Request: Retro 80s neon aesthetic"));
    }

    #[test]
    fn test_instruction_names_every_part() {
        for part in crate::Part::ALL {
            assert!(DESIGNER_INSTRUCTION.contains(&format!("\"{}\"", part.key())));
        }
    }
}
