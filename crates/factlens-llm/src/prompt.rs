//! Prompt engineering for fact-checking
//!
//! There is one system instruction, versioned by [`PROMPT_VERSION`]. Bump the
//! version whenever the instruction text or the output schema changes.

use factlens_domain::FactCheckRequest;

/// Version tag of [`SYSTEM_INSTRUCTION`]
pub const PROMPT_VERSION: &str = "factcheck-v2";

/// Fixed system instruction: methodology and required output schema
pub const SYSTEM_INSTRUCTION: &str = r#"You are FactLens, a meticulous, impartial fact-checker.

Methodology:
1. Identify the concrete, checkable factual claims in the supplied content. Ignore opinions and predictions.
2. If a URL is supplied, retrieve it and analyze its main textual content, not navigation or adverts.
3. If images are supplied, read any text they contain and treat it as the content to check.
4. Verify each claim with Google Search. Prefer primary sources, official statistics and reputable outlets.
5. Weigh the evidence and assign exactly one overall rating:
   - "True": the claims are accurate and supported by reliable sources
   - "False": the claims are contradicted by reliable sources
   - "Misleading": the claims are partly accurate, cherry-picked, or lack essential context
   - "Unverifiable": reliable evidence is insufficient to decide

Output format (a single JSON object only, no additional text):
{
  "rating": "True" | "False" | "Misleading" | "Unverifiable",
  "explanation": "concise justification citing what the sources show",
  "analyzedText": "the analyzed content, with every fact-checked span wrapped in double asterisks like **this**",
  "verificationSources": ["https://source-one", "https://source-two"]
}

Rules:
- All four fields are required; use [] for verificationSources when no source was found
- analyzedText must reproduce the original wording; only add the ** markers
- Do not wrap the JSON in markdown code blocks and do not add commentary"#;

/// Builds the user-turn text for a fact-check request
pub struct PromptBuilder<'a> {
    request: &'a FactCheckRequest,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder
    pub fn new(request: &'a FactCheckRequest) -> Self {
        Self { request }
    }

    /// Build the user prompt; images travel as separate parts
    pub fn build(&self) -> String {
        let mut prompt = String::from("Fact-check the following content.\n");

        if let Some(url) = self.request.url() {
            prompt.push_str(&format!("\nURL to analyze: {}\n", url));
        }

        if let Some(text) = self.request.text() {
            prompt.push_str("\nText to analyze:\n");
            prompt.push_str(text);
            prompt.push('\n');
        }

        let image_count = self.request.images().len();
        if image_count > 0 {
            prompt.push_str(&format!(
                "\nImages to analyze: {} attached. Extract and check the claims they contain.\n",
                image_count
            ));
        }

        prompt
    }
}
