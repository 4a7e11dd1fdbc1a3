//! The three prompt templates sent to Gemini.
//!
//! Each template embeds the user/extracted content verbatim, with no
//! escaping; the "Return only a valid JSON object" instruction is the sole
//! schema-enforcement mechanism. Known limitation: embedded content can
//! attempt prompt injection, which is out of scope here.

/// Analyze a user-supplied review. Requests the 9-field analysis schema.
pub fn analysis_prompt(review: &str) -> String {
    format!(
        r#"You are a product review analyzer with expertise in detecting fake reviews. Please analyze the following product review:

"{review}"

Please provide the following analysis in JSON format:
1. Sentiment: Overall sentiment (positive, negative, or neutral)
2. Score: A numerical score from 1-10
3. Key Points: List of main points from the review (maximum 5)
4. Strengths: Product strengths mentioned (maximum 3)
5. Weaknesses: Product weaknesses mentioned (maximum 3)
6. Summary: A brief summary of the review (maximum 2 sentences)
7. Improvement Suggestions: Suggested improvements based on the review (maximum 2)
8. AuthenticityScore: A numerical score from 1-100 indicating how likely the review is genuine (where 100 is definitely genuine)
9. AuthenticityAssessment: A brief assessment of whether the review seems authentic or potentially fake, and what factors led to this determination

Factors that might indicate a fake review:
- Overly positive or negative language without specific details
- Generic statements that could apply to any product
- Excessive use of brand names
- Language inconsistencies or awkward phrasing
- Lack of personal experience details

Factors indicating authentic reviews:
- Specific details about product usage
- Balanced pros and cons
- Specific context about how they used the product
- Mentions of comparable products
- Natural language patterns

Return only a valid JSON object with these fields."#
    )
}

/// Synthesize a review from scraped page content. The caller has already
/// truncated `content` to the prompt-embedding limit.
pub fn synthesis_prompt(content: &str) -> String {
    format!(
        r#"You are a product reviewer. I will provide you with content extracted from a product page.
Based on this content, generate a comprehensive product review.

Product page content:
"{content}"

Please write a detailed review of this product that includes:
1. Product name and basic description
2. Key features and specifications
3. Perceived quality and build
4. Value for money
5. Target audience
6. Overall assessment

Keep the review balanced, honest, and informative. The length should be around 300-500 words."#
    )
}

/// Analyze a synthesized review. Same schema as [`analysis_prompt`] plus
/// ProductName and the full review text.
pub fn scrape_analysis_prompt(review: &str) -> String {
    format!(
        r#"You are a product review analyzer with expertise in detecting fake reviews. Please analyze the following product review:

"{review}"

Please provide the following analysis in JSON format:
1. Sentiment: Overall sentiment (positive, negative, or neutral)
2. Score: A numerical score from 1-10
3. Key Points: List of main points from the review (maximum 5)
4. Strengths: Product strengths mentioned (maximum 3)
5. Weaknesses: Product weaknesses mentioned (maximum 3)
6. Summary: A brief summary of the review (maximum 2 sentences)
7. Improvement Suggestions: Suggested improvements based on the review (maximum 2)
8. ProductName: The name of the product
9. Review: The full text of the generated review
10. AuthenticityScore: A numerical score from 1-100 indicating how likely the review is genuine (where 100 is definitely genuine)
11. AuthenticityAssessment: A brief assessment of whether the review seems authentic or potentially fabricated

Return only a valid JSON object with these fields."#
    )
}
