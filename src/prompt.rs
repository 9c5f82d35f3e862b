//! Prompt construction.
//!
//! The model is told exactly which callout to produce; nothing downstream
//! parses it back, so this template is the whole format contract.

const FORMAT_INSTRUCTIONS: &str = "Please summarize the following article using this exact format. \
IMPORTANT Use only this format and no other:

> [!Abstract]-
>**Summary:**
\t>>[One-sentence overview of the article's main point in 30-45 words.]
\t>
>**The details:**
\t> - [Key point #1]
\t> - [Key point #2]
\t> - [Key point #3]
(Include 3-5 concise bullet points highlighting the most important factual or contextual details.)
>
>**Why it matters:**
\t>>[Briefly explain the significance or impact of the article's content. \
Focus on why readers should care or what the broader implications are.]

Make sure the summary is:
- Succinct (no fluff)
- Fact-based
- Easy to skim
- Written in plain, neutral, professional language
- Written in markdown format";

/// Build the full prompt for `article`.
pub fn build(article: &str) -> String {
    format!(
        "{}\n\nArticle to summarize:\n{}",
        FORMAT_INSTRUCTIONS,
        article.trim()
    )
}
