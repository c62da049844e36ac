//! System prompt templates, one per summarizer.
//!
//! Every template asks for the same three tagged sections (`<thinking>`,
//! `<summary>`, `<twitter>`) so the extractor does not care which template
//! produced a response. Registering a summarizer is one row in [`TEMPLATES`].

use std::fmt::Write;

use crate::core::models::SummarizerConfig;

/// Upper bound on the length of the social post, in characters.
pub const SOCIAL_TEXT_MAX_CHARS: usize = 200;

/// A fixed translation for a proper noun or piece of jargon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlossaryEntry {
    pub source: &'static str,
    pub target: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptTemplate {
    /// "What is new, who is it for" framing of a cloud service update, hashtags allowed.
    CloudUpdate,
    /// News framing with mandatory glossary substitutions and no hashtags.
    Glossary(&'static [GlossaryEntry]),
}

pub const JAPANESE_GLOSSARY: &[GlossaryEntry] = &[
    GlossaryEntry { source: "Amazon Web Services", target: "アマゾン ウェブ サービス" },
    GlossaryEntry { source: "Andy Jassy", target: "アンディ・ジャシー" },
    GlossaryEntry { source: "Matt Garman", target: "マット・ガーマン" },
    GlossaryEntry { source: "Swami Sivasubramanian", target: "スワミ・シバスブラマニアン" },
    GlossaryEntry { source: "Werner Vogels", target: "ヴァーナー・ボーガス" },
    GlossaryEntry { source: "Anthropic", target: "Anthropic" },
    GlossaryEntry { source: "generally available", target: "一般提供開始" },
    GlossaryEntry { source: "preview", target: "プレビュー" },
    GlossaryEntry { source: "Region", target: "リージョン" },
    GlossaryEntry { source: "Availability Zone", target: "アベイラビリティーゾーン" },
    GlossaryEntry { source: "instance", target: "インスタンス" },
    GlossaryEntry { source: "serverless", target: "サーバーレス" },
    GlossaryEntry { source: "foundation model", target: "基盤モデル" },
    GlossaryEntry { source: "generative AI", target: "生成 AI" },
    GlossaryEntry { source: "fine-tuning", target: "ファインチューニング" },
    GlossaryEntry { source: "guardrails", target: "ガードレール" },
];

/// Summarizer name to template. Names not listed fall back to [`PromptTemplate::CloudUpdate`].
pub const TEMPLATES: &[(&str, PromptTemplate)] = &[
    ("AwsSolutionsArchitectEnglish", PromptTemplate::CloudUpdate),
    ("AwsSolutionsArchitectJapanese", PromptTemplate::CloudUpdate),
    (
        "AwsNewsEditorJapanese",
        PromptTemplate::Glossary(JAPANESE_GLOSSARY),
    ),
];

#[must_use]
pub fn template_for(summarizer_name: &str) -> PromptTemplate {
    TEMPLATES
        .iter()
        .find(|(name, _)| *name == summarizer_name)
        .map_or(PromptTemplate::CloudUpdate, |(_, template)| *template)
}

/// Render the system prompt for a summarizer.
#[must_use]
pub fn build_system_prompt(summarizer_name: &str, summarizer: &SummarizerConfig) -> String {
    match template_for(summarizer_name) {
        PromptTemplate::CloudUpdate => cloud_update_prompt(summarizer),
        PromptTemplate::Glossary(entries) => glossary_prompt(summarizer, entries),
    }
}

/// The article is the only user turn, delimited so the model can't confuse it with instructions.
#[must_use]
pub fn wrap_input(content: &str) -> String {
    format!("<input>{content}</input>")
}

fn cloud_update_prompt(summarizer: &SummarizerConfig) -> String {
    let SummarizerConfig {
        output_language,
        persona,
    } = summarizer;
    format!(
        r#"
<persona>You are a professional {persona}. </persona>
<instruction>
Describe a new update in <input></input> tags in bullet points to describe "What is the new feature?", and "Who is this update good for". The description shall be output in <thinking></thinking> tags, and each thinking sentence must start with the bullet point "- " and end with "\n".
Make the final summary as per <summaryRule></summaryRule> tags. Try to shorten output for easy reading. You are not allowed to utilize any information except in the input. output format shall be in accordance with <outputFormat></outputFormat> tags.
Summarize the description in <thinking></thinking> tag and 1 or 2 hashtags for posting to X (Twitter) within {SOCIAL_TEXT_MAX_CHARS} characters and the description shall be output in <twitter></twitter> tag.
</instruction>
<outputLanguage>In {output_language}.</outputLanguage>
<summaryRule>The final summary must consists of 2 or 3 sentences. The output format is defined in <outputFormat></outputFormat> tags.</summaryRule>
<outputFormat><thinking>(bullet points of the input)</thinking><summary>(final summary)</summary><twitter>(summary to post X(Twitter))</twitter></outputFormat>
Follow the instructions.
"#
    )
}

fn glossary_prompt(summarizer: &SummarizerConfig, entries: &[GlossaryEntry]) -> String {
    let SummarizerConfig {
        output_language,
        persona,
    } = summarizer;

    let mut glossary = String::new();
    for entry in entries {
        let _ = writeln!(glossary, "{} => {}", entry.source, entry.target);
    }

    format!(
        r#"
<persona>You are a professional {persona}. </persona>
<instruction>
Read the article in <input></input> tags and list its key points as bullet points: what was announced, and who benefits from it. The bullet points shall be output in <thinking></thinking> tags, and each bullet must start with "- " and end with "\n".
Write the final summary as per <summaryRule></summaryRule> tags. Use only information contained in the input.
Write a post for X (Twitter) as per <twitterRule></twitterRule> tags and output it in <twitter></twitter> tags.
When a term listed in <glossary></glossary> tags appears in the input, you MUST write it in the output exactly as the right-hand side of its entry. These substitutions are mandatory. Any other spelling or translation of a listed term is an error.
</instruction>
<glossary>
{glossary}</glossary>
<outputLanguage>In {output_language}.</outputLanguage>
<summaryRule>The final summary must consist of 2 or 3 sentences.</summaryRule>
<twitterRule>At most {SOCIAL_TEXT_MAX_CHARS} characters on a single line. Neutral, factual tone without exaggeration or emoji. Do not use hashtags.</twitterRule>
<outputFormat><thinking>(bullet points of the input)</thinking><summary>(final summary)</summary><twitter>(post for X)</twitter></outputFormat>
Follow the instructions.
"#
    )
}
