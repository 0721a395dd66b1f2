use crate::icons::AVAILABLE_ICONS;

use super::parse::{MAX_CATEGORIES, MIN_CATEGORIES};

/// Instruction sent to the completion model for one entry.
pub fn build_prompt(title: &str, content: &str) -> String {
    let icons = AVAILABLE_ICONS.join(", ");

    format!(
        r#"You are an expert content editor and classifier. Analyze the title and content below, then improve and structure them.

Follow these instructions exactly:
1. **Improve the title**: write a new title that is clearer, more descriptive and more engaging than the original.
2. **Improve the content**: rewrite or reformat the content so it is easier to read, fixing grammar and improving structure. Simple Markdown such as bold text or lists is allowed.
3. **Choose an icon**: from the following list of available icons, pick ONE and only ONE that best represents the topic: [{icons}].
4. **Generate categories with emojis**: based on the content, produce a list of {MIN_CATEGORIES} to {MAX_CATEGORIES} relevant categories. Every category MUST have the format "emoji Category Name". For example: ["🤖 Technology", "💡 Productivity"].

Original title:
"{title}"

Original content:
"{content}"
"#
    )
}
